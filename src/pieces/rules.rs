//! Movement and capture legality.
//!
//! Every kind is one entry in a static dispatch table of pure functions
//! `(piece, from, to, grid)`. Adding a kind means adding one entry.
//!
//! ## Predicates
//!
//! - [`is_valid_move`]: the kind's default movement rule
//! - [`is_valid_capture`]: the kind's default capture rule
//! - [`is_valid_alt_move`] / [`is_valid_alt_capture`]: the piece's overlay,
//!   always false/invalid when no overlay is installed
//! - [`can_move`] / [`capture`]: default OR overlay, what the orchestrator
//!   actually checks
//!
//! All predicates are false for dead or unplaced pieces and for targets
//! off the board.

use serde::{Deserialize, Serialize};
use smallvec::SmallVec;

use super::kind::PieceKind;
use super::piece::{Piece, PieceId};
use crate::board::Grid;
use crate::core::Coord;

/// Outcome of a capture legality check.
///
/// Never an error: the caller decides whether to remove `captured`.
#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct CaptureResult {
    pub valid: bool,
    /// Pieces removed if the capture is applied, in removal order.
    pub captured: SmallVec<[PieceId; 2]>,
}

impl CaptureResult {
    #[must_use]
    pub fn invalid() -> Self {
        Self::default()
    }

    #[must_use]
    pub fn single(victim: PieceId) -> Self {
        let mut captured = SmallVec::new();
        captured.push(victim);
        Self { valid: true, captured }
    }

    #[must_use]
    pub fn is_valid(&self) -> bool {
        self.valid
    }
}

type MoveFn = fn(&Piece, Coord, Coord, &Grid) -> bool;
type CaptureFn = fn(&Piece, Coord, Coord, &Grid) -> CaptureResult;

/// Default rules for one kind.
struct KindRules {
    kind: PieceKind,
    moves: MoveFn,
    captures: CaptureFn,
}

/// Indexed by [`PieceKind::index`].
static RULES: [KindRules; 8] = [
    KindRules { kind: PieceKind::Pawn, moves: pawn_move, captures: pawn_capture },
    KindRules { kind: PieceKind::Rook, moves: rook_move, captures: rook_capture },
    KindRules { kind: PieceKind::Knight, moves: knight_move, captures: knight_capture },
    KindRules { kind: PieceKind::Bishop, moves: bishop_move, captures: bishop_capture },
    KindRules { kind: PieceKind::Queen, moves: queen_move, captures: queen_capture },
    KindRules { kind: PieceKind::King, moves: king_move, captures: king_capture },
    KindRules { kind: PieceKind::Jumper, moves: jumper_move, captures: jumper_capture },
    KindRules { kind: PieceKind::Ogre, moves: ogre_move, captures: ogre_capture },
];

#[inline]
fn rules_for(kind: PieceKind) -> &'static KindRules {
    let rules = &RULES[kind.index()];
    debug_assert_eq!(rules.kind, kind, "rule table out of order");
    rules
}

/// Source tile for a rule check, or `None` if the check must fail.
fn origin(piece: &Piece, to: Coord) -> Option<Coord> {
    if !piece.is_alive() || !to.on_board() {
        return None;
    }
    piece.tile()
}

/// The kind's default movement rule.
#[must_use]
pub fn is_valid_move(piece: &Piece, to: Coord, grid: &Grid) -> bool {
    origin(piece, to).is_some_and(|from| (rules_for(piece.kind).moves)(piece, from, to, grid))
}

/// The kind's default capture rule.
#[must_use]
pub fn is_valid_capture(piece: &Piece, to: Coord, grid: &Grid) -> CaptureResult {
    match origin(piece, to) {
        Some(from) => (rules_for(piece.kind).captures)(piece, from, to, grid),
        None => CaptureResult::invalid(),
    }
}

/// The piece's alternate movement rule, if any.
#[must_use]
pub fn is_valid_alt_move(piece: &Piece, to: Coord, grid: &Grid) -> bool {
    match (origin(piece, to), piece.overlay.alt_move) {
        (Some(from), Some(rule)) => rule.permits(piece.color, from, to, grid),
        _ => false,
    }
}

/// The piece's alternate capture rule, if any.
#[must_use]
pub fn is_valid_alt_capture(piece: &Piece, to: Coord, grid: &Grid) -> CaptureResult {
    match (origin(piece, to), piece.overlay.alt_capture) {
        (Some(from), Some(rule)) => rule.evaluate(piece.color, from, to, grid),
        _ => CaptureResult::invalid(),
    }
}

/// Default move OR alternate move.
#[must_use]
pub fn can_move(piece: &Piece, to: Coord, grid: &Grid) -> bool {
    is_valid_move(piece, to, grid) || is_valid_alt_move(piece, to, grid)
}

/// Default capture, falling back to the alternate capture.
#[must_use]
pub fn capture(piece: &Piece, to: Coord, grid: &Grid) -> CaptureResult {
    let result = is_valid_capture(piece, to, grid);
    if result.valid {
        return result;
    }
    is_valid_alt_capture(piece, to, grid)
}

/// A tile a piece may legally go to.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum Destination {
    Move(Coord),
    Capture(Coord, CaptureResult),
}

impl Destination {
    #[must_use]
    pub fn coord(&self) -> Coord {
        match self {
            Destination::Move(c) | Destination::Capture(c, _) => *c,
        }
    }
}

/// Every legal destination for a piece. Captures take precedence.
#[must_use]
pub fn legal_destinations(piece: &Piece, grid: &Grid) -> Vec<Destination> {
    let mut out = Vec::new();
    if piece.tile().is_none() {
        return out;
    }
    for to in Coord::all() {
        let result = capture(piece, to, grid);
        if result.valid {
            out.push(Destination::Capture(to, result));
        } else if can_move(piece, to, grid) {
            out.push(Destination::Move(to));
        }
    }
    out
}

/// True iff every tile strictly between `from` and `to` is empty.
///
/// Walks unit steps from `from` toward `to`; only meaningful when the two
/// are aligned on a rank, file or diagonal.
#[must_use]
pub fn is_path_clear(from: Coord, to: Coord, grid: &Grid) -> bool {
    let step = (to - from).signum();
    let mut cur = from + step;
    while cur != to {
        if grid.is_occupied(cur) {
            return false;
        }
        cur = cur + step;
    }
    true
}

// === Geometry ===

fn straight(d: Coord) -> bool {
    (d.x == 0) != (d.y == 0)
}

fn diagonal(d: Coord) -> bool {
    d.x != 0 && d.x.abs() == d.y.abs()
}

fn knight_jump(d: Coord) -> bool {
    let (ax, ay) = (d.x.abs(), d.y.abs());
    (ax == 2 && ay == 1) || (ax == 1 && ay == 2)
}

fn adjacent(d: Coord) -> bool {
    d.chebyshev_norm() == 1
}

fn ogre_leap(d: Coord) -> bool {
    (d.x.abs() == 2 && d.y == 0) || (d.x == 0 && d.y.abs() == 2)
}

/// Capture of whatever enemy stands on `to`, if `shape` holds.
fn capture_on_target(piece: &Piece, to: Coord, grid: &Grid, shape: bool) -> CaptureResult {
    if !shape {
        return CaptureResult::invalid();
    }
    grid.enemy_at(to, piece.color)
        .map_or_else(CaptureResult::invalid, CaptureResult::single)
}

// === Pawn ===

fn pawn_move(piece: &Piece, from: Coord, to: Coord, grid: &Grid) -> bool {
    let fwd = piece.color.forward();
    let d = to - from;
    if d.x != 0 || grid.is_occupied(to) {
        return false;
    }
    if d.y == fwd {
        return true;
    }
    d.y == 2 * fwd
        && !piece.has_moved
        && from.y == piece.color.pawn_rank()
        && !grid.is_occupied(Coord::new(from.x, from.y + fwd))
}

fn pawn_capture(piece: &Piece, from: Coord, to: Coord, grid: &Grid) -> CaptureResult {
    let d = to - from;
    capture_on_target(piece, to, grid, d.x.abs() == 1 && d.y == piece.color.forward())
}

// === Sliders ===

fn rook_move(_piece: &Piece, from: Coord, to: Coord, grid: &Grid) -> bool {
    !grid.is_occupied(to) && straight(to - from) && is_path_clear(from, to, grid)
}

fn rook_capture(piece: &Piece, from: Coord, to: Coord, grid: &Grid) -> CaptureResult {
    let shape = straight(to - from) && is_path_clear(from, to, grid);
    capture_on_target(piece, to, grid, shape)
}

fn bishop_move(_piece: &Piece, from: Coord, to: Coord, grid: &Grid) -> bool {
    !grid.is_occupied(to) && diagonal(to - from) && is_path_clear(from, to, grid)
}

fn bishop_capture(piece: &Piece, from: Coord, to: Coord, grid: &Grid) -> CaptureResult {
    let shape = diagonal(to - from) && is_path_clear(from, to, grid);
    capture_on_target(piece, to, grid, shape)
}

fn queen_move(_piece: &Piece, from: Coord, to: Coord, grid: &Grid) -> bool {
    let d = to - from;
    !grid.is_occupied(to) && (straight(d) || diagonal(d)) && is_path_clear(from, to, grid)
}

fn queen_capture(piece: &Piece, from: Coord, to: Coord, grid: &Grid) -> CaptureResult {
    let d = to - from;
    let shape = (straight(d) || diagonal(d)) && is_path_clear(from, to, grid);
    capture_on_target(piece, to, grid, shape)
}

// === Steppers ===

fn knight_move(_piece: &Piece, from: Coord, to: Coord, grid: &Grid) -> bool {
    !grid.is_occupied(to) && knight_jump(to - from)
}

fn knight_capture(piece: &Piece, from: Coord, to: Coord, grid: &Grid) -> CaptureResult {
    capture_on_target(piece, to, grid, knight_jump(to - from))
}

fn king_move(_piece: &Piece, from: Coord, to: Coord, grid: &Grid) -> bool {
    !grid.is_occupied(to) && adjacent(to - from)
}

fn king_capture(piece: &Piece, from: Coord, to: Coord, grid: &Grid) -> CaptureResult {
    capture_on_target(piece, to, grid, adjacent(to - from))
}

fn ogre_move(_piece: &Piece, from: Coord, to: Coord, grid: &Grid) -> bool {
    !grid.is_occupied(to) && ogre_leap(to - from)
}

fn ogre_capture(piece: &Piece, from: Coord, to: Coord, grid: &Grid) -> CaptureResult {
    capture_on_target(piece, to, grid, ogre_leap(to - from))
}

// === Jumper ===

fn jumper_move(piece: &Piece, from: Coord, to: Coord, grid: &Grid) -> bool {
    let d = to - from;
    !grid.is_occupied(to) && d.x.abs() == 1 && d.y == piece.color.forward()
}

/// Jumps an enemy on the midpoint, in any diagonal direction.
fn jumper_capture(piece: &Piece, from: Coord, to: Coord, grid: &Grid) -> CaptureResult {
    let d = to - from;
    if grid.is_occupied(to) || d.x.abs() != 2 || d.y.abs() != 2 {
        return CaptureResult::invalid();
    }
    grid.enemy_at(from + d.signum(), piece.color)
        .map_or_else(CaptureResult::invalid, CaptureResult::single)
}
