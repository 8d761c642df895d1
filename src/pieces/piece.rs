//! Piece instances.
//!
//! A `Piece` is owned by the [`Grid`](crate::board::Grid)'s piece
//! collection and addressed by its slot, a [`PieceId`]. Its `tile` field
//! is a back-reference into the grid: the grid keeps it in sync with the
//! tile's occupant, never the other way around.

use serde::{Deserialize, Serialize};

use super::kind::PieceKind;
use super::overlay::RuleOverlay;
use crate::core::{Color, Coord};

/// Slot of a piece in the grid's piece collection.
///
/// Slots are stable: transformation replaces the piece in place, so an id
/// keeps addressing "the piece on that logical slot".
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
pub struct PieceId(pub u32);

impl PieceId {
    #[must_use]
    pub const fn new(id: u32) -> Self {
        Self(id)
    }

    #[must_use]
    pub const fn index(self) -> usize {
        self.0 as usize
    }
}

impl std::fmt::Display for PieceId {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "Piece({})", self.0)
    }
}

/// Alive pieces sit on a tile; dead ones stay enumerable for graveyards.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum LifeState {
    Alive,
    Dead,
}

/// A playable unit.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct Piece {
    pub kind: PieceKind,
    pub color: Color,
    pub life: LifeState,
    /// Set by the first relocation. Gates the pawn double step.
    pub has_moved: bool,
    /// Back-reference to the occupied tile. `None` once dead.
    pub(crate) tile: Option<Coord>,
    /// Per-instance alternate rules installed by card effects.
    pub overlay: RuleOverlay,
}

impl Piece {
    /// A fresh, alive, unplaced piece.
    #[must_use]
    pub fn new(kind: PieceKind, color: Color) -> Self {
        Self {
            kind,
            color,
            life: LifeState::Alive,
            has_moved: false,
            tile: None,
            overlay: RuleOverlay::default(),
        }
    }

    #[must_use]
    pub fn is_alive(&self) -> bool {
        self.life == LifeState::Alive
    }

    /// Current tile, if alive and placed.
    #[must_use]
    pub fn tile(&self) -> Option<Coord> {
        self.tile
    }

    /// True if this piece's kind is one of `kinds`.
    #[must_use]
    pub fn is_of_kind(&self, kinds: &[PieceKind]) -> bool {
        kinds.contains(&self.kind)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_new_piece() {
        let piece = Piece::new(PieceKind::Rook, Color::Black);
        assert!(piece.is_alive());
        assert!(!piece.has_moved);
        assert_eq!(piece.tile(), None);
        assert!(piece.overlay.is_empty());
    }

    #[test]
    fn test_is_of_kind() {
        let piece = Piece::new(PieceKind::Bishop, Color::White);
        assert!(piece.is_of_kind(&[PieceKind::Rook, PieceKind::Bishop]));
        assert!(!piece.is_of_kind(&[PieceKind::Pawn]));
        assert!(!piece.is_of_kind(&[]));
    }

    #[test]
    fn test_piece_id_display() {
        assert_eq!(format!("{}", PieceId::new(12)), "Piece(12)");
        assert_eq!(PieceId::new(12).index(), 12);
    }
}
