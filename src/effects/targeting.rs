//! Effect targeting.
//!
//! Describes which pieces a card may pick:
//! - `TargetSpec`: a conjunction of filters
//! - `TargetFilter`: one condition on a candidate piece
//! - `TargetSelector`: enumerates the pieces on a grid matching a spec
//!
//! ```
//! use mutation_chess::board::{Grid, Layout};
//! use mutation_chess::core::Color;
//! use mutation_chess::effects::{TargetFilter, TargetSelector, TargetSpec};
//! use mutation_chess::pieces::PieceKind;
//!
//! let grid = Grid::from_layout(&Layout::standard()).unwrap();
//! let spec = TargetSpec::enemy().of_kinds([PieceKind::Pawn]).with(TargetFilter::ClearForward);
//! assert_eq!(TargetSelector::pieces(&grid, Color::White, &spec).len(), 8);
//! ```

use serde::{Deserialize, Serialize};

use crate::board::Grid;
use crate::core::{Color, Coord, CARDINAL_STEPS};
use crate::pieces::{Piece, PieceId, PieceKind};

/// One condition on a candidate piece. Evaluated relative to the player
/// who is playing the card.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub enum TargetFilter {
    /// Belongs to the acting player.
    Own,
    /// Belongs to the acting player's opponent.
    Enemy,
    /// Kind is one of the listed kinds.
    KindIn(Vec<PieceKind>),
    /// The tile one step forward (for the piece's own color) is on the
    /// board and empty.
    ClearForward,
    /// At least one cardinal neighbor is on the board and empty.
    FreeCardinalNeighbor,
}

impl TargetFilter {
    fn matches(&self, piece: &Piece, at: Coord, player: Color, grid: &Grid) -> bool {
        match self {
            TargetFilter::Own => piece.color == player,
            TargetFilter::Enemy => piece.color != player,
            TargetFilter::KindIn(kinds) => piece.is_of_kind(kinds),
            TargetFilter::ClearForward => {
                let ahead = forward_of(at, piece.color);
                ahead.on_board() && !grid.is_occupied(ahead)
            }
            TargetFilter::FreeCardinalNeighbor => free_cardinal_neighbors(at, grid).next().is_some(),
        }
    }
}

/// A conjunction of filters over alive, placed pieces.
#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct TargetSpec {
    pub filters: Vec<TargetFilter>,
}

impl TargetSpec {
    /// Any alive piece of either color.
    pub fn any() -> Self {
        Self::default()
    }

    /// The acting player's pieces.
    pub fn own() -> Self {
        Self::any().with(TargetFilter::Own)
    }

    /// The opponent's pieces.
    pub fn enemy() -> Self {
        Self::any().with(TargetFilter::Enemy)
    }

    #[must_use]
    pub fn with(mut self, filter: TargetFilter) -> Self {
        self.filters.push(filter);
        self
    }

    #[must_use]
    pub fn of_kinds(self, kinds: impl IntoIterator<Item = PieceKind>) -> Self {
        self.with(TargetFilter::KindIn(kinds.into_iter().collect()))
    }

    /// True if `piece`, standing on `at`, passes every filter.
    pub fn matches(&self, piece: &Piece, at: Coord, player: Color, grid: &Grid) -> bool {
        self.filters.iter().all(|f| f.matches(piece, at, player, grid))
    }
}

/// Enumerates targets on a grid.
pub struct TargetSelector;

impl TargetSelector {
    /// Alive, placed pieces matching `spec`, with their tiles, in slot order.
    pub fn pieces(grid: &Grid, player: Color, spec: &TargetSpec) -> Vec<(PieceId, Coord)> {
        grid.alive_pieces()
            .filter_map(|(id, piece)| {
                let at = piece.tile()?;
                spec.matches(piece, at, player, grid).then_some((id, at))
            })
            .collect()
    }
}

/// The tile one step forward from `at` for `color`. May be off the board.
pub fn forward_of(at: Coord, color: Color) -> Coord {
    Coord::new(at.x, at.y + color.forward())
}

/// Empty on-board tiles orthogonally adjacent to `at`.
pub fn free_cardinal_neighbors(at: Coord, grid: &Grid) -> impl Iterator<Item = Coord> + '_ {
    CARDINAL_STEPS
        .into_iter()
        .map(move |step| at + step)
        .filter(move |c| c.on_board() && !grid.is_occupied(*c))
}

#[cfg(test)]
mod tests {
    use super::*;

    fn grid_with(pieces: &[(PieceKind, Color, i32, i32)]) -> Grid {
        let mut grid = Grid::new();
        for &(kind, color, x, y) in pieces {
            grid.spawn(kind, color, Coord::new(x, y)).unwrap();
        }
        grid
    }

    #[test]
    fn test_side_filters() {
        let grid = grid_with(&[
            (PieceKind::Pawn, Color::White, 0, 6),
            (PieceKind::Pawn, Color::Black, 0, 1),
            (PieceKind::Rook, Color::Black, 7, 0),
        ]);

        assert_eq!(TargetSelector::pieces(&grid, Color::White, &TargetSpec::own()).len(), 1);
        assert_eq!(TargetSelector::pieces(&grid, Color::White, &TargetSpec::enemy()).len(), 2);
        assert_eq!(TargetSelector::pieces(&grid, Color::Black, &TargetSpec::any()).len(), 3);
    }

    #[test]
    fn test_kind_filter() {
        let grid = grid_with(&[
            (PieceKind::Bishop, Color::White, 2, 7),
            (PieceKind::Rook, Color::Black, 0, 0),
            (PieceKind::Queen, Color::Black, 3, 0),
        ]);
        let spec = TargetSpec::any().of_kinds([PieceKind::Bishop, PieceKind::Rook]);

        let found: Vec<_> = TargetSelector::pieces(&grid, Color::White, &spec)
            .into_iter()
            .map(|(_, at)| at)
            .collect();
        assert_eq!(found, vec![Coord::new(2, 7), Coord::new(0, 0)]);
    }

    #[test]
    fn test_clear_forward() {
        let grid = grid_with(&[
            (PieceKind::Pawn, Color::White, 1, 6),
            (PieceKind::Pawn, Color::White, 2, 6),
            (PieceKind::Knight, Color::Black, 2, 5),
            (PieceKind::Pawn, Color::White, 3, 0),
        ]);
        let spec = TargetSpec::own().with(TargetFilter::ClearForward);

        let found: Vec<_> = TargetSelector::pieces(&grid, Color::White, &spec)
            .into_iter()
            .map(|(_, at)| at)
            .collect();
        // (2, 6) is blocked and (3, 0) would step off the board
        assert_eq!(found, vec![Coord::new(1, 6)]);
    }

    #[test]
    fn test_free_cardinal_neighbors() {
        let grid = grid_with(&[
            (PieceKind::Pawn, Color::Black, 0, 0),
            (PieceKind::Rook, Color::White, 1, 0),
        ]);
        let free: Vec<_> = free_cardinal_neighbors(Coord::new(0, 0), &grid).collect();
        assert_eq!(free, vec![Coord::new(0, 1)]);
    }

    #[test]
    fn test_dead_pieces_excluded() {
        let mut grid = grid_with(&[(PieceKind::Pawn, Color::White, 4, 6)]);
        grid.kill(PieceId(0));
        assert!(TargetSelector::pieces(&grid, Color::White, &TargetSpec::any()).is_empty());
    }
}
