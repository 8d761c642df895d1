//! Initial piece placements.
//!
//! A `Layout` is an ordered list of placements. Spawning follows list
//! order, so piece ids follow it too.

use serde::{Deserialize, Serialize};

use crate::core::{Color, Coord};
use crate::pieces::PieceKind;

/// One piece to place at setup.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct Placement {
    pub kind: PieceKind,
    pub color: Color,
    pub x: i32,
    pub y: i32,
}

impl Placement {
    #[must_use]
    pub const fn new(kind: PieceKind, color: Color, x: i32, y: i32) -> Self {
        Self { kind, color, x, y }
    }

    #[must_use]
    pub const fn coord(&self) -> Coord {
        Coord::new(self.x, self.y)
    }
}

/// An ordered set of placements.
#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct Layout {
    placements: Vec<Placement>,
}

const BACK_RANK: [PieceKind; 8] = [
    PieceKind::Rook,
    PieceKind::Knight,
    PieceKind::Bishop,
    PieceKind::Queen,
    PieceKind::King,
    PieceKind::Bishop,
    PieceKind::Knight,
    PieceKind::Rook,
];

impl Layout {
    /// No pieces.
    #[must_use]
    pub fn empty() -> Self {
        Self::default()
    }

    /// The conventional start position: black on ranks 0-1, white on 6-7.
    #[must_use]
    pub fn standard() -> Self {
        let mut layout = Self::empty();
        for color in [Color::Black, Color::White] {
            let back = color.pawn_rank() - color.forward();
            for (x, kind) in BACK_RANK.iter().enumerate() {
                layout = layout.with(*kind, color, x as i32, back);
            }
            for x in 0..8 {
                layout = layout.with(PieceKind::Pawn, color, x, color.pawn_rank());
            }
        }
        layout
    }

    /// Append a placement (builder pattern).
    #[must_use]
    pub fn with(mut self, kind: PieceKind, color: Color, x: i32, y: i32) -> Self {
        self.placements.push(Placement::new(kind, color, x, y));
        self
    }

    #[must_use]
    pub fn placements(&self) -> &[Placement] {
        &self.placements
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.placements.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.placements.is_empty()
    }
}
