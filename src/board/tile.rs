//! Board tiles.

use serde::{Deserialize, Serialize};

use crate::core::Coord;
use crate::pieces::PieceId;

/// Display tag reported to the renderer. Carries no rule meaning.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum TileState {
    #[default]
    Normal,
    Selectable,
    Selected,
    Threatened,
}

/// One grid cell. Holds at most one piece.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct Tile {
    coord: Coord,
    pub state: TileState,
    occupant: Option<PieceId>,
}

impl Tile {
    pub(crate) fn new(coord: Coord) -> Self {
        Self {
            coord,
            state: TileState::Normal,
            occupant: None,
        }
    }

    #[must_use]
    pub fn coord(&self) -> Coord {
        self.coord
    }

    #[must_use]
    pub fn x(&self) -> i32 {
        self.coord.x
    }

    #[must_use]
    pub fn y(&self) -> i32 {
        self.coord.y
    }

    /// The occupying piece, if any.
    #[must_use]
    pub fn occupant(&self) -> Option<PieceId> {
        self.occupant
    }

    #[must_use]
    pub fn is_occupied(&self) -> bool {
        self.occupant.is_some()
    }

    pub(crate) fn set_occupant(&mut self, occupant: Option<PieceId>) {
        self.occupant = occupant;
    }
}
