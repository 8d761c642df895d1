//! Card definitions - static card data.
//!
//! A `CardDefinition` is a plain record: name, description, one selection
//! limit per stage, and two pure functions.
//!
//! - `selectables` lists what may be picked in the current stage, given the
//!   grid, the acting player, and the selections committed so far.
//! - `apply` turns a finished set of selections into an [`EffectBatch`].
//!
//! Neither function touches game state; the orchestrator resolves the batch.
//! Whether a card can be drawn at all is derived from `selectables` at
//! stage 0, so the two can never disagree.

use serde::{Deserialize, Serialize};

use crate::board::Grid;
use crate::core::{Color, Coord};
use crate::effects::EffectBatch;
use crate::pieces::PieceId;

/// What a player picks: a piece, or an empty tile.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum SelectTarget {
    Piece(PieceId),
    Tile(Coord),
}

/// A committed (or offered) selection.
///
/// `tile` is where the player clicks; selections are matched by it, so
/// picking a piece and picking the tile under it are the same choice.
/// `affects` is the tile the card will act on, e.g. the square a pawn is
/// pushed to. It defaults to `tile`.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Selection {
    pub target: SelectTarget,
    pub tile: Coord,
    pub affects: Coord,
}

impl Selection {
    #[must_use]
    pub const fn piece(id: PieceId, tile: Coord) -> Self {
        Self { target: SelectTarget::Piece(id), tile, affects: tile }
    }

    #[must_use]
    pub const fn tile(tile: Coord) -> Self {
        Self { target: SelectTarget::Tile(tile), tile, affects: tile }
    }

    /// Same selection, acting on `affects` instead of its own tile.
    #[must_use]
    pub const fn affecting(mut self, affects: Coord) -> Self {
        self.affects = affects;
        self
    }

    /// The selected piece, if this selection is a piece.
    #[must_use]
    pub fn piece_id(&self) -> Option<PieceId> {
        match self.target {
            SelectTarget::Piece(id) => Some(id),
            SelectTarget::Tile(_) => None,
        }
    }
}

/// Read-only view handed to a card's functions.
#[derive(Clone, Copy, Debug)]
pub struct SelectionContext<'a> {
    pub grid: &'a Grid,
    /// The player playing the card.
    pub player: Color,
    /// Stage whose selectables are being computed.
    pub stage: usize,
    /// Committed selections, one list per stage.
    pub selections: &'a [Vec<Selection>],
}

impl<'a> SelectionContext<'a> {
    /// Context for a card with nothing selected yet.
    #[must_use]
    pub fn initial(grid: &'a Grid, player: Color) -> Self {
        Self {
            grid,
            player,
            stage: 0,
            selections: &[],
        }
    }

    /// Selections committed in `stage`, in selection order.
    #[must_use]
    pub fn stage(&self, stage: usize) -> &'a [Selection] {
        self.selections.get(stage).map_or(&[], Vec::as_slice)
    }

    /// First selection of `stage`.
    #[must_use]
    pub fn first(&self, stage: usize) -> Option<Selection> {
        self.stage(stage).first().copied()
    }
}

pub type SelectablesFn = fn(&SelectionContext<'_>) -> Vec<Selection>;
pub type ApplyFn = fn(&SelectionContext<'_>) -> EffectBatch;

/// Static card definition.
#[derive(Clone, Copy)]
pub struct CardDefinition {
    pub name: &'static str,
    pub description: &'static str,
    /// Maximum selections per stage. At least one stage.
    pub stage_limits: &'static [usize],
    pub selectables: SelectablesFn,
    pub apply: ApplyFn,
}

impl std::fmt::Debug for CardDefinition {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("CardDefinition")
            .field("name", &self.name)
            .field("stage_limits", &self.stage_limits)
            .finish_non_exhaustive()
    }
}

impl CardDefinition {
    #[must_use]
    pub fn stage_count(&self) -> usize {
        self.stage_limits.len()
    }

    #[must_use]
    pub fn last_stage(&self) -> usize {
        self.stage_count().saturating_sub(1)
    }

    /// Selection limit of `stage`, 0 past the last stage.
    #[must_use]
    pub fn limit(&self, stage: usize) -> usize {
        self.stage_limits.get(stage).copied().unwrap_or(0)
    }

    /// Whether the card has any legal play for `player` right now.
    #[must_use]
    pub fn requirements_satisfied(&self, grid: &Grid, player: Color) -> bool {
        !(self.selectables)(&SelectionContext::initial(grid, player)).is_empty()
    }
}
