//! Active cards - runtime selection state.
//!
//! An `ActiveCard` exists from the moment a card is drawn until it is
//! executed or declined. It tracks the current stage, the selections made
//! per stage, and the set of tiles that may be picked next.
//!
//! [`ActiveCard::toggle_selection`] is the only way to change selections:
//!
//! 1. A tile already picked in the current stage is deselected.
//! 2. A tile picked in an earlier stage rolls the card back to that stage
//!    and clears it and every later stage.
//! 3. Otherwise, a selectable tile is recorded if the stage has room. A
//!    stage that fills up advances the cursor, unless it is the last.
//! 4. Anything else is ignored and changes nothing.

use rustc_hash::FxHashSet;
use serde::{Deserialize, Serialize};
use tracing::debug;

use super::catalog::CardKind;
use super::definition::{CardDefinition, SelectTarget, Selection, SelectionContext};
use crate::board::Grid;
use crate::core::{Color, Coord};
use crate::effects::EffectBatch;

/// What a call to [`ActiveCard::toggle_selection`] did.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub enum SelectionOutcome {
    /// Recorded in the current stage, which still has room.
    Selected,
    /// Recorded and the card moved on to the given stage.
    Advanced { stage: usize },
    /// Removed from the current stage.
    Deselected,
    /// Returned to an earlier stage, clearing it and everything after.
    RolledBack { stage: usize },
    /// Not selectable, or the stage is full. Nothing changed.
    Ignored,
}

impl SelectionOutcome {
    /// True for every outcome that changed the card.
    #[must_use]
    pub fn changed(&self) -> bool {
        !matches!(self, SelectionOutcome::Ignored)
    }
}

/// A drawn card being played by one player.
#[derive(Clone, Debug)]
pub struct ActiveCard {
    kind: CardKind,
    player: Color,
    current_stage: usize,
    selections: Vec<Vec<Selection>>,
    selectables: Vec<Selection>,
    selectable_tiles: FxHashSet<Coord>,
}

impl ActiveCard {
    /// Start playing `kind` for `player` with nothing selected.
    #[must_use]
    pub fn new(kind: CardKind, player: Color, grid: &Grid) -> Self {
        let stages = kind.definition().stage_count();
        let mut card = Self {
            kind,
            player,
            current_stage: 0,
            selections: vec![Vec::new(); stages],
            selectables: Vec::new(),
            selectable_tiles: FxHashSet::default(),
        };
        card.determine_selectables(grid);
        card
    }

    // === Queries ===

    #[must_use]
    pub fn kind(&self) -> CardKind {
        self.kind
    }

    #[must_use]
    pub fn definition(&self) -> &'static CardDefinition {
        self.kind.definition()
    }

    #[must_use]
    pub fn name(&self) -> &'static str {
        self.definition().name
    }

    #[must_use]
    pub fn description(&self) -> &'static str {
        self.definition().description
    }

    /// The player playing the card.
    #[must_use]
    pub fn player(&self) -> Color {
        self.player
    }

    #[must_use]
    pub fn current_stage(&self) -> usize {
        self.current_stage
    }

    #[must_use]
    pub fn stage_count(&self) -> usize {
        self.selections.len()
    }

    /// Committed selections of `stage`, in order.
    #[must_use]
    pub fn selections(&self, stage: usize) -> &[Selection] {
        self.selections.get(stage).map_or(&[], Vec::as_slice)
    }

    /// Committed selections of every stage.
    #[must_use]
    pub fn all_selections(&self) -> &[Vec<Selection>] {
        &self.selections
    }

    #[must_use]
    pub fn selected_count(&self, stage: usize) -> usize {
        self.selections(stage).len()
    }

    /// What may be picked in the current stage.
    #[must_use]
    pub fn selectables(&self) -> &[Selection] {
        &self.selectables
    }

    #[must_use]
    pub fn selectable_tiles(&self) -> &FxHashSet<Coord> {
        &self.selectable_tiles
    }

    #[must_use]
    pub fn is_selectable(&self, tile: Coord) -> bool {
        self.selectable_tiles.contains(&tile)
    }

    /// The cursor has reached the last stage. Confirming with nothing
    /// selected there plays the card to no effect.
    #[must_use]
    pub fn is_ready(&self) -> bool {
        self.current_stage == self.definition().last_stage()
    }

    // === Selection ===

    /// Toggle a selection at `target`. See the module docs for the rules.
    ///
    /// A piece target is matched by the tile it stands on; a piece that is
    /// not on the board is ignored.
    pub fn toggle_selection(&mut self, target: SelectTarget, grid: &Grid) -> SelectionOutcome {
        let tile = match target {
            SelectTarget::Piece(id) => match grid.piece(id).and_then(|p| p.tile()) {
                Some(tile) => tile,
                None => return SelectionOutcome::Ignored,
            },
            SelectTarget::Tile(tile) => tile,
        };

        let stage = self.current_stage;
        if let Some(pos) = self.selections[stage].iter().position(|s| s.tile == tile) {
            self.selections[stage].remove(pos);
            self.determine_selectables(grid);
            debug!(card = %self.kind, stage, at = %tile, "deselected");
            return SelectionOutcome::Deselected;
        }

        if let Some(earlier) = (0..stage).find(|&s| self.selections[s].iter().any(|sel| sel.tile == tile)) {
            for later in &mut self.selections[earlier..] {
                later.clear();
            }
            self.current_stage = earlier;
            self.determine_selectables(grid);
            debug!(card = %self.kind, stage = earlier, at = %tile, "rolled back");
            return SelectionOutcome::RolledBack { stage: earlier };
        }

        let limit = self.definition().limit(stage);
        if self.selections[stage].len() >= limit {
            return SelectionOutcome::Ignored;
        }
        let Some(offered) = self.selectables.iter().find(|s| s.tile == tile).copied() else {
            return SelectionOutcome::Ignored;
        };

        self.selections[stage].push(offered);
        debug!(card = %self.kind, stage, at = %tile, "selected");

        if self.selections[stage].len() == limit && stage < self.definition().last_stage() {
            self.current_stage += 1;
            self.determine_selectables(grid);
            return SelectionOutcome::Advanced { stage: self.current_stage };
        }
        self.determine_selectables(grid);
        SelectionOutcome::Selected
    }

    /// Rebuild the selectable set for the current stage from scratch.
    pub fn determine_selectables(&mut self, grid: &Grid) {
        let ctx = self.context(grid);
        let selectables = (self.definition().selectables)(&ctx);
        self.selectable_tiles = selectables.iter().map(|s| s.tile).collect();
        self.selectables = selectables;
    }

    /// The effects of playing the card, or `None` if it is not ready.
    #[must_use]
    pub fn execute(&self, grid: &Grid) -> Option<EffectBatch> {
        if !self.is_ready() {
            return None;
        }
        Some((self.definition().apply)(&self.context(grid)))
    }

    fn context<'a>(&'a self, grid: &'a Grid) -> SelectionContext<'a> {
        SelectionContext {
            grid,
            player: self.player,
            stage: self.current_stage,
            selections: &self.selections,
        }
    }
}
