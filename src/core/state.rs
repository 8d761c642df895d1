//! Turn and phase state.
//!
//! `GameState` is the orchestrator's bookkeeping: whose turn it is, how
//! many turns have started, and the card being played, if any. The phase
//! is derived from the active card, so a card-selection phase without a
//! card (or the reverse) cannot be represented.

use serde::{Deserialize, Serialize};

use super::color::Color;
use crate::cards::ActiveCard;

/// The orchestrator's top-level mode.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Phase {
    /// Free movement.
    #[default]
    Normal,
    /// Input is routed to the active card.
    CardSelection,
}

/// Current player, turn counter, and active card.
#[derive(Clone, Debug)]
pub struct GameState {
    current_player: Color,
    /// Incremented by every turn start. 0 before the first turn.
    turn_count: u32,
    active_card: Option<ActiveCard>,
}

impl GameState {
    /// State before the first turn has started.
    #[must_use]
    pub fn new(starting_player: Color) -> Self {
        Self {
            current_player: starting_player,
            turn_count: 0,
            active_card: None,
        }
    }

    #[must_use]
    pub fn current_player(&self) -> Color {
        self.current_player
    }

    #[must_use]
    pub fn turn_count(&self) -> u32 {
        self.turn_count
    }

    #[must_use]
    pub fn phase(&self) -> Phase {
        if self.active_card.is_some() {
            Phase::CardSelection
        } else {
            Phase::Normal
        }
    }

    #[must_use]
    pub fn active_card(&self) -> Option<&ActiveCard> {
        self.active_card.as_ref()
    }

    pub fn active_card_mut(&mut self) -> Option<&mut ActiveCard> {
        self.active_card.as_mut()
    }

    // === Transitions ===

    /// Count a new turn and return the new count.
    pub fn advance_turn(&mut self) -> u32 {
        self.turn_count += 1;
        self.turn_count
    }

    /// Hand the move to the other player.
    pub fn pass_turn(&mut self) {
        self.current_player = self.current_player.opponent();
    }

    /// Enter the card-selection phase with `card`.
    pub fn begin_card(&mut self, card: ActiveCard) {
        self.active_card = Some(card);
    }

    /// Leave the card-selection phase, returning the discarded card.
    pub fn end_card(&mut self) -> Option<ActiveCard> {
        self.active_card.take()
    }
}
