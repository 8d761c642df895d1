//! Results of player commands.
//!
//! Illegal-but-expected input is reported here, never as an error.
//! Every `Rejected`, `Ignored`, `NotReady` or `NoActiveCard` outcome
//! guarantees that nothing in the game changed.

use serde::{Deserialize, Serialize};
use smallvec::SmallVec;

use crate::cards::{CardKind, SelectionOutcome};
use crate::pieces::PieceId;

/// Why a move was refused.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum MoveRejection {
    /// A card is being played.
    WrongPhase,
    /// A coordinate is off the board.
    OffBoard,
    /// No piece stands on the source tile.
    NoPiece,
    /// The piece belongs to the player who is not on turn.
    NotYourPiece,
    /// Neither a legal capture nor a legal move.
    IllegalDestination,
}

/// Result of [`Game::attempt_move`](super::Game::attempt_move).
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub enum MoveOutcome {
    /// Plain move onto an empty tile. The turn ended.
    Moved,
    /// Capture; the listed pieces are now dead. The turn ended.
    Captured(SmallVec<[PieceId; 2]>),
    Rejected(MoveRejection),
}

impl MoveOutcome {
    /// True if the move was carried out.
    #[must_use]
    pub fn is_applied(&self) -> bool {
        !matches!(self, MoveOutcome::Rejected(_))
    }
}

/// Result of confirming or declining a card.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub enum CardOutcome {
    Executed(CardKind),
    Declined(CardKind),
    /// The card has not reached its last stage.
    NotReady,
    /// No card is being played.
    NoActiveCard,
}

/// Result of [`Game::apply`](super::Game::apply).
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub enum ActionOutcome {
    Move(MoveOutcome),
    Selection(SelectionOutcome),
    Card(CardOutcome),
    /// The action carried a coordinate off the board.
    Ignored,
}

impl ActionOutcome {
    /// True if the action changed the game.
    #[must_use]
    pub fn changed(&self) -> bool {
        match self {
            ActionOutcome::Move(m) => m.is_applied(),
            ActionOutcome::Selection(s) => s.changed(),
            ActionOutcome::Card(c) => matches!(c, CardOutcome::Executed(_) | CardOutcome::Declined(_)),
            ActionOutcome::Ignored => false,
        }
    }
}
