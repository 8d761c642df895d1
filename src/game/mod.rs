//! The turn orchestrator and the outcomes of player commands.

mod engine;
mod outcome;

pub use engine::Game;
pub use outcome::{ActionOutcome, CardOutcome, MoveOutcome, MoveRejection};
