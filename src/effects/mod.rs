//! Board effects and targeting.
//!
//! - `Effect`: one atomic mutation of the grid (move, transform, overlay, kill)
//! - `EffectBatch`: an ordered list of effects produced by a card or a move
//! - `TargetSpec`: which pieces a card may pick
//! - `EffectResolver`: applies a batch all-or-nothing

mod effect;
mod targeting;
mod resolver;

pub use effect::{Effect, EffectBatch};
pub use targeting::{forward_of, free_cardinal_neighbors, TargetFilter, TargetSelector, TargetSpec};
pub use resolver::EffectResolver;
