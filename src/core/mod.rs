//! Core engine types: coordinates, colors, errors, configuration, RNG,
//! input actions, and turn state.

pub mod coord;
pub mod color;
pub mod error;
pub mod rng;
pub mod config;
pub mod action;
pub mod state;

pub use coord::{Coord, BOARD_SIZE, CARDINAL_STEPS};
pub use color::Color;
pub use error::{EngineError, Result};
pub use rng::{GameRng, GameRngState};
pub use config::{GameConfig, DEFAULT_CARD_DRAW_INTERVAL};
pub use action::Action;
pub use state::{GameState, Phase};
