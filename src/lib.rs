//! # mutation-chess
//!
//! A rule engine for a chess variant on an 8x8 board, played with a deck
//! of mutation cards that rewrite the board between turns.
//!
//! ## Design Principles
//!
//! 1. **Legality Only**: The engine decides what is legal and applies it.
//!    Rendering and pointer input live outside; they read snapshots and
//!    send coordinates in.
//!
//! 2. **Data Over Behavior**: Piece kinds dispatch through a static rule
//!    table, cards are records of pure functions, and per-piece rule
//!    changes are plain overlay data.
//!
//! 3. **Validate, Then Mutate**: Every command checks everything before
//!    touching state. Card effects resolve as one all-or-nothing batch.
//!
//! ## Modules
//!
//! - `core`: Coordinates, colors, errors, config, RNG, actions, turn state
//! - `board`: Tiles, the grid, and setup layouts
//! - `pieces`: Piece kinds, instances, overlays, and movement rules
//! - `effects`: Board effects, targeting, and batch resolution
//! - `cards`: Card catalog, selection state machine, and draw registry
//! - `game`: The turn orchestrator
//!
//! ## Example
//!
//! ```
//! use mutation_chess::{Action, Coord, Game, GameConfig, MoveOutcome, ActionOutcome};
//!
//! let mut game = Game::new(GameConfig::new().with_seed(1)).unwrap();
//! let outcome = game
//!     .apply(Action::Move { from: Coord::new(4, 6), to: Coord::new(4, 4) })
//!     .unwrap();
//! assert_eq!(outcome, ActionOutcome::Move(MoveOutcome::Moved));
//! ```

pub mod core;
pub mod board;
pub mod pieces;
pub mod effects;
pub mod cards;
pub mod game;

// Re-export commonly used types
pub use crate::core::{
    Action, Color, Coord, EngineError, GameConfig, GameRng, GameRngState, GameState, Phase,
    Result,
};

pub use crate::board::{Grid, Layout, Placement, Tile, TileState};

pub use crate::pieces::{
    CaptureResult, Destination, LifeState, Piece, PieceId, PieceKind, RuleOverlay,
};

pub use crate::effects::{Effect, EffectBatch, EffectResolver};

pub use crate::cards::{
    ActiveCard, CardDefinition, CardKind, CardRegistry, SelectTarget, Selection,
    SelectionOutcome,
};

pub use crate::game::{ActionOutcome, CardOutcome, Game, MoveOutcome, MoveRejection};
