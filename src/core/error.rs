//! Engine error type.
//!
//! Only caller bugs surface here: occupying a taken tile, addressing a
//! tile off the board, naming a piece kind that does not exist, or
//! handing the engine a broken configuration. Illegal-but-expected player
//! input (a rejected move, a non-selectable target) is reported through
//! outcome enums instead and never reaches this type.

use thiserror::Error;

use super::coord::Coord;
use crate::pieces::PieceId;

/// Contract violations raised by the engine.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum EngineError {
    #[error("tile {0} is already occupied")]
    OccupiedTile(Coord),

    #[error("tile {0} is off the board")]
    InvalidTile(Coord),

    #[error("unknown piece kind `{0}`")]
    UnknownPieceKind(String),

    #[error("{0} is not on the board")]
    PieceNotOnBoard(PieceId),

    #[error("invalid configuration: {0}")]
    Config(String),
}

/// Result alias used throughout the crate.
pub type Result<T> = std::result::Result<T, EngineError>;
