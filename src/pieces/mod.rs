//! Pieces and their movement rules.
//!
//! - `PieceKind`: the closed set of kinds
//! - `Piece` / `PieceId`: instances and their stable slots in the grid
//! - `RuleOverlay`: per-instance alternate rules installed by cards
//! - `rules`: the per-kind dispatch table and legality predicates

mod kind;
mod overlay;
mod piece;
pub mod rules;

pub use kind::PieceKind;
pub use overlay::{AltCaptureRule, AltMoveRule, RuleOverlay};
pub use piece::{LifeState, Piece, PieceId};
pub use rules::{CaptureResult, Destination};
