//! Per-instance rule overlays.
//!
//! Cards can give individual pieces an extra movement or capture rule.
//! The overlay is consulted next to the kind's default rule: a move is
//! legal if either permits it. Overlays are plain data, so pieces stay
//! `Clone + Eq` and never carry behavior of their own.

use serde::{Deserialize, Serialize};

use super::rules::CaptureResult;
use crate::board::Grid;
use crate::core::{Color, Coord};

/// Alternate movement rules.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum AltMoveRule {
    /// One diagonal step forward onto an empty tile, or a two-tile
    /// diagonal leap forward over an occupied tile onto an empty one.
    ///
    /// The leap is described as landing "onto an occupied tile". A tile
    /// holds one piece and this is a move, not a capture, so the occupied
    /// tile is read as the one jumped over: the midpoint must hold a piece
    /// of either color and the landing tile must be empty. Nothing is
    /// captured by the leap.
    DiagonalStepOrLeap,
}

/// Alternate capture rules.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum AltCaptureRule {
    /// One tile straight forward onto an enemy piece.
    StraightForwardCapture,
}

/// Optional alternate rules attached to a piece.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct RuleOverlay {
    pub alt_move: Option<AltMoveRule>,
    pub alt_capture: Option<AltCaptureRule>,
}

impl RuleOverlay {
    /// The overlay installed by TopsyTurvy.
    #[must_use]
    pub const fn topsy_turvy() -> Self {
        Self {
            alt_move: Some(AltMoveRule::DiagonalStepOrLeap),
            alt_capture: Some(AltCaptureRule::StraightForwardCapture),
        }
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.alt_move.is_none() && self.alt_capture.is_none()
    }
}

impl AltMoveRule {
    pub(crate) fn permits(self, color: Color, from: Coord, to: Coord, grid: &Grid) -> bool {
        if grid.is_occupied(to) {
            return false;
        }
        let d = to - from;
        let fwd = color.forward();
        match self {
            AltMoveRule::DiagonalStepOrLeap => {
                if d.x.abs() == 1 && d.y == fwd {
                    return true;
                }
                d.x.abs() == 2 && d.y == 2 * fwd && grid.is_occupied(from + d.signum())
            }
        }
    }
}

impl AltCaptureRule {
    pub(crate) fn evaluate(self, color: Color, from: Coord, to: Coord, grid: &Grid) -> CaptureResult {
        let d = to - from;
        match self {
            AltCaptureRule::StraightForwardCapture => {
                if d.x == 0 && d.y == color.forward() {
                    if let Some(victim) = grid.enemy_at(to, color) {
                        return CaptureResult::single(victim);
                    }
                }
                CaptureResult::invalid()
            }
        }
    }
}
