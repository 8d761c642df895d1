//! Player input.
//!
//! The presentation layer translates pointer input into grid coordinates
//! and hands the engine one `Action` per event. The engine decides what
//! the coordinates mean based on the current phase.
//!
//! ```
//! use mutation_chess::core::{Action, Coord};
//!
//! let mv = Action::Move { from: Coord::new(4, 6), to: Coord::new(4, 4) };
//! assert_eq!(mv.coords(), vec![Coord::new(4, 6), Coord::new(4, 4)]);
//! assert!(Action::Confirm.coords().is_empty());
//! ```

use serde::{Deserialize, Serialize};

use super::coord::Coord;

/// A discrete input event.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(tag = "type", rename_all = "snake_case")]
pub enum Action {
    /// Move or capture, normal phase only.
    Move { from: Coord, to: Coord },
    /// Toggle a card selection at a tile, card phase only.
    Select { at: Coord },
    /// Execute the active card.
    Confirm,
    /// Discard the active card.
    Decline,
}

impl Action {
    /// Coordinates carried by the action, in order.
    #[must_use]
    pub fn coords(&self) -> Vec<Coord> {
        match *self {
            Action::Move { from, to } => vec![from, to],
            Action::Select { at } => vec![at],
            Action::Confirm | Action::Decline => Vec::new(),
        }
    }

    /// True if every carried coordinate lies on the board.
    #[must_use]
    pub fn is_on_board(&self) -> bool {
        self.coords().iter().all(|c| c.on_board())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_coords() {
        let mv = Action::Move { from: Coord::new(0, 6), to: Coord::new(0, 5) };
        assert_eq!(mv.coords(), vec![Coord::new(0, 6), Coord::new(0, 5)]);
        assert_eq!(Action::Select { at: Coord::new(1, 1) }.coords(), vec![Coord::new(1, 1)]);
        assert!(Action::Decline.coords().is_empty());
    }

    #[test]
    fn test_on_board() {
        assert!(Action::Confirm.is_on_board());
        assert!(Action::Select { at: Coord::new(7, 7) }.is_on_board());
        assert!(!Action::Select { at: Coord::new(7, 8) }.is_on_board());
        assert!(!Action::Move { from: Coord::new(-1, 0), to: Coord::new(0, 0) }.is_on_board());
    }

    #[test]
    fn test_action_serialization() {
        let action = Action::Move { from: Coord::new(4, 6), to: Coord::new(4, 4) };
        let json = serde_json::to_string(&action).unwrap();
        assert_eq!(
            json,
            r#"{"type":"move","from":{"x":4,"y":6},"to":{"x":4,"y":4}}"#
        );
        let back: Action = serde_json::from_str(&json).unwrap();
        assert_eq!(back, action);

        let confirm: Action = serde_json::from_str(r#"{"type":"confirm"}"#).unwrap();
        assert_eq!(confirm, Action::Confirm);
    }
}
