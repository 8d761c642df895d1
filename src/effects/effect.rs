//! Effect definitions.
//!
//! Effects are the atomic board mutations a card (or a move) produces.
//! Each one names the piece it acts on, so a batch can be validated and
//! applied without consulting the card that produced it.

use serde::{Deserialize, Serialize};

use crate::core::Coord;
use crate::pieces::{PieceId, PieceKind, RuleOverlay};

/// An atomic board effect.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub enum Effect {
    /// Relocate a piece onto an empty tile. Sets `has_moved`.
    MovePiece { piece: PieceId, to: Coord },

    /// Replace a piece with a fresh one of another kind on the same tile.
    Transform { piece: PieceId, kind: PieceKind },

    /// Give a piece alternate move/capture rules.
    InstallOverlay { piece: PieceId, overlay: RuleOverlay },

    /// Remove a piece from the board and mark it dead.
    Kill { piece: PieceId },
}

impl Effect {
    pub fn move_piece(piece: PieceId, to: Coord) -> Self {
        Self::MovePiece { piece, to }
    }

    pub fn transform(piece: PieceId, kind: PieceKind) -> Self {
        Self::Transform { piece, kind }
    }

    pub fn install_overlay(piece: PieceId, overlay: RuleOverlay) -> Self {
        Self::InstallOverlay { piece, overlay }
    }

    pub fn kill(piece: PieceId) -> Self {
        Self::Kill { piece }
    }

    /// The piece this effect acts on.
    #[must_use]
    pub fn piece(&self) -> PieceId {
        match *self {
            Effect::MovePiece { piece, .. }
            | Effect::Transform { piece, .. }
            | Effect::InstallOverlay { piece, .. }
            | Effect::Kill { piece } => piece,
        }
    }
}

/// An ordered batch of effects, resolved all-or-nothing.
#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct EffectBatch {
    effects: Vec<Effect>,
}

impl EffectBatch {
    /// Create an empty batch.
    pub fn new() -> Self {
        Self::default()
    }

    pub fn add(&mut self, effect: Effect) {
        self.effects.push(effect);
    }

    /// Append an effect (builder pattern).
    #[must_use]
    pub fn with(mut self, effect: Effect) -> Self {
        self.add(effect);
        self
    }

    pub fn iter(&self) -> impl Iterator<Item = &Effect> {
        self.effects.iter()
    }

    pub fn is_empty(&self) -> bool {
        self.effects.is_empty()
    }

    pub fn len(&self) -> usize {
        self.effects.len()
    }
}

impl FromIterator<Effect> for EffectBatch {
    fn from_iter<I: IntoIterator<Item = Effect>>(iter: I) -> Self {
        Self {
            effects: iter.into_iter().collect(),
        }
    }
}

impl IntoIterator for EffectBatch {
    type Item = Effect;
    type IntoIter = std::vec::IntoIter<Effect>;

    fn into_iter(self) -> Self::IntoIter {
        self.effects.into_iter()
    }
}
