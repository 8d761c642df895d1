//! Game configuration.
//!
//! A `GameConfig` fixes everything the orchestrator needs at startup:
//! - How often a card is drawn (`card_draw_interval`)
//! - Which cards may be drawn (`deck`)
//! - Where pieces start (`layout`)
//! - Who moves first and the seed for card draws
//!
//! Configs are built in code with the `with_*` builder methods or loaded
//! from JSON. Missing JSON fields fall back to the defaults.

use rustc_hash::FxHashSet;
use serde::{Deserialize, Serialize};

use super::color::Color;
use super::error::{EngineError, Result};
use crate::board::Layout;
use crate::cards::CardKind;

/// Turns between card draws unless configured otherwise.
pub const DEFAULT_CARD_DRAW_INTERVAL: u32 = 3;

/// Complete game configuration.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct GameConfig {
    /// A card is drawn when the turn count is a multiple of this. At least 1.
    pub card_draw_interval: u32,

    /// Seed for the draw RNG.
    pub seed: u64,

    /// Cards eligible for drawing. Empty means no card is ever drawn.
    pub deck: Vec<CardKind>,

    /// Initial piece placement.
    pub layout: Layout,

    pub starting_player: Color,
}

impl Default for GameConfig {
    fn default() -> Self {
        Self {
            card_draw_interval: DEFAULT_CARD_DRAW_INTERVAL,
            seed: 0,
            deck: CardKind::ALL.to_vec(),
            layout: Layout::standard(),
            starting_player: Color::White,
        }
    }
}

impl GameConfig {
    /// Standard setup, full deck, seed 0.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Parse and validate a JSON config.
    pub fn from_json(json: &str) -> Result<Self> {
        let config: Self =
            serde_json::from_str(json).map_err(|e| EngineError::Config(e.to_string()))?;
        config.validate()?;
        Ok(config)
    }

    #[must_use]
    pub fn with_seed(mut self, seed: u64) -> Self {
        self.seed = seed;
        self
    }

    #[must_use]
    pub fn with_card_draw_interval(mut self, interval: u32) -> Self {
        self.card_draw_interval = interval;
        self
    }

    #[must_use]
    pub fn with_deck(mut self, deck: impl IntoIterator<Item = CardKind>) -> Self {
        self.deck = deck.into_iter().collect();
        self
    }

    #[must_use]
    pub fn with_layout(mut self, layout: Layout) -> Self {
        self.layout = layout;
        self
    }

    #[must_use]
    pub fn with_starting_player(mut self, color: Color) -> Self {
        self.starting_player = color;
        self
    }

    /// Reject configs the engine cannot start from.
    pub fn validate(&self) -> Result<()> {
        if self.card_draw_interval == 0 {
            return Err(EngineError::Config(
                "card_draw_interval must be at least 1".into(),
            ));
        }

        let mut cards = FxHashSet::default();
        if let Some(card) = self.deck.iter().find(|c| !cards.insert(**c)) {
            return Err(EngineError::Config(format!("card {card} listed twice in deck")));
        }

        let mut seen = FxHashSet::default();
        for placement in self.layout.placements() {
            let coord = placement.coord();
            if !coord.on_board() {
                return Err(EngineError::Config(format!(
                    "placement {coord} is off the board"
                )));
            }
            if !seen.insert(coord) {
                return Err(EngineError::Config(format!(
                    "more than one placement on {coord}"
                )));
            }
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::pieces::PieceKind;

    #[test]
    fn test_defaults() {
        let config = GameConfig::new();
        assert_eq!(config.card_draw_interval, 3);
        assert_eq!(config.deck.len(), 6);
        assert_eq!(config.layout.len(), 32);
        assert_eq!(config.starting_player, Color::White);
        assert!(config.validate().is_ok());
    }

    #[test]
    fn test_builder() {
        let config = GameConfig::new()
            .with_seed(9)
            .with_card_draw_interval(1)
            .with_deck([CardKind::Onslaught])
            .with_layout(Layout::empty())
            .with_starting_player(Color::Black);

        assert_eq!(config.seed, 9);
        assert_eq!(config.card_draw_interval, 1);
        assert_eq!(config.deck, vec![CardKind::Onslaught]);
        assert!(config.layout.is_empty());
        assert_eq!(config.starting_player, Color::Black);
    }

    #[test]
    fn test_zero_interval_rejected() {
        let err = GameConfig::new().with_card_draw_interval(0).validate().unwrap_err();
        assert!(matches!(err, EngineError::Config(_)));
    }

    #[test]
    fn test_bad_placements_rejected() {
        let off = GameConfig::new()
            .with_layout(Layout::empty().with(PieceKind::King, Color::White, 8, 0));
        assert!(matches!(off.validate(), Err(EngineError::Config(_))));

        let twice = GameConfig::new().with_layout(
            Layout::empty()
                .with(PieceKind::King, Color::White, 4, 7)
                .with(PieceKind::Queen, Color::White, 4, 7),
        );
        assert!(matches!(twice.validate(), Err(EngineError::Config(_))));
    }

    #[test]
    fn test_duplicate_deck_entry_rejected() {
        let config = GameConfig::new().with_deck([CardKind::Draught, CardKind::Draught]);
        assert!(matches!(config.validate(), Err(EngineError::Config(_))));
    }

    #[test]
    fn test_empty_deck_is_valid() {
        assert!(GameConfig::new().with_deck(Vec::new()).validate().is_ok());
    }

    #[test]
    fn test_from_json_partial() {
        let config = GameConfig::from_json(
            r#"{
                "seed": 11,
                "deck": ["telekinesis", "topsy_turvy"],
                "layout": [{"kind": "ogre", "color": "black", "x": 1, "y": 1}]
            }"#,
        )
        .unwrap();

        assert_eq!(config.seed, 11);
        assert_eq!(config.card_draw_interval, 3);
        assert_eq!(config.deck, vec![CardKind::Telekinesis, CardKind::TopsyTurvy]);
        assert_eq!(config.layout.len(), 1);
    }

    #[test]
    fn test_from_json_errors() {
        assert!(matches!(GameConfig::from_json("{"), Err(EngineError::Config(_))));
        assert!(matches!(
            GameConfig::from_json(r#"{"layout": [{"kind": "wizard", "color": "white", "x": 0, "y": 0}]}"#),
            Err(EngineError::Config(_))
        ));
        assert!(matches!(
            GameConfig::from_json(r#"{"card_draw_interval": 0}"#),
            Err(EngineError::Config(_))
        ));
    }

    #[test]
    fn test_json_roundtrip() {
        let config = GameConfig::new().with_seed(5).with_deck([CardKind::Draught]);
        let json = serde_json::to_string(&config).unwrap();
        assert_eq!(GameConfig::from_json(&json).unwrap(), config);
    }
}
