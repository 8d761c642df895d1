//! Card registry for draws.
//!
//! The `CardRegistry` holds the cards a game may draw and filters them
//! down to the ones with a legal play on the current board.

use tracing::debug;

use super::catalog::CardKind;
use crate::board::Grid;
use crate::core::{Color, GameRng};

/// The closed list of drawable cards.
///
/// ## Example
///
/// ```
/// use mutation_chess::board::{Grid, Layout};
/// use mutation_chess::cards::{CardKind, CardRegistry};
/// use mutation_chess::core::Color;
///
/// let mut registry = CardRegistry::new();
/// registry.register(CardKind::Polymorph);
/// registry.register(CardKind::Telekinesis);
///
/// let empty = Grid::new();
/// assert!(registry.eligible(&empty, Color::White).is_empty());
///
/// let grid = Grid::from_layout(&Layout::standard()).unwrap();
/// assert_eq!(registry.eligible(&grid, Color::White).len(), 2);
/// ```
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct CardRegistry {
    cards: Vec<CardKind>,
}

impl CardRegistry {
    /// Create a new empty registry.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// A registry holding the whole catalog.
    #[must_use]
    pub fn full() -> Self {
        CardKind::ALL.into_iter().collect()
    }

    /// Register a card.
    ///
    /// Panics if the card is already registered.
    pub fn register(&mut self, card: CardKind) {
        if self.contains(card) {
            panic!("Card {card} already registered");
        }
        self.cards.push(card);
    }

    #[must_use]
    pub fn contains(&self, card: CardKind) -> bool {
        self.cards.contains(&card)
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.cards.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.cards.is_empty()
    }

    /// Registered cards, in registration order.
    pub fn iter(&self) -> impl Iterator<Item = CardKind> + '_ {
        self.cards.iter().copied()
    }

    /// Cards with at least one legal selection for `player` on `grid`.
    #[must_use]
    pub fn eligible(&self, grid: &Grid, player: Color) -> Vec<CardKind> {
        self.iter()
            .filter(|card| card.definition().requirements_satisfied(grid, player))
            .collect()
    }

    /// Pick a random eligible card, or `None` if none qualifies.
    pub fn draw(&self, grid: &Grid, player: Color, rng: &mut GameRng) -> Option<CardKind> {
        let eligible = self.eligible(grid, player);
        let card = rng.choose(&eligible).copied();
        debug!(eligible = eligible.len(), drawn = ?card, "card draw");
        card
    }
}

impl FromIterator<CardKind> for CardRegistry {
    fn from_iter<I: IntoIterator<Item = CardKind>>(iter: I) -> Self {
        let mut registry = Self::new();
        for card in iter {
            registry.register(card);
        }
        registry
    }
}
