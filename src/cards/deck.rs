//! Deck construction and consumption.
//!
//! `build_deck` expands a catalog into individual cards in catalog order.
//! The resulting `Deck` is consumed from the front, one card per round, and
//! cards are never put back.

use im::Vector;
use log::trace;
use serde::{Deserialize, Serialize};

use super::catalog::CardCatalog;
use super::definition::Card;
use crate::core::{GameRng, Result};

/// Ordered sequence of cards, consumed from the front.
///
/// Uses an `im` persistent vector so snapshots of the deck in round
/// reports and game clones are cheap.
#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Deck {
    cards: Vector<Card>,
}

impl Deck {
    /// Create a deck from cards, front first.
    pub fn from_cards(cards: impl IntoIterator<Item = Card>) -> Self {
        Self {
            cards: cards.into_iter().collect(),
        }
    }

    /// Remove and return the front card, or `None` when exhausted.
    pub fn reveal(&mut self) -> Option<Card> {
        self.cards.pop_front()
    }

    /// The next card to be revealed.
    #[must_use]
    pub fn peek(&self) -> Option<&Card> {
        self.cards.front()
    }

    /// Shuffle the remaining cards in place.
    pub fn shuffle(&mut self, rng: &mut GameRng) {
        let mut cards: Vec<Card> = self.cards.iter().cloned().collect();
        rng.shuffle(&mut cards);
        self.cards = cards.into_iter().collect();
    }

    /// Number of cards left.
    #[must_use]
    pub fn len(&self) -> usize {
        self.cards.len()
    }

    /// Check if the deck is exhausted.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.cards.is_empty()
    }

    /// Iterate over remaining cards, front first.
    pub fn iter(&self) -> impl Iterator<Item = &Card> {
        self.cards.iter()
    }
}

/// Expand a catalog into a deck.
///
/// Emits `quantity` copies of each entry in catalog order. Catalog entries
/// are validated when the catalog is built, so a typed catalog always
/// expands; the `Result` carries catalog errors from [`build_deck_from_json`].
///
/// ```
/// use blind_bidding::cards::{build_deck, CardCatalog, EffectKind};
///
/// let catalog = CardCatalog::new()
///     .with_entry("Gain", 2, EffectKind::Gain, 10)
///     .with_entry("Nothing", 1, EffectKind::None, 0);
///
/// let mut deck = build_deck(&catalog).unwrap();
/// assert_eq!(deck.len(), 3);
/// assert_eq!(deck.reveal().unwrap().card_type, "Gain");
/// ```
pub fn build_deck(catalog: &CardCatalog) -> Result<Deck> {
    let mut cards = Vector::new();

    for entry in catalog.entries() {
        trace!("adding {} x {} ({} {})", entry.quantity, entry.name, entry.effect, entry.amount);
        let card = Card::new(entry.name.clone(), entry.effect, entry.amount);
        for _ in 0..entry.quantity {
            cards.push_back(card.clone());
        }
    }

    Ok(Deck { cards })
}

/// Parse a JSON catalog and expand it into a deck.
pub fn build_deck_from_json(json: &str) -> Result<Deck> {
    build_deck(&CardCatalog::from_json(json)?)
}
