//! Card definitions - effect kinds and card values.
//!
//! A `Card` is an immutable value: a type label, an effect kind and a
//! magnitude. Cards of the same type are interchangeable; there is no
//! per-instance identity.

use serde::{Deserialize, Serialize};
use std::str::FromStr;

use crate::core::BiddingError;

/// What a card does to the round's winners.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum EffectKind {
    /// Winner gains `amount` resources.
    Gain,
    /// Winner loses `amount` resources.
    Lose,
    /// Winner takes up to `amount` resources from a random other player.
    Steal,
    /// Nothing happens.
    None,
}

impl EffectKind {
    /// All recognized effect kinds.
    pub const ALL: [EffectKind; 4] = [Self::Gain, Self::Lose, Self::Steal, Self::None];

    /// The label used in catalogs.
    #[must_use]
    pub const fn label(self) -> &'static str {
        match self {
            Self::Gain => "gain",
            Self::Lose => "lose",
            Self::Steal => "steal",
            Self::None => "none",
        }
    }
}

impl FromStr for EffectKind {
    type Err = BiddingError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::ALL
            .into_iter()
            .find(|kind| kind.label() == s)
            .ok_or_else(|| BiddingError::UnknownEffect(s.to_string()))
    }
}

impl std::fmt::Display for EffectKind {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.label())
    }
}

/// A single card in the deck.
///
/// ```
/// use blind_bidding::cards::{Card, EffectKind};
///
/// let card = Card::new("Resource Gain", EffectKind::Gain, 10);
/// assert_eq!(card.amount, 10);
/// assert_eq!(card.to_string(), "Resource Gain (gain 10)");
/// ```
#[derive(Clone, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Card {
    /// Card type label (the catalog entry name).
    #[serde(rename = "type")]
    pub card_type: String,

    /// Effect applied when revealed.
    pub effect: EffectKind,

    /// Effect magnitude.
    pub amount: u32,
}

impl Card {
    /// Create a new card.
    #[must_use]
    pub fn new(card_type: impl Into<String>, effect: EffectKind, amount: u32) -> Self {
        Self {
            card_type: card_type.into(),
            effect,
            amount,
        }
    }
}

impl std::fmt::Display for Card {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{} ({} {})", self.card_type, self.effect, self.amount)
    }
}
