//! Effect events - what a revealed card did, as plain data.

use serde::Serialize;

use crate::core::PlayerName;

/// Outcome of applying a card to one winner.
#[derive(Clone, Debug, PartialEq, Eq, Serialize)]
#[serde(tag = "kind", rename_all = "snake_case")]
pub enum EffectEvent {
    Gained { player: PlayerName, amount: i64 },
    Lost { player: PlayerName, amount: i64 },
    Stole { player: PlayerName, victim: PlayerName, amount: i64 },
    /// Steal card, but every other player was at zero or below.
    NothingToSteal { player: PlayerName },
    NoEffect { player: PlayerName },
}

impl EffectEvent {
    /// The winner this event applied to.
    #[must_use]
    pub fn player(&self) -> &PlayerName {
        match self {
            Self::Gained { player, .. }
            | Self::Lost { player, .. }
            | Self::Stole { player, .. }
            | Self::NothingToSteal { player }
            | Self::NoEffect { player } => player,
        }
    }
}

impl std::fmt::Display for EffectEvent {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Gained { player, amount } => write!(f, "{} gained {} resources", player, amount),
            Self::Lost { player, amount } => write!(f, "{} lost {} resources", player, amount),
            Self::Stole { player, victim, amount } => {
                write!(f, "{} stole {} resources from {}", player, amount, victim)
            }
            Self::NothingToSteal { player } => write!(f, "no one to steal from for {}", player),
            Self::NoEffect { player } => write!(f, "the card had no effect on {}", player),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_display() {
        let event = EffectEvent::Stole {
            player: PlayerName::new("A"),
            victim: PlayerName::new("B"),
            amount: 5,
        };
        assert_eq!(event.to_string(), "A stole 5 resources from B");
        assert_eq!(event.player().as_str(), "A");
    }

    #[test]
    fn test_serialization() {
        let event = EffectEvent::Gained {
            player: PlayerName::new("A"),
            amount: 10,
        };
        let json = serde_json::to_string(&event).unwrap();
        assert_eq!(json, r#"{"kind":"gained","player":"A","amount":10}"#);
    }
}
