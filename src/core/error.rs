//! Error types for the rules engine.
//!
//! Every fallible operation returns [`Result`]. Errors are raised at the
//! point where a precondition is violated and before any resource total is
//! mutated, so a failed call leaves the caller's state untouched.

use thiserror::Error;

use crate::games::blind::RoundPhase;
use crate::rules::TerminalReason;

/// Errors raised by the rules engine.
#[derive(Debug, Error)]
pub enum BiddingError {
    /// A card catalog entry is malformed.
    #[error("invalid catalog entry '{entry}': {reason}")]
    InvalidCatalog { entry: String, reason: String },

    /// Bid resolution was asked to resolve an empty bid set.
    #[error("no bids were submitted")]
    NoBids,

    /// A card effect label is not one of gain, lose, steal or none.
    #[error("unknown card effect '{0}'")]
    UnknownEffect(String),

    /// Resource bounds with `min > max`.
    #[error("invalid resource range: min {min} is greater than max {max}")]
    InvalidRange { min: i64, max: i64 },

    /// A player was referenced that is not part of the resource map.
    #[error("unknown player '{0}'")]
    UnknownPlayer(String),

    /// The same player name was listed twice.
    #[error("duplicate player '{0}'")]
    DuplicatePlayer(String),

    /// A game needs at least one player.
    #[error("a game needs at least one player")]
    NoPlayers,

    /// A bid outside `[0, available]`.
    #[error("bid {bid} from '{player}' is outside 0..={available}")]
    BidOutOfRange {
        player: String,
        bid: i64,
        available: i64,
    },

    /// A player without resources tried to bid.
    #[error("player '{0}' has no resources and cannot bid")]
    IneligibleBidder(String),

    /// A round step was called out of order.
    #[error("round is in phase {actual:?}, expected {expected:?}")]
    PhaseOrder {
        expected: RoundPhase,
        actual: RoundPhase,
    },

    /// A resource total would leave the representable range.
    #[error("resource total of '{0}' overflowed")]
    ResourceOverflow(String),

    /// The game has already ended.
    #[error("game is over: {0:?}")]
    GameOver(TerminalReason),

    /// Configuration could not be parsed.
    #[error("invalid configuration: {0}")]
    Config(#[from] serde_json::Error),
}

/// Result alias used throughout the crate.
pub type Result<T> = std::result::Result<T, BiddingError>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_error_messages() {
        let err = BiddingError::InvalidRange { min: 10, max: 5 };
        assert_eq!(
            err.to_string(),
            "invalid resource range: min 10 is greater than max 5"
        );

        let err = BiddingError::UnknownEffect("explode".to_string());
        assert_eq!(err.to_string(), "unknown card effect 'explode'");

        let err = BiddingError::BidOutOfRange {
            player: "A".to_string(),
            bid: 70,
            available: 50,
        };
        assert_eq!(err.to_string(), "bid 70 from 'A' is outside 0..=50");
    }

    #[test]
    fn test_config_error_from_json() {
        let parse: std::result::Result<serde_json::Value, _> = serde_json::from_str("{");
        let err: BiddingError = parse.unwrap_err().into();
        assert!(matches!(err, BiddingError::Config(_)));
    }
}
