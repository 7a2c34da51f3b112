//! Bid collection seam.
//!
//! The engine never prompts anyone. Bids come from a `BidSource`, which an
//! interactive front end implements by prompting and re-prompting until
//! `validate_bid` accepts the input.

use crate::core::{BiddingError, PlayerMap, PlayerName, Result};

/// Secret bids for one round, keyed by player.
pub type BidSet = PlayerMap<i64>;

/// Supplies one bid per eligible player.
///
/// Closures `FnMut(&PlayerName, i64) -> i64` implement this trait, which is
/// convenient for scripted games and tests:
///
/// ```
/// use blind_bidding::bidding::BidSource;
/// use blind_bidding::core::PlayerName;
///
/// let mut half = |_: &PlayerName, available: i64| available / 2;
/// assert_eq!(half.bid(&PlayerName::new("A"), 50), 25);
/// ```
pub trait BidSource {
    /// Return a bid for `player`, who currently holds `available` resources.
    ///
    /// Bids outside `[0, available]` are rejected by the game.
    fn bid(&mut self, player: &PlayerName, available: i64) -> i64;
}

impl<F> BidSource for F
where
    F: FnMut(&PlayerName, i64) -> i64,
{
    fn bid(&mut self, player: &PlayerName, available: i64) -> i64 {
        self(player, available)
    }
}

/// Check that a bid lies in `[0, available]`.
///
/// ```
/// use blind_bidding::bidding::validate_bid;
///
/// assert_eq!(validate_bid("A", 12, 50).unwrap(), 12);
/// assert!(validate_bid("A", 51, 50).is_err());
/// assert!(validate_bid("A", -1, 50).is_err());
/// ```
pub fn validate_bid(player: &str, bid: i64, available: i64) -> Result<i64> {
    if (0..=available).contains(&bid) {
        Ok(bid)
    } else {
        Err(BiddingError::BidOutOfRange {
            player: player.to_string(),
            bid,
            available,
        })
    }
}
