//! Bid resolution.
//!
//! The highest bid wins. Every player who bid exactly that amount wins
//! together and each pays the full winning bid; nobody else pays anything.
//! This is the only place a bid is ever deducted.

use log::debug;
use serde::Serialize;
use smallvec::SmallVec;

use super::bids::BidSet;
use crate::core::{BiddingError, PlayerMap, PlayerName, Result};

/// Winners of a round, in bid order.
///
/// SmallVec avoids allocation for the common case of a handful of tied
/// winners.
pub type Winners = SmallVec<[PlayerName; 4]>;

/// Result of resolving one round of bids.
#[derive(Clone, Debug, PartialEq, Eq, Serialize)]
pub struct RoundOutcome {
    /// Players who submitted the winning bid. Never empty.
    pub winning_players: Winners,
    /// The maximum submitted bid.
    pub winning_bid: i64,
    /// Resources after deducting the winning bid from each winner.
    pub updated_resources: PlayerMap<i64>,
}

impl RoundOutcome {
    /// Check if a player won the round.
    #[must_use]
    pub fn is_winner(&self, player: &str) -> bool {
        self.winning_players.iter().any(|p| p.as_str() == player)
    }

    /// Check if more than one player won.
    #[must_use]
    pub fn is_tie(&self) -> bool {
        self.winning_players.len() > 1
    }
}

/// Resolve a round of secret bids.
///
/// `resources` may contain players who did not bid; they pass through
/// unchanged. Bid legality (`0..=resources`) is the caller's responsibility
/// and is not checked here.
///
/// Fails with `NoBids` for an empty bid set, `UnknownPlayer` if a bidder
/// is missing from `resources`, and `ResourceOverflow` if a deduction falls
/// outside the `i64` range.
///
/// ```
/// use blind_bidding::bidding::resolve_round;
/// use blind_bidding::core::PlayerMap;
///
/// let resources: PlayerMap<i64> = [("A", 50), ("B", 60)].into_iter().collect();
/// let bids: PlayerMap<i64> = [("A", 12), ("B", 20)].into_iter().collect();
///
/// let outcome = resolve_round(&resources, &bids).unwrap();
/// assert_eq!(outcome.winning_bid, 20);
/// assert!(outcome.is_winner("B"));
/// assert_eq!(outcome.updated_resources["A"], 50);
/// assert_eq!(outcome.updated_resources["B"], 40);
/// ```
pub fn resolve_round(resources: &PlayerMap<i64>, bids: &BidSet) -> Result<RoundOutcome> {
    let winning_bid = bids.values().copied().max().ok_or(BiddingError::NoBids)?;

    if let Some(unknown) = bids.names().find(|p| !resources.contains(p.as_str())) {
        return Err(BiddingError::UnknownPlayer(unknown.to_string()));
    }

    let winning_players: Winners = bids
        .iter()
        .filter(|(_, &bid)| bid == winning_bid)
        .map(|(player, _)| player.clone())
        .collect();

    let mut updated_resources = resources.clone();
    for player in &winning_players {
        let total = &mut updated_resources[player.as_str()];
        *total = total
            .checked_sub(winning_bid)
            .ok_or_else(|| BiddingError::ResourceOverflow(player.to_string()))?;
    }

    debug!(
        "round resolved: winning bid {} by {}",
        winning_bid,
        winning_players
            .iter()
            .map(PlayerName::as_str)
            .collect::<Vec<_>>()
            .join(", ")
    );

    Ok(RoundOutcome {
        winning_players,
        winning_bid,
        updated_resources,
    })
}

#[cfg(test)]
mod tests {
    use super::*;

    fn map(entries: &[(&str, i64)]) -> PlayerMap<i64> {
        entries.iter().map(|&(n, v)| (n, v)).collect()
    }

    #[test]
    fn test_single_winner() {
        let resources = map(&[("A", 50), ("B", 60)]);
        let outcome = resolve_round(&resources, &map(&[("A", 12), ("B", 20)])).unwrap();

        assert_eq!(outcome.winning_bid, 20);
        assert_eq!(outcome.winning_players.as_slice(), [PlayerName::new("B")]);
        assert_eq!(outcome.updated_resources, map(&[("A", 50), ("B", 40)]));
        assert!(!outcome.is_tie());
    }

    #[test]
    fn test_tie_all_winners_pay() {
        let resources = map(&[("A", 50), ("B", 50)]);
        let outcome = resolve_round(&resources, &map(&[("A", 15), ("B", 15)])).unwrap();

        assert_eq!(outcome.winning_bid, 15);
        assert!(outcome.is_tie());
        assert!(outcome.is_winner("A"));
        assert!(outcome.is_winner("B"));
        assert_eq!(outcome.updated_resources, map(&[("A", 35), ("B", 35)]));
    }

    #[test]
    fn test_non_bidders_pass_through() {
        let resources = map(&[("A", 50), ("B", 0), ("C", 30)]);
        let outcome = resolve_round(&resources, &map(&[("A", 10), ("C", 5)])).unwrap();

        assert_eq!(outcome.winning_players.as_slice(), [PlayerName::new("A")]);
        assert_eq!(outcome.updated_resources, map(&[("A", 40), ("B", 0), ("C", 30)]));
    }

    #[test]
    fn test_zero_bids_tie() {
        let resources = map(&[("A", 5), ("B", 5)]);
        let outcome = resolve_round(&resources, &map(&[("A", 0), ("B", 0)])).unwrap();

        assert_eq!(outcome.winning_bid, 0);
        assert_eq!(outcome.winning_players.len(), 2);
        assert_eq!(outcome.updated_resources, map(&[("A", 5), ("B", 5)]));
    }

    #[test]
    fn test_overbid_is_not_clamped() {
        let outcome = resolve_round(&map(&[("A", 10)]), &map(&[("A", 25)])).unwrap();
        assert_eq!(outcome.updated_resources["A"], -15);
    }

    #[test]
    fn test_deduction_overflow() {
        let err = resolve_round(&map(&[("A", -2)]), &map(&[("A", i64::MAX)])).unwrap_err();
        assert!(matches!(err, BiddingError::ResourceOverflow(name) if name == "A"));

        // 0 - i64::MAX is still representable
        let outcome = resolve_round(&map(&[("A", 0)]), &map(&[("A", i64::MAX)])).unwrap();
        assert_eq!(outcome.updated_resources["A"], -i64::MAX);
    }

    #[test]
    fn test_no_bids() {
        let err = resolve_round(&map(&[("A", 10)]), &PlayerMap::new()).unwrap_err();
        assert!(matches!(err, BiddingError::NoBids));
    }

    #[test]
    fn test_unknown_bidder() {
        let err = resolve_round(&map(&[("A", 10)]), &map(&[("A", 1), ("Z", 2)])).unwrap_err();
        assert!(matches!(err, BiddingError::UnknownPlayer(name) if name == "Z"));
    }

    #[test]
    fn test_outcome_serialization() {
        let resources = map(&[("A", 50), ("B", 60)]);
        let outcome = resolve_round(&resources, &map(&[("A", 12), ("B", 20)])).unwrap();
        let json = serde_json::to_string(&outcome).unwrap();
        assert_eq!(
            json,
            r#"{"winning_players":["B"],"winning_bid":20,"updated_resources":{"A":50,"B":40}}"#
        );
    }
}
