//! End-of-game rules: terminal detection and final standings.

use serde::Serialize;

use crate::core::{PlayerMap, PlayerName};

/// Result of a completed game.
#[derive(Clone, Debug, PartialEq, Eq, Serialize)]
pub enum GameResult {
    /// Single winner.
    Winner(PlayerName),
    /// Several players share the highest total.
    Winners(Vec<PlayerName>),
    /// No players, no winner.
    Draw,
}

impl GameResult {
    /// Check if a player won.
    #[must_use]
    pub fn is_winner(&self, player: &str) -> bool {
        match self {
            GameResult::Winner(p) => p.as_str() == player,
            GameResult::Winners(ps) => ps.iter().any(|p| p.as_str() == player),
            GameResult::Draw => false,
        }
    }
}

/// Why a game stopped.
#[derive(Clone, Debug, PartialEq, Eq, Serialize)]
pub enum TerminalReason {
    /// No cards left to reveal.
    DeckExhausted,
    /// A player's resources fell to or below the elimination threshold.
    PlayerEliminated(PlayerName),
    /// Nobody has resources left to bid.
    NoEligibleBidders,
}

/// Decide whether the game is over.
///
/// Checks, in order: elimination (first player in order at or below
/// `elimination_threshold`), then no eligible bidders, then deck exhaustion.
#[must_use]
pub fn check_terminal(
    resources: &PlayerMap<i64>,
    cards_remaining: usize,
    elimination_threshold: i64,
) -> Option<TerminalReason> {
    if let Some((player, _)) = resources.iter().find(|(_, &total)| total <= elimination_threshold) {
        return Some(TerminalReason::PlayerEliminated(player.clone()));
    }
    if resources.values().all(|&total| total <= 0) {
        return Some(TerminalReason::NoEligibleBidders);
    }
    if cards_remaining == 0 {
        return Some(TerminalReason::DeckExhausted);
    }
    None
}

/// Player(s) with the highest total; ties are reported in player order.
///
/// ```
/// use blind_bidding::core::PlayerMap;
/// use blind_bidding::rules::{final_result, GameResult};
///
/// let resources: PlayerMap<i64> = [("A", 70), ("B", 70), ("C", 10)].into_iter().collect();
/// match final_result(&resources) {
///     GameResult::Winners(names) => assert_eq!(names.len(), 2),
///     other => panic!("expected a tie, got {:?}", other),
/// }
/// ```
#[must_use]
pub fn final_result(resources: &PlayerMap<i64>) -> GameResult {
    let Some(best) = resources.values().copied().max() else {
        return GameResult::Draw;
    };

    let mut leaders: Vec<PlayerName> = resources
        .iter()
        .filter(|(_, &total)| total == best)
        .map(|(player, _)| player.clone())
        .collect();

    if leaders.len() == 1 {
        GameResult::Winner(leaders.remove(0))
    } else {
        GameResult::Winners(leaders)
    }
}
