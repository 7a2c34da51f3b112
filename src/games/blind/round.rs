//! Per-round state machine.
//!
//! A round moves strictly forward:
//! `AwaitingBids -> BidsResolved -> CardApplied -> Validated -> RoundComplete`,
//! and a completed round hands over to the next round's `AwaitingBids`.
//! Each phase carries the data produced so far, so later steps never have
//! to guess whether earlier ones ran.

use serde::Serialize;

use crate::bidding::{BidSet, RoundOutcome};
use crate::cards::Card;
use crate::core::PlayerMap;
use crate::effects::EffectEvent;
use crate::validation::ResourceStatus;

/// Phase of the current round.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize)]
pub enum RoundPhase {
    AwaitingBids,
    BidsResolved,
    CardApplied,
    Validated,
    RoundComplete,
}

impl RoundPhase {
    /// The phase that follows this one. `RoundComplete` rolls over into the
    /// next round.
    #[must_use]
    pub const fn next(self) -> Self {
        match self {
            Self::AwaitingBids => Self::BidsResolved,
            Self::BidsResolved => Self::CardApplied,
            Self::CardApplied => Self::Validated,
            Self::Validated => Self::RoundComplete,
            Self::RoundComplete => Self::AwaitingBids,
        }
    }
}

/// Everything that happened in one round, for display.
#[derive(Clone, Debug, PartialEq, Eq, Serialize)]
pub struct RoundReport {
    /// Round number, starting at 1.
    pub round: u32,
    /// Bids as submitted.
    pub bids: BidSet,
    /// Winners, winning bid and post-deduction totals.
    pub outcome: RoundOutcome,
    /// Revealed card, `None` if the deck was already empty.
    pub card: Option<Card>,
    /// What the card did to each winner.
    pub events: Vec<EffectEvent>,
    /// Classification of the post-effect totals.
    pub statuses: PlayerMap<ResourceStatus>,
    /// Totals at the end of the round (clamped if configured).
    pub resources: PlayerMap<i64>,
    /// Cards left after this round's reveal.
    pub cards_remaining: usize,
}

/// Round data accumulated phase by phase.
#[derive(Clone, Debug)]
pub(crate) enum RoundState {
    AwaitingBids,
    BidsResolved {
        bids: BidSet,
        outcome: RoundOutcome,
    },
    CardApplied {
        bids: BidSet,
        outcome: RoundOutcome,
        card: Option<Card>,
        events: Vec<EffectEvent>,
    },
    Validated {
        bids: BidSet,
        outcome: RoundOutcome,
        card: Option<Card>,
        events: Vec<EffectEvent>,
        statuses: PlayerMap<ResourceStatus>,
    },
}

impl RoundState {
    pub(crate) fn phase(&self) -> RoundPhase {
        match self {
            Self::AwaitingBids => RoundPhase::AwaitingBids,
            Self::BidsResolved { .. } => RoundPhase::BidsResolved,
            Self::CardApplied { .. } => RoundPhase::CardApplied,
            Self::Validated { .. } => RoundPhase::Validated,
        }
    }
}
