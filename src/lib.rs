//! # blind-bidding
//!
//! Rules engine for a multiplayer blind bidding card game.
//!
//! Each round, players secretly bid resources. The highest bidder(s) win
//! and pay their bid, a card is revealed from a shuffled deck and applied to
//! the winner(s), and resulting totals are classified against a valid range.
//!
//! ## Design Principles
//!
//! 1. **No I/O**: Prompting and rendering are left to the caller. Bids come
//!    in through `BidSource`; every step returns plain, serializable data.
//!
//! 2. **Injected randomness**: Deck shuffling and steal targets draw from a
//!    seeded `GameRng`, so games are reproducible.
//!
//! 3. **Bid deducted once**: Bid resolution deducts the winning bid; card
//!    effects never touch it.
//!
//! ## Modules
//!
//! - `core`: Players, RNG, configuration, errors
//! - `cards`: Effect kinds, catalogs, deck building
//! - `bidding`: Bid collection seam and bid resolution
//! - `effects`: Card effect application
//! - `validation`: Resource range classification
//! - `rules`: Terminal detection and final standings
//! - `games`: Round orchestration

pub mod core;
pub mod cards;
pub mod bidding;
pub mod effects;
pub mod validation;
pub mod rules;
pub mod games;

// Re-export commonly used types
pub use crate::core::{
    BiddingError, Result,
    GameConfig, ResourceBounds,
    GameRng,
    PlayerName, PlayerMap,
};

pub use crate::cards::{build_deck, Card, CardCatalog, CatalogEntry, Deck, EffectKind};

pub use crate::bidding::{resolve_round, validate_bid, BidSet, BidSource, RoundOutcome};

pub use crate::effects::{apply_effect, EffectEvent, EffectResult};

pub use crate::validation::{validate, validate_range, RangeStatus, ResourceStatus};

pub use crate::rules::{final_result, GameResult, TerminalReason};

pub use crate::games::blind::{BlindBiddingGame, RoundPhase, RoundReport};
