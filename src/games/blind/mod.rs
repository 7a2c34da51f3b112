//! Blind bidding game.
//!
//! Players secretly bid resources each round. The highest bidder(s) pay
//! their bid, a card is revealed and applied to them, and totals are
//! classified against the valid range.
//!
//! `BlindBiddingGame` drives the round state machine; it does no I/O.

mod game;
mod round;

pub use game::BlindBiddingGame;
pub use round::{RoundPhase, RoundReport};
