//! Bidding: bid collection seam and round resolution.
//!
//! - `BidSource`: injectable provider of secret bids
//! - `validate_bid`: bound check for bid input
//! - `resolve_round`: determines winners and deducts the winning bid

mod bids;
mod resolver;

pub use bids::{validate_bid, BidSet, BidSource};
pub use resolver::{resolve_round, RoundOutcome, Winners};
