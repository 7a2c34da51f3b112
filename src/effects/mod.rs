//! Card effect application.
//!
//! - `apply_effect`: applies a revealed card to the round's winners
//! - `EffectEvent`: what happened to each winner, for display
//! - `EffectResult`: updated resources plus events
//!
//! Effects never deduct the bid; bid resolution already did.

mod event;
mod resolver;

pub use event::EffectEvent;
pub use resolver::{apply_effect, EffectResult};
