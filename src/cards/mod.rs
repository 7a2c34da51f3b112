//! Card system: effect kinds, catalogs and decks.
//!
//! ## Key Types
//!
//! - `EffectKind`: gain, lose, steal or none
//! - `Card`: immutable card value (type label, effect, amount)
//! - `CardCatalog`: ordered card-type catalog, buildable in code or from JSON
//! - `Deck`: ordered card sequence consumed from the front
//!
//! `build_deck` is the only way catalogs become decks.

pub mod catalog;
pub mod deck;
pub mod definition;

pub use catalog::{CardCatalog, CatalogEntry};
pub(crate) use catalog::RawCatalog;
pub use deck::{build_deck, build_deck_from_json, Deck};
pub use definition::{Card, EffectKind};
