//! Core engine types: players, RNG, configuration, errors.
//!
//! This module contains the building blocks shared by every component.

pub mod player;
pub mod rng;
pub mod config;
pub mod error;

pub use player::{PlayerName, PlayerMap};
pub use rng::GameRng;
pub use config::{
    GameConfig, ResourceBounds, DEFAULT_MAX_RESOURCE, DEFAULT_MIN_RESOURCE,
    DEFAULT_STARTING_RESOURCES,
};
pub use error::{BiddingError, Result};
