//! Game configuration types.
//!
//! Games are configured at startup by providing:
//! - `ResourceBounds`: the valid resource range used for classification
//! - `GameConfig`: players, starting resources, bounds, catalog and policies
//!
//! `GameConfig` can be built with `with_*` methods or parsed from JSON.

use serde::{Deserialize, Serialize};

use super::error::{BiddingError, Result};
use super::player::PlayerName;
use crate::cards::{CardCatalog, RawCatalog};

/// Default lower resource bound.
pub const DEFAULT_MIN_RESOURCE: i64 = 0;

/// Default upper resource bound.
pub const DEFAULT_MAX_RESOURCE: i64 = 300;

/// Default starting resources per player.
pub const DEFAULT_STARTING_RESOURCES: i64 = 50;

/// Inclusive valid resource range.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(try_from = "RawBounds")]
pub struct ResourceBounds {
    min: i64,
    max: i64,
}

#[derive(Deserialize)]
struct RawBounds {
    min: i64,
    max: i64,
}

impl TryFrom<RawBounds> for ResourceBounds {
    type Error = BiddingError;

    fn try_from(raw: RawBounds) -> Result<Self> {
        Self::new(raw.min, raw.max)
    }
}

impl ResourceBounds {
    /// Create bounds, failing if `min > max`.
    pub fn new(min: i64, max: i64) -> Result<Self> {
        if min > max {
            return Err(BiddingError::InvalidRange { min, max });
        }
        Ok(Self { min, max })
    }

    /// Lower bound (inclusive).
    #[must_use]
    pub const fn min(&self) -> i64 {
        self.min
    }

    /// Upper bound (inclusive).
    #[must_use]
    pub const fn max(&self) -> i64 {
        self.max
    }

    /// Check if a value is inside the bounds.
    #[must_use]
    pub fn contains(&self, value: i64) -> bool {
        (self.min..=self.max).contains(&value)
    }

    /// Clamp a value into the bounds.
    #[must_use]
    pub fn clamp(&self, value: i64) -> i64 {
        value.clamp(self.min, self.max)
    }
}

impl Default for ResourceBounds {
    fn default() -> Self {
        Self {
            min: DEFAULT_MIN_RESOURCE,
            max: DEFAULT_MAX_RESOURCE,
        }
    }
}

/// Complete game configuration.
///
/// ## Example
///
/// ```
/// use blind_bidding::core::{GameConfig, ResourceBounds};
///
/// let config = GameConfig::new(["Player 1", "Player 2"])
///     .with_starting_resources(80)
///     .with_bounds(ResourceBounds::new(0, 200).unwrap());
///
/// assert!(config.validate().is_ok());
/// assert_eq!(config.players.len(), 2);
/// ```
#[derive(Clone, Debug, Serialize, Deserialize)]
#[serde(try_from = "RawConfig")]
pub struct GameConfig {
    /// Player names, in seating order.
    pub players: Vec<PlayerName>,

    /// Resources each player starts with.
    pub starting_resources: i64,

    /// Valid resource range for classification.
    pub bounds: ResourceBounds,

    /// The game ends once any player's resources are at or below this value.
    pub elimination_threshold: i64,

    /// Clamp totals into `bounds` after each round's validation.
    pub clamp_to_bounds: bool,

    /// Shuffle the deck at game start.
    pub shuffle_deck: bool,

    /// Card catalog the deck is built from.
    pub catalog: CardCatalog,
}

impl Default for GameConfig {
    fn default() -> Self {
        Self {
            players: Vec::new(),
            starting_resources: DEFAULT_STARTING_RESOURCES,
            bounds: ResourceBounds::default(),
            elimination_threshold: 0,
            clamp_to_bounds: false,
            shuffle_deck: true,
            catalog: CardCatalog::standard(),
        }
    }
}

/// Unvalidated configuration as it appears in JSON. Missing fields take
/// the `GameConfig` defaults.
#[derive(Deserialize)]
#[serde(default)]
struct RawConfig {
    players: Vec<PlayerName>,
    starting_resources: i64,
    bounds: Option<RawBounds>,
    elimination_threshold: i64,
    clamp_to_bounds: bool,
    shuffle_deck: bool,
    catalog: Option<RawCatalog>,
}

impl Default for RawConfig {
    fn default() -> Self {
        let defaults = GameConfig::default();
        Self {
            players: defaults.players,
            starting_resources: defaults.starting_resources,
            bounds: None,
            elimination_threshold: defaults.elimination_threshold,
            clamp_to_bounds: defaults.clamp_to_bounds,
            shuffle_deck: defaults.shuffle_deck,
            catalog: None,
        }
    }
}

impl TryFrom<RawConfig> for GameConfig {
    type Error = BiddingError;

    fn try_from(raw: RawConfig) -> Result<Self> {
        let bounds = match raw.bounds {
            Some(bounds) => ResourceBounds::try_from(bounds)?,
            None => ResourceBounds::default(),
        };
        let catalog = match raw.catalog {
            Some(catalog) => CardCatalog::try_from(catalog)?,
            None => CardCatalog::standard(),
        };

        Ok(Self {
            players: raw.players,
            starting_resources: raw.starting_resources,
            bounds,
            elimination_threshold: raw.elimination_threshold,
            clamp_to_bounds: raw.clamp_to_bounds,
            shuffle_deck: raw.shuffle_deck,
            catalog,
        })
    }
}

impl GameConfig {
    /// Create a configuration for the given players with default settings.
    pub fn new<I, N>(players: I) -> Self
    where
        I: IntoIterator<Item = N>,
        N: Into<PlayerName>,
    {
        Self {
            players: players.into_iter().map(Into::into).collect(),
            ..Self::default()
        }
    }

    /// Parse a configuration from JSON and validate it.
    ///
    /// Malformed JSON fails with `Config`; bad bounds, catalog entries or
    /// player lists fail with the same errors as building them in code.
    pub fn from_json(json: &str) -> Result<Self> {
        let raw: RawConfig = serde_json::from_str(json)?;
        let config = Self::try_from(raw)?;
        config.validate()?;
        Ok(config)
    }

    /// Set starting resources.
    #[must_use]
    pub fn with_starting_resources(mut self, resources: i64) -> Self {
        self.starting_resources = resources;
        self
    }

    /// Set the valid resource range.
    #[must_use]
    pub fn with_bounds(mut self, bounds: ResourceBounds) -> Self {
        self.bounds = bounds;
        self
    }

    /// Set the elimination threshold.
    #[must_use]
    pub fn with_elimination_threshold(mut self, threshold: i64) -> Self {
        self.elimination_threshold = threshold;
        self
    }

    /// Clamp resources into bounds after validation.
    #[must_use]
    pub fn clamped(mut self) -> Self {
        self.clamp_to_bounds = true;
        self
    }

    /// Keep the deck in catalog order instead of shuffling.
    #[must_use]
    pub fn unshuffled(mut self) -> Self {
        self.shuffle_deck = false;
        self
    }

    /// Set the card catalog.
    #[must_use]
    pub fn with_catalog(mut self, catalog: CardCatalog) -> Self {
        self.catalog = catalog;
        self
    }

    /// Check player list and bounds invariants.
    pub fn validate(&self) -> Result<()> {
        ResourceBounds::new(self.bounds.min(), self.bounds.max())?;
        if self.players.is_empty() {
            return Err(BiddingError::NoPlayers);
        }
        for (i, name) in self.players.iter().enumerate() {
            if self.players[..i].contains(name) {
                return Err(BiddingError::DuplicatePlayer(name.to_string()));
            }
        }
        Ok(())
    }
}
