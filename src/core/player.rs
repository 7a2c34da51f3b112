//! Player identification and per-player data storage.
//!
//! ## PlayerName
//!
//! Players are identified by a unique name.
//!
//! ## PlayerMap
//!
//! Insertion-ordered per-player storage backed by a `Vec` with an
//! `FxHashMap` index for O(1) lookup by name. Insertion order is the
//! canonical player order: iteration, tie listings and steal target
//! candidates all follow it, which keeps seeded games reproducible.

use rustc_hash::FxHashMap;
use serde::ser::SerializeMap;
use serde::{Deserialize, Serialize, Serializer};
use std::borrow::Borrow;
use std::ops::{Index, IndexMut};

/// Unique player name.
#[derive(Clone, Debug, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(transparent)]
pub struct PlayerName(String);

impl PlayerName {
    /// Create a new player name.
    #[must_use]
    pub fn new(name: impl Into<String>) -> Self {
        Self(name.into())
    }

    /// Get the name as a string slice.
    #[must_use]
    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl std::fmt::Display for PlayerName {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(&self.0)
    }
}

impl Borrow<str> for PlayerName {
    fn borrow(&self) -> &str {
        &self.0
    }
}

impl From<&str> for PlayerName {
    fn from(name: &str) -> Self {
        Self::new(name)
    }
}

impl From<String> for PlayerName {
    fn from(name: String) -> Self {
        Self(name)
    }
}

/// Per-player data keyed by name, in insertion order.
///
/// ## Example
///
/// ```
/// use blind_bidding::core::PlayerMap;
///
/// let mut resources: PlayerMap<i64> = PlayerMap::new();
/// resources.insert("Andrew", 50);
/// resources.insert("CPU1", 60);
///
/// assert_eq!(resources["CPU1"], 60);
///
/// resources["Andrew"] -= 12;
/// assert_eq!(resources["Andrew"], 38);
///
/// let names: Vec<_> = resources.names().map(|n| n.as_str()).collect();
/// assert_eq!(names, ["Andrew", "CPU1"]);
/// ```
#[derive(Clone, Debug)]
pub struct PlayerMap<T> {
    entries: Vec<(PlayerName, T)>,
    index: FxHashMap<PlayerName, usize>,
}

impl<T> PlayerMap<T> {
    /// Create an empty map.
    #[must_use]
    pub fn new() -> Self {
        Self {
            entries: Vec::new(),
            index: FxHashMap::default(),
        }
    }

    /// Create a map with one entry per name, valued by a factory function.
    ///
    /// Repeated names keep their first position and the last value.
    pub fn from_names<I, N>(names: I, factory: impl Fn(&PlayerName) -> T) -> Self
    where
        I: IntoIterator<Item = N>,
        N: Into<PlayerName>,
    {
        let mut map = Self::new();
        for name in names {
            let name = name.into();
            let value = factory(&name);
            map.insert(name, value);
        }
        map
    }

    /// Insert or replace a player's value.
    ///
    /// Returns the previous value if the player was already present. A
    /// replaced player keeps its original position.
    pub fn insert(&mut self, name: impl Into<PlayerName>, value: T) -> Option<T> {
        let name = name.into();
        if let Some(&idx) = self.index.get(&name) {
            return Some(std::mem::replace(&mut self.entries[idx].1, value));
        }
        self.index.insert(name.clone(), self.entries.len());
        self.entries.push((name, value));
        None
    }

    /// Get a reference to a player's value.
    #[must_use]
    pub fn get(&self, name: &str) -> Option<&T> {
        self.index.get(name).map(|&idx| &self.entries[idx].1)
    }

    /// Get a mutable reference to a player's value.
    pub fn get_mut(&mut self, name: &str) -> Option<&mut T> {
        let idx = *self.index.get(name)?;
        Some(&mut self.entries[idx].1)
    }

    /// Check if a player is present.
    #[must_use]
    pub fn contains(&self, name: &str) -> bool {
        self.index.contains_key(name)
    }

    /// Number of players.
    #[must_use]
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    /// Check if the map has no players.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// Iterate over (name, value) pairs in player order.
    pub fn iter(&self) -> impl Iterator<Item = (&PlayerName, &T)> {
        self.entries.iter().map(|(n, v)| (n, v))
    }

    /// Iterate over (name, &mut value) pairs in player order.
    pub fn iter_mut(&mut self) -> impl Iterator<Item = (&PlayerName, &mut T)> {
        self.entries.iter_mut().map(|(n, v)| (&*n, v))
    }

    /// Iterate over player names in player order.
    pub fn names(&self) -> impl Iterator<Item = &PlayerName> {
        self.entries.iter().map(|(n, _)| n)
    }

    /// Iterate over values in player order.
    pub fn values(&self) -> impl Iterator<Item = &T> {
        self.entries.iter().map(|(_, v)| v)
    }

    /// Build a new map with the same players and transformed values.
    pub fn map<U>(&self, mut f: impl FnMut(&PlayerName, &T) -> U) -> PlayerMap<U> {
        PlayerMap {
            entries: self.entries.iter().map(|(n, v)| (n.clone(), f(n, v))).collect(),
            index: self.index.clone(),
        }
    }
}

impl<T> Default for PlayerMap<T> {
    fn default() -> Self {
        Self::new()
    }
}

impl<T: PartialEq> PartialEq for PlayerMap<T> {
    fn eq(&self, other: &Self) -> bool {
        self.entries == other.entries
    }
}

impl<T: Eq> Eq for PlayerMap<T> {}

impl<T> Index<&str> for PlayerMap<T> {
    type Output = T;

    fn index(&self, name: &str) -> &Self::Output {
        self.get(name)
            .unwrap_or_else(|| panic!("Player '{}' not found", name))
    }
}

impl<T> IndexMut<&str> for PlayerMap<T> {
    fn index_mut(&mut self, name: &str) -> &mut Self::Output {
        self.get_mut(name)
            .unwrap_or_else(|| panic!("Player '{}' not found", name))
    }
}

impl<N: Into<PlayerName>, T> FromIterator<(N, T)> for PlayerMap<T> {
    fn from_iter<I: IntoIterator<Item = (N, T)>>(iter: I) -> Self {
        let mut map = Self::new();
        for (name, value) in iter {
            map.insert(name, value);
        }
        map
    }
}

impl<T: Serialize> Serialize for PlayerMap<T> {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        let mut map = serializer.serialize_map(Some(self.entries.len()))?;
        for (name, value) in &self.entries {
            map.serialize_entry(name, value)?;
        }
        map.end()
    }
}
