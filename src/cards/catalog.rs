//! Card catalog: the card types a deck is built from.
//!
//! A catalog maps card-type names to `{ quantity, effect, amount }` and
//! keeps entries in insertion order, which is also the order cards appear in
//! an unshuffled deck. Catalogs are built in code or parsed from JSON:
//!
//! ```
//! use blind_bidding::cards::CardCatalog;
//!
//! let catalog = CardCatalog::from_json(r#"{
//!     "Resource Gain": { "quantity": 5, "effect": "gain", "amount": 10 },
//!     "No Effect":     { "quantity": 4, "effect": "none", "amount": 0 }
//! }"#).unwrap();
//!
//! assert_eq!(catalog.total_cards(), 9);
//! assert_eq!(catalog.entries()[0].name, "Resource Gain");
//! ```

use serde::de::{MapAccess, Visitor};
use serde::ser::SerializeMap;
use serde::{Deserialize, Deserializer, Serialize, Serializer};

use super::definition::EffectKind;
use crate::core::{BiddingError, Result};

/// One card type in a catalog.
#[derive(Clone, Debug, PartialEq, Eq, Serialize)]
pub struct CatalogEntry {
    /// Card type name.
    #[serde(skip)]
    pub name: String,
    /// Number of copies in the deck.
    pub quantity: u32,
    /// Effect of every copy.
    pub effect: EffectKind,
    /// Effect magnitude of every copy.
    pub amount: u32,
}

/// Ordered card-type catalog.
#[derive(Clone, Debug, Default, PartialEq, Eq, Deserialize)]
#[serde(try_from = "RawCatalog")]
pub struct CardCatalog {
    entries: Vec<CatalogEntry>,
}

impl CardCatalog {
    /// Create an empty catalog.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// The stock catalog: 5 gain-10, 3 lose-8, 2 steal-5, 4 no-effect.
    #[must_use]
    pub fn standard() -> Self {
        Self::new()
            .with_entry("Resource Gain", 5, EffectKind::Gain, 10)
            .with_entry("Resource Loss", 3, EffectKind::Lose, 8)
            .with_entry("Steal Resource", 2, EffectKind::Steal, 5)
            .with_entry("No Effect", 4, EffectKind::None, 0)
    }

    /// Parse a catalog from a JSON object, preserving entry order.
    pub fn from_json(json: &str) -> Result<Self> {
        let raw: RawCatalog = serde_json::from_str(json)?;
        Self::try_from(raw)
    }

    /// Add a card type (builder pattern).
    ///
    /// An existing entry with the same name is replaced in place.
    #[must_use]
    pub fn with_entry(
        mut self,
        name: impl Into<String>,
        quantity: u32,
        effect: EffectKind,
        amount: u32,
    ) -> Self {
        let entry = CatalogEntry {
            name: name.into(),
            quantity,
            effect,
            amount,
        };
        match self.entries.iter_mut().find(|e| e.name == entry.name) {
            Some(existing) => *existing = entry,
            None => self.entries.push(entry),
        }
        self
    }

    /// Entries in catalog order.
    #[must_use]
    pub fn entries(&self) -> &[CatalogEntry] {
        &self.entries
    }

    /// Look up an entry by name.
    #[must_use]
    pub fn get(&self, name: &str) -> Option<&CatalogEntry> {
        self.entries.iter().find(|e| e.name == name)
    }

    /// Total number of cards the catalog expands to.
    #[must_use]
    pub fn total_cards(&self) -> usize {
        self.entries.iter().map(|e| e.quantity as usize).sum()
    }

    /// Check if the catalog has no entries.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}

impl Serialize for CardCatalog {
    fn serialize<S: Serializer>(&self, serializer: S) -> std::result::Result<S::Ok, S::Error> {
        let mut map = serializer.serialize_map(Some(self.entries.len()))?;
        for entry in &self.entries {
            map.serialize_entry(&entry.name, entry)?;
        }
        map.end()
    }
}

/// Unvalidated catalog entry as it appears in configuration.
#[derive(Debug, Default, Deserialize)]
struct RawEntry {
    quantity: Option<i64>,
    effect: Option<String>,
    amount: Option<i64>,
}

/// Unvalidated catalog in document order.
#[derive(Debug, Default)]
pub(crate) struct RawCatalog(Vec<(String, RawEntry)>);

impl<'de> Deserialize<'de> for RawCatalog {
    fn deserialize<D>(deserializer: D) -> std::result::Result<Self, D::Error>
    where
        D: Deserializer<'de>,
    {
        struct RawCatalogVisitor;

        impl<'de> Visitor<'de> for RawCatalogVisitor {
            type Value = RawCatalog;

            fn expecting(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
                f.write_str("a map of card type names to card entries")
            }

            fn visit_map<A>(self, mut access: A) -> std::result::Result<RawCatalog, A::Error>
            where
                A: MapAccess<'de>,
            {
                let mut entries = Vec::with_capacity(access.size_hint().unwrap_or(0));
                while let Some((name, entry)) = access.next_entry::<String, RawEntry>()? {
                    entries.push((name, entry));
                }
                Ok(RawCatalog(entries))
            }
        }

        deserializer.deserialize_map(RawCatalogVisitor)
    }
}

fn invalid(entry: &str, reason: impl Into<String>) -> BiddingError {
    BiddingError::InvalidCatalog {
        entry: entry.to_string(),
        reason: reason.into(),
    }
}

fn non_negative(entry: &str, field: &str, value: Option<i64>) -> Result<u32> {
    let value = value.ok_or_else(|| invalid(entry, format!("missing field '{}'", field)))?;
    if value < 0 {
        return Err(invalid(entry, format!("{} must be non-negative, got {}", field, value)));
    }
    u32::try_from(value).map_err(|_| invalid(entry, format!("{} {} is too large", field, value)))
}

impl TryFrom<RawCatalog> for CardCatalog {
    type Error = BiddingError;

    fn try_from(raw: RawCatalog) -> Result<Self> {
        let mut catalog = CardCatalog::new();

        for (name, entry) in raw.0 {
            if catalog.get(&name).is_some() {
                return Err(invalid(&name, "duplicate card type"));
            }

            let quantity = non_negative(&name, "quantity", entry.quantity)?;
            let amount = non_negative(&name, "amount", entry.amount)?;
            let effect = entry
                .effect
                .ok_or_else(|| invalid(&name, "missing field 'effect'"))?
                .parse::<EffectKind>()?;

            catalog = catalog.with_entry(name, quantity, effect, amount);
        }

        Ok(catalog)
    }
}
