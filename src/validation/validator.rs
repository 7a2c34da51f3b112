//! Resource range classification.

use log::{trace, warn};
use serde::Serialize;

use crate::core::{PlayerMap, ResourceBounds, Result};

/// Where a total sits relative to the valid range.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum RangeStatus {
    BelowRange,
    InRange,
    AboveRange,
}

impl RangeStatus {
    /// Classify a value against bounds.
    #[must_use]
    pub fn classify(value: i64, bounds: &ResourceBounds) -> Self {
        if value < bounds.min() {
            Self::BelowRange
        } else if value > bounds.max() {
            Self::AboveRange
        } else {
            Self::InRange
        }
    }
}

/// A player's total and its classification.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize)]
pub struct ResourceStatus {
    pub resources: i64,
    pub status: RangeStatus,
}

/// Classify every player's total against `bounds`.
///
/// Pure: the input is not modified and values are never clamped.
///
/// ```
/// use blind_bidding::core::{PlayerMap, ResourceBounds};
/// use blind_bidding::validation::{validate, RangeStatus};
///
/// let resources: PlayerMap<i64> = [("A", -5), ("B", 150), ("C", 305)].into_iter().collect();
/// let statuses = validate(&resources, &ResourceBounds::default());
///
/// assert_eq!(statuses["A"].status, RangeStatus::BelowRange);
/// assert_eq!(statuses["B"].status, RangeStatus::InRange);
/// assert_eq!(statuses["C"].status, RangeStatus::AboveRange);
/// ```
#[must_use]
pub fn validate(resources: &PlayerMap<i64>, bounds: &ResourceBounds) -> PlayerMap<ResourceStatus> {
    resources.map(|player, &total| {
        let status = RangeStatus::classify(total, bounds);
        if status == RangeStatus::InRange {
            trace!("{}: {} in range", player, total);
        } else {
            warn!(
                "{}: {} is outside {}..={} ({:?})",
                player,
                total,
                bounds.min(),
                bounds.max(),
                status
            );
        }
        ResourceStatus {
            resources: total,
            status,
        }
    })
}

/// Classify against raw bounds, failing with `InvalidRange` if `min > max`.
pub fn validate_range(
    resources: &PlayerMap<i64>,
    min: i64,
    max: i64,
) -> Result<PlayerMap<ResourceStatus>> {
    let bounds = ResourceBounds::new(min, max)?;
    Ok(validate(resources, &bounds))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::BiddingError;

    fn map(entries: &[(&str, i64)]) -> PlayerMap<i64> {
        entries.iter().map(|&(n, v)| (n, v)).collect()
    }

    #[test]
    fn test_default_bounds_classification() {
        let bounds = ResourceBounds::default();

        assert_eq!(validate(&map(&[("A", -5)]), &bounds)["A"].status, RangeStatus::BelowRange);
        assert_eq!(validate(&map(&[("A", 305)]), &bounds)["A"].status, RangeStatus::AboveRange);
        assert_eq!(validate(&map(&[("A", 150)]), &bounds)["A"].status, RangeStatus::InRange);
    }

    #[test]
    fn test_bounds_are_inclusive() {
        let statuses = validate(&map(&[("Low", 0), ("High", 300)]), &ResourceBounds::default());

        assert_eq!(statuses["Low"].status, RangeStatus::InRange);
        assert_eq!(statuses["High"].status, RangeStatus::InRange);
    }

    #[test]
    fn test_does_not_clamp() {
        let statuses = validate(&map(&[("A", -40)]), &ResourceBounds::default());
        assert_eq!(
            statuses["A"],
            ResourceStatus {
                resources: -40,
                status: RangeStatus::BelowRange
            }
        );
    }

    #[test]
    fn test_pure_and_repeatable() {
        let resources = map(&[("A", 10), ("B", 400)]);
        let before = resources.clone();

        let first = validate(&resources, &ResourceBounds::default());
        let second = validate(&resources, &ResourceBounds::default());

        assert_eq!(first, second);
        assert_eq!(resources, before);
    }

    #[test]
    fn test_custom_range() {
        let statuses = validate_range(&map(&[("A", 5), ("B", 15), ("C", 25)]), 10, 20).unwrap();

        assert_eq!(statuses["A"].status, RangeStatus::BelowRange);
        assert_eq!(statuses["B"].status, RangeStatus::InRange);
        assert_eq!(statuses["C"].status, RangeStatus::AboveRange);
    }

    #[test]
    fn test_invalid_range() {
        let err = validate_range(&map(&[("A", 5)]), 20, 10).unwrap_err();
        assert!(matches!(err, BiddingError::InvalidRange { min: 20, max: 10 }));
    }

    #[test]
    fn test_status_serialization() {
        let statuses = validate(&map(&[("A", -1)]), &ResourceBounds::default());
        let json = serde_json::to_string(&statuses).unwrap();
        assert_eq!(json, r#"{"A":{"resources":-1,"status":"below_range"}}"#);
    }
}
