//! Resource validation: classifies totals against the configured range.

mod validator;

pub use validator::{validate, validate_range, RangeStatus, ResourceStatus};
