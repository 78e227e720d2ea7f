//! Domain Value Objects
//!
//! Immutable types compared by value.

mod hash;
mod year_range;

pub use hash::Fingerprint;
pub use year_range::{YearRange, DEFAULT_FLOOR_YEAR, DEFAULT_YEARS_AHEAD};
