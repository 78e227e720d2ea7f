//! HolidaySource port - the external per-country holiday knowledge base
//!
//! A source answers one question: which (date, name) pairs does this
//! country observe in these years. Unknown countries are reported as
//! `Unsupported`, which callers treat as a non-fatal skip.

use chrono::NaiveDate;

use crate::domain::value_objects::YearRange;

/// Result type for holiday source operations
pub type SourceResult<T> = Result<T, SourceError>;

/// Holiday source errors
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum SourceError {
    /// No source is registered for this country code
    Unsupported(String),
    /// The source exists but failed to produce facts
    Internal(String),
}

impl std::fmt::Display for SourceError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            SourceError::Unsupported(code) => {
                write!(f, "No holiday source found for country code: {}", code)
            }
            SourceError::Internal(msg) => write!(f, "Holiday source failed: {}", msg),
        }
    }
}

impl std::error::Error for SourceError {}

/// A dated, named holiday as produced by a source
#[derive(Debug, Clone, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct Observance {
    pub date: NaiveDate,
    pub name: String,
}

impl Observance {
    pub fn new(date: NaiveDate, name: impl Into<String>) -> Self {
        Self {
            date,
            name: name.into(),
        }
    }
}

/// Holiday knowledge for a single country
///
/// Implementations must only return observances whose date falls inside
/// `years`, and must not return the same (date, name) pair twice.
pub trait HolidaySource {
    fn observances(&self, years: &YearRange) -> SourceResult<Vec<Observance>>;
}

/// Lookup of holiday sources by country code
pub trait HolidaySourceLookup {
    /// Produce the observances for `code`, or `SourceError::Unsupported`
    fn observances_for(&self, code: &str, years: &YearRange) -> SourceResult<Vec<Observance>>;
}
