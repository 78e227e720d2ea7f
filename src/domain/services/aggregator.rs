//! Aggregator Domain Service
//!
//! Resolves every registry country against the holiday source lookup and
//! merges the results into one canonically ordered dataset.
//!
//! The merge is order-independent: countries may be visited in any order
//! and the final sort restores `(date, country_code, name)` ordering, so the
//! dataset depends only on the set of codes and the sources' output.

use std::collections::HashSet;

use tracing::{debug, warn};

use crate::domain::entities::{Country, Dataset, HolidayFact};
use crate::domain::ports::{HolidaySourceLookup, SourceError};
use crate::domain::value_objects::YearRange;
use crate::error::{HoligenError, HoligenResult};

/// Outcome of an aggregation run
#[derive(Debug, Clone, Default)]
pub struct Aggregation {
    /// Canonically ordered facts
    pub dataset: Dataset,
    /// Codes that had a source (possibly contributing zero facts)
    pub resolved: Vec<String>,
    /// Codes skipped because no source was registered
    pub skipped: Vec<String>,
    /// Codes that appeared more than once in the registry
    pub duplicates: Vec<String>,
}

/// Merges per-country holiday facts
pub struct Aggregator<'a, L: HolidaySourceLookup + ?Sized> {
    sources: &'a L,
}

impl<'a, L: HolidaySourceLookup + ?Sized> Aggregator<'a, L> {
    pub fn new(sources: &'a L) -> Self {
        Self { sources }
    }

    /// Aggregate holidays of `countries` over `years`
    ///
    /// Unsupported countries are skipped with a warning. A source failing
    /// for any other reason aborts the aggregation.
    pub fn aggregate(&self, countries: &[Country], years: &YearRange) -> HoligenResult<Aggregation> {
        let mut seen = HashSet::new();
        let mut facts = Vec::new();
        let mut aggregation = Aggregation::default();

        for country in countries {
            let code = country.code();
            if !seen.insert(code) {
                warn!(code, "duplicate country code in registry, processing it once");
                aggregation.duplicates.push(code.to_string());
                continue;
            }

            match self.sources.observances_for(code, years) {
                Ok(observances) => {
                    debug!(code, count = observances.len(), "resolved holidays");
                    facts.extend(
                        observances
                            .into_iter()
                            .map(|o| HolidayFact::new(o.date, code, o.name)),
                    );
                    aggregation.resolved.push(code.to_string());
                }
                Err(SourceError::Unsupported(_)) => {
                    warn!(code, "no holiday source found for country code, skipping");
                    aggregation.skipped.push(code.to_string());
                }
                Err(SourceError::Internal(message)) => {
                    return Err(HoligenError::Source {
                        code: code.to_string(),
                        message,
                    });
                }
            }
        }

        aggregation.dataset = Dataset::from_facts(facts);
        Ok(aggregation)
    }
}
