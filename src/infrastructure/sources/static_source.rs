//! In-memory holiday source

use std::collections::BTreeSet;

use chrono::NaiveDate;

use crate::domain::ports::{HolidaySource, Observance, SourceResult};
use crate::domain::value_objects::YearRange;

/// A fixed list of observances held in memory
#[derive(Debug, Clone, Default)]
pub struct StaticSource {
    observances: BTreeSet<Observance>,
}

impl StaticSource {
    pub fn with(mut self, date: NaiveDate, name: impl Into<String>) -> Self {
        self.observances.insert(Observance::new(date, name));
        self
    }
}

impl HolidaySource for StaticSource {
    fn observances(&self, years: &YearRange) -> SourceResult<Vec<Observance>> {
        Ok(self
            .observances
            .iter()
            .filter(|o| years.contains(o.date))
            .cloned()
            .collect())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn filters_and_dedups() {
        let d = |y| NaiveDate::from_ymd_opt(y, 1, 1).unwrap();
        let source = StaticSource::default()
            .with(d(2020), "New Year")
            .with(d(2020), "New Year")
            .with(d(2030), "New Year");

        let observances = source
            .observances(&YearRange::new(2020, 2025).unwrap())
            .unwrap();
        assert_eq!(observances, vec![Observance::new(d(2020), "New Year")]);
    }
}
