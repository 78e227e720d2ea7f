//! Holiday facts and the canonically ordered dataset
//!
//! The dataset is a pure data structure. Serialization lives in
//! `infrastructure::repositories::dataset`.

use chrono::NaiveDate;

/// One observed holiday occurrence for one country
///
/// Field order matters: the derived `Ord` compares `date`, then
/// `country_code`, then `name`, which is the canonical dataset ordering.
/// `String` ordering is byte-wise, never locale-aware.
#[derive(Debug, Clone, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct HolidayFact {
    date: NaiveDate,
    country_code: String,
    name: String,
}

impl HolidayFact {
    pub fn new(date: NaiveDate, country_code: impl Into<String>, name: impl Into<String>) -> Self {
        Self {
            date,
            country_code: country_code.into(),
            name: name.into(),
        }
    }

    pub fn date(&self) -> NaiveDate {
        self.date
    }

    pub fn country_code(&self) -> &str {
        &self.country_code
    }

    pub fn name(&self) -> &str {
        &self.name
    }
}

/// All holiday facts of a run, sorted by (date, country_code, name)
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Dataset {
    facts: Vec<HolidayFact>,
}

impl Dataset {
    /// Build a dataset from facts in any order
    pub fn from_facts(mut facts: Vec<HolidayFact>) -> Self {
        facts.sort();
        Self { facts }
    }

    pub fn facts(&self) -> &[HolidayFact] {
        &self.facts
    }

    pub fn len(&self) -> usize {
        self.facts.len()
    }

    pub fn is_empty(&self) -> bool {
        self.facts.is_empty()
    }

    pub fn iter(&self) -> impl Iterator<Item = &HolidayFact> {
        self.facts.iter()
    }
}
