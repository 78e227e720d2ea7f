//! Feature list entity - the per-country toggles of the configuration fragment

use std::collections::BTreeSet;

use super::Country;

/// Sorted, deduplicated country codes
///
/// Derived from the registry alone; whether a country resolved any holidays
/// has no effect on it.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct FeatureList {
    codes: Vec<String>,
}

impl FeatureList {
    pub fn from_countries(countries: &[Country]) -> Self {
        Self::from_codes(countries.iter().map(Country::code))
    }

    pub fn from_codes<'a>(codes: impl IntoIterator<Item = &'a str>) -> Self {
        let unique: BTreeSet<&str> = codes.into_iter().collect();
        Self {
            codes: unique.into_iter().map(str::to_string).collect(),
        }
    }

    pub fn codes(&self) -> &[String] {
        &self.codes
    }

    pub fn len(&self) -> usize {
        self.codes.len()
    }

    pub fn is_empty(&self) -> bool {
        self.codes.is_empty()
    }
}
