//! Property tests for canonical dataset ordering.

use chrono::NaiveDate;
use proptest::prelude::*;

use holigen::domain::services::Aggregator;
use holigen::infrastructure::repositories::dataset::serialize;
use holigen::infrastructure::{SourceRegistry, StaticSource};
use holigen::{Country, Fingerprint, YearRange};

const CODES: [&str; 4] = ["AA", "BB", "CC", "DD"];

fn observance() -> impl Strategy<Value = (NaiveDate, String)> {
    (2000i32..2030, 1u32..=12, 1u32..=28, "[A-Za-z ,\"]{1,12}").prop_map(|(y, m, d, name)| {
        (NaiveDate::from_ymd_opt(y, m, d).unwrap(), name)
    })
}

fn tables() -> impl Strategy<Value = Vec<Vec<(NaiveDate, String)>>> {
    proptest::collection::vec(proptest::collection::vec(observance(), 0..6), CODES.len())
}

fn registry_of(tables: &[Vec<(NaiveDate, String)>]) -> SourceRegistry {
    let mut registry = SourceRegistry::new();
    for (code, table) in CODES.iter().zip(tables) {
        let source = table
            .iter()
            .fold(StaticSource::default(), |s, (date, name)| s.with(*date, name.clone()));
        registry.register(code, source);
    }
    registry
}

fn countries(order: &[usize]) -> Vec<Country> {
    order
        .iter()
        .filter_map(|&i| Country::from_raw(CODES[i], CODES[i]))
        .collect()
}

proptest! {
    #![proptest_config(ProptestConfig {
        cases: 64,
        .. ProptestConfig::default()
    })]

    /// PROPERTY: dataset rows are sorted by (date, country_code, name).
    #[test]
    fn property_dataset_is_canonically_sorted(tables in tables()) {
        let registry = registry_of(&tables);
        let years = YearRange::new(2000, 2030).unwrap();

        let aggregation = Aggregator::new(&registry)
            .aggregate(&countries(&[3, 1, 0, 2]), &years)
            .unwrap();

        let keys: Vec<_> = aggregation
            .dataset
            .iter()
            .map(|f| (f.date(), f.country_code().to_string(), f.name().to_string()))
            .collect();
        let mut sorted = keys.clone();
        sorted.sort();
        prop_assert_eq!(keys, sorted);
    }

    /// PROPERTY: registry order never changes the serialized bytes.
    #[test]
    fn property_fingerprint_ignores_registry_order(
        tables in tables(),
        order in Just(vec![0usize, 1, 2, 3]).prop_shuffle(),
    ) {
        let registry = registry_of(&tables);
        let years = YearRange::new(2000, 2030).unwrap();

        let canonical = Aggregator::new(&registry)
            .aggregate(&countries(&[0, 1, 2, 3]), &years)
            .unwrap();
        let shuffled = Aggregator::new(&registry)
            .aggregate(&countries(&order), &years)
            .unwrap();

        let a = serialize(&canonical.dataset).unwrap();
        let b = serialize(&shuffled.dataset).unwrap();
        prop_assert_eq!(Fingerprint::of_bytes(&a), Fingerprint::of_bytes(&b));
        prop_assert_eq!(a, b);
    }

    /// PROPERTY: every fact lies inside the year range.
    #[test]
    fn property_facts_stay_inside_year_range(
        tables in tables(),
        floor in 2000i32..2030,
        span in 0i32..10,
    ) {
        let registry = registry_of(&tables);
        let years = YearRange::new(floor, floor + span).unwrap();

        let aggregation = Aggregator::new(&registry)
            .aggregate(&countries(&[0, 1, 2, 3]), &years)
            .unwrap();

        for fact in aggregation.dataset.iter() {
            prop_assert!(years.contains(fact.date()));
        }
    }
}
