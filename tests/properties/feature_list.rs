//! Property tests for the rendered feature list.

use proptest::prelude::*;

use holigen::domain::services::FeatureSynthesizer;
use holigen::FeatureList;

fn codes() -> impl Strategy<Value = Vec<String>> {
    proptest::collection::vec("[A-Z]{2}", 0..20)
}

proptest! {
    #![proptest_config(ProptestConfig {
        cases: 64,
        .. ProptestConfig::default()
    })]

    /// PROPERTY: the aggregate lists every distinct code once, sorted, and
    /// each code has its own empty entry.
    #[test]
    fn property_rendered_features_match_registry(raw in codes()) {
        let features = FeatureList::from_codes(raw.iter().map(String::as_str));
        let rendered = FeatureSynthesizer::default().render(&features);

        let table: toml::Table = toml::from_str(&rendered).unwrap();
        let all: Vec<String> = table["all-countries"]
            .as_array()
            .unwrap()
            .iter()
            .map(|v| v.as_str().unwrap().to_string())
            .collect();

        let mut expected = raw.clone();
        expected.sort();
        expected.dedup();

        prop_assert_eq!(&all, &expected);
        prop_assert_eq!(table.len(), expected.len() + 1);
        for code in &expected {
            prop_assert!(table[code.as_str()].as_array().unwrap().is_empty());
        }
    }
}
