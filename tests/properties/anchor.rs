//! Property tests for fragment rewriting at the anchor line.

use proptest::prelude::*;

use holigen::domain::services::FeatureSynthesizer;
use holigen::FeatureList;

fn prefix() -> impl Strategy<Value = String> {
    let line = prop_oneof![
        "[a-z_]{1,8} = [0-9]{1,3}",
        "# [a-z ]{0,20}",
        "\\[[a-z]{1,8}\\]",
        Just(String::new()),
    ];
    (proptest::collection::vec(line, 0..8), prop_oneof![Just("\n"), Just("\r\n")])
        .prop_map(|(lines, eol)| lines.iter().map(|l| format!("{l}{eol}")).collect())
}

fn tail() -> impl Strategy<Value = String> {
    "[a-zA-Z0-9 =\\[\\]\"\n]{0,60}"
}

proptest! {
    #![proptest_config(ProptestConfig {
        cases: 128,
        .. ProptestConfig::default()
    })]

    /// PROPERTY: everything before the anchor line survives byte-for-byte and
    /// the rewrite is a fixed point.
    #[test]
    fn property_prefix_preserved_and_idempotent(
        prefix in prefix(),
        tail in tail(),
        codes in proptest::collection::vec("[A-Z]{2}", 0..6),
    ) {
        let synthesizer = FeatureSynthesizer::default();
        let features = FeatureList::from_codes(codes.iter().map(String::as_str));
        let existing = format!("{prefix}all-countries = []\n{tail}");

        let once = synthesizer.synthesize(&existing, &features).unwrap();
        prop_assert!(once.starts_with(&prefix));
        prop_assert_eq!(&once[prefix.len()..], synthesizer.render(&features));

        let twice = synthesizer.synthesize(&once, &features).unwrap();
        prop_assert_eq!(once, twice);
    }

    /// PROPERTY: a fragment without an anchor line is rejected.
    #[test]
    fn property_missing_anchor_is_rejected(prefix in prefix()) {
        let synthesizer = FeatureSynthesizer::default();
        prop_assert!(synthesizer.synthesize(&prefix, &FeatureList::default()).is_none());
    }
}
