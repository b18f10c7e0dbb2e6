use super::strategies::arb_variants;
use proptest::prelude::*;
use std::collections::HashSet;
use variant_resolver::{AttributeIndex, AxisKind, axis_values};

proptest! {
    #![proptest_config(ProptestConfig::with_cases(256))]

    // No duplicates, no empty strings
    #[test]
    fn values_are_distinct_and_non_empty(variants in arb_variants()) {
        for kind in AxisKind::ALL {
            let values = axis_values(&variants, kind);
            let unique: HashSet<&String> = values.iter().collect();
            prop_assert_eq!(unique.len(), values.len());
            prop_assert!(values.iter().all(|v| !v.is_empty()));
        }
    }

    // Output order equals the order of first appearance across variants
    #[test]
    fn values_follow_first_occurrence(variants in arb_variants()) {
        let index = AttributeIndex::build(&variants);
        let mut expected: Vec<String> = Vec::new();
        for v in &variants {
            if let Some(value) = index.value_of(v, AxisKind::Size)
                && !expected.iter().any(|e| e == value)
            {
                expected.push(value.to_string());
            }
        }
        prop_assert_eq!(axis_values(&variants, AxisKind::Size), expected);
    }

    #[test]
    fn values_are_idempotent(variants in arb_variants()) {
        prop_assert_eq!(
            axis_values(&variants, AxisKind::Color),
            axis_values(&variants, AxisKind::Color)
        );
    }
}
