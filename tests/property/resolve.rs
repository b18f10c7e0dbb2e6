use super::strategies::arb_variants;
use proptest::prelude::*;
use variant_resolver::types::Product;
use variant_resolver::{
    AttributeIndex, AxisKind, Selection, SelectorDecision, VariantTarget, axis_options, decide,
    resolve,
};

fn product(variants: Vec<variant_resolver::Variant>) -> Product {
    Product {
        slug: "p".to_string(),
        name: None,
        media: None,
        variants,
    }
}

proptest! {
    #![proptest_config(ProptestConfig::with_cases(256))]

    // resolve never returns an unavailable variant
    #[test]
    fn resolved_variant_is_available(
        variants in arb_variants(),
        size in prop::option::of("[SML]"),
        color in prop::option::of("Red|Blue|Green"),
    ) {
        let mut selection = Selection::new();
        if let Some(s) = size { selection.set(AxisKind::Size, s); }
        if let Some(c) = color { selection.set(AxisKind::Color, c); }
        if let Some(v) = resolve(&variants, &selection) {
            prop_assert!(v.is_available());
        }
    }

    // Pinning every axis to an in-stock variant's values returns it or an earlier tie
    #[test]
    fn pinned_selection_returns_first_tie(variants in arb_variants(), pick in 0usize..8) {
        prop_assume!(!variants.is_empty());
        let index = AttributeIndex::build(&variants);
        let target = &variants[pick % variants.len()];
        prop_assume!(target.is_available());

        let selection = Selection::from_variant(&index, target);
        let found = resolve(&variants, &selection).expect("target itself matches");

        let first_tie = variants
            .iter()
            .find(|v| v.is_available() && index.matches(v, &selection))
            .unwrap();
        prop_assert_eq!(&found.id, &first_tie.id);
        let found_pos = variants.iter().position(|v| v.id == found.id).unwrap();
        let target_pos = variants.iter().position(|v| v.id == target.id).unwrap();
        prop_assert!(found_pos <= target_pos);
    }

    // An option is enabled iff some in-stock variant carries it with the other axis
    #[test]
    fn option_enabled_iff_in_stock_variant_exists(variants in arb_variants()) {
        let index = AttributeIndex::build(&variants);
        for option in axis_options(&index, &Selection::new(), AxisKind::Size, "p") {
            let exists = variants.iter().any(|v| {
                v.is_available() && index.value_of(v, AxisKind::Size) == Some(option.value.as_str())
            });
            prop_assert_eq!(option.enabled, exists);
            prop_assert_eq!(option.target.is_some(), option.enabled);
        }
    }

    #[test]
    fn resolve_is_idempotent(variants in arb_variants(), size in "[SML]") {
        let selection = Selection::new().with(AxisKind::Size, size);
        prop_assert_eq!(resolve(&variants, &selection), resolve(&variants, &selection));
    }

    // Redirect happens exactly for one available variant with nothing selected
    #[test]
    fn redirect_rule(variants in arb_variants()) {
        let expected = match variants.as_slice() {
            [only] if only.is_available() => Some(VariantTarget::new("p", only.id.as_str())),
            _ => None,
        };
        let decision = decide(&product(variants.clone()), None);
        match (decision, expected) {
            (SelectorDecision::Redirect(t), Some(e)) => prop_assert_eq!(t, e),
            (SelectorDecision::Selector(_), None) => prop_assert!(variants.len() > 1),
            (SelectorDecision::Hidden, None) => prop_assert!(variants.len() <= 1),
            (other, e) => prop_assert!(false, "unexpected {:?} (expected redirect {:?})", other, e),
        }
    }
}
