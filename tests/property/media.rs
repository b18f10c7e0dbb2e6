use super::strategies::{arb_media, arb_variants};
use proptest::prelude::*;
use std::collections::HashSet;
use variant_resolver::resolve_media;

proptest! {
    #![proptest_config(ProptestConfig::with_cases(256))]

    // No duplicate URLs and no empty URLs, with or without a selection
    #[test]
    fn output_urls_are_unique(
        product_media in prop::collection::vec(arb_media(), 0..4),
        variants in arb_variants(),
        pick in prop::option::of(0usize..8),
    ) {
        let selected = pick.and_then(|i| variants.get(i));
        let out = resolve_media(&product_media, &variants, selected);
        let urls: HashSet<&str> = out.iter().map(|m| m.url.as_str()).collect();
        prop_assert_eq!(urls.len(), out.len());
        prop_assert!(out.iter().all(|m| !m.url.is_empty()));
    }

    // Narrowing never empties a non-empty gallery
    #[test]
    fn narrowing_never_empties(
        product_media in prop::collection::vec(arb_media(), 0..4),
        variants in arb_variants(),
        pick in 0usize..8,
    ) {
        let selected = variants.get(pick);
        let all = resolve_media(&product_media, &variants, None);
        let narrowed = resolve_media(&product_media, &variants, selected);
        prop_assert_eq!(all.is_empty(), narrowed.is_empty());
        prop_assert!(narrowed.len() <= all.len());
        // Narrowed images keep the unfiltered relative order
        let mut rest = all.iter();
        for image in &narrowed {
            prop_assert!(rest.any(|m| m == image));
        }
    }

    #[test]
    fn resolve_media_is_idempotent(
        product_media in prop::collection::vec(arb_media(), 0..4),
        variants in arb_variants(),
    ) {
        let selected = variants.first();
        prop_assert_eq!(
            resolve_media(&product_media, &variants, selected),
            resolve_media(&product_media, &variants, selected)
        );
    }
}
