#![no_main]

use libfuzzer_sys::fuzz_target;
use std::collections::HashSet;
use variant_resolver::{
    AxisKind, Catalog, Gallery, Selection, SelectorDecision, axis_values, decide, resolve,
    resolve_media,
};

// Catalog JSON straight from the storefront API, without the YAML front end.
fuzz_target!(|data: &[u8]| {
    let Ok(catalog) = serde_json::from_slice::<Catalog>(data) else {
        return;
    };
    let product = &catalog.product;
    let variants = &product.variants;

    for kind in AxisKind::ALL {
        let values = axis_values(variants, kind);
        let unique: HashSet<&String> = values.iter().collect();
        assert_eq!(unique.len(), values.len(), "duplicate {} values", kind);

        for value in &values {
            let pick = Selection::new().with(kind, value.as_str());
            if let Some(v) = resolve(variants, &pick) {
                assert!(v.is_available(), "resolved sold-out variant '{}'", v.id);
            }
        }
    }

    let selected = variants.first();
    let images = resolve_media(product.media(), variants, selected);
    let urls: HashSet<&str> = images.iter().map(|m| m.url.as_str()).collect();
    assert_eq!(urls.len(), images.len(), "gallery repeats a url");
    assert!(images.iter().all(|m| !m.url.is_empty()));

    let everything = Gallery::for_product(product, None);
    assert_eq!(images.is_empty(), everything.is_empty());
    assert!(images.iter().all(|m| everything.images().contains(m)));

    if let SelectorDecision::Redirect(target) = decide(product, None) {
        assert_eq!(variants.len(), 1);
        assert_eq!(target.variant_id, variants[0].id);
    }

    let echoed = serde_json::to_vec(&catalog).expect("catalog serializes to json");
    let again: Catalog = serde_json::from_slice(&echoed).expect("json echo re-reads");
    assert_eq!(again, catalog);
});
