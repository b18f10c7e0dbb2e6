use crate::types::*;

/// Normalize a catalog into its canonical form.
/// Defaults are materialized and media without a URL are dropped.
///
/// This is idempotent: `normalize(normalize(c)) == normalize(c)`.
pub fn normalize(mut catalog: Catalog) -> Catalog {
    let product = &mut catalog.product;

    // N-001: product media → []
    let media = product.media.get_or_insert_with(Vec::new);

    // N-002 / N-003 on product media
    normalize_media(media);

    for variant in product.variants.iter_mut() {
        normalize_media(&mut variant.media);

        // N-004: quantityAvailable → 0
        if variant.quantity_available.is_none() {
            variant.quantity_available = Some(0);
        }
    }

    catalog
}

fn normalize_media(media: &mut Vec<Media>) {
    // N-002: drop entries without a URL
    media.retain(|m| !m.url.is_empty());

    // N-003: alt → ""
    for m in media.iter_mut() {
        if m.alt.is_none() {
            m.alt = Some(String::new());
        }
    }
}
