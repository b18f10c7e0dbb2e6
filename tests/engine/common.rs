use variant_resolver::types::*;

pub const SIZE: (&str, &str) = ("attr-size", "Size");
pub const COLOR: (&str, &str) = ("attr-color", "Color");

pub fn assignment(attr: (&str, &str), value: &str) -> AttributeAssignment {
    AttributeAssignment {
        attribute: Attribute {
            id: attr.0.to_string(),
            name: Some(attr.1.to_string()),
            slug: Some(attr.1.to_lowercase()),
        },
        values: vec![AttributeValue {
            name: Some(value.to_string()),
        }],
    }
}

pub fn variant(id: &str, size: &str, color: &str, stock: i64) -> Variant {
    Variant {
        id: id.to_string(),
        name: None,
        attributes: vec![assignment(SIZE, size), assignment(COLOR, color)],
        quantity_available: Some(stock),
        media: vec![],
    }
}

pub fn with_media(mut v: Variant, urls: &[&str]) -> Variant {
    v.media = urls.iter().map(|u| Media::new(*u, "")).collect();
    v
}

/// v1 S/Red in stock, v2 M/Red sold out, v3 S/Blue in stock.
pub fn tee_variants() -> Vec<Variant> {
    vec![
        variant("v1", "S", "Red", 5),
        variant("v2", "M", "Red", 0),
        variant("v3", "S", "Blue", 3),
    ]
}

pub fn product(variants: Vec<Variant>) -> Product {
    Product {
        slug: "classic-tee".to_string(),
        name: Some("Classic Tee".to_string()),
        media: None,
        variants,
    }
}
