#![no_main]

use arbitrary::Arbitrary;
use libfuzzer_sys::fuzz_target;
use variant_resolver::types::*;
use variant_resolver::{AxisKind, Gallery, Selection, axis_values, decide, resolve};

#[derive(Arbitrary, Debug)]
struct Row {
    size: Option<u8>,
    color: Option<u8>,
    stock: i8,
    media: Vec<u8>,
}

#[derive(Arbitrary, Debug)]
struct Input {
    rows: Vec<Row>,
    pick_size: Option<u8>,
    pick_color: Option<u8>,
    selected: Option<u8>,
}

fn assignment(id: &str, name: &str, value: Option<u8>) -> AttributeAssignment {
    AttributeAssignment {
        attribute: Attribute {
            id: id.to_string(),
            name: Some(name.to_string()),
            slug: None,
        },
        values: value
            .map(|v| AttributeValue {
                name: Some(format!("{}", v % 4)),
            })
            .into_iter()
            .collect(),
    }
}

fuzz_target!(|input: Input| {
    let variants: Vec<Variant> = input
        .rows
        .iter()
        .enumerate()
        .map(|(i, row)| Variant {
            id: format!("v{}", i),
            name: None,
            attributes: vec![
                assignment("size", "Size", row.size),
                assignment("color", "Color", row.color),
            ],
            quantity_available: Some(i64::from(row.stock)),
            media: row
                .media
                .iter()
                .map(|m| Media::new(format!("m{}", m % 8), ""))
                .collect(),
        })
        .collect();

    let mut selection = Selection::new();
    if let Some(s) = input.pick_size {
        selection.set(AxisKind::Size, format!("{}", s % 4));
    }
    if let Some(c) = input.pick_color {
        selection.set(AxisKind::Color, format!("{}", c % 4));
    }

    if let Some(v) = resolve(&variants, &selection) {
        assert!(v.is_available());
    }

    for kind in AxisKind::ALL {
        let values = axis_values(&variants, kind);
        let unique: std::collections::HashSet<&String> = values.iter().collect();
        assert_eq!(unique.len(), values.len());
    }

    let product = Product {
        slug: "fuzz".to_string(),
        name: None,
        media: None,
        variants,
    };
    let selected = input
        .selected
        .and_then(|i| product.variants.get(usize::from(i)));
    let gallery = Gallery::for_product(&product, selected);
    let all = Gallery::for_product(&product, None);
    assert_eq!(gallery.is_empty(), all.is_empty());

    let _ = decide(&product, selected);
});
