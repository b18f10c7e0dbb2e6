use super::common::*;
use variant_resolver::types::*;
use variant_resolver::{AttributeIndex, AxisConfig, AxisKind, axis_values};

#[test]
fn size_values_keep_first_occurrence_order() {
    assert_eq!(axis_values(&tee_variants(), AxisKind::Size), ["S", "M"]);
}

#[test]
fn color_values_keep_first_occurrence_order() {
    assert_eq!(axis_values(&tee_variants(), AxisKind::Color), ["Red", "Blue"]);
}

#[test]
fn values_are_not_sorted() {
    let variants = vec![
        variant("a", "XL", "Red", 1),
        variant("b", "S", "Red", 1),
        variant("c", "M", "Red", 1),
        variant("d", "S", "Red", 1),
    ];
    assert_eq!(axis_values(&variants, AxisKind::Size), ["XL", "S", "M"]);
}

#[test]
fn empty_variant_list_yields_nothing() {
    assert!(axis_values(&[], AxisKind::Size).is_empty());
    assert!(AttributeIndex::build(&[]).kinds().is_empty());
}

#[test]
fn absent_axis_yields_nothing() {
    let mut v = variant("v1", "S", "Red", 1);
    v.attributes.retain(|a| a.attribute.id != "attr-color");
    assert!(axis_values(&[v], AxisKind::Color).is_empty());
}

#[test]
fn detection_is_case_insensitive_on_name_or_slug() {
    let mut by_slug = variant("v1", "S", "Red", 1);
    by_slug.attributes[0].attribute.name = Some("Taille".to_string());
    by_slug.attributes[0].attribute.slug = Some("SHIRT-SIZE".to_string());
    by_slug.attributes[1].attribute.name = Some("Shirt COLOR".to_string());
    by_slug.attributes[1].attribute.slug = None;

    let index = AttributeIndex::build(std::slice::from_ref(&by_slug));
    assert_eq!(index.axis(AxisKind::Size).map(|a| a.id.as_str()), Some("attr-size"));
    assert_eq!(index.axis(AxisKind::Color).map(|a| a.id.as_str()), Some("attr-color"));
}

#[test]
fn axis_identity_comes_from_first_variant_only() {
    let first = variant("v1", "S", "Red", 1);
    // Same attribute id, renamed on a later variant: still read by id.
    let mut second = variant("v2", "M", "Blue", 1);
    second.attributes[0].attribute.name = Some("Dimensions".to_string());
    second.attributes[0].attribute.slug = None;

    let variants = vec![first, second];
    assert_eq!(axis_values(&variants, AxisKind::Size), ["S", "M"]);
}

#[test]
fn later_variant_with_other_attribute_id_is_skipped() {
    let first = variant("v1", "S", "Red", 1);
    let mut second = variant("v2", "M", "Red", 1);
    second.attributes[0].attribute.id = "attr-size-eu".to_string();

    assert_eq!(axis_values(&[first, second], AxisKind::Size), ["S"]);
}

#[test]
fn missing_and_empty_values_are_discarded() {
    let mut empty = variant("v2", "", "Red", 1);
    empty.attributes[1].values.clear();
    let mut nameless = variant("v3", "L", "Red", 1);
    nameless.attributes[0].values[0].name = None;

    let variants = vec![variant("v1", "S", "Red", 1), empty, nameless];
    assert_eq!(axis_values(&variants, AxisKind::Size), ["S"]);
    assert_eq!(axis_values(&variants, AxisKind::Color), ["Red"]);
}

#[test]
fn only_first_value_of_an_assignment_is_read() {
    let mut v = variant("v1", "S", "Red", 1);
    v.attributes[0].values.push(AttributeValue {
        name: Some("M".to_string()),
    });
    assert_eq!(axis_values(&[v], AxisKind::Size), ["S"]);
}

#[test]
fn empty_first_value_does_not_fall_through_to_second() {
    let mut v = variant("v1", "", "Red", 1);
    v.attributes[0].values.push(AttributeValue {
        name: Some("M".to_string()),
    });
    assert!(axis_values(&[v], AxisKind::Size).is_empty());
}

#[test]
fn custom_keywords_detect_localized_attributes() {
    let mut v = variant("v1", "S", "Rouge", 1);
    v.attributes[1].attribute.name = Some("Colour".to_string());
    v.attributes[1].attribute.slug = Some("colour".to_string());
    let variants = vec![v];

    assert!(axis_values(&variants, AxisKind::Color).is_empty());

    let config = AxisConfig::from_yaml("color: [color, colour]").unwrap();
    let index = AttributeIndex::with_config(&variants, &config);
    assert_eq!(index.values(AxisKind::Color), ["Rouge"]);
    assert_eq!(index.kinds(), [AxisKind::Size, AxisKind::Color]);
}

#[test]
fn value_of_reads_through_the_axis() {
    let variants = tee_variants();
    let index = AttributeIndex::build(&variants);
    assert_eq!(index.value_of(&variants[2], AxisKind::Color), Some("Blue"));
    assert_eq!(index.value_of(&variants[1], AxisKind::Size), Some("M"));
}

#[test]
fn repeated_calls_are_value_equal() {
    let variants = tee_variants();
    assert_eq!(
        axis_values(&variants, AxisKind::Size),
        axis_values(&variants, AxisKind::Size)
    );
}
