//! Catalog validation against consistency rules V-001 through V-006 and
//! warnings W-001 through W-005.
//!
//! Returns **all** errors and warnings, not just the first. Validation does not
//! modify the catalog.

use crate::axis::AttributeIndex;
use crate::config::AxisConfig;
use crate::enums::AxisKind;
use crate::error::*;
use crate::types::*;
use regex::Regex;
use std::collections::{BTreeSet, HashSet};
use std::sync::LazyLock;

static SLUG_RE: LazyLock<Regex> = LazyLock::new(|| Regex::new(r"^[^\s/?#]+$").unwrap());

/// Validate a parsed catalog with the default axis keywords.
pub fn validate(catalog: &Catalog) -> ValidationResult {
    validate_with(catalog, &AxisConfig::default())
}

/// Validate a parsed catalog. Axis keywords affect the axis warnings only.
pub fn validate_with(catalog: &Catalog, config: &AxisConfig) -> ValidationResult {
    let mut errors = Vec::new();
    let mut warnings = Vec::new();
    let product = &catalog.product;

    v001_product_slug(product, &mut errors);
    v002_variant_id_present(product, &mut errors);
    v003_unique_variant_ids(product, &mut errors);
    v004_shared_attribute_schema(product, &mut errors);
    v005_unique_attribute_per_variant(product, &mut errors);
    v006_quantity_non_negative(product, &mut errors);

    w001_multi_valued_assignment(product, &mut warnings);
    w002_media_without_url(product, &mut warnings);
    w003_no_detectable_axis(product, config, &mut warnings);
    w004_missing_axis_value(product, config, &mut warnings);
    w005_undetectable_attribute(product, &mut warnings);

    ValidationResult { errors, warnings }
}

fn variant_path(i: usize) -> String {
    format!("product.variants[{}]", i)
}

fn warning(code: &str, path: String, message: String) -> Diagnostic {
    Diagnostic {
        severity: DiagnosticSeverity::Warning,
        code: code.to_string(),
        path: Some(path),
        message,
    }
}

// ─── V-001 ──────────────────────────────────────────────────────────────────

fn v001_product_slug(product: &Product, errors: &mut Vec<ValidationError>) {
    if !SLUG_RE.is_match(&product.slug) {
        errors.push(ValidationError {
            rule: "V-001".to_string(),
            path: "product.slug".to_string(),
            message: format!(
                "slug must be non-empty without whitespace, '/', '?' or '#', got '{}'",
                product.slug
            ),
        });
    }
}

// ─── V-002 ──────────────────────────────────────────────────────────────────

fn v002_variant_id_present(product: &Product, errors: &mut Vec<ValidationError>) {
    for (i, variant) in product.variants.iter().enumerate() {
        if variant.id.trim().is_empty() {
            errors.push(ValidationError {
                rule: "V-002".to_string(),
                path: format!("{}.id", variant_path(i)),
                message: "variant id must not be empty".to_string(),
            });
        }
    }
}

// ─── V-003 ──────────────────────────────────────────────────────────────────

fn v003_unique_variant_ids(product: &Product, errors: &mut Vec<ValidationError>) {
    let mut seen = HashSet::new();
    for (i, variant) in product.variants.iter().enumerate() {
        if variant.id.trim().is_empty() {
            continue;
        }
        if !seen.insert(variant.id.as_str()) {
            errors.push(ValidationError {
                rule: "V-003".to_string(),
                path: format!("{}.id", variant_path(i)),
                message: format!("duplicate variant id '{}'", variant.id),
            });
        }
    }
}

// ─── V-004 ──────────────────────────────────────────────────────────────────

/// Axis identity comes from the first variant, so every variant must carry
/// the same attribute identifiers.
fn v004_shared_attribute_schema(product: &Product, errors: &mut Vec<ValidationError>) {
    let Some((first, rest)) = product.variants.split_first() else {
        return;
    };
    let schema = attribute_ids(first);
    for (offset, variant) in rest.iter().enumerate() {
        let ids = attribute_ids(variant);
        if ids != schema {
            let missing: Vec<&str> = schema.difference(&ids).copied().collect();
            let extra: Vec<&str> = ids.difference(&schema).copied().collect();
            errors.push(ValidationError {
                rule: "V-004".to_string(),
                path: format!("{}.attributes", variant_path(offset + 1)),
                message: format!(
                    "variant '{}' attribute set differs from first variant (missing: {:?}, extra: {:?})",
                    variant.id, missing, extra
                ),
            });
        }
    }
}

fn attribute_ids(variant: &Variant) -> BTreeSet<&str> {
    variant
        .attributes
        .iter()
        .map(|a| a.attribute.id.as_str())
        .collect()
}

// ─── V-005 ──────────────────────────────────────────────────────────────────

fn v005_unique_attribute_per_variant(product: &Product, errors: &mut Vec<ValidationError>) {
    for (i, variant) in product.variants.iter().enumerate() {
        let mut seen = HashSet::new();
        for (j, assignment) in variant.attributes.iter().enumerate() {
            if !seen.insert(assignment.attribute.id.as_str()) {
                errors.push(ValidationError {
                    rule: "V-005".to_string(),
                    path: format!("{}.attributes[{}]", variant_path(i), j),
                    message: format!(
                        "attribute '{}' assigned more than once",
                        assignment.attribute.id
                    ),
                });
            }
        }
    }
}

// ─── V-006 ──────────────────────────────────────────────────────────────────

fn v006_quantity_non_negative(product: &Product, errors: &mut Vec<ValidationError>) {
    for (i, variant) in product.variants.iter().enumerate() {
        if let Some(q) = variant.quantity_available
            && q < 0
        {
            errors.push(ValidationError {
                rule: "V-006".to_string(),
                path: format!("{}.quantityAvailable", variant_path(i)),
                message: format!("quantityAvailable must not be negative, got {}", q),
            });
        }
    }
}

// ─── W-001 ──────────────────────────────────────────────────────────────────

fn w001_multi_valued_assignment(product: &Product, warnings: &mut Vec<Diagnostic>) {
    for (i, variant) in product.variants.iter().enumerate() {
        for (j, assignment) in variant.attributes.iter().enumerate() {
            if assignment.values.len() > 1 {
                warnings.push(warning(
                    "W-001",
                    format!("{}.attributes[{}].values", variant_path(i), j),
                    format!(
                        "attribute '{}' has {} values; only the first is used",
                        assignment.attribute.id,
                        assignment.values.len()
                    ),
                ));
            }
        }
    }
}

// ─── W-002 ──────────────────────────────────────────────────────────────────

fn w002_media_without_url(product: &Product, warnings: &mut Vec<Diagnostic>) {
    let product_media = product
        .media()
        .iter()
        .enumerate()
        .map(|(k, m)| (format!("product.media[{}]", k), m));
    let variant_media = product.variants.iter().enumerate().flat_map(|(i, v)| {
        v.media
            .iter()
            .enumerate()
            .map(move |(k, m)| (format!("{}.media[{}]", variant_path(i), k), m))
    });

    for (path, media) in product_media.chain(variant_media) {
        if media.url.is_empty() {
            warnings.push(warning(
                "W-002",
                path,
                "media without url is skipped".to_string(),
            ));
        }
    }
}

// ─── W-003 ──────────────────────────────────────────────────────────────────

fn w003_no_detectable_axis(
    product: &Product,
    config: &AxisConfig,
    warnings: &mut Vec<Diagnostic>,
) {
    if product.variants.len() <= 1 {
        return;
    }
    let index = AttributeIndex::with_config(&product.variants, config);
    if index.kinds().is_empty() {
        warnings.push(warning(
            "W-003",
            "product.variants[0].attributes".to_string(),
            format!(
                "no size or color attribute detected (keywords: {:?} / {:?}); the selector will render nothing",
                config.size, config.color
            ),
        ));
    }
}

// ─── W-004 ──────────────────────────────────────────────────────────────────

fn w004_missing_axis_value(
    product: &Product,
    config: &AxisConfig,
    warnings: &mut Vec<Diagnostic>,
) {
    let index = AttributeIndex::with_config(&product.variants, config);
    for kind in AxisKind::ALL {
        if index.axis(kind).is_none() {
            continue;
        }
        for (i, variant) in product.variants.iter().enumerate() {
            if index.value_of(variant, kind).is_none() {
                warnings.push(warning(
                    "W-004",
                    format!("{}.attributes", variant_path(i)),
                    format!("variant '{}' has no {} value", variant.id, kind),
                ));
            }
        }
    }
}

// ─── W-005 ──────────────────────────────────────────────────────────────────

fn w005_undetectable_attribute(product: &Product, warnings: &mut Vec<Diagnostic>) {
    let Some(first) = product.variants.first() else {
        return;
    };
    for (j, assignment) in first.attributes.iter().enumerate() {
        let attr = &assignment.attribute;
        let blank = |s: &Option<String>| s.as_deref().is_none_or(str::is_empty);
        if blank(&attr.name) && blank(&attr.slug) {
            warnings.push(warning(
                "W-005",
                format!("product.variants[0].attributes[{}].attribute", j),
                format!("attribute '{}' has neither name nor slug", attr.id),
            ));
        }
    }
}
