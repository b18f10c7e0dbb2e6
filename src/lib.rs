//! Variant attribute resolution and media filtering for product detail pages.
//!
//! Given a product's purchasable variants and a partial selection, this crate
//! lists the selectable values per axis (size, color), resolves a selection to
//! the first matching in-stock variant, decides whether a single-variant
//! product should skip the selector, and picks the images relevant to the
//! current selection. Everything is pure and synchronous.
//!
//! Catalog snapshots go through a document pipeline:
//!
//! ```text
//! parse(yaml) → Catalog → validate(&catalog) → ValidationResult
//!                       → normalize(catalog) → Catalog → serialize(&catalog) → yaml
//! ```
//!
//! # Quick Start
//!
//! ```rust
//! use variant_resolver::{AxisKind, Selection, SelectorDecision};
//!
//! let yaml = r#"
//! product:
//!   slug: classic-tee
//!   variants:
//!     - id: v1
//!       quantityAvailable: 5
//!       attributes:
//!         - attribute: { id: a-size, name: Size }
//!           values: [{ name: S }]
//!     - id: v2
//!       quantityAvailable: 0
//!       attributes:
//!         - attribute: { id: a-size, name: Size }
//!           values: [{ name: M }]
//! "#;
//!
//! let loaded = variant_resolver::load(yaml).expect("valid catalog");
//! let variants = &loaded.catalog.product.variants;
//!
//! assert_eq!(variant_resolver::axis_values(variants, AxisKind::Size), ["S", "M"]);
//!
//! let pick = Selection::new().with(AxisKind::Size, "M");
//! assert!(variant_resolver::resolve(variants, &pick).is_none());
//!
//! match variant_resolver::decide(&loaded.catalog.product, None) {
//!     SelectorDecision::Selector(view) => assert_eq!(view.groups.len(), 1),
//!     other => panic!("unexpected decision: {:?}", other),
//! }
//! ```

pub mod axis;
pub mod config;
pub mod enums;
pub mod error;
pub mod media;
pub mod normalize;
pub mod parse;
pub mod resolve;
pub mod serialize;
pub mod types;
pub mod validate;

pub use error::*;
pub use types::*;

pub use axis::{AttributeIndex, axis_values};
pub use config::AxisConfig;
pub use enums::AxisKind;
pub use media::{Gallery, resolve_media};
pub use normalize::normalize;
pub use parse::parse;
pub use resolve::{
    AxisGroup, AxisOption, Navigator, Selection, SelectorDecision, SelectorView, VariantTarget,
    axis_options, decide, resolve,
};
pub use serialize::serialize;
pub use validate::validate;

/// Result of the [`load`] convenience entry point.
pub struct LoadResult {
    /// The normalized catalog.
    pub catalog: Catalog,
    /// Non-fatal warnings produced during validation.
    pub warnings: Vec<Diagnostic>,
}

/// Convenience entry point composing parse → validate → normalize.
///
/// Returns all errors (parse or validation) on failure.
///
/// # Errors
///
/// Returns `Err(Vec<CatalogError>)` if parsing fails or validation finds errors.
pub fn load(input: &str) -> Result<LoadResult, Vec<CatalogError>> {
    load_with(input, &AxisConfig::default())
}

/// [`load`] with custom axis keywords.
pub fn load_with(input: &str, config: &AxisConfig) -> Result<LoadResult, Vec<CatalogError>> {
    let catalog = parse::parse(input).map_err(|e| vec![CatalogError::Parse(e)])?;

    let result = validate::validate_with(&catalog, config);
    if !result.errors.is_empty() {
        return Err(result
            .errors
            .into_iter()
            .map(CatalogError::Validation)
            .collect());
    }

    for w in &result.warnings {
        tracing::warn!(code = %w.code, path = w.path.as_deref(), "{}", w.message);
    }

    let normalized = normalize::normalize(catalog);

    Ok(LoadResult {
        catalog: normalized,
        warnings: result.warnings,
    })
}
