//! [`Catalog`] → YAML snapshot.

use crate::error::SerializeError;
use crate::normalize::normalize;
use crate::types::Catalog;
use tracing::trace;

/// Write a catalog snapshot as YAML that [`crate::parse`] reads back.
///
/// The snapshot is always the canonical form: the catalog is normalized
/// before writing, so media without a URL are dropped, `alt` is written as
/// `""`, product `media` is written as `[]` and a missing
/// `quantityAvailable` is written as `0`. Parsing the output yields a catalog
/// equal to `normalize(catalog)`.
pub fn serialize(catalog: &Catalog) -> Result<String, SerializeError> {
    let canonical = normalize(catalog.clone());

    let value = serde_json::to_value(&canonical).map_err(|e| SerializeError {
        message: format!("catalog '{}' is not representable: {}", canonical.product.slug, e),
    })?;

    let yaml = serde_saphyr::to_string(&value).map_err(|e| SerializeError {
        message: format!(
            "catalog '{}' could not be written as YAML: {}",
            canonical.product.slug, e
        ),
    })?;

    trace!(
        slug = %canonical.product.slug,
        variants = canonical.product.variants.len(),
        bytes = yaml.len(),
        "serialized catalog snapshot"
    );
    Ok(yaml)
}
