//! Attribute axis detection and per-axis value listing.
//!
//! Axis identity for a product is taken from its first variant: the first
//! assignment whose attribute name or slug matches the axis keywords. Every
//! other variant is read by that attribute's identifier.

use crate::config::AxisConfig;
use crate::enums::AxisKind;
use crate::types::{Attribute, Variant};
use std::collections::HashSet;

/// Axis attributes detected for one product's variant list.
#[derive(Clone, Debug)]
pub struct AttributeIndex<'a> {
    variants: &'a [Variant],
    size: Option<&'a Attribute>,
    color: Option<&'a Attribute>,
}

impl<'a> AttributeIndex<'a> {
    /// Build an index using the default `size` / `color` keywords.
    pub fn build(variants: &'a [Variant]) -> Self {
        Self::with_config(variants, &AxisConfig::default())
    }

    pub fn with_config(variants: &'a [Variant], config: &AxisConfig) -> Self {
        AttributeIndex {
            variants,
            size: detect_axis(variants, AxisKind::Size, config),
            color: detect_axis(variants, AxisKind::Color, config),
        }
    }

    pub fn variants(&self) -> &'a [Variant] {
        self.variants
    }

    /// The attribute acting as the given axis, if the product has one.
    pub fn axis(&self, kind: AxisKind) -> Option<&'a Attribute> {
        match kind {
            AxisKind::Size => self.size,
            AxisKind::Color => self.color,
        }
    }

    /// Axes present on this product, in display order.
    pub fn kinds(&self) -> Vec<AxisKind> {
        AxisKind::ALL
            .into_iter()
            .filter(|k| self.axis(*k).is_some())
            .collect()
    }

    /// The variant's display value on the given axis.
    pub fn value_of(&self, variant: &'a Variant, kind: AxisKind) -> Option<&'a str> {
        self.axis(kind).and_then(|attr| variant.value_of(&attr.id))
    }

    /// Distinct display values of the axis in first-occurrence order.
    ///
    /// Variants without a value on the axis are skipped. An absent axis
    /// yields an empty list.
    pub fn values(&self, kind: AxisKind) -> Vec<String> {
        let Some(attr) = self.axis(kind) else {
            return Vec::new();
        };
        let mut seen = HashSet::new();
        let mut out = Vec::new();
        for variant in self.variants {
            if let Some(value) = variant.value_of(&attr.id)
                && seen.insert(value)
            {
                out.push(value.to_string());
            }
        }
        out
    }
}

fn detect_axis<'a>(
    variants: &'a [Variant],
    kind: AxisKind,
    config: &AxisConfig,
) -> Option<&'a Attribute> {
    variants
        .first()?
        .attributes
        .iter()
        .map(|a| &a.attribute)
        .find(|attr| config.matches(attr, kind))
}

/// Distinct display values of one axis across `variants`, in first-occurrence
/// order, using the default axis keywords.
///
/// ```rust
/// use variant_resolver::{AxisKind, axis_values};
///
/// assert!(axis_values(&[], AxisKind::Size).is_empty());
/// ```
pub fn axis_values(variants: &[Variant], kind: AxisKind) -> Vec<String> {
    AttributeIndex::build(variants).values(kind)
}
