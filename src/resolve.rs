//! Selection resolution and selector decisions.
//!
//! A [`Selection`] pins zero or more axes to display values. Resolution maps
//! it to the first variant in list order that matches every pinned axis and
//! is in stock. The same resolution drives the enabled state of each option
//! in the selector and the single-variant redirect.

use crate::axis::AttributeIndex;
use crate::config::AxisConfig;
use crate::enums::AxisKind;
use crate::types::{Product, Variant};
use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;
use tracing::{debug, trace};

// ─── Selection ───────────────────────────────────────────────────────────────

/// A partial choice of display values, keyed by axis.
///
/// Axes without an entry are unconstrained. Empty values are never stored.
#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct Selection {
    values: BTreeMap<AxisKind, String>,
}

impl Selection {
    pub fn new() -> Self {
        Self::default()
    }

    /// Builder form of [`Selection::set`].
    pub fn with(mut self, kind: AxisKind, value: impl Into<String>) -> Self {
        self.set(kind, value);
        self
    }

    /// Pin `kind` to `value`. An empty value unpins the axis.
    pub fn set(&mut self, kind: AxisKind, value: impl Into<String>) {
        let value = value.into();
        if value.is_empty() {
            self.values.remove(&kind);
        } else {
            self.values.insert(kind, value);
        }
    }

    pub fn clear(&mut self, kind: AxisKind) {
        self.values.remove(&kind);
    }

    pub fn get(&self, kind: AxisKind) -> Option<&str> {
        self.values.get(&kind).map(String::as_str)
    }

    pub fn is_empty(&self) -> bool {
        self.values.is_empty()
    }

    pub fn iter(&self) -> impl Iterator<Item = (AxisKind, &str)> {
        self.values.iter().map(|(k, v)| (*k, v.as_str()))
    }

    /// The selection describing `variant`'s own values on every product axis.
    pub fn from_variant(index: &AttributeIndex<'_>, variant: &Variant) -> Self {
        let mut selection = Selection::new();
        for kind in index.kinds() {
            if let Some(attr) = index.axis(kind)
                && let Some(value) = variant.value_of(&attr.id)
            {
                selection.set(kind, value);
            }
        }
        selection
    }
}

// ─── Resolution ──────────────────────────────────────────────────────────────

impl<'a> AttributeIndex<'a> {
    /// Whether `variant` agrees with every pinned axis that exists on the
    /// product. Stock is not considered.
    pub fn matches(&self, variant: &Variant, selection: &Selection) -> bool {
        selection
            .iter()
            .all(|(kind, wanted)| match self.axis(kind) {
                Some(attr) => variant.value_of(&attr.id) == Some(wanted),
                None => true,
            })
    }

    /// First available variant in list order matching `selection`.
    pub fn resolve(&self, selection: &Selection) -> Option<&'a Variant> {
        let found = self
            .variants()
            .iter()
            .find(|v| v.is_available() && self.matches(v, selection));
        debug!(
            ?selection,
            variant = found.map(|v| v.id.as_str()),
            "resolved selection"
        );
        found
    }
}

/// Resolve `selection` against `variants` using the default axis keywords.
///
/// Out-of-stock variants are never returned, even when they are the only
/// structural match.
pub fn resolve<'a>(variants: &'a [Variant], selection: &Selection) -> Option<&'a Variant> {
    AttributeIndex::build(variants).resolve(selection)
}

// ─── Navigation ──────────────────────────────────────────────────────────────

/// The pair a navigation collaborator needs to open a variant's detail view.
#[derive(Clone, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct VariantTarget {
    pub product_slug: String,
    pub variant_id: String,
}

impl VariantTarget {
    pub fn new(product_slug: impl Into<String>, variant_id: impl Into<String>) -> Self {
        VariantTarget {
            product_slug: product_slug.into(),
            variant_id: variant_id.into(),
        }
    }
}

/// Extension point for the caller's router.
///
/// Any `FnMut(&VariantTarget)` closure is a navigator.
pub trait Navigator {
    fn navigate(&mut self, target: &VariantTarget);
}

impl<F: FnMut(&VariantTarget)> Navigator for F {
    fn navigate(&mut self, target: &VariantTarget) {
        self(target)
    }
}

// ─── Options ─────────────────────────────────────────────────────────────────

/// One selectable value of one axis, as the selector renders it.
#[derive(Clone, Debug, PartialEq, Eq, Serialize)]
pub struct AxisOption {
    pub kind: AxisKind,
    pub value: String,
    pub selected: bool,
    /// False when no in-stock variant carries this value together with the
    /// other axes of the current selection.
    pub enabled: bool,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub target: Option<VariantTarget>,
}

impl AxisOption {
    /// Navigate to the option's variant. Disabled options do nothing.
    pub fn choose(&self, navigator: &mut impl Navigator) -> bool {
        match (&self.target, self.enabled) {
            (Some(target), true) => {
                navigator.navigate(target);
                true
            }
            _ => false,
        }
    }
}

/// Options for every value of `kind`, in first-occurrence order.
///
/// Each value is resolved with the current selection's other axes kept and
/// this axis replaced by the value.
pub fn axis_options(
    index: &AttributeIndex<'_>,
    current: &Selection,
    kind: AxisKind,
    product_slug: &str,
) -> Vec<AxisOption> {
    index
        .values(kind)
        .into_iter()
        .map(|value| {
            let candidate = current.clone().with(kind, value.as_str());
            let variant = index.resolve(&candidate);
            trace!(%kind, %value, enabled = variant.is_some(), "evaluated option");
            AxisOption {
                kind,
                selected: current.get(kind) == Some(value.as_str()),
                enabled: variant.is_some(),
                target: variant.map(|v| VariantTarget::new(product_slug, v.id.as_str())),
                value,
            }
        })
        .collect()
}

// ─── Decision ────────────────────────────────────────────────────────────────

#[derive(Clone, Debug, PartialEq, Eq, Serialize)]
pub struct AxisGroup {
    pub kind: AxisKind,
    pub options: Vec<AxisOption>,
}

/// Selector contents: one group per axis that has values.
#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize)]
pub struct SelectorView {
    pub groups: Vec<AxisGroup>,
}

impl SelectorView {
    pub fn group(&self, kind: AxisKind) -> Option<&AxisGroup> {
        self.groups.iter().find(|g| g.kind == kind)
    }

    /// True when no axis was detected; the selector renders nothing.
    pub fn is_empty(&self) -> bool {
        self.groups.is_empty()
    }
}

/// What the caller should do with the selector on this render.
#[derive(Clone, Debug, PartialEq, Eq, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum SelectorDecision {
    /// Skip selection and open the only variant directly.
    Redirect(VariantTarget),
    Selector(SelectorView),
    /// Render no selector and do not navigate.
    Hidden,
}

impl SelectorDecision {
    /// Invoke `navigator` for a redirect. Returns whether navigation happened.
    pub fn follow(&self, navigator: &mut impl Navigator) -> bool {
        match self {
            SelectorDecision::Redirect(target) => {
                navigator.navigate(target);
                true
            }
            _ => false,
        }
    }
}

/// Decide the selector for `product` given the variant currently shown.
pub fn decide(product: &Product, selected: Option<&Variant>) -> SelectorDecision {
    decide_with(product, selected, &AxisConfig::default())
}

pub fn decide_with(
    product: &Product,
    selected: Option<&Variant>,
    config: &AxisConfig,
) -> SelectorDecision {
    let variants = product.variants.as_slice();

    if let [only] = variants
        && selected.is_none()
        && only.is_available()
    {
        debug!(product = %product.slug, variant = %only.id, "single variant redirect");
        return SelectorDecision::Redirect(VariantTarget::new(
            product.slug.as_str(),
            only.id.as_str(),
        ));
    }

    if variants.len() <= 1 {
        debug!(product = %product.slug, variants = variants.len(), "selector hidden");
        return SelectorDecision::Hidden;
    }

    let index = AttributeIndex::with_config(variants, config);
    let current = selected
        .map(|v| Selection::from_variant(&index, v))
        .unwrap_or_default();

    let groups = AxisKind::ALL
        .into_iter()
        .map(|kind| AxisGroup {
            kind,
            options: axis_options(&index, &current, kind, &product.slug),
        })
        .filter(|g| !g.options.is_empty())
        .collect();

    SelectorDecision::Selector(SelectorView { groups })
}
