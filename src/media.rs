//! Media gallery assembly and color narrowing.

use crate::config::AxisConfig;
use crate::enums::AxisKind;
use crate::types::{Media, Product, Variant};
use std::collections::HashSet;
use tracing::debug;

/// Ordered, URL-deduplicated images for one render.
///
/// The first image is the primary one and the only one loaded eagerly. The
/// gallery also tracks which image is on display; a rebuild always shows the
/// primary image again.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct Gallery {
    images: Vec<Media>,
    active: usize,
}

impl Gallery {
    pub fn resolve(
        product_media: &[Media],
        variants: &[Variant],
        selected: Option<&Variant>,
    ) -> Self {
        Gallery {
            images: resolve_media(product_media, variants, selected),
            active: 0,
        }
    }

    pub fn for_product(product: &Product, selected: Option<&Variant>) -> Self {
        Self::resolve(product.media(), &product.variants, selected)
    }

    /// Rebuild for a new selection and go back to the primary image.
    pub fn update(&mut self, product: &Product, selected: Option<&Variant>) {
        *self = Self::for_product(product, selected);
    }

    /// Show the image at `index`. Out-of-range indices are ignored.
    pub fn select(&mut self, index: usize) -> bool {
        if index >= self.images.len() {
            return false;
        }
        self.active = index;
        true
    }

    pub fn active_index(&self) -> usize {
        self.active
    }

    /// The image on display.
    pub fn current(&self) -> Option<&Media> {
        self.images.get(self.active).or_else(|| self.images.first())
    }

    /// Only the primary image is loaded with priority.
    pub fn is_priority(&self, index: usize) -> bool {
        index == 0 && !self.images.is_empty()
    }

    pub fn primary(&self) -> Option<&Media> {
        self.images.first()
    }

    pub fn images(&self) -> &[Media] {
        &self.images
    }

    /// Thumbnail strip contents; empty unless there is more than one image.
    pub fn thumbnails(&self) -> &[Media] {
        if self.images.len() > 1 {
            &self.images
        } else {
            &[]
        }
    }

    pub fn len(&self) -> usize {
        self.images.len()
    }

    pub fn is_empty(&self) -> bool {
        self.images.is_empty()
    }

    pub fn into_images(self) -> Vec<Media> {
        self.images
    }
}

/// Build the gallery image list using the default color keywords.
///
/// Product media come first, then each variant's media in list order. The
/// first occurrence of a URL wins. When the selected variant has a color,
/// only images of variants sharing that color are kept, unless that would
/// leave nothing.
pub fn resolve_media(
    product_media: &[Media],
    variants: &[Variant],
    selected: Option<&Variant>,
) -> Vec<Media> {
    resolve_media_with(product_media, variants, selected, &AxisConfig::default())
}

pub fn resolve_media_with(
    product_media: &[Media],
    variants: &[Variant],
    selected: Option<&Variant>,
    config: &AxisConfig,
) -> Vec<Media> {
    let all = collect_unique(product_media, variants);
    if all.is_empty() {
        return all;
    }

    let Some(color) = selected.and_then(|v| color_of(v, config)) else {
        return all;
    };

    let narrowed: Vec<Media> = all
        .iter()
        .filter(|image| {
            variants
                .iter()
                .any(|v| color_of(v, config) == Some(color) && v.has_media_url(&image.url))
        })
        .cloned()
        .collect();

    debug!(
        color,
        total = all.len(),
        narrowed = narrowed.len(),
        "narrowed gallery by color"
    );

    if narrowed.is_empty() { all } else { narrowed }
}

fn collect_unique(product_media: &[Media], variants: &[Variant]) -> Vec<Media> {
    let mut seen: HashSet<&str> = HashSet::new();
    let mut out = Vec::new();
    let sources = product_media
        .iter()
        .chain(variants.iter().flat_map(|v| v.media.iter()));
    for media in sources {
        if media.url.is_empty() || !seen.insert(media.url.as_str()) {
            continue;
        }
        out.push(Media::new(media.url.as_str(), media.alt()));
    }
    out
}

/// Color value of a variant, read from the variant's own color-like
/// assignment rather than the product-wide axis.
fn color_of<'v>(variant: &'v Variant, config: &AxisConfig) -> Option<&'v str> {
    variant
        .attributes
        .iter()
        .find(|a| config.matches(&a.attribute, AxisKind::Color))
        .and_then(|a| a.first_value())
}
