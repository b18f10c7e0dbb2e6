//! Axis detection keywords.

use crate::enums::AxisKind;
use crate::error::{ParseError, ParseErrorKind};
use crate::types::Attribute;
use serde::{Deserialize, Serialize};

/// Keywords used to recognize axis attributes.
///
/// An attribute is an axis of a given kind when its name or slug, lowercased,
/// contains any of that kind's keywords. Defaults are `["size"]` and
/// `["color"]`; localized catalogs can add e.g. `colour` or `taille`.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct AxisConfig {
    pub size: Vec<String>,
    pub color: Vec<String>,
}

impl Default for AxisConfig {
    fn default() -> Self {
        AxisConfig {
            size: vec!["size".to_string()],
            color: vec!["color".to_string()],
        }
    }
}

impl AxisConfig {
    /// Parse a configuration from YAML. Missing keys keep their defaults.
    ///
    /// ```rust
    /// use variant_resolver::AxisConfig;
    ///
    /// let config = AxisConfig::from_yaml("color: [Color, colour]").unwrap();
    /// assert_eq!(config.color, vec!["color", "colour"]);
    /// assert_eq!(config.size, vec!["size"]);
    /// ```
    pub fn from_yaml(input: &str) -> Result<Self, ParseError> {
        if input.trim().is_empty() {
            return Ok(AxisConfig::default());
        }
        let config: AxisConfig = serde_saphyr::from_str(input).map_err(|e| {
            let msg = e.to_string();
            let kind = if msg.to_lowercase().contains("unknown field") {
                ParseErrorKind::UnknownVariant
            } else {
                ParseErrorKind::TypeMismatch
            };
            ParseError::new(kind, msg)
        })?;
        Ok(config.normalized())
    }

    /// Lowercase all keywords and drop empty ones.
    ///
    /// An empty keyword would match every attribute, so it is never kept.
    pub fn normalized(self) -> Self {
        fn clean(words: Vec<String>) -> Vec<String> {
            let mut out: Vec<String> = Vec::with_capacity(words.len());
            for word in words {
                let word = word.trim().to_lowercase();
                if !word.is_empty() && !out.contains(&word) {
                    out.push(word);
                }
            }
            out
        }
        AxisConfig {
            size: clean(self.size),
            color: clean(self.color),
        }
    }

    pub fn keywords(&self, kind: AxisKind) -> &[String] {
        match kind {
            AxisKind::Size => &self.size,
            AxisKind::Color => &self.color,
        }
    }

    /// Whether `attribute` is an axis of the given kind.
    pub fn matches(&self, attribute: &Attribute, kind: AxisKind) -> bool {
        let keywords = self.keywords(kind);
        let hit = |field: Option<&str>| {
            field.is_some_and(|s| {
                let lower = s.to_lowercase();
                keywords
                    .iter()
                    .filter(|k| !k.is_empty())
                    .any(|k| lower.contains(k.to_lowercase().as_str()))
            })
        };
        hit(attribute.name.as_deref()) || hit(attribute.slug.as_deref())
    }
}
