use serde::{Deserialize, Deserializer, Serialize};
use serde_json::Value;

// ─── Catalog ─────────────────────────────────────────────────────────────────

/// The top-level container for a catalog snapshot of one product.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct Catalog {
    pub product: Product,
}

// ─── Product ─────────────────────────────────────────────────────────────────

/// A product as fetched for one detail-page render.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct Product {
    pub slug: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub name: Option<String>,
    /// Product-level media, displayed before any variant media.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub media: Option<Vec<Media>>,
    #[serde(default)]
    pub variants: Vec<Variant>,
}

impl Product {
    /// Looks up a variant by identifier.
    pub fn variant(&self, id: &str) -> Option<&Variant> {
        self.variants.iter().find(|v| v.id == id)
    }

    /// Product-level media, or an empty slice when the catalog omitted it.
    pub fn media(&self) -> &[Media] {
        self.media.as_deref().unwrap_or_default()
    }
}

// ─── Attributes ──────────────────────────────────────────────────────────────

/// A catalog attribute such as "Size" or "Shirt color".
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct Attribute {
    #[serde(deserialize_with = "scalar_string")]
    pub id: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub name: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub slug: Option<String>,
}

#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct AttributeValue {
    #[serde(
        default,
        deserialize_with = "optional_scalar_string",
        skip_serializing_if = "Option::is_none"
    )]
    pub name: Option<String>,
}

/// Binding of one attribute to its values on a specific variant.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct AttributeAssignment {
    pub attribute: Attribute,
    #[serde(default)]
    pub values: Vec<AttributeValue>,
}

impl AttributeAssignment {
    /// Display string of the first value.
    ///
    /// Assignments are read as single-valued: any values after the first are
    /// ignored, and a missing or empty first value counts as no value.
    pub fn first_value(&self) -> Option<&str> {
        self.values
            .first()
            .and_then(|v| v.name.as_deref())
            .filter(|name| !name.is_empty())
    }
}

// ─── Variant ─────────────────────────────────────────────────────────────────

/// One concrete purchasable SKU of a product.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct Variant {
    #[serde(deserialize_with = "scalar_string")]
    pub id: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub name: Option<String>,
    #[serde(default)]
    pub attributes: Vec<AttributeAssignment>,
    #[serde(
        rename = "quantityAvailable",
        default,
        skip_serializing_if = "Option::is_none"
    )]
    pub quantity_available: Option<i64>,
    #[serde(default)]
    pub media: Vec<Media>,
}

impl Variant {
    /// A variant is available iff its stock quantity is present and non-zero.
    pub fn is_available(&self) -> bool {
        self.quantity_available.is_some_and(|q| q != 0)
    }

    /// The assignment for the attribute with the given identifier.
    pub fn assignment(&self, attribute_id: &str) -> Option<&AttributeAssignment> {
        self.attributes
            .iter()
            .find(|a| a.attribute.id == attribute_id)
    }

    /// First display value of the attribute with the given identifier.
    pub fn value_of(&self, attribute_id: &str) -> Option<&str> {
        self.assignment(attribute_id)
            .and_then(AttributeAssignment::first_value)
    }

    pub fn has_media_url(&self, url: &str) -> bool {
        self.media.iter().any(|m| m.url == url)
    }
}

// ─── Media ───────────────────────────────────────────────────────────────────

/// An image reference. Two media are the same image iff their URLs are equal.
#[derive(Clone, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Media {
    #[serde(default)]
    pub url: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub alt: Option<String>,
}

impl Media {
    pub fn new(url: impl Into<String>, alt: impl Into<String>) -> Self {
        Media {
            url: url.into(),
            alt: Some(alt.into()),
        }
    }

    /// Alt text, empty when the catalog omitted it.
    pub fn alt(&self) -> &str {
        self.alt.as_deref().unwrap_or_default()
    }
}

// ─── Scalar strings ──────────────────────────────────────────────────────────

/// Catalogs write shoe sizes and numeric SKU ids as plain YAML numbers
/// (`name: 42`, `id: 1001`). Those are display strings here.
fn scalar_to_string(value: Value) -> Result<Option<String>, String> {
    match value {
        Value::Null => Ok(None),
        Value::String(s) => Ok(Some(s)),
        Value::Number(n) => Ok(Some(n.to_string())),
        other => Err(format!("invalid type: {}, expected a string or number", other)),
    }
}

fn scalar_string<'de, D: Deserializer<'de>>(deserializer: D) -> Result<String, D::Error> {
    match scalar_to_string(Value::deserialize(deserializer)?) {
        Ok(Some(s)) => Ok(s),
        Ok(None) => Err(serde::de::Error::custom(
            "invalid type: null, expected a string or number",
        )),
        Err(msg) => Err(serde::de::Error::custom(msg)),
    }
}

fn optional_scalar_string<'de, D: Deserializer<'de>>(
    deserializer: D,
) -> Result<Option<String>, D::Error> {
    scalar_to_string(Value::deserialize(deserializer)?).map_err(serde::de::Error::custom)
}
