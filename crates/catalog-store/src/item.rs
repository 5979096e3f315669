use serde::{Deserialize, Serialize};
use serde_json::{Map, Value};

use crate::error::{StoreError, StoreResult};

/// Indentation used for every document write.
const DOCUMENT_INDENT: &[u8] = b" ";

// ---------------------------------------------------------------------------
// Price
// ---------------------------------------------------------------------------

/// An item price, kept exactly as supplied.
///
/// Prices arriving over HTTP are always text. Numbers already present in a
/// stored document stay numbers, and any other JSON value (`null`, booleans,
/// hand-edited objects) is carried through as-is. No coercion or validation
/// happens in either direction.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum Price {
    Text(String),
    Number(serde_json::Number),
    Other(Value),
}

impl From<String> for Price {
    fn from(value: String) -> Self {
        Self::Text(value)
    }
}

impl From<&str> for Price {
    fn from(value: &str) -> Self {
        Self::Text(value.to_owned())
    }
}

impl From<serde_json::Number> for Price {
    fn from(value: serde_json::Number) -> Self {
        Self::Number(value)
    }
}

impl std::fmt::Display for Price {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Text(s) => write!(f, "{s}"),
            Self::Number(n) => write!(f, "{n}"),
            Self::Other(v) => write!(f, "{v}"),
        }
    }
}

// ---------------------------------------------------------------------------
// Item
// ---------------------------------------------------------------------------

/// One named entry in the catalog.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct Item {
    pub name: String,
    /// `None` when the stored object has no `price` key at all; such items
    /// are written back without one.
    #[serde(
        default,
        deserialize_with = "present",
        skip_serializing_if = "Option::is_none"
    )]
    pub price: Option<Price>,
    /// Any other fields found on the stored object, written back untouched.
    #[serde(flatten)]
    pub extra: Map<String, Value>,
}

impl Item {
    pub fn new(name: impl Into<String>, price: impl Into<Price>) -> Self {
        Self {
            name: name.into(),
            price: Some(price.into()),
            extra: Map::new(),
        }
    }
}

/// Maps a present key to `Some`, even when its value is `null`.
fn present<'de, D>(deserializer: D) -> Result<Option<Price>, D::Error>
where
    D: serde::Deserializer<'de>,
{
    Price::deserialize(deserializer).map(Some)
}

// ---------------------------------------------------------------------------
// Catalog
// ---------------------------------------------------------------------------

/// The full item collection, in insertion order.
///
/// Names are not unique. [`Catalog::update_price`] touches the first match
/// only, while [`Catalog::remove_named`] drops every match.
#[derive(Clone, Debug, Default, PartialEq, Serialize, Deserialize)]
pub struct Catalog {
    pub items: Vec<Item>,
    /// Top-level keys other than `items`, preserved across rewrites.
    #[serde(flatten)]
    pub extra: Map<String, Value>,
}

impl Catalog {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn len(&self) -> usize {
        self.items.len()
    }

    pub fn is_empty(&self) -> bool {
        self.items.is_empty()
    }

    /// Append an item. Duplicate names are allowed.
    pub fn push(&mut self, item: Item) {
        self.items.push(item);
    }

    /// First item with exactly this name.
    pub fn find(&self, name: &str) -> Option<&Item> {
        self.items.iter().find(|item| item.name == name)
    }

    /// Set the price of the first item named `name`.
    ///
    /// With `price == None` the matched item is left as it was. Returns
    /// whether any item matched.
    pub fn update_price(&mut self, name: &str, price: Option<Price>) -> bool {
        match self.items.iter_mut().find(|item| item.name == name) {
            Some(item) => {
                if let Some(price) = price {
                    item.price = Some(price);
                }
                true
            }
            None => false,
        }
    }

    /// Remove every item named `name`. Returns how many were removed.
    pub fn remove_named(&mut self, name: &str) -> usize {
        let before = self.items.len();
        self.items.retain(|item| item.name != name);
        before - self.items.len()
    }

    /// Parse a stored document.
    pub fn from_document(bytes: &[u8]) -> StoreResult<Self> {
        serde_json::from_slice(bytes).map_err(|e| StoreError::Malformed(e.to_string()))
    }

    /// Encode as a document with stable one-space indentation.
    pub fn to_document(&self) -> StoreResult<Vec<u8>> {
        let mut buf = Vec::new();
        let formatter = serde_json::ser::PrettyFormatter::with_indent(DOCUMENT_INDENT);
        let mut ser = serde_json::Serializer::with_formatter(&mut buf, formatter);
        self.serialize(&mut ser)
            .map_err(|e| StoreError::Serialization(e.to_string()))?;
        Ok(buf)
    }
}
