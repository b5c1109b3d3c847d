// src/core/entry.rs
//! Catalog entry and its JSON wire shape
//!
//! The remote endpoint and the persisted `pokemonData` blob share one shape:
//! `{"id", "name": {"english"}, "type": [...], "image", ...}`. Reading is lenient
//! (plain-string names, missing or non-text images, stray field types); writing
//! always produces the canonical shape. Fields this crate does not model, including
//! the non-English names, are kept and written back untouched.

use serde::{Deserialize, Serialize, Serializer};
use serde_json::{Map, Value};

use crate::consts::PLACEHOLDER_IMAGE;

pub type EntryId = u64;

const UNKNOWN_NAME: &str = "Unknown";

#[derive(Debug, Clone, PartialEq, Deserialize)]
#[serde(from = "WireEntry")]
pub struct CatalogEntry {
    pub id: EntryId,
    pub display_name: String,
    pub types: Vec<String>,
    pub image_ref: String,
    pub description: Option<String>,
    /// Meters
    pub height: Option<f64>,
    /// Kilograms
    pub weight: Option<f64>,
    /// Remaining keys of the `name` object (`japanese`, `french`, ...)
    pub other_names: Map<String, Value>,
    /// Unmodeled top-level fields (`base`, `species`, `evolution`, ...)
    pub extra: Map<String, Value>,
}

impl CatalogEntry {
    /// Fresh entry with the placeholder image and no optional details
    pub fn new(id: EntryId, display_name: impl Into<String>, types: Vec<String>) -> Self {
        Self {
            id,
            display_name: display_name.into(),
            types,
            image_ref: PLACEHOLDER_IMAGE.to_string(),
            description: None,
            height: None,
            weight: None,
            other_names: Map::new(),
            extra: Map::new(),
        }
    }

    /// Case-insensitive substring match; `needle` must already be lowercase
    pub(crate) fn name_contains(&self, needle: &str) -> bool {
        self.display_name.to_lowercase().contains(needle)
    }
}

#[derive(Deserialize)]
struct WireEntry {
    id: EntryId,
    #[serde(default)]
    name: Value,
    #[serde(rename = "type", default)]
    types: Value,
    #[serde(default)]
    image: Value,
    #[serde(default)]
    description: Value,
    #[serde(default)]
    height: Value,
    #[serde(default)]
    weight: Value,
    #[serde(flatten)]
    extra: Map<String, Value>,
}

fn non_empty_str(value: &Value) -> Option<&str> {
    value.as_str().filter(|s| !s.is_empty())
}

impl From<WireEntry> for CatalogEntry {
    fn from(wire: WireEntry) -> Self {
        let (plain_name, mut other_names) = match wire.name {
            Value::Object(names) => (None, names),
            Value::String(name) => (Some(name), Map::new()),
            _ => (None, Map::new()),
        };
        let english = other_names.remove("english");

        let display_name = plain_name
            .as_deref()
            .filter(|name| !name.is_empty())
            .or_else(|| english.as_ref().and_then(non_empty_str))
            .unwrap_or(UNKNOWN_NAME)
            .to_string();

        let types = wire
            .types
            .as_array()
            .map(|tags| {
                tags.iter()
                    .filter_map(|t| t.as_str().map(str::to_string))
                    .collect()
            })
            .unwrap_or_default();

        Self {
            id: wire.id,
            display_name,
            types,
            image_ref: wire
                .image
                .as_str()
                .unwrap_or(PLACEHOLDER_IMAGE)
                .to_string(),
            description: non_empty_str(&wire.description).map(str::to_string),
            height: wire.height.as_f64(),
            weight: wire.weight.as_f64(),
            other_names,
            extra: wire.extra,
        }
    }
}

#[derive(Serialize)]
struct WireName<'a> {
    english: &'a str,
    #[serde(flatten)]
    others: &'a Map<String, Value>,
}

#[derive(Serialize)]
struct WireEntryRef<'a> {
    id: EntryId,
    name: WireName<'a>,
    #[serde(rename = "type")]
    types: &'a [String],
    image: &'a str,
    #[serde(skip_serializing_if = "Option::is_none")]
    description: Option<&'a str>,
    #[serde(skip_serializing_if = "Option::is_none")]
    height: Option<f64>,
    #[serde(skip_serializing_if = "Option::is_none")]
    weight: Option<f64>,
    #[serde(flatten)]
    extra: &'a Map<String, Value>,
}

impl Serialize for CatalogEntry {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        WireEntryRef {
            id: self.id,
            name: WireName {
                english: &self.display_name,
                others: &self.other_names,
            },
            types: &self.types,
            image: &self.image_ref,
            description: self.description.as_deref(),
            height: self.height,
            weight: self.weight,
            extra: &self.extra,
        }
        .serialize(serializer)
    }
}
