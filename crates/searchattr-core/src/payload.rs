//! Attribute payloads and stamping of type metadata onto them.

use serde::{Deserialize, Serialize};
use std::collections::HashMap;

use crate::error::{Error, Result};
use crate::type_map::TypeMap;
use crate::types::IndexedValueType;

/// Reserved metadata key holding the canonical type name.
pub const METADATA_TYPE: &str = "type";

/// An encoded attribute value plus its metadata. `data` is never interpreted here.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct AttributePayload {
    #[serde(default)]
    pub metadata: HashMap<String, Vec<u8>>,
    #[serde(default)]
    pub data: Vec<u8>,
}

impl AttributePayload {
    pub fn new(data: impl Into<Vec<u8>>) -> Self { Self { metadata: HashMap::new(), data: data.into() } }

    pub fn with_metadata(mut self, key: &str, value: impl Into<Vec<u8>>) -> Self {
        self.metadata.insert(key.to_string(), value.into());
        self
    }

    pub fn has_metadata_type(&self) -> bool { self.metadata.contains_key(METADATA_TYPE) }

    /// The type recorded under [`METADATA_TYPE`], if any.
    pub fn metadata_type(&self) -> Option<Result<IndexedValueType>> {
        let raw = self.metadata.get(METADATA_TYPE)?;
        let name = String::from_utf8_lossy(raw);
        Some(IndexedValueType::from_name(&name).ok_or_else(|| Error::InvalidType {
            name: METADATA_TYPE.to_string(),
            value: name.into_owned(),
            shape: "bytes",
        }))
    }
}

/// Search attributes of one record, keyed by attribute name.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct SearchAttributes {
    pub indexed_fields: HashMap<String, AttributePayload>,
}

impl SearchAttributes {
    pub fn new(indexed_fields: HashMap<String, AttributePayload>) -> Self { Self { indexed_fields } }

    pub fn get(&self, name: &str) -> Option<&AttributePayload> { self.indexed_fields.get(name) }
}

/// Stamps the type onto every payload that has none yet and whose name is in
/// `type_map`.
///
/// Best effort: already-typed payloads are never re-typed even when the map
/// disagrees, and unknown names pass through untouched. Entries are never
/// added or removed and payload data is never changed.
pub fn apply_type_map(search_attributes: &mut SearchAttributes, type_map: &TypeMap) {
    if type_map.is_empty() { return; }

    for (name, payload) in &mut search_attributes.indexed_fields {
        if payload.has_metadata_type() {
            tracing::trace!(attribute = %name, "type already set");
            continue;
        }
        let Some(value_type) = type_map.lookup(name) else {
            tracing::trace!(attribute = %name, "attribute not in type map");
            continue;
        };
        set_metadata_type(payload, value_type);
    }
}

fn set_metadata_type(payload: &mut AttributePayload, value_type: IndexedValueType) {
    if !value_type.is_specified() { return; }
    // panics on a variant missing from the name table
    let name = value_type.name();
    payload.metadata.insert(METADATA_TYPE.to_string(), name.as_bytes().to_vec());
}
