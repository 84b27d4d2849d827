//! Validated search attribute name to type mapping.

use std::collections::HashMap;

use crate::error::{Error, Result};
use crate::traits::SearchAttributeSource;
use crate::types::IndexedValueType;

/// Immutable name to type map built from one configuration snapshot.
///
/// Empty means "no typed attributes configured", which is a legal state.
/// Every contained type is specified.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct TypeMap {
    types: HashMap<String, IndexedValueType>,
}

impl TypeMap {
    pub fn empty() -> Self { Self::default() }

    pub fn len(&self) -> usize { self.types.len() }

    pub fn is_empty(&self) -> bool { self.types.is_empty() }

    pub fn contains(&self, name: &str) -> bool { self.types.contains_key(name) }

    /// Looks up the type of a single attribute.
    ///
    /// An empty map fails with [`Error::TypeMapEmpty`] rather than
    /// [`Error::InvalidName`], so callers can tell "typing not configured"
    /// apart from "unknown attribute".
    pub fn get_type(&self, name: &str) -> Result<IndexedValueType> {
        if self.types.is_empty() { return Err(Error::TypeMapEmpty); }
        self.types.get(name).copied().ok_or_else(|| Error::InvalidName(name.to_string()))
    }

    /// Entries sorted by name.
    pub fn iter(&self) -> impl Iterator<Item = (&str, IndexedValueType)> {
        let mut entries: Vec<_> = self.types.iter().map(|(k, v)| (k.as_str(), *v)).collect();
        entries.sort_unstable_by(|a, b| a.0.cmp(b.0));
        entries.into_iter()
    }

    pub(crate) fn lookup(&self, name: &str) -> Option<IndexedValueType> { self.types.get(name).copied() }
}

impl From<TypeMap> for HashMap<String, IndexedValueType> {
    fn from(map: TypeMap) -> Self { map.types }
}

/// Builds a [`TypeMap`] from the declarations `source` returns.
///
/// A missing source or an empty declaration set yields an empty map. One bad
/// entry fails the whole build; no partial map is ever returned.
pub fn build_type_map(source: Option<&dyn SearchAttributeSource>) -> Result<TypeMap> {
    let Some(source) = source else { return Ok(TypeMap::empty()) };
    let declared = source.search_attributes();
    if declared.is_empty() {
        tracing::debug!("no search attributes declared");
        return Ok(TypeMap::empty());
    }

    let mut types = HashMap::with_capacity(declared.len());
    for (name, descriptor) in &declared {
        if name.is_empty() {
            tracing::warn!("rejecting search attributes: empty attribute name");
            return Err(Error::InvalidName(name.clone()));
        }
        let value_type = descriptor.coerce(name).inspect_err(|e| {
            tracing::warn!(attribute = %name, error = %e, "rejecting search attributes");
        })?;
        types.insert(name.clone(), value_type);
    }
    tracing::debug!(count = types.len(), "built search attribute type map");
    Ok(TypeMap { types })
}
