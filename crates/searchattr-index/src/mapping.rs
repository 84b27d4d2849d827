use serde_json::{json, Map, Value};

use searchattr_core::TypeMap;

use crate::es_type::es_type;

/// ES-style mapping body: `{"properties": {<name>: {"type": <es type>}}}`.
pub fn es_mapping(type_map: &TypeMap) -> Value {
    let mut properties = Map::new();
    for (name, t) in type_map.iter() {
        let field_type = es_type(t);
        if field_type.is_empty() {
            tracing::warn!(attribute = %name, value_type = %t, "no index type mapping, skipping");
            continue;
        }
        properties.insert(name.to_string(), json!({ "type": field_type }));
    }
    json!({ "properties": properties })
}
