//! searchattr-index
//!
//! Maps search attribute value types onto the index field-type vocabulary and
//! emits index schemas (ES-style JSON mapping, tantivy schema) from a type map.
pub mod es_type;
pub mod mapping;
pub mod tantivy_utils;

pub use es_type::{es_type, es_type_for_code};
pub use mapping::es_mapping;
pub use tantivy_utils::{build_schema, create_index_in_ram};
