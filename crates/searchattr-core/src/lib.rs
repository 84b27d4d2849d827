#![deny(warnings)]
#![deny(dead_code)]
#![deny(unused_variables)]
#![deny(unused_imports)]

//! searchattr-core
//!
//! Builds validated search attribute type maps from configuration, resolves
//! attribute types and stamps type metadata onto attribute payloads.

pub mod config;
pub mod error;
pub mod payload;
pub mod traits;
pub mod type_map;
pub mod types;

pub use error::{Error, Result};
pub use payload::{apply_type_map, AttributePayload, SearchAttributes, METADATA_TYPE};
pub use traits::SearchAttributeSource;
pub use type_map::{build_type_map, TypeMap};
pub use types::{IndexedValueType, TypeDescriptor};
