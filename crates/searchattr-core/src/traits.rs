use std::collections::HashMap;

use crate::types::TypeDescriptor;

/// Supplies the raw search attribute declarations, name to type descriptor.
///
/// Called once per type map build and may be called again later to pick up
/// configuration changes, so implementations should read from something cheap
/// (an in-memory snapshot or a small file) and must not block indefinitely.
pub trait SearchAttributeSource: Send + Sync {
    fn search_attributes(&self) -> HashMap<String, TypeDescriptor>;
}

impl<F> SearchAttributeSource for F
where
    F: Fn() -> HashMap<String, TypeDescriptor> + Send + Sync,
{
    fn search_attributes(&self) -> HashMap<String, TypeDescriptor> { self() }
}
