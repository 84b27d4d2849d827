use searchattr_core::IndexedValueType;

/// Field type vocabulary of the downstream index. These strings are part of
/// the index schema contract and must not change without a migration.
pub const ES_TYPES: [(IndexedValueType, &str); 6] = [
    (IndexedValueType::String, "text"),
    (IndexedValueType::Keyword, "keyword"),
    (IndexedValueType::Int, "long"),
    (IndexedValueType::Double, "double"),
    (IndexedValueType::Bool, "boolean"),
    (IndexedValueType::Datetime, "date"),
];

/// Index field type for `t`, or `""` when there is no mapping (`Unspecified`).
pub fn es_type(t: IndexedValueType) -> &'static str {
    ES_TYPES.iter().find(|(k, _)| *k == t).map_or("", |(_, v)| *v)
}

/// Same as [`es_type`] for a raw numeric code; unknown codes map to `""`.
pub fn es_type_for_code(code: i32) -> &'static str {
    IndexedValueType::from_code(i64::from(code)).map_or("", es_type)
}
