use std::collections::HashMap;

use searchattr_core::{build_type_map, IndexedValueType, TypeDescriptor, TypeMap};
use searchattr_index::tantivy_utils::TEXT_TOKENIZER;
use searchattr_index::{build_schema, create_index_in_ram, es_mapping, es_type, es_type_for_code};
use serde_json::json;
use tantivy::schema::FieldType;
use tantivy::tokenizer::TokenStream;

fn type_map() -> TypeMap {
    let source = || {
        HashMap::from([
            ("CustomStringField".to_string(), TypeDescriptor::from("String")),
            ("CustomKeywordField".to_string(), TypeDescriptor::from("Keyword")),
            ("CustomIntField".to_string(), TypeDescriptor::NumericCode(3)),
            ("CustomDoubleField".to_string(), TypeDescriptor::from("Double")),
            ("CustomBoolField".to_string(), TypeDescriptor::from("Bool")),
            ("CustomDatetimeField".to_string(), TypeDescriptor::from("Datetime")),
        ])
    };
    build_type_map(Some(&source)).expect("type map")
}

#[test]
fn es_type_table() {
    assert_eq!(es_type(IndexedValueType::String), "text");
    assert_eq!(es_type(IndexedValueType::Keyword), "keyword");
    assert_eq!(es_type(IndexedValueType::Int), "long");
    assert_eq!(es_type(IndexedValueType::Double), "double");
    assert_eq!(es_type(IndexedValueType::Bool), "boolean");
    assert_eq!(es_type(IndexedValueType::Datetime), "date");
    assert_eq!(es_type(IndexedValueType::Unspecified), "");
}

#[test]
fn unknown_codes_have_no_mapping() {
    assert_eq!(es_type_for_code(2), "keyword");
    assert_eq!(es_type_for_code(6), "date");
    for code in [0, 7, 42, -1, i32::MAX] {
        assert_eq!(es_type_for_code(code), "", "code {code}");
    }
}

#[test]
fn mapping_lists_every_attribute() {
    let mapping = es_mapping(&type_map());
    assert_eq!(
        mapping,
        json!({
            "properties": {
                "CustomStringField": { "type": "text" },
                "CustomKeywordField": { "type": "keyword" },
                "CustomIntField": { "type": "long" },
                "CustomDoubleField": { "type": "double" },
                "CustomBoolField": { "type": "boolean" },
                "CustomDatetimeField": { "type": "date" }
            }
        })
    );
    assert_eq!(es_mapping(&TypeMap::empty()), json!({ "properties": {} }));
}

#[test]
fn schema_field_kinds_follow_types() {
    let schema = build_schema(&type_map());
    let kind = |name: &str| schema.get_field_entry(schema.get_field(name).expect("field")).field_type().clone();

    assert!(matches!(kind("CustomStringField"), FieldType::Str(_)));
    assert!(matches!(kind("CustomKeywordField"), FieldType::Str(_)));
    assert!(matches!(kind("CustomIntField"), FieldType::I64(_)));
    assert!(matches!(kind("CustomDoubleField"), FieldType::F64(_)));
    assert!(matches!(kind("CustomBoolField"), FieldType::Bool(_)));
    assert!(matches!(kind("CustomDatetimeField"), FieldType::Date(_)));
    assert_eq!(schema.fields().count(), 6);
}

#[test]
fn text_analyzer_lowercases_and_keeps_every_word() {
    let index = create_index_in_ram(&type_map());
    let mut analyzer = index.tokenizers().get(TEXT_TOKENIZER).expect("text analyzer registered");
    let mut tokens = Vec::new();
    analyzer.token_stream("The Order-42 is on THE way").process(&mut |t| tokens.push(t.text.clone()));
    assert_eq!(tokens, ["the", "order", "42", "is", "on", "the", "way"]);
}
