use tantivy::schema::{DateOptions, IndexRecordOption, NumericOptions, Schema, TextFieldIndexing, TextOptions, STORED, STRING};
use tantivy::tokenizer::{LowerCaser, SimpleTokenizer, TextAnalyzer};
use tantivy::Index;

use searchattr_core::{IndexedValueType, TypeMap};

/// Analyzer for `String` attributes: split on non-alphanumerics, lowercase,
/// keep every token.
pub const TEXT_TOKENIZER: &str = "attribute_text";

/// One field per typed search attribute. `String` attributes are tokenized
/// full text, `Keyword` attributes are indexed as a single raw token.
pub fn build_schema(type_map: &TypeMap) -> Schema {
	let mut schema_builder = Schema::builder();
	let numeric = || NumericOptions::default().set_indexed().set_stored().set_fast();
	for (name, t) in type_map.iter() {
		match t {
			IndexedValueType::String => {
				let text_field_indexing = TextFieldIndexing::default().set_tokenizer(TEXT_TOKENIZER).set_index_option(IndexRecordOption::WithFreqsAndPositions);
				let text_options = TextOptions::default().set_indexing_options(text_field_indexing).set_stored();
				schema_builder.add_text_field(name, text_options);
			}
			IndexedValueType::Keyword => { schema_builder.add_text_field(name, STRING | STORED); }
			IndexedValueType::Int => { schema_builder.add_i64_field(name, numeric()); }
			IndexedValueType::Double => { schema_builder.add_f64_field(name, numeric()); }
			IndexedValueType::Bool => { schema_builder.add_bool_field(name, numeric()); }
			IndexedValueType::Datetime => { schema_builder.add_date_field(name, DateOptions::default().set_indexed().set_stored().set_fast()); }
			IndexedValueType::Unspecified => tracing::warn!(attribute = %name, "unspecified type, no field added"),
		}
	}
	schema_builder.build()
}

pub fn register_tokenizer(index: &Index) {
	let analyzer = TextAnalyzer::builder(SimpleTokenizer::default()).filter(LowerCaser).build();
	index.tokenizers().register(TEXT_TOKENIZER, analyzer);
}

/// In-memory index over the attribute schema, tokenizer registered.
pub fn create_index_in_ram(type_map: &TypeMap) -> Index {
	let index = Index::create_in_ram(build_schema(type_map));
	register_tokenizer(&index);
	index
}
