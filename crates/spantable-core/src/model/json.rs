//! Conversion from JSON documents into records.
//!
//! ## Document shape
//!
//! - A top-level array holds the records directly.
//! - A top-level object holds table settings under the settings key
//!   (`tableInfo` by default); every other member is a record.
//! - Inside a record, the settings key holds row settings. Arrays and
//!   objects become sub-row groups whose object elements are the nested
//!   records; scalars become cell values.
//!
//! Elements that are not objects where a record is expected are skipped.

use serde_json::Map;
use serde_json::Value as Json;

use super::Record;
use super::TableData;
use super::Value;
use crate::error::Result;
use crate::error::TableError;
use crate::options::DEFAULT_SETTINGS_KEY;
use crate::settings::RowSettings;
use crate::settings::TableSettings;

impl TableData {
	/// Builds table data from a JSON document using the default settings key.
	///
	/// # Example
	///
	/// ```
	/// use spantable_core::model::TableData;
	///
	/// let data = TableData::from_json(serde_json::json!({
	///     "tableInfo": { "class": "report" },
	///     "first": { "name": "x" },
	///     "second": { "name": "y" },
	/// }))
	/// .unwrap();
	///
	/// assert_eq!(data.records.len(), 2);
	/// assert!(data.settings.is_some());
	/// ```
	pub fn from_json(value: Json) -> Result<Self> {
		Self::from_json_with_key(value, DEFAULT_SETTINGS_KEY)
	}

	/// Builds table data from a JSON document, reading settings from `settings_key`
	pub fn from_json_with_key(value: Json, settings_key: &str) -> Result<Self> {
		match value {
			Json::Array(items) => Ok(Self {
				settings: None,
				records: records_from_items(items, settings_key),
			}),
			Json::Object(mut map) => {
				let settings = map.shift_remove(settings_key).map(TableSettings::from_json);
				Ok(Self {
					settings,
					records: records_from_items(map.into_iter().map(|(_, v)| v), settings_key),
				})
			}
			other => Err(TableError::InvalidData {
				found: json_type_name(&other),
			}),
		}
	}

	/// Parses JSON text and builds table data from it
	pub fn from_json_str(text: &str, settings_key: &str) -> Result<Self> {
		let value: Json = serde_json::from_str(text)?;
		Self::from_json_with_key(value, settings_key)
	}
}

impl Record {
	/// Builds a record from a JSON object using the default settings key
	pub fn from_json(value: Json) -> Result<Self> {
		Self::from_json_with_key(value, DEFAULT_SETTINGS_KEY)
	}

	/// Builds a record from a JSON object, reading row settings from `settings_key`
	pub fn from_json_with_key(value: Json, settings_key: &str) -> Result<Self> {
		match value {
			Json::Object(map) => Ok(record_from_map(map, settings_key)),
			other => Err(TableError::InvalidData {
				found: json_type_name(&other),
			}),
		}
	}
}

fn records_from_items(items: impl IntoIterator<Item = Json>, settings_key: &str) -> Vec<Record> {
	items
		.into_iter()
		.filter_map(|item| match item {
			Json::Object(map) => Some(record_from_map(map, settings_key)),
			other => {
				tracing::debug!(
					found = json_type_name(&other),
					"skipping non-object element where a record was expected"
				);
				None
			}
		})
		.collect()
}

fn record_from_map(map: Map<String, Json>, settings_key: &str) -> Record {
	let mut record = Record::new();
	for (field, value) in map {
		if field == settings_key {
			record.set_settings(Some(RowSettings::from_json(value)));
			continue;
		}
		record.insert(field, value_from_json(value, settings_key));
	}
	record
}

fn value_from_json(value: Json, settings_key: &str) -> Value {
	match value {
		Json::Null => Value::Null,
		Json::Bool(b) => Value::Bool(b),
		Json::Number(n) => match n.as_i64() {
			Some(int) => Value::Int(int),
			None => Value::Float(n.as_f64().unwrap_or_default()),
		},
		Json::String(s) => Value::Text(s),
		Json::Array(items) => Value::Rows(records_from_items(items, settings_key)),
		Json::Object(map) => Value::Rows(records_from_items(
			map.into_iter().map(|(_, v)| v),
			settings_key,
		)),
	}
}

pub(crate) fn json_type_name(value: &Json) -> &'static str {
	match value {
		Json::Null => "null",
		Json::Bool(_) => "boolean",
		Json::Number(_) => "number",
		Json::String(_) => "string",
		Json::Array(_) => "array",
		Json::Object(_) => "object",
	}
}

#[cfg(test)]
mod tests {
	use super::*;
	use crate::settings::RowSpan;
	use crate::testing::capture_events;
	use rstest::rstest;
	use serde_json::json;

	#[rstest]
	fn test_array_document() {
		// Arrange
		let doc = json!([
			{"name": "x", "age": 3},
			{"name": "y", "age": 4},
		]);

		// Act
		let data = TableData::from_json(doc).unwrap();

		// Assert
		assert!(data.settings.is_none());
		assert_eq!(data.records.len(), 2);
		assert_eq!(data.records[1].get("age"), Some(&Value::Int(4)));
	}

	#[rstest]
	fn test_object_document_extracts_table_settings() {
		let doc = json!({
			"tableInfo": {"class": "grid", "rowspan": false},
			"a": {"name": "x"},
		});

		let data = TableData::from_json(doc).unwrap();

		let settings = data.settings.unwrap();
		assert_eq!(settings.attributes.class.as_deref(), Some("grid"));
		assert_eq!(settings.attributes.rowspan, Some(RowSpan::Off));
		assert_eq!(data.records.len(), 1);
	}

	#[rstest]
	fn test_row_settings_are_not_data() {
		let record = Record::from_json(json!({
			"name": "x",
			"tableInfo": {"id": "row-1"},
			"age": 3,
		}))
		.unwrap();

		let keys: Vec<&str> = record.iter().map(|(k, _)| k).collect();
		assert_eq!(keys, vec!["name", "age"]);
		assert_eq!(
			record.settings().unwrap().attributes.id.as_deref(),
			Some("row-1")
		);
	}

	#[rstest]
	fn test_custom_settings_key() {
		let record = Record::from_json_with_key(
			json!({"name": "x", "_meta": {"class": "hot"}, "tableInfo": "data"}),
			"_meta",
		)
		.unwrap();

		assert_eq!(
			record.settings().unwrap().attributes.class.as_deref(),
			Some("hot")
		);
		assert_eq!(record.get("tableInfo"), Some(&Value::Text("data".into())));
	}

	#[rstest]
	fn test_nested_arrays_and_objects_become_rows() {
		// Arrange
		let doc = json!({
			"name": "parent",
			"children": [{"name": "a"}, 17, {"name": "b"}],
		});
		let keyed = json!({
			"name": "parent",
			"children": {"first": {"name": "a"}, "second": {"name": "b"}},
		});

		// Act
		let from_array = Record::from_json(doc).unwrap();
		let from_object = Record::from_json(keyed).unwrap();

		// Assert
		assert_eq!(from_array.sub_rows().unwrap().map(<[Record]>::len), Some(2));
		assert_eq!(from_object.sub_rows().unwrap().map(<[Record]>::len), Some(2));
	}

	#[rstest]
	#[case(json!("text"), "string")]
	#[case(json!(12), "number")]
	#[case(json!(null), "null")]
	fn test_scalar_document_is_invalid(#[case] doc: Json, #[case] found: &str) {
		let result = TableData::from_json(doc);

		assert!(matches!(
			result,
			Err(TableError::InvalidData { found: f }) if f == found
		));
	}

	#[rstest]
	fn test_from_json_str_reports_parse_errors() {
		let result = TableData::from_json_str("[{\"name\": ", DEFAULT_SETTINGS_KEY);

		assert!(matches!(result, Err(TableError::Json(_))));
	}

	#[rstest]
	fn test_large_unsigned_becomes_float() {
		let record = Record::from_json(json!({"big": u64::MAX})).unwrap();

		assert!(matches!(record.get("big"), Some(Value::Float(_))));
	}

	#[rstest]
	fn test_non_object_elements_are_skipped_and_logged() {
		// Arrange
		let (log, _guard) = capture_events();

		// Act
		let data = TableData::from_json(json!([{"a": 1}, 7, "x"])).unwrap();

		// Assert
		assert_eq!(data.records.len(), 1);
		let skipped = log
			.events()
			.iter()
			.filter(|e| e.message == "skipping non-object element where a record was expected")
			.count();
		assert_eq!(skipped, 2);
	}
}
