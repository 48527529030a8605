//! Column keys and header titles.
//!
//! Keys and titles are read independently from the same column list: a
//! column may have a key without a title or a title without a key, so the
//! two sequences do not line up position by position.

use crate::model::Record;
use crate::settings::ColumnSpec;

/// Returns the non-empty column keys in order
pub fn column_keys(cols: &[ColumnSpec]) -> Vec<String> {
	cols.iter()
		.filter_map(|col| col.key.as_deref())
		.filter(|key| !key.is_empty())
		.map(str::to_string)
		.collect()
}

/// Returns the non-empty column titles in order
pub fn column_titles(cols: &[ColumnSpec]) -> Vec<String> {
	cols.iter()
		.filter_map(|col| col.title.as_deref())
		.filter(|title| !title.is_empty())
		.map(str::to_string)
		.collect()
}

/// Returns the names of the record's scalar fields in insertion order.
///
/// Fields holding nested records are not columns. Row settings are kept
/// outside the fields and are never included.
///
/// # Example
///
/// ```
/// use spantable_core::columns::infer_keys;
/// use spantable_core::model::Record;
///
/// let record = Record::new()
///     .set("name", "x")
///     .set("children", vec![Record::new().set("name", "y")])
///     .set("age", 3);
///
/// assert_eq!(infer_keys(&record), vec!["name", "age"]);
/// ```
pub fn infer_keys(record: &Record) -> Vec<String> {
	record
		.iter()
		.filter(|(_, value)| !value.is_rows())
		.map(|(field, _)| field.to_string())
		.collect()
}
