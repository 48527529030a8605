//! Ordered record of field values

use indexmap::IndexMap;

use super::Value;
use crate::error::InputShapeError;
use crate::settings::RowSettings;

/// One logical row of table data.
///
/// Fields keep their insertion order, which is the order columns are
/// inferred in when no column list is given. Row and cell overrides live in
/// a separate settings slot so they can never be mistaken for data.
///
/// # Example
///
/// ```
/// use spantable_core::model::Record;
///
/// let record = Record::new()
///     .set("name", "Contoso")
///     .set("employees", 120);
///
/// assert_eq!(record.get("name").and_then(|v| v.cell_text()).as_deref(), Some("Contoso"));
/// assert_eq!(record.len(), 2);
/// ```
#[derive(Debug, Clone, PartialEq, Default)]
pub struct Record {
	fields: IndexMap<String, Value>,
	settings: Option<RowSettings>,
}

impl Record {
	/// Creates an empty record
	pub fn new() -> Self {
		Self::default()
	}

	/// Sets a field value (builder pattern)
	pub fn set(mut self, field: impl Into<String>, value: impl Into<Value>) -> Self {
		self.fields.insert(field.into(), value.into());
		self
	}

	/// Attaches row settings (builder pattern)
	pub fn with_settings(mut self, settings: RowSettings) -> Self {
		self.settings = Some(settings);
		self
	}

	/// Inserts a field value, keeping the original position if the field exists
	pub fn insert(&mut self, field: impl Into<String>, value: impl Into<Value>) {
		self.fields.insert(field.into(), value.into());
	}

	/// Removes a field and returns its value
	pub fn remove(&mut self, field: &str) -> Option<Value> {
		self.fields.shift_remove(field)
	}

	/// Replaces the row settings
	pub fn set_settings(&mut self, settings: Option<RowSettings>) {
		self.settings = settings;
	}

	/// Returns a reference to the field value, if it exists
	pub fn get(&self, field: &str) -> Option<&Value> {
		self.fields.get(field)
	}

	/// Returns `true` if the record contains the given field
	pub fn contains(&self, field: &str) -> bool {
		self.fields.contains_key(field)
	}

	/// Returns the number of data fields
	pub fn len(&self) -> usize {
		self.fields.len()
	}

	/// Returns `true` if the record has no data fields
	pub fn is_empty(&self) -> bool {
		self.fields.is_empty()
	}

	/// Returns the fields in insertion order
	pub fn fields(&self) -> &IndexMap<String, Value> {
		&self.fields
	}

	/// Iterates over `(field, value)` pairs in insertion order
	pub fn iter(&self) -> impl Iterator<Item = (&str, &Value)> {
		self.fields.iter().map(|(k, v)| (k.as_str(), v))
	}

	/// Returns the row settings, if any
	pub fn settings(&self) -> Option<&RowSettings> {
		self.settings.as_ref()
	}

	/// Iterates over every sub-row group held by this record
	pub fn sub_row_groups(&self) -> impl Iterator<Item = &[Record]> {
		self.fields.values().filter_map(Value::as_rows)
	}

	/// Returns the records nested beneath this one.
	///
	/// `Ok(None)` means the record is a leaf: it has no sub-row group, or the
	/// group is empty. More than one field holding nested records is an error.
	pub fn sub_rows(&self) -> Result<Option<&[Record]>, InputShapeError> {
		let nested: Vec<(&String, &Value)> = self
			.fields
			.iter()
			.filter(|(_, value)| value.is_rows())
			.collect();

		match nested.len() {
			0 => Ok(None),
			1 => Ok(nested[0].1.as_rows().filter(|rows| !rows.is_empty())),
			_ => Err(InputShapeError::AmbiguousNesting {
				fields: nested.into_iter().map(|(field, _)| field.clone()).collect(),
			}),
		}
	}
}

impl<K, V> FromIterator<(K, V)> for Record
where
	K: Into<String>,
	V: Into<Value>,
{
	fn from_iter<I: IntoIterator<Item = (K, V)>>(iter: I) -> Self {
		Self {
			fields: iter
				.into_iter()
				.map(|(k, v)| (k.into(), v.into()))
				.collect(),
			settings: None,
		}
	}
}
