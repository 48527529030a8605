//! Field values held by a [`Record`](super::Record)

use std::borrow::Cow;
use std::fmt;

use super::Record;

/// A field value: either cell content or a nested group of sub-rows.
///
/// # Example
///
/// ```
/// use spantable_core::model::Value;
///
/// let name = Value::from("Alice");
/// let age = Value::from(42);
/// assert_eq!(name.cell_text().as_deref(), Some("Alice"));
/// assert_eq!(age.cell_text().as_deref(), Some("42"));
/// ```
#[derive(Debug, Clone, PartialEq, Default)]
pub enum Value {
	/// Null/empty value, rendered as an empty cell
	#[default]
	Null,
	/// Boolean value
	Bool(bool),
	/// Integer value
	Int(i64),
	/// Floating point value
	Float(f64),
	/// Text value, written verbatim
	Text(String),
	/// Nested records rendered as rows beneath the owning record
	Rows(Vec<Record>),
}

impl Value {
	/// Returns `true` if this value is a sub-row group
	pub fn is_rows(&self) -> bool {
		matches!(self, Value::Rows(_))
	}

	/// Returns the nested records if this value is a sub-row group
	pub fn as_rows(&self) -> Option<&[Record]> {
		match self {
			Value::Rows(rows) => Some(rows),
			_ => None,
		}
	}

	/// Returns the text written into a cell for this value.
	///
	/// Sub-row groups are not cell content and yield `None`.
	pub fn cell_text(&self) -> Option<Cow<'_, str>> {
		match self {
			Value::Null => Some(Cow::Borrowed("")),
			Value::Bool(b) => Some(Cow::Owned(b.to_string())),
			Value::Int(n) => Some(Cow::Owned(n.to_string())),
			Value::Float(n) => Some(Cow::Owned(n.to_string())),
			Value::Text(s) => Some(Cow::Borrowed(s)),
			Value::Rows(_) => None,
		}
	}

	/// Returns the type name of this value
	pub fn type_name(&self) -> &'static str {
		match self {
			Value::Null => "null",
			Value::Bool(_) => "bool",
			Value::Int(_) => "int",
			Value::Float(_) => "float",
			Value::Text(_) => "text",
			Value::Rows(_) => "rows",
		}
	}
}

impl fmt::Display for Value {
	fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
		match self.cell_text() {
			Some(text) => f.write_str(&text),
			None => write!(f, "[{} rows]", self.as_rows().map_or(0, <[Record]>::len)),
		}
	}
}

impl From<bool> for Value {
	fn from(v: bool) -> Self {
		Value::Bool(v)
	}
}

impl From<i32> for Value {
	fn from(v: i32) -> Self {
		Value::Int(i64::from(v))
	}
}

impl From<i64> for Value {
	fn from(v: i64) -> Self {
		Value::Int(v)
	}
}

impl From<u32> for Value {
	fn from(v: u32) -> Self {
		Value::Int(i64::from(v))
	}
}

impl From<f64> for Value {
	fn from(v: f64) -> Self {
		Value::Float(v)
	}
}

impl From<String> for Value {
	fn from(v: String) -> Self {
		Value::Text(v)
	}
}

impl From<&str> for Value {
	fn from(v: &str) -> Self {
		Value::Text(v.to_string())
	}
}

impl From<Vec<Record>> for Value {
	fn from(v: Vec<Record>) -> Self {
		Value::Rows(v)
	}
}

impl<T: Into<Value>> From<Option<T>> for Value {
	fn from(v: Option<T>) -> Self {
		match v {
			Some(inner) => inner.into(),
			None => Value::Null,
		}
	}
}

#[cfg(test)]
mod tests {
	use super::*;
	use rstest::rstest;

	#[rstest]
	#[case(Value::Null, "")]
	#[case(Value::Bool(true), "true")]
	#[case(Value::Int(-7), "-7")]
	#[case(Value::Float(2.5), "2.5")]
	#[case(Value::Text("<b>x</b>".to_string()), "<b>x</b>")]
	fn test_cell_text_scalars(#[case] value: Value, #[case] expected: &str) {
		assert_eq!(value.cell_text().as_deref(), Some(expected));
	}

	#[rstest]
	fn test_rows_have_no_cell_text() {
		let value = Value::Rows(vec![Record::new(), Record::new()]);

		assert!(value.cell_text().is_none());
		assert!(value.is_rows());
		assert_eq!(value.to_string(), "[2 rows]");
	}

	#[rstest]
	fn test_option_conversion() {
		assert_eq!(Value::from(None::<i64>), Value::Null);
		assert_eq!(Value::from(Some("x")), Value::Text("x".to_string()));
	}
}
