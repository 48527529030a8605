//! Table, row and cell settings
//!
//! Settings share one attribute shape at every level ([`Attributes`]) and add
//! level-specific parts: the table carries its column list, a row carries
//! per-cell overrides and a key projection rule.
//!
//! All settings types deserialize leniently: values of the wrong type are
//! dropped (and logged at `debug`) instead of failing, so malformed
//! settings degrade to omitted attributes rather than aborting a render.

mod lenient;
mod merge;

use std::collections::HashMap;

use serde::Deserialize;

/// How a cell spans the rows beneath it.
///
/// `Option<RowSpan>` is used wherever a setting may be left unspecified;
/// `RowSpan::Off` is an explicit "never span".
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum RowSpan {
	/// Explicitly disabled
	Off,
	/// Span every row produced by the owning record
	Auto,
	/// A fixed span
	Fixed(u32),
}

impl RowSpan {
	/// Returns `true` if this policy triggers spanning for cells without
	/// their own rowspan setting
	pub fn is_enabled(self) -> bool {
		!matches!(self, RowSpan::Off | RowSpan::Fixed(0))
	}

	/// Returns the fixed span, if any
	pub fn fixed(self) -> Option<u32> {
		match self {
			RowSpan::Fixed(n) => Some(n),
			_ => None,
		}
	}
}

/// Structural attributes shared by tables, rows and cells.
///
/// # Example
///
/// ```
/// use spantable_core::settings::{Attributes, RowSpan};
///
/// let attrs = Attributes::new().colspan(2).class("total").rowspan(RowSpan::Fixed(3));
/// assert_eq!(attrs.to_markup(), " colspan='2' rowspan='3' class='total'");
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Default, Deserialize)]
#[serde(default)]
pub struct Attributes {
	/// Column span
	#[serde(deserialize_with = "lenient::span")]
	pub colspan: Option<u32>,
	/// Row span, or a spanning directive
	#[serde(deserialize_with = "lenient::row_span")]
	pub rowspan: Option<RowSpan>,
	/// Element id
	#[serde(deserialize_with = "lenient::text")]
	pub id: Option<String>,
	/// CSS classes
	#[serde(deserialize_with = "lenient::text")]
	pub class: Option<String>,
	/// Inline style
	#[serde(deserialize_with = "lenient::text")]
	pub style: Option<String>,
	/// Extra attribute text appended verbatim
	#[serde(deserialize_with = "lenient::text")]
	pub args: Option<String>,
}

impl Attributes {
	/// Creates empty attributes
	pub fn new() -> Self {
		Self::default()
	}

	/// Sets the column span
	pub fn colspan(mut self, colspan: u32) -> Self {
		self.colspan = Some(colspan);
		self
	}

	/// Sets the row span or spanning directive
	pub fn rowspan(mut self, rowspan: RowSpan) -> Self {
		self.rowspan = Some(rowspan);
		self
	}

	/// Sets the element id
	pub fn id(mut self, id: impl Into<String>) -> Self {
		self.id = Some(id.into());
		self
	}

	/// Sets the CSS classes
	pub fn class(mut self, class: impl Into<String>) -> Self {
		self.class = Some(class.into());
		self
	}

	/// Sets the inline style
	pub fn style(mut self, style: impl Into<String>) -> Self {
		self.style = Some(style.into());
		self
	}

	/// Sets extra attribute text
	pub fn args(mut self, args: impl Into<String>) -> Self {
		self.args = Some(args.into());
		self
	}
}

/// One column position: which field it shows and its header text
#[derive(Debug, Clone, PartialEq, Eq, Default, Deserialize)]
#[serde(default)]
pub struct ColumnSpec {
	/// Field rendered in this column
	#[serde(deserialize_with = "lenient::text")]
	pub key: Option<String>,
	/// Header text
	#[serde(deserialize_with = "lenient::text")]
	pub title: Option<String>,
}

impl ColumnSpec {
	/// Creates a column for `key` with a header title
	pub fn new(key: impl Into<String>, title: impl Into<String>) -> Self {
		Self {
			key: Some(key.into()),
			title: Some(title.into()),
		}
	}

	/// Creates a column for `key` without header text
	pub fn untitled(key: impl Into<String>) -> Self {
		Self {
			key: Some(key.into()),
			title: None,
		}
	}
}

/// Which inherited keys a [`KeyRule`] removes
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Deletion {
	/// Drop every inherited key
	All,
	/// Drop the first occurrence of each listed key
	Keys(Vec<String>),
}

impl Default for Deletion {
	fn default() -> Self {
		Deletion::Keys(Vec::new())
	}
}

/// Renames the first occurrence of `src` to `dst`
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Forward {
	/// Key to replace
	pub src: String,
	/// Replacement key
	pub dst: String,
}

/// Column-key projection for one row and, unless they bring their own, its
/// descendants. Applied as delete, then add, then forward.
///
/// # Example
///
/// ```
/// use spantable_core::settings::KeyRule;
///
/// let rule = KeyRule::new().delete(["price"]).add(["total"]).forward("qty", "count");
/// assert_eq!(rule.add, vec!["total".to_string()]);
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct KeyRule {
	/// Keys removed first
	pub delete: Deletion,
	/// Keys appended after deletion
	pub add: Vec<String>,
	/// Renames applied last
	pub forwarding: Vec<Forward>,
}

impl KeyRule {
	/// Creates a rule that changes nothing
	pub fn new() -> Self {
		Self::default()
	}

	/// Deletes every inherited key
	pub fn delete_all(mut self) -> Self {
		self.delete = Deletion::All;
		self
	}

	/// Deletes the first occurrence of each key
	pub fn delete<I, S>(mut self, keys: I) -> Self
	where
		I: IntoIterator<Item = S>,
		S: Into<String>,
	{
		let keys = keys.into_iter().map(Into::into);
		match &mut self.delete {
			Deletion::All => {}
			Deletion::Keys(existing) => existing.extend(keys),
		}
		self
	}

	/// Appends keys
	pub fn add<I, S>(mut self, keys: I) -> Self
	where
		I: IntoIterator<Item = S>,
		S: Into<String>,
	{
		self.add.extend(keys.into_iter().map(Into::into));
		self
	}

	/// Renames the first occurrence of `src` to `dst`
	pub fn forward(mut self, src: impl Into<String>, dst: impl Into<String>) -> Self {
		self.forwarding.push(Forward {
			src: src.into(),
			dst: dst.into(),
		});
		self
	}
}

/// Overrides attached to a single record
#[derive(Debug, Clone, PartialEq, Eq, Default, Deserialize)]
pub struct RowSettings {
	/// Row attributes; `rowspan` here overrides the table's spanning policy
	/// for this row and is never written onto the row itself
	#[serde(flatten)]
	pub attributes: Attributes,
	/// Per-cell attributes keyed by column key
	#[serde(default, deserialize_with = "lenient::cells")]
	pub cells: HashMap<String, Attributes>,
	/// Column-key projection for this row and its descendants
	#[serde(default, deserialize_with = "lenient::key_rule")]
	pub keys: Option<KeyRule>,
}

impl RowSettings {
	/// Creates empty row settings
	pub fn new() -> Self {
		Self::default()
	}

	/// Sets the row attributes
	pub fn attributes(mut self, attributes: Attributes) -> Self {
		self.attributes = attributes;
		self
	}

	/// Overrides the spanning policy for this row
	pub fn rowspan(mut self, rowspan: RowSpan) -> Self {
		self.attributes.rowspan = Some(rowspan);
		self
	}

	/// Sets the attributes of the cell in column `key`
	pub fn cell(mut self, key: impl Into<String>, attributes: Attributes) -> Self {
		self.cells.insert(key.into(), attributes);
		self
	}

	/// Sets the key projection rule
	pub fn keys(mut self, rule: KeyRule) -> Self {
		self.keys = Some(rule);
		self
	}

	/// Reads row settings from JSON, falling back to defaults when the value
	/// is not an object
	pub fn from_json(value: serde_json::Value) -> Self {
		serde_json::from_value(value).unwrap_or_else(|error| {
			tracing::debug!(%error, "ignoring malformed row settings");
			Self::default()
		})
	}
}

/// Table-wide settings
#[derive(Debug, Clone, PartialEq, Eq, Default, Deserialize)]
pub struct TableSettings {
	/// Table attributes; `rowspan` here is the default spanning policy for
	/// every row and is never written onto the table itself
	#[serde(flatten)]
	pub attributes: Attributes,
	/// Column list; when absent, columns are inferred from each row
	#[serde(default, deserialize_with = "lenient::columns")]
	pub cols: Option<Vec<ColumnSpec>>,
}

impl TableSettings {
	/// Creates empty table settings
	pub fn new() -> Self {
		Self::default()
	}

	/// Sets the table attributes
	pub fn attributes(mut self, attributes: Attributes) -> Self {
		self.attributes = attributes;
		self
	}

	/// Sets the default spanning policy
	pub fn rowspan(mut self, rowspan: RowSpan) -> Self {
		self.attributes.rowspan = Some(rowspan);
		self
	}

	/// Sets the column list
	pub fn columns(mut self, cols: Vec<ColumnSpec>) -> Self {
		self.cols = Some(cols);
		self
	}

	/// Reads table settings from JSON, falling back to defaults when the
	/// value is not an object
	pub fn from_json(value: serde_json::Value) -> Self {
		serde_json::from_value(value).unwrap_or_else(|error| {
			tracing::debug!(%error, "ignoring malformed table settings");
			Self::default()
		})
	}
}
