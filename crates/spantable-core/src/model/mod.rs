//! Table data model
//!
//! A table is a list of [`Record`]s. A record maps field names to
//! [`Value`]s; at most one field may hold a nested group of records, which
//! render as additional rows beneath their parent.

mod json;
mod record;
mod value;

pub use record::*;
pub use value::*;

pub(crate) use json::json_type_name;

use crate::settings::TableSettings;

/// Records together with the table settings embedded alongside them
#[derive(Debug, Clone, PartialEq, Default)]
pub struct TableData {
	/// Table settings carried by the data itself
	pub settings: Option<TableSettings>,
	/// Top-level records
	pub records: Vec<Record>,
}

impl TableData {
	/// Creates table data from records with no embedded settings
	pub fn new(records: Vec<Record>) -> Self {
		Self {
			settings: None,
			records,
		}
	}

	/// Embeds table settings (builder pattern)
	pub fn with_settings(mut self, settings: TableSettings) -> Self {
		self.settings = Some(settings);
		self
	}

	/// Returns `true` when there is nothing to render: no records and no
	/// embedded settings
	pub fn is_empty(&self) -> bool {
		self.records.is_empty() && self.settings.is_none()
	}
}

impl From<Vec<Record>> for TableData {
	fn from(records: Vec<Record>) -> Self {
		Self::new(records)
	}
}
