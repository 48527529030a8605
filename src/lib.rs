//! # spantable
//!
//! Render nested records into HTML tables with automatic rowspans.
//!
//! A record that holds a group of nested records becomes one row followed by
//! the rows of its children; the parent's cells span all of them. Table, row
//! and cell settings control attributes, spanning and which fields become
//! columns at each level.
//!
//! ## Quick Example
//!
//! ```rust
//! use spantable::prelude::*;
//!
//! let data = TableData::from_json(serde_json::json!([
//!     {"team": "core", "members": [{"name": "a"}, {"name": "b"}]},
//! ]))
//! .unwrap();
//!
//! let html = render_data(&data, None).unwrap().to_string();
//! assert!(html.contains("<td rowspan='3'>core</td>"));
//! ```
//!
//! See [`spantable_core`] for the rendering model.

#![warn(missing_docs)]

pub use spantable_core::*;

/// Common imports for rendering tables
pub mod prelude {
	pub use crate::{
		Attributes, ColumnSpec, KeyRule, Markup, Record, RenderOptions, RowSettings, RowSpan,
		TableData, TableError, TableRenderer, TableSettings, Value, render, render_data,
	};
}
