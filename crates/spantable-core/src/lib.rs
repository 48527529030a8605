//! Nested-record table rendering for spantable
//!
//! This crate renders a tree of records into an HTML table. A record that
//! holds a group of nested records is written as one row followed by the
//! rows of its children, and the parent's cells receive a `rowspan` that
//! covers every row beneath them.
//!
//! # Features
//!
//! - **Automatic rowspans**: Parent cells span all rows produced by their
//!   nested records, computed once per row
//! - **Column projection**: Each row may delete, add or rename the column keys
//!   it passes on to its descendants
//! - **Overrides**: Table, row and cell attributes (`colspan`, `rowspan`, `id`,
//!   `class`, `style`, free-form args)
//! - **JSON input**: Build records and settings from `serde_json::Value`
//!   documents, with settings under a reserved member (`tableInfo`)
//!
//! # Architecture
//!
//! ```mermaid
//! graph TD
//!     A[TableRenderer] --> B[Settings merge]
//!     A --> C[ColumnKeyResolver]
//!     A --> D[RowRenderer]
//!     D --> E[KeyProjector]
//!     D --> F[SubRowCounter]
//!     D --> G[AttributeSerializer]
//!     D -->|nested records| D
//!     A --> H[Markup]
//! ```
//!
//! # Example
//!
//! ```rust
//! use spantable_core::{render, Record};
//!
//! let order = Record::new()
//!     .set("order", 1001)
//!     .set("items", vec![
//!         Record::new().set("sku", "A-1"),
//!         Record::new().set("sku", "B-2"),
//!     ]);
//!
//! let html = render(&[order], None).unwrap().to_string();
//! assert!(html.contains("<td rowspan='3'>1001</td>"));
//! assert!(html.contains("<td>B-2</td>"));
//! ```

#![warn(missing_docs)]
#![warn(rustdoc::broken_intra_doc_links)]

pub mod attrs;
pub mod columns;
pub mod counter;
pub mod error;
pub mod model;
pub mod options;
pub mod projection;
pub mod render;
pub mod settings;

#[cfg(test)]
mod testing;

// Re-exports for convenience
pub use error::{InputShapeError, Result, TableError};
pub use model::{Record, TableData, Value};
pub use options::RenderOptions;
pub use render::{Markup, TableRenderer, render, render_data};
pub use settings::{Attributes, ColumnSpec, KeyRule, RowSettings, RowSpan, TableSettings};
