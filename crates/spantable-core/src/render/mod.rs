//! Table rendering
//!
//! [`TableRenderer`] resolves the table settings once and then hands every
//! top-level record to the row renderer, which walks nested records depth
//! first. Output is collected as [`Markup`] and laid out by its `Display`
//! implementation.

mod markup;
mod row;

pub use markup::Fragment;
pub use markup::Markup;

use crate::columns::column_keys;
use crate::columns::column_titles;
use crate::error::Result;
use crate::model::Record;
use crate::model::TableData;
use crate::options::RenderOptions;
use crate::settings::Attributes;
use crate::settings::RowSpan;
use crate::settings::TableSettings;

use row::RowRenderer;

const TABLE_LEVEL: usize = 0;
const ROW_LEVEL: usize = 1;
const CELL_LEVEL: usize = 2;

#[cfg_attr(doc, aquamarine::aquamarine)]
/// Renders records into an HTML table.
///
/// # Flow
///
/// ```mermaid
/// flowchart TD
///     A[Embedded settings] --> M[Merge, explicit wins]
///     B[Explicit settings] --> M
///     M --> C[Column keys and titles]
///     M --> P[Default rowspan policy]
///     C --> R[Row renderer]
///     P --> R
///     R -->|per record| K[Project keys]
///     K --> S[Write cells, freeze spans]
///     S -->|remaining keys| R
/// ```
///
/// # Example
///
/// ```
/// use spantable_core::model::Record;
/// use spantable_core::options::RenderOptions;
/// use spantable_core::render::TableRenderer;
///
/// let records = vec![
///     Record::new().set("name", "x").set("age", 3),
///     Record::new().set("name", "y").set("age", 4),
/// ];
///
/// let markup = TableRenderer::new(RenderOptions::new().minify())
///     .render(&records, None)
///     .unwrap();
///
/// assert_eq!(
///     markup.to_string(),
///     "<table><tr><td>x</td><td>3</td></tr><tr><td>y</td><td>4</td></tr></table>"
/// );
/// ```
#[derive(Debug, Clone, Default)]
pub struct TableRenderer {
	options: RenderOptions,
}

impl TableRenderer {
	/// Creates a renderer with the given options
	pub fn new(options: RenderOptions) -> Self {
		Self { options }
	}

	/// Returns the render options
	pub fn options(&self) -> &RenderOptions {
		&self.options
	}

	/// Renders records with optional table settings.
	///
	/// No records renders nothing.
	pub fn render(&self, records: &[Record], settings: Option<&TableSettings>) -> Result<Markup> {
		if records.is_empty() {
			return Ok(self.empty());
		}
		self.render_table(records, None, settings)
	}

	/// Renders table data, layering `settings` over the settings embedded in
	/// the data.
	///
	/// Data with neither records nor embedded settings renders nothing.
	pub fn render_data(&self, data: &TableData, settings: Option<&TableSettings>) -> Result<Markup> {
		if data.is_empty() {
			return Ok(self.empty());
		}
		self.render_table(&data.records, data.settings.as_ref(), settings)
	}

	/// Renders a JSON document, reading embedded settings from the
	/// configured settings key.
	pub fn render_json(
		&self,
		value: serde_json::Value,
		settings: Option<&TableSettings>,
	) -> Result<Markup> {
		let data = TableData::from_json_with_key(value, &self.options.settings_key)?;
		self.render_data(&data, settings)
	}

	/// Parses JSON text and renders it like [`TableRenderer::render_json`]
	pub fn render_json_str(
		&self,
		text: &str,
		settings: Option<&TableSettings>,
	) -> Result<Markup> {
		let data = TableData::from_json_str(text, &self.options.settings_key)?;
		self.render_data(&data, settings)
	}

	fn empty(&self) -> Markup {
		Markup::new(self.options.indent.as_str(), self.options.minify)
	}

	fn render_table(
		&self,
		records: &[Record],
		embedded: Option<&TableSettings>,
		explicit: Option<&TableSettings>,
	) -> Result<Markup> {
		let settings = TableSettings::resolve(embedded, explicit);
		let policy = settings.attributes.rowspan.unwrap_or(RowSpan::Auto);
		let table_attrs = Attributes {
			rowspan: None,
			..settings.attributes.clone()
		};
		let (keys, titles) = settings
			.cols
			.as_deref()
			.map(|cols| (column_keys(cols), column_titles(cols)))
			.unwrap_or_default();

		tracing::debug!(
			records = records.len(),
			columns = keys.len(),
			?policy,
			"rendering table"
		);

		let mut out = self.empty();
		out.push(TABLE_LEVEL, format!("<table{}>", table_attrs.to_markup()));

		if !titles.is_empty() {
			out.push(ROW_LEVEL, "<tr>");
			for title in &titles {
				out.push(CELL_LEVEL, format!("<th>{title}</th>"));
			}
			out.push(ROW_LEVEL, "</tr>");
		}

		let rows = RowRenderer::new(policy, self.options.max_depth);
		for record in records {
			rows.render(record, &keys, &mut out)?;
		}

		out.push(TABLE_LEVEL, "</table>");
		Ok(out)
	}
}

/// Renders records with default options.
///
/// # Example
///
/// ```
/// use spantable_core::model::Record;
/// use spantable_core::render::render;
///
/// let parent = Record::new()
///     .set("name", "p")
///     .set("children", vec![Record::new().set("name", "c")]);
///
/// let markup = render(&[parent], None).unwrap();
/// assert!(markup.to_string().contains("<td rowspan='2'>p</td>"));
/// ```
pub fn render(records: &[Record], settings: Option<&TableSettings>) -> Result<Markup> {
	TableRenderer::default().render(records, settings)
}

/// Renders table data with default options.
pub fn render_data(data: &TableData, settings: Option<&TableSettings>) -> Result<Markup> {
	TableRenderer::default().render_data(data, settings)
}
