//! Rendering of one record and the records nested beneath it

use std::borrow::Cow;

use crate::columns::infer_keys;
use crate::counter::count_rows;
use crate::error::InputShapeError;
use crate::model::Record;
use crate::model::Value;
use crate::projection::project;
use crate::settings::Attributes;
use crate::settings::RowSpan;

use super::markup::Markup;

const ROW_LEVEL: usize = 1;
const CELL_LEVEL: usize = 2;

/// Writes a record's row, then the rows of its nested records.
///
/// For each row:
///
/// 1. The row's `rowspan` setting, when present, replaces the table policy
///    for that row only.
/// 2. The inherited keys go through the row's key rule. An empty result
///    falls back to the record's own scalar fields.
/// 3. One `<td>` is written per key with a scalar value. When the record has
///    nested records, a cell spans them if its own setting is `Auto`, or if
///    it has no rowspan setting and the policy is enabled. The span is the
///    policy's fixed value, else the number of rows the record produces.
///    Spanned keys are not passed on to the nested records.
/// 4. Nested records render in order with the remaining keys.
#[derive(Debug, Clone, Copy)]
pub(crate) struct RowRenderer {
	policy: RowSpan,
	max_depth: usize,
}

impl RowRenderer {
	/// Creates a renderer using `policy` for rows without their own setting
	pub(crate) fn new(policy: RowSpan, max_depth: usize) -> Self {
		Self { policy, max_depth }
	}

	/// Renders a top-level record with the table's column keys
	pub(crate) fn render(
		&self,
		record: &Record,
		inherited: &[String],
		out: &mut Markup,
	) -> Result<(), InputShapeError> {
		self.render_at(record, inherited, 0, out)
	}

	fn render_at(
		&self,
		record: &Record,
		inherited: &[String],
		depth: usize,
		out: &mut Markup,
	) -> Result<(), InputShapeError> {
		if depth > self.max_depth {
			return Err(InputShapeError::TooDeep {
				limit: self.max_depth,
			});
		}
		let children = record.sub_rows()?;

		let settings = record.settings();
		let policy = settings
			.and_then(|s| s.attributes.rowspan)
			.unwrap_or(self.policy);
		let row_attrs = settings
			.map(|s| Attributes {
				rowspan: None,
				..s.attributes.clone()
			})
			.unwrap_or_default();

		let projected = project(inherited, settings.and_then(|s| s.keys.as_ref()));
		let keys: Cow<'_, [String]> = if projected.is_empty() {
			Cow::Owned(infer_keys(record))
		} else {
			projected
		};

		out.push(ROW_LEVEL, format!("<tr{}>", row_attrs.to_markup()));

		let mut span = None;
		let mut passed_on = vec![true; keys.len()];
		let mut cells = 0;
		for (position, key) in keys.iter().enumerate() {
			let Some(text) = record.get(key).and_then(Value::cell_text) else {
				tracing::trace!(depth, key = key.as_str(), "no cell for key");
				continue;
			};

			let mut cell = settings
				.and_then(|s| s.cells.get(key))
				.cloned()
				.unwrap_or_default();
			let spans = match cell.rowspan {
				Some(RowSpan::Auto) => true,
				None => policy.is_enabled(),
				Some(_) => false,
			};
			if children.is_some() && spans {
				let rows = *span.get_or_insert_with(|| auto_span(policy, record));
				cell.rowspan = Some(RowSpan::Fixed(rows));
				passed_on[position] = false;
			}

			out.push(CELL_LEVEL, format!("<td{}>{}</td>", cell.to_markup(), text));
			cells += 1;
		}

		out.push(ROW_LEVEL, "</tr>");

		let Some(children) = children else {
			tracing::trace!(depth, cells, "rendered leaf row");
			return Ok(());
		};
		tracing::trace!(depth, cells, children = children.len(), "rendered parent row");

		let remaining: Vec<String> = keys
			.iter()
			.zip(passed_on)
			.filter_map(|(key, kept)| kept.then(|| key.clone()))
			.collect();
		for child in children {
			self.render_at(child, &remaining, depth + 1, out)?;
		}
		Ok(())
	}
}

/// Span for automatically spanned cells of `record`
fn auto_span(policy: RowSpan, record: &Record) -> u32 {
	match policy.fixed() {
		Some(rows) if rows > 0 => rows,
		_ => u32::try_from(count_rows(record)).unwrap_or(u32::MAX),
	}
}

#[cfg(test)]
mod tests {
	use super::*;
	use crate::settings::KeyRule;
	use crate::settings::RowSettings;
	use rstest::rstest;

	fn render(record: &Record, policy: RowSpan, keys: &[&str]) -> Vec<String> {
		let keys: Vec<String> = keys.iter().map(|k| k.to_string()).collect();
		let mut out = Markup::new("", true);
		RowRenderer::new(policy, 16)
			.render(record, &keys, &mut out)
			.unwrap();
		out.fragments().iter().map(|f| f.text.clone()).collect()
	}

	fn leaf(name: &str) -> Record {
		Record::new().set("name", name)
	}

	#[rstest]
	fn test_leaf_row_has_no_spans() {
		let lines = render(&leaf("x").set("age", 3), RowSpan::Auto, &[]);

		assert_eq!(lines, vec!["<tr>", "<td>x</td>", "<td>3</td>", "</tr>"]);
	}

	#[rstest]
	fn test_parent_cells_span_all_rows() {
		// Arrange
		let record = leaf("p")
			.set("total", 9)
			.set("items", vec![leaf("a"), leaf("b"), leaf("c")]);

		// Act
		let lines = render(&record, RowSpan::Auto, &[]);

		// Assert
		assert_eq!(
			lines,
			vec![
				"<tr>",
				"<td rowspan='4'>p</td>",
				"<td rowspan='4'>9</td>",
				"</tr>",
				"<tr>",
				"<td>a</td>",
				"</tr>",
				"<tr>",
				"<td>b</td>",
				"</tr>",
				"<tr>",
				"<td>c</td>",
				"</tr>",
			]
		);
	}

	#[rstest]
	fn test_spanned_keys_are_not_inherited() {
		// Arrange: the table lists both columns; children have only "sku"
		let record = Record::new()
			.set("order", 1)
			.set("items", vec![Record::new().set("sku", "A").set("order", 99)]);

		// Act
		let lines = render(&record, RowSpan::Auto, &["order", "sku"]);

		// Assert
		assert_eq!(
			lines,
			vec![
				"<tr>",
				"<td rowspan='2'>1</td>",
				"</tr>",
				"<tr>",
				"<td>A</td>",
				"</tr>",
			]
		);
	}

	#[rstest]
	fn test_policy_off_passes_keys_down() {
		let record = Record::new()
			.set("order", 1)
			.set("items", vec![Record::new().set("order", 2)]);

		let lines = render(&record, RowSpan::Off, &["order"]);

		assert_eq!(
			lines,
			vec!["<tr>", "<td>1</td>", "</tr>", "<tr>", "<td>2</td>", "</tr>"]
		);
	}

	#[rstest]
	fn test_fixed_policy_sets_span() {
		let record = leaf("p").set("items", vec![leaf("a")]);

		let lines = render(&record, RowSpan::Fixed(7), &[]);

		assert_eq!(lines[1], "<td rowspan='7'>p</td>");
	}

	#[rstest]
	fn test_cell_auto_overrides_disabled_policy() {
		// Arrange
		let record = Record::new()
			.set("a", 1)
			.set("b", 2)
			.set("items", vec![Record::new().set("b", 3)])
			.with_settings(
				RowSettings::new()
					.rowspan(RowSpan::Off)
					.cell("a", Attributes::new().rowspan(RowSpan::Auto)),
			);

		// Act
		let lines = render(&record, RowSpan::Auto, &["a", "b"]);

		// Assert
		assert_eq!(
			lines,
			vec![
				"<tr>",
				"<td rowspan='2'>1</td>",
				"<td>2</td>",
				"</tr>",
				"<tr>",
				"<td>3</td>",
				"</tr>",
			]
		);
	}

	#[rstest]
	fn test_cell_off_keeps_key_for_children() {
		// Arrange
		let record = Record::new()
			.set("a", 1)
			.set("b", 2)
			.set("items", vec![Record::new().set("a", 3).set("b", 4)])
			.with_settings(RowSettings::new().cell("a", Attributes::new().rowspan(RowSpan::Off)));

		// Act
		let lines = render(&record, RowSpan::Auto, &["a", "b"]);

		// Assert
		assert_eq!(
			lines,
			vec![
				"<tr>",
				"<td>1</td>",
				"<td rowspan='2'>2</td>",
				"</tr>",
				"<tr>",
				"<td>3</td>",
				"</tr>",
			]
		);
	}

	#[rstest]
	fn test_zero_fixed_policy_falls_back_to_row_count() {
		// Arrange
		let record = Record::new()
			.set("a", 1)
			.set("b", 2)
			.set(
				"items",
				vec![Record::new().set("b", 3), Record::new().set("b", 4)],
			)
			.with_settings(RowSettings::new().cell("a", Attributes::new().rowspan(RowSpan::Auto)));

		// Act
		let lines = render(&record, RowSpan::Fixed(0), &["a", "b"]);

		// Assert
		assert_eq!(
			lines,
			vec![
				"<tr>",
				"<td rowspan='3'>1</td>",
				"<td>2</td>",
				"</tr>",
				"<tr>",
				"<td>3</td>",
				"</tr>",
				"<tr>",
				"<td>4</td>",
				"</tr>",
			]
		);
	}

	#[rstest]
	fn test_explicit_cell_span_is_kept_and_inherited() {
		let record = Record::new()
			.set("a", 1)
			.set("items", vec![Record::new().set("a", 2)])
			.with_settings(RowSettings::new().cell("a", Attributes::new().rowspan(RowSpan::Fixed(5))));

		let lines = render(&record, RowSpan::Auto, &["a"]);

		assert_eq!(lines[1], "<td rowspan='5'>1</td>");
		assert_eq!(lines[4], "<td>2</td>");
	}

	#[rstest]
	fn test_row_attributes_exclude_rowspan() {
		let record = leaf("x").with_settings(
			RowSettings::new()
				.attributes(Attributes::new().class("hot").rowspan(RowSpan::Fixed(3))),
		);

		let lines = render(&record, RowSpan::Auto, &[]);

		assert_eq!(lines[0], "<tr class='hot'>");
	}

	#[rstest]
	fn test_row_key_rule_applies_to_descendants() {
		// Arrange
		let child = Record::new().set("name", "c").set("qty", 2).set("note", "n");
		let record = Record::new()
			.set("name", "p")
			.set("children", vec![child])
			.with_settings(
				RowSettings::new()
					.rowspan(RowSpan::Off)
					.keys(KeyRule::new().add(["qty"])),
			);

		// Act
		let lines = render(&record, RowSpan::Auto, &["name"]);

		// Assert
		assert_eq!(
			lines,
			vec![
				"<tr>",
				"<td>p</td>",
				"</tr>",
				"<tr>",
				"<td>c</td>",
				"<td>2</td>",
				"</tr>",
			]
		);
	}

	#[rstest]
	fn test_missing_values_emit_no_cell() {
		let lines = render(&leaf("x"), RowSpan::Auto, &["absent", "name"]);

		assert_eq!(lines, vec!["<tr>", "<td>x</td>", "</tr>"]);
	}

	#[rstest]
	fn test_record_without_scalars_emits_empty_row() {
		let lines = render(&Record::new(), RowSpan::Auto, &[]);

		assert_eq!(lines, vec!["<tr>", "</tr>"]);
	}

	#[rstest]
	fn test_depth_limit() {
		// Arrange
		let mut record = leaf("bottom");
		for _ in 0..3 {
			record = leaf("up").set("child", vec![record]);
		}
		let mut out = Markup::default();

		// Act
		let result = RowRenderer::new(RowSpan::Auto, 2).render(&record, &[], &mut out);

		// Assert
		assert_eq!(result, Err(InputShapeError::TooDeep { limit: 2 }));
	}

	#[rstest]
	fn test_two_groups_are_rejected() {
		let record = leaf("p")
			.set("a", vec![leaf("x")])
			.set("b", vec![leaf("y")]);
		let mut out = Markup::default();

		let result = RowRenderer::new(RowSpan::Auto, 4).render(&record, &[], &mut out);

		assert!(matches!(
			result,
			Err(InputShapeError::AmbiguousNesting { .. })
		));
	}
}
