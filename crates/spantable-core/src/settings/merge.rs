//! Layering of table settings from several sources.
//!
//! An overlay wins field by field. Column lists merge position by position,
//! each column field by field, so an overlay can retitle the second column
//! without restating the first.

use super::Attributes;
use super::ColumnSpec;
use super::TableSettings;

impl Attributes {
	/// Returns these attributes with every field set in `overlay` replaced
	pub fn merged_with(&self, overlay: &Attributes) -> Attributes {
		Attributes {
			colspan: overlay.colspan.or(self.colspan),
			rowspan: overlay.rowspan.or(self.rowspan),
			id: overlay.id.clone().or_else(|| self.id.clone()),
			class: overlay.class.clone().or_else(|| self.class.clone()),
			style: overlay.style.clone().or_else(|| self.style.clone()),
			args: overlay.args.clone().or_else(|| self.args.clone()),
		}
	}
}

impl ColumnSpec {
	/// Returns this column with every field set in `overlay` replaced
	pub fn merged_with(&self, overlay: &ColumnSpec) -> ColumnSpec {
		ColumnSpec {
			key: overlay.key.clone().or_else(|| self.key.clone()),
			title: overlay.title.clone().or_else(|| self.title.clone()),
		}
	}
}

fn merge_columns(base: &[ColumnSpec], overlay: &[ColumnSpec]) -> Vec<ColumnSpec> {
	(0..base.len().max(overlay.len()))
		.map(|i| match (base.get(i), overlay.get(i)) {
			(Some(b), Some(o)) => b.merged_with(o),
			(Some(only), None) | (None, Some(only)) => only.clone(),
			(None, None) => ColumnSpec::default(),
		})
		.collect()
}

impl TableSettings {
	/// Returns these settings with `overlay` layered on top
	pub fn merged_with(&self, overlay: &TableSettings) -> TableSettings {
		let cols = match (&self.cols, &overlay.cols) {
			(Some(base), Some(top)) => Some(merge_columns(base, top)),
			(base, top) => top.clone().or_else(|| base.clone()),
		};
		TableSettings {
			attributes: self.attributes.merged_with(&overlay.attributes),
			cols,
		}
	}

	/// Combines settings embedded in the data with settings passed
	/// explicitly; explicit settings take precedence
	pub fn resolve(embedded: Option<&TableSettings>, explicit: Option<&TableSettings>) -> TableSettings {
		match (embedded, explicit) {
			(Some(embedded), Some(explicit)) => embedded.merged_with(explicit),
			(Some(only), None) | (None, Some(only)) => only.clone(),
			(None, None) => TableSettings::default(),
		}
	}
}
