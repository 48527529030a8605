//! Attribute text for `<table>`, `<tr>`, `<th>` and `<td>` tags.
//!
//! The serialized form puts one space before each attribute and single
//! quotes around each value:
//!
//! ```text
//!  colspan='2' rowspan='3' id='x' class='y' style='z' data-extra
//! ```
//!
//! Values are written as given; nothing is escaped.

use std::fmt::Write;

use crate::settings::Attributes;
use crate::settings::RowSpan;

impl Attributes {
	/// Serializes these attributes in the fixed order colspan, rowspan, id,
	/// class, style, args.
	///
	/// Only `RowSpan::Fixed` produces a `rowspan` attribute. Empty text is
	/// skipped.
	pub fn to_markup(&self) -> String {
		let mut out = String::new();
		if let Some(colspan) = self.colspan {
			let _ = write!(out, " colspan='{colspan}'");
		}
		if let Some(RowSpan::Fixed(rowspan)) = self.rowspan {
			let _ = write!(out, " rowspan='{rowspan}'");
		}
		for (name, value) in [
			("id", &self.id),
			("class", &self.class),
			("style", &self.style),
		] {
			if let Some(value) = value.as_deref().filter(|v| !v.is_empty()) {
				let _ = write!(out, " {name}='{value}'");
			}
		}
		if let Some(args) = self.args.as_deref().filter(|a| !a.is_empty()) {
			out.push(' ');
			out.push_str(args);
		}
		out
	}
}

/// Reads attribute text produced by [`Attributes::to_markup`].
///
/// Attributes are recognized in serialization order; whatever follows the
/// last recognized attribute becomes `args`. Serializing the result gives
/// back the input text.
///
/// # Example
///
/// ```
/// use spantable_core::attrs::parse_attributes;
/// use spantable_core::settings::RowSpan;
///
/// let attrs = parse_attributes(" rowspan='4' class='parent' data-id=7");
/// assert_eq!(attrs.rowspan, Some(RowSpan::Fixed(4)));
/// assert_eq!(attrs.class.as_deref(), Some("parent"));
/// assert_eq!(attrs.args.as_deref(), Some("data-id=7"));
/// ```
pub fn parse_attributes(text: &str) -> Attributes {
	let mut rest = text;
	let mut attrs = Attributes::new();

	if let Some((colspan, tail)) = span(rest, "colspan") {
		attrs.colspan = Some(colspan);
		rest = tail;
	}
	if let Some((rowspan, tail)) = span(rest, "rowspan") {
		attrs.rowspan = Some(RowSpan::Fixed(rowspan));
		rest = tail;
	}
	for (name, slot) in [
		("id", &mut attrs.id),
		("class", &mut attrs.class),
		("style", &mut attrs.style),
	] {
		if let Some((value, tail)) = quoted(rest, name) {
			*slot = Some(value.to_string()).filter(|v| !v.is_empty());
			rest = tail;
		}
	}

	let args = rest.strip_prefix(' ').unwrap_or(rest);
	if !args.is_empty() {
		attrs.args = Some(args.to_string());
	}
	attrs
}

fn span<'a>(text: &'a str, name: &str) -> Option<(u32, &'a str)> {
	let (value, tail) = quoted(text, name)?;
	Some((value.parse().ok()?, tail))
}

/// Splits ` name='value'` off the front of `text`
fn quoted<'a>(text: &'a str, name: &str) -> Option<(&'a str, &'a str)> {
	let body = text
		.strip_prefix(' ')?
		.strip_prefix(name)?
		.strip_prefix("='")?;
	let end = body.find('\'')?;
	Some((&body[..end], &body[end + 1..]))
}
