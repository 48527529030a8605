//! Rendered output as a sequence of tag fragments

use std::fmt;

/// One line of output at a nesting level.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Fragment {
	/// Indentation level: 0 for `<table>`, 1 for rows, 2 for cells
	pub level: usize,
	/// Tag text
	pub text: String,
}

impl Fragment {
	/// Creates a fragment
	pub fn new(level: usize, text: impl Into<String>) -> Self {
		Self {
			level,
			text: text.into(),
		}
	}
}

/// Rendered table markup.
///
/// `Display` writes one fragment per line, indented by level, or all
/// fragments back to back when minified.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct Markup {
	fragments: Vec<Fragment>,
	indent: String,
	minify: bool,
}

impl Markup {
	pub(crate) fn new(indent: impl Into<String>, minify: bool) -> Self {
		Self {
			fragments: Vec::new(),
			indent: indent.into(),
			minify,
		}
	}

	pub(crate) fn push(&mut self, level: usize, text: impl Into<String>) {
		self.fragments.push(Fragment::new(level, text));
	}

	/// Returns the fragments in output order
	pub fn fragments(&self) -> &[Fragment] {
		&self.fragments
	}

	/// Returns `true` if nothing was rendered
	pub fn is_empty(&self) -> bool {
		self.fragments.is_empty()
	}

	/// Returns the number of fragments
	pub fn len(&self) -> usize {
		self.fragments.len()
	}

	/// Lays the fragments out as text
	pub fn into_string(self) -> String {
		self.to_string()
	}
}

impl fmt::Display for Markup {
	fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
		for fragment in &self.fragments {
			if self.minify {
				f.write_str(&fragment.text)?;
				continue;
			}
			for _ in 0..fragment.level {
				f.write_str(&self.indent)?;
			}
			writeln!(f, "{}", fragment.text)?;
		}
		Ok(())
	}
}
