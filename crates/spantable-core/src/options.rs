//! Render configuration

use serde::Deserialize;

/// Member name that holds settings inside JSON documents and records
pub const DEFAULT_SETTINGS_KEY: &str = "tableInfo";

/// Default limit on record nesting
pub const DEFAULT_MAX_DEPTH: usize = 64;

/// Options for table rendering.
///
/// # Example
///
/// ```
/// use spantable_core::options::RenderOptions;
///
/// let options = RenderOptions::new().indent("\t").max_depth(8);
/// assert_eq!(options.indent, "\t");
/// assert!(!options.minify);
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
#[serde(default)]
pub struct RenderOptions {
	/// Text repeated once per nesting level before each line
	pub indent: String,
	/// Whether to write all fragments on a single line
	pub minify: bool,
	/// Deepest record nesting accepted before rendering fails
	pub max_depth: usize,
	/// Member name holding table and row settings in JSON input, used by
	/// [`TableRenderer::render_json`](crate::render::TableRenderer::render_json)
	pub settings_key: String,
}

impl Default for RenderOptions {
	fn default() -> Self {
		Self {
			indent: "    ".to_string(),
			minify: false,
			max_depth: DEFAULT_MAX_DEPTH,
			settings_key: DEFAULT_SETTINGS_KEY.to_string(),
		}
	}
}

impl RenderOptions {
	/// Creates new default options.
	pub fn new() -> Self {
		Self::default()
	}

	/// Sets the per-level indentation.
	pub fn indent(mut self, indent: impl Into<String>) -> Self {
		self.indent = indent.into();
		self
	}

	/// Enables minification.
	pub fn minify(mut self) -> Self {
		self.minify = true;
		self
	}

	/// Sets the nesting limit.
	pub fn max_depth(mut self, max_depth: usize) -> Self {
		self.max_depth = max_depth;
		self
	}

	/// Sets the settings member name used by JSON input.
	pub fn settings_key(mut self, key: impl Into<String>) -> Self {
		self.settings_key = key.into();
		self
	}
}
