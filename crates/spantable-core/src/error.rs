//! Error types for spantable-core

use thiserror::Error;

/// Structural problems in the input that rendering cannot work around
#[non_exhaustive]
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum InputShapeError {
	/// A record holds more than one sub-row group, so there is no single
	/// set of rows to expand beneath it
	#[error("Record has more than one nested sub-row field: {}", fields.join(", "))]
	AmbiguousNesting {
		/// Names of the fields holding nested records
		fields: Vec<String>,
	},

	/// Nesting goes deeper than the configured limit
	#[error("Nested records exceed the maximum depth of {limit}")]
	TooDeep {
		/// The configured `max_depth`
		limit: usize,
	},
}

/// Error type for table rendering operations
#[non_exhaustive]
#[derive(Debug, Error)]
pub enum TableError {
	/// The record tree has a shape that cannot be rendered
	#[error("Invalid input shape: {0}")]
	InputShape(#[from] InputShapeError),

	/// A JSON document does not hold records at its top level
	#[error("Expected an array or object of records, found {found}")]
	InvalidData {
		/// JSON type that was found instead
		found: &'static str,
	},

	/// JSON text could not be parsed
	#[error("JSON error: {0}")]
	Json(#[from] serde_json::Error),
}

/// Result type for table rendering operations
pub type Result<T> = std::result::Result<T, TableError>;
