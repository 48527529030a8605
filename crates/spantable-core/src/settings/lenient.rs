//! Permissive `deserialize_with` helpers.
//!
//! Every helper reads the raw value first and keeps only what has the
//! expected type. Anything else is logged and treated as unset.

use std::collections::HashMap;

use serde::Deserialize;
use serde::Deserializer;
use serde_json::Value as Json;

use super::Attributes;
use super::ColumnSpec;
use super::Deletion;
use super::Forward;
use super::KeyRule;
use super::RowSpan;
use crate::model::json_type_name;

fn ignored(expected: &str, value: &Json) {
	tracing::debug!(
		expected,
		found = json_type_name(value),
		"ignoring malformed setting"
	);
}

fn as_span(value: &Json) -> Option<u32> {
	value.as_u64().and_then(|n| u32::try_from(n).ok())
}

fn strings(value: &Json) -> Vec<String> {
	match value {
		Json::Array(items) => items
			.iter()
			.filter_map(|item| item.as_str().map(str::to_string))
			.collect(),
		Json::Null => Vec::new(),
		other => {
			ignored("array of keys", other);
			Vec::new()
		}
	}
}

pub(super) fn span<'de, D>(deserializer: D) -> Result<Option<u32>, D::Error>
where
	D: Deserializer<'de>,
{
	let value = Json::deserialize(deserializer)?;
	let span = as_span(&value);
	if span.is_none() && !value.is_null() {
		ignored("non-negative integer", &value);
	}
	Ok(span)
}

pub(super) fn row_span<'de, D>(deserializer: D) -> Result<Option<RowSpan>, D::Error>
where
	D: Deserializer<'de>,
{
	let value = Json::deserialize(deserializer)?;
	Ok(match &value {
		Json::Bool(true) => Some(RowSpan::Auto),
		Json::Bool(false) => Some(RowSpan::Off),
		Json::Null => None,
		other => {
			let span = as_span(other).map(RowSpan::Fixed);
			if span.is_none() {
				ignored("boolean or non-negative integer", other);
			}
			span
		}
	})
}

pub(super) fn text<'de, D>(deserializer: D) -> Result<Option<String>, D::Error>
where
	D: Deserializer<'de>,
{
	let value = Json::deserialize(deserializer)?;
	Ok(match value {
		Json::String(s) if s.is_empty() => None,
		Json::String(s) => Some(s),
		Json::Number(n) => Some(n.to_string()),
		Json::Null => None,
		other => {
			ignored("string", &other);
			None
		}
	})
}

pub(super) fn cells<'de, D>(deserializer: D) -> Result<HashMap<String, Attributes>, D::Error>
where
	D: Deserializer<'de>,
{
	let value = Json::deserialize(deserializer)?;
	let Json::Object(map) = value else {
		if !value.is_null() {
			ignored("object of cell settings", &value);
		}
		return Ok(HashMap::new());
	};

	Ok(map
		.into_iter()
		.filter_map(|(key, cell)| {
			if !cell.is_object() {
				ignored("object of cell attributes", &cell);
				return None;
			}
			serde_json::from_value::<Attributes>(cell)
				.ok()
				.map(|attrs| (key, attrs))
		})
		.collect())
}

pub(super) fn key_rule<'de, D>(deserializer: D) -> Result<Option<KeyRule>, D::Error>
where
	D: Deserializer<'de>,
{
	let value = Json::deserialize(deserializer)?;
	let Json::Object(map) = value else {
		if !value.is_null() {
			ignored("object of key rules", &value);
		}
		return Ok(None);
	};

	let delete = match map.get("delete") {
		Some(Json::String(s)) if s == "all" => Deletion::All,
		Some(other) => Deletion::Keys(strings(other)),
		None => Deletion::default(),
	};
	let add = map.get("add").map(strings).unwrap_or_default();
	let forwarding = match map.get("forwarding") {
		Some(Json::Array(items)) => items
			.iter()
			.filter_map(|item| {
				let src = item.get("src")?.as_str()?;
				let dst = item.get("dst")?.as_str()?;
				Some(Forward {
					src: src.to_string(),
					dst: dst.to_string(),
				})
			})
			.collect(),
		Some(other) if !other.is_null() => {
			ignored("array of forwarding pairs", other);
			Vec::new()
		}
		_ => Vec::new(),
	};

	Ok(Some(KeyRule {
		delete,
		add,
		forwarding,
	}))
}

pub(super) fn columns<'de, D>(deserializer: D) -> Result<Option<Vec<ColumnSpec>>, D::Error>
where
	D: Deserializer<'de>,
{
	let value = Json::deserialize(deserializer)?;
	let Json::Array(items) = value else {
		if !value.is_null() {
			ignored("array of columns", &value);
		}
		return Ok(None);
	};

	Ok(Some(
		items
			.into_iter()
			.filter_map(|item| {
				if !item.is_object() {
					ignored("column object", &item);
					return None;
				}
				serde_json::from_value::<ColumnSpec>(item).ok()
			})
			.collect(),
	))
}
