//! Common test fixtures for spantable-core integration tests

// Each test binary compiles this module separately, so not every fixture is
// used everywhere.
#![allow(dead_code, unreachable_pub)]

use rstest::fixture;
use serde_json::{Value as Json, json};
use spantable_core::model::Record;
use spantable_core::settings::{ColumnSpec, TableSettings};

/// Two flat people records with the same fields
#[fixture]
pub fn people() -> Vec<Record> {
	vec![
		Record::new().set("name", "x").set("age", 3),
		Record::new().set("name", "y").set("age", 4),
	]
}

/// One customer with two orders, each holding line items
#[fixture]
pub fn customer_orders() -> Vec<Record> {
	let item = |sku: &str| Record::new().set("sku", sku);
	vec![Record::new().set("customer", "Acme").set(
		"orders",
		vec![
			Record::new()
				.set("id", 1)
				.set("items", vec![item("A"), item("B")]),
			Record::new().set("id", 2).set("items", vec![item("C")]),
		],
	)]
}

/// Columns for [`customer_orders`]
#[fixture]
pub fn order_columns() -> TableSettings {
	TableSettings::new().columns(vec![
		ColumnSpec::new("customer", "Customer"),
		ColumnSpec::new("id", "Order"),
		ColumnSpec::new("sku", "Item"),
	])
}

/// Inventory document with embedded table, row and cell settings
#[fixture]
pub fn inventory_document() -> Json {
	json!({
		"tableInfo": {
			"class": "report",
			"cols": [
				{"key": "name", "title": "Name"},
				{"key": "qty", "title": "Qty"},
			],
		},
		"widget": {
			"name": "Widget",
			"qty": 3,
			"tableInfo": {"id": "w", "cells": {"qty": {"style": "color: red"}}},
		},
		"kit": {
			"name": "Kit",
			"parts": [
				{"name": "Bolt", "qty": 2},
				{"name": "Nut", "qty": 4},
			],
		},
	})
}

/// Counts data and header rows in rendered markup
pub fn count_tr(markup: &str) -> usize {
	markup.matches("<tr").count()
}
