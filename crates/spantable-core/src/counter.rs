//! Row counting for automatic rowspans

use crate::model::Record;

/// Returns the number of rows a record produces: its own row plus every row
/// produced by the records nested beneath it.
///
/// All sub-row groups are counted. The walk uses an explicit stack, so
/// arbitrarily deep nesting cannot overflow the call stack here.
///
/// # Example
///
/// ```
/// use spantable_core::counter::count_rows;
/// use spantable_core::model::Record;
///
/// let leaf = Record::new().set("sku", "A-1");
/// let order = Record::new().set("id", 1).set("items", vec![leaf.clone(), leaf.clone(), leaf]);
///
/// assert_eq!(count_rows(&order), 4);
/// ```
pub fn count_rows(record: &Record) -> usize {
	let mut total = 0;
	let mut pending = vec![record];
	while let Some(current) = pending.pop() {
		total += 1;
		for group in current.sub_row_groups() {
			pending.extend(group);
		}
	}
	total
}
