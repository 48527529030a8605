//! Per-row column-key projection

use std::borrow::Cow;

use crate::settings::Deletion;
use crate::settings::KeyRule;

/// Applies a row's key rule to the keys it inherits.
///
/// Without a rule the inherited keys are returned as-is. With a rule the
/// steps run in a fixed order: deletion, then additions, then renames. Each
/// deleted or renamed key affects only its first occurrence, and keys that
/// are not present are ignored.
///
/// # Example
///
/// ```
/// use spantable_core::projection::project;
/// use spantable_core::settings::KeyRule;
///
/// let keys = vec!["a".to_string(), "b".to_string(), "c".to_string()];
/// let rule = KeyRule::new().delete(["b"]).add(["d"]).forward("a", "z");
///
/// assert_eq!(project(&keys, Some(&rule)).as_ref(), ["z", "c", "d"]);
/// ```
pub fn project<'a>(keys: &'a [String], rule: Option<&KeyRule>) -> Cow<'a, [String]> {
	let Some(rule) = rule else {
		return Cow::Borrowed(keys);
	};

	let mut projected = match &rule.delete {
		Deletion::All => Vec::new(),
		Deletion::Keys(deleted) => {
			let mut kept = keys.to_vec();
			for key in deleted {
				if let Some(index) = kept.iter().position(|k| k == key) {
					kept.remove(index);
				}
			}
			kept
		}
	};

	projected.extend(rule.add.iter().cloned());

	for forward in &rule.forwarding {
		if let Some(index) = projected.iter().position(|k| *k == forward.src) {
			projected[index] = forward.dst.clone();
		}
	}

	Cow::Owned(projected)
}
