//! Attribute extraction
//!
//! Normalizes an element's attribute list into an ordered name/value
//! mapping for display. html5ever keeps attributes in insertion order, so
//! iterating the rcdom `attrs` vector already yields a deterministic
//! document-order sequence; this module only flattens the qualified names
//! to plain strings and collapses duplicates.
//!
//! Duplicate names are last-wins: a later attribute overwrites the value
//! recorded for an earlier one while keeping the earlier position, the
//! same way repeated inserts behave in an insertion-ordered map.

use html5ever::Attribute;

/// Build an ordered `(name, value)` mapping from an element's attribute
/// list.
///
/// Iteration order of the result matches the order attributes appear in
/// the list. When the same name occurs more than once, the last value
/// wins and the first position is kept.
pub fn extract(attrs: &[Attribute]) -> Vec<(String, String)> {
    let mut out: Vec<(String, String)> = Vec::with_capacity(attrs.len());

    for attr in attrs {
        let name = attr.name.local.as_ref().to_string();
        let value = attr.value.to_string();
        match out.iter_mut().find(|(existing, _)| *existing == name) {
            Some(entry) => entry.1 = value,
            None => out.push((name, value)),
        }
    }

    out
}
