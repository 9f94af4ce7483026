//! Client-side filtering of reference data
//!
//! None of these helpers touch the network; they narrow a list that was
//! already fetched and always preserve input order.

use regex::Regex;

use crate::types::reference::ReferenceItem;

/// Keep the entities whose label contains `needle`, ignoring case.
///
/// An empty `needle` keeps everything.
pub fn filter<T>(entities: &[T], needle: &str) -> Vec<T>
where
    T: ReferenceItem + Clone,
{
    if needle.is_empty() {
        return entities.to_vec();
    }

    let needle = needle.to_lowercase();
    entities
        .iter()
        .filter(|entity| entity.label().to_lowercase().contains(&needle))
        .cloned()
        .collect()
}

/// Keep the entities whose value or label matches `pattern`.
pub fn filter_pattern<T>(entities: &[T], pattern: &Regex) -> Vec<T>
where
    T: ReferenceItem + Clone,
{
    entities
        .iter()
        .filter(|entity| pattern.is_match(entity.value()) || pattern.is_match(entity.label()))
        .cloned()
        .collect()
}

/// First entity with identity `id`.
pub fn find<T: ReferenceItem>(entities: &[T], id: i64) -> Option<&T> {
    entities.iter().find(|entity| entity.id() == id)
}
