// ABOUTME: Collection helpers.
// ABOUTME: Order-preserving de-duplication for any hashable item type.

use std::collections::HashSet;
use std::hash::Hash;

/// Removes duplicates while keeping the first occurrence of each item in place.
pub fn remove_duplicates<T, I>(items: I) -> Vec<T>
where
    T: Eq + Hash + Clone,
    I: IntoIterator<Item = T>,
{
    let mut seen = HashSet::new();
    items
        .into_iter()
        .filter(|item| seen.insert(item.clone()))
        .collect()
}
