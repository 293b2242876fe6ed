//! Derived category grouping for the display layer.
//!
//! Pure derivation over the current item collection: no side effects, no
//! mutation of the input, deterministic output for equal input.

use crate::category::UNCATEGORIZED;
use crate::media::MediaItem;

/// One display group: a category name and its items in insertion order.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CategoryGroup {
    pub name: String,
    pub items: Vec<MediaItem>,
}

/// Partition items into category groups.
///
/// - An empty or whitespace-only stored category is shown under
///   [`UNCATEGORIZED`]; the stored value is untouched.
/// - Within a group, items keep the order they were encountered in.
/// - Groups are sorted ascending by name, case-insensitively, with a
///   case-sensitive tiebreak so the ordering is total and deterministic.
pub fn group_by_category(items: &[MediaItem]) -> Vec<CategoryGroup> {
    let mut groups: Vec<CategoryGroup> = Vec::new();

    for item in items {
        let name = if item.category.trim().is_empty() {
            UNCATEGORIZED
        } else {
            item.category.as_str()
        };

        match groups.iter_mut().find(|g| g.name == name) {
            Some(group) => group.items.push(item.clone()),
            None => groups.push(CategoryGroup {
                name: name.to_string(),
                items: vec![item.clone()],
            }),
        }
    }

    groups.sort_by(|a, b| {
        a.name
            .to_lowercase()
            .cmp(&b.name.to_lowercase())
            .then_with(|| a.name.cmp(&b.name))
    });
    groups
}

// ---------------------------------------------------------------------------
// Tests
// ---------------------------------------------------------------------------
