//! Reducer-style state container for the active portfolio.
//!
//! [`PortfolioState`] is the authoritative in-memory collection of
//! [`MediaItem`]s for the currently active identifier. All mutation goes
//! through [`PortfolioState::apply`], a pure function of (previous state,
//! action) -- asynchronous work happens elsewhere and feeds its results
//! back in as actions.

use crate::media::MediaItem;

/// The four mutations the state container supports.
///
/// This is the tagged-union action protocol of the container; the match in
/// [`PortfolioState::apply`] is exhaustive, so there is no "unknown action"
/// case to defend against.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum PortfolioAction {
    /// Append an item. The caller guarantees a freshly generated unique id;
    /// no duplicate check is performed here.
    AddItem(MediaItem),
    /// Remove the first item with a matching id; no-op when absent.
    RemoveItem { id: String },
    /// Replace the whole collection (result of a successful remote load).
    LoadItems(Vec<MediaItem>),
    /// Empty the collection.
    Clear,
}

/// Ordered collection of committed items for one portfolio identifier.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct PortfolioState {
    pub items: Vec<MediaItem>,
}

impl PortfolioState {
    /// Create the empty initial state.
    pub fn new() -> Self {
        Self::default()
    }

    /// Apply an action, returning the next state.
    ///
    /// Pure and total: the previous state is not mutated and no transition
    /// panics. Insertion order is preserved across every transition.
    pub fn apply(&self, action: PortfolioAction) -> PortfolioState {
        match action {
            PortfolioAction::AddItem(item) => {
                let mut items = self.items.clone();
                items.push(item);
                PortfolioState { items }
            }
            PortfolioAction::RemoveItem { id } => PortfolioState {
                items: self
                    .items
                    .iter()
                    .filter(|item| item.id != id)
                    .cloned()
                    .collect(),
            },
            PortfolioAction::LoadItems(items) => PortfolioState { items },
            PortfolioAction::Clear => PortfolioState { items: Vec::new() },
        }
    }

    pub fn len(&self) -> usize {
        self.items.len()
    }

    pub fn is_empty(&self) -> bool {
        self.items.is_empty()
    }

    /// Look up an item by id.
    pub fn get(&self, id: &str) -> Option<&MediaItem> {
        self.items.iter().find(|item| item.id == id)
    }
}

// ---------------------------------------------------------------------------
// Tests
// ---------------------------------------------------------------------------
