use std::collections::HashSet;

use thiserror::Error;

/// One static option in a fixed list (a terminal command, an API request, a tab).
pub trait SelectableItem {
    /// Unique key of the item within its list.
    fn id(&self) -> &str;

    /// Text shown on the button that selects the item.
    fn label(&self) -> &str;
}

/// Errors raised while building a selection from configured items.
#[derive(Debug, Error, PartialEq, Eq)]
pub enum SelectionError {
    #[error("a selection needs at least one item")]
    Empty,

    #[error("duplicate item id: {0}")]
    DuplicateId(String),
}

/// Look up the item whose id equals `active_id`.
///
/// A stale or unknown id falls back to the first item. `None` is only
/// returned for an empty slice.
pub fn resolve_active<'a, T: SelectableItem>(items: &'a [T], active_id: &str) -> Option<&'a T> {
    items
        .iter()
        .find(|item| item.id() == active_id)
        .or_else(|| items.first())
}

/// Check that `items` can back a selection: non-empty, ids unique.
pub fn validate_items<T: SelectableItem>(items: &[T]) -> Result<(), SelectionError> {
    if items.is_empty() {
        return Err(SelectionError::Empty);
    }

    let mut seen = HashSet::new();
    for item in items {
        if !seen.insert(item.id()) {
            return Err(SelectionError::DuplicateId(item.id().to_string()));
        }
    }
    Ok(())
}

/// The active item of a fixed, non-empty list.
#[derive(Debug, Clone)]
pub struct Selection<T> {
    items: Vec<T>,
    active_id: String,
}

impl<T: SelectableItem> Selection<T> {
    /// Build a selection whose default active item is the first one.
    pub fn new(items: Vec<T>) -> Result<Self, SelectionError> {
        validate_items(&items)?;
        let active_id = items[0].id().to_string();
        Ok(Self { items, active_id })
    }

    pub fn items(&self) -> &[T] {
        &self.items
    }

    pub fn len(&self) -> usize {
        self.items.len()
    }

    /// Always false: construction rejects empty lists.
    pub fn is_empty(&self) -> bool {
        self.items.is_empty()
    }

    pub fn active_id(&self) -> &str {
        &self.active_id
    }

    pub fn active(&self) -> &T {
        // `new` guarantees at least one item
        resolve_active(&self.items, &self.active_id).unwrap_or(&self.items[0])
    }

    pub fn active_index(&self) -> usize {
        self.index_of(&self.active_id).unwrap_or(0)
    }

    pub fn is_active(&self, id: &str) -> bool {
        self.active_id == id
    }

    pub fn contains(&self, id: &str) -> bool {
        self.index_of(id).is_some()
    }

    /// Make `id` the active item.
    ///
    /// Returns `true` when the active item changed. Ids outside the list are
    /// ignored so the active id always names a configured item.
    pub fn select(&mut self, id: &str) -> bool {
        if !self.contains(id) {
            tracing::debug!(id, "ignoring selection of unknown item");
            return false;
        }
        if self.active_id == id {
            return false;
        }

        tracing::debug!(from = %self.active_id, to = id, "selection changed");
        self.active_id = id.to_string();
        true
    }

    /// Select by position, used for number-key shortcuts.
    pub fn select_index(&mut self, index: usize) -> bool {
        match self.items.get(index) {
            Some(item) => {
                let id = item.id().to_string();
                self.select(&id)
            }
            None => false,
        }
    }

    /// Move to the next item, wrapping at the end. On a two-item list this
    /// is a toggle.
    pub fn next(&mut self) -> bool {
        let index = (self.active_index() + 1) % self.items.len();
        self.select_index(index)
    }

    /// Move to the previous item, wrapping at the start.
    pub fn previous(&mut self) -> bool {
        let current = self.active_index();
        let index = if current > 0 {
            current - 1
        } else {
            self.items.len() - 1
        };
        self.select_index(index)
    }

    fn index_of(&self, id: &str) -> Option<usize> {
        self.items.iter().position(|item| item.id() == id)
    }
}
