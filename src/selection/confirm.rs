use super::state::{SelectableItem, Selection, SelectionError};

/// Whether the confirmed content of the active item is visible.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum DisplayState {
    Idle,
    Confirmed,
}

/// A [`Selection`] with a secondary "last confirmed" id, used by the API
/// playground's Send action.
///
/// Confirmed content is only exposed while the confirmed id equals the
/// active id. Switching to another item clears it.
#[derive(Debug, Clone)]
pub struct ConfirmableSelection<T> {
    selection: Selection<T>,
    confirmed_id: Option<String>,
}

impl<T: SelectableItem> ConfirmableSelection<T> {
    pub fn new(items: Vec<T>) -> Result<Self, SelectionError> {
        Ok(Self {
            selection: Selection::new(items)?,
            confirmed_id: None,
        })
    }

    pub fn items(&self) -> &[T] {
        self.selection.items()
    }

    pub fn active(&self) -> &T {
        self.selection.active()
    }

    pub fn active_id(&self) -> &str {
        self.selection.active_id()
    }

    pub fn active_index(&self) -> usize {
        self.selection.active_index()
    }

    pub fn is_active(&self, id: &str) -> bool {
        self.selection.is_active(id)
    }

    pub fn confirmed_id(&self) -> Option<&str> {
        self.confirmed_id.as_deref()
    }

    /// Make `id` active. A change of item clears the confirmed id; selecting
    /// the already-active item leaves it alone.
    pub fn select(&mut self, id: &str) -> bool {
        let changed = self.selection.select(id);
        if changed {
            self.confirmed_id = None;
        }
        changed
    }

    pub fn select_index(&mut self, index: usize) -> bool {
        let changed = self.selection.select_index(index);
        if changed {
            self.confirmed_id = None;
        }
        changed
    }

    pub fn next(&mut self) -> bool {
        let changed = self.selection.next();
        if changed {
            self.confirmed_id = None;
        }
        changed
    }

    pub fn previous(&mut self) -> bool {
        let changed = self.selection.previous();
        if changed {
            self.confirmed_id = None;
        }
        changed
    }

    /// Record `id` as the last confirmed item. Unknown ids are ignored.
    pub fn confirm(&mut self, id: &str) -> bool {
        if !self.selection.contains(id) {
            tracing::debug!(id, "ignoring confirmation of unknown item");
            return false;
        }

        tracing::debug!(id, "item confirmed");
        self.confirmed_id = Some(id.to_string());
        true
    }

    pub fn confirm_active(&mut self) -> bool {
        let id = self.selection.active_id().to_string();
        self.confirm(&id)
    }

    pub fn state(&self) -> DisplayState {
        match self.confirmed_id.as_deref() {
            Some(id) if id == self.selection.active_id() => DisplayState::Confirmed,
            _ => DisplayState::Idle,
        }
    }

    /// The active item, if its confirmed content should be shown.
    pub fn confirmed_active(&self) -> Option<&T> {
        match self.state() {
            DisplayState::Confirmed => Some(self.selection.active()),
            DisplayState::Idle => None,
        }
    }
}
