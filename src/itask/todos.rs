//! # Todo Store
//!
//! [`TodoStore`] owns the ordered todo collection together with the two pieces
//! of ephemeral UI state: the draft text of the input box and the
//! show-completed filter. It is the single source of truth once opened.
//!
//! ## Write-through
//!
//! Every operation that changes the collection (`add`, `delete`,
//! `toggle_completed`, and the removal half of `start_edit`) ends with an
//! explicit call to [`TodoPersistence::save`] with the full snapshot. A failed
//! save is reported as an error notification and otherwise ignored: the
//! in-memory collection is kept, not rolled back, and the save is not retried.
//!
//! The draft and the filter are never written to storage.
//!
//! ## Editing
//!
//! Editing is remove-then-re-add. [`TodoStore::start_edit`] copies the record's
//! text into the draft and removes the record right away; committing the draft
//! through [`TodoStore::add`] creates a new record with a new id at the end of
//! the list.

use crate::error::ValidationError;
use crate::model::{TodoId, TodoRecord};
use crate::notify::NotificationSink;
use crate::store::{SlotBackend, TodoPersistence};

/// Todo text must be longer than this many characters once trimmed.
pub const MIN_TODO_LEN: usize = 3;

pub const MSG_ADDED: &str = "Todo added successfully!";
pub const MSG_EDITING: &str = "Editing todo...";
pub const MSG_DELETED: &str = "Todo deleted successfully!";
pub const MSG_LOAD_FAILED: &str = "Failed to load todos";
pub const MSG_SAVE_FAILED: &str = "Failed to save todos";

/// Check todo text, returning the trimmed text it would be stored as.
///
/// Length is counted in Unicode scalar values, so "😀😀" is two characters
/// long and too short.
pub fn validate_text(text: &str) -> Result<&str, ValidationError> {
    let trimmed = text.trim();
    let len = trimmed.chars().count();
    if len <= MIN_TODO_LEN {
        return Err(ValidationError::TooShort {
            min: MIN_TODO_LEN,
            len,
        });
    }
    Ok(trimmed)
}

#[derive(Debug, Clone, Copy)]
pub struct StoreOptions {
    pub show_completed: bool,
}

impl Default for StoreOptions {
    fn default() -> Self {
        Self {
            show_completed: true,
        }
    }
}

pub struct TodoStore<B: SlotBackend, N: NotificationSink> {
    items: Vec<TodoRecord>,
    draft_text: String,
    show_completed: bool,
    persistence: TodoPersistence<B>,
    sink: N,
}

impl<B: SlotBackend, N: NotificationSink> TodoStore<B, N> {
    /// Load the collection and build the store.
    ///
    /// A slot that cannot be read or parsed is reported and replaced by an
    /// empty collection; opening never fails.
    pub fn open(persistence: TodoPersistence<B>, mut sink: N, options: StoreOptions) -> Self {
        let items = match persistence.load() {
            Ok(items) => items,
            Err(e) => {
                tracing::error!(error = %e, "error loading todos");
                sink.error(MSG_LOAD_FAILED);
                Vec::new()
            }
        };

        Self {
            items,
            draft_text: String::new(),
            show_completed: options.show_completed,
            persistence,
            sink,
        }
    }

    pub fn items(&self) -> &[TodoRecord] {
        &self.items
    }

    pub fn get(&self, id: &TodoId) -> Option<&TodoRecord> {
        self.items.iter().find(|item| &item.id == id)
    }

    pub fn draft_text(&self) -> &str {
        &self.draft_text
    }

    pub fn set_draft_text(&mut self, text: impl Into<String>) {
        self.draft_text = text.into();
    }

    pub fn show_completed(&self) -> bool {
        self.show_completed
    }

    pub fn persistence(&self) -> &TodoPersistence<B> {
        &self.persistence
    }

    pub fn sink(&self) -> &N {
        &self.sink
    }

    pub fn sink_mut(&mut self) -> &mut N {
        &mut self.sink
    }

    /// Append a new active todo with the trimmed text and clear the draft.
    pub fn add(&mut self, text: &str) -> Result<TodoId, ValidationError> {
        let text = match validate_text(text) {
            Ok(text) => text.to_string(),
            Err(e) => {
                tracing::debug!(error = %e, "rejected todo text");
                self.sink.warning(&e.to_string());
                return Err(e);
            }
        };

        let record = TodoRecord::new(text);
        let id = record.id.clone();
        tracing::debug!(id = %id, "adding todo");
        self.items.push(record);
        self.draft_text.clear();
        self.sink.success(MSG_ADDED);

        self.write_through();
        Ok(id)
    }

    /// Commit the draft, as the Add button does.
    pub fn add_draft(&mut self) -> Result<TodoId, ValidationError> {
        let draft = std::mem::take(&mut self.draft_text);
        let result = self.add(&draft);
        if result.is_err() {
            self.draft_text = draft;
        }
        result
    }

    /// Commit the draft only if it is long enough, as pressing Enter does.
    /// A short draft is left untouched and nothing is reported.
    pub fn submit_draft(&mut self) -> Option<TodoId> {
        if validate_text(&self.draft_text).is_err() {
            return None;
        }
        self.add_draft().ok()
    }

    /// Move a todo's text into the draft and remove the todo.
    /// Returns false, without notifying, if no todo has this id.
    pub fn start_edit(&mut self, id: &TodoId) -> bool {
        let Some(pos) = self.position(id) else {
            tracing::debug!(id = %id, "edit of unknown todo ignored");
            return false;
        };

        let record = self.items.remove(pos);
        tracing::debug!(id = %id, "editing todo");
        self.draft_text = record.text;
        self.sink.info(MSG_EDITING);

        self.write_through();
        true
    }

    /// Remove a todo. Reports success whether or not the id existed.
    pub fn delete(&mut self, id: &TodoId) -> bool {
        let before = self.items.len();
        self.items.retain(|item| &item.id != id);
        let removed = self.items.len() != before;
        tracing::debug!(id = %id, removed, "deleting todo");
        self.sink.success(MSG_DELETED);

        self.write_through();
        removed
    }

    /// Flip a todo's completed flag in place. Returns the new value, or None
    /// if no todo has this id.
    pub fn toggle_completed(&mut self, id: &TodoId) -> Option<bool> {
        let pos = self.position(id)?;
        let item = &mut self.items[pos];
        item.completed = !item.completed;
        let completed = item.completed;
        tracing::debug!(id = %id, completed, "toggled todo");

        self.write_through();
        Some(completed)
    }

    pub fn toggle_show_completed(&mut self) -> bool {
        self.show_completed = !self.show_completed;
        self.show_completed
    }

    pub fn visible_items(&self) -> VisibleItems<'_> {
        VisibleItems {
            inner: self.items.iter(),
            show_completed: self.show_completed,
        }
    }

    /// `(visible, total)`.
    pub fn counts(&self) -> (usize, usize) {
        (self.visible_items().count(), self.items.len())
    }

    fn position(&self, id: &TodoId) -> Option<usize> {
        self.items.iter().position(|item| &item.id == id)
    }

    fn write_through(&mut self) {
        if let Err(e) = self.persistence.save(&self.items) {
            tracing::error!(error = %e, "error saving todos");
            self.sink.error(MSG_SAVE_FAILED);
        }
    }
}

/// Lazy view over the todos the filter lets through. Clone it to restart.
#[derive(Clone)]
pub struct VisibleItems<'a> {
    inner: std::slice::Iter<'a, TodoRecord>,
    show_completed: bool,
}

impl<'a> Iterator for VisibleItems<'a> {
    type Item = &'a TodoRecord;

    fn next(&mut self) -> Option<Self::Item> {
        let show_completed = self.show_completed;
        self.inner
            .by_ref()
            .find(|item| show_completed || !item.completed)
    }
}
