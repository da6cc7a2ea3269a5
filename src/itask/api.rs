//! # API Facade
//!
//! The API layer is a **thin facade** over [`TodoStore`]. It is the entry point
//! every UI uses, whether a one-shot CLI command or an interactive session.
//!
//! ## Role and Responsibilities
//!
//! The API facade:
//! - **Normalizes inputs**: turns user selectors (display indexes, id prefixes)
//!   into [`TodoId`]s before anything is mutated
//! - **Applies view rules** the store does not own, e.g. completed todos
//!   cannot be edited
//! - **Returns structured types** (`Result<CmdResult>`, [`Listing`])
//!
//! ## What the API Does NOT Do
//!
//! - **State transitions**: those belong to the store
//! - **I/O**: no stdout or stderr; messages go to the store's notification sink
//!
//! Selectors resolve against the list as it was before the call, so
//! `delete 1 2` removes the first two visible todos, not the first and third.

use crate::error::{ItaskError, Result};
use crate::index::{index_todos, DisplayTodo, TodoSelector};
use crate::model::{TodoId, TodoRecord};
use crate::notify::NotificationSink;
use crate::store::SlotBackend;
use crate::todos::{validate_text, TodoStore};
use std::path::PathBuf;
use std::str::FromStr;

pub const MSG_CANNOT_EDIT_COMPLETED: &str = "Cannot edit completed todo";

/// Todos touched by a command, in the state the command left them.
#[derive(Debug, Default)]
pub struct CmdResult {
    pub affected: Vec<TodoRecord>,
}

impl CmdResult {
    pub fn with_affected(mut self, todos: Vec<TodoRecord>) -> Self {
        self.affected = todos;
        self
    }
}

/// What a list view shows: the visible todos with their indexes, plus counts
/// for the "X of Y todos" summary.
#[derive(Debug, Clone)]
pub struct Listing {
    pub todos: Vec<DisplayTodo>,
    pub total: usize,
    pub show_completed: bool,
}

impl Listing {
    pub fn visible(&self) -> usize {
        self.todos.len()
    }
}

pub struct ItaskApi<B: SlotBackend, N: NotificationSink> {
    store: TodoStore<B, N>,
}

impl<B: SlotBackend, N: NotificationSink> ItaskApi<B, N> {
    pub fn new(store: TodoStore<B, N>) -> Self {
        Self { store }
    }

    pub fn store(&self) -> &TodoStore<B, N> {
        &self.store
    }

    pub fn sink_mut(&mut self) -> &mut N {
        self.store.sink_mut()
    }

    pub fn slot_path(&self) -> PathBuf {
        self.store.persistence().slot_path()
    }

    pub fn list(&self) -> Listing {
        Listing {
            todos: index_todos(self.store.visible_items()),
            total: self.store.items().len(),
            show_completed: self.store.show_completed(),
        }
    }

    /// The todo a selector names, without changing anything.
    pub fn find<I: AsRef<str>>(&self, selector: I) -> Result<TodoRecord> {
        let id = self.resolve_one(selector.as_ref())?;
        self.store
            .get(&id)
            .cloned()
            .ok_or_else(|| ItaskError::TodoNotFound(id.to_string()))
    }

    pub fn add(&mut self, text: &str) -> Result<CmdResult> {
        let id = self.store.add(text)?;
        Ok(CmdResult::default().with_affected(self.records(&[id])))
    }

    pub fn draft(&self) -> &str {
        self.store.draft_text()
    }

    pub fn set_draft(&mut self, text: impl Into<String>) {
        self.store.set_draft_text(text);
    }

    /// The Add button: commit the draft or report why not.
    pub fn add_draft(&mut self) -> Result<CmdResult> {
        let id = self.store.add_draft()?;
        Ok(CmdResult::default().with_affected(self.records(&[id])))
    }

    /// The Enter key: commit the draft only if it is long enough.
    pub fn submit_draft(&mut self) -> CmdResult {
        let affected = match self.store.submit_draft() {
            Some(id) => self.records(&[id]),
            None => Vec::new(),
        };
        CmdResult::default().with_affected(affected)
    }

    /// Move a todo into the draft. Completed todos are refused with a warning.
    /// Returns the removed todo, if any.
    pub fn start_edit<I: AsRef<str>>(&mut self, selector: I) -> Result<CmdResult> {
        let id = self.resolve_one(selector.as_ref())?;
        let Some(record) = self.store.get(&id).cloned() else {
            return Ok(CmdResult::default());
        };

        if record.completed {
            self.store.sink_mut().warning(MSG_CANNOT_EDIT_COMPLETED);
            return Ok(CmdResult::default());
        }

        self.store.start_edit(&id);
        Ok(CmdResult::default().with_affected(vec![record]))
    }

    /// Replace a todo's text in one step: start the edit, then add the new
    /// text. The text is checked first so a rejected edit keeps the todo.
    pub fn edit<I: AsRef<str>>(&mut self, selector: I, text: &str) -> Result<CmdResult> {
        if let Err(e) = validate_text(text) {
            self.store.sink_mut().warning(&e.to_string());
            return Err(e.into());
        }

        let started = self.start_edit(selector)?;
        if started.affected.is_empty() {
            return Ok(started);
        }
        let id = self.store.add(text)?;
        Ok(CmdResult::default().with_affected(self.records(&[id])))
    }

    pub fn toggle<I: AsRef<str>>(&mut self, selectors: &[I]) -> Result<CmdResult> {
        let ids = self.resolve_all(selectors)?;
        for id in &ids {
            self.store.toggle_completed(id);
        }
        Ok(CmdResult::default().with_affected(self.records(&ids)))
    }

    pub fn delete<I: AsRef<str>>(&mut self, selectors: &[I]) -> Result<CmdResult> {
        let ids = self.resolve_all(selectors)?;
        let removed = self.records(&ids);
        for id in &ids {
            self.store.delete(id);
        }
        Ok(CmdResult::default().with_affected(removed))
    }

    pub fn toggle_show_completed(&mut self) -> bool {
        self.store.toggle_show_completed()
    }

    fn records(&self, ids: &[TodoId]) -> Vec<TodoRecord> {
        ids.iter()
            .filter_map(|id| self.store.get(id).cloned())
            .collect()
    }

    fn resolve_one(&self, input: &str) -> Result<TodoId> {
        let selector = parse_selector(input)?;
        selector
            .resolve(self.store.visible_items(), self.store.items())
            .ok_or_else(|| ItaskError::TodoNotFound(selector.to_string()))
    }

    fn resolve_all<I: AsRef<str>>(&self, inputs: &[I]) -> Result<Vec<TodoId>> {
        let mut ids: Vec<TodoId> = Vec::with_capacity(inputs.len());
        for input in inputs {
            let id = self.resolve_one(input.as_ref())?;
            if !ids.contains(&id) {
                ids.push(id);
            }
        }
        Ok(ids)
    }
}

fn parse_selector(input: &str) -> Result<TodoSelector> {
    TodoSelector::from_str(input).map_err(ItaskError::Api)
}
