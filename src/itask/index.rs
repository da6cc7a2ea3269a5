//! # Display Indexes
//!
//! Ids are opaque and long, so UIs refer to todos by their 1-based position in
//! the currently **visible** list (`1`, `2`, ...). A position is only meaningful
//! against the list it was rendered from: toggling the filter, or removing a
//! todo, renumbers what follows.
//!
//! Anything that is not a plain positive number is taken as an id prefix and
//! matched against every todo, hidden or not.

use crate::model::{TodoId, TodoRecord};
use std::fmt;
use std::str::FromStr;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct DisplayIndex(pub usize);

impl fmt::Display for DisplayIndex {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

impl FromStr for DisplayIndex {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().parse::<usize>() {
            Ok(n) if n > 0 => Ok(DisplayIndex(n)),
            _ => Err(format!("Invalid index: {}", s)),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DisplayTodo {
    pub index: DisplayIndex,
    pub todo: TodoRecord,
}

/// Number todos in the order given, starting at 1.
pub fn index_todos<'a, I>(todos: I) -> Vec<DisplayTodo>
where
    I: IntoIterator<Item = &'a TodoRecord>,
{
    todos
        .into_iter()
        .enumerate()
        .map(|(i, todo)| DisplayTodo {
            index: DisplayIndex(i + 1),
            todo: todo.clone(),
        })
        .collect()
}

/// A user input naming one todo.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum TodoSelector {
    Index(DisplayIndex),
    IdPrefix(String),
}

impl FromStr for TodoSelector {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let s = s.trim();
        if s.is_empty() {
            return Err("Empty todo selector".to_string());
        }
        if s.chars().all(|c| c.is_ascii_digit()) {
            return s.parse().map(TodoSelector::Index);
        }
        Ok(TodoSelector::IdPrefix(s.to_string()))
    }
}

impl fmt::Display for TodoSelector {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            TodoSelector::Index(idx) => write!(f, "index {}", idx),
            TodoSelector::IdPrefix(prefix) => write!(f, "id \"{}\"", prefix),
        }
    }
}

impl TodoSelector {
    /// Find the id this selector names. `visible` is the list positions refer
    /// to, `all` is searched for id prefixes. An ambiguous prefix selects nothing.
    pub fn resolve<'a, V, A>(&self, visible: V, all: A) -> Option<TodoId>
    where
        V: IntoIterator<Item = &'a TodoRecord>,
        A: IntoIterator<Item = &'a TodoRecord>,
    {
        match self {
            TodoSelector::Index(DisplayIndex(n)) => n
                .checked_sub(1)
                .and_then(|i| visible.into_iter().nth(i))
                .map(|t| t.id.clone()),
            TodoSelector::IdPrefix(prefix) => {
                let mut matches = all
                    .into_iter()
                    .filter(|t| t.id.as_str().starts_with(prefix.as_str()));
                let first = matches.next()?;
                if matches.next().is_some() {
                    return None;
                }
                Some(first.id.clone())
            }
        }
    }
}
