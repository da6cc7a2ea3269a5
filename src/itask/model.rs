use serde::{Deserialize, Serialize};
use std::fmt;
use uuid::Uuid;

/// Opaque todo identifier.
///
/// Freshly created todos get a UUID v4 string, but any string read back from
/// storage is accepted as-is. Ids are never reused: editing a todo creates a
/// new record with a new id.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct TodoId(String);

impl TodoId {
    pub fn generate() -> Self {
        Self(Uuid::new_v4().to_string())
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl From<&str> for TodoId {
    fn from(value: &str) -> Self {
        Self(value.to_string())
    }
}

impl From<String> for TodoId {
    fn from(value: String) -> Self {
        Self(value)
    }
}

impl fmt::Display for TodoId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

/// A single task. Field names on disk follow the `{id, todo, isCompleted}`
/// shape of the durable slot.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct TodoRecord {
    pub id: TodoId,
    #[serde(rename = "todo")]
    pub text: String,
    #[serde(rename = "isCompleted")]
    pub completed: bool,
}

impl TodoRecord {
    pub fn new(text: impl Into<String>) -> Self {
        Self {
            id: TodoId::generate(),
            text: text.into(),
            completed: false,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn new_record_is_active_with_fresh_id() {
        let a = TodoRecord::new("Buy milk");
        let b = TodoRecord::new("Buy milk");
        assert!(!a.completed);
        assert_ne!(a.id, b.id);
    }

    #[test]
    fn serializes_with_storage_field_names() {
        let record = TodoRecord {
            id: TodoId::from("abc"),
            text: "Walk the dog".into(),
            completed: true,
        };
        let json = serde_json::to_string(&record).unwrap();
        assert_eq!(json, r#"{"id":"abc","todo":"Walk the dog","isCompleted":true}"#);
    }
}
