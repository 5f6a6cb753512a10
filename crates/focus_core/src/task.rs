//! Task and GeneratedItem
//!
//! A `Task` is what the UI sends when asking for subtasks. Only `title` and
//! `description` matter here; the UI also sends its own bookkeeping fields
//! (`id`, `dueDate`, `items`, `expanded`) which are ignored on deserialize.

use serde::{Deserialize, Serialize};
use uuid::Uuid;

/// Task as received from the client
#[derive(Serialize, Deserialize, Clone, Debug, Default, PartialEq, Eq)]
pub struct Task {
    pub title: String,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,
}

impl Task {
    pub fn new(title: impl Into<String>) -> Self {
        Self {
            title: title.into(),
            description: None,
        }
    }

    pub fn with_description(mut self, description: impl Into<String>) -> Self {
        self.description = Some(description.into());
        self
    }

    /// Description, if present and non-empty
    pub fn description(&self) -> Option<&str> {
        self.description.as_deref().filter(|d| !d.is_empty())
    }
}

/// A subtask produced by the generator
#[derive(Serialize, Deserialize, Clone, Debug, PartialEq, Eq)]
pub struct GeneratedItem {
    pub id: String,
    pub title: String,
    pub completed: bool,
}

impl GeneratedItem {
    /// Create a new, not yet completed item with a fresh id
    pub fn new(title: impl Into<String>) -> Self {
        Self {
            id: Uuid::new_v4().to_string(),
            title: title.into(),
            completed: false,
        }
    }
}
