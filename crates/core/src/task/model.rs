//! Task model definitions

use serde::{Deserialize, Serialize};

/// Task identity
pub type TaskId = i64;

/// Id carried by a task that has not been saved yet
pub const UNASSIGNED_ID: TaskId = 0;

/// A task in the list
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Task {
    pub id: TaskId,
    pub title: String,
    pub description: String,
    pub completed: bool,
}

impl Task {
    /// Create a new, unsaved and pending task
    pub fn new(title: impl Into<String>, description: impl Into<String>) -> Self {
        Self {
            id: UNASSIGNED_ID,
            title: title.into(),
            description: description.into(),
            completed: false,
        }
    }

    /// Set the id
    pub fn with_id(mut self, id: TaskId) -> Self {
        self.id = id;
        self
    }

    /// Set the completion flag
    pub fn with_completed(mut self, completed: bool) -> Self {
        self.completed = completed;
        self
    }

    /// Whether the task still carries the unassigned id
    pub fn is_unassigned(&self) -> bool {
        self.id == UNASSIGNED_ID
    }
}
