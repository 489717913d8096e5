//! Task repository trait
//!
//! Defines the interface for task storage operations. Any backend
//! (in-memory, file, network) implements this contract, including the
//! error kinds and the silent delete of absent ids.

use async_trait::async_trait;

use super::model::{Task, TaskId};
use crate::Result;

/// Repository interface for task CRUD operations
#[cfg_attr(test, mockall::automock)]
#[async_trait]
pub trait TaskRepository: Send + Sync {
    /// Get all tasks in insertion order
    async fn find_all(&self) -> Result<Vec<Task>>;

    /// Get a task by ID, failing with `TaskNotFound` when absent
    async fn find_by_id(&self, id: TaskId) -> Result<Task>;

    /// Store a task, assigning the next id when it carries the unassigned id
    async fn save(&self, task: Task) -> Result<Task>;

    /// Replace an existing task in place
    async fn update(&self, task: Task) -> Result<Task>;

    /// Delete a task by ID. Returns whether anything was removed.
    async fn delete(&self, id: TaskId) -> Result<bool>;
}
