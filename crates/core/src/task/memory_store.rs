//! In-memory task storage implementation
//!
//! Keeps tasks in an ordered list for the lifetime of the store. Nothing is
//! written to disk; dropping the store drops its tasks and id counter.

use async_trait::async_trait;
use tokio::sync::RwLock;

use super::model::{Task, TaskId};
use super::repository::TaskRepository;
use crate::{Error, Result};

/// First id handed out by a fresh store
const FIRST_ID: TaskId = 1;

struct StoreState {
    /// Tasks in insertion order
    tasks: Vec<Task>,
    /// Next id for tasks saved without one. Never reset, never reused.
    next_id: TaskId,
}

/// In-memory task store
pub struct InMemoryTaskStore {
    state: RwLock<StoreState>,
}

impl InMemoryTaskStore {
    /// Create an empty store
    pub fn new() -> Self {
        Self {
            state: RwLock::new(StoreState {
                tasks: Vec::new(),
                next_id: FIRST_ID,
            }),
        }
    }
}

impl Default for InMemoryTaskStore {
    fn default() -> Self {
        Self::new()
    }
}

#[async_trait]
impl TaskRepository for InMemoryTaskStore {
    async fn find_all(&self) -> Result<Vec<Task>> {
        let state = self.state.read().await;
        Ok(state.tasks.clone())
    }

    async fn find_by_id(&self, id: TaskId) -> Result<Task> {
        let state = self.state.read().await;
        state
            .tasks
            .iter()
            .find(|t| t.id == id)
            .cloned()
            .ok_or(Error::TaskNotFound(id))
    }

    async fn save(&self, mut task: Task) -> Result<Task> {
        let mut state = self.state.write().await;

        // Explicit ids are stored verbatim, even when they collide.
        if task.is_unassigned() {
            task.id = state.next_id;
            state.next_id += 1;
        }
        state.tasks.push(task.clone());

        tracing::info!(task_id = task.id, "Saved task");
        Ok(task)
    }

    async fn update(&self, task: Task) -> Result<Task> {
        let mut state = self.state.write().await;

        let slot = state
            .tasks
            .iter_mut()
            .find(|t| t.id == task.id)
            .ok_or(Error::TaskNotFound(task.id))?;
        *slot = task.clone();

        tracing::info!(task_id = task.id, "Updated task");
        Ok(task)
    }

    async fn delete(&self, id: TaskId) -> Result<bool> {
        let mut state = self.state.write().await;

        let before = state.tasks.len();
        state.tasks.retain(|t| t.id != id);
        let removed = state.tasks.len() != before;

        if removed {
            tracing::info!(task_id = id, "Deleted task");
        } else {
            tracing::debug!(task_id = id, "Delete of absent task ignored");
        }
        Ok(removed)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    async fn store_with(titles: &[&str]) -> InMemoryTaskStore {
        let store = InMemoryTaskStore::new();
        for title in titles {
            store
                .save(Task::new(*title, format!("{} desc", title)))
                .await
                .unwrap();
        }
        store
    }

    #[tokio::test]
    async fn test_find_all_empty() {
        let store = InMemoryTaskStore::new();
        let tasks = store.find_all().await.unwrap();
        assert!(tasks.is_empty());
    }

    #[tokio::test]
    async fn test_find_all_in_insertion_order() {
        let store = InMemoryTaskStore::new();
        store.save(Task::new("Task 1", "Desc 1")).await.unwrap();
        store
            .save(Task::new("Task 2", "Desc 2").with_completed(true))
            .await
            .unwrap();

        let tasks = store.find_all().await.unwrap();
        assert_eq!(tasks.len(), 2);
        assert_eq!(tasks[0].title, "Task 1");
        assert_eq!(tasks[1].title, "Task 2");
        assert!(tasks[1].completed);
    }

    #[tokio::test]
    async fn test_save_assigns_sequential_ids() {
        let store = InMemoryTaskStore::new();

        let first = store.save(Task::new("Task 1", "Desc 1")).await.unwrap();
        let second = store.save(Task::new("Task 2", "Desc 2")).await.unwrap();

        assert_eq!(first.id, 1);
        assert_eq!(second.id, 2);

        let tasks = store.find_all().await.unwrap();
        assert_eq!(tasks[0].id, 1);
        assert_eq!(tasks[1].id, 2);
    }

    #[tokio::test]
    async fn test_ids_are_not_reused_after_delete() {
        let store = store_with(&["Task 1", "Task 2"]).await;

        store.delete(2).await.unwrap();
        store.delete(1).await.unwrap();
        let third = store.save(Task::new("Task 3", "Desc 3")).await.unwrap();

        assert_eq!(third.id, 3);
    }

    #[tokio::test]
    async fn test_save_preserves_explicit_id() {
        let store = InMemoryTaskStore::new();

        let saved = store
            .save(Task::new("With id", "Desc").with_id(100))
            .await
            .unwrap();
        assert_eq!(saved.id, 100);

        // Explicit ids do not move the counter.
        let next = store.save(Task::new("Next", "Desc")).await.unwrap();
        assert_eq!(next.id, 1);
    }

    #[tokio::test]
    async fn test_save_keeps_colliding_explicit_id() {
        let store = store_with(&["Task 1"]).await;

        store
            .save(Task::new("Duplicate", "Desc").with_id(1))
            .await
            .unwrap();

        let tasks = store.find_all().await.unwrap();
        assert_eq!(tasks.len(), 2);
        assert!(tasks.iter().all(|t| t.id == 1));
        // Lookups resolve to the first record with the id.
        assert_eq!(store.find_by_id(1).await.unwrap().title, "Task 1");
    }

    #[tokio::test]
    async fn test_returned_tasks_are_copies() {
        let store = store_with(&["Task 1"]).await;

        let mut copy = store.find_by_id(1).await.unwrap();
        copy.title = "Changed outside".to_string();

        assert_eq!(store.find_by_id(1).await.unwrap().title, "Task 1");
    }

    #[tokio::test]
    async fn test_find_by_id() {
        let store = InMemoryTaskStore::new();
        store.save(Task::new("Task 1", "Desc 1")).await.unwrap();
        store
            .save(Task::new("Task 2", "Desc 2").with_completed(true))
            .await
            .unwrap();

        let task = store.find_by_id(1).await.unwrap();
        assert_eq!(task, Task::new("Task 1", "Desc 1").with_id(1));
    }

    #[tokio::test]
    async fn test_find_by_id_not_found() {
        let store = store_with(&["Task 1"]).await;

        let result = store.find_by_id(999).await;
        match result.unwrap_err() {
            Error::TaskNotFound(id) => assert_eq!(id, 999),
            e => panic!("Expected TaskNotFound error, got: {:?}", e),
        }
    }

    #[tokio::test]
    async fn test_update_replaces_all_fields_in_place() {
        let store = store_with(&["Task 1", "Task 2", "Task 3"]).await;

        let updated = Task::new("Updated", "Updated desc")
            .with_id(2)
            .with_completed(true);
        store.update(updated.clone()).await.unwrap();

        let tasks = store.find_all().await.unwrap();
        assert_eq!(tasks[1], updated);
        assert_eq!(tasks[0].id, 1);
        assert_eq!(tasks[2].id, 3);

        // Completed flips back when the replacement says so.
        store
            .update(Task::new("Updated", "Updated desc").with_id(2))
            .await
            .unwrap();
        assert!(!store.find_by_id(2).await.unwrap().completed);
    }

    #[tokio::test]
    async fn test_update_nonexistent_task() {
        let store = store_with(&["Task 1"]).await;
        let before = store.find_all().await.unwrap();

        let result = store
            .update(Task::new("Missing", "Desc").with_id(999))
            .await;

        assert_eq!(result.unwrap_err(), Error::TaskNotFound(999));
        assert_eq!(store.find_all().await.unwrap(), before);
    }

    #[tokio::test]
    async fn test_delete_task() {
        let store = store_with(&["Task 1", "Task 2", "Task 3"]).await;

        let deleted = store.delete(2).await.unwrap();
        assert!(deleted);

        let ids: Vec<TaskId> = store.find_all().await.unwrap().iter().map(|t| t.id).collect();
        assert_eq!(ids, vec![1, 3]);
    }

    #[tokio::test]
    async fn test_delete_absent_is_silent() {
        let store = store_with(&["Task 1", "Task 2"]).await;

        let deleted = store.delete(999).await.unwrap();
        assert!(!deleted);
        assert_eq!(store.find_all().await.unwrap().len(), 2);
    }

    #[tokio::test]
    async fn test_delete_all() {
        let store = store_with(&["Task 1", "Task 2"]).await;

        store.delete(1).await.unwrap();
        store.delete(2).await.unwrap();

        assert!(store.find_all().await.unwrap().is_empty());
    }

    #[tokio::test]
    async fn test_new_store_starts_fresh() {
        let store = store_with(&["Task 1", "Task 2"]).await;
        drop(store);

        let store = InMemoryTaskStore::new();
        assert!(store.find_all().await.unwrap().is_empty());
        let task = store.save(Task::new("Again", "Desc")).await.unwrap();
        assert_eq!(task.id, 1);
    }
}
