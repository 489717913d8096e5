//! Task service
//!
//! Business rules on top of a [`TaskRepository`]: input validation and
//! derived queries. Presentation code talks to [`TaskService`] only, so the
//! storage backend behind it can change without touching callers.

use async_trait::async_trait;
use std::sync::Arc;

use super::model::{Task, TaskId};
use super::repository::TaskRepository;
use crate::error::ValidationError;
use crate::{Error, Result};

/// Operations offered to presentation code
#[async_trait]
pub trait TaskService: Send + Sync {
    /// All tasks in insertion order
    async fn get_all_tasks(&self) -> Result<Vec<Task>>;

    /// A single task, or `TaskNotFound`
    async fn get_task_by_id(&self, id: TaskId) -> Result<Task>;

    /// Validate, trim and store a new pending task
    async fn create_task(&self, title: &str, description: &str) -> Result<Task>;

    /// Validate, trim and replace an existing task
    async fn update_task(&self, task: Task) -> Result<Task>;

    /// Delete an existing task, or fail with `TaskNotFound`
    async fn delete_task(&self, id: TaskId) -> Result<()>;

    /// Flip the completion flag of an existing task
    async fn toggle_task_completion(&self, id: TaskId) -> Result<Task>;

    /// Completed tasks in insertion order
    async fn get_completed_tasks(&self) -> Result<Vec<Task>>;

    /// Pending tasks in insertion order
    async fn get_pending_tasks(&self) -> Result<Vec<Task>>;
}

/// Trim both fields and check them, title first.
fn validate_text(
    title: &str,
    description: &str,
) -> std::result::Result<(String, String), ValidationError> {
    let title = title.trim();
    if title.is_empty() {
        return Err(ValidationError::MissingTitle);
    }

    let description = description.trim();
    if description.is_empty() {
        return Err(ValidationError::MissingDescription);
    }

    Ok((title.to_string(), description.to_string()))
}

/// [`TaskService`] backed by any [`TaskRepository`]
pub struct RepositoryTaskService<R: TaskRepository> {
    repository: Arc<R>,
}

impl<R: TaskRepository> RepositoryTaskService<R> {
    pub fn new(repository: R) -> Self {
        Self {
            repository: Arc::new(repository),
        }
    }

    async fn tasks_where(&self, completed: bool) -> Result<Vec<Task>> {
        let tasks = self.get_all_tasks().await?;
        Ok(tasks.into_iter().filter(|t| t.completed == completed).collect())
    }
}

impl<R: TaskRepository> Clone for RepositoryTaskService<R> {
    fn clone(&self) -> Self {
        Self {
            repository: Arc::clone(&self.repository),
        }
    }
}

#[async_trait]
impl<R: TaskRepository> TaskService for RepositoryTaskService<R> {
    async fn get_all_tasks(&self) -> Result<Vec<Task>> {
        self.repository.find_all().await
    }

    async fn get_task_by_id(&self, id: TaskId) -> Result<Task> {
        self.repository.find_by_id(id).await
    }

    async fn create_task(&self, title: &str, description: &str) -> Result<Task> {
        let (title, description) = validate_text(title, description)?;
        self.repository.save(Task::new(title, description)).await
    }

    async fn update_task(&self, mut task: Task) -> Result<Task> {
        let (title, description) = validate_text(&task.title, &task.description)?;
        task.title = title;
        task.description = description;
        self.repository.update(task).await
    }

    async fn delete_task(&self, id: TaskId) -> Result<()> {
        let deleted = self.repository.delete(id).await?;

        if !deleted {
            return Err(Error::TaskNotFound(id));
        }

        Ok(())
    }

    async fn toggle_task_completion(&self, id: TaskId) -> Result<Task> {
        let mut task = self.repository.find_by_id(id).await?;
        task.completed = !task.completed;
        self.repository.update(task).await
    }

    async fn get_completed_tasks(&self) -> Result<Vec<Task>> {
        self.tasks_where(true).await
    }

    async fn get_pending_tasks(&self) -> Result<Vec<Task>> {
        self.tasks_where(false).await
    }
}
