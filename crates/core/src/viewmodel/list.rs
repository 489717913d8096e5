//! Task list screen state

use std::sync::Arc;

use tracing::warn;

use super::{MSG_DELETE_FAILED, MSG_LOAD_TASKS_FAILED, MSG_TOGGLE_FAILED};
use crate::task::{filter_by_query, Task, TaskId, TaskService};
use crate::Result;

/// State behind the task list: all tasks, a search box and the last error
pub struct TaskListViewModel {
    service: Arc<dyn TaskService>,
    tasks: Vec<Task>,
    error: Option<String>,
    search_query: String,
}

impl TaskListViewModel {
    pub fn new(service: Arc<dyn TaskService>) -> Self {
        Self {
            service,
            tasks: Vec::new(),
            error: None,
            search_query: String::new(),
        }
    }

    pub fn tasks(&self) -> &[Task] {
        &self.tasks
    }

    pub fn error(&self) -> Option<&str> {
        self.error.as_deref()
    }

    pub fn search_query(&self) -> &str {
        &self.search_query
    }

    pub fn set_search_query(&mut self, query: impl Into<String>) {
        self.search_query = query.into();
    }

    /// Tasks matching the current search query
    pub fn filtered_tasks(&self) -> Vec<Task> {
        filter_by_query(&self.tasks, &self.search_query)
    }

    /// Reload every task. A failed reload keeps the previous list.
    pub async fn refresh(&mut self) {
        self.error = None;
        match self.service.get_all_tasks().await {
            Ok(tasks) => {
                tracing::debug!(count = tasks.len(), "Loaded tasks");
                self.tasks = tasks;
            }
            Err(e) => {
                warn!("Failed to load tasks: {}", e);
                self.error = Some(MSG_LOAD_TASKS_FAILED.to_string());
            }
        }
    }

    /// Delete a task and reload. The error is reported and returned.
    pub async fn delete_task(&mut self, id: TaskId) -> Result<()> {
        self.error = None;
        if let Err(e) = self.service.delete_task(id).await {
            warn!(task_id = id, "Failed to delete task: {}", e);
            self.error = Some(MSG_DELETE_FAILED.to_string());
            return Err(e);
        }
        self.refresh().await;
        Ok(())
    }

    /// Toggle completion and reload. Failures only set the error message.
    pub async fn toggle_complete(&mut self, id: TaskId) {
        self.error = None;
        match self.service.toggle_task_completion(id).await {
            Ok(_) => self.refresh().await,
            Err(e) => {
                warn!(task_id = id, "Failed to toggle task: {}", e);
                self.error = Some(MSG_TOGGLE_FAILED.to_string());
            }
        }
    }
}
