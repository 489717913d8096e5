//! Task detail screen state
//!
//! Shows one task and lets the user edit its text, toggle it or delete it.
//! The edit form is kept apart from the loaded task until it is saved.

use std::sync::Arc;

use tracing::warn;

use super::{
    form_is_complete, MSG_DELETE_FAILED, MSG_FORM_INCOMPLETE, MSG_LOAD_TASK_FAILED,
    MSG_NO_TASK_LOADED, MSG_UPDATE_FAILED,
};
use crate::task::{Task, TaskId, TaskService};
use crate::Result;

pub struct TaskDetailViewModel {
    service: Arc<dyn TaskService>,
    task: Option<Task>,
    error: Option<String>,
    validation_error: Option<String>,
    is_editing: bool,
    form_title: String,
    form_description: String,
}

impl TaskDetailViewModel {
    pub fn new(service: Arc<dyn TaskService>) -> Self {
        Self {
            service,
            task: None,
            error: None,
            validation_error: None,
            is_editing: false,
            form_title: String::new(),
            form_description: String::new(),
        }
    }

    pub fn task(&self) -> Option<&Task> {
        self.task.as_ref()
    }

    pub fn error(&self) -> Option<&str> {
        self.error.as_deref()
    }

    pub fn validation_error(&self) -> Option<&str> {
        self.validation_error.as_deref()
    }

    pub fn is_editing(&self) -> bool {
        self.is_editing
    }

    pub fn form_title(&self) -> &str {
        &self.form_title
    }

    pub fn form_description(&self) -> &str {
        &self.form_description
    }

    pub fn set_form_title(&mut self, title: impl Into<String>) {
        self.form_title = title.into();
    }

    pub fn set_form_description(&mut self, description: impl Into<String>) {
        self.form_description = description.into();
    }

    fn show(&mut self, task: Task) {
        self.form_title = task.title.clone();
        self.form_description = task.description.clone();
        self.task = Some(task);
    }

    pub async fn load_task(&mut self, id: TaskId) {
        self.error = None;
        match self.service.get_task_by_id(id).await {
            Ok(task) => self.show(task),
            Err(e) => {
                warn!(task_id = id, "Failed to load task: {}", e);
                self.error = Some(MSG_LOAD_TASK_FAILED.to_string());
            }
        }
    }

    /// Replace the task through the service and show the stored result
    pub async fn update_task(&mut self, task: Task) -> Result<()> {
        self.error = None;
        match self.service.update_task(task).await {
            Ok(stored) => {
                self.show(stored);
                Ok(())
            }
            Err(e) => {
                self.error = Some(e.to_string());
                Err(e)
            }
        }
    }

    pub async fn delete_task(&mut self) -> Result<()> {
        let Some(id) = self.task.as_ref().map(|t| t.id) else {
            self.error = Some(MSG_NO_TASK_LOADED.to_string());
            return Ok(());
        };

        self.error = None;
        if let Err(e) = self.service.delete_task(id).await {
            warn!(task_id = id, "Failed to delete task: {}", e);
            self.error = Some(MSG_DELETE_FAILED.to_string());
            return Err(e);
        }
        Ok(())
    }

    /// Flip completion of the loaded task. Ignored while editing.
    pub async fn toggle_complete(&mut self) -> Result<()> {
        let Some(task) = self.task.clone() else {
            return Ok(());
        };
        if self.is_editing {
            return Ok(());
        }

        self.error = None;
        let flipped = Task {
            completed: !task.completed,
            ..task
        };
        match self.service.update_task(flipped).await {
            Ok(stored) => {
                self.task = Some(stored);
                Ok(())
            }
            Err(e) => {
                warn!("Failed to toggle task: {}", e);
                self.error = Some(MSG_UPDATE_FAILED.to_string());
                Err(e)
            }
        }
    }

    pub fn start_editing(&mut self) {
        if self.task.is_none() {
            return;
        }
        self.is_editing = true;
        self.error = None;
        self.validation_error = None;
    }

    /// Leave edit mode and restore the form from the loaded task
    pub fn cancel_editing(&mut self) {
        let Some(task) = &self.task else {
            return;
        };
        self.form_title = task.title.clone();
        self.form_description = task.description.clone();
        self.is_editing = false;
        self.error = None;
        self.validation_error = None;
    }

    /// Validate the form and store it. Incomplete forms only set the
    /// validation message.
    pub async fn save_editing(&mut self) -> Result<()> {
        let Some(task) = self.task.clone() else {
            return Ok(());
        };

        self.validation_error = None;
        if !form_is_complete(&self.form_title, &self.form_description) {
            self.validation_error = Some(MSG_FORM_INCOMPLETE.to_string());
            return Ok(());
        }

        self.error = None;
        let edited = Task {
            title: self.form_title.trim().to_string(),
            description: self.form_description.trim().to_string(),
            ..task
        };
        match self.service.update_task(edited).await {
            Ok(stored) => {
                self.show(stored);
                self.is_editing = false;
                Ok(())
            }
            Err(e) => {
                self.error = Some(e.to_string());
                Err(e)
            }
        }
    }
}
