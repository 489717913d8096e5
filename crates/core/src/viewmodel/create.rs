//! Task creation form state

use std::sync::Arc;

use tracing::warn;

use super::{form_is_complete, MSG_FORM_INCOMPLETE};
use crate::task::TaskService;

#[derive(Debug, Default, Clone, PartialEq, Eq)]
struct CreateState {
    error: Option<String>,
    success: bool,
    validation_error: Option<String>,
}

pub struct TaskCreateViewModel {
    service: Arc<dyn TaskService>,
    state: CreateState,
}

impl TaskCreateViewModel {
    pub fn new(service: Arc<dyn TaskService>) -> Self {
        Self {
            service,
            state: CreateState::default(),
        }
    }

    pub fn error(&self) -> Option<&str> {
        self.state.error.as_deref()
    }

    pub fn success(&self) -> bool {
        self.state.success
    }

    pub fn validation_error(&self) -> Option<&str> {
        self.state.validation_error.as_deref()
    }

    /// Check the form locally, then create through the service
    pub async fn create_task(&mut self, title: &str, description: &str) {
        self.state.validation_error = None;
        if !form_is_complete(title, description) {
            self.state.validation_error = Some(MSG_FORM_INCOMPLETE.to_string());
            return;
        }

        self.state.error = None;
        self.state.success = false;
        match self
            .service
            .create_task(title.trim(), description.trim())
            .await
        {
            Ok(task) => {
                tracing::debug!(task_id = task.id, "Task created from form");
                self.state.success = true;
            }
            Err(e) => {
                warn!("Failed to create task: {}", e);
                self.state.error = Some(e.to_string());
            }
        }
    }

    pub fn reset(&mut self) {
        self.state = CreateState::default();
    }
}
