//! Application state

use std::sync::Arc;

use tasklist_core::task::{InMemoryTaskStore, RepositoryTaskService, TaskService};

/// Shared application state
#[derive(Clone)]
pub struct AppState {
    inner: Arc<AppStateInner>,
}

struct AppStateInner {
    task_service: Arc<dyn TaskService>,
}

impl AppState {
    /// Create state backed by a fresh in-memory store
    pub fn in_memory() -> Self {
        Self::with_service(Arc::new(RepositoryTaskService::new(InMemoryTaskStore::new())))
    }

    /// Create state around any task service
    pub fn with_service(task_service: Arc<dyn TaskService>) -> Self {
        Self {
            inner: Arc::new(AppStateInner { task_service }),
        }
    }

    /// Get reference to the task service
    pub fn task_service(&self) -> &dyn TaskService {
        self.inner.task_service.as_ref()
    }
}
