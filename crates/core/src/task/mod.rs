//! Task module
//!
//! This module contains task-related types and logic.

mod memory_store;
mod model;
mod repository;
mod search;
mod service;

pub use memory_store::InMemoryTaskStore;
pub use model::*;
pub use repository::TaskRepository;
pub use search::filter_by_query;
pub use service::{RepositoryTaskService, TaskService};

#[cfg(test)]
pub(crate) use repository::MockTaskRepository;
