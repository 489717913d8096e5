//! Core library for the task list
//!
//! This crate contains the core business logic, including:
//! - Task entity and repository contract
//! - In-memory task store
//! - Task service (validation and derived queries)
//! - View-models that drive the service for presentation code

pub mod error;
pub mod task;
pub mod viewmodel;

pub use error::{Error, ValidationError};
pub type Result<T> = std::result::Result<T, Error>;
