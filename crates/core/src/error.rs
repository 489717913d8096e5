//! Error types for the core library

use thiserror::Error;

use crate::task::TaskId;

/// Rejected task input
#[derive(Error, Debug, Clone, Copy, PartialEq, Eq)]
pub enum ValidationError {
    #[error("Tarefa sem título.")]
    MissingTitle,

    #[error("Tarefa sem descrição.")]
    MissingDescription,
}

#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum Error {
    #[error("Tarefa não encontrada!")]
    TaskNotFound(TaskId),

    #[error(transparent)]
    Validation(#[from] ValidationError),
}

impl Error {
    /// Whether this error means the requested task does not exist
    pub fn is_not_found(&self) -> bool {
        matches!(self, Self::TaskNotFound(_))
    }
}
