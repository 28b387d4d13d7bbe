//! Repository port for task lookup.

use crate::context::{ContextError, RequestContext};
use crate::task::domain::{Task, TaskId};
use async_trait::async_trait;
use std::sync::Arc;
use thiserror::Error;

/// Result type for task repository operations.
pub type TaskRepositoryResult<T> = Result<T, TaskRepositoryError>;

/// Task lookup contract.
///
/// Implementations must be safe for concurrent use; the application service
/// shares one instance across every in-flight request.
#[cfg_attr(test, mockall::automock)]
#[async_trait]
pub trait TaskRepository: Send + Sync {
    /// Fetches the task stored under `id`.
    ///
    /// The context is supplied for cancellation and deadline propagation.
    /// Whether it is honoured is up to the implementation.
    ///
    /// # Errors
    ///
    /// Returns [`TaskRepositoryError::NotFound`] when no task exists for the
    /// identifier, [`TaskRepositoryError::Context`] when the implementation
    /// refuses work under a cancelled or expired context, or
    /// [`TaskRepositoryError::Persistence`] for any backend failure.
    async fn get(&self, ctx: &RequestContext, id: &TaskId) -> TaskRepositoryResult<Task>;
}

/// Errors returned by task repository implementations.
#[derive(Debug, Clone, Error)]
pub enum TaskRepositoryError {
    /// The task was not found.
    #[error("task not found: {0}")]
    NotFound(TaskId),

    /// The execution context no longer permits work.
    #[error(transparent)]
    Context(#[from] ContextError),

    /// Persistence-layer failure.
    #[error("persistence error: {0}")]
    Persistence(Arc<dyn std::error::Error + Send + Sync>),
}

impl TaskRepositoryError {
    /// Wraps a persistence error.
    pub fn persistence(err: impl std::error::Error + Send + Sync + 'static) -> Self {
        Self::Persistence(Arc::new(err))
    }
}
