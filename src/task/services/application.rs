//! Application service for task retrieval.

use crate::context::RequestContext;
use crate::task::{
    domain::{Task, TaskId},
    ports::{TaskRepository, TaskRepositoryError},
};
use std::sync::Arc;
use thiserror::Error;
use tracing::{debug, instrument, warn};

/// Service-level errors for task retrieval.
#[derive(Debug, Error)]
pub enum TaskApplicationError {
    /// Repository operation failed.
    #[error(transparent)]
    Repository(#[from] TaskRepositoryError),
}

impl TaskApplicationError {
    /// Returns the repository error that caused the failure.
    #[must_use]
    pub const fn repository_error(&self) -> &TaskRepositoryError {
        match self {
            Self::Repository(err) => err,
        }
    }
}

/// Result type for task application service operations.
pub type TaskApplicationResult<T> = Result<T, TaskApplicationError>;

/// Entry point for callers that need tasks.
///
/// The service forwards every request to the injected repository and returns
/// its result unchanged. It performs no validation, retries or timeouts of
/// its own.
pub struct TaskApplicationService<R>
where
    R: TaskRepository,
{
    repository: Arc<R>,
}

impl<R> Clone for TaskApplicationService<R>
where
    R: TaskRepository,
{
    fn clone(&self) -> Self {
        Self {
            repository: Arc::clone(&self.repository),
        }
    }
}

impl<R> TaskApplicationService<R>
where
    R: TaskRepository,
{
    /// Creates a service backed by `repository`.
    #[must_use]
    pub const fn new(repository: Arc<R>) -> Self {
        Self { repository }
    }

    /// Returns the injected repository.
    #[must_use]
    pub const fn repository(&self) -> &Arc<R> {
        &self.repository
    }

    /// Retrieves a task by identifier.
    ///
    /// Calls the repository exactly once with the same context and
    /// identifier.
    ///
    /// # Errors
    ///
    /// Returns [`TaskApplicationError::Repository`] carrying the repository
    /// error unchanged.
    #[instrument(
        name = "task.get",
        skip_all,
        fields(task_id = %id, correlation_id = %ctx.correlation_id())
    )]
    pub async fn get_task(
        &self,
        ctx: &RequestContext,
        id: &TaskId,
    ) -> TaskApplicationResult<Task> {
        match self.repository.get(ctx, id).await {
            Ok(task) => {
                debug!("task retrieved");
                Ok(task)
            }
            Err(err) => {
                warn!(task_id = %id, error = %err, "get task failed");
                Err(err.into())
            }
        }
    }
}
