//! In-memory repository for tests and embedded use.

use async_trait::async_trait;
use mockable::{Clock, DefaultClock};
use std::collections::HashMap;
use std::sync::{Arc, PoisonError, RwLock};
use tracing::debug;

use crate::context::RequestContext;
use crate::task::{
    domain::{Task, TaskId},
    ports::{TaskRepository, TaskRepositoryError, TaskRepositoryResult},
};

/// Thread-safe in-memory task repository.
///
/// Clones share the same underlying map. Lookups honour the execution
/// context: a cancelled or expired context is rejected before the map is
/// read.
pub struct InMemoryTaskRepository<C = DefaultClock>
where
    C: Clock + Send + Sync,
{
    tasks: Arc<RwLock<HashMap<TaskId, Task>>>,
    clock: Arc<C>,
}

impl InMemoryTaskRepository<DefaultClock> {
    /// Creates an empty repository using the system clock.
    #[must_use]
    pub fn new() -> Self {
        Self::with_clock(Arc::new(DefaultClock))
    }
}

impl Default for InMemoryTaskRepository<DefaultClock> {
    fn default() -> Self {
        Self::new()
    }
}

impl FromIterator<Task> for InMemoryTaskRepository<DefaultClock> {
    fn from_iter<I: IntoIterator<Item = Task>>(iter: I) -> Self {
        let tasks = iter
            .into_iter()
            .map(|task| (task.id().clone(), task))
            .collect();
        Self {
            tasks: Arc::new(RwLock::new(tasks)),
            clock: Arc::new(DefaultClock),
        }
    }
}

impl<C> Clone for InMemoryTaskRepository<C>
where
    C: Clock + Send + Sync,
{
    fn clone(&self) -> Self {
        Self {
            tasks: Arc::clone(&self.tasks),
            clock: Arc::clone(&self.clock),
        }
    }
}

fn lock_error<T>(err: &PoisonError<T>) -> TaskRepositoryError {
    TaskRepositoryError::persistence(std::io::Error::other(err.to_string()))
}

impl<C> InMemoryTaskRepository<C>
where
    C: Clock + Send + Sync,
{
    /// Creates an empty repository that checks deadlines against `clock`.
    #[must_use]
    pub fn with_clock(clock: Arc<C>) -> Self {
        Self {
            tasks: Arc::new(RwLock::new(HashMap::new())),
            clock,
        }
    }

    /// Stores `task`, replacing any task with the same identifier.
    ///
    /// Returns the replaced task, if there was one.
    ///
    /// # Errors
    ///
    /// Returns [`TaskRepositoryError::Persistence`] when the internal lock is
    /// poisoned.
    pub fn insert(&self, task: Task) -> TaskRepositoryResult<Option<Task>> {
        let mut tasks = self.tasks.write().map_err(|err| lock_error(&err))?;
        Ok(tasks.insert(task.id().clone(), task))
    }

    /// Removes the task stored under `id`.
    ///
    /// # Errors
    ///
    /// Returns [`TaskRepositoryError::Persistence`] when the internal lock is
    /// poisoned.
    pub fn remove(&self, id: &TaskId) -> TaskRepositoryResult<Option<Task>> {
        let mut tasks = self.tasks.write().map_err(|err| lock_error(&err))?;
        Ok(tasks.remove(id))
    }

    /// Returns the number of stored tasks.
    ///
    /// # Errors
    ///
    /// Returns [`TaskRepositoryError::Persistence`] when the internal lock is
    /// poisoned.
    pub fn len(&self) -> TaskRepositoryResult<usize> {
        let tasks = self.tasks.read().map_err(|err| lock_error(&err))?;
        Ok(tasks.len())
    }

    /// Returns `true` when no tasks are stored.
    ///
    /// # Errors
    ///
    /// Returns [`TaskRepositoryError::Persistence`] when the internal lock is
    /// poisoned.
    pub fn is_empty(&self) -> TaskRepositoryResult<bool> {
        Ok(self.len()? == 0)
    }
}

#[async_trait]
impl<C> TaskRepository for InMemoryTaskRepository<C>
where
    C: Clock + Send + Sync,
{
    async fn get(&self, ctx: &RequestContext, id: &TaskId) -> TaskRepositoryResult<Task> {
        if let Err(err) = ctx.check(&*self.clock) {
            debug!(task_id = %id, reason = %err, "lookup rejected by context");
            return Err(err.into());
        }

        let tasks = self.tasks.read().map_err(|err| lock_error(&err))?;
        tasks.get(id).cloned().ok_or_else(|| {
            debug!(task_id = %id, "task not found");
            TaskRepositoryError::NotFound(id.clone())
        })
    }
}
