//! Task aggregate root.

use super::TaskId;
use serde::{Deserialize, Serialize};

/// A unit of work held by the backing store.
///
/// Only the identifier is observable at this layer; creation, mutation and
/// deletion belong to whichever store implements
/// [`TaskRepository`](crate::task::ports::TaskRepository).
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Task {
    id: TaskId,
}

impl Task {
    /// Creates a task with the given identifier.
    #[must_use]
    pub fn new(id: impl Into<TaskId>) -> Self {
        Self { id: id.into() }
    }

    /// Returns the task identifier.
    #[must_use]
    pub const fn id(&self) -> &TaskId {
        &self.id
    }
}
