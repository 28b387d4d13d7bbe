//! Per-call execution context threaded from callers down to repositories.
//!
//! A [`RequestContext`] carries a cancellation signal, an optional deadline
//! and a correlation identifier. Services pass it through untouched; concrete
//! repositories decide whether and when to honour it.

use chrono::{DateTime, TimeDelta, Utc};
use mockable::Clock;
use thiserror::Error;
use tokio_util::sync::CancellationToken;
use uuid::Uuid;

/// Reasons a context no longer permits work.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
pub enum ContextError {
    /// The context was cancelled by its owner or an ancestor.
    #[error("context cancelled")]
    Cancelled,

    /// The context deadline has passed.
    #[error("context deadline exceeded at {0}")]
    DeadlineExceeded(DateTime<Utc>),
}

/// Cancellation, deadline and correlation data for a single request.
///
/// Clones share the same cancellation signal. Use [`RequestContext::child`]
/// to derive a context that is cancelled with its parent but can also be
/// cancelled on its own.
///
/// # Example
///
/// ```
/// use task_service::context::RequestContext;
///
/// let parent = RequestContext::background();
/// let child = parent.child();
///
/// parent.cancel();
/// assert!(child.is_cancelled());
/// ```
#[derive(Debug, Clone)]
pub struct RequestContext {
    correlation_id: Uuid,
    deadline: Option<DateTime<Utc>>,
    cancellation: CancellationToken,
}

impl RequestContext {
    /// Creates a root context with a fresh correlation ID, no deadline, and
    /// no cancellation.
    #[must_use]
    pub fn background() -> Self {
        Self {
            correlation_id: Uuid::new_v4(),
            deadline: None,
            cancellation: CancellationToken::new(),
        }
    }

    /// Sets the correlation ID used to tie log events to this request.
    #[must_use]
    pub const fn with_correlation_id(mut self, id: Uuid) -> Self {
        self.correlation_id = id;
        self
    }

    /// Sets an absolute deadline.
    ///
    /// An earlier deadline already present on the context is kept.
    #[must_use]
    pub fn with_deadline(mut self, deadline: DateTime<Utc>) -> Self {
        self.deadline = Some(self.deadline.map_or(deadline, |existing| existing.min(deadline)));
        self
    }

    /// Sets a deadline `timeout` from the clock's current time.
    ///
    /// A timeout too large to represent as an instant is treated as
    /// unbounded and leaves the context unchanged.
    #[must_use]
    pub fn with_timeout(self, timeout: TimeDelta, clock: &impl Clock) -> Self {
        match clock.utc().checked_add_signed(timeout) {
            Some(deadline) => self.with_deadline(deadline),
            None => self,
        }
    }

    /// Derives a child context.
    ///
    /// The child keeps the correlation ID and deadline. Cancelling the parent
    /// cancels the child; cancelling the child leaves the parent untouched.
    #[must_use]
    pub fn child(&self) -> Self {
        Self {
            correlation_id: self.correlation_id,
            deadline: self.deadline,
            cancellation: self.cancellation.child_token(),
        }
    }

    /// Cancels this context and every context derived from it.
    pub fn cancel(&self) {
        self.cancellation.cancel();
    }

    /// Returns `true` once the context or any ancestor has been cancelled.
    #[must_use]
    pub fn is_cancelled(&self) -> bool {
        self.cancellation.is_cancelled()
    }

    /// Returns `true` when the deadline is at or before the clock's current
    /// time.
    #[must_use]
    pub fn is_expired(&self, clock: &impl Clock) -> bool {
        self.deadline.is_some_and(|deadline| deadline <= clock.utc())
    }

    /// Verifies that work may still proceed under this context.
    ///
    /// # Errors
    ///
    /// Returns [`ContextError::Cancelled`] when the context was cancelled, or
    /// [`ContextError::DeadlineExceeded`] when its deadline has passed.
    /// Cancellation is reported first when both apply.
    pub fn check(&self, clock: &impl Clock) -> Result<(), ContextError> {
        if self.is_cancelled() {
            return Err(ContextError::Cancelled);
        }
        match self.deadline {
            Some(deadline) if deadline <= clock.utc() => {
                Err(ContextError::DeadlineExceeded(deadline))
            }
            _ => Ok(()),
        }
    }

    /// Returns the correlation ID.
    #[must_use]
    pub const fn correlation_id(&self) -> Uuid {
        self.correlation_id
    }

    /// Returns the deadline, if one is set.
    #[must_use]
    pub const fn deadline(&self) -> Option<DateTime<Utc>> {
        self.deadline
    }

    /// Returns the underlying cancellation token.
    ///
    /// Backends that await I/O can race their futures against
    /// [`CancellationToken::cancelled`].
    #[must_use]
    pub const fn cancellation_token(&self) -> &CancellationToken {
        &self.cancellation
    }
}

impl Default for RequestContext {
    fn default() -> Self {
        Self::background()
    }
}
