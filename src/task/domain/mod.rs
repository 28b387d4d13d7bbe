//! Domain model for task retrieval.
//!
//! A task is an opaque identifier whose lifecycle is owned by the backing
//! store.

mod ids;
mod task;

pub use ids::TaskId;
pub use task::Task;
