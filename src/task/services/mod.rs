//! Application services for task retrieval.

mod application;

pub use application::{TaskApplicationError, TaskApplicationResult, TaskApplicationService};
