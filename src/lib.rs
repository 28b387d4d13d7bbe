//! Task service: application-layer access to tasks held by an external store.
//!
//! The crate wires a thin application service to a repository abstraction so
//! that the backing store can be swapped, including for test doubles.
//!
//! # Architecture
//!
//! The crate follows hexagonal architecture principles:
//!
//! - **Domain**: Pure data types with no infrastructure dependencies
//! - **Ports**: Abstract trait interfaces for external interactions
//! - **Adapters**: Concrete implementations of ports
//!
//! # Modules
//!
//! - [`context`]: Per-call cancellation, deadline, and correlation data
//! - [`task`]: Task domain, repository port, adapters, and application service
//! - [`telemetry`]: Structured logging setup

pub mod context;
pub mod task;
pub mod telemetry;
