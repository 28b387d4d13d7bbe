//! Task retrieval for the application layer.
//!
//! An application service forwards lookups to a repository port, passing the
//! caller's execution context and identifier through unchanged. The module
//! follows hexagonal architecture:
//!
//! - Domain types in [`domain`]
//! - Port contracts in [`ports`]
//! - Adapter implementations in [`adapters`]
//! - Orchestration services in [`services`]

pub mod adapters;
pub mod domain;
pub mod ports;
pub mod services;
