//! Adapter implementations for task retrieval ports.

pub mod memory;

pub use memory::InMemoryTaskRepository;
