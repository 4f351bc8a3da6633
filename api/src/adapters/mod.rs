//! Adapters layer
//!
//! Implementations of port traits for external systems.

pub mod events;
pub mod memory;

pub use events::TracingEventPublisher;
pub use memory::{InMemoryComponentRepository, InMemoryItemRepository, InMemorySystemRepository};
