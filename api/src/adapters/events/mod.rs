//! Event adapters
//!
//! Implementations of the event publisher port.

pub mod publisher;

pub use publisher::TracingEventPublisher;
