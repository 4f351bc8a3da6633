//! Event publisher port trait
//!
//! Defines the interface for publishing domain events to the outside world.

use async_trait::async_trait;

use crate::domain::events::DomainEvent;
use crate::error::EventError;

/// Port trait for domain event publishing
#[async_trait]
pub trait EventPublisher: Send + Sync {
    /// Publish a single event
    async fn publish(&self, event: DomainEvent) -> Result<(), EventError>;
}
