//! Tracing event publisher
//!
//! Writes domain events to the log. Will be replaced by a message bus
//! adapter once one exists.

use async_trait::async_trait;

use crate::domain::events::DomainEvent;
use crate::domain::ports::EventPublisher;
use crate::error::EventError;

pub struct TracingEventPublisher;

#[async_trait]
impl EventPublisher for TracingEventPublisher {
    async fn publish(&self, event: DomainEvent) -> Result<(), EventError> {
        let payload =
            serde_json::to_string(&event.kind).map_err(|e| EventError::Publish(e.to_string()))?;

        tracing::info!(
            event_id = %event.event_id,
            event = event.kind.name(),
            occurred_on = %event.occurred_on.to_rfc3339(),
            payload = %payload,
            "Domain event published"
        );
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::entities::ItemId;
    use crate::domain::events::DomainEventKind;

    #[tokio::test]
    async fn publish_succeeds() {
        let publisher = TracingEventPublisher;
        let event = DomainEvent::new(DomainEventKind::ItemCreated {
            item_code: "2103".to_string(),
            item_id: ItemId::new(),
        });
        assert!(publisher.publish(event).await.is_ok());
    }
}
