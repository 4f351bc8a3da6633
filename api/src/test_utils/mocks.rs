//! Mock implementations of port traits
//!
//! These store what they receive so tests can verify behavior.

use std::sync::{Arc, Mutex};

use async_trait::async_trait;

use crate::domain::entities::Item;
use crate::domain::events::{DomainEvent, DomainEventKind};
use crate::domain::ports::{EventPublisher, ItemRepository};
use crate::error::{DomainError, EventError};

// ============================================================================
// Recording Event Publisher
// ============================================================================

/// Keeps every published event. Clones share the same log.
#[derive(Clone, Default)]
pub struct RecordingEventPublisher {
    events: Arc<Mutex<Vec<DomainEvent>>>,
}

impl RecordingEventPublisher {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn events(&self) -> Vec<DomainEvent> {
        self.events.lock().unwrap().clone()
    }

    pub fn kinds(&self) -> Vec<DomainEventKind> {
        self.events().into_iter().map(|e| e.kind).collect()
    }

    pub fn names(&self) -> Vec<&'static str> {
        self.events().iter().map(|e| e.kind.name()).collect()
    }
}

#[async_trait]
impl EventPublisher for RecordingEventPublisher {
    async fn publish(&self, event: DomainEvent) -> Result<(), EventError> {
        self.events.lock().unwrap().push(event);
        Ok(())
    }
}

// ============================================================================
// Failing Event Publisher
// ============================================================================

/// Rejects every event
pub struct FailingEventPublisher;

#[async_trait]
impl EventPublisher for FailingEventPublisher {
    async fn publish(&self, _event: DomainEvent) -> Result<(), EventError> {
        Err(EventError::Publish("broker unavailable".to_string()))
    }
}

// ============================================================================
// Failing Item Repository
// ============================================================================

/// Every call fails with an internal error
pub struct FailingItemRepository;

fn storage_down<T>() -> Result<T, DomainError> {
    Err(DomainError::Internal("storage unavailable".to_string()))
}

#[async_trait]
impl ItemRepository for FailingItemRepository {
    async fn save(&self, _item: &Item) -> Result<Item, DomainError> {
        storage_down()
    }

    async fn find_by_code(&self, _code: &str) -> Result<Option<Item>, DomainError> {
        storage_down()
    }

    async fn find_all(&self) -> Result<Vec<Item>, DomainError> {
        storage_down()
    }

    async fn exists_by_code(&self, _code: &str) -> Result<bool, DomainError> {
        storage_down()
    }

    async fn delete_by_code(&self, _code: &str) -> Result<bool, DomainError> {
        storage_down()
    }
}
