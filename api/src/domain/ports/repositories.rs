//! Repository port traits
//!
//! These traits define the interface for data persistence.
//! Implementations are provided by adapters (currently in-memory).

use async_trait::async_trait;

use crate::domain::entities::{ComponentId, Item, System, SystemComponent};
use crate::error::DomainError;

/// Repository for catalog items
#[async_trait]
pub trait ItemRepository: Send + Sync {
    /// Insert or replace an item (keyed by code)
    async fn save(&self, item: &Item) -> Result<Item, DomainError>;

    /// Find an item by code (case-insensitive)
    async fn find_by_code(&self, code: &str) -> Result<Option<Item>, DomainError>;

    /// All items, ordered by code
    async fn find_all(&self) -> Result<Vec<Item>, DomainError>;

    /// Check whether an item with the code exists (case-insensitive)
    async fn exists_by_code(&self, code: &str) -> Result<bool, DomainError>;

    /// Delete an item by code. Returns false when nothing was deleted.
    async fn delete_by_code(&self, code: &str) -> Result<bool, DomainError>;
}

/// Repository for product systems
#[async_trait]
pub trait SystemRepository: Send + Sync {
    /// Find a system by code (case-insensitive)
    async fn find_by_code(&self, code: &str) -> Result<Option<System>, DomainError>;

    /// Check whether a system with the code exists (case-insensitive)
    async fn exists_by_code(&self, code: &str) -> Result<bool, DomainError>;

    /// All systems, ordered by code
    async fn find_all(&self) -> Result<Vec<System>, DomainError>;

    /// Insert or replace a system (keyed by code)
    async fn save(&self, system: &System) -> Result<System, DomainError>;
}

/// Repository for system components
#[async_trait]
pub trait SystemComponentRepository: Send + Sync {
    /// Find a component by ID
    async fn find_by_id(&self, id: &ComponentId) -> Result<Option<SystemComponent>, DomainError>;

    /// All components of a system (case-insensitive system code), in no particular order
    async fn find_by_system_code(
        &self,
        system_code: &str,
    ) -> Result<Vec<SystemComponent>, DomainError>;

    /// Insert or replace a component (keyed by ID)
    async fn save(&self, component: &SystemComponent) -> Result<SystemComponent, DomainError>;

    /// Delete a component. Returns false when nothing was deleted.
    async fn delete(&self, id: &ComponentId) -> Result<bool, DomainError>;

    /// Check whether the system already uses the item
    async fn exists_by_system_and_item(
        &self,
        system_code: &str,
        item_code: &str,
    ) -> Result<bool, DomainError>;
}
