//! In-memory system component repository

use std::collections::HashMap;

use async_trait::async_trait;
use tokio::sync::RwLock;

use crate::domain::entities::{ComponentId, SystemComponent};
use crate::domain::ports::SystemComponentRepository;
use crate::error::DomainError;

#[derive(Default)]
pub struct InMemoryComponentRepository {
    components: RwLock<HashMap<ComponentId, SystemComponent>>,
}

impl InMemoryComponentRepository {
    pub fn new() -> Self {
        Self::default()
    }

    /// Pre-populate with components
    pub fn with_components(components: impl IntoIterator<Item = SystemComponent>) -> Self {
        let map = components.into_iter().map(|c| (c.id, c)).collect();
        Self {
            components: RwLock::new(map),
        }
    }
}

#[async_trait]
impl SystemComponentRepository for InMemoryComponentRepository {
    async fn find_by_id(&self, id: &ComponentId) -> Result<Option<SystemComponent>, DomainError> {
        let components = self.components.read().await;
        Ok(components.get(id).cloned())
    }

    async fn find_by_system_code(
        &self,
        system_code: &str,
    ) -> Result<Vec<SystemComponent>, DomainError> {
        let components = self.components.read().await;
        Ok(components
            .values()
            .filter(|c| c.system_code.eq_ignore_ascii_case(system_code.trim()))
            .cloned()
            .collect())
    }

    async fn save(&self, component: &SystemComponent) -> Result<SystemComponent, DomainError> {
        let mut components = self.components.write().await;
        components.insert(component.id, component.clone());
        Ok(component.clone())
    }

    async fn delete(&self, id: &ComponentId) -> Result<bool, DomainError> {
        let mut components = self.components.write().await;
        Ok(components.remove(id).is_some())
    }

    async fn exists_by_system_and_item(
        &self,
        system_code: &str,
        item_code: &str,
    ) -> Result<bool, DomainError> {
        let components = self.components.read().await;
        Ok(components.values().any(|c| {
            c.system_code.eq_ignore_ascii_case(system_code.trim())
                && c.item_code.eq_ignore_ascii_case(item_code.trim())
        }))
    }
}
