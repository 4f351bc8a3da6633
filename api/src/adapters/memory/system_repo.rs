//! In-memory system repository

use std::collections::BTreeMap;

use async_trait::async_trait;
use tokio::sync::RwLock;

use crate::domain::entities::System;
use crate::domain::ports::SystemRepository;
use crate::error::DomainError;

/// Systems keyed by upper-cased code
#[derive(Default)]
pub struct InMemorySystemRepository {
    systems: RwLock<BTreeMap<String, System>>,
}

impl InMemorySystemRepository {
    pub fn new() -> Self {
        Self::default()
    }

    /// Pre-populate with systems
    pub fn with_systems(systems: impl IntoIterator<Item = System>) -> Self {
        let map = systems
            .into_iter()
            .map(|system| (system.code.to_uppercase(), system))
            .collect();
        Self {
            systems: RwLock::new(map),
        }
    }
}

fn key(code: &str) -> String {
    code.trim().to_uppercase()
}

#[async_trait]
impl SystemRepository for InMemorySystemRepository {
    async fn find_by_code(&self, code: &str) -> Result<Option<System>, DomainError> {
        let systems = self.systems.read().await;
        Ok(systems.get(&key(code)).cloned())
    }

    async fn exists_by_code(&self, code: &str) -> Result<bool, DomainError> {
        let systems = self.systems.read().await;
        Ok(systems.contains_key(&key(code)))
    }

    async fn find_all(&self) -> Result<Vec<System>, DomainError> {
        let systems = self.systems.read().await;
        Ok(systems.values().cloned().collect())
    }

    async fn save(&self, system: &System) -> Result<System, DomainError> {
        let mut systems = self.systems.write().await;
        systems.insert(key(&system.code), system.clone());
        Ok(system.clone())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::test_utils::test_system;

    #[tokio::test]
    async fn save_and_find() {
        let repo = InMemorySystemRepository::new();
        repo.save(&test_system("WF00")).await.unwrap();

        assert!(repo.exists_by_code("wf00").await.unwrap());
        let found = repo.find_by_code("Wf00").await.unwrap().unwrap();
        assert_eq!(found.code, "WF00");
    }

    #[tokio::test]
    async fn unknown_code_is_none() {
        let repo = InMemorySystemRepository::with_systems([test_system("WF00")]);
        assert!(repo.find_by_code("DR10").await.unwrap().is_none());
        assert!(!repo.exists_by_code("DR10").await.unwrap());
    }

    #[tokio::test]
    async fn find_all_is_ordered_by_code() {
        let repo = InMemorySystemRepository::with_systems([test_system("WF10"), test_system("DR00")]);
        let codes: Vec<_> = repo
            .find_all()
            .await
            .unwrap()
            .into_iter()
            .map(|s| s.code)
            .collect();
        assert_eq!(codes, vec!["DR00", "WF10"]);
    }
}
