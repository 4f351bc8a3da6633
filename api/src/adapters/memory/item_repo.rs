//! In-memory item repository
//!
//! Stand-in for a database-backed catalog store.

use std::collections::BTreeMap;

use async_trait::async_trait;
use tokio::sync::RwLock;

use crate::domain::entities::Item;
use crate::domain::ports::ItemRepository;
use crate::error::DomainError;

/// Items keyed by upper-cased code
#[derive(Default)]
pub struct InMemoryItemRepository {
    items: RwLock<BTreeMap<String, Item>>,
}

impl InMemoryItemRepository {
    pub fn new() -> Self {
        Self::default()
    }

    /// Pre-populate with items
    pub fn with_items(items: impl IntoIterator<Item = Item>) -> Self {
        let map = items
            .into_iter()
            .map(|item| (item.code.to_uppercase(), item))
            .collect();
        Self {
            items: RwLock::new(map),
        }
    }
}

fn key(code: &str) -> String {
    code.trim().to_uppercase()
}

#[async_trait]
impl ItemRepository for InMemoryItemRepository {
    async fn save(&self, item: &Item) -> Result<Item, DomainError> {
        let mut items = self.items.write().await;
        items.insert(key(&item.code), item.clone());
        Ok(item.clone())
    }

    async fn find_by_code(&self, code: &str) -> Result<Option<Item>, DomainError> {
        let items = self.items.read().await;
        Ok(items.get(&key(code)).cloned())
    }

    async fn find_all(&self) -> Result<Vec<Item>, DomainError> {
        let items = self.items.read().await;
        Ok(items.values().cloned().collect())
    }

    async fn exists_by_code(&self, code: &str) -> Result<bool, DomainError> {
        let items = self.items.read().await;
        Ok(items.contains_key(&key(code)))
    }

    async fn delete_by_code(&self, code: &str) -> Result<bool, DomainError> {
        let mut items = self.items.write().await;
        Ok(items.remove(&key(code)).is_some())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::test_utils::test_item;

    #[tokio::test]
    async fn lookup_is_case_insensitive() {
        let repo = InMemoryItemRepository::with_items([test_item("FR-01")]);

        assert!(repo.find_by_code("fr-01").await.unwrap().is_some());
        assert!(repo.exists_by_code(" Fr-01 ").await.unwrap());
        assert!(!repo.exists_by_code("FR-02").await.unwrap());
    }

    #[tokio::test]
    async fn save_replaces_existing_code() {
        let repo = InMemoryItemRepository::new();
        let item = test_item("A1");
        repo.save(&item).await.unwrap();

        let renamed = item.with_updated_details("Renamed", "", 1.0).unwrap();
        repo.save(&renamed).await.unwrap();

        let all = repo.find_all().await.unwrap();
        assert_eq!(all.len(), 1);
        assert_eq!(all[0].name, "Renamed");
    }

    #[tokio::test]
    async fn find_all_is_ordered_by_code() {
        let repo =
            InMemoryItemRepository::with_items([test_item("C"), test_item("A"), test_item("B")]);

        let codes: Vec<_> = repo
            .find_all()
            .await
            .unwrap()
            .into_iter()
            .map(|i| i.code)
            .collect();
        assert_eq!(codes, vec!["A", "B", "C"]);
    }

    #[tokio::test]
    async fn delete_reports_whether_removed() {
        let repo = InMemoryItemRepository::with_items([test_item("A")]);
        assert!(repo.delete_by_code("a").await.unwrap());
        assert!(!repo.delete_by_code("a").await.unwrap());
        assert!(repo.find_all().await.unwrap().is_empty());
    }
}
