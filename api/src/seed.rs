//! Demo data
//!
//! Gives a fresh server something to show: the frame item `2103` and the
//! window frame system `WF00`.

use crate::domain::entities::{Item, System};
use crate::domain::ports::{ItemRepository, SystemRepository};
use crate::domain::values::Category;
use crate::error::DomainError;

pub const DEMO_ITEM_CODE: &str = "2103";
pub const DEMO_SYSTEM_CODE: &str = "WF00";

/// Insert the demo records unless they already exist
pub async fn seed_demo_data<IR, SR>(items: &IR, systems: &SR) -> Result<(), DomainError>
where
    IR: ItemRepository,
    SR: SystemRepository,
{
    if !items.exists_by_code(DEMO_ITEM_CODE).await? {
        let item = Item::create(DEMO_ITEM_CODE, "Frame", "Standard frame profile", 25.50)?
            .with_category(Category::frame())
            .activated();
        items.save(&item).await?;
        tracing::debug!(code = DEMO_ITEM_CODE, "Seeded demo item");
    }

    if !systems.exists_by_code(DEMO_SYSTEM_CODE).await? {
        let system = System::new(
            DEMO_SYSTEM_CODE,
            "Window Frame",
            "Fixed window frame system",
            Category::window(),
        )?;
        systems.save(&system).await?;
        tracing::debug!(code = DEMO_SYSTEM_CODE, "Seeded demo system");
    }

    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::adapters::{InMemoryItemRepository, InMemorySystemRepository};

    #[tokio::test]
    async fn seeds_item_and_system() {
        let items = InMemoryItemRepository::new();
        let systems = InMemorySystemRepository::new();

        seed_demo_data(&items, &systems).await.unwrap();

        let item = items.find_by_code("2103").await.unwrap().unwrap();
        assert_eq!(item.name, "Frame");
        assert!(item.is_active());
        assert_eq!(item.category, Some(Category::frame()));
        assert!(systems.exists_by_code("WF00").await.unwrap());
    }

    #[tokio::test]
    async fn seeding_twice_keeps_existing_records() {
        let items = InMemoryItemRepository::new();
        let systems = InMemorySystemRepository::new();

        seed_demo_data(&items, &systems).await.unwrap();
        let first = items.find_by_code("2103").await.unwrap().unwrap();
        seed_demo_data(&items, &systems).await.unwrap();
        let second = items.find_by_code("2103").await.unwrap().unwrap();

        assert_eq!(first.id, second.id);
        assert_eq!(items.find_all().await.unwrap().len(), 1);
    }
}
