//! Catalog service
//!
//! Use cases for the item catalog: create, update, list, activate and
//! withdraw items.

use std::sync::Arc;

use crate::domain::entities::Item;
use crate::domain::events::{DomainEvent, DomainEventKind};
use crate::domain::ports::{EventPublisher, ItemRepository};
use crate::domain::values::{Category, Color, Measure};
use crate::error::{AppError, DomainError};

/// Input for creating an item
#[derive(Debug, Clone, Default)]
pub struct CreateItem {
    pub code: String,
    pub name: String,
    pub description: Option<String>,
    pub price: f64,
    pub category_name: Option<String>,
    pub category_code: Option<String>,
    pub color_name: Option<String>,
    pub color_hex: Option<String>,
    pub dimension_value: Option<f64>,
    pub dimension_unit: Option<String>,
}

/// Input for updating an item. Omitted fields keep their current value.
#[derive(Debug, Clone, Default)]
pub struct UpdateItem {
    pub name: Option<String>,
    pub description: Option<String>,
    pub price: Option<f64>,
    pub category_name: Option<String>,
    pub category_code: Option<String>,
    pub color_name: Option<String>,
    pub color_hex: Option<String>,
    pub dimension_value: Option<f64>,
    pub dimension_unit: Option<String>,
}

fn present(value: &Option<String>) -> Option<&str> {
    value.as_deref().map(str::trim).filter(|v| !v.is_empty())
}

fn category_from(name: &Option<String>, code: &Option<String>) -> Result<Option<Category>, DomainError> {
    match (present(name), present(code)) {
        (Some(name), Some(code)) => Category::new(name, code).map(Some),
        _ => Ok(None),
    }
}

fn color_from(name: &Option<String>, hex: &Option<String>) -> Result<Option<Color>, DomainError> {
    match (present(name), present(hex)) {
        (Some(name), Some(hex)) => Color::new(name, hex).map(Some),
        _ => Ok(None),
    }
}

fn dimensions_from(value: Option<f64>, unit: &Option<String>) -> Result<Option<Measure>, DomainError> {
    match (value, present(unit)) {
        (Some(value), Some(unit)) => Measure::new(value, unit).map(Some),
        _ => Ok(None),
    }
}

/// Apply the optional value objects. Each one is only set when all its parts are present.
fn with_optional_parts(
    mut item: Item,
    category: Option<Category>,
    color: Option<Color>,
    dimensions: Option<Measure>,
) -> Item {
    if let Some(category) = category {
        item = item.with_category(category);
    }
    if let Some(color) = color {
        item = item.with_color(color);
    }
    if let Some(dimensions) = dimensions {
        item = item.with_dimensions(dimensions);
    }
    item
}

fn item_not_found(code: &str) -> AppError {
    AppError::Domain(DomainError::NotFound(format!(
        "Item with code '{}' not found",
        code
    )))
}

/// Service for managing catalog items
pub struct CatalogService<IR, EP>
where
    IR: ItemRepository,
    EP: EventPublisher,
{
    items: Arc<IR>,
    events: Arc<EP>,
}

impl<IR, EP> CatalogService<IR, EP>
where
    IR: ItemRepository,
    EP: EventPublisher,
{
    pub fn new(items: Arc<IR>, events: Arc<EP>) -> Self {
        Self { items, events }
    }

    /// Create a new draft item
    pub async fn create_item(&self, command: CreateItem) -> Result<Item, AppError> {
        if self.items.exists_by_code(&command.code).await? {
            tracing::warn!(code = %command.code, "Rejected duplicate item code");
            return Err(AppError::Domain(DomainError::business_rule(
                "duplicate.item.code",
                format!("Item with code '{}' already exists", command.code),
            )));
        }

        let item = Item::create(
            &command.code,
            &command.name,
            command.description.as_deref().unwrap_or_default(),
            command.price,
        )?;
        let item = with_optional_parts(
            item,
            category_from(&command.category_name, &command.category_code)?,
            color_from(&command.color_name, &command.color_hex)?,
            dimensions_from(command.dimension_value, &command.dimension_unit)?,
        );

        let item = self.items.save(&item).await?;
        tracing::info!(code = %item.code, id = %item.id, "Item created");

        self.publish(DomainEventKind::ItemCreated {
            item_code: item.code.clone(),
            item_id: item.id,
        })
        .await;

        Ok(item)
    }

    /// Update an existing item
    pub async fn update_item(&self, code: &str, command: UpdateItem) -> Result<Item, AppError> {
        let existing = self
            .items
            .find_by_code(code)
            .await?
            .ok_or_else(|| item_not_found(code))?;

        let name = command.name.unwrap_or_else(|| existing.name.clone());
        let description = command
            .description
            .unwrap_or_else(|| existing.description.clone());
        let price = command.price.unwrap_or(existing.price);

        let item = existing.with_updated_details(&name, &description, price)?;
        let item = with_optional_parts(
            item,
            category_from(&command.category_name, &command.category_code)?,
            color_from(&command.color_name, &command.color_hex)?,
            dimensions_from(command.dimension_value, &command.dimension_unit)?,
        );

        let item = self.items.save(&item).await?;
        tracing::info!(code = %item.code, "Item updated");

        self.publish_updated(&item).await;
        Ok(item)
    }

    pub async fn get_item(&self, code: &str) -> Result<Option<Item>, AppError> {
        Ok(self.items.find_by_code(code).await?)
    }

    pub async fn list_items(&self) -> Result<Vec<Item>, AppError> {
        Ok(self.items.find_all().await?)
    }

    pub async fn delete_item(&self, code: &str) -> Result<(), AppError> {
        if !self.items.delete_by_code(code).await? {
            return Err(item_not_found(code));
        }
        tracing::info!(code = %code, "Item deleted");
        Ok(())
    }

    /// Release an item for sale
    pub async fn activate_item(&self, code: &str) -> Result<Item, AppError> {
        self.change_state(code, Item::activated).await
    }

    /// Withdraw an item from sale
    pub async fn deactivate_item(&self, code: &str) -> Result<Item, AppError> {
        self.change_state(code, Item::deactivated).await
    }

    async fn change_state(&self, code: &str, transition: fn(Item) -> Item) -> Result<Item, AppError> {
        let existing = self
            .items
            .find_by_code(code)
            .await?
            .ok_or_else(|| item_not_found(code))?;

        let item = self.items.save(&transition(existing)).await?;
        tracing::info!(code = %item.code, state = %item.state, "Item state changed");

        self.publish_updated(&item).await;
        Ok(item)
    }

    async fn publish_updated(&self, item: &Item) {
        self.publish(DomainEventKind::ItemUpdated {
            item_code: item.code.clone(),
            item_id: item.id,
        })
        .await;
    }

    async fn publish(&self, kind: DomainEventKind) {
        if let Err(e) = self.events.publish(DomainEvent::new(kind)).await {
            tracing::warn!(error = %e, "Failed to publish domain event");
        }
    }
}
