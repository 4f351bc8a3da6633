//! Component service
//!
//! Attaches catalog items to systems and maintains the resulting
//! components (quantity, length rule, ordering).

use std::sync::Arc;

use crate::app::system_service::system_not_found;
use crate::domain::entities::{ComponentDimensions, ComponentId, NewComponent, SystemComponent};
use crate::domain::events::{DomainEvent, DomainEventKind};
use crate::domain::ports::{
    EventPublisher, ItemRepository, SystemComponentRepository, SystemRepository,
};
use crate::error::{AppError, DomainError};

/// Input for adding a component to a system
#[derive(Debug, Clone, Default)]
pub struct AddComponent {
    pub system_code: String,
    pub item_code: String,
    pub name: String,
    pub description: Option<String>,
    pub quantity: i32,
    pub length_formula: Option<String>,
    pub fixed_length_value: Option<f64>,
    pub fixed_length_unit: Option<String>,
    pub is_required: bool,
    pub sort_order: i32,
}

/// Input for updating a component. Omitted fields keep their current value;
/// the length rule is only rebuilt when one of its fields is given.
#[derive(Debug, Clone, Default)]
pub struct UpdateComponent {
    pub name: Option<String>,
    pub description: Option<String>,
    pub quantity: Option<i32>,
    pub length_formula: Option<String>,
    pub fixed_length_value: Option<f64>,
    pub fixed_length_unit: Option<String>,
    pub is_required: Option<bool>,
    pub sort_order: Option<i32>,
}

fn component_not_found(id: &ComponentId) -> AppError {
    AppError::Domain(DomainError::NotFound(format!(
        "Component with id '{}' not found",
        id
    )))
}

/// Service for managing system components
pub struct ComponentService<SR, CR, IR, EP>
where
    SR: SystemRepository,
    CR: SystemComponentRepository,
    IR: ItemRepository,
    EP: EventPublisher,
{
    systems: Arc<SR>,
    components: Arc<CR>,
    items: Arc<IR>,
    events: Arc<EP>,
}

impl<SR, CR, IR, EP> ComponentService<SR, CR, IR, EP>
where
    SR: SystemRepository,
    CR: SystemComponentRepository,
    IR: ItemRepository,
    EP: EventPublisher,
{
    pub fn new(systems: Arc<SR>, components: Arc<CR>, items: Arc<IR>, events: Arc<EP>) -> Self {
        Self {
            systems,
            components,
            items,
            events,
        }
    }

    /// Add an item to a system as a new component
    pub async fn add_component(&self, command: AddComponent) -> Result<SystemComponent, AppError> {
        if !self.systems.exists_by_code(&command.system_code).await? {
            return Err(system_not_found(&command.system_code));
        }
        if !self.items.exists_by_code(&command.item_code).await? {
            return Err(AppError::Domain(DomainError::NotFound(format!(
                "Item with code '{}' not found",
                command.item_code
            ))));
        }
        if self
            .components
            .exists_by_system_and_item(&command.system_code, &command.item_code)
            .await?
        {
            tracing::warn!(
                system = %command.system_code,
                item = %command.item_code,
                "Rejected duplicate component"
            );
            return Err(AppError::Domain(DomainError::AlreadyExists(format!(
                "Component with item '{}' already exists in system '{}'",
                command.item_code, command.system_code
            ))));
        }

        let dimensions = ComponentDimensions::from_parts(
            command.length_formula.as_deref(),
            command.fixed_length_value,
            command.fixed_length_unit.as_deref(),
        )?;

        let component = SystemComponent::create(
            NewComponent {
                system_code: command.system_code,
                item_code: command.item_code,
                name: command.name,
                description: command.description,
                quantity: command.quantity,
                dimensions,
                is_required: command.is_required,
                sort_order: command.sort_order,
            },
            None,
        )?;

        let component = self.components.save(&component).await?;
        tracing::info!(
            id = %component.id,
            system = %component.system_code,
            item = %component.item_code,
            "Component added"
        );
        Ok(component)
    }

    /// Update a component in place, keeping its identity and creation time
    pub async fn update_component(
        &self,
        id: &ComponentId,
        command: UpdateComponent,
    ) -> Result<SystemComponent, AppError> {
        let existing = self
            .components
            .find_by_id(id)
            .await?
            .ok_or_else(|| component_not_found(id))?;

        let dimensions = if ComponentDimensions::is_requested(
            command.length_formula.as_deref(),
            command.fixed_length_value,
            command.fixed_length_unit.as_deref(),
        ) {
            ComponentDimensions::from_parts(
                command.length_formula.as_deref(),
                command.fixed_length_value,
                command.fixed_length_unit.as_deref(),
            )?
        } else {
            existing.dimensions.clone()
        };

        let old_quantity = existing.quantity;
        let mut component = SystemComponent::create(
            NewComponent {
                system_code: existing.system_code.clone(),
                item_code: existing.item_code.clone(),
                name: command.name.unwrap_or_else(|| existing.name.clone()),
                description: command
                    .description
                    .or_else(|| Some(existing.description.clone())),
                quantity: command.quantity.unwrap_or(existing.quantity),
                dimensions,
                is_required: command.is_required.unwrap_or(existing.is_required),
                sort_order: command.sort_order.unwrap_or(existing.sort_order),
            },
            Some(existing.id),
        )?;
        component.created_at = existing.created_at;

        let component = self.components.save(&component).await?;
        tracing::info!(id = %component.id, "Component updated");

        self.publish(DomainEventKind::SystemComponentUpdated {
            system_code: component.system_code.clone(),
            component_id: component.id,
            item_code: component.item_code.clone(),
            old_quantity,
            new_quantity: component.quantity,
        })
        .await;

        Ok(component)
    }

    /// Remove an optional component from its system
    pub async fn remove_component(&self, id: &ComponentId) -> Result<(), AppError> {
        let component = self
            .components
            .find_by_id(id)
            .await?
            .ok_or_else(|| component_not_found(id))?;

        if component.is_required {
            tracing::warn!(id = %component.id, "Rejected removal of required component");
            return Err(AppError::Domain(DomainError::business_rule(
                "component.required",
                format!(
                    "Cannot remove required component '{}' from system '{}'",
                    component.name, component.system_code
                ),
            )));
        }

        if !self.components.delete(id).await? {
            return Err(component_not_found(id));
        }
        tracing::info!(id = %component.id, system = %component.system_code, "Component removed");

        self.publish(DomainEventKind::SystemComponentRemoved {
            system_code: component.system_code,
            component_id: component.id,
            item_code: component.item_code,
            quantity: component.quantity,
        })
        .await;

        Ok(())
    }

    pub async fn get_component(&self, id: &ComponentId) -> Result<Option<SystemComponent>, AppError> {
        Ok(self.components.find_by_id(id).await?)
    }

    /// Components of a system ordered by sort order.
    ///
    /// An unknown system simply has no components.
    pub async fn list_components(&self, system_code: &str) -> Result<Vec<SystemComponent>, AppError> {
        let mut components = self.components.find_by_system_code(system_code).await?;
        components.sort_by(|a, b| {
            a.sort_order
                .cmp(&b.sort_order)
                .then_with(|| a.created_at.cmp(&b.created_at))
        });
        Ok(components)
    }

    async fn publish(&self, kind: DomainEventKind) {
        if let Err(e) = self.events.publish(DomainEvent::new(kind)).await {
            tracing::warn!(error = %e, "Failed to publish domain event");
        }
    }
}
