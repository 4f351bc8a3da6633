//! Domain events
//!
//! Facts raised by the use cases after a successful state change.

use chrono::{DateTime, Utc};
use serde::Serialize;
use uuid::Uuid;

use super::entities::{ComponentId, ItemId};

/// What happened
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(tag = "type")]
pub enum DomainEventKind {
    ItemCreated {
        item_code: String,
        item_id: ItemId,
    },
    ItemUpdated {
        item_code: String,
        item_id: ItemId,
    },
    SystemComponentUpdated {
        system_code: String,
        component_id: ComponentId,
        item_code: String,
        old_quantity: i32,
        new_quantity: i32,
    },
    SystemComponentRemoved {
        system_code: String,
        component_id: ComponentId,
        item_code: String,
        quantity: i32,
    },
}

impl DomainEventKind {
    pub fn name(&self) -> &'static str {
        match self {
            DomainEventKind::ItemCreated { .. } => "ItemCreated",
            DomainEventKind::ItemUpdated { .. } => "ItemUpdated",
            DomainEventKind::SystemComponentUpdated { .. } => "SystemComponentUpdated",
            DomainEventKind::SystemComponentRemoved { .. } => "SystemComponentRemoved",
        }
    }
}

/// An event envelope with identity and timestamp
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct DomainEvent {
    pub event_id: Uuid,
    pub occurred_on: DateTime<Utc>,
    #[serde(flatten)]
    pub kind: DomainEventKind,
}

impl DomainEvent {
    pub fn new(kind: DomainEventKind) -> Self {
        Self {
            event_id: Uuid::new_v4(),
            occurred_on: Utc::now(),
            kind,
        }
    }
}

impl From<DomainEventKind> for DomainEvent {
    fn from(kind: DomainEventKind) -> Self {
        Self::new(kind)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn events_get_unique_ids() {
        let kind = DomainEventKind::ItemCreated {
            item_code: "2103".to_string(),
            item_id: ItemId::new(),
        };
        let a = DomainEvent::new(kind.clone());
        let b = DomainEvent::new(kind);
        assert_ne!(a.event_id, b.event_id);
    }

    #[test]
    fn serializes_with_type_tag() {
        let event = DomainEvent::new(DomainEventKind::SystemComponentRemoved {
            system_code: "WF00".to_string(),
            component_id: ComponentId::new(),
            item_code: "2103".to_string(),
            quantity: 2,
        });
        let json = serde_json::to_value(&event).unwrap();
        assert_eq!(json["type"], "SystemComponentRemoved");
        assert_eq!(json["system_code"], "WF00");
        assert_eq!(json["quantity"], 2);
        assert!(json["event_id"].is_string());
    }

    #[test]
    fn event_names() {
        let kind = DomainEventKind::ItemUpdated {
            item_code: "A".to_string(),
            item_id: ItemId::new(),
        };
        assert_eq!(kind.name(), "ItemUpdated");
    }
}
