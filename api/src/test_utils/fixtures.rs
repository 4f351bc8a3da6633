//! Test fixtures
//!
//! Factory functions for creating test data with sensible defaults.
//! Each fixture function creates a valid entity that can be customized.

use chrono::Utc;

use crate::domain::entities::{
    ComponentDimensions, ComponentId, Item, ItemId, ItemState, System, SystemComponent, SystemId,
};
use crate::domain::values::Category;

/// Create a draft test item with the given code
pub fn test_item(code: &str) -> Item {
    Item {
        id: ItemId::new(),
        code: code.to_uppercase(),
        name: format!("Item {}", code),
        description: "Test item".to_string(),
        category: None,
        price: 25.5,
        color: None,
        dimensions: None,
        state: ItemState::Draft,
        created_at: Utc::now(),
        modified_at: None,
    }
}

/// Create an active window system with the given code
pub fn test_system(code: &str) -> System {
    System {
        id: SystemId::new(),
        code: code.to_uppercase(),
        name: format!("System {}", code),
        description: "Test system".to_string(),
        category: Category::window(),
        colors: Vec::new(),
        size_constraints: None,
        is_active: true,
        created_at: Utc::now(),
        modified_at: None,
    }
}

/// Create an optional component with a length formula
pub fn test_component(system_code: &str, item_code: &str, sort_order: i32) -> SystemComponent {
    SystemComponent {
        id: ComponentId::new(),
        system_code: system_code.to_uppercase(),
        item_code: item_code.to_uppercase(),
        name: format!("Component {}", item_code),
        description: String::new(),
        quantity: 1,
        dimensions: ComponentDimensions::Formula("frame.Height".to_string()),
        is_required: false,
        sort_order,
        created_at: Utc::now(),
    }
}

/// Create a required component
pub fn test_required_component(system_code: &str, item_code: &str) -> SystemComponent {
    SystemComponent {
        is_required: true,
        ..test_component(system_code, item_code, 0)
    }
}
