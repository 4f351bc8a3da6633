//! HTTP handlers
//!
//! Axum request handlers for the API endpoints.

pub mod components;
pub mod items;
pub mod placeholders;
pub mod systems;

pub use components::{
    add_component, get_component, list_components, remove_component, update_component,
};
pub use items::{
    activate_item, create_item, deactivate_item, delete_item, get_item, list_items, update_item,
};
pub use placeholders::{
    calculate_bom, get_order, list_orders, submit_order, test_component, update_order_status,
    validate_frame,
};
pub use systems::{create_system, get_system, list_systems, update_system};
