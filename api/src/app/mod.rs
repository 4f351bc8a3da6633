//! Application layer
//!
//! Contains use cases and service orchestration.
//! Services coordinate between domain entities, ports, and the event publisher.

pub mod catalog_service;
pub mod component_service;
pub mod system_service;

pub use catalog_service::{CatalogService, CreateItem, UpdateItem};
pub use component_service::{AddComponent, ComponentService, UpdateComponent};
pub use system_service::{CreateSystem, SystemService, UpdateSystem};
