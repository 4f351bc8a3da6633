//! Domain layer
//!
//! Contains pure business logic with no external dependencies.
//! - `values`: Shared value objects (measures, colors, categories...)
//! - `entities`: Domain models representing core business concepts
//! - `events`: Domain events raised by use cases
//! - `ports`: Trait definitions for external dependencies

pub mod entities;
pub mod events;
pub mod ports;
pub mod values;
