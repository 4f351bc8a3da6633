//! Domain entities
//!
//! Pure domain models for the product catalog and product design contexts.

pub mod component;
pub mod item;
pub mod system;

pub use component::{ComponentDimensions, ComponentId, NewComponent, SystemComponent};
pub use item::{Item, ItemId};
pub use system::System;

#[cfg(test)]
pub use item::ItemState;
#[cfg(test)]
pub use system::SystemId;

use crate::error::DomainError;

/// Trim and upper-case an item or system code.
///
/// Codes are used as URL path segments, so `/` and control characters
/// are rejected.
pub(crate) fn normalize_code(code: &str, kind: &str) -> Result<String, DomainError> {
    let code = code.trim();
    if code.is_empty() {
        return Err(DomainError::validation(format!("{} code cannot be empty", kind)));
    }
    if code.chars().any(|c| c == '/' || c.is_control()) {
        return Err(DomainError::validation(format!(
            "{} code cannot contain '/' or control characters",
            kind
        )));
    }
    Ok(code.to_uppercase())
}
