//! Category value object

use serde::{Deserialize, Serialize};

use crate::error::DomainError;

/// Product category (name plus short upper-case code)
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Category {
    pub name: String,
    pub code: String,
}

impl Category {
    pub fn new(name: &str, code: &str) -> Result<Self, DomainError> {
        if name.trim().is_empty() {
            return Err(DomainError::validation("Category name cannot be empty"));
        }
        if code.trim().is_empty() {
            return Err(DomainError::validation("Category code cannot be empty"));
        }

        Ok(Self {
            name: name.trim().to_string(),
            code: code.trim().to_uppercase(),
        })
    }

    fn preset(name: &str, code: &str) -> Self {
        Self {
            name: name.to_string(),
            code: code.to_string(),
        }
    }

    pub fn window() -> Self {
        Self::preset("Window", "WIN")
    }

    pub fn door() -> Self {
        Self::preset("Door", "DOOR")
    }

    pub fn frame() -> Self {
        Self::preset("Frame", "FRAME")
    }

    pub fn hardware() -> Self {
        Self::preset("Hardware", "HW")
    }

    pub fn glass() -> Self {
        Self::preset("Glass", "GLASS")
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn new_normalizes_fields() {
        let c = Category::new(" Railing ", " rail ").unwrap();
        assert_eq!(c.name, "Railing");
        assert_eq!(c.code, "RAIL");
    }

    #[test]
    fn rejects_blank_fields() {
        assert!(Category::new("", "X").is_err());
        assert!(Category::new("X", "  ").is_err());
    }

    #[test]
    fn presets() {
        assert_eq!(Category::window().code, "WIN");
        assert_eq!(Category::door().code, "DOOR");
        assert_eq!(Category::frame().code, "FRAME");
        assert_eq!(Category::hardware().code, "HW");
        assert_eq!(Category::glass().code, "GLASS");
    }
}
