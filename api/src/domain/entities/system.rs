//! System domain entity
//!
//! A configurable product template (a window, door or railing system)
//! that components are attached to.

use chrono::{DateTime, Utc};
use serde::Serialize;
use uuid::Uuid;

use crate::domain::values::{Category, Color, SizeConstraints};
use crate::error::DomainError;

/// Unique identifier for a system
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
pub struct SystemId(pub Uuid);

impl SystemId {
    pub fn new() -> Self {
        Self(Uuid::new_v4())
    }
}

impl Default for SystemId {
    fn default() -> Self {
        Self::new()
    }
}

impl std::fmt::Display for SystemId {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.0)
    }
}

/// A buildable product system
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct System {
    pub id: SystemId,
    pub code: String,
    pub name: String,
    pub description: String,
    pub category: Category,
    pub colors: Vec<Color>,
    pub size_constraints: Option<SizeConstraints>,
    pub is_active: bool,
    pub created_at: DateTime<Utc>,
    pub modified_at: Option<DateTime<Utc>>,
}

impl System {
    /// Create a new active system. The code is trimmed and upper-cased.
    pub fn new(
        code: &str,
        name: &str,
        description: &str,
        category: Category,
    ) -> Result<Self, DomainError> {
        let code = super::normalize_code(code, "System")?;
        if name.trim().is_empty() {
            return Err(DomainError::validation("System name cannot be empty"));
        }

        Ok(Self {
            id: SystemId::new(),
            code,
            name: name.trim().to_string(),
            description: description.trim().to_string(),
            category,
            colors: Vec::new(),
            size_constraints: None,
            is_active: true,
            created_at: Utc::now(),
            modified_at: None,
        })
    }

    pub fn with_updated_details(self, name: &str, description: &str) -> Result<Self, DomainError> {
        if name.trim().is_empty() {
            return Err(DomainError::validation("System name cannot be empty"));
        }

        Ok(Self {
            name: name.trim().to_string(),
            description: description.trim().to_string(),
            ..self
        }
        .touched())
    }

    pub fn with_colors(self, colors: Vec<Color>) -> Self {
        Self { colors, ..self }.touched()
    }

    pub fn with_size_constraints(self, constraints: SizeConstraints) -> Self {
        Self {
            size_constraints: Some(constraints),
            ..self
        }
        .touched()
    }

    pub fn activated(self) -> Self {
        Self {
            is_active: true,
            ..self
        }
        .touched()
    }

    pub fn deactivated(self) -> Self {
        Self {
            is_active: false,
            ..self
        }
        .touched()
    }

    fn touched(mut self) -> Self {
        self.modified_at = Some(Utc::now());
        self
    }
}
