//! Item domain entity
//!
//! A sellable catalog item (frame profile, glass panel, hardware...).
//! Items are immutable values: every change returns a new `Item` with
//! `modified_at` stamped.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

use crate::domain::values::{Category, Color, Measure};
use crate::error::DomainError;

/// Unique identifier for an item
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct ItemId(pub Uuid);

impl ItemId {
    pub fn new() -> Self {
        Self(Uuid::new_v4())
    }
}

impl Default for ItemId {
    fn default() -> Self {
        Self::new()
    }
}

impl std::fmt::Display for ItemId {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.0)
    }
}

/// Lifecycle state of a catalog item
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum ItemState {
    /// Sellable
    Active,
    /// Withdrawn from sale
    Inactive,
    /// Newly created, not yet released
    Draft,
}

impl std::fmt::Display for ItemState {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            ItemState::Active => write!(f, "Active"),
            ItemState::Inactive => write!(f, "Inactive"),
            ItemState::Draft => write!(f, "Draft"),
        }
    }
}

impl std::str::FromStr for ItemState {
    type Err = DomainError;

    /// Case-sensitive; surrounding whitespace is ignored.
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim() {
            "Active" => Ok(ItemState::Active),
            "Inactive" => Ok(ItemState::Inactive),
            "Draft" => Ok(ItemState::Draft),
            _ => Err(DomainError::validation(format!("Invalid item state: {}", s))),
        }
    }
}

/// A catalog item
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Item {
    pub id: ItemId,
    pub code: String,
    pub name: String,
    pub description: String,
    pub category: Option<Category>,
    pub price: f64,
    pub color: Option<Color>,
    pub dimensions: Option<Measure>,
    pub state: ItemState,
    pub created_at: DateTime<Utc>,
    pub modified_at: Option<DateTime<Utc>>,
}

fn validate_name(name: &str) -> Result<(), DomainError> {
    if name.trim().is_empty() {
        return Err(DomainError::validation("Item name cannot be empty"));
    }
    Ok(())
}

fn validate_price(price: f64) -> Result<(), DomainError> {
    if !price.is_finite() {
        return Err(DomainError::validation("Item price must be a finite number"));
    }
    if price < 0.0 {
        return Err(DomainError::validation("Item price cannot be negative"));
    }
    Ok(())
}

impl Item {
    /// Create a new draft item.
    ///
    /// The code is trimmed and upper-cased; name and description are trimmed.
    pub fn create(
        code: &str,
        name: &str,
        description: &str,
        price: f64,
    ) -> Result<Self, DomainError> {
        let code = super::normalize_code(code, "Item")?;
        validate_name(name)?;
        validate_price(price)?;

        Ok(Self {
            id: ItemId::new(),
            code,
            name: name.trim().to_string(),
            description: description.trim().to_string(),
            category: None,
            price,
            color: None,
            dimensions: None,
            state: ItemState::Draft,
            created_at: Utc::now(),
            modified_at: None,
        })
    }

    pub fn with_updated_details(
        self,
        name: &str,
        description: &str,
        price: f64,
    ) -> Result<Self, DomainError> {
        validate_name(name)?;
        validate_price(price)?;

        Ok(Self {
            name: name.trim().to_string(),
            description: description.trim().to_string(),
            price,
            ..self
        }
        .touched())
    }

    pub fn with_category(self, category: Category) -> Self {
        Self {
            category: Some(category),
            ..self
        }
        .touched()
    }

    pub fn with_color(self, color: Color) -> Self {
        Self {
            color: Some(color),
            ..self
        }
        .touched()
    }

    pub fn with_dimensions(self, dimensions: Measure) -> Self {
        Self {
            dimensions: Some(dimensions),
            ..self
        }
        .touched()
    }

    pub fn activated(self) -> Self {
        Self {
            state: ItemState::Active,
            ..self
        }
        .touched()
    }

    pub fn deactivated(self) -> Self {
        Self {
            state: ItemState::Inactive,
            ..self
        }
        .touched()
    }

    pub fn is_active(&self) -> bool {
        self.state == ItemState::Active
    }

    fn touched(mut self) -> Self {
        self.modified_at = Some(Utc::now());
        self
    }
}
