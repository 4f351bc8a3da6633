//! System component domain entity
//!
//! Links a system to a catalog item with a quantity and an optional
//! length rule: either a formula (e.g. `frame.Height - 2*profile`) or a
//! fixed length, never both.

use chrono::{DateTime, Utc};
use serde::Serialize;
use uuid::Uuid;

use crate::domain::values::Measure;
use crate::error::DomainError;

/// Unique identifier for a component
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
pub struct ComponentId(pub Uuid);

impl ComponentId {
    pub fn new() -> Self {
        Self(Uuid::new_v4())
    }
}

impl Default for ComponentId {
    fn default() -> Self {
        Self::new()
    }
}

impl std::fmt::Display for ComponentId {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.0)
    }
}

impl std::str::FromStr for ComponentId {
    type Err = DomainError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Uuid::parse_str(s.trim())
            .map(ComponentId)
            .map_err(|_| DomainError::NotFound(format!("Component with id '{}' not found", s)))
    }
}

/// How a component's cut length is determined
#[derive(Debug, Clone, Default, PartialEq)]
pub enum ComponentDimensions {
    #[default]
    Unspecified,
    Formula(String),
    Fixed(Measure),
}

impl ComponentDimensions {
    /// Build dimensions from the raw optional request fields.
    ///
    /// Blank formulas and units count as absent. A formula cannot be combined
    /// with any fixed-length field, and a fixed length needs both its value
    /// and its unit.
    pub fn from_parts(
        length_formula: Option<&str>,
        fixed_value: Option<f64>,
        fixed_unit: Option<&str>,
    ) -> Result<Self, DomainError> {
        let formula = length_formula.map(str::trim).filter(|f| !f.is_empty());
        let unit = fixed_unit.map(str::trim).filter(|u| !u.is_empty());

        match (formula, fixed_value, unit) {
            (None, None, None) => Ok(ComponentDimensions::Unspecified),
            (Some(formula), None, None) => Ok(ComponentDimensions::Formula(formula.to_string())),
            (Some(_), _, _) => Err(DomainError::validation(
                "Cannot specify both length formula and fixed length",
            )),
            (None, Some(value), Some(unit)) => {
                Ok(ComponentDimensions::Fixed(Measure::new(value, unit)?))
            }
            (None, _, _) => Err(DomainError::validation(
                "Both fixed length value and unit must be provided together",
            )),
        }
    }

    /// True when any dimension field was supplied
    pub fn is_requested(
        length_formula: Option<&str>,
        fixed_value: Option<f64>,
        fixed_unit: Option<&str>,
    ) -> bool {
        length_formula.is_some_and(|f| !f.trim().is_empty())
            || fixed_value.is_some()
            || fixed_unit.is_some_and(|u| !u.trim().is_empty())
    }

    pub fn length_formula(&self) -> Option<&str> {
        match self {
            ComponentDimensions::Formula(f) => Some(f),
            _ => None,
        }
    }

    pub fn fixed_length(&self) -> Option<&Measure> {
        match self {
            ComponentDimensions::Fixed(m) => Some(m),
            _ => None,
        }
    }

    pub fn has_formula(&self) -> bool {
        matches!(self, ComponentDimensions::Formula(_))
    }

    pub fn has_fixed_length(&self) -> bool {
        matches!(self, ComponentDimensions::Fixed(_))
    }
}

/// Data needed to create a component
#[derive(Debug, Clone)]
pub struct NewComponent {
    pub system_code: String,
    pub item_code: String,
    pub name: String,
    pub description: Option<String>,
    pub quantity: i32,
    pub dimensions: ComponentDimensions,
    pub is_required: bool,
    pub sort_order: i32,
}

/// A component of a system
#[derive(Debug, Clone, PartialEq)]
pub struct SystemComponent {
    pub id: ComponentId,
    pub system_code: String,
    pub item_code: String,
    pub name: String,
    pub description: String,
    pub quantity: i32,
    pub dimensions: ComponentDimensions,
    pub is_required: bool,
    pub sort_order: i32,
    pub created_at: DateTime<Utc>,
}

impl SystemComponent {
    /// Validate and build a component, reusing `existing_id` when replacing one.
    pub fn create(new: NewComponent, existing_id: Option<ComponentId>) -> Result<Self, DomainError> {
        if new.system_code.trim().is_empty() {
            return Err(DomainError::validation("System code cannot be empty"));
        }
        if new.name.trim().is_empty() {
            return Err(DomainError::validation("Component name cannot be empty"));
        }
        if new.item_code.trim().is_empty() {
            return Err(DomainError::validation("Item code cannot be empty"));
        }
        if new.quantity <= 0 {
            return Err(DomainError::validation("Quantity must be greater than zero"));
        }

        Ok(Self {
            id: existing_id.unwrap_or_default(),
            system_code: new.system_code.trim().to_uppercase(),
            item_code: new.item_code.trim().to_uppercase(),
            name: new.name.trim().to_string(),
            description: new
                .description
                .as_deref()
                .map(str::trim)
                .unwrap_or_default()
                .to_string(),
            quantity: new.quantity,
            dimensions: new.dimensions,
            is_required: new.is_required,
            sort_order: new.sort_order,
            created_at: Utc::now(),
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn new_component() -> NewComponent {
        NewComponent {
            system_code: "wf00".to_string(),
            item_code: "2103".to_string(),
            name: " Frame Vertical ".to_string(),
            description: None,
            quantity: 2,
            dimensions: ComponentDimensions::Formula("frame.Height".to_string()),
            is_required: true,
            sort_order: 0,
        }
    }

    #[test]
    fn create_normalizes_fields() {
        let c = SystemComponent::create(new_component(), None).unwrap();
        assert_eq!(c.system_code, "WF00");
        assert_eq!(c.item_code, "2103");
        assert_eq!(c.name, "Frame Vertical");
        assert_eq!(c.description, "");
        assert_eq!(c.dimensions.length_formula(), Some("frame.Height"));
    }

    #[test]
    fn create_reuses_existing_id() {
        let id = ComponentId::new();
        let c = SystemComponent::create(new_component(), Some(id)).unwrap();
        assert_eq!(c.id, id);
    }

    #[test]
    fn create_rejects_non_positive_quantity() {
        for quantity in [0, -3] {
            let err = SystemComponent::create(
                NewComponent {
                    quantity,
                    ..new_component()
                },
                None,
            )
            .unwrap_err();
            assert!(err.to_string().contains("Quantity must be greater than zero"));
        }
    }

    #[test]
    fn create_rejects_blank_fields() {
        let blank_name = NewComponent {
            name: " ".to_string(),
            ..new_component()
        };
        assert!(SystemComponent::create(blank_name, None).is_err());

        let blank_item = NewComponent {
            item_code: "".to_string(),
            ..new_component()
        };
        assert!(SystemComponent::create(blank_item, None).is_err());

        let blank_system = NewComponent {
            system_code: "".to_string(),
            ..new_component()
        };
        assert!(SystemComponent::create(blank_system, None).is_err());
    }

    #[test]
    fn dimensions_formula_only() {
        let d = ComponentDimensions::from_parts(Some("frame.Width - 10"), None, None).unwrap();
        assert!(d.has_formula());
        assert!(!d.has_fixed_length());
    }

    #[test]
    fn dimensions_fixed_only() {
        let d = ComponentDimensions::from_parts(None, Some(1200.0), Some("MM")).unwrap();
        assert_eq!(d.fixed_length(), Some(&Measure::millimeters(1200.0)));
        assert!(d.length_formula().is_none());
    }

    #[test]
    fn dimensions_nothing_is_unspecified() {
        let d = ComponentDimensions::from_parts(None, None, None).unwrap();
        assert_eq!(d, ComponentDimensions::Unspecified);
        let blank = ComponentDimensions::from_parts(Some("  "), None, Some("")).unwrap();
        assert_eq!(blank, ComponentDimensions::Unspecified);
    }

    #[test]
    fn dimensions_reject_formula_with_fixed_length() {
        let err = ComponentDimensions::from_parts(Some("frame.Height"), Some(10.0), Some("in"))
            .unwrap_err();
        assert!(err.to_string().contains("Cannot specify both"));

        let err =
            ComponentDimensions::from_parts(Some("frame.Height"), None, Some("in")).unwrap_err();
        assert!(err.to_string().contains("Cannot specify both"));
    }

    #[test]
    fn dimensions_reject_partial_fixed_length() {
        let err = ComponentDimensions::from_parts(None, Some(10.0), None).unwrap_err();
        assert!(err.to_string().contains("must be provided together"));
        let err = ComponentDimensions::from_parts(None, None, Some("in")).unwrap_err();
        assert!(err.to_string().contains("must be provided together"));
    }

    #[test]
    fn dimensions_reject_negative_fixed_length() {
        assert!(ComponentDimensions::from_parts(None, Some(-1.0), Some("in")).is_err());
    }

    #[test]
    fn is_requested_detects_any_field() {
        assert!(!ComponentDimensions::is_requested(None, None, None));
        assert!(!ComponentDimensions::is_requested(Some(""), None, Some(" ")));
        assert!(ComponentDimensions::is_requested(Some("x"), None, None));
        assert!(ComponentDimensions::is_requested(None, Some(1.0), None));
        assert!(ComponentDimensions::is_requested(None, None, Some("mm")));
    }

    #[test]
    fn component_id_parse() {
        let id = ComponentId::new();
        assert_eq!(id.to_string().parse::<ComponentId>().unwrap(), id);
        assert!("not-a-uuid".parse::<ComponentId>().is_err());
    }
}
