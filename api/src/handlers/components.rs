//! Component handlers
//!
//! Endpoints for the components of a system.

use axum::{
    extract::{Path, State},
    http::{header, StatusCode},
    Json,
};
use serde::{Deserialize, Serialize};

use super::items::MeasureDto;
use crate::app::{AddComponent, UpdateComponent};
use crate::domain::entities::{ComponentDimensions, ComponentId, SystemComponent};
use crate::error::AppError;
use crate::AppState;

/// Length rule of a component. At most one field is present.
#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct ComponentDimensionsDto {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub length_formula: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub fixed_length: Option<MeasureDto>,
}

impl From<ComponentDimensions> for ComponentDimensionsDto {
    fn from(dimensions: ComponentDimensions) -> Self {
        match dimensions {
            ComponentDimensions::Unspecified => Self {
                length_formula: None,
                fixed_length: None,
            },
            ComponentDimensions::Formula(formula) => Self {
                length_formula: Some(formula),
                fixed_length: None,
            },
            ComponentDimensions::Fixed(measure) => Self {
                length_formula: None,
                fixed_length: Some(measure.into()),
            },
        }
    }
}

/// Component as returned by the component endpoints
#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct ComponentDto {
    pub id: String,
    pub system_code: String,
    pub item_code: String,
    pub name: String,
    pub description: String,
    pub quantity: i32,
    pub dimensions: ComponentDimensionsDto,
    pub is_required: bool,
    pub sort_order: i32,
    pub created_at: String,
}

impl From<SystemComponent> for ComponentDto {
    fn from(c: SystemComponent) -> Self {
        Self {
            id: c.id.to_string(),
            system_code: c.system_code,
            item_code: c.item_code,
            name: c.name,
            description: c.description,
            quantity: c.quantity,
            dimensions: c.dimensions.into(),
            is_required: c.is_required,
            sort_order: c.sort_order,
            created_at: c.created_at.to_rfc3339(),
        }
    }
}

fn default_required() -> bool {
    true
}

/// Request to add a component to a system
#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CreateComponentRequest {
    pub item_code: String,
    pub name: String,
    pub quantity: i32,
    pub description: Option<String>,
    pub length_formula: Option<String>,
    pub fixed_length_value: Option<f64>,
    pub fixed_length_unit: Option<String>,
    #[serde(default = "default_required")]
    pub is_required: bool,
    #[serde(default)]
    pub sort_order: i32,
}

/// Request to update a component; every field is optional
#[derive(Debug, Default, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct UpdateComponentRequest {
    pub name: Option<String>,
    pub quantity: Option<i32>,
    pub description: Option<String>,
    pub length_formula: Option<String>,
    pub fixed_length_value: Option<f64>,
    pub fixed_length_unit: Option<String>,
    pub is_required: Option<bool>,
    pub sort_order: Option<i32>,
}

impl From<UpdateComponentRequest> for UpdateComponent {
    fn from(request: UpdateComponentRequest) -> Self {
        Self {
            name: request.name,
            description: request.description,
            quantity: request.quantity,
            length_formula: request.length_formula,
            fixed_length_value: request.fixed_length_value,
            fixed_length_unit: request.fixed_length_unit,
            is_required: request.is_required,
            sort_order: request.sort_order,
        }
    }
}

/// Response for a newly added component
#[derive(Debug, Serialize)]
pub struct ComponentCreatedResponse {
    pub id: String,
}

/// GET /api/systems/:code/components
///
/// Components of the system ordered by sort order.
pub async fn list_components(
    State(state): State<AppState>,
    Path(code): Path<String>,
) -> Result<Json<Vec<ComponentDto>>, AppError> {
    let components = state.component_service.list_components(&code).await?;
    Ok(Json(components.into_iter().map(ComponentDto::from).collect()))
}

/// POST /api/systems/:code/components
pub async fn add_component(
    State(state): State<AppState>,
    Path(code): Path<String>,
    Json(request): Json<CreateComponentRequest>,
) -> Result<
    (
        StatusCode,
        [(header::HeaderName, String); 1],
        Json<ComponentCreatedResponse>,
    ),
    AppError,
> {
    let component = state
        .component_service
        .add_component(AddComponent {
            system_code: code,
            item_code: request.item_code,
            name: request.name,
            description: request.description,
            quantity: request.quantity,
            length_formula: request.length_formula,
            fixed_length_value: request.fixed_length_value,
            fixed_length_unit: request.fixed_length_unit,
            is_required: request.is_required,
            sort_order: request.sort_order,
        })
        .await?;

    let id = component.id.to_string();
    Ok((
        StatusCode::CREATED,
        [(header::LOCATION, format!("/api/components/{}", id))],
        Json(ComponentCreatedResponse { id }),
    ))
}

/// GET /api/components/:id
pub async fn get_component(
    State(state): State<AppState>,
    Path(id): Path<String>,
) -> Result<Json<ComponentDto>, AppError> {
    let component_id: ComponentId = id.parse()?;
    let component = state
        .component_service
        .get_component(&component_id)
        .await?
        .ok_or_else(|| AppError::NotFound(format!("Component with id '{}' not found", id)))?;

    Ok(Json(component.into()))
}

/// PUT /api/components/:id
pub async fn update_component(
    State(state): State<AppState>,
    Path(id): Path<String>,
    Json(request): Json<UpdateComponentRequest>,
) -> Result<Json<ComponentDto>, AppError> {
    let component_id: ComponentId = id.parse()?;
    let component = state
        .component_service
        .update_component(&component_id, request.into())
        .await?;
    Ok(Json(component.into()))
}

/// DELETE /api/components/:id
pub async fn remove_component(
    State(state): State<AppState>,
    Path(id): Path<String>,
) -> Result<StatusCode, AppError> {
    let component_id: ComponentId = id.parse()?;
    state
        .component_service
        .remove_component(&component_id)
        .await?;
    Ok(StatusCode::NO_CONTENT)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::values::Measure;
    use crate::test_utils::test_component;

    #[test]
    fn parse_create_request_defaults() {
        let json = r#"{"itemCode": "2103", "name": "Frame Vertical", "quantity": 2}"#;
        let request: CreateComponentRequest = serde_json::from_str(json).unwrap();
        assert_eq!(request.item_code, "2103");
        assert!(request.is_required);
        assert_eq!(request.sort_order, 0);
        assert!(request.length_formula.is_none());
        assert!(request.fixed_length_value.is_none());
    }

    #[test]
    fn parse_create_request_full() {
        let json = r#"{
            "itemCode": "2104",
            "name": "Glazing Bead",
            "quantity": 4,
            "description": "Bead",
            "fixedLengthValue": 1200,
            "fixedLengthUnit": "mm",
            "isRequired": false,
            "sortOrder": 3
        }"#;
        let request: CreateComponentRequest = serde_json::from_str(json).unwrap();
        assert_eq!(request.fixed_length_value, Some(1200.0));
        assert_eq!(request.fixed_length_unit.as_deref(), Some("mm"));
        assert!(!request.is_required);
        assert_eq!(request.sort_order, 3);
    }

    #[test]
    fn parse_update_request_partial() {
        let request: UpdateComponentRequest = serde_json::from_str(r#"{"quantity": 5}"#).unwrap();
        assert_eq!(request.quantity, Some(5));
        assert!(request.name.is_none());
        assert!(request.is_required.is_none());
    }

    #[test]
    fn component_dto_with_formula() {
        let json = serde_json::to_value(ComponentDto::from(test_component("WF00", "2103", 1)))
            .unwrap();
        assert_eq!(json["systemCode"], "WF00");
        assert_eq!(json["itemCode"], "2103");
        assert_eq!(json["sortOrder"], 1);
        assert_eq!(json["dimensions"]["lengthFormula"], "frame.Height");
        assert!(json["dimensions"].get("fixedLength").is_none());
    }

    #[test]
    fn component_dto_with_fixed_length() {
        let component = SystemComponent {
            dimensions: ComponentDimensions::Fixed(Measure::inches(36.0)),
            ..test_component("WF00", "2103", 0)
        };
        let json = serde_json::to_value(ComponentDto::from(component)).unwrap();
        assert_eq!(json["dimensions"]["fixedLength"]["value"], 36.0);
        assert_eq!(json["dimensions"]["fixedLength"]["unit"], "in");
        assert!(json["dimensions"].get("lengthFormula").is_none());
    }
}
