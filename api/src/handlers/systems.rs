//! System handlers
//!
//! Endpoints for product systems.

use axum::{
    extract::{Path, State},
    http::{header, StatusCode},
    Json,
};
use serde::{Deserialize, Serialize};

use super::items::{CategoryDto, ColorDto};
use crate::app::{CreateSystem, UpdateSystem};
use crate::domain::entities::System;
use crate::domain::values::{Category, Color, SizeConstraints};
use crate::error::{AppError, DomainError};
use crate::AppState;

#[derive(Debug, Serialize, Deserialize, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct SizeConstraintsDto {
    pub min_height: f64,
    pub max_height: f64,
    pub min_width: f64,
    pub max_width: f64,
}

impl From<SizeConstraints> for SizeConstraintsDto {
    fn from(c: SizeConstraints) -> Self {
        Self {
            min_height: c.min_height,
            max_height: c.max_height,
            min_width: c.min_width,
            max_width: c.max_width,
        }
    }
}

impl TryFrom<SizeConstraintsDto> for SizeConstraints {
    type Error = DomainError;

    fn try_from(dto: SizeConstraintsDto) -> Result<Self, Self::Error> {
        SizeConstraints::new(dto.min_height, dto.max_height, dto.min_width, dto.max_width)
    }
}

/// Category fields in a request body
#[derive(Debug, Deserialize)]
pub struct CategoryRequest {
    pub name: String,
    pub code: String,
}

#[derive(Debug, Deserialize)]
pub struct ColorRequest {
    pub name: String,
    pub hex: String,
}

fn to_colors(colors: Vec<ColorRequest>) -> Result<Vec<Color>, DomainError> {
    colors
        .into_iter()
        .map(|c| Color::new(&c.name, &c.hex))
        .collect()
}

/// System as returned by the system endpoints
#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct SystemDto {
    pub id: String,
    pub code: String,
    pub name: String,
    pub description: String,
    pub category: CategoryDto,
    pub colors: Vec<ColorDto>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub size_constraints: Option<SizeConstraintsDto>,
    pub is_active: bool,
    pub created_at: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub modified_at: Option<String>,
}

impl From<System> for SystemDto {
    fn from(system: System) -> Self {
        Self {
            id: system.id.to_string(),
            code: system.code,
            name: system.name,
            description: system.description,
            category: system.category.into(),
            colors: system.colors.into_iter().map(ColorDto::from).collect(),
            size_constraints: system.size_constraints.map(SizeConstraintsDto::from),
            is_active: system.is_active,
            created_at: system.created_at.to_rfc3339(),
            modified_at: system.modified_at.map(|t| t.to_rfc3339()),
        }
    }
}

/// Request to create a system
#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CreateSystemRequest {
    pub code: String,
    pub name: String,
    pub description: Option<String>,
    pub category: CategoryRequest,
    #[serde(default)]
    pub colors: Vec<ColorRequest>,
    pub size_constraints: Option<SizeConstraintsDto>,
}

impl TryFrom<CreateSystemRequest> for CreateSystem {
    type Error = DomainError;

    fn try_from(request: CreateSystemRequest) -> Result<Self, Self::Error> {
        Ok(Self {
            code: request.code,
            name: request.name,
            description: request.description,
            category: Category::new(&request.category.name, &request.category.code)?,
            colors: to_colors(request.colors)?,
            size_constraints: request
                .size_constraints
                .map(SizeConstraints::try_from)
                .transpose()?,
        })
    }
}

/// Request to update a system; every field is optional
#[derive(Debug, Default, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct UpdateSystemRequest {
    pub name: Option<String>,
    pub description: Option<String>,
    pub colors: Option<Vec<ColorRequest>>,
    pub size_constraints: Option<SizeConstraintsDto>,
    pub is_active: Option<bool>,
}

impl TryFrom<UpdateSystemRequest> for UpdateSystem {
    type Error = DomainError;

    fn try_from(request: UpdateSystemRequest) -> Result<Self, Self::Error> {
        Ok(Self {
            name: request.name,
            description: request.description,
            colors: request.colors.map(to_colors).transpose()?,
            size_constraints: request
                .size_constraints
                .map(SizeConstraints::try_from)
                .transpose()?,
            is_active: request.is_active,
        })
    }
}

/// GET /api/systems
pub async fn list_systems(State(state): State<AppState>) -> Result<Json<Vec<SystemDto>>, AppError> {
    let systems = state.system_service.list_systems().await?;
    Ok(Json(systems.into_iter().map(SystemDto::from).collect()))
}

/// GET /api/systems/:code
pub async fn get_system(
    State(state): State<AppState>,
    Path(code): Path<String>,
) -> Result<Json<SystemDto>, AppError> {
    let system = state
        .system_service
        .get_system(&code)
        .await?
        .ok_or_else(|| AppError::NotFound(format!("System with code '{}' not found", code)))?;

    Ok(Json(system.into()))
}

/// POST /api/systems
pub async fn create_system(
    State(state): State<AppState>,
    Json(request): Json<CreateSystemRequest>,
) -> Result<(StatusCode, [(header::HeaderName, String); 1], Json<SystemDto>), AppError> {
    let system = state
        .system_service
        .create_system(request.try_into()?)
        .await?;
    let location = format!("/api/systems/{}", urlencoding::encode(&system.code));

    Ok((
        StatusCode::CREATED,
        [(header::LOCATION, location)],
        Json(system.into()),
    ))
}

/// PUT /api/systems/:code
pub async fn update_system(
    State(state): State<AppState>,
    Path(code): Path<String>,
    Json(request): Json<UpdateSystemRequest>,
) -> Result<Json<SystemDto>, AppError> {
    let system = state
        .system_service
        .update_system(&code, request.try_into()?)
        .await?;
    Ok(Json(system.into()))
}
