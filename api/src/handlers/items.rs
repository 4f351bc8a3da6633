//! Item handlers
//!
//! Endpoints for the item catalog.

use axum::{
    extract::{Path, State},
    http::{header, StatusCode},
    Json,
};
use serde::{Deserialize, Serialize};

use crate::app::{CreateItem, UpdateItem};
use crate::domain::entities::Item;
use crate::domain::values::{Category, Color, Measure};
use crate::error::AppError;
use crate::AppState;

/// Category as exposed over HTTP
#[derive(Debug, Serialize)]
pub struct CategoryDto {
    pub name: String,
    pub code: String,
}

impl From<Category> for CategoryDto {
    fn from(category: Category) -> Self {
        Self {
            name: category.name,
            code: category.code,
        }
    }
}

#[derive(Debug, Serialize)]
pub struct ColorDto {
    pub name: String,
    pub hex: String,
}

impl From<Color> for ColorDto {
    fn from(color: Color) -> Self {
        Self {
            name: color.name,
            hex: color.hex,
        }
    }
}

#[derive(Debug, Serialize)]
pub struct MeasureDto {
    pub value: f64,
    pub unit: String,
}

impl From<Measure> for MeasureDto {
    fn from(measure: Measure) -> Self {
        Self {
            value: measure.value,
            unit: measure.unit,
        }
    }
}

/// Item as returned by every item endpoint
#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct ItemDto {
    pub id: String,
    pub code: String,
    pub name: String,
    pub description: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub category: Option<CategoryDto>,
    pub price: f64,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub color: Option<ColorDto>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub dimensions: Option<MeasureDto>,
    pub state: String,
    pub is_active: bool,
    pub created_at: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub modified_at: Option<String>,
}

impl From<Item> for ItemDto {
    fn from(item: Item) -> Self {
        Self {
            id: item.id.to_string(),
            is_active: item.is_active(),
            state: item.state.to_string(),
            code: item.code,
            name: item.name,
            description: item.description,
            category: item.category.map(CategoryDto::from),
            price: item.price,
            color: item.color.map(ColorDto::from),
            dimensions: item.dimensions.map(MeasureDto::from),
            created_at: item.created_at.to_rfc3339(),
            modified_at: item.modified_at.map(|t| t.to_rfc3339()),
        }
    }
}

/// Request to create an item
#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CreateItemRequest {
    pub code: String,
    pub name: String,
    pub description: Option<String>,
    pub price: f64,
    pub category_name: Option<String>,
    pub category_code: Option<String>,
    pub color_name: Option<String>,
    pub color_hex: Option<String>,
    pub dimension_value: Option<f64>,
    pub dimension_unit: Option<String>,
}

impl From<CreateItemRequest> for CreateItem {
    fn from(request: CreateItemRequest) -> Self {
        Self {
            code: request.code,
            name: request.name,
            description: request.description,
            price: request.price,
            category_name: request.category_name,
            category_code: request.category_code,
            color_name: request.color_name,
            color_hex: request.color_hex,
            dimension_value: request.dimension_value,
            dimension_unit: request.dimension_unit,
        }
    }
}

/// Request to update an item; every field is optional
#[derive(Debug, Default, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct UpdateItemRequest {
    pub name: Option<String>,
    pub description: Option<String>,
    pub price: Option<f64>,
    pub category_name: Option<String>,
    pub category_code: Option<String>,
    pub color_name: Option<String>,
    pub color_hex: Option<String>,
    pub dimension_value: Option<f64>,
    pub dimension_unit: Option<String>,
}

impl From<UpdateItemRequest> for UpdateItem {
    fn from(request: UpdateItemRequest) -> Self {
        Self {
            name: request.name,
            description: request.description,
            price: request.price,
            category_name: request.category_name,
            category_code: request.category_code,
            color_name: request.color_name,
            color_hex: request.color_hex,
            dimension_value: request.dimension_value,
            dimension_unit: request.dimension_unit,
        }
    }
}

/// GET /api/items
pub async fn list_items(State(state): State<AppState>) -> Result<Json<Vec<ItemDto>>, AppError> {
    let items = state.catalog_service.list_items().await?;
    Ok(Json(items.into_iter().map(ItemDto::from).collect()))
}

/// GET /api/items/:code
pub async fn get_item(
    State(state): State<AppState>,
    Path(code): Path<String>,
) -> Result<Json<ItemDto>, AppError> {
    let item = state
        .catalog_service
        .get_item(&code)
        .await?
        .ok_or_else(|| AppError::NotFound(format!("Item with code '{}' not found", code)))?;

    Ok(Json(item.into()))
}

/// POST /api/items
///
/// Create a draft item. Responds 201 with a Location header.
pub async fn create_item(
    State(state): State<AppState>,
    Json(request): Json<CreateItemRequest>,
) -> Result<(StatusCode, [(header::HeaderName, String); 1], Json<ItemDto>), AppError> {
    let item = state.catalog_service.create_item(request.into()).await?;
    let location = format!("/api/items/{}", urlencoding::encode(&item.code));

    Ok((
        StatusCode::CREATED,
        [(header::LOCATION, location)],
        Json(item.into()),
    ))
}

/// PUT /api/items/:code
pub async fn update_item(
    State(state): State<AppState>,
    Path(code): Path<String>,
    Json(request): Json<UpdateItemRequest>,
) -> Result<Json<ItemDto>, AppError> {
    let item = state
        .catalog_service
        .update_item(&code, request.into())
        .await?;
    Ok(Json(item.into()))
}

/// DELETE /api/items/:code
pub async fn delete_item(
    State(state): State<AppState>,
    Path(code): Path<String>,
) -> Result<StatusCode, AppError> {
    state.catalog_service.delete_item(&code).await?;
    Ok(StatusCode::NO_CONTENT)
}

/// POST /api/items/:code/activate
pub async fn activate_item(
    State(state): State<AppState>,
    Path(code): Path<String>,
) -> Result<Json<ItemDto>, AppError> {
    let item = state.catalog_service.activate_item(&code).await?;
    Ok(Json(item.into()))
}

/// POST /api/items/:code/deactivate
pub async fn deactivate_item(
    State(state): State<AppState>,
    Path(code): Path<String>,
) -> Result<Json<ItemDto>, AppError> {
    let item = state.catalog_service.deactivate_item(&code).await?;
    Ok(Json(item.into()))
}
