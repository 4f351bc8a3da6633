//! HTTP client for the AGS API
//!
//! Typed wrapper over the catalog, systems and components endpoints.
//! Responses are returned as JSON values for display.

use anyhow::{Context, Result};
use reqwest::header::{HeaderMap, HeaderValue, ACCEPT, CONTENT_TYPE};
use serde::Serialize;
use serde_json::Value;

/// HTTP client for communicating with the AGS API
#[derive(Clone)]
pub struct AgsClient {
    client: reqwest::Client,
    base_url: String,
}

impl AgsClient {
    pub fn new(base_url: &str) -> Result<Self> {
        let mut headers = HeaderMap::new();
        headers.insert(ACCEPT, HeaderValue::from_static("application/json"));
        headers.insert(CONTENT_TYPE, HeaderValue::from_static("application/json"));

        let client = reqwest::Client::builder()
            .default_headers(headers)
            .build()
            .context("Failed to build HTTP client")?;

        Ok(Self {
            client,
            base_url: base_url.trim_end_matches('/').to_string(),
        })
    }

    #[cfg(test)]
    pub fn base_url(&self) -> &str {
        &self.base_url
    }

    pub async fn health(&self) -> Result<Value> {
        self.get_json("/health").await
    }

    // --- Items ---

    pub async fn list_items(&self) -> Result<Value> {
        self.get_json("/api/items").await
    }

    pub async fn get_item(&self, code: &str) -> Result<Value> {
        self.get_json(&format!("/api/items/{}", code)).await
    }

    pub async fn create_item(&self, request: &CreateItemRequest) -> Result<Value> {
        self.send_json(reqwest::Method::POST, "/api/items", request)
            .await
    }

    pub async fn update_item(&self, code: &str, request: &UpdateItemRequest) -> Result<Value> {
        self.send_json(reqwest::Method::PUT, &format!("/api/items/{}", code), request)
            .await
    }

    pub async fn delete_item(&self, code: &str) -> Result<Value> {
        self.delete(&format!("/api/items/{}", code)).await
    }

    pub async fn activate_item(&self, code: &str) -> Result<Value> {
        self.send_json(
            reqwest::Method::POST,
            &format!("/api/items/{}/activate", code),
            &serde_json::json!({}),
        )
        .await
    }

    pub async fn deactivate_item(&self, code: &str) -> Result<Value> {
        self.send_json(
            reqwest::Method::POST,
            &format!("/api/items/{}/deactivate", code),
            &serde_json::json!({}),
        )
        .await
    }

    // --- Systems ---

    pub async fn list_systems(&self) -> Result<Value> {
        self.get_json("/api/systems").await
    }

    pub async fn get_system(&self, code: &str) -> Result<Value> {
        self.get_json(&format!("/api/systems/{}", code)).await
    }

    pub async fn create_system(&self, request: &CreateSystemRequest) -> Result<Value> {
        self.send_json(reqwest::Method::POST, "/api/systems", request)
            .await
    }

    pub async fn update_system(&self, code: &str, request: &UpdateSystemRequest) -> Result<Value> {
        self.send_json(
            reqwest::Method::PUT,
            &format!("/api/systems/{}", code),
            request,
        )
        .await
    }

    // --- Components ---

    pub async fn list_components(&self, system_code: &str) -> Result<Value> {
        self.get_json(&format!("/api/systems/{}/components", system_code))
            .await
    }

    pub async fn get_component(&self, id: &str) -> Result<Value> {
        self.get_json(&format!("/api/components/{}", id)).await
    }

    /// Returns `{ "id": ... }` of the new component
    pub async fn add_component(
        &self,
        system_code: &str,
        request: &CreateComponentRequest,
    ) -> Result<Value> {
        self.send_json(
            reqwest::Method::POST,
            &format!("/api/systems/{}/components", system_code),
            request,
        )
        .await
    }

    pub async fn update_component(
        &self,
        id: &str,
        request: &UpdateComponentRequest,
    ) -> Result<Value> {
        self.send_json(
            reqwest::Method::PUT,
            &format!("/api/components/{}", id),
            request,
        )
        .await
    }

    pub async fn remove_component(&self, id: &str) -> Result<Value> {
        self.delete(&format!("/api/components/{}", id)).await
    }

    // --- Internal helpers ---

    async fn get_json(&self, path: &str) -> Result<Value> {
        let url = format!("{}{}", self.base_url, path);
        let response = self
            .client
            .get(&url)
            .send()
            .await
            .with_context(|| format!("Failed to GET {}", path))?;

        handle_json_response(response).await
    }

    async fn send_json<T: Serialize>(
        &self,
        method: reqwest::Method,
        path: &str,
        body: &T,
    ) -> Result<Value> {
        let url = format!("{}{}", self.base_url, path);
        let response = self
            .client
            .request(method.clone(), &url)
            .json(body)
            .send()
            .await
            .with_context(|| format!("Failed to {} {}", method, path))?;

        handle_json_response(response).await
    }

    async fn delete(&self, path: &str) -> Result<Value> {
        let url = format!("{}{}", self.base_url, path);
        let response = self
            .client
            .delete(&url)
            .send()
            .await
            .with_context(|| format!("Failed to DELETE {}", path))?;

        handle_json_response(response).await
    }
}

/// Empty bodies (204) come back as `Value::Null`
async fn handle_json_response(response: reqwest::Response) -> Result<Value> {
    let status = response.status();
    let body = response
        .text()
        .await
        .context("Failed to read response body")?;

    if !status.is_success() {
        let message = serde_json::from_str::<Value>(&body)
            .ok()
            .and_then(|v| v.get("message").and_then(Value::as_str).map(str::to_string))
            .unwrap_or(body);
        anyhow::bail!("API error ({}): {}", status, message);
    }

    if body.trim().is_empty() {
        return Ok(Value::Null);
    }
    serde_json::from_str(&body).context("Failed to parse response JSON")
}

// --- Request Types ---

#[derive(Debug, Default, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct CreateItemRequest {
    pub code: String,
    pub name: String,
    pub description: String,
    pub price: f64,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub category_name: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub category_code: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub color_name: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub color_hex: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub dimension_value: Option<f64>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub dimension_unit: Option<String>,
}

#[derive(Debug, Default, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct UpdateItemRequest {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub name: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub price: Option<f64>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub category_name: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub category_code: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub color_name: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub color_hex: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub dimension_value: Option<f64>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub dimension_unit: Option<String>,
}

#[derive(Debug, Serialize)]
pub struct CategoryRequest {
    pub name: String,
    pub code: String,
}

#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct CreateSystemRequest {
    pub code: String,
    pub name: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,
    pub category: CategoryRequest,
}

#[derive(Debug, Default, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct UpdateSystemRequest {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub name: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub is_active: Option<bool>,
}

#[derive(Debug, Default, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct CreateComponentRequest {
    pub item_code: String,
    pub name: String,
    pub quantity: i32,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub length_formula: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub fixed_length_value: Option<f64>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub fixed_length_unit: Option<String>,
    pub is_required: bool,
    pub sort_order: i32,
}

#[derive(Debug, Default, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct UpdateComponentRequest {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub name: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub quantity: Option<i32>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub length_formula: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub fixed_length_value: Option<f64>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub fixed_length_unit: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub is_required: Option<bool>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub sort_order: Option<i32>,
}
