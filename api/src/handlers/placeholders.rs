//! Placeholder handlers
//!
//! Orders and calculations have no engine behind them yet. These endpoints
//! keep the HTTP contract alive with fixed responses.

use axum::{extract::Path, http::StatusCode, Json};
use serde_json::{json, Value};

/// POST /api/components/:id/test
pub async fn test_component(Path(id): Path<String>) -> Json<Value> {
    Json(json!({
        "result": 0,
        "message": format!("Component {} test calculation (placeholder)", id),
    }))
}

/// POST /api/orders
pub async fn submit_order() -> (StatusCode, Json<Value>) {
    (
        StatusCode::CREATED,
        Json(json!({
            "id": "placeholder-order-id",
            "message": "Order submitted (placeholder)",
        })),
    )
}

/// GET /api/orders
pub async fn list_orders() -> Json<Value> {
    Json(json!([{ "id": "placeholder", "status": "New" }]))
}

/// GET /api/orders/:id
pub async fn get_order(Path(id): Path<String>) -> Json<Value> {
    Json(json!({
        "id": id,
        "status": "New",
        "message": "Placeholder response",
    }))
}

/// PUT /api/orders/:id/status
pub async fn update_order_status(Path(id): Path<String>) -> Json<Value> {
    Json(json!({
        "message": format!("Order {} status updated (placeholder)", id),
    }))
}

/// POST /api/calculate-bom
pub async fn calculate_bom() -> Json<Value> {
    Json(json!({
        "bomLines": [{ "itemCode": "placeholder", "quantity": 1 }],
        "message": "BOM calculated (placeholder)",
    }))
}

/// POST /api/validate-frame
pub async fn validate_frame() -> Json<Value> {
    Json(json!({
        "valid": true,
        "message": "Frame validated (placeholder)",
    }))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[tokio::test]
    async fn order_placeholders() {
        let (status, Json(body)) = submit_order().await;
        assert_eq!(status, StatusCode::CREATED);
        assert_eq!(body["id"], "placeholder-order-id");

        let Json(body) = get_order(Path("42".to_string())).await;
        assert_eq!(body["id"], "42");
        assert_eq!(body["status"], "New");

        let Json(body) = list_orders().await;
        assert_eq!(body.as_array().map(Vec::len), Some(1));
    }

    #[tokio::test]
    async fn calculation_placeholders() {
        let Json(body) = calculate_bom().await;
        assert_eq!(body["bomLines"][0]["quantity"], 1);

        let Json(body) = validate_frame().await;
        assert_eq!(body["valid"], true);

        let Json(body) = test_component(Path("abc".to_string())).await;
        assert_eq!(body["result"], 0);
        assert_eq!(body["message"], "Component abc test calculation (placeholder)");
    }
}
