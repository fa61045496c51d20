use axum::Json;
use serde_json::{json, Value};

/// GET /healthz
/// Liveness only; there are no downstream dependencies to probe.
pub async fn health_handler() -> Json<Value> {
    Json(json!({ "status": "ok" }))
}
