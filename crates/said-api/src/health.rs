//! Handler for `GET /health`.

use axum::Json;
use serde_json::{Value, json};

/// `GET /health` — liveness probe; touches no collaborator.
pub async fn handler() -> Json<Value> { Json(json!({ "status": "ok" })) }
