use axum::{extract::State, Json};
use serde_json::{json, Value};

use crate::{errors::ApiError, AppState};

/// Liveness banner.
pub async fn root() -> &'static str {
    "fabrik-api up"
}

/// Health probe checking store connectivity.
pub async fn health(State(state): State<AppState>) -> Result<Json<Value>, ApiError> {
    state.db.ping().await.map_err(ApiError::from_db)?;
    Ok(Json(json!({"status": "up", "database": "reachable"})))
}
