use std::sync::Arc;

use axum::{extract::State, Json};
use serde_json::{json, Value};

use crate::AppState;

pub async fn get_root(State(state): State<Arc<AppState>>) -> Json<Value> {
    Json(json!({
        "name": state.envy.app_name,
        "version": env!("CARGO_PKG_VERSION"),
        "health": "/health",
    }))
}

pub async fn get_health() -> Json<Value> {
    Json(json!({ "status": "ok" }))
}
