use axum::{extract::State, http::StatusCode, response::IntoResponse, Json};
use serde_json::json;

use crate::{error::Result, AppState};

#[axum::debug_handler]
pub async fn root() -> impl IntoResponse {
    Json(json!({ "message": "Welcome to the User Management API" }))
}

#[axum::debug_handler]
pub async fn health(State(state): State<AppState>) -> Result<impl IntoResponse> {
    let body = json!({
        "status": "ok",
        "users": state.user_service.count()?,
    });
    Ok((StatusCode::OK, Json(body)))
}
