use axum::{
    extract::{Path, State},
    http::StatusCode,
    response::{IntoResponse, Json},
};
use uuid::Uuid;

use crate::{
    dto::user_dto::{UpdateUserPayload, UserPayload, UserResponse},
    error::{Error, Result},
    middleware::json::ValidatedJson,
    AppState,
};

/// Ids that do not parse as UUIDs cannot name a stored user.
fn parse_user_id(raw: &str) -> Result<Uuid> {
    Uuid::parse_str(raw).map_err(|_| Error::NotFound(format!("User with ID {} not found", raw)))
}

#[utoipa::path(
    post,
    path = "/users",
    request_body = UserPayload,
    responses(
        (status = 201, description = "User created", body = UserResponse),
        (status = 409, description = "Email already registered", body = crate::dto::user_dto::ErrorResponse),
        (status = 422, description = "Invalid payload", body = crate::dto::user_dto::ErrorResponse)
    )
)]
#[axum::debug_handler]
pub async fn create_user(
    State(state): State<AppState>,
    ValidatedJson(payload): ValidatedJson<UserPayload>,
) -> Result<impl IntoResponse> {
    let user = state.user_service.create(payload)?;
    Ok((StatusCode::CREATED, Json(UserResponse::from(user))))
}

#[utoipa::path(
    get,
    path = "/users",
    responses(
        (status = 200, description = "All users in creation order", body = [UserResponse])
    )
)]
#[axum::debug_handler]
pub async fn list_users(State(state): State<AppState>) -> Result<impl IntoResponse> {
    let users: Vec<UserResponse> = state
        .user_service
        .list()?
        .into_iter()
        .map(UserResponse::from)
        .collect();
    Ok(Json(users))
}

#[utoipa::path(
    get,
    path = "/users/{id}",
    params(
        ("id" = Uuid, Path, description = "User ID")
    ),
    responses(
        (status = 200, description = "User found", body = UserResponse),
        (status = 404, description = "User not found", body = crate::dto::user_dto::ErrorResponse)
    )
)]
#[axum::debug_handler]
pub async fn get_user(
    State(state): State<AppState>,
    Path(id): Path<String>,
) -> Result<impl IntoResponse> {
    let user = state.user_service.get(parse_user_id(&id)?)?;
    Ok(Json(UserResponse::from(user)))
}

#[utoipa::path(
    put,
    path = "/users/{id}",
    params(
        ("id" = Uuid, Path, description = "User ID")
    ),
    request_body = UserPayload,
    responses(
        (status = 200, description = "User replaced", body = UserResponse),
        (status = 404, description = "User not found", body = crate::dto::user_dto::ErrorResponse),
        (status = 409, description = "Email already registered", body = crate::dto::user_dto::ErrorResponse),
        (status = 422, description = "Invalid payload", body = crate::dto::user_dto::ErrorResponse)
    )
)]
#[axum::debug_handler]
pub async fn replace_user(
    State(state): State<AppState>,
    Path(id): Path<String>,
    ValidatedJson(payload): ValidatedJson<UserPayload>,
) -> Result<impl IntoResponse> {
    let user = state.user_service.replace(parse_user_id(&id)?, payload)?;
    Ok(Json(UserResponse::from(user)))
}

#[utoipa::path(
    patch,
    path = "/users/{id}",
    params(
        ("id" = Uuid, Path, description = "User ID")
    ),
    request_body = UpdateUserPayload,
    responses(
        (status = 200, description = "User updated", body = UserResponse),
        (status = 404, description = "User not found", body = crate::dto::user_dto::ErrorResponse),
        (status = 409, description = "Email already registered", body = crate::dto::user_dto::ErrorResponse),
        (status = 422, description = "Invalid payload", body = crate::dto::user_dto::ErrorResponse)
    )
)]
#[axum::debug_handler]
pub async fn update_user(
    State(state): State<AppState>,
    Path(id): Path<String>,
    ValidatedJson(payload): ValidatedJson<UpdateUserPayload>,
) -> Result<impl IntoResponse> {
    let user = state.user_service.update(parse_user_id(&id)?, payload)?;
    Ok(Json(UserResponse::from(user)))
}

#[utoipa::path(
    delete,
    path = "/users/{id}",
    params(
        ("id" = Uuid, Path, description = "User ID")
    ),
    responses(
        (status = 204, description = "User deleted"),
        (status = 404, description = "User not found", body = crate::dto::user_dto::ErrorResponse)
    )
)]
#[axum::debug_handler]
pub async fn delete_user(
    State(state): State<AppState>,
    Path(id): Path<String>,
) -> Result<impl IntoResponse> {
    state.user_service.delete(parse_user_id(&id)?)?;
    Ok(StatusCode::NO_CONTENT)
}
