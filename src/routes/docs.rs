use axum::{response::IntoResponse, Json};
use utoipa::OpenApi;

use crate::dto::user_dto::{ErrorResponse, UpdateUserPayload, UserPayload, UserResponse};

#[derive(OpenApi)]
#[openapi(
    info(
        title = "User Management API",
        description = "In-memory CRUD API for user records"
    ),
    paths(
        crate::routes::users::create_user,
        crate::routes::users::list_users,
        crate::routes::users::get_user,
        crate::routes::users::replace_user,
        crate::routes::users::update_user,
        crate::routes::users::delete_user,
    ),
    components(schemas(UserPayload, UpdateUserPayload, UserResponse, ErrorResponse)),
    tags((name = "users", description = "User management"))
)]
pub struct ApiDoc;

pub async fn openapi_json() -> impl IntoResponse {
    Json(ApiDoc::openapi())
}
