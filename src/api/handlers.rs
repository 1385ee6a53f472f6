use crate::{
    api::models::*,
    core::{models::AppLog, services::DirectoryService},
    infrastructure::{logging::in_memory::InMemoryLogging, storage::in_memory::InMemoryStorage},
};
use axum::{
    Json, Router,
    extract::{Path, State},
    http::StatusCode,
};
use std::sync::Arc;

type Directory = Arc<DirectoryService<InMemoryLogging, InMemoryStorage>>;

// Define API routes
pub fn api_routes(service: Directory) -> Router {
    Router::new()
        .route("/", axum::routing::get(|| async { "OK" }))
        .route("/users", axum::routing::post(create_user))
        .route("/users", axum::routing::get(list_users))
        // The collection routes also answer with a trailing slash, the
        // spelling the original FastAPI surface used.
        .route("/users/", axum::routing::post(create_user))
        .route("/users/", axum::routing::get(list_users))
        .route("/users/{user_id}", axum::routing::get(get_user))
        .route("/users/{user_id}", axum::routing::put(update_user))
        .route("/users/{user_id}", axum::routing::delete(delete_user))
        .route("/logs", axum::routing::get(get_app_logs))
        .with_state(service)
}

#[utoipa::path(
    post,
    path = "/users",
    request_body = CreateUserRequest,
    responses(
        (status = 201, description = "User created", body = UserResponse),
        (status = 400, description = "Validation failed", body = ErrorResponse),
        (status = 409, description = "Email already registered", body = ErrorResponse)
    )
)]
pub async fn create_user(
    State(service): State<Directory>,
    Json(req): Json<CreateUserRequest>,
) -> Result<(StatusCode, Json<UserResponse>), ApiError> {
    let user = service.create_user(req.into()).await?;
    Ok((StatusCode::CREATED, Json(user.into())))
}

#[utoipa::path(
    get,
    path = "/users",
    responses(
        (status = 200, description = "All live users", body = Vec<UserResponse>)
    )
)]
pub async fn list_users(State(service): State<Directory>) -> Result<Json<Vec<UserResponse>>, ApiError> {
    let users = service.list_users().await?;
    Ok(Json(users.into_iter().map(UserResponse::from).collect()))
}

#[utoipa::path(
    get,
    path = "/users/{user_id}",
    params(("user_id" = String, Path, description = "User id")),
    responses(
        (status = 200, description = "User found", body = UserResponse),
        (status = 404, description = "User not found", body = ErrorResponse)
    )
)]
pub async fn get_user(
    State(service): State<Directory>,
    Path(user_id): Path<String>,
) -> Result<Json<UserResponse>, ApiError> {
    let user = service.get_user(&user_id).await?;
    Ok(Json(user.into()))
}

#[utoipa::path(
    put,
    path = "/users/{user_id}",
    params(("user_id" = String, Path, description = "User id")),
    request_body = UpdateUserRequest,
    responses(
        (status = 200, description = "User updated", body = UserResponse),
        (status = 400, description = "Validation failed", body = ErrorResponse),
        (status = 404, description = "User not found", body = ErrorResponse),
        (status = 409, description = "Email already registered", body = ErrorResponse)
    )
)]
pub async fn update_user(
    State(service): State<Directory>,
    Path(user_id): Path<String>,
    Json(req): Json<UpdateUserRequest>,
) -> Result<Json<UserResponse>, ApiError> {
    let user = service.update_user(&user_id, req.into()).await?;
    Ok(Json(user.into()))
}

#[utoipa::path(
    delete,
    path = "/users/{user_id}",
    params(("user_id" = String, Path, description = "User id")),
    responses(
        (status = 204, description = "User deleted"),
        (status = 404, description = "User not found", body = ErrorResponse)
    )
)]
pub async fn delete_user(State(service): State<Directory>, Path(user_id): Path<String>) -> Result<StatusCode, ApiError> {
    service.delete_user(&user_id).await?;
    Ok(StatusCode::NO_CONTENT)
}

#[utoipa::path(
    get,
    path = "/logs",
    responses(
        (status = 200, description = "Audit trail", body = Vec<AppLog>)
    )
)]
pub async fn get_app_logs(State(service): State<Directory>) -> Result<Json<Vec<AppLog>>, ApiError> {
    let logs = service.get_app_logs().await?;
    Ok(Json(logs))
}
