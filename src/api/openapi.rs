use utoipa::OpenApi;

use crate::api::models::{CreateUserRequest, ErrorResponse, UpdateUserRequest, UserResponse};
use crate::core::models::AppLog;

#[derive(OpenApi)]
#[openapi(
    paths(
        super::handlers::create_user,
        super::handlers::list_users,
        super::handlers::get_user,
        super::handlers::update_user,
        super::handlers::delete_user,
        super::handlers::get_app_logs
    ),
    components(schemas(
        CreateUserRequest,
        UpdateUserRequest,
        UserResponse,
        ErrorResponse,
        AppLog
    )),
    info(
        title = "UserDirectory API",
        description = "API for managing an in-memory directory of user records",
        version = "0.1.0"
    )
)]
pub struct ApiDoc;
