use axum::{Json, http::StatusCode, response::IntoResponse};
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

use crate::core::errors::DirectoryError;
use crate::core::models::{NewUser, User, UserPatch};

fn default_true() -> bool {
    true
}

// Request structs for JSON payloads
#[derive(Deserialize, ToSchema)]
pub struct CreateUserRequest {
    pub name: String,
    pub email: String,
    pub age: Option<i64>,
    #[serde(default = "default_true")]
    pub is_active: bool,
    pub password: Option<String>,
}

impl From<CreateUserRequest> for NewUser {
    fn from(req: CreateUserRequest) -> Self {
        NewUser {
            name: req.name,
            email: req.email,
            age: req.age,
            is_active: req.is_active,
            password: req.password,
        }
    }
}

/// Transport is PUT, semantics are partial: omitted and null fields are
/// left unchanged.
#[derive(Deserialize, Default, ToSchema)]
#[serde(default)]
pub struct UpdateUserRequest {
    pub name: Option<String>,
    pub email: Option<String>,
    pub age: Option<i64>,
    pub is_active: Option<bool>,
    pub password: Option<String>,
}

impl From<UpdateUserRequest> for UserPatch {
    fn from(req: UpdateUserRequest) -> Self {
        UserPatch {
            name: req.name,
            email: req.email,
            age: req.age,
            is_active: req.is_active,
            password: req.password,
        }
    }
}

/// The only user shape that crosses the HTTP boundary. Deliberately has no
/// password field.
#[derive(Serialize, Deserialize, Debug, Clone, ToSchema)]
pub struct UserResponse {
    pub id: String,
    pub name: String,
    pub email: String,
    pub age: Option<i64>,
    pub is_active: bool,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

impl From<User> for UserResponse {
    fn from(user: User) -> Self {
        UserResponse {
            id: user.id,
            name: user.name,
            email: user.email,
            age: user.age,
            is_active: user.is_active,
            created_at: user.created_at,
            updated_at: user.updated_at,
        }
    }
}

// Error response struct
#[derive(Serialize, Deserialize, ToSchema)]
pub struct ErrorResponse {
    pub error: String,
}

// Newtype wrapper for DirectoryError to implement IntoResponse
pub struct ApiError(pub DirectoryError);

impl From<DirectoryError> for ApiError {
    fn from(err: DirectoryError) -> Self {
        ApiError(err)
    }
}

impl IntoResponse for ApiError {
    fn into_response(self) -> axum::response::Response {
        let (status, error_message) = match self.0 {
            DirectoryError::MissingEmail => (StatusCode::BAD_REQUEST, "Email is required".to_string()),
            DirectoryError::InvalidEmail(email) => (StatusCode::BAD_REQUEST, format!("Invalid email: {}", email)),
            DirectoryError::EmailAlreadyRegistered(email) => {
                (StatusCode::CONFLICT, format!("Email {} already registered", email))
            }
            DirectoryError::UserNotFound(id) => (StatusCode::NOT_FOUND, format!("User {} not found", id)),
            DirectoryError::InvalidInput(violations) => {
                let descriptions: Vec<String> = violations.iter().map(|v| v.description.clone()).collect();
                (StatusCode::BAD_REQUEST, descriptions.join("; "))
            }
            DirectoryError::StorageError(msg) => (StatusCode::INTERNAL_SERVER_ERROR, format!("Storage error: {}", msg)),
            DirectoryError::LoggingError(msg) => (StatusCode::INTERNAL_SERVER_ERROR, format!("Logging error: {}", msg)),
        };
        (status, Json(ErrorResponse { error: error_message })).into_response()
    }
}
