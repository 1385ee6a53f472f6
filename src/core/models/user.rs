use chrono::{DateTime, Utc};

/// A live directory record. Deliberately not `Serialize`: the only shape
/// that crosses the HTTP boundary is `api::models::UserResponse`, which has
/// no password field.
#[derive(Clone, Debug)]
pub struct User {
    pub id: String,
    pub name: String,
    pub email: String,
    pub age: Option<i64>,
    pub is_active: bool,
    pub password: Option<String>,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

/// Input for creating a user. The id and timestamps are assigned by the
/// service.
#[derive(Clone, Debug)]
pub struct NewUser {
    pub name: String,
    pub email: String,
    pub age: Option<i64>,
    pub is_active: bool,
    pub password: Option<String>,
}

/// Partial update: `None` means "leave unchanged". Omitted and explicit
/// null are equivalent; there is no way to clear a field back to null.
#[derive(Clone, Debug, Default)]
pub struct UserPatch {
    pub name: Option<String>,
    pub email: Option<String>,
    pub age: Option<i64>,
    pub is_active: Option<bool>,
    pub password: Option<String>,
}
