use chrono::{DateTime, Utc};
use serde::Serialize;
use utoipa::ToSchema;

/// One entry in the process-lifetime audit trail, exposed via `GET /logs`.
#[derive(Clone, Debug, Serialize, ToSchema)]
pub struct AppLog {
    pub id: String,
    pub action: String,
    pub user_id: Option<String>,
    #[schema(value_type = Object)]
    pub details: serde_json::Value,
    pub timestamp: DateTime<Utc>,
}
