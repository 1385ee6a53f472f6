use crate::constants::{USER_CREATED, USER_DELETED, USER_UPDATED};
use crate::core::errors::DirectoryError;
use crate::core::models::{AppLog, NewUser, User, UserPatch};
use crate::core::validation::{validate_new_user, validate_user_patch};
use crate::infrastructure::logging::LoggingService;
use crate::infrastructure::storage::Storage;
use chrono::Utc;
use serde_json::json;
use uuid::Uuid;

/// Owns the record lifecycle: validation, id and timestamp assignment, and
/// the audit trail. Identity and uniqueness enforcement is delegated to the
/// storage, which performs its check-then-write pairs atomically.
pub struct DirectoryService<L: LoggingService, S: Storage> {
    storage: S,
    logging: L,
}

impl<L: LoggingService, S: Storage> DirectoryService<L, S> {
    pub fn new(storage: S, logging: L) -> Self {
        DirectoryService { storage, logging }
    }

    pub async fn create_user(&self, input: NewUser) -> Result<User, DirectoryError> {
        validate_new_user(&input)?;

        let now = Utc::now();
        let user = User {
            id: Uuid::new_v4().to_string(),
            name: input.name,
            email: input.email,
            age: input.age,
            is_active: input.is_active,
            password: input.password,
            created_at: now,
            updated_at: now,
        };

        self.storage.insert_user(user.clone()).await?;
        self.logging
            .log_action(
                USER_CREATED,
                json!({ "user_id": user.id, "name": user.name, "email": user.email }),
                Some(&user.id),
            )
            .await?;
        Ok(user)
    }

    pub async fn get_user(&self, user_id: &str) -> Result<User, DirectoryError> {
        self.storage
            .get_user(user_id)
            .await?
            .ok_or_else(|| DirectoryError::UserNotFound(user_id.to_string()))
    }

    pub async fn list_users(&self) -> Result<Vec<User>, DirectoryError> {
        self.storage.list_users().await
    }

    /// Partial update: only fields present in the patch are overwritten.
    /// Validation and the email uniqueness check both happen before any
    /// field is written, so a rejected update leaves the record untouched.
    /// The storage applies the patch under one lock acquisition, keeping
    /// the read-modify-write atomic against concurrent updates.
    pub async fn update_user(&self, user_id: &str, patch: UserPatch) -> Result<User, DirectoryError> {
        validate_user_patch(&patch)?;

        let changed_fields: Vec<&str> = [
            patch.name.as_ref().map(|_| "name"),
            patch.email.as_ref().map(|_| "email"),
            patch.age.map(|_| "age"),
            patch.is_active.map(|_| "is_active"),
            patch.password.as_ref().map(|_| "password"),
        ]
        .into_iter()
        .flatten()
        .collect();

        let user = self.storage.update_user(user_id, patch, Utc::now()).await?;
        self.logging
            .log_action(
                USER_UPDATED,
                json!({ "user_id": user.id, "fields": changed_fields }),
                Some(&user.id),
            )
            .await?;
        Ok(user)
    }

    pub async fn delete_user(&self, user_id: &str) -> Result<(), DirectoryError> {
        self.storage.delete_user(user_id).await?;
        self.logging
            .log_action(USER_DELETED, json!({ "user_id": user_id }), Some(user_id))
            .await?;
        Ok(())
    }

    pub async fn get_app_logs(&self) -> Result<Vec<AppLog>, DirectoryError> {
        self.logging.get_logs().await
    }
}
