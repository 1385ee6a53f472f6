use crate::core::errors::DirectoryError;
use crate::core::models::{User, UserPatch};
use async_trait::async_trait;
use chrono::{DateTime, Utc};

/// Keyed store of live user records. Identity rules live here: every
/// implementation must keep ids unique and reject a second live record
/// with the same email.
#[async_trait]
pub trait Storage: Send + Sync {
    /// Inserts a fully-formed record. Fails with `EmailAlreadyRegistered`
    /// if another live record holds the same email; nothing is written in
    /// that case.
    async fn insert_user(&self, user: User) -> Result<(), DirectoryError>;

    async fn get_user(&self, user_id: &str) -> Result<Option<User>, DirectoryError>;

    async fn list_users(&self) -> Result<Vec<User>, DirectoryError>;

    /// Applies a partial update to the record stored under `user_id` as one
    /// atomic step: the email uniqueness check, the field writes, and the
    /// `updated_at` refresh happen under a single lock acquisition, so
    /// concurrent updates serialize and neither can revert the other's
    /// fields. Fails with `UserNotFound` if the id is absent and with
    /// `EmailAlreadyRegistered` if the patch email belongs to a *different*
    /// live record; the stored record is untouched on either failure.
    async fn update_user(
        &self,
        user_id: &str,
        patch: UserPatch,
        updated_at: DateTime<Utc>,
    ) -> Result<User, DirectoryError>;

    /// Removes the record permanently. Fails with `UserNotFound` if absent.
    async fn delete_user(&self, user_id: &str) -> Result<(), DirectoryError>;
}

pub mod in_memory;
