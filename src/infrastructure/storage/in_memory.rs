use crate::core::errors::DirectoryError;
use crate::core::models::{User, UserPatch};
use crate::infrastructure::storage::Storage;
use async_trait::async_trait;
use chrono::{DateTime, Utc};
use std::collections::HashMap;
use tokio::sync::Mutex;

/// Process-lifetime storage: empty at startup, discarded at shutdown.
/// Mutations are serialized through the locks, which also makes the
/// uniqueness-check-then-write pairs atomic. Lock order is always
/// `emails` before `users`.
pub struct InMemoryStorage {
    users: Mutex<HashMap<String, User>>,
    emails: Mutex<HashMap<String, String>>, // email -> user_id
}

impl InMemoryStorage {
    pub fn new() -> Self {
        InMemoryStorage {
            users: Mutex::new(HashMap::new()),
            emails: Mutex::new(HashMap::new()),
        }
    }
}

impl Default for InMemoryStorage {
    fn default() -> Self {
        Self::new()
    }
}

#[async_trait]
impl Storage for InMemoryStorage {
    async fn insert_user(&self, user: User) -> Result<(), DirectoryError> {
        let mut emails = self.emails.lock().await;
        if emails.contains_key(&user.email) {
            return Err(DirectoryError::EmailAlreadyRegistered(user.email));
        }
        emails.insert(user.email.clone(), user.id.clone());
        let mut users = self.users.lock().await;
        users.insert(user.id.clone(), user);
        Ok(())
    }

    async fn get_user(&self, user_id: &str) -> Result<Option<User>, DirectoryError> {
        Ok(self.users.lock().await.get(user_id).cloned())
    }

    async fn list_users(&self) -> Result<Vec<User>, DirectoryError> {
        Ok(self.users.lock().await.values().cloned().collect())
    }

    async fn update_user(
        &self,
        user_id: &str,
        patch: UserPatch,
        updated_at: DateTime<Utc>,
    ) -> Result<User, DirectoryError> {
        let mut emails = self.emails.lock().await;
        let mut users = self.users.lock().await;
        let user = users
            .get_mut(user_id)
            .ok_or_else(|| DirectoryError::UserNotFound(user_id.to_string()))?;

        // Conflict check before any field is written: all-or-nothing.
        if let Some(ref email) = patch.email {
            if let Some(holder) = emails.get(email) {
                if holder != user_id {
                    return Err(DirectoryError::EmailAlreadyRegistered(email.clone()));
                }
            }
        }

        if let Some(name) = patch.name {
            user.name = name;
        }
        if let Some(email) = patch.email {
            if user.email != email {
                emails.remove(&user.email);
                emails.insert(email.clone(), user_id.to_string());
            }
            user.email = email;
        }
        if let Some(age) = patch.age {
            user.age = Some(age);
        }
        if let Some(is_active) = patch.is_active {
            user.is_active = is_active;
        }
        if let Some(password) = patch.password {
            user.password = Some(password);
        }
        user.updated_at = updated_at;
        Ok(user.clone())
    }

    async fn delete_user(&self, user_id: &str) -> Result<(), DirectoryError> {
        let mut emails = self.emails.lock().await;
        let mut users = self.users.lock().await;
        let removed = users
            .remove(user_id)
            .ok_or_else(|| DirectoryError::UserNotFound(user_id.to_string()))?;
        emails.remove(&removed.email);
        Ok(())
    }
}
