
use crate::core::models::NewUser;
use crate::core::services::DirectoryService;
use crate::infrastructure::logging::in_memory::InMemoryLogging;
use crate::infrastructure::storage::in_memory::InMemoryStorage;

pub fn create_test_service() -> DirectoryService<InMemoryLogging, InMemoryStorage> {
    let storage = InMemoryStorage::new();
    let logging = InMemoryLogging::new();
    DirectoryService::new(storage, logging)
}

pub fn new_user(name: &str, email: &str) -> NewUser {
    NewUser {
        name: name.to_string(),
        email: email.to_string(),
        age: None,
        is_active: true,
        password: None,
    }
}
