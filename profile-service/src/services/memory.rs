use super::repository::UserRepository;
use crate::models::{NewUser, UserRecord};
use async_trait::async_trait;
use mongodb::bson::oid::ObjectId;
use service_core::error::AppError;
use tokio::sync::RwLock;

/// Process-local store, kept in insertion order.
#[derive(Default)]
pub struct InMemoryUserRepository {
    users: RwLock<Vec<UserRecord>>,
}

impl InMemoryUserRepository {
    pub fn new() -> Self {
        Self::default()
    }
}

#[async_trait]
impl UserRepository for InMemoryUserRepository {
    async fn insert(&self, user: NewUser) -> Result<String, AppError> {
        let id = ObjectId::new().to_hex();
        self.users
            .write()
            .await
            .push(UserRecord::from_new(id.clone(), user));
        Ok(id)
    }

    async fn find_by_name(&self, name: &str) -> Result<Vec<UserRecord>, AppError> {
        Ok(self
            .users
            .read()
            .await
            .iter()
            .filter(|user| user.name == name)
            .cloned()
            .collect())
    }

    async fn list_all(&self) -> Result<Vec<UserRecord>, AppError> {
        Ok(self.users.read().await.clone())
    }
}
