use crate::models::{NewUser, UserRecord};
use async_trait::async_trait;
use service_core::error::AppError;

/// Storage for user records.
#[async_trait]
pub trait UserRepository: Send + Sync {
    /// Persist a record and return the store-assigned identifier.
    async fn insert(&self, user: NewUser) -> Result<String, AppError>;

    async fn find_by_name(&self, name: &str) -> Result<Vec<UserRecord>, AppError>;

    /// Every record, in the order the store returns them.
    async fn list_all(&self) -> Result<Vec<UserRecord>, AppError>;
}
