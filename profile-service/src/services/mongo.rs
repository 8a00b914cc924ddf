use super::repository::UserRepository;
use crate::models::{Age, NewUser, UserRecord};
use async_trait::async_trait;
use chrono::{DateTime, Utc};
use futures::stream::TryStreamExt;
use mongodb::{
    bson::{doc, oid::ObjectId, Bson},
    Client as MongoClient, Collection, Database,
};
use serde::{Deserialize, Serialize};
use service_core::error::AppError;

const USERS_COLLECTION: &str = "users";

/// Stored shape of a user in the `users` collection.
#[derive(Debug, Serialize, Deserialize)]
struct UserDocument {
    #[serde(rename = "_id", skip_serializing_if = "Option::is_none")]
    id: Option<ObjectId>,
    name: String,
    age: f64,
    #[serde(
        rename = "createdAt",
        with = "mongodb::bson::serde_helpers::chrono_datetime_as_bson_datetime"
    )]
    created_at: DateTime<Utc>,
}

impl From<NewUser> for UserDocument {
    fn from(user: NewUser) -> Self {
        Self {
            id: None,
            name: user.name,
            age: user.age.0,
            created_at: user.created_at,
        }
    }
}

impl From<UserDocument> for UserRecord {
    fn from(doc: UserDocument) -> Self {
        Self {
            id: doc.id.map(|id| id.to_hex()).unwrap_or_default(),
            name: doc.name,
            age: Age(doc.age),
            created_at: doc.created_at,
        }
    }
}

#[derive(Clone)]
pub struct MongoUserRepository {
    db: Database,
}

impl MongoUserRepository {
    pub async fn connect(uri: &str, database: &str) -> Result<Self, AppError> {
        tracing::info!(database = %database, "Connecting to MongoDB");
        let client = MongoClient::with_uri_str(uri).await.map_err(|e| {
            tracing::error!("Failed to connect to MongoDB: {}", e);
            AppError::from(e)
        })?;
        let db = client.database(database);
        tracing::info!(database = %database, "Successfully connected to MongoDB database");
        Ok(Self { db })
    }

    fn users(&self) -> Collection<UserDocument> {
        self.db.collection(USERS_COLLECTION)
    }

    pub fn database(&self) -> &Database {
        &self.db
    }
}

#[async_trait]
impl UserRepository for MongoUserRepository {
    async fn insert(&self, user: NewUser) -> Result<String, AppError> {
        let result = self
            .users()
            .insert_one(UserDocument::from(user), None)
            .await
            .map_err(AppError::from)?;

        Ok(match result.inserted_id {
            Bson::ObjectId(id) => id.to_hex(),
            other => other.to_string(),
        })
    }

    async fn find_by_name(&self, name: &str) -> Result<Vec<UserRecord>, AppError> {
        let cursor = self
            .users()
            .find(doc! { "name": name }, None)
            .await
            .map_err(AppError::from)?;

        let users: Vec<UserDocument> = cursor.try_collect().await.map_err(AppError::from)?;
        Ok(users.into_iter().map(UserRecord::from).collect())
    }

    async fn list_all(&self) -> Result<Vec<UserRecord>, AppError> {
        let cursor = self
            .users()
            .find(doc! {}, None)
            .await
            .map_err(AppError::from)?;

        let users: Vec<UserDocument> = cursor.try_collect().await.map_err(AppError::from)?;
        Ok(users.into_iter().map(UserRecord::from).collect())
    }
}
