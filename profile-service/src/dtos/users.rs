use crate::error::ProfileError;
use crate::models::{Age, NewUser, UserRecord};
use serde::{Deserialize, Serialize};
use validator::Validate;

/// Body of `POST /user/add`. Both fields are optional here so that a missing
/// field is reported as a 400 rather than a JSON rejection.
#[derive(Debug, Default, Deserialize)]
pub struct AddUserRequest {
    #[serde(default)]
    pub name: Option<String>,
    #[serde(default)]
    pub age: Option<Age>,
}

impl AddUserRequest {
    /// Presence check, then field validation. An empty name or a zero age
    /// counts as missing; a present but invalid field is not a client error
    /// and surfaces as a failed add.
    pub fn into_new_user(self) -> Result<NewUser, ProfileError> {
        let name = self.name.filter(|name| !name.is_empty());
        let age = self.age.filter(|age| age.0 != 0.0);

        let (Some(name), Some(age)) = (name, age) else {
            return Err(ProfileError::MissingFields);
        };

        let user = NewUser::new(name, age);
        user.validate()?;
        Ok(user)
    }
}

#[derive(Debug, Serialize)]
pub struct MessageResponse {
    pub msg: &'static str,
}

#[derive(Debug, Serialize)]
pub struct UserResponse {
    pub id: String,
    pub name: String,
    pub age: Age,
    #[serde(rename = "createdAt")]
    pub created_at: String,
}

impl From<UserRecord> for UserResponse {
    fn from(user: UserRecord) -> Self {
        Self {
            id: user.id,
            name: user.name,
            age: user.age,
            created_at: user.created_at.to_rfc3339(),
        }
    }
}
