use chrono::{DateTime, Utc};
use serde::{Deserialize, Deserializer, Serialize, Serializer};
use validator::{Validate, ValidationError};

pub const NAME_MAX_LEN: usize = 200;

/// A user's age as sent by clients: any non-zero JSON number.
///
/// Integral values serialize back as integers so `30` round-trips as `30`.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Age(pub f64);

impl Serialize for Age {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        let value = self.0;
        if value.fract() == 0.0 && value.abs() < i64::MAX as f64 {
            serializer.serialize_i64(value as i64)
        } else {
            serializer.serialize_f64(value)
        }
    }
}

impl<'de> Deserialize<'de> for Age {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        f64::deserialize(deserializer).map(Age)
    }
}

/// A record about to be stored. `created_at` is stamped by the server.
#[derive(Debug, Clone, Validate)]
pub struct NewUser {
    #[validate(custom(function = "validate_name_length"))]
    pub name: String,
    pub age: Age,
    pub created_at: DateTime<Utc>,
}

/// Name length is measured in UTF-16 code units, as browsers and the
/// existing records count it, so a surrogate pair counts twice.
fn validate_name_length(name: &str) -> Result<(), ValidationError> {
    let len = name.encode_utf16().count();
    if (1..=NAME_MAX_LEN).contains(&len) {
        Ok(())
    } else {
        let mut err = ValidationError::new("length");
        err.message = Some(
            format!(
                "name must be between 1 and {} UTF-16 code units, got {}",
                NAME_MAX_LEN, len
            )
            .into(),
        );
        Err(err)
    }
}

impl NewUser {
    pub fn new(name: String, age: Age) -> Self {
        Self {
            name,
            age,
            created_at: Utc::now(),
        }
    }
}

/// A persisted record, with the identifier the store assigned.
#[derive(Debug, Clone, PartialEq)]
pub struct UserRecord {
    pub id: String,
    pub name: String,
    pub age: Age,
    pub created_at: DateTime<Utc>,
}

impl UserRecord {
    pub fn from_new(id: String, user: NewUser) -> Self {
        Self {
            id,
            name: user.name,
            age: user.age,
            created_at: user.created_at,
        }
    }
}
