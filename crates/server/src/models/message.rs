use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use crate::error::ValidationError;

pub type MessageId = i64;

#[derive(Clone, Debug, Serialize, sqlx::FromRow)]
pub struct Message {
    pub id: MessageId,
    pub body: String,
    pub username: String,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

/// Wire shape for POST /messages. Fields stay optional so presence is
/// checked explicitly before the store is touched.
#[derive(Clone, Debug, Deserialize)]
pub struct CreateMessageRequest {
    pub body: Option<String>,
    pub username: Option<String>,
}

/// Wire shape for PATCH /messages/{id}; only the body is mutable.
#[derive(Clone, Debug, Deserialize)]
pub struct UpdateMessageRequest {
    pub body: Option<String>,
}

#[derive(Clone, Debug)]
pub struct CreateMessage {
    pub body: String,
    pub username: String,
}

impl CreateMessageRequest {
    pub fn into_validated(self) -> Result<CreateMessage, ValidationError> {
        match (self.body, self.username) {
            (Some(body), Some(username)) => Ok(CreateMessage { body, username }),
            _ => Err(ValidationError::MissingFields),
        }
    }
}

pub fn validate_body(body: &str) -> Result<(), ValidationError> {
    if body.is_empty() {
        return Err(ValidationError::EmptyBody);
    }
    Ok(())
}
