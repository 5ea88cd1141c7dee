use chrono::Utc;
use sqlx::{Error as SqlxError, SqliteExecutor};
use tracing::{info, instrument};

use crate::database::connection::DbConnection;
use crate::error::RequestError;
use crate::models::message::{validate_body, CreateMessage, Message, MessageId};

impl DbConnection {
    pub async fn create_message(&self, request: &CreateMessage) -> Result<Message, RequestError> {
        validate_body(&request.body)?;
        Ok(create_message(self.pool(), request).await?)
    }

    pub async fn update_message_body(
        &self,
        id: MessageId,
        body: &str,
    ) -> Result<Message, RequestError> {
        validate_body(body)?;
        update_message_body(self.pool(), id, body)
            .await?
            .ok_or(RequestError::NotFound)
    }

    pub async fn delete_message(&self, id: MessageId) -> Result<(), RequestError> {
        if !delete_message(self.pool(), id).await? {
            return Err(RequestError::NotFound);
        }
        Ok(())
    }
}

#[instrument(skip_all)]
pub async fn create_message<'a, E: SqliteExecutor<'a>>(
    executor: E,
    request: &CreateMessage,
) -> Result<Message, SqlxError> {
    // a single timestamp sample keeps created_at and updated_at exactly equal
    let now = Utc::now();
    let message: Message = sqlx::query_as(
        "
            INSERT INTO messages (body, username, created_at, updated_at)
            VALUES (?, ?, ?, ?)
            RETURNING id, body, username, created_at, updated_at;
        ",
    )
    .bind(&request.body)
    .bind(&request.username)
    .bind(now)
    .bind(now)
    .fetch_one(executor)
    .await?;
    info!("created message with id: {}", message.id);
    Ok(message)
}

#[instrument(skip(executor, body))]
pub async fn update_message_body<'a, E: SqliteExecutor<'a>>(
    executor: E,
    id: MessageId,
    body: &str,
) -> Result<Option<Message>, SqlxError> {
    let now = Utc::now();
    sqlx::query_as(
        "
            UPDATE messages
            SET body = ?, updated_at = ?
            WHERE id = ?
            RETURNING id, body, username, created_at, updated_at;
        ",
    )
    .bind(body)
    .bind(now)
    .bind(id)
    .fetch_optional(executor)
    .await
}

#[instrument(skip(executor))]
pub async fn delete_message<'a, E: SqliteExecutor<'a>>(
    executor: E,
    id: MessageId,
) -> Result<bool, SqlxError> {
    let result = sqlx::query("DELETE FROM messages WHERE id = ?;")
        .bind(id)
        .execute(executor)
        .await?;
    Ok(result.rows_affected() > 0)
}
