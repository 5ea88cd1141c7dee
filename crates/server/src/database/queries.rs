use sqlx::{Error as SqlxError, SqliteExecutor};
use tracing::instrument;

use crate::database::connection::DbConnection;
use crate::models::message::{Message, MessageId};

impl DbConnection {
    pub async fn list_messages(&self) -> Result<Vec<Message>, SqlxError> {
        list_messages(self.pool()).await
    }

    pub async fn get_message(&self, id: MessageId) -> Result<Option<Message>, SqlxError> {
        get_message(self.pool(), id).await
    }
}

#[instrument(skip(executor))]
pub async fn list_messages<'a, E: SqliteExecutor<'a>>(
    executor: E,
) -> Result<Vec<Message>, SqlxError> {
    // created_at ties are broken by id so the listing order is deterministic
    sqlx::query_as(
        "
    SELECT
        id, body, username, created_at, updated_at
    FROM
        messages
    ORDER BY
        created_at, id;
    ",
    )
    .fetch_all(executor)
    .await
}

#[instrument(skip(executor))]
pub async fn get_message<'a, E: SqliteExecutor<'a>>(
    executor: E,
    id: MessageId,
) -> Result<Option<Message>, SqlxError> {
    sqlx::query_as(
        "
    SELECT
        id, body, username, created_at, updated_at
    FROM
        messages
    WHERE
        id = ?;
    ",
    )
    .bind(id)
    .fetch_optional(executor)
    .await
}
