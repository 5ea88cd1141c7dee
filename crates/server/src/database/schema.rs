use sqlx::{Error as SqlxError, Sqlite, Transaction};
use tracing::instrument;

use crate::database::connection::DbConnection;

impl DbConnection {
    pub async fn init_schema(&self) -> Result<(), SqlxError> {
        let mut transaction = self.pool().begin().await?;
        create_all_tables(&mut transaction).await?;
        transaction.commit().await?;
        Ok(())
    }

    pub async fn drop_schema(&self) -> Result<(), SqlxError> {
        let mut transaction = self.pool().begin().await?;
        drop_all_tables(&mut transaction).await?;
        transaction.commit().await?;
        Ok(())
    }
}

#[instrument(skip_all)]
pub async fn create_all_tables(transaction: &mut Transaction<'_, Sqlite>) -> Result<(), SqlxError> {
    // AUTOINCREMENT keeps deleted ids from ever being handed out again
    sqlx::query(
        "
            CREATE TABLE IF NOT EXISTS messages (
                id           INTEGER PRIMARY KEY AUTOINCREMENT,
                body         TEXT NOT NULL,
                username     TEXT NOT NULL,
                created_at   TIMESTAMP NOT NULL,
                updated_at   TIMESTAMP NOT NULL
            );
        ",
    )
    .execute(transaction.as_mut())
    .await?;
    Ok(())
}

#[instrument(skip_all)]
pub async fn drop_all_tables(transaction: &mut Transaction<'_, Sqlite>) -> Result<(), SqlxError> {
    sqlx::query("DROP TABLE IF EXISTS messages;")
        .execute(transaction.as_mut())
        .await?;
    Ok(())
}
