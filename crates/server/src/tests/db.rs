use crate::database::connection::{DbConfig, DbConnection};
use crate::error::{RequestError, ValidationError};
use crate::models::message::CreateMessage;

async fn init_and_get_db() -> DbConnection {
    let _ = tracing_subscriber::fmt::try_init();

    let db = DbConnection::connect(&DbConfig::in_memory()).await.unwrap();
    db.drop_schema().await.unwrap();
    db.init_schema().await.unwrap();
    db
}

fn new_message(body: &str, username: &str) -> CreateMessage {
    CreateMessage {
        body: body.to_string(),
        username: username.to_string(),
    }
}

#[tokio::test]
async fn create_assigns_id_and_equal_timestamps() {
    let db = init_and_get_db().await;

    let message = db.create_message(&new_message("hi", "alice")).await.unwrap();
    assert_eq!(message.id, 1);
    assert_eq!(message.body, "hi");
    assert_eq!(message.username, "alice");
    assert_eq!(message.created_at, message.updated_at);
}

#[tokio::test]
async fn create_rejects_empty_body() {
    let db = init_and_get_db().await;

    let err = db.create_message(&new_message("", "alice")).await.unwrap_err();
    assert!(matches!(
        err,
        RequestError::Validation(ValidationError::EmptyBody)
    ));
    // nothing was written
    assert!(db.list_messages().await.unwrap().is_empty());
}

#[tokio::test]
async fn list_orders_by_creation() {
    let db = init_and_get_db().await;

    db.create_message(&new_message("first", "alice")).await.unwrap();
    db.create_message(&new_message("second", "bob")).await.unwrap();
    db.create_message(&new_message("third", "alice")).await.unwrap();

    let messages = db.list_messages().await.unwrap();
    assert_eq!(messages.len(), 3);
    assert_eq!(messages[0].body, "first");
    assert_eq!(messages[1].body, "second");
    assert_eq!(messages[2].body, "third");
    assert_eq!(
        messages.iter().map(|m| m.id).collect::<Vec<_>>(),
        vec![1, 2, 3]
    );
    assert!(messages[0].created_at <= messages[1].created_at);
    assert!(messages[1].created_at <= messages[2].created_at);
}

#[tokio::test]
async fn get_returns_none_for_unknown_id() {
    let db = init_and_get_db().await;

    assert!(db.get_message(42).await.unwrap().is_none());

    let created = db.create_message(&new_message("hi", "alice")).await.unwrap();
    let fetched = db.get_message(created.id).await.unwrap().unwrap();
    assert_eq!(fetched.id, created.id);
    assert_eq!(fetched.body, created.body);
    assert_eq!(fetched.created_at, created.created_at);
}

#[tokio::test]
async fn update_replaces_body_and_refreshes_timestamp() {
    let db = init_and_get_db().await;

    let created = db.create_message(&new_message("hi", "alice")).await.unwrap();
    let updated = db.update_message_body(created.id, "hello").await.unwrap();

    assert_eq!(updated.id, created.id);
    assert_eq!(updated.body, "hello");
    assert_eq!(updated.username, "alice");
    assert_eq!(updated.created_at, created.created_at);
    assert!(updated.updated_at >= created.updated_at);
}

#[tokio::test]
async fn update_rejects_empty_body_and_unknown_id() {
    let db = init_and_get_db().await;

    let created = db.create_message(&new_message("hi", "alice")).await.unwrap();

    let err = db.update_message_body(created.id, "").await.unwrap_err();
    assert!(matches!(
        err,
        RequestError::Validation(ValidationError::EmptyBody)
    ));
    // the record is untouched by the failed update
    let fetched = db.get_message(created.id).await.unwrap().unwrap();
    assert_eq!(fetched.body, "hi");
    assert_eq!(fetched.updated_at, created.updated_at);

    let err = db.update_message_body(42, "hello").await.unwrap_err();
    assert!(matches!(err, RequestError::NotFound));
}

#[tokio::test]
async fn delete_removes_record_and_second_delete_fails() {
    let db = init_and_get_db().await;

    let first = db.create_message(&new_message("one", "alice")).await.unwrap();
    let second = db.create_message(&new_message("two", "bob")).await.unwrap();

    db.delete_message(first.id).await.unwrap();

    let remaining = db.list_messages().await.unwrap();
    assert_eq!(remaining.len(), 1);
    assert_eq!(remaining[0].id, second.id);

    let err = db.delete_message(first.id).await.unwrap_err();
    assert!(matches!(err, RequestError::NotFound));
}

#[tokio::test]
async fn deleted_ids_are_never_reused() {
    let db = init_and_get_db().await;

    db.create_message(&new_message("one", "alice")).await.unwrap();
    let second = db.create_message(&new_message("two", "bob")).await.unwrap();
    db.delete_message(second.id).await.unwrap();

    let third = db.create_message(&new_message("three", "carol")).await.unwrap();
    assert_eq!(third.id, 3);
}
