use std::sync::Arc;

use axum::extract::{Path, State};
use axum::http::StatusCode;
use axum::routing::{get, patch};
use axum::{Json, Router};
use tokio::signal;
use tower_http::cors::CorsLayer;
use tower_http::trace::TraceLayer;
use tracing::info;

use crate::error::{RequestError, ValidationError};
use crate::models::message::{CreateMessageRequest, Message, MessageId, UpdateMessageRequest};
use crate::server::state::AppState;

pub fn build_router(state: Arc<AppState>) -> Router {
    Router::new()
        .route("/messages", get(list_messages).post(create_message))
        .route(
            "/messages/:id",
            patch(update_message).delete(delete_message),
        )
        .layer(TraceLayer::new_for_http())
        .layer(CorsLayer::permissive())
        .with_state(state)
}

pub async fn serve(state: Arc<AppState>) -> anyhow::Result<()> {
    let addr = state.config.server.address.clone();
    let app = build_router(state);

    let listener = tokio::net::TcpListener::bind(addr).await?;
    info!("starting server on: {}", listener.local_addr()?);
    axum::serve(listener, app)
        .with_graceful_shutdown(shutdown_signal())
        .await?;
    Ok(())
}

async fn shutdown_signal() {
    let ctrl_c = async {
        signal::ctrl_c()
            .await
            .expect("failed to install Ctrl+C handler");
    };

    #[cfg(unix)]
    let terminate = async {
        signal::unix::signal(signal::unix::SignalKind::terminate())
            .expect("failed to install signal handler")
            .recv()
            .await;
    };

    #[cfg(not(unix))]
    let terminate = std::future::pending::<()>();

    tokio::select! {
        _ = ctrl_c => {},
        _ = terminate => {},
    }

    info!("signal received, starting graceful shutdown");
}

pub async fn list_messages(
    State(state): State<Arc<AppState>>,
) -> Result<Json<Vec<Message>>, RequestError> {
    let messages = state.db_connection.list_messages().await?;
    Ok(Json(messages))
}

pub async fn create_message(
    State(state): State<Arc<AppState>>,
    payload: Option<Json<CreateMessageRequest>>,
) -> Result<(StatusCode, Json<Message>), RequestError> {
    let Some(Json(payload)) = payload else {
        return Err(ValidationError::MissingFields.into());
    };
    let request = payload.into_validated()?;
    let message = state.db_connection.create_message(&request).await?;
    Ok((StatusCode::CREATED, Json(message)))
}

pub async fn update_message(
    State(state): State<Arc<AppState>>,
    Path(id): Path<MessageId>,
    payload: Option<Json<UpdateMessageRequest>>,
) -> Result<(StatusCode, Json<Message>), RequestError> {
    // absence of the target wins over payload problems
    if state.db_connection.get_message(id).await?.is_none() {
        return Err(RequestError::NotFound);
    }
    let body = payload
        .and_then(|Json(payload)| payload.body)
        .ok_or(ValidationError::MissingBody)?;
    let message = state.db_connection.update_message_body(id, &body).await?;
    Ok((StatusCode::ACCEPTED, Json(message)))
}

pub async fn delete_message(
    State(state): State<Arc<AppState>>,
    Path(id): Path<MessageId>,
) -> Result<StatusCode, RequestError> {
    state.db_connection.delete_message(id).await?;
    Ok(StatusCode::NO_CONTENT)
}
