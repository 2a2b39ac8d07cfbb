use axum::{
    Router,
    http::StatusCode,
    routing::{get, post, put},
};

use std::sync::Arc;

use crate::{entry, user};
use engine::Engine;

#[derive(Clone)]
pub struct ServerState {
    pub engine: Arc<Engine>,
}

async fn health() -> StatusCode {
    StatusCode::OK
}

pub fn router(state: ServerState) -> Router {
    Router::new()
        .route("/health", get(health))
        .route("/api/users", post(user::register))
        .route("/api/users/authenticate", post(user::authenticate))
        .route("/api/users/{id}/balance", get(user::balance))
        .route("/api/entries", post(entry::create).get(entry::search))
        .route(
            "/api/entries/{id}",
            put(entry::update).delete(entry::delete),
        )
        .route("/api/entries/{id}/status", put(entry::update_status))
        .with_state(state)
}

pub async fn run_with_listener(
    engine: Engine,
    listener: tokio::net::TcpListener,
) -> Result<(), std::io::Error> {
    let addr = listener.local_addr()?;
    tracing::info!("Server listening on {}", addr);

    let state = ServerState {
        engine: Arc::new(engine),
    };

    axum::serve(listener, router(state)).await
}
