use axum::{Json, http::StatusCode, response::IntoResponse};
use engine::EngineError;

use serde::Serialize;
pub use server::{ServerState, router, run_with_listener};

mod entry;
mod server;
mod user;

pub enum ServerError {
    Engine(EngineError),
    Internal(String),
}

#[derive(Serialize)]
struct Error {
    error: String,
}

fn status_for_engine_error(err: &EngineError) -> StatusCode {
    match err {
        EngineError::Validation(_) | EngineError::InvalidAmount(_) => StatusCode::BAD_REQUEST,
        EngineError::Authentication(_) => StatusCode::UNAUTHORIZED,
        EngineError::BusinessRule(_) => StatusCode::CONFLICT,
        EngineError::KeyNotFound(_) => StatusCode::NOT_FOUND,
        EngineError::Overflow(_) | EngineError::Credentials(_) | EngineError::Database(_) => {
            StatusCode::INTERNAL_SERVER_ERROR
        }
    }
}

fn message_for_engine_error(err: EngineError) -> String {
    match err {
        EngineError::Database(db_err) => {
            tracing::error!("database error: {db_err}");
            "internal server error".to_string()
        }
        EngineError::Credentials(cred_err) => {
            tracing::error!("credentials error: {cred_err}");
            "internal server error".to_string()
        }
        EngineError::Overflow(reason) => {
            tracing::error!("arithmetic overflow: {reason}");
            reason
        }
        other => other.to_string(),
    }
}

impl IntoResponse for ServerError {
    fn into_response(self) -> axum::response::Response {
        let (status, error) = match self {
            ServerError::Engine(err) => {
                (status_for_engine_error(&err), message_for_engine_error(err))
            }
            ServerError::Internal(err) => {
                tracing::error!("internal error: {err}");
                (
                    StatusCode::INTERNAL_SERVER_ERROR,
                    "internal server error".to_string(),
                )
            }
        };

        (status, Json(Error { error })).into_response()
    }
}

impl From<EngineError> for ServerError {
    fn from(value: EngineError) -> Self {
        Self::Engine(value)
    }
}
