//! Users API endpoints: registration, authentication and balance.

use api_types::user::{Balance, UserCredentials, UserNew, UserView};
use axum::{
    Json,
    extract::{Path, State},
    http::StatusCode,
};
use engine::{EngineError, NewUser, User};
use uuid::Uuid;

use crate::{ServerError, server::ServerState};

fn user_view(user: User) -> UserView {
    UserView {
        id: user.id,
        name: user.name,
        email: user.email,
    }
}

pub async fn register(
    State(state): State<ServerState>,
    Json(payload): Json<UserNew>,
) -> Result<(StatusCode, Json<UserView>), ServerError> {
    let user = state
        .engine
        .users()
        .register(NewUser {
            name: payload.name,
            email: payload.email,
            password: payload.password,
        })
        .await?;

    Ok((StatusCode::CREATED, Json(user_view(user))))
}

pub async fn authenticate(
    State(state): State<ServerState>,
    Json(payload): Json<UserCredentials>,
) -> Result<Json<UserView>, ServerError> {
    let user = state
        .engine
        .users()
        .authenticate(&payload.email, &payload.password)
        .await?;

    Ok(Json(user_view(user)))
}

pub async fn balance(
    State(state): State<ServerState>,
    Path(id): Path<Uuid>,
) -> Result<Json<Balance>, ServerError> {
    if state.engine.users().find_by_id(id).await?.is_none() {
        return Err(EngineError::KeyNotFound(format!("user {id}")).into());
    }

    let balance = state.engine.entries().balance_for_user(id).await?;

    Ok(Json(Balance {
        user_id: id,
        balance_minor: balance.cents(),
    }))
}
