//! Entries API endpoints
use api_types::entry::{
    EntryPayload, EntrySearch, EntryStatus as ApiStatus, EntryType as ApiType, EntryView,
    StatusUpdate,
};
use axum::{
    Json,
    extract::{Path, Query, State},
    http::StatusCode,
};
use engine::{
    EngineError, Entry, EntryFilter, EntryStatus, EntryType, MoneyCents, validate_entry,
};
use uuid::Uuid;

use crate::{ServerError, server::ServerState};

fn map_type(entry_type: EntryType) -> ApiType {
    match entry_type {
        EntryType::Income => ApiType::Income,
        EntryType::Expense => ApiType::Expense,
    }
}

fn map_status(status: EntryStatus) -> ApiStatus {
    match status {
        EntryStatus::Pending => ApiStatus::Pending,
        EntryStatus::Settled => ApiStatus::Settled,
        EntryStatus::Cancelled => ApiStatus::Cancelled,
    }
}

fn entry_view(entry: Entry) -> Result<EntryView, ServerError> {
    let incomplete = || ServerError::Internal("persisted entry is incomplete".to_string());
    Ok(EntryView {
        id: entry.id.ok_or_else(incomplete)?,
        description: entry.description.ok_or_else(incomplete)?,
        month: entry.month.ok_or_else(incomplete)?,
        year: entry.year.ok_or_else(incomplete)?,
        value_minor: entry.value.ok_or_else(incomplete)?.cents(),
        entry_type: map_type(entry.entry_type.ok_or_else(incomplete)?),
        status: map_status(entry.status.ok_or_else(incomplete)?),
        user: entry.owner.ok_or_else(incomplete)?,
        registration_date: entry.registration_date.ok_or_else(incomplete)?,
    })
}

/// Resolves the user id to an existing user. An unknown id becomes `None`,
/// so validation reports it as a missing user in its usual order.
async fn known_owner(
    state: &ServerState,
    user_id: Option<Uuid>,
) -> Result<Option<Uuid>, ServerError> {
    let Some(user_id) = user_id else {
        return Ok(None);
    };
    Ok(state
        .engine
        .users()
        .find_by_id(user_id)
        .await?
        .map(|user| user.id))
}

/// Converts a request body into an engine entry.
///
/// Errors follow the validation order (description, month, year, user,
/// value, type), then the status. A value that does not parse is reported
/// as an invalid value; an unknown type as an invalid entry type once every
/// earlier field is fine.
async fn to_entry(state: &ServerState, payload: EntryPayload) -> Result<Entry, ServerError> {
    let entry_type = payload
        .entry_type
        .as_deref()
        .map(EntryType::try_from)
        .transpose();
    let status = payload
        .status
        .as_deref()
        .map(EntryStatus::try_from)
        .transpose();

    let mut entry = Entry {
        id: None,
        description: payload.description,
        month: payload.month,
        year: payload.year,
        value: payload
            .value
            .as_deref()
            .and_then(|value| value.parse::<MoneyCents>().ok()),
        entry_type: None,
        status: None,
        owner: known_owner(state, payload.user).await?,
        registration_date: None,
    };

    match entry_type {
        Ok(entry_type) => entry.entry_type = entry_type,
        Err(err) => {
            // Any earlier bad field wins over the unknown type.
            validate_entry(&Entry {
                entry_type: Some(EntryType::Expense),
                ..entry
            })?;
            return Err(err.into());
        }
    }
    validate_entry(&entry)?;
    entry.status = status?;

    Ok(entry)
}

async fn require_entry(state: &ServerState, id: Uuid) -> Result<Entry, ServerError> {
    state
        .engine
        .entries()
        .find_by_id(id)
        .await?
        .ok_or_else(|| EngineError::KeyNotFound(format!("entry {id}")).into())
}

pub async fn create(
    State(state): State<ServerState>,
    Json(payload): Json<EntryPayload>,
) -> Result<(StatusCode, Json<EntryView>), ServerError> {
    let entry = to_entry(&state, payload).await?;
    let saved = state.engine.entries().save(entry).await?;

    Ok((StatusCode::CREATED, Json(entry_view(saved)?)))
}

pub async fn update(
    State(state): State<ServerState>,
    Path(id): Path<Uuid>,
    Json(payload): Json<EntryPayload>,
) -> Result<Json<EntryView>, ServerError> {
    require_entry(&state, id).await?;

    let mut entry = to_entry(&state, payload).await?;
    entry.id = Some(id);
    let updated = state.engine.entries().update(entry).await?;

    Ok(Json(entry_view(updated)?))
}

pub async fn update_status(
    State(state): State<ServerState>,
    Path(id): Path<Uuid>,
    Json(payload): Json<StatusUpdate>,
) -> Result<Json<EntryView>, ServerError> {
    let entry = require_entry(&state, id).await?;
    let status = EntryStatus::try_from(payload.status.as_str())?;

    let updated = state.engine.entries().update_status(entry, status).await?;

    Ok(Json(entry_view(updated)?))
}

pub async fn delete(
    State(state): State<ServerState>,
    Path(id): Path<Uuid>,
) -> Result<StatusCode, ServerError> {
    let entry = require_entry(&state, id).await?;
    state.engine.entries().delete(&entry).await?;

    Ok(StatusCode::NO_CONTENT)
}

pub async fn search(
    State(state): State<ServerState>,
    Query(query): Query<EntrySearch>,
) -> Result<Json<Vec<EntryView>>, ServerError> {
    let owner = known_owner(&state, query.user)
        .await?
        .ok_or_else(|| EngineError::Validation("invalid user".to_string()))?;

    let entries = state
        .engine
        .entries()
        .search(&EntryFilter {
            description: query.description,
            month: query.month,
            year: query.year,
            owner: Some(owner),
        })
        .await?;

    entries
        .into_iter()
        .map(entry_view)
        .collect::<Result<Vec<_>, _>>()
        .map(Json)
}
