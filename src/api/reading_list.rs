use axum::{
    Form, Json,
    extract::{Path, Query, State},
    http::StatusCode,
    response::IntoResponse,
};
use serde::Deserialize;
use serde_json::{Value, json};

use crate::auth::Claims;
use crate::domain::{DomainError, NewSavedBook, ReadingStatus};
use crate::infrastructure::AppState;
use crate::services::reading_list_service;

pub async fn add_book(
    State(state): State<AppState>,
    claims: Claims,
    Form(book): Form<NewSavedBook>,
) -> Result<impl IntoResponse, DomainError> {
    let outcome = reading_list_service::add_to_list(
        state.book_repo.as_ref(),
        state.reading_list_repo.as_ref(),
        claims.user_id(),
        book,
    )
    .await?;

    let status = if outcome.created {
        StatusCode::CREATED
    } else {
        StatusCode::OK
    };

    Ok((
        status,
        Json(json!({
            "message": outcome.message(),
            "created": outcome.created,
            "entry": outcome.entry,
            "book": outcome.book,
        })),
    ))
}

// Any id that cannot name a stored entry is simply not found
fn parse_entry_id(raw: &str) -> Result<i32, DomainError> {
    raw.parse::<i32>().map_err(|_| DomainError::NotFound)
}

pub async fn remove_book(
    State(state): State<AppState>,
    claims: Claims,
    Path(entry_id): Path<String>,
) -> Result<Json<Value>, DomainError> {
    let entry_id = parse_entry_id(&entry_id)?;
    reading_list_service::remove_from_list(
        state.reading_list_repo.as_ref(),
        claims.user_id(),
        entry_id,
    )
    .await?;

    Ok(Json(json!({ "message": "Book removed from your list" })))
}

#[derive(Debug, Deserialize)]
pub struct StatusForm {
    #[serde(default)]
    pub status: String,
}

pub async fn update_status(
    State(state): State<AppState>,
    claims: Claims,
    Path(entry_id): Path<String>,
    Form(form): Form<StatusForm>,
) -> Result<Json<Value>, DomainError> {
    let entry_id = parse_entry_id(&entry_id)?;
    let update = reading_list_service::update_status(
        state.reading_list_repo.as_ref(),
        claims.user_id(),
        entry_id,
        &form.status,
    )
    .await?;

    let message = if update.was_updated() {
        "Status updated"
    } else {
        "Unknown status, nothing changed"
    };

    Ok(Json(json!({
        "message": message,
        "updated": update.was_updated(),
        "entry": update.entry(),
    })))
}

#[derive(Debug, Deserialize)]
pub struct ProfileParams {
    pub status: Option<String>,
}

pub async fn profile(
    State(state): State<AppState>,
    claims: Claims,
    Query(params): Query<ProfileParams>,
) -> Result<Json<Value>, DomainError> {
    let entries = reading_list_service::list_entries(
        state.reading_list_repo.as_ref(),
        claims.user_id(),
        params.status.as_deref(),
    )
    .await?;

    let statuses: Vec<Value> = ReadingStatus::ALL
        .iter()
        .map(|s| json!({ "value": s, "label": s.label() }))
        .collect();

    Ok(Json(json!({
        "username": claims.sub,
        "total": entries.len(),
        "entries": entries,
        "statuses": statuses,
    })))
}
