use axum::{
    extract::{Path, State},
    http::StatusCode,
    Extension, Json,
};
use uuid::Uuid;

use crate::auth::middleware::AuthUser;
use crate::error::AppResult;
use crate::models::journal::{CreateJournalRequest, Journal, UpdateJournalRequest};
use crate::store;
use crate::AppState;

pub async fn list_journals(
    State(state): State<AppState>,
    Extension(auth_user): Extension<AuthUser>,
) -> AppResult<Json<Vec<Journal>>> {
    let journals = store::journals::list(&state.db, auth_user.id).await?;
    Ok(Json(journals))
}

pub async fn create_journal(
    State(state): State<AppState>,
    Extension(auth_user): Extension<AuthUser>,
    Json(body): Json<CreateJournalRequest>,
) -> AppResult<(StatusCode, Json<Journal>)> {
    let journal = store::journals::create(&state.db, auth_user.id, &body).await?;
    Ok((StatusCode::CREATED, Json(journal)))
}

pub async fn update_journal(
    State(state): State<AppState>,
    Extension(auth_user): Extension<AuthUser>,
    Path(journal_id): Path<Uuid>,
    Json(body): Json<UpdateJournalRequest>,
) -> AppResult<Json<Journal>> {
    let journal = store::journals::update(&state.db, auth_user.id, journal_id, &body).await?;
    Ok(Json(journal))
}

pub async fn delete_journal(
    State(state): State<AppState>,
    Extension(auth_user): Extension<AuthUser>,
    Path(journal_id): Path<Uuid>,
) -> AppResult<Json<serde_json::Value>> {
    store::journals::delete(&state.db, auth_user.id, journal_id).await?;
    Ok(Json(serde_json::json!({ "deleted": true })))
}
