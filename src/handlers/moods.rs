use axum::{extract::State, http::StatusCode, Extension, Json};
use chrono::Utc;

use crate::auth::middleware::AuthUser;
use crate::error::AppResult;
use crate::models::mood::{Mood, SubmitMoodRequest};
use crate::store::moods::{self, SubmitOutcome};
use crate::AppState;

/// Record today's (or the given day's) rating: 201 when the day was blank,
/// 200 when an existing rating was revised.
pub async fn submit_mood(
    State(state): State<AppState>,
    Extension(auth_user): Extension<AuthUser>,
    Json(body): Json<SubmitMoodRequest>,
) -> AppResult<(StatusCode, Json<Mood>)> {
    let date = body.date.unwrap_or_else(|| Utc::now().date_naive());

    let (mood, outcome) = moods::submit(&state.db, auth_user.id, body.rating, date).await?;

    let status = match outcome {
        SubmitOutcome::Created => StatusCode::CREATED,
        SubmitOutcome::Updated => StatusCode::OK,
    };
    Ok((status, Json(mood)))
}

pub async fn list_moods(
    State(state): State<AppState>,
    Extension(auth_user): Extension<AuthUser>,
) -> AppResult<Json<Vec<Mood>>> {
    let moods = moods::list(&state.db, auth_user.id).await?;
    Ok(Json(moods))
}
