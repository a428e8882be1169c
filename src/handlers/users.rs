use axum::{
    extract::{Path, State},
    http::StatusCode,
    Json,
};
use uuid::Uuid;
use validator::Validate;

use crate::auth::{password::hash_password, session};
use crate::error::{first_error_message, AppError, AppResult};
use crate::models::user::{CreateUserRequest, User};
use crate::store;
use crate::AppState;

pub async fn list_users(State(state): State<AppState>) -> AppResult<Json<Vec<User>>> {
    let users = store::users::list(&state.db).await?;
    Ok(Json(users))
}

pub async fn get_user(
    State(state): State<AppState>,
    Path(user_id): Path<Uuid>,
) -> AppResult<Json<User>> {
    let user = store::users::get(&state.db, user_id)
        .await?
        .ok_or(AppError::NotFound("User not found".into()))?;
    Ok(Json(user))
}

/// Signup. Creates the identity and binds a session in one step.
pub async fn create_user(
    State(state): State<AppState>,
    Json(body): Json<CreateUserRequest>,
) -> AppResult<(StatusCode, Json<session::SessionResponse>)> {
    // Signup keeps the legacy 406 contract for bad input.
    if let Err(errors) = body.validate() {
        return Err(AppError::SignupInvalid(first_error_message(&errors)));
    }

    let password_hash = hash_password(&body.password)?;
    let user = store::users::create(&state.db, &body, &password_hash).await?;

    tracing::info!(user_id = %user.id, "New account registered");

    let token = session::create_session(&state.db, user.id).await?;
    Ok((
        StatusCode::CREATED,
        Json(session::SessionResponse { token, user }),
    ))
}
