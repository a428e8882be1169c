use axum::{
    extract::State,
    http::{HeaderMap, StatusCode},
    response::{IntoResponse, Response},
    Json,
};

use crate::auth::{password::verify_password, session};
use crate::error::{AppError, AppResult};
use crate::models::user::LoginRequest;
use crate::store;
use crate::AppState;

pub async fn login(
    State(state): State<AppState>,
    Json(body): Json<LoginRequest>,
) -> AppResult<(StatusCode, Json<session::SessionResponse>)> {
    let user = store::users::find_by_username(&state.db, &body.username)
        .await?
        .ok_or(AppError::InvalidCredentials)?;

    if !verify_password(&body.password, &user.password_hash)? {
        tracing::debug!(username = %body.username, "Login rejected: bad credentials");
        return Err(AppError::InvalidCredentials);
    }

    let token = session::create_session(&state.db, user.id).await?;
    Ok((
        StatusCode::CREATED,
        Json(session::SessionResponse { token, user }),
    ))
}

/// Clear the presented session binding. A missing or unknown token is a
/// no-op, not an error.
pub async fn logout(State(state): State<AppState>, headers: HeaderMap) -> AppResult<StatusCode> {
    if let Some(token) = session::bearer_token(&headers) {
        session::end_session(&state.db, token).await?;
    }
    Ok(StatusCode::NO_CONTENT)
}

/// Report who the presented token resolves to: 200 with the user, or 204
/// when no valid session is attached.
pub async fn get_session(State(state): State<AppState>, headers: HeaderMap) -> AppResult<Response> {
    let Some(token) = session::bearer_token(&headers) else {
        return Ok(StatusCode::NO_CONTENT.into_response());
    };

    let Some(auth_user) = session::resolve_session(&state.db, token).await? else {
        return Ok(StatusCode::NO_CONTENT.into_response());
    };

    match session::session_user(&state.db, auth_user.id).await? {
        Some(user) => Ok(Json(user).into_response()),
        None => Ok(StatusCode::NO_CONTENT.into_response()),
    }
}
