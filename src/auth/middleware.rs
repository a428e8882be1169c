use axum::{
    extract::{Request, State},
    middleware::Next,
    response::Response,
};
use uuid::Uuid;

use crate::auth::session;
use crate::error::AppError;
use crate::AppState;

/// Identity resolved from the session binding, injected into request
/// extensions. Handlers and stores only ever see this resolved id.
#[derive(Debug, Clone)]
pub struct AuthUser {
    pub id: Uuid,
    pub username: String,
}

pub async fn require_auth(
    State(state): State<AppState>,
    mut req: Request,
    next: Next,
) -> Result<Response, AppError> {
    let token = session::bearer_token(req.headers()).ok_or(AppError::Unauthenticated)?;

    let auth_user = session::resolve_session(&state.db, token)
        .await?
        .ok_or(AppError::Unauthenticated)?;

    req.extensions_mut().insert(auth_user);
    Ok(next.run(req).await)
}
