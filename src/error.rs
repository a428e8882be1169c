use axum::{
    http::StatusCode,
    response::{IntoResponse, Response},
    Json,
};
use serde_json::json;

#[derive(Debug, thiserror::Error)]
pub enum AppError {
    #[error("Authentication required")]
    Unauthenticated,

    #[error("Username or password was invalid")]
    InvalidCredentials,

    #[error("Not found: {0}")]
    NotFound(String),

    #[error("Validation error: {0}")]
    Validation(String),

    #[error("Username is already taken")]
    DuplicateUsername,

    // Signup rejections keep the 406 contract of the original client.
    #[error("Could not create account: {0}")]
    SignupInvalid(String),

    #[error("Database error: {0}")]
    Database(#[from] sqlx::Error),

    #[error("Internal error: {0}")]
    Internal(#[from] anyhow::Error),
}

impl IntoResponse for AppError {
    fn into_response(self) -> Response {
        let (status, message) = match &self {
            AppError::Unauthenticated => (StatusCode::UNAUTHORIZED, self.to_string()),
            AppError::InvalidCredentials => (StatusCode::UNAUTHORIZED, self.to_string()),
            AppError::NotFound(msg) => (StatusCode::NOT_FOUND, msg.clone()),
            AppError::Validation(msg) => (StatusCode::BAD_REQUEST, msg.clone()),
            AppError::DuplicateUsername => (StatusCode::NOT_ACCEPTABLE, self.to_string()),
            AppError::SignupInvalid(msg) => (StatusCode::NOT_ACCEPTABLE, msg.clone()),
            AppError::Database(e) => {
                tracing::error!(error = %e, "Database error");
                (
                    StatusCode::INTERNAL_SERVER_ERROR,
                    "Internal server error".into(),
                )
            }
            AppError::Internal(e) => {
                tracing::error!(error = %e, "Internal error");
                (
                    StatusCode::INTERNAL_SERVER_ERROR,
                    "Internal server error".into(),
                )
            }
        };

        let body = json!({
            "error": {
                "message": message,
                "code": status.as_u16(),
            }
        });

        (status, Json(body)).into_response()
    }
}

impl From<validator::ValidationErrors> for AppError {
    fn from(errors: validator::ValidationErrors) -> Self {
        AppError::Validation(first_error_message(&errors))
    }
}

/// Flatten a validator error set into a single "field: problem" message.
pub fn first_error_message(errors: &validator::ValidationErrors) -> String {
    errors
        .field_errors()
        .into_iter()
        .next()
        .map(|(field, field_errors)| {
            match field_errors.first().and_then(|e| e.message.as_ref()) {
                Some(message) => format!("{}: {}", field, message),
                None => format!("{} is invalid", field),
            }
        })
        .unwrap_or_else(|| "Invalid request body".into())
}

pub type AppResult<T> = Result<T, AppError>;

#[cfg(test)]
mod tests {
    use super::*;

    fn status_of(err: AppError) -> StatusCode {
        err.into_response().status()
    }

    #[test]
    fn test_auth_errors_map_to_401() {
        assert_eq!(status_of(AppError::Unauthenticated), StatusCode::UNAUTHORIZED);
        assert_eq!(
            status_of(AppError::InvalidCredentials),
            StatusCode::UNAUTHORIZED
        );
    }

    #[test]
    fn test_not_found_maps_to_404() {
        assert_eq!(
            status_of(AppError::NotFound("Journal not found".into())),
            StatusCode::NOT_FOUND
        );
    }

    #[test]
    fn test_validation_maps_to_400() {
        assert_eq!(
            status_of(AppError::Validation("rating: out of range".into())),
            StatusCode::BAD_REQUEST
        );
    }

    #[test]
    fn test_signup_errors_map_to_406() {
        assert_eq!(
            status_of(AppError::DuplicateUsername),
            StatusCode::NOT_ACCEPTABLE
        );
        assert_eq!(
            status_of(AppError::SignupInvalid("password too short".into())),
            StatusCode::NOT_ACCEPTABLE
        );
    }

    #[test]
    fn test_persistence_errors_do_not_leak_detail() {
        let response = AppError::Database(sqlx::Error::PoolTimedOut).into_response();
        assert_eq!(response.status(), StatusCode::INTERNAL_SERVER_ERROR);
    }
}
