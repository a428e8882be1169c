//! Session bindings: an opaque bearer token maps to exactly one user until
//! logout. Raw tokens are handed to the client once; only their SHA-256
//! digest is persisted, so a leaked sessions table cannot be replayed.

use axum::http::{header::AUTHORIZATION, HeaderMap};
use rand::RngCore;
use serde::Serialize;
use sha2::{Digest, Sha256};
use sqlx::PgPool;
use uuid::Uuid;

use crate::auth::middleware::AuthUser;
use crate::error::AppResult;
use crate::models::user::User;

/// Response for login and signup: the raw session token plus the user it
/// was bound to.
#[derive(Debug, Serialize)]
pub struct SessionResponse {
    pub token: String,
    pub user: User,
}

/// Generate a fresh opaque session token: 32 random bytes, hex-encoded.
pub fn generate_token() -> String {
    let mut bytes = [0u8; 32];
    rand::thread_rng().fill_bytes(&mut bytes);
    hex::encode(bytes)
}

/// Compute SHA-256 hash of a raw token string, returned as lowercase hex.
pub fn hash_token(raw_token: &str) -> String {
    let mut hasher = Sha256::new();
    hasher.update(raw_token.as_bytes());
    format!("{:x}", hasher.finalize())
}

/// Extract the bearer token from the Authorization header, if present.
pub fn bearer_token(headers: &HeaderMap) -> Option<&str> {
    headers
        .get(AUTHORIZATION)?
        .to_str()
        .ok()?
        .strip_prefix("Bearer ")
}

/// Issue a new session binding for the user and return the raw token.
pub async fn create_session(db: &PgPool, user_id: Uuid) -> AppResult<String> {
    let raw_token = generate_token();

    sqlx::query(
        r#"
        INSERT INTO sessions (id, user_id, token_hash)
        VALUES ($1, $2, $3)
        "#,
    )
    .bind(Uuid::new_v4())
    .bind(user_id)
    .bind(hash_token(&raw_token))
    .execute(db)
    .await?;

    Ok(raw_token)
}

/// Resolve a raw token to the user it is bound to. Unknown tokens resolve
/// to `None`, never to an error.
pub async fn resolve_session(db: &PgPool, raw_token: &str) -> AppResult<Option<AuthUser>> {
    let row = sqlx::query_as::<_, (Uuid, String)>(
        r#"
        SELECT u.id, u.username
        FROM sessions s
        JOIN users u ON u.id = s.user_id
        WHERE s.token_hash = $1
        "#,
    )
    .bind(hash_token(raw_token))
    .fetch_optional(db)
    .await?;

    Ok(row.map(|(id, username)| AuthUser { id, username }))
}

/// Clear the binding for a raw token. Idempotent: clearing a token that was
/// never issued (or already cleared) is a no-op.
pub async fn end_session(db: &PgPool, raw_token: &str) -> AppResult<()> {
    sqlx::query("DELETE FROM sessions WHERE token_hash = $1")
        .bind(hash_token(raw_token))
        .execute(db)
        .await?;
    Ok(())
}

/// Fetch the full user record behind a resolved session.
pub async fn session_user(db: &PgPool, user_id: Uuid) -> AppResult<Option<User>> {
    let user = sqlx::query_as::<_, User>("SELECT * FROM users WHERE id = $1")
        .bind(user_id)
        .fetch_optional(db)
        .await?;
    Ok(user)
}

#[cfg(test)]
mod tests {
    use super::*;
    use axum::http::HeaderValue;

    #[test]
    fn test_generate_token_is_hex_of_32_bytes() {
        let token = generate_token();
        assert_eq!(token.len(), 64);
        assert!(token.chars().all(|c| c.is_ascii_hexdigit()));
    }

    #[test]
    fn test_generate_token_is_unique() {
        assert_ne!(generate_token(), generate_token());
    }

    #[test]
    fn test_hash_token_deterministic() {
        let token = "test-session-token-value";
        let h1 = hash_token(token);
        let h2 = hash_token(token);
        assert_eq!(h1, h2);
        assert_eq!(h1.len(), 64); // SHA-256 hex = 64 chars
    }

    #[test]
    fn test_hash_token_different_inputs() {
        let h1 = hash_token("token-a");
        let h2 = hash_token("token-b");
        assert_ne!(h1, h2);
    }

    #[test]
    fn test_bearer_token_extraction() {
        let mut headers = HeaderMap::new();
        headers.insert(AUTHORIZATION, HeaderValue::from_static("Bearer abc123"));
        assert_eq!(bearer_token(&headers), Some("abc123"));
    }

    #[test]
    fn test_bearer_token_missing_header() {
        assert_eq!(bearer_token(&HeaderMap::new()), None);
    }

    #[test]
    fn test_bearer_token_wrong_scheme() {
        let mut headers = HeaderMap::new();
        headers.insert(AUTHORIZATION, HeaderValue::from_static("Basic abc123"));
        assert_eq!(bearer_token(&headers), None);
    }
}
