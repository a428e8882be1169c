use sqlx::PgPool;
use uuid::Uuid;

use crate::error::{AppError, AppResult};
use crate::models::user::{CreateUserRequest, User};

pub async fn list(db: &PgPool) -> AppResult<Vec<User>> {
    let users = sqlx::query_as::<_, User>("SELECT * FROM users ORDER BY created_at ASC")
        .fetch_all(db)
        .await?;
    Ok(users)
}

pub async fn get(db: &PgPool, id: Uuid) -> AppResult<Option<User>> {
    let user = sqlx::query_as::<_, User>("SELECT * FROM users WHERE id = $1")
        .bind(id)
        .fetch_optional(db)
        .await?;
    Ok(user)
}

pub async fn find_by_username(db: &PgPool, username: &str) -> AppResult<Option<User>> {
    let user = sqlx::query_as::<_, User>("SELECT * FROM users WHERE username = $1")
        .bind(username)
        .fetch_optional(db)
        .await?;
    Ok(user)
}

pub async fn create(db: &PgPool, req: &CreateUserRequest, password_hash: &str) -> AppResult<User> {
    let existing = sqlx::query_scalar::<_, i64>("SELECT COUNT(*) FROM users WHERE username = $1")
        .bind(&req.username)
        .fetch_one(db)
        .await?;

    if existing > 0 {
        return Err(AppError::DuplicateUsername);
    }

    let user = sqlx::query_as::<_, User>(
        r#"
        INSERT INTO users (id, username, first_name, last_name, password_hash)
        VALUES ($1, $2, $3, $4, $5)
        RETURNING *
        "#,
    )
    .bind(Uuid::new_v4())
    .bind(&req.username)
    .bind(&req.first_name)
    .bind(&req.last_name)
    .bind(password_hash)
    .fetch_one(db)
    .await
    // Two signups can race past the COUNT; the unique index settles it.
    .map_err(|e| match &e {
        sqlx::Error::Database(db_err) if db_err.is_unique_violation() => {
            AppError::DuplicateUsername
        }
        _ => AppError::from(e),
    })?;

    Ok(user)
}
