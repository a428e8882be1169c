use sqlx::PgPool;
use uuid::Uuid;
use validator::Validate;

use crate::error::{AppError, AppResult};
use crate::models::journal::{CreateJournalRequest, Journal, UpdateJournalRequest};

pub async fn list(db: &PgPool, owner: Uuid) -> AppResult<Vec<Journal>> {
    let journals = sqlx::query_as::<_, Journal>(
        "SELECT * FROM journals WHERE user_id = $1 ORDER BY created_at ASC",
    )
    .bind(owner)
    .fetch_all(db)
    .await?;
    Ok(journals)
}

pub async fn create(db: &PgPool, owner: Uuid, req: &CreateJournalRequest) -> AppResult<Journal> {
    req.validate()?;

    let journal = sqlx::query_as::<_, Journal>(
        r#"
        INSERT INTO journals (id, user_id, header, text, created_at)
        VALUES ($1, $2, $3, $4, COALESCE($5, NOW()))
        RETURNING *
        "#,
    )
    .bind(Uuid::new_v4())
    .bind(owner)
    .bind(&req.header)
    .bind(&req.text)
    .bind(req.created_at)
    .fetch_one(db)
    .await?;

    Ok(journal)
}

pub async fn update(
    db: &PgPool,
    owner: Uuid,
    id: Uuid,
    req: &UpdateJournalRequest,
) -> AppResult<Journal> {
    req.validate()?;

    let journal = sqlx::query_as::<_, Journal>(
        r#"
        UPDATE journals SET
            header = COALESCE($3, header),
            text = COALESCE($4, text),
            updated_at = NOW()
        WHERE id = $1 AND user_id = $2
        RETURNING *
        "#,
    )
    .bind(id)
    .bind(owner)
    .bind(&req.header)
    .bind(&req.text)
    .fetch_optional(db)
    .await?
    .ok_or(AppError::NotFound("Journal not found".into()))?;

    Ok(journal)
}

pub async fn delete(db: &PgPool, owner: Uuid, id: Uuid) -> AppResult<()> {
    let result = sqlx::query("DELETE FROM journals WHERE id = $1 AND user_id = $2")
        .bind(id)
        .bind(owner)
        .execute(db)
        .await?;

    if result.rows_affected() == 0 {
        return Err(AppError::NotFound("Journal not found".into()));
    }

    Ok(())
}
