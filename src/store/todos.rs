use sqlx::PgPool;
use uuid::Uuid;
use validator::Validate;

use crate::error::{AppError, AppResult};
use crate::models::todo::{CreateTodoRequest, Todo, UpdateTodoRequest};

pub async fn list(db: &PgPool, owner: Uuid) -> AppResult<Vec<Todo>> {
    let todos = sqlx::query_as::<_, Todo>(
        "SELECT * FROM todos WHERE user_id = $1 ORDER BY created_at ASC",
    )
    .bind(owner)
    .fetch_all(db)
    .await?;
    Ok(todos)
}

pub async fn create(db: &PgPool, owner: Uuid, req: &CreateTodoRequest) -> AppResult<Todo> {
    req.validate()?;

    let todo = sqlx::query_as::<_, Todo>(
        r#"
        INSERT INTO todos (id, user_id, task_text, completed, created_at)
        VALUES ($1, $2, $3, $4, COALESCE($5, NOW()))
        RETURNING *
        "#,
    )
    .bind(Uuid::new_v4())
    .bind(owner)
    .bind(&req.task_text)
    .bind(req.completed.unwrap_or(false))
    .bind(req.created_at)
    .fetch_one(db)
    .await?;

    Ok(todo)
}

pub async fn update(db: &PgPool, owner: Uuid, id: Uuid, req: &UpdateTodoRequest) -> AppResult<Todo> {
    req.validate()?;

    let todo = sqlx::query_as::<_, Todo>(
        r#"
        UPDATE todos SET
            task_text = COALESCE($3, task_text),
            completed = COALESCE($4, completed),
            updated_at = NOW()
        WHERE id = $1 AND user_id = $2
        RETURNING *
        "#,
    )
    .bind(id)
    .bind(owner)
    .bind(&req.task_text)
    .bind(req.completed)
    .fetch_optional(db)
    .await?
    .ok_or(AppError::NotFound("Todo not found".into()))?;

    Ok(todo)
}

pub async fn delete(db: &PgPool, owner: Uuid, id: Uuid) -> AppResult<()> {
    let result = sqlx::query("DELETE FROM todos WHERE id = $1 AND user_id = $2")
        .bind(id)
        .bind(owner)
        .execute(db)
        .await?;

    if result.rows_affected() == 0 {
        return Err(AppError::NotFound("Todo not found".into()));
    }

    Ok(())
}
