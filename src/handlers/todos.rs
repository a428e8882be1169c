use axum::{
    extract::{Path, State},
    http::StatusCode,
    Extension, Json,
};
use uuid::Uuid;

use crate::auth::middleware::AuthUser;
use crate::error::AppResult;
use crate::models::todo::{CreateTodoRequest, Todo, UpdateTodoRequest};
use crate::store;
use crate::AppState;

pub async fn list_todos(
    State(state): State<AppState>,
    Extension(auth_user): Extension<AuthUser>,
) -> AppResult<Json<Vec<Todo>>> {
    let todos = store::todos::list(&state.db, auth_user.id).await?;
    Ok(Json(todos))
}

pub async fn create_todo(
    State(state): State<AppState>,
    Extension(auth_user): Extension<AuthUser>,
    Json(body): Json<CreateTodoRequest>,
) -> AppResult<(StatusCode, Json<Todo>)> {
    let todo = store::todos::create(&state.db, auth_user.id, &body).await?;
    Ok((StatusCode::CREATED, Json(todo)))
}

pub async fn update_todo(
    State(state): State<AppState>,
    Extension(auth_user): Extension<AuthUser>,
    Path(todo_id): Path<Uuid>,
    Json(body): Json<UpdateTodoRequest>,
) -> AppResult<Json<Todo>> {
    let todo = store::todos::update(&state.db, auth_user.id, todo_id, &body).await?;
    Ok(Json(todo))
}

pub async fn delete_todo(
    State(state): State<AppState>,
    Extension(auth_user): Extension<AuthUser>,
    Path(todo_id): Path<Uuid>,
) -> AppResult<Json<serde_json::Value>> {
    store::todos::delete(&state.db, auth_user.id, todo_id).await?;
    Ok(Json(serde_json::json!({ "deleted": true })))
}
