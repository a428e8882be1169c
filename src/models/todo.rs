use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use sqlx::FromRow;
use uuid::Uuid;
use validator::Validate;

#[derive(Debug, Clone, Serialize, Deserialize, FromRow)]
pub struct Todo {
    pub id: Uuid,
    pub user_id: Uuid,
    pub task_text: String,
    pub completed: bool,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

#[derive(Debug, Deserialize, Validate)]
pub struct CreateTodoRequest {
    #[serde(default)]
    #[validate(length(min = 1, message = "Task text is required"))]
    pub task_text: String,

    /// Defaults to false.
    pub completed: Option<bool>,

    /// Entry timestamp; defaults to now when omitted.
    pub created_at: Option<DateTime<Utc>>,
}

/// Partial update: absent fields keep their stored value.
#[derive(Debug, Deserialize, Validate)]
pub struct UpdateTodoRequest {
    #[validate(length(min = 1, message = "Task text cannot be empty"))]
    pub task_text: Option<String>,

    pub completed: Option<bool>,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_create_requires_task_text() {
        let req: CreateTodoRequest = serde_json::from_str("{}").unwrap();
        let errors = req.validate().unwrap_err();
        assert!(errors.field_errors().contains_key("task_text"));
    }

    #[test]
    fn test_completed_defaults_to_absent() {
        let req: CreateTodoRequest = serde_json::from_str(r#"{"task_text": "refill"}"#).unwrap();
        assert!(req.completed.is_none());
    }

    #[test]
    fn test_update_toggle_only_touches_completed() {
        let req: UpdateTodoRequest = serde_json::from_str(r#"{"completed": true}"#).unwrap();
        assert_eq!(req.completed, Some(true));
        assert!(req.task_text.is_none());
        assert!(req.validate().is_ok());
    }
}
