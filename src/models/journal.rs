use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use sqlx::FromRow;
use uuid::Uuid;
use validator::Validate;

#[derive(Debug, Clone, Serialize, Deserialize, FromRow)]
pub struct Journal {
    pub id: Uuid,
    pub user_id: Uuid,
    pub header: String,
    pub text: String,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

#[derive(Debug, Deserialize, Validate)]
pub struct CreateJournalRequest {
    #[serde(default)]
    #[validate(length(min = 1, message = "Journal header is required"))]
    pub header: String,

    #[serde(default)]
    #[validate(length(min = 1, message = "Journal text is required"))]
    pub text: String,

    /// Entry timestamp; defaults to now when omitted.
    pub created_at: Option<DateTime<Utc>>,
}

/// Partial update: absent fields keep their stored value.
#[derive(Debug, Deserialize, Validate)]
pub struct UpdateJournalRequest {
    #[validate(length(min = 1, message = "Journal header cannot be empty"))]
    pub header: Option<String>,

    #[validate(length(min = 1, message = "Journal text cannot be empty"))]
    pub text: Option<String>,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_create_requires_header_and_text() {
        let req: CreateJournalRequest = serde_json::from_str(r#"{"header": "Day one"}"#).unwrap();
        let errors = req.validate().unwrap_err();
        assert!(errors.field_errors().contains_key("text"));
    }

    #[test]
    fn test_update_with_no_fields_is_valid() {
        let req: UpdateJournalRequest = serde_json::from_str("{}").unwrap();
        assert!(req.header.is_none());
        assert!(req.text.is_none());
        assert!(req.validate().is_ok());
    }

    #[test]
    fn test_update_distinguishes_absent_from_empty() {
        let req: UpdateJournalRequest = serde_json::from_str(r#"{"header": ""}"#).unwrap();
        assert_eq!(req.header.as_deref(), Some(""));
        assert!(req.validate().is_err());
    }

    #[test]
    fn test_create_accepts_explicit_timestamp() {
        let req: CreateJournalRequest = serde_json::from_str(
            r#"{"header": "h", "text": "t", "created_at": "2024-06-01T09:30:00Z"}"#,
        )
        .unwrap();
        assert!(req.created_at.is_some());
    }
}
