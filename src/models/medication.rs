use chrono::{DateTime, NaiveDate, Utc};
use serde::{Deserialize, Serialize};
use sqlx::FromRow;
use uuid::Uuid;
use validator::Validate;

#[derive(Debug, Clone, Serialize, Deserialize, FromRow)]
pub struct Medication {
    pub id: Uuid,
    pub user_id: Uuid,
    pub drug_name: String,
    pub dosage: i32,
    pub prescriber: String,
    pub renew_date: NaiveDate,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

#[derive(Debug, Deserialize, Validate)]
pub struct CreateMedicationRequest {
    #[serde(default)]
    #[validate(length(min = 1, message = "Drug name is required"))]
    pub drug_name: String,

    #[serde(default)]
    #[validate(range(min = 1, message = "Dosage must be a positive amount"))]
    pub dosage: i32,

    #[serde(default)]
    #[validate(length(min = 1, message = "Prescriber is required"))]
    pub prescriber: String,

    /// Renewal date, YYYY-MM-DD. Required; checked in the handler so the
    /// error can name the field.
    pub renew_date: Option<NaiveDate>,
}

/// Partial update: absent fields keep their stored value.
#[derive(Debug, Deserialize, Validate)]
pub struct UpdateMedicationRequest {
    #[validate(length(min = 1, message = "Drug name cannot be empty"))]
    pub drug_name: Option<String>,

    #[validate(range(min = 1, message = "Dosage must be a positive amount"))]
    pub dosage: Option<i32>,

    #[validate(length(min = 1, message = "Prescriber cannot be empty"))]
    pub prescriber: Option<String>,

    pub renew_date: Option<NaiveDate>,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_create_requires_drug_name() {
        let req: CreateMedicationRequest = serde_json::from_str(
            r#"{"dosage": 20, "prescriber": "Dr. Ellis", "renew_date": "2024-09-01"}"#,
        )
        .unwrap();
        let errors = req.validate().unwrap_err();
        assert!(errors.field_errors().contains_key("drug_name"));
    }

    #[test]
    fn test_create_rejects_zero_dosage() {
        let req: CreateMedicationRequest = serde_json::from_str(
            r#"{"drug_name": "Sertraline", "prescriber": "Dr. Ellis", "renew_date": "2024-09-01"}"#,
        )
        .unwrap();
        let errors = req.validate().unwrap_err();
        assert!(errors.field_errors().contains_key("dosage"));
    }

    #[test]
    fn test_renew_date_parses_calendar_form() {
        let req: CreateMedicationRequest = serde_json::from_str(
            r#"{"drug_name": "Sertraline", "dosage": 50, "prescriber": "Dr. Ellis", "renew_date": "2024-09-01"}"#,
        )
        .unwrap();
        assert_eq!(
            req.renew_date,
            Some(NaiveDate::from_ymd_opt(2024, 9, 1).unwrap())
        );
        assert!(req.validate().is_ok());
    }

    #[test]
    fn test_malformed_renew_date_rejected_by_serde() {
        let parsed: Result<CreateMedicationRequest, _> = serde_json::from_str(
            r#"{"drug_name": "Sertraline", "dosage": 50, "prescriber": "Dr. Ellis", "renew_date": "September 1st"}"#,
        );
        assert!(parsed.is_err());
    }

    #[test]
    fn test_update_validates_only_supplied_fields() {
        let req: UpdateMedicationRequest = serde_json::from_str(r#"{"dosage": 75}"#).unwrap();
        assert!(req.validate().is_ok());
        assert!(req.drug_name.is_none());
        assert_eq!(req.dosage, Some(75));
    }
}
