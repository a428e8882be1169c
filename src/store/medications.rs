use chrono::NaiveDate;
use sqlx::PgPool;
use uuid::Uuid;
use validator::Validate;

use crate::error::{AppError, AppResult};
use crate::models::medication::{CreateMedicationRequest, Medication, UpdateMedicationRequest};

pub async fn list(db: &PgPool, owner: Uuid) -> AppResult<Vec<Medication>> {
    let medications = sqlx::query_as::<_, Medication>(
        "SELECT * FROM medications WHERE user_id = $1 ORDER BY created_at ASC",
    )
    .bind(owner)
    .fetch_all(db)
    .await?;
    Ok(medications)
}

pub async fn create(
    db: &PgPool,
    owner: Uuid,
    req: &CreateMedicationRequest,
) -> AppResult<Medication> {
    req.validate()?;
    let renew_date: NaiveDate = req
        .renew_date
        .ok_or_else(|| AppError::Validation("renew_date: Renewal date is required".into()))?;

    let medication = sqlx::query_as::<_, Medication>(
        r#"
        INSERT INTO medications (id, user_id, drug_name, dosage, prescriber, renew_date)
        VALUES ($1, $2, $3, $4, $5, $6)
        RETURNING *
        "#,
    )
    .bind(Uuid::new_v4())
    .bind(owner)
    .bind(&req.drug_name)
    .bind(req.dosage)
    .bind(&req.prescriber)
    .bind(renew_date)
    .fetch_one(db)
    .await?;

    Ok(medication)
}

pub async fn update(
    db: &PgPool,
    owner: Uuid,
    id: Uuid,
    req: &UpdateMedicationRequest,
) -> AppResult<Medication> {
    req.validate()?;

    let medication = sqlx::query_as::<_, Medication>(
        r#"
        UPDATE medications SET
            drug_name = COALESCE($3, drug_name),
            dosage = COALESCE($4, dosage),
            prescriber = COALESCE($5, prescriber),
            renew_date = COALESCE($6, renew_date),
            updated_at = NOW()
        WHERE id = $1 AND user_id = $2
        RETURNING *
        "#,
    )
    .bind(id)
    .bind(owner)
    .bind(&req.drug_name)
    .bind(req.dosage)
    .bind(&req.prescriber)
    .bind(req.renew_date)
    .fetch_optional(db)
    .await?
    .ok_or(AppError::NotFound("Medication not found".into()))?;

    Ok(medication)
}

pub async fn delete(db: &PgPool, owner: Uuid, id: Uuid) -> AppResult<()> {
    let result = sqlx::query("DELETE FROM medications WHERE id = $1 AND user_id = $2")
        .bind(id)
        .bind(owner)
        .execute(db)
        .await?;

    if result.rows_affected() == 0 {
        return Err(AppError::NotFound("Medication not found".into()));
    }

    Ok(())
}
