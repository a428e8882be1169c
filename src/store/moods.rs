//! Mood ledger: at most one rating per (owner, calendar day). Generic
//! create/update would happily insert a second row for the same day, so
//! submissions go through a dedicated check-and-upsert instead.

use chrono::NaiveDate;
use sqlx::PgPool;
use uuid::Uuid;

use crate::error::{AppError, AppResult};
use crate::models::mood::Mood;

/// Whether a submission started a new day-record or revised an existing one.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SubmitOutcome {
    Created,
    Updated,
}

pub(crate) fn validate_rating(rating: i16) -> AppResult<()> {
    if !(1..=5).contains(&rating) {
        return Err(AppError::Validation(
            "rating: Mood rating must be between 1 and 5".into(),
        ));
    }
    Ok(())
}

/// Record a rating for (owner, date). The lookup and write run in one
/// transaction; the UNIQUE (user_id, entry_date) constraint settles any
/// concurrent submit that slips past the row lock.
pub async fn submit(
    db: &PgPool,
    owner: Uuid,
    rating: i16,
    date: NaiveDate,
) -> AppResult<(Mood, SubmitOutcome)> {
    validate_rating(rating)?;

    let mut tx = db.begin().await?;

    let existing = sqlx::query_scalar::<_, Uuid>(
        "SELECT id FROM mood_entries WHERE user_id = $1 AND entry_date = $2 FOR UPDATE",
    )
    .bind(owner)
    .bind(date)
    .fetch_optional(&mut *tx)
    .await?;

    let (mood, outcome) = match existing {
        Some(id) => {
            // Revise in place; id and dates stay as originally recorded.
            let mood = sqlx::query_as::<_, Mood>(
                r#"
                UPDATE mood_entries SET rating = $3, updated_at = NOW()
                WHERE id = $1 AND user_id = $2
                RETURNING *
                "#,
            )
            .bind(id)
            .bind(owner)
            .bind(rating)
            .fetch_one(&mut *tx)
            .await?;
            (mood, SubmitOutcome::Updated)
        }
        None => {
            let mood = sqlx::query_as::<_, Mood>(
                r#"
                INSERT INTO mood_entries (id, user_id, entry_date, rating)
                VALUES ($1, $2, $3, $4)
                ON CONFLICT (user_id, entry_date) DO UPDATE
                    SET rating = $4, updated_at = NOW()
                RETURNING *
                "#,
            )
            .bind(Uuid::new_v4())
            .bind(owner)
            .bind(date)
            .bind(rating)
            .fetch_one(&mut *tx)
            .await?;
            (mood, SubmitOutcome::Created)
        }
    };

    tx.commit().await?;
    Ok((mood, outcome))
}

pub async fn list(db: &PgPool, owner: Uuid) -> AppResult<Vec<Mood>> {
    let moods = sqlx::query_as::<_, Mood>(
        "SELECT * FROM mood_entries WHERE user_id = $1 ORDER BY entry_date DESC",
    )
    .bind(owner)
    .fetch_all(db)
    .await?;
    Ok(moods)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_ratings_in_range_accepted() {
        for rating in 1..=5 {
            assert!(validate_rating(rating).is_ok());
        }
    }

    #[test]
    fn test_ratings_out_of_range_rejected() {
        for rating in [-1, 0, 6, 100] {
            let err = validate_rating(rating).unwrap_err();
            assert!(matches!(err, AppError::Validation(_)));
        }
    }
}
