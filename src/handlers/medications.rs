use axum::{
    extract::{Path, State},
    http::StatusCode,
    Extension, Json,
};
use uuid::Uuid;

use crate::auth::middleware::AuthUser;
use crate::error::AppResult;
use crate::models::medication::{CreateMedicationRequest, Medication, UpdateMedicationRequest};
use crate::store;
use crate::AppState;

pub async fn list_medications(
    State(state): State<AppState>,
    Extension(auth_user): Extension<AuthUser>,
) -> AppResult<Json<Vec<Medication>>> {
    let medications = store::medications::list(&state.db, auth_user.id).await?;
    Ok(Json(medications))
}

pub async fn create_medication(
    State(state): State<AppState>,
    Extension(auth_user): Extension<AuthUser>,
    Json(body): Json<CreateMedicationRequest>,
) -> AppResult<(StatusCode, Json<Medication>)> {
    let medication = store::medications::create(&state.db, auth_user.id, &body).await?;
    Ok((StatusCode::CREATED, Json(medication)))
}

pub async fn update_medication(
    State(state): State<AppState>,
    Extension(auth_user): Extension<AuthUser>,
    Path(medication_id): Path<Uuid>,
    Json(body): Json<UpdateMedicationRequest>,
) -> AppResult<Json<Medication>> {
    let medication =
        store::medications::update(&state.db, auth_user.id, medication_id, &body).await?;
    Ok(Json(medication))
}

pub async fn delete_medication(
    State(state): State<AppState>,
    Extension(auth_user): Extension<AuthUser>,
    Path(medication_id): Path<Uuid>,
) -> AppResult<Json<serde_json::Value>> {
    store::medications::delete(&state.db, auth_user.id, medication_id).await?;
    Ok(Json(serde_json::json!({ "deleted": true })))
}
