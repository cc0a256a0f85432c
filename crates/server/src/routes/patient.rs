//! Patient resource HTTP handlers
//!
//! Every handler takes a [`DbConn`] first: the connection is acquired before
//! the path or body is extracted and dropped when the handler returns.

use axum::{Json, extract::Path};
use diagnosis_core::{Message, Patient};

use crate::db::DbConn;
use crate::error::AppError;
use crate::extract::JsonBody;

/// POST /patients/ - Insert a new patient
pub async fn create(
    DbConn(mut conn): DbConn,
    JsonBody(patient): JsonBody<Patient>,
) -> Result<Json<Message>, AppError> {
    conn.insert(&patient).await?;
    Ok(Json(Message::added()))
}

/// GET /patients/{patient_id} - Read a patient
pub async fn read(
    DbConn(mut conn): DbConn,
    Path(patient_id): Path<String>,
) -> Result<Json<Patient>, AppError> {
    match conn.find(&patient_id).await? {
        Some(patient) => Ok(Json(patient)),
        None => Err(AppError::NotFound(patient_id)),
    }
}

/// PUT /patients/{patient_id} - Update a patient's diagnosis
///
/// Only the path id addresses the row; the body's `id` is not used.
pub async fn update(
    DbConn(mut conn): DbConn,
    Path(patient_id): Path<String>,
    JsonBody(patient): JsonBody<Patient>,
) -> Result<Json<Message>, AppError> {
    if patient.id != patient_id {
        tracing::debug!(
            patient_id = %patient_id,
            body_id = %patient.id,
            "Body id differs from path id, addressing by path"
        );
    }

    let affected = conn
        .update_diagnosis(&patient_id, &patient.diagnosis)
        .await?;
    if affected == 0 {
        return Err(AppError::NotFound(patient_id));
    }

    Ok(Json(Message::updated()))
}

/// DELETE /patients/{patient_id} - Remove a patient
pub async fn delete(
    DbConn(mut conn): DbConn,
    Path(patient_id): Path<String>,
) -> Result<Json<Message>, AppError> {
    if conn.delete(&patient_id).await? == 0 {
        return Err(AppError::NotFound(patient_id));
    }

    Ok(Json(Message::deleted()))
}
