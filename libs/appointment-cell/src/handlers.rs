// libs/appointment-cell/src/handlers.rs
use std::sync::Arc;

use axum::{
    extract::{rejection::JsonRejection, Path, State},
    Json,
};
use serde_json::{json, Value};
use uuid::Uuid;

use shared_models::error::AppError;

use crate::models::{AppointmentError, BookAppointmentRequest};
use crate::services::booking::AppointmentBookingService;
use crate::services::review::AppointmentReviewService;
use crate::state::AppState;

pub const BOOKING_ACCEPTED_MESSAGE: &str = "Form submitted successfully! Email will be sent shortly";

fn to_app_error(e: AppointmentError) -> AppError {
    match e {
        AppointmentError::ValidationError(msg) => AppError::ValidationError(msg),
        AppointmentError::NotFound => AppError::NotFound("Appointment not found".to_string()),
        AppointmentError::InvalidStatusTransition(status) => {
            AppError::Conflict(format!("Appointment has already been {}", status))
        }
        AppointmentError::DatabaseError(msg) => AppError::Database(msg),
    }
}

/// Ids that are not UUIDs cannot exist in the store.
fn parse_appointment_id(raw: &str) -> Result<Uuid, AppError> {
    Uuid::parse_str(raw).map_err(|_| AppError::NotFound("Appointment not found".to_string()))
}

#[axum::debug_handler]
pub async fn book_appointment(
    State(state): State<Arc<AppState>>,
    payload: Result<Json<BookAppointmentRequest>, JsonRejection>,
) -> Result<Json<Value>, AppError> {
    let Json(request) = payload.map_err(|e| AppError::BadRequest(e.body_text()))?;

    let booking_service = AppointmentBookingService::new(&state);

    let appointment = booking_service
        .book_appointment(request)
        .await
        .map_err(to_app_error)?;

    Ok(Json(json!({
        "success": true,
        "message": BOOKING_ACCEPTED_MESSAGE,
        "appointment_id": appointment.id
    })))
}

#[axum::debug_handler]
pub async fn list_appointments(
    State(state): State<Arc<AppState>>,
) -> Result<Json<Value>, AppError> {
    let review_service = AppointmentReviewService::new(&state);

    let appointments = review_service.list_for_review().await.map_err(to_app_error)?;

    Ok(Json(json!({
        "success": true,
        "appointments": appointments
    })))
}

#[axum::debug_handler]
pub async fn approve_appointment(
    State(state): State<Arc<AppState>>,
    Path(appointment_id): Path<String>,
) -> Result<Json<Value>, AppError> {
    let appointment_id = parse_appointment_id(&appointment_id)?;

    AppointmentReviewService::new(&state)
        .approve(appointment_id)
        .await
        .map_err(to_app_error)?;

    Ok(Json(json!({
        "success": true,
        "message": "Appointment approved"
    })))
}

#[axum::debug_handler]
pub async fn reject_appointment(
    State(state): State<Arc<AppState>>,
    Path(appointment_id): Path<String>,
) -> Result<Json<Value>, AppError> {
    let appointment_id = parse_appointment_id(&appointment_id)?;

    AppointmentReviewService::new(&state)
        .reject(appointment_id)
        .await
        .map_err(to_app_error)?;

    Ok(Json(json!({
        "success": true,
        "message": "Appointment rejected"
    })))
}
