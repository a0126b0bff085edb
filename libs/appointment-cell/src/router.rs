// libs/appointment-cell/src/router.rs
use std::sync::Arc;

use axum::{
    Router,
    routing::{get, post},
};

use crate::handlers;
use crate::state::AppState;

pub fn appointment_routes(state: Arc<AppState>) -> Router {
    Router::new()
        // Patient booking form
        .route("/book-appointment", post(handlers::book_appointment))

        // Doctor dashboard
        .route("/appointments", get(handlers::list_appointments))
        .route("/appointments/{appointment_id}/approve", post(handlers::approve_appointment))
        .route("/appointments/{appointment_id}/reject", post(handlers::reject_appointment))

        .with_state(state)
}
