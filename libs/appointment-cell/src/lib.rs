// libs/appointment-cell/src/lib.rs
//! # Appointment Cell
//!
//! Booking intake and doctor review for consultation requests.
//!
//! A patient submits a request; its issue text is triaged into a
//! High/Medium/Low priority by keyword, the request is stored as `pending`,
//! and both patient and doctor are emailed. The doctor then approves
//! (issuing a meeting link) or rejects (sending a reschedule link).
//!
//! ## API Endpoints (mounted under `/api`)
//!
//! - `POST /book-appointment` - Submit a booking request
//! - `GET /appointments` - Review queue, by priority then recency
//! - `POST /appointments/{id}/approve` - Approve a pending request
//! - `POST /appointments/{id}/reject` - Reject a pending request
//!
//! Approve and reject only apply to pending appointments; a second review of
//! the same appointment is answered with `409 Conflict`.

pub mod handlers;
pub mod models;
pub mod router;
pub mod services;
pub mod state;

pub use models::{
    Appointment, AppointmentError, AppointmentStatus, BookAppointmentRequest, Priority,
};
pub use router::appointment_routes;
pub use state::AppState;
