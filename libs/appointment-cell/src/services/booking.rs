// libs/appointment-cell/src/services/booking.rs
use chrono::Utc;
use std::sync::Arc;
use tracing::{debug, info, warn};

use notification_cell::{deliver_best_effort, NotificationSender};

use crate::models::{
    Appointment, AppointmentError, BookAppointmentRequest, CalendarBookingRequest, NewAppointment,
};
use crate::services::calendar::CalendarBooking;
use crate::services::emails;
use crate::services::priority::classify_priority;
use crate::services::store::AppointmentStore;
use crate::state::AppState;

/// Patient-facing booking workflow.
pub struct AppointmentBookingService {
    store: Arc<dyn AppointmentStore>,
    notifier: Arc<dyn NotificationSender>,
    calendar: Arc<dyn CalendarBooking>,
    doctor_email: String,
}

impl AppointmentBookingService {
    pub fn new(state: &AppState) -> Self {
        Self {
            store: Arc::clone(&state.store),
            notifier: Arc::clone(&state.notifier),
            calendar: Arc::clone(&state.calendar),
            doctor_email: state.config.doctor_email.clone(),
        }
    }

    /// Validates, triages and stores a booking, then notifies patient and doctor.
    ///
    /// Only validation and the store write can fail the booking. Calendar and
    /// email outcomes are logged and otherwise ignored.
    pub async fn book_appointment(
        &self,
        request: BookAppointmentRequest,
    ) -> Result<Appointment, AppointmentError> {
        let details = request.validate()?;

        let priority = classify_priority(&details.issues);
        debug!("Issue text triaged as {} priority", priority);

        let appointment = self
            .store
            .insert(NewAppointment::pending(details, priority, Utc::now()))
            .await?;

        info!("Appointment {} booked with {} priority", appointment.id, appointment.priority);

        self.sync_calendar(&appointment).await;

        deliver_best_effort(self.notifier.as_ref(), emails::booking_received(&appointment)).await;

        if self.doctor_email.is_empty() {
            warn!("No doctor email configured, skipping notification for {}", appointment.id);
        } else {
            deliver_best_effort(
                self.notifier.as_ref(),
                emails::doctor_new_request(&appointment, &self.doctor_email),
            )
            .await;
        }

        Ok(appointment)
    }

    async fn sync_calendar(&self, appointment: &Appointment) {
        let request = CalendarBookingRequest {
            name: appointment.patient_name.clone(),
            email: appointment.patient_email.clone(),
            start_time: appointment.preferred_time.clone(),
        };

        match self.calendar.create_booking(request).await {
            Ok(result) => debug!(
                "Calendar booking for {}: success={} event={}",
                appointment.id, result.success, result.event_id
            ),
            Err(e) => debug!("Calendar booking skipped for {}: {}", appointment.id, e),
        }
    }
}
