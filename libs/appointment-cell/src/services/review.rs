// libs/appointment-cell/src/services/review.rs
use chrono::Utc;
use std::sync::Arc;
use tracing::{info, instrument, warn};
use uuid::Uuid;

use notification_cell::{deliver_best_effort, NotificationSender};

use crate::models::{Appointment, AppointmentError, StatusUpdate};
use crate::services::emails;
use crate::services::priority::sort_for_review;
use crate::services::store::AppointmentStore;
use crate::state::AppState;

/// Number of id characters used as the meeting room code.
pub const MEETING_CODE_LEN: usize = 10;

/// Placeholder meeting room derived from the appointment id. Not a real
/// conference booking.
pub fn meeting_link_for(base_url: &str, appointment_id: Uuid) -> String {
    let code: String = appointment_id.to_string().chars().take(MEETING_CODE_LEN).collect();
    format!("{}/{}", base_url.trim_end_matches('/'), code)
}

/// Doctor-facing workflow: the review queue plus approve/reject.
pub struct AppointmentReviewService {
    store: Arc<dyn AppointmentStore>,
    notifier: Arc<dyn NotificationSender>,
    meeting_base_url: String,
    reschedule_url: String,
}

impl AppointmentReviewService {
    pub fn new(state: &AppState) -> Self {
        Self {
            store: Arc::clone(&state.store),
            notifier: Arc::clone(&state.notifier),
            meeting_base_url: state.config.meeting_base_url.clone(),
            reschedule_url: state.config.reschedule_url.clone(),
        }
    }

    /// All appointments, highest priority first and newest first within a tier.
    pub async fn list_for_review(&self) -> Result<Vec<Appointment>, AppointmentError> {
        let appointments = self.store.list_newest_first().await?;
        Ok(sort_for_review(appointments))
    }

    #[instrument(skip(self))]
    pub async fn approve(&self, appointment_id: Uuid) -> Result<Appointment, AppointmentError> {
        let meeting_link = meeting_link_for(&self.meeting_base_url, appointment_id);
        let update = StatusUpdate::approved(meeting_link.clone(), Utc::now());

        let appointment = self.apply(appointment_id, update).await?;
        info!("Appointment {} approved", appointment_id);

        deliver_best_effort(
            self.notifier.as_ref(),
            emails::appointment_approved(&appointment, &meeting_link),
        )
        .await;

        Ok(appointment)
    }

    #[instrument(skip(self))]
    pub async fn reject(&self, appointment_id: Uuid) -> Result<Appointment, AppointmentError> {
        let appointment = self
            .apply(appointment_id, StatusUpdate::rejected(Utc::now()))
            .await?;
        info!("Appointment {} rejected", appointment_id);

        deliver_best_effort(
            self.notifier.as_ref(),
            emails::reschedule_required(&appointment, &self.reschedule_url),
        )
        .await;

        Ok(appointment)
    }

    /// Conditional update, then a lookup to tell "unknown id" from
    /// "already reviewed" when nothing matched.
    async fn apply(
        &self,
        appointment_id: Uuid,
        update: StatusUpdate,
    ) -> Result<Appointment, AppointmentError> {
        if let Some(updated) = self.store.update_if_pending(appointment_id, update).await? {
            return Ok(updated);
        }

        match self.store.find_by_id(appointment_id).await? {
            Some(existing) => {
                warn!("Appointment {} is already {}", appointment_id, existing.status);
                Err(AppointmentError::InvalidStatusTransition(existing.status))
            }
            None => Err(AppointmentError::NotFound),
        }
    }
}
