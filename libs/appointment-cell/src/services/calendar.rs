// libs/appointment-cell/src/services/calendar.rs
use async_trait::async_trait;
use tracing::debug;

use shared_config::AppConfig;

use crate::models::{CalendarBookingRequest, CalendarBookingResult, CalendarError};

/// External calendar scheduling hook, called once per accepted booking.
/// Its result is informational only.
#[async_trait]
pub trait CalendarBooking: Send + Sync {
    async fn create_booking(
        &self,
        request: CalendarBookingRequest,
    ) -> Result<CalendarBookingResult, CalendarError>;
}

/// Calendly placeholder. No request is made; a configured client reports a
/// fixed event reference.
pub struct CalendlyBookingClient {
    configured: bool,
    event_type_uri: String,
}

pub const PLACEHOLDER_EVENT_ID: &str = "calendly_event_id";

impl CalendlyBookingClient {
    pub fn new(config: &AppConfig) -> Self {
        Self {
            configured: config.is_calendar_configured(),
            event_type_uri: config.calendly_event_type_uri.clone(),
        }
    }

    pub fn is_configured(&self) -> bool {
        self.configured
    }
}

#[async_trait]
impl CalendarBooking for CalendlyBookingClient {
    async fn create_booking(
        &self,
        request: CalendarBookingRequest,
    ) -> Result<CalendarBookingResult, CalendarError> {
        if !self.is_configured() {
            return Err(CalendarError::NotConfigured);
        }

        debug!(
            "Calendly booking for {} at {} on {}",
            request.email, request.start_time, self.event_type_uri
        );

        Ok(CalendarBookingResult {
            success: true,
            event_id: PLACEHOLDER_EVENT_ID.to_string(),
        })
    }
}
