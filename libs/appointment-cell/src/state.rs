// libs/appointment-cell/src/state.rs
use std::sync::Arc;

use notification_cell::{NotificationSender, SmtpNotificationSender};
use shared_config::AppConfig;

use crate::services::calendar::{CalendarBooking, CalendlyBookingClient};
use crate::services::store::{AppointmentStore, SupabaseAppointmentStore};

/// Everything a request handler needs, built once at startup.
#[derive(Clone)]
pub struct AppState {
    pub config: Arc<AppConfig>,
    pub store: Arc<dyn AppointmentStore>,
    pub notifier: Arc<dyn NotificationSender>,
    pub calendar: Arc<dyn CalendarBooking>,
}

impl AppState {
    pub fn new(
        config: AppConfig,
        store: Arc<dyn AppointmentStore>,
        notifier: Arc<dyn NotificationSender>,
        calendar: Arc<dyn CalendarBooking>,
    ) -> Self {
        Self {
            config: Arc::new(config),
            store,
            notifier,
            calendar,
        }
    }

    /// Production wiring: Supabase store, SMTP relay, Calendly placeholder.
    pub fn from_config(config: AppConfig) -> Self {
        let store = Arc::new(SupabaseAppointmentStore::new(&config));
        let notifier = Arc::new(SmtpNotificationSender::new(&config));
        let calendar = Arc::new(CalendlyBookingClient::new(&config));

        Self::new(config, store, notifier, calendar)
    }
}
