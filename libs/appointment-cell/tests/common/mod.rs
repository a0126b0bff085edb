// Shared fixtures for appointment-cell integration tests
#![allow(dead_code)]

use std::sync::Arc;

use async_trait::async_trait;
use chrono::{DateTime, Utc};
use mockall::mock;
use serde_json::Value;
use wiremock::{Match, MockServer, Request};

use appointment_cell::models::{CalendarBookingRequest, CalendarBookingResult, CalendarError};
use appointment_cell::services::calendar::CalendarBooking;
use appointment_cell::services::store::SupabaseAppointmentStore;
use appointment_cell::AppState;
use notification_cell::{EmailMessage, NotificationError, NotificationSender};
use shared_utils::test_utils::TestConfig;

mock! {
    pub Notifier {}

    #[async_trait]
    impl NotificationSender for Notifier {
        async fn send(&self, message: EmailMessage) -> Result<(), NotificationError>;
    }
}

mock! {
    pub Calendar {}

    #[async_trait]
    impl CalendarBooking for Calendar {
        async fn create_booking(
            &self,
            request: CalendarBookingRequest,
        ) -> Result<CalendarBookingResult, CalendarError>;
    }
}

/// Matches a JSON body whose `field` holds an RFC 3339 timestamp.
pub struct TimestampField(pub &'static str);

impl Match for TimestampField {
    fn matches(&self, request: &Request) -> bool {
        serde_json::from_slice::<Value>(&request.body)
            .ok()
            .and_then(|body| body.get(self.0).and_then(Value::as_str).map(str::to_string))
            .is_some_and(|value| value.parse::<DateTime<Utc>>().is_ok())
    }
}

pub fn test_config(mock_server: &MockServer) -> TestConfig {
    TestConfig::with_supabase_url(&mock_server.uri())
}

pub fn state_with(config: &TestConfig, notifier: MockNotifier, calendar: MockCalendar) -> AppState {
    let app_config = config.to_app_config();
    let store = Arc::new(SupabaseAppointmentStore::new(&app_config));
    AppState::new(app_config, store, Arc::new(notifier), Arc::new(calendar))
}

pub fn state_for(mock_server: &MockServer, notifier: MockNotifier, calendar: MockCalendar) -> AppState {
    state_with(&test_config(mock_server), notifier, calendar)
}

pub fn accepting_notifier() -> MockNotifier {
    let mut notifier = MockNotifier::new();
    notifier.expect_send().returning(|_| Ok(()));
    notifier
}

pub fn silent_notifier() -> MockNotifier {
    let mut notifier = MockNotifier::new();
    notifier.expect_send().never();
    notifier
}

pub fn accepting_calendar() -> MockCalendar {
    let mut calendar = MockCalendar::new();
    calendar.expect_create_booking().returning(|_| {
        Ok(CalendarBookingResult {
            success: true,
            event_id: "calendly_event_id".to_string(),
        })
    });
    calendar
}

pub fn unused_calendar() -> MockCalendar {
    let mut calendar = MockCalendar::new();
    calendar.expect_create_booking().never();
    calendar
}
