mod common;

use assert_matches::assert_matches;
use chrono::Utc;
use serde_json::json;
use uuid::Uuid;
use wiremock::{MockServer, Mock, ResponseTemplate};
use wiremock::matchers::{any, body_partial_json, method, path};

use appointment_cell::models::{
    AppointmentError, AppointmentStatus, BookAppointmentRequest, CalendarError, Priority,
};
use appointment_cell::services::booking::AppointmentBookingService;
use notification_cell::NotificationError;
use shared_utils::test_utils::MockSupabaseResponses;

use common::*;

fn booking_request(issues: &str) -> BookAppointmentRequest {
    BookAppointmentRequest {
        patient_name: Some("Test Patient".to_string()),
        patient_email: Some("patient@example.com".to_string()),
        issues: Some(issues.to_string()),
        preferred_time: Some("2025-03-01T10:00".to_string()),
    }
}

async fn mount_insert(mock_server: &MockServer, id: Uuid, issues: &str, priority: &str) {
    let table_path = test_config(mock_server).table_path();

    Mock::given(method("POST"))
        .and(path(table_path))
        .and(body_partial_json(json!({
            "patient_name": "Test Patient",
            "patient_email": "patient@example.com",
            "issues": issues,
            "preferred_time": "2025-03-01T10:00",
            "priority": priority,
            "status": "pending",
            "doctor_approved": false,
            "meeting_link": null
        })))
        .respond_with(ResponseTemplate::new(201).set_body_json(json!([
            MockSupabaseResponses::pending_appointment(id, issues, priority, Utc::now())
        ])))
        .expect(1)
        .mount(mock_server)
        .await;
}

#[tokio::test]
async fn test_booking_stores_pending_appointment_and_notifies_both_parties() {
    let mock_server = MockServer::start().await;
    let id = Uuid::new_v4();
    mount_insert(&mock_server, id, "severe chest pain", "High").await;

    let mut notifier = MockNotifier::new();
    notifier
        .expect_send()
        .withf(|m| m.to == "patient@example.com" && m.subject == "Appointment Booking Received")
        .times(1)
        .returning(|_| Ok(()));
    notifier
        .expect_send()
        .withf(|m| m.to == "doctor@example.com" && m.subject == "New Appointment - Priority: High")
        .times(1)
        .returning(|_| Ok(()));

    let mut calendar = MockCalendar::new();
    calendar
        .expect_create_booking()
        .withf(|r| r.email == "patient@example.com" && r.start_time == "2025-03-01T10:00")
        .times(1)
        .returning(|_| Err(CalendarError::NotConfigured));

    let state = state_for(&mock_server, notifier, calendar);
    let appointment = AppointmentBookingService::new(&state)
        .book_appointment(booking_request("severe chest pain"))
        .await
        .unwrap();

    assert_eq!(appointment.id, id);
    assert_eq!(appointment.priority, Priority::High);
    assert_eq!(appointment.status, AppointmentStatus::Pending);
    assert!(!appointment.doctor_approved);
    assert!(appointment.meeting_link.is_none());
}

#[tokio::test]
async fn test_priority_is_computed_from_issue_text() {
    let mock_server = MockServer::start().await;
    let id = Uuid::new_v4();
    mount_insert(&mock_server, id, "I have a mild fever", "Medium").await;

    let state = state_for(&mock_server, accepting_notifier(), accepting_calendar());
    let appointment = AppointmentBookingService::new(&state)
        .book_appointment(booking_request("I have a mild fever"))
        .await
        .unwrap();

    assert_eq!(appointment.priority, Priority::Medium);
}

#[tokio::test]
async fn test_missing_field_is_rejected_without_store_write() {
    let mock_server = MockServer::start().await;

    Mock::given(any())
        .respond_with(ResponseTemplate::new(500))
        .expect(0)
        .mount(&mock_server)
        .await;

    let state = state_for(&mock_server, silent_notifier(), unused_calendar());
    let service = AppointmentBookingService::new(&state);

    let mut missing_email = booking_request("routine checkup");
    missing_email.patient_email = None;
    assert_matches!(
        service.book_appointment(missing_email).await,
        Err(AppointmentError::ValidationError(msg)) if msg == "All fields are required"
    );

    let mut empty_time = booking_request("routine checkup");
    empty_time.preferred_time = Some(String::new());
    assert_matches!(
        service.book_appointment(empty_time).await,
        Err(AppointmentError::ValidationError(_))
    );
}

#[tokio::test]
async fn test_submitted_text_is_stored_untrimmed() {
    let mock_server = MockServer::start().await;
    let id = Uuid::new_v4();

    Mock::given(method("POST"))
        .and(path(test_config(&mock_server).table_path()))
        .and(body_partial_json(json!({
            "patient_name": " Test Patient ",
            "issues": "knee injury\n"
        })))
        .respond_with(ResponseTemplate::new(201).set_body_json(json!([
            MockSupabaseResponses::pending_appointment(id, "knee injury\n", "Medium", Utc::now())
        ])))
        .expect(1)
        .mount(&mock_server)
        .await;

    let mut request = booking_request("knee injury\n");
    request.patient_name = Some(" Test Patient ".to_string());

    let state = state_for(&mock_server, accepting_notifier(), accepting_calendar());
    let appointment = AppointmentBookingService::new(&state)
        .book_appointment(request)
        .await
        .unwrap();

    assert_eq!(appointment.id, id);
}

#[tokio::test]
async fn test_email_failures_do_not_fail_booking() {
    let mock_server = MockServer::start().await;
    let id = Uuid::new_v4();
    mount_insert(&mock_server, id, "routine checkup", "Low").await;

    let mut notifier = MockNotifier::new();
    notifier
        .expect_send()
        .times(2)
        .returning(|_| Err(NotificationError::NotConfigured));

    let state = state_for(&mock_server, notifier, accepting_calendar());
    let appointment = AppointmentBookingService::new(&state)
        .book_appointment(booking_request("routine checkup"))
        .await
        .unwrap();

    assert_eq!(appointment.id, id);
    assert_eq!(appointment.priority, Priority::Low);
}

#[tokio::test]
async fn test_store_failure_aborts_before_side_effects() {
    let mock_server = MockServer::start().await;

    Mock::given(method("POST"))
        .and(path(test_config(&mock_server).table_path()))
        .respond_with(ResponseTemplate::new(500).set_body_json(
            MockSupabaseResponses::error_response("connection lost", "08006"),
        ))
        .expect(1)
        .mount(&mock_server)
        .await;

    let state = state_for(&mock_server, silent_notifier(), unused_calendar());
    let result = AppointmentBookingService::new(&state)
        .book_appointment(booking_request("acute pain"))
        .await;

    assert_matches!(result, Err(AppointmentError::DatabaseError(_)));
}

#[tokio::test]
async fn test_doctor_notification_skipped_without_doctor_email() {
    let mock_server = MockServer::start().await;
    let id = Uuid::new_v4();
    mount_insert(&mock_server, id, "knee injury", "Medium").await;

    let mut notifier = MockNotifier::new();
    notifier
        .expect_send()
        .withf(|m| m.to == "patient@example.com")
        .times(1)
        .returning(|_| Ok(()));

    let mut config = test_config(&mock_server);
    config.doctor_email = String::new();

    let state = state_with(&config, notifier, accepting_calendar());
    let appointment = AppointmentBookingService::new(&state)
        .book_appointment(booking_request("knee injury"))
        .await
        .unwrap();

    assert_eq!(appointment.id, id);
}
