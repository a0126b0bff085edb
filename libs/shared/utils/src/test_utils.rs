use chrono::{DateTime, Utc};
use serde_json::{json, Value};
use uuid::Uuid;

use shared_config::AppConfig;

pub struct TestConfig {
    pub supabase_url: String,
    pub supabase_api_key: String,
    pub appointments_table: String,
    pub doctor_email: String,
    pub meeting_base_url: String,
    pub reschedule_url: String,
}

impl Default for TestConfig {
    fn default() -> Self {
        Self {
            supabase_url: "http://localhost:54321".to_string(),
            supabase_api_key: "test-service-key".to_string(),
            appointments_table: "patients_appointments".to_string(),
            doctor_email: "doctor@example.com".to_string(),
            meeting_base_url: "https://meet.google.com".to_string(),
            reschedule_url: "https://clinic.example.com/book".to_string(),
        }
    }
}

impl TestConfig {
    pub fn with_supabase_url(url: &str) -> Self {
        Self {
            supabase_url: url.to_string(),
            ..Self::default()
        }
    }

    pub fn to_app_config(&self) -> AppConfig {
        AppConfig {
            supabase_url: self.supabase_url.clone(),
            supabase_api_key: self.supabase_api_key.clone(),
            appointments_table: self.appointments_table.clone(),
            email_host: "localhost".to_string(),
            email_port: 2525,
            email_user: "clinic@example.com".to_string(),
            email_password: "test-password".to_string(),
            doctor_email: self.doctor_email.clone(),
            calendly_api_key: String::new(),
            calendly_event_type_uri: String::new(),
            meeting_base_url: self.meeting_base_url.clone(),
            reschedule_url: self.reschedule_url.clone(),
            port: 0,
        }
    }

    /// PostgREST path of the appointments table.
    pub fn table_path(&self) -> String {
        format!("/rest/v1/{}", self.appointments_table)
    }
}

pub struct MockSupabaseResponses;

impl MockSupabaseResponses {
    pub fn pending_appointment(id: Uuid, issues: &str, priority: &str, created_at: DateTime<Utc>) -> Value {
        json!({
            "id": id,
            "patient_name": "Test Patient",
            "patient_email": "patient@example.com",
            "issues": issues,
            "preferred_time": "2025-03-01T10:00",
            "priority": priority,
            "status": "pending",
            "doctor_approved": false,
            "meeting_link": null,
            "created_at": created_at.to_rfc3339(),
            "approved_at": null,
            "rejected_at": null
        })
    }

    pub fn approved_appointment(id: Uuid, meeting_link: &str) -> Value {
        let mut row = Self::pending_appointment(id, "severe headache", "High", Utc::now());
        row["status"] = json!("approved");
        row["doctor_approved"] = json!(true);
        row["meeting_link"] = json!(meeting_link);
        row["approved_at"] = json!(Utc::now().to_rfc3339());
        row
    }

    pub fn rejected_appointment(id: Uuid) -> Value {
        let mut row = Self::pending_appointment(id, "routine checkup", "Low", Utc::now());
        row["status"] = json!("rejected");
        row["rejected_at"] = json!(Utc::now().to_rfc3339());
        row
    }

    pub fn error_response(message: &str, code: &str) -> Value {
        json!({
            "message": message,
            "code": code
        })
    }
}
