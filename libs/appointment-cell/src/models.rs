// libs/appointment-cell/src/models.rs
use serde::{Deserialize, Deserializer, Serialize, Serializer};
use uuid::Uuid;
use chrono::{DateTime, Utc};
use std::fmt;
use thiserror::Error;

// ==============================================================================
// CORE APPOINTMENT MODELS
// ==============================================================================

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct Appointment {
    pub id: Uuid,
    pub patient_name: String,
    pub patient_email: String,
    pub issues: String,
    /// Free text as submitted; never parsed.
    pub preferred_time: String,
    #[serde(default = "Priority::absent")]
    pub priority: Priority,
    pub status: AppointmentStatus,
    pub doctor_approved: bool,
    pub meeting_link: Option<String>,
    pub created_at: DateTime<Utc>,
    #[serde(default)]
    pub approved_at: Option<DateTime<Utc>>,
    #[serde(default)]
    pub rejected_at: Option<DateTime<Utc>>,
}

#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub enum Priority {
    High,
    Medium,
    Low,
    /// Stored value outside the known tiers, kept as read so it is written
    /// back unchanged. `None` when the column is null or absent.
    Unrecognized(Option<String>),
}

impl Priority {
    /// Position in the doctor's review queue, lowest first.
    pub fn rank(&self) -> u8 {
        match self {
            Priority::High => 0,
            Priority::Medium => 1,
            Priority::Low => 2,
            Priority::Unrecognized(_) => 3,
        }
    }

    pub fn absent() -> Self {
        Priority::Unrecognized(None)
    }

    fn as_stored(&self) -> Option<&str> {
        match self {
            Priority::High => Some("High"),
            Priority::Medium => Some("Medium"),
            Priority::Low => Some("Low"),
            Priority::Unrecognized(raw) => raw.as_deref(),
        }
    }
}

impl From<Option<String>> for Priority {
    fn from(value: Option<String>) -> Self {
        match value.as_deref() {
            Some("High") => Priority::High,
            Some("Medium") => Priority::Medium,
            Some("Low") => Priority::Low,
            _ => Priority::Unrecognized(value),
        }
    }
}

impl Serialize for Priority {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        match self.as_stored() {
            Some(value) => serializer.serialize_str(value),
            None => serializer.serialize_none(),
        }
    }
}

impl<'de> Deserialize<'de> for Priority {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        Option::<String>::deserialize(deserializer).map(Priority::from)
    }
}

impl fmt::Display for Priority {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.as_stored().unwrap_or("Unassigned"))
    }
}

#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "snake_case")]
pub enum AppointmentStatus {
    Pending,
    Approved,
    Rejected,
}

impl fmt::Display for AppointmentStatus {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            AppointmentStatus::Pending => write!(f, "pending"),
            AppointmentStatus::Approved => write!(f, "approved"),
            AppointmentStatus::Rejected => write!(f, "rejected"),
        }
    }
}

// ==============================================================================
// REQUEST/RESPONSE MODELS
// ==============================================================================

/// Booking form payload. Every field is optional on the wire so that a
/// missing field is reported as a validation error rather than a parse error.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct BookAppointmentRequest {
    pub patient_name: Option<String>,
    pub patient_email: Option<String>,
    pub issues: Option<String>,
    pub preferred_time: Option<String>,
}

/// A booking request with every required field present and non-blank.
/// Values are carried exactly as submitted.
#[derive(Debug, Clone, PartialEq)]
pub struct BookingDetails {
    pub patient_name: String,
    pub patient_email: String,
    pub issues: String,
    pub preferred_time: String,
}

impl BookAppointmentRequest {
    pub fn validate(self) -> Result<BookingDetails, AppointmentError> {
        // blank means missing; accepted values are kept as submitted
        fn required(value: Option<String>) -> Option<String> {
            value.filter(|v| !v.trim().is_empty())
        }

        match (
            required(self.patient_name),
            required(self.patient_email),
            required(self.issues),
            required(self.preferred_time),
        ) {
            (Some(patient_name), Some(patient_email), Some(issues), Some(preferred_time)) => {
                Ok(BookingDetails {
                    patient_name,
                    patient_email,
                    issues,
                    preferred_time,
                })
            }
            _ => Err(AppointmentError::ValidationError(
                REQUIRED_FIELDS_MESSAGE.to_string(),
            )),
        }
    }
}

pub const REQUIRED_FIELDS_MESSAGE: &str = "All fields are required";

/// Row written to the store when a booking is accepted.
#[derive(Debug, Clone, Serialize, PartialEq)]
pub struct NewAppointment {
    pub patient_name: String,
    pub patient_email: String,
    pub issues: String,
    pub preferred_time: String,
    pub priority: Priority,
    pub status: AppointmentStatus,
    pub doctor_approved: bool,
    pub meeting_link: Option<String>,
    pub created_at: DateTime<Utc>,
}

impl NewAppointment {
    pub fn pending(details: BookingDetails, priority: Priority, created_at: DateTime<Utc>) -> Self {
        Self {
            patient_name: details.patient_name,
            patient_email: details.patient_email,
            issues: details.issues,
            preferred_time: details.preferred_time,
            priority,
            status: AppointmentStatus::Pending,
            doctor_approved: false,
            meeting_link: None,
            created_at,
        }
    }
}

/// Field set applied by a review decision. Only ever applied to a pending row.
#[derive(Debug, Clone, Serialize, PartialEq)]
pub struct StatusUpdate {
    pub status: AppointmentStatus,
    pub doctor_approved: bool,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub meeting_link: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub approved_at: Option<DateTime<Utc>>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub rejected_at: Option<DateTime<Utc>>,
}

impl StatusUpdate {
    pub fn approved(meeting_link: String, at: DateTime<Utc>) -> Self {
        Self {
            status: AppointmentStatus::Approved,
            doctor_approved: true,
            meeting_link: Some(meeting_link),
            approved_at: Some(at),
            rejected_at: None,
        }
    }

    pub fn rejected(at: DateTime<Utc>) -> Self {
        Self {
            status: AppointmentStatus::Rejected,
            doctor_approved: false,
            meeting_link: None,
            approved_at: None,
            rejected_at: Some(at),
        }
    }
}

// ==============================================================================
// CALENDAR INTEGRATION MODELS
// ==============================================================================

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct CalendarBookingRequest {
    pub name: String,
    pub email: String,
    pub start_time: String,
}

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct CalendarBookingResult {
    pub success: bool,
    pub event_id: String,
}

#[derive(Error, Debug)]
pub enum CalendarError {
    #[error("Calendar integration not configured")]
    NotConfigured,
}

// ==============================================================================
// ERROR TYPES
// ==============================================================================

#[derive(Error, Debug)]
pub enum AppointmentError {
    #[error("Appointment not found")]
    NotFound,

    #[error("Appointment has already been {0}")]
    InvalidStatusTransition(AppointmentStatus),

    #[error("Validation error: {0}")]
    ValidationError(String),

    #[error("Database error: {0}")]
    DatabaseError(String),
}
