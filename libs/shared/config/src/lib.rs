use std::env;
use tracing::warn;

pub const DEFAULT_APPOINTMENTS_TABLE: &str = "patients_appointments";
pub const DEFAULT_EMAIL_HOST: &str = "smtp.gmail.com";
pub const DEFAULT_EMAIL_PORT: u16 = 587;
pub const DEFAULT_MEETING_BASE_URL: &str = "https://meet.google.com";
pub const DEFAULT_RESCHEDULE_URL: &str = "http://localhost:5000/";
pub const DEFAULT_PORT: u16 = 5000;

#[derive(Debug, Clone)]
pub struct AppConfig {
    pub supabase_url: String,
    pub supabase_api_key: String,
    pub appointments_table: String,
    pub email_host: String,
    pub email_port: u16,
    pub email_user: String,
    pub email_password: String,
    pub doctor_email: String,
    pub calendly_api_key: String,
    pub calendly_event_type_uri: String,
    pub meeting_base_url: String,
    pub reschedule_url: String,
    pub port: u16,
}

impl AppConfig {
    pub fn from_env() -> Self {
        let config = Self {
            supabase_url: env::var("SUPABASE_URL")
                .unwrap_or_else(|_| {
                    warn!("SUPABASE_URL not set, using empty value");
                    String::new()
                }),
            supabase_api_key: env::var("SUPABASE_API_KEY")
                .unwrap_or_else(|_| {
                    warn!("SUPABASE_API_KEY not set, using empty value");
                    String::new()
                }),
            appointments_table: env::var("APPOINTMENTS_TABLE")
                .unwrap_or_else(|_| DEFAULT_APPOINTMENTS_TABLE.to_string()),
            email_host: env::var("EMAIL_HOST")
                .unwrap_or_else(|_| DEFAULT_EMAIL_HOST.to_string()),
            email_port: parse_port("EMAIL_PORT", DEFAULT_EMAIL_PORT),
            email_user: env::var("EMAIL_USER")
                .unwrap_or_else(|_| {
                    warn!("EMAIL_USER not set, using empty value");
                    String::new()
                }),
            email_password: env::var("EMAIL_PASSWORD")
                .unwrap_or_else(|_| {
                    warn!("EMAIL_PASSWORD not set, using empty value");
                    String::new()
                }),
            doctor_email: env::var("DOCTOR_EMAIL")
                .unwrap_or_else(|_| {
                    warn!("DOCTOR_EMAIL not set, doctor notifications will be skipped");
                    String::new()
                }),
            calendly_api_key: env::var("CALENDLY_API_KEY").unwrap_or_default(),
            calendly_event_type_uri: env::var("CALENDLY_EVENT_TYPE_URI").unwrap_or_default(),
            meeting_base_url: env::var("MEETING_BASE_URL")
                .unwrap_or_else(|_| DEFAULT_MEETING_BASE_URL.to_string()),
            reschedule_url: env::var("RESCHEDULE_URL")
                .unwrap_or_else(|_| {
                    warn!("RESCHEDULE_URL not set, using default");
                    DEFAULT_RESCHEDULE_URL.to_string()
                }),
            port: parse_port("PORT", DEFAULT_PORT),
        };

        if !config.is_configured() {
            warn!("Application not fully configured - missing environment variables");
        }

        if !config.is_email_configured() {
            warn!("Email relay not configured - notifications will not be delivered");
        }

        config
    }

    pub fn is_configured(&self) -> bool {
        !self.supabase_url.is_empty()
            && !self.supabase_api_key.is_empty()
            && !self.appointments_table.is_empty()
    }

    pub fn is_email_configured(&self) -> bool {
        !self.email_host.is_empty()
            && !self.email_user.is_empty()
            && !self.email_password.is_empty()
    }

    pub fn is_calendar_configured(&self) -> bool {
        !self.calendly_api_key.is_empty() && !self.calendly_event_type_uri.is_empty()
    }
}

fn parse_port(key: &str, default: u16) -> u16 {
    match env::var(key) {
        Ok(raw) => raw.parse().unwrap_or_else(|_| {
            warn!("{} is not a valid port ({}), using {}", key, raw, default);
            default
        }),
        Err(_) => default,
    }
}
