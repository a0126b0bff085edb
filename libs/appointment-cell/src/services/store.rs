// libs/appointment-cell/src/services/store.rs
use async_trait::async_trait;
use reqwest::Method;
use std::sync::Arc;
use tracing::{debug, error};
use uuid::Uuid;

use shared_config::AppConfig;
use shared_database::supabase::SupabaseClient;

use crate::models::{Appointment, AppointmentError, NewAppointment, StatusUpdate};

/// Persistence for appointment documents.
#[async_trait]
pub trait AppointmentStore: Send + Sync {
    /// Writes a new row and returns it with its store-assigned id.
    async fn insert(&self, appointment: NewAppointment) -> Result<Appointment, AppointmentError>;

    async fn find_by_id(&self, id: Uuid) -> Result<Option<Appointment>, AppointmentError>;

    /// Applies `update` only while the row is still pending.
    ///
    /// `None` means no row matched: either the id is unknown or the
    /// appointment was already reviewed.
    async fn update_if_pending(
        &self,
        id: Uuid,
        update: StatusUpdate,
    ) -> Result<Option<Appointment>, AppointmentError>;

    async fn list_newest_first(&self) -> Result<Vec<Appointment>, AppointmentError>;
}

/// [`AppointmentStore`] backed by a Supabase (PostgREST) table.
pub struct SupabaseAppointmentStore {
    supabase: Arc<SupabaseClient>,
    table: String,
}

impl SupabaseAppointmentStore {
    pub fn new(config: &AppConfig) -> Self {
        Self::with_client(Arc::new(SupabaseClient::new(config)), &config.appointments_table)
    }

    pub fn with_client(supabase: Arc<SupabaseClient>, table: &str) -> Self {
        Self {
            supabase,
            table: table.to_string(),
        }
    }

    fn table_path(&self) -> String {
        format!("/rest/v1/{}", self.table)
    }
}

fn database_error(context: &str, err: anyhow::Error) -> AppointmentError {
    error!("{}: {}", context, err);
    AppointmentError::DatabaseError(format!("{}: {}", context, err))
}

#[async_trait]
impl AppointmentStore for SupabaseAppointmentStore {
    async fn insert(&self, appointment: NewAppointment) -> Result<Appointment, AppointmentError> {
        debug!("Inserting appointment for {}", appointment.patient_email);

        let body = serde_json::to_value(&appointment)
            .map_err(|e| AppointmentError::DatabaseError(e.to_string()))?;

        let rows: Vec<Appointment> = self.supabase.request_with_headers(
            Method::POST,
            &self.table_path(),
            Some(body),
            Some(SupabaseClient::return_representation()),
        ).await.map_err(|e| database_error("Failed to store appointment", e))?;

        rows.into_iter().next().ok_or_else(|| {
            AppointmentError::DatabaseError("Store returned no row for the new appointment".to_string())
        })
    }

    async fn find_by_id(&self, id: Uuid) -> Result<Option<Appointment>, AppointmentError> {
        let path = format!("{}?id=eq.{}", self.table_path(), id);

        let rows: Vec<Appointment> = self.supabase.request(Method::GET, &path, None)
            .await
            .map_err(|e| database_error("Failed to fetch appointment", e))?;

        Ok(rows.into_iter().next())
    }

    async fn update_if_pending(
        &self,
        id: Uuid,
        update: StatusUpdate,
    ) -> Result<Option<Appointment>, AppointmentError> {
        debug!("Setting appointment {} to {}", id, update.status);

        let path = format!("{}?id=eq.{}&status=eq.pending", self.table_path(), id);
        let body = serde_json::to_value(&update)
            .map_err(|e| AppointmentError::DatabaseError(e.to_string()))?;

        let rows: Vec<Appointment> = self.supabase.request_with_headers(
            Method::PATCH,
            &path,
            Some(body),
            Some(SupabaseClient::return_representation()),
        ).await.map_err(|e| database_error("Failed to update appointment", e))?;

        Ok(rows.into_iter().next())
    }

    async fn list_newest_first(&self) -> Result<Vec<Appointment>, AppointmentError> {
        let path = format!("{}?order=created_at.desc", self.table_path());

        self.supabase.request(Method::GET, &path, None)
            .await
            .map_err(|e| database_error("Failed to list appointments", e))
    }
}
