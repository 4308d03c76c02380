//! HTTP client for the appointment and doctor-directory services.
//!
//! All business rules (appointment validity, status transitions,
//! messaging delivery) live behind these endpoints; this client only
//! issues requests and maps non-success responses onto the error
//! taxonomy. Callers refetch after every mutation instead of patching
//! cached state.

use crate::core::errors::{Error, Result};
use crate::core::{Appointment, Doctor, NewAppointment, NewDoctor};
use log::{debug, warn};
use serde::de::DeserializeOwned;

/// Outcome of the backend health probe.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum HealthStatus {
    Connected,
    Degraded(String),
}

pub struct ApiClient {
    http: reqwest::Client,
    base_url: String,
}

impl ApiClient {
    pub fn new(base_url: impl Into<String>) -> Self {
        Self {
            http: reqwest::Client::new(),
            base_url: base_url.into(),
        }
    }

    pub fn base_url(&self) -> &str {
        &self.base_url
    }

    fn url(&self, path: &str) -> String {
        format!("{}{path}", self.base_url)
    }

    /// GET /api/citas/todas
    pub async fn list_all(&self) -> Result<Vec<Appointment>> {
        let url = self.url("/api/citas/todas");
        debug!("GET {url}");
        decode(self.http.get(url).send().await?).await
    }

    /// GET /api/citas/paciente/{phone}
    pub async fn list_by_patient(&self, phone: &str) -> Result<Vec<Appointment>> {
        let url = self.url(&format!("/api/citas/paciente/{phone}"));
        debug!("GET {url}");
        decode(self.http.get(url).send().await?).await
    }

    /// POST /api/citas
    pub async fn create(&self, appointment: &NewAppointment) -> Result<Appointment> {
        let url = self.url("/api/citas");
        debug!("POST {url}");
        decode(self.http.post(url).json(appointment).send().await?).await
    }

    /// PUT /api/citas/{id}/cancelar — fails with a conflict when the
    /// appointment is no longer cancellable.
    pub async fn cancel(&self, id: i64) -> Result<Appointment> {
        let url = self.url(&format!("/api/citas/{id}/cancelar"));
        debug!("PUT {url}");
        decode(self.http.put(url).send().await?).await
    }

    /// GET /api/citas/health — anything but a success response counts
    /// as degraded, including transport failures.
    pub async fn health(&self) -> HealthStatus {
        let url = self.url("/api/citas/health");
        debug!("GET {url}");
        match self.http.get(url).send().await {
            Ok(response) if response.status().is_success() => HealthStatus::Connected,
            Ok(response) => {
                warn!("health check returned HTTP {}", response.status());
                HealthStatus::Degraded(format!("backend returned HTTP {}", response.status()))
            }
            Err(err) => {
                warn!("health check failed: {err}");
                HealthStatus::Degraded(err.to_string())
            }
        }
    }

    /// GET /api/doctores or /api/doctores/activos
    pub async fn list_doctors(&self, active_only: bool) -> Result<Vec<Doctor>> {
        let path = if active_only {
            "/api/doctores/activos"
        } else {
            "/api/doctores"
        };
        let url = self.url(path);
        debug!("GET {url}");
        decode(self.http.get(url).send().await?).await
    }

    /// POST /api/doctores
    pub async fn create_doctor(&self, doctor: &NewDoctor) -> Result<Doctor> {
        let url = self.url("/api/doctores");
        debug!("POST {url}");
        decode(self.http.post(url).json(doctor).send().await?).await
    }

    /// PUT /api/doctores/{id}
    pub async fn update_doctor(&self, id: i64, doctor: &NewDoctor) -> Result<Doctor> {
        let url = self.url(&format!("/api/doctores/{id}"));
        debug!("PUT {url}");
        decode(self.http.put(url).json(doctor).send().await?).await
    }

    /// DELETE /api/doctores/{id}
    pub async fn delete_doctor(&self, id: i64) -> Result<()> {
        let url = self.url(&format!("/api/doctores/{id}"));
        debug!("DELETE {url}");
        let response = self.http.delete(url).send().await?;
        if response.status().is_success() {
            Ok(())
        } else {
            Err(error_from_response(response).await)
        }
    }
}

async fn decode<T: DeserializeOwned>(response: reqwest::Response) -> Result<T> {
    if response.status().is_success() {
        Ok(response.json().await?)
    } else {
        Err(error_from_response(response).await)
    }
}

async fn error_from_response(response: reqwest::Response) -> Error {
    let status = response.status().as_u16();
    let body = response.text().await.unwrap_or_default();
    Error::from_status(status, extract_message(&body))
}

/// Pull the human-readable `message` field out of a backend error
/// body, if there is one.
fn extract_message(body: &str) -> Option<String> {
    let value: serde_json::Value = serde_json::from_str(body).ok()?;
    value
        .get("message")
        .and_then(|m| m.as_str())
        .map(String::from)
}
