//! Domain models for inbound submissions: contact messages and
//! consultation requests.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use super::Entity;

/// A message submitted through the public contact form.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ContactMessage {
    pub id: i64,
    pub name: String,
    pub email: String,
    pub phone: Option<String>,
    pub subject: Option<String>,
    pub message: String,
    #[serde(rename = "createdAt")]
    pub created_at: Option<DateTime<Utc>>,
}

/// Body for the public contact form submission.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ContactRequest {
    pub name: String,
    pub email: String,
    pub phone: Option<String>,
    pub subject: Option<String>,
    pub message: String,
}

/// Workflow status of a consultation request.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ConsultationStatus {
    Pending,
    Scheduled,
    Completed,
    Cancelled,
}

impl ConsultationStatus {
    pub fn display_name(&self) -> &'static str {
        match self {
            ConsultationStatus::Pending => "Pending",
            ConsultationStatus::Scheduled => "Scheduled",
            ConsultationStatus::Completed => "Completed",
            ConsultationStatus::Cancelled => "Cancelled",
        }
    }
}

/// A consultation booking request from the public site.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Consultation {
    pub id: i64,
    #[serde(rename = "clientName")]
    pub client_name: String,
    pub email: String,
    pub phone: Option<String>,
    pub topic: Option<String>,
    #[serde(rename = "preferredDate")]
    pub preferred_date: Option<DateTime<Utc>>,
    pub status: ConsultationStatus,
    #[serde(rename = "createdAt")]
    pub created_at: Option<DateTime<Utc>>,
}

/// Body for the public consultation request form.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ConsultationRequest {
    #[serde(rename = "clientName")]
    pub client_name: String,
    pub email: String,
    pub phone: Option<String>,
    pub topic: Option<String>,
    #[serde(rename = "preferredDate")]
    pub preferred_date: Option<DateTime<Utc>>,
}

impl Entity for ContactMessage {
    fn id(&self) -> i64 {
        self.id
    }
}

impl Entity for Consultation {
    fn id(&self) -> i64 {
        self.id
    }
}
