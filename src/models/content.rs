//! Domain models for site content entities.
//!
//! These types mirror the JSON payloads the backend serves for both the
//! public marketing pages and the admin console. Wire names are camelCase.

use serde::{Deserialize, Serialize};

use super::Entity;

/// An entry on the about page (mission statement, history, values, ...).
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct AboutEntry {
    pub id: i64,
    pub title: String,
    pub content: String,
    #[serde(rename = "imageUrl")]
    pub image_url: Option<String>,
    #[serde(rename = "sortOrder")]
    pub sort_order: Option<i32>,
}

/// A service category used to group services on the public site.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Category {
    pub id: i64,
    pub name: String,
    pub description: Option<String>,
}

/// A consulting service offered by the firm.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Service {
    pub id: i64,
    #[serde(rename = "categoryId")]
    pub category_id: Option<i64>,
    pub title: String,
    pub description: String,
    pub icon: Option<String>,
    pub featured: Option<bool>,
}

/// A client testimonial shown on the public site.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Testimonial {
    pub id: i64,
    pub author: String,
    pub company: Option<String>,
    pub quote: String,
    pub rating: Option<i32>,
}

/// A company logo in the "trusted by" strip.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct TrustedCompany {
    pub id: i64,
    pub name: String,
    #[serde(rename = "logoUrl")]
    pub logo_url: Option<String>,
    pub website: Option<String>,
}

/// A published article or insight piece.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Article {
    pub id: i64,
    pub title: String,
    pub body: String,
    pub author: Option<String>,
    #[serde(rename = "coverUrl")]
    pub cover_url: Option<String>,
    #[serde(rename = "publishedAt")]
    pub published_at: Option<chrono::DateTime<chrono::Utc>>,
}

impl Article {
    /// Short preview of the body for list views.
    pub fn excerpt(&self, max_chars: usize) -> String {
        if self.body.chars().count() <= max_chars {
            self.body.clone()
        } else {
            let cut: String = self.body.chars().take(max_chars).collect();
            format!("{}...", cut.trim_end())
        }
    }
}

impl Entity for AboutEntry {
    fn id(&self) -> i64 {
        self.id
    }
}

impl Entity for Category {
    fn id(&self) -> i64 {
        self.id
    }
}

impl Entity for Service {
    fn id(&self) -> i64 {
        self.id
    }
}

impl Entity for Testimonial {
    fn id(&self) -> i64 {
        self.id
    }
}

impl Entity for TrustedCompany {
    fn id(&self) -> i64 {
        self.id
    }
}

impl Entity for Article {
    fn id(&self) -> i64 {
        self.id
    }
}
