//! Data models for FinConsult site entities.
//!
//! This module contains all the data structures exchanged with the backend:
//!
//! - `AboutEntry`, `Category`, `Service`, `Article`, `Testimonial`,
//!   `TrustedCompany`: public site content
//! - `TeamMember`, `UserProfile`: people
//! - `ContactMessage`, `Consultation`: inbound submissions
//! - `Credentials`, `LoginResponse`: authentication payloads

pub mod content;
pub mod inbox;
pub mod people;

pub use content::{AboutEntry, Article, Category, Service, Testimonial, TrustedCompany};
pub use inbox::{
    Consultation, ConsultationRequest, ConsultationStatus, ContactMessage, ContactRequest,
};
pub use people::{Credentials, LoginResponse, RegisterRequest, TeamMember, UserProfile};

/// An entity with a numeric identifier, used by state containers to merge
/// fetched and mutated records into their in-memory collection.
pub trait Entity {
    fn id(&self) -> i64;
}
