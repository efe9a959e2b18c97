//! In-memory state containers.
//!
//! `AuthStore` owns the login/logout flow; `EntityStore` is the generic
//! per-entity container the admin console screens read from.

pub mod auth;
pub mod entity;

pub use auth::AuthStore;
pub use entity::EntityStore;
