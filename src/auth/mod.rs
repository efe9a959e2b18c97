//! Session management.
//!
//! `SessionStore` owns the durable bearer token and admin profile, persists
//! them across restarts, and broadcasts sign-in/sign-out transitions so the
//! presentation layer can react to a forced logout.

pub mod session;

pub use session::{SessionData, SessionState, SessionStore};
