//! REST API client module for the FinConsult backend.
//!
//! `ApiClient` is the single request pipeline (authentication, timeout,
//! retry, failure classification); `PublicApi` and `AdminApi` are thin
//! per-endpoint facades on top of it.

pub mod admin;
pub mod client;
pub mod error;
pub mod public;

pub use admin::{AdminApi, AdminCollection};
pub use client::ApiClient;
pub use error::ApiError;
pub use public::PublicApi;
