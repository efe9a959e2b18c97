//! Authentication container.
//!
//! Owns the login/logout flow on top of the session store: a successful
//! login persists the returned token and profile, logout clears them, and
//! a forced sign-out from the pipeline's 401 handler is observable through
//! the same watch channel.

use std::sync::Arc;

use anyhow::Result;
use tokio::sync::watch;
use tracing::warn;

use crate::api::{AdminApi, ApiError};
use crate::auth::{SessionState, SessionStore};
use crate::models::{Credentials, RegisterRequest, UserProfile};

pub struct AuthStore {
    api: AdminApi,
    session: Arc<SessionStore>,
    loading: bool,
    error: Option<String>,
}

impl AuthStore {
    pub fn new(api: AdminApi, session: Arc<SessionStore>) -> Self {
        Self {
            api,
            session,
            loading: false,
            error: None,
        }
    }

    pub fn current_user(&self) -> Option<UserProfile> {
        self.session.profile()
    }

    pub fn is_authenticated(&self) -> bool {
        self.session.is_authenticated()
    }

    pub fn is_loading(&self) -> bool {
        self.loading
    }

    pub fn error(&self) -> Option<&str> {
        self.error.as_deref()
    }

    /// Watch for sign-in/sign-out transitions, including the pipeline's
    /// forced sign-out on 401.
    pub fn subscribe(&self) -> watch::Receiver<SessionState> {
        self.session.subscribe()
    }

    /// Sign in and persist the session.
    pub async fn login(&mut self, email: &str, password: &str) -> Result<UserProfile, ApiError> {
        self.loading = true;
        self.error = None;

        let credentials = Credentials {
            email: email.to_string(),
            password: password.to_string(),
        };
        match self.api.login(&credentials).await {
            Ok(response) => {
                let (profile, token) = response.into_parts();
                if let Err(e) = self.session.login(token, profile.clone()) {
                    warn!(error = %e, "Failed to persist session to disk");
                }
                self.loading = false;
                Ok(profile)
            }
            Err(e) => {
                // The server answers bad credentials with a 401 too; that
                // reads better as a validation message than as an expired
                // session here.
                self.error = Some(match &e {
                    ApiError::Auth => "Invalid email or password".to_string(),
                    other => other.to_string(),
                });
                self.loading = false;
                Err(e)
            }
        }
    }

    /// Create an admin account and sign in with the returned session.
    pub async fn register(&mut self, request: &RegisterRequest) -> Result<UserProfile, ApiError> {
        self.loading = true;
        self.error = None;

        match self.api.register(request).await {
            Ok(response) => {
                let (profile, token) = response.into_parts();
                if let Err(e) = self.session.login(token, profile.clone()) {
                    warn!(error = %e, "Failed to persist session to disk");
                }
                self.loading = false;
                Ok(profile)
            }
            Err(e) => {
                self.error = Some(e.to_string());
                self.loading = false;
                Err(e)
            }
        }
    }

    /// Re-fetch the signed-in profile from the backend and refresh the
    /// stored copy, keeping the existing token.
    pub async fn refresh_profile(&mut self) -> Result<UserProfile, ApiError> {
        self.loading = true;
        self.error = None;

        match self.api.me().await {
            Ok(profile) => {
                if let Some(token) = self.session.token() {
                    if let Err(e) = self.session.login(token, profile.clone()) {
                        warn!(error = %e, "Failed to persist refreshed profile");
                    }
                }
                self.loading = false;
                Ok(profile)
            }
            Err(e) => {
                self.error = Some(e.to_string());
                self.loading = false;
                Err(e)
            }
        }
    }

    /// Sign out. Idempotent: clearing an empty session is not an error.
    pub fn logout(&mut self) -> Result<()> {
        self.error = None;
        self.session.clear()
    }
}
