//! Client core for the FinConsult site.
//!
//! This crate is the shared plumbing under both the public marketing pages
//! and the admin console: one configured HTTP request pipeline
//! (authentication, timeout, retry, failure classification), thin facades
//! over the public and admin REST endpoints, a durable session store, and
//! generic in-memory state containers. Presentation concerns (routing,
//! forms, theming) live elsewhere and consume these pieces.

pub mod api;
pub mod auth;
pub mod config;
pub mod models;
pub mod store;

use std::sync::Arc;

use anyhow::Result;

use models::{Service, TeamMember, Testimonial, TrustedCompany};

pub use api::{AdminApi, ApiClient, ApiError, PublicApi};
pub use auth::{SessionState, SessionStore};
pub use config::ClientConfig;
pub use store::{AuthStore, EntityStore};

/// The configured facades sharing one request pipeline and session store.
pub struct FinConsultClient {
    pub public: PublicApi,
    pub admin: AdminApi,
    session: Arc<SessionStore>,
}

impl FinConsultClient {
    /// Build from explicit configuration and session store.
    pub fn new(config: ClientConfig, session: Arc<SessionStore>) -> Result<Self> {
        let client = ApiClient::new(config, session.clone())?;
        Ok(Self {
            public: PublicApi::new(client.clone()),
            admin: AdminApi::new(client),
            session,
        })
    }

    /// Build from the environment with the session rehydrated from its
    /// default platform location.
    pub fn from_env() -> Result<Self> {
        let session = Arc::new(SessionStore::open_default()?);
        Self::new(ClientConfig::from_env(), session)
    }

    pub fn session(&self) -> &Arc<SessionStore> {
        &self.session
    }

    /// An authentication container bound to this client's session store.
    pub fn auth_store(&self) -> AuthStore {
        AuthStore::new(self.admin.clone(), self.session.clone())
    }

    /// Fetch the home-page collections concurrently. Completions are
    /// independent; no ordering between the requests is assumed.
    pub async fn home_content(&self) -> std::result::Result<HomeContent, ApiError> {
        let (services, team, testimonials, trusted_companies) = futures::try_join!(
            self.public.services(),
            self.public.team(),
            self.public.testimonials(),
            self.public.trusted_companies(),
        )?;
        Ok(HomeContent {
            services,
            team,
            testimonials,
            trusted_companies,
        })
    }
}

/// Everything the public home page renders.
pub struct HomeContent {
    pub services: Vec<Service>,
    pub team: Vec<TeamMember>,
    pub testimonials: Vec<Testimonial>,
    pub trusted_companies: Vec<TrustedCompany>,
}
