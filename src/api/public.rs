//! Facade over the public (unauthenticated) endpoints.
//!
//! A declarative table of operation name to method and path; every call
//! delegates to the client pipeline unchanged. No retries, caching, or
//! transformation happen here.

use crate::models::{
    AboutEntry, Article, Category, Consultation, ConsultationRequest, ContactMessage,
    ContactRequest, Service, TeamMember, Testimonial, TrustedCompany,
};

use super::{ApiClient, ApiError};

#[derive(Clone)]
pub struct PublicApi {
    client: ApiClient,
}

impl PublicApi {
    pub fn new(client: ApiClient) -> Self {
        Self { client }
    }

    pub async fn about(&self) -> Result<Vec<AboutEntry>, ApiError> {
        self.client.get("/public/about").await
    }

    pub async fn categories(&self) -> Result<Vec<Category>, ApiError> {
        self.client.get("/public/categories").await
    }

    pub async fn services(&self) -> Result<Vec<Service>, ApiError> {
        self.client.get("/public/services").await
    }

    pub async fn services_by_category(&self, category_id: i64) -> Result<Vec<Service>, ApiError> {
        self.client
            .get(&format!("/public/services/category/{}", category_id))
            .await
    }

    pub async fn team(&self) -> Result<Vec<TeamMember>, ApiError> {
        self.client.get("/public/team").await
    }

    pub async fn team_member(&self, id: i64) -> Result<TeamMember, ApiError> {
        self.client.get(&format!("/public/team/{}", id)).await
    }

    pub async fn testimonials(&self) -> Result<Vec<Testimonial>, ApiError> {
        self.client.get("/public/testimonials").await
    }

    pub async fn trusted_companies(&self) -> Result<Vec<TrustedCompany>, ApiError> {
        self.client.get("/public/trusted-companies").await
    }

    pub async fn articles(&self) -> Result<Vec<Article>, ApiError> {
        self.client.get("/public/articles").await
    }

    pub async fn send_contact(&self, message: &ContactRequest) -> Result<ContactMessage, ApiError> {
        self.client.post("/public/contact", message).await
    }

    pub async fn request_consultation(
        &self,
        request: &ConsultationRequest,
    ) -> Result<Consultation, ApiError> {
        self.client.post("/public/consultations", request).await
    }
}
