//! Facade over the authenticated admin endpoints.
//!
//! Each managed entity gets a uniform CRUD surface under
//! `/admin/<resource>[/:id]`, expressed once as `AdminCollection` and
//! instantiated per resource. Everything delegates to the client pipeline
//! unchanged; the only endpoint-specific shape is the consultation status
//! update.

use std::marker::PhantomData;

use serde::{de::DeserializeOwned, Serialize};

use crate::models::{
    AboutEntry, Article, Category, Consultation, ConsultationStatus, ContactMessage, Credentials,
    LoginResponse, RegisterRequest, Service, TeamMember, Testimonial, TrustedCompany, UserProfile,
};

use super::{ApiClient, ApiError};

/// The uniform CRUD surface for one admin resource.
pub struct AdminCollection<T> {
    client: ApiClient,
    resource: &'static str,
    _entity: PhantomData<fn() -> T>,
}

impl<T> Clone for AdminCollection<T> {
    fn clone(&self) -> Self {
        Self {
            client: self.client.clone(),
            resource: self.resource,
            _entity: PhantomData,
        }
    }
}

impl<T: DeserializeOwned> AdminCollection<T> {
    fn new(client: ApiClient, resource: &'static str) -> Self {
        Self {
            client,
            resource,
            _entity: PhantomData,
        }
    }

    fn path(&self) -> String {
        format!("/admin/{}", self.resource)
    }

    fn item_path(&self, id: i64) -> String {
        format!("/admin/{}/{}", self.resource, id)
    }

    pub async fn list(&self) -> Result<Vec<T>, ApiError> {
        self.client.get(&self.path()).await
    }

    pub async fn get(&self, id: i64) -> Result<T, ApiError> {
        self.client.get(&self.item_path(id)).await
    }

    pub async fn create<B: Serialize>(&self, body: &B) -> Result<T, ApiError> {
        self.client.post(&self.path(), body).await
    }

    pub async fn update<B: Serialize>(&self, id: i64, body: &B) -> Result<T, ApiError> {
        self.client.put(&self.item_path(id), body).await
    }

    pub async fn delete(&self, id: i64) -> Result<(), ApiError> {
        self.client.delete(&self.item_path(id)).await
    }
}

#[derive(Clone)]
pub struct AdminApi {
    client: ApiClient,
}

impl AdminApi {
    pub fn new(client: ApiClient) -> Self {
        Self { client }
    }

    // ===== Authentication =====

    pub async fn login(&self, credentials: &Credentials) -> Result<LoginResponse, ApiError> {
        self.client.post("/admin/login", credentials).await
    }

    pub async fn register(&self, request: &RegisterRequest) -> Result<LoginResponse, ApiError> {
        self.client.post("/admin/register", request).await
    }

    pub async fn me(&self) -> Result<UserProfile, ApiError> {
        self.client.get("/admin/me").await
    }

    // ===== Managed resources =====

    pub fn about(&self) -> AdminCollection<AboutEntry> {
        AdminCollection::new(self.client.clone(), "about")
    }

    pub fn categories(&self) -> AdminCollection<Category> {
        AdminCollection::new(self.client.clone(), "categories")
    }

    pub fn services(&self) -> AdminCollection<Service> {
        AdminCollection::new(self.client.clone(), "services")
    }

    pub fn contacts(&self) -> AdminCollection<ContactMessage> {
        AdminCollection::new(self.client.clone(), "contacts")
    }

    pub fn team(&self) -> AdminCollection<TeamMember> {
        AdminCollection::new(self.client.clone(), "team")
    }

    pub fn consultations(&self) -> AdminCollection<Consultation> {
        AdminCollection::new(self.client.clone(), "consultations")
    }

    pub fn testimonials(&self) -> AdminCollection<Testimonial> {
        AdminCollection::new(self.client.clone(), "testimonials")
    }

    pub fn trusted_companies(&self) -> AdminCollection<TrustedCompany> {
        AdminCollection::new(self.client.clone(), "trusted-companies")
    }

    pub fn articles(&self) -> AdminCollection<Article> {
        AdminCollection::new(self.client.clone(), "articles")
    }

    /// Update the workflow status of a consultation request.
    pub async fn set_consultation_status(
        &self,
        id: i64,
        status: ConsultationStatus,
    ) -> Result<Consultation, ApiError> {
        self.client
            .put(
                &format!("/admin/consultations/{}/status", id),
                &serde_json::json!({ "status": status }),
            )
            .await
    }
}
