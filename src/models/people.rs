//! Domain models for people: team members and admin users.

use serde::{Deserialize, Serialize};

use super::Entity;

/// A member of the consulting team shown on the public site.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct TeamMember {
    pub id: i64,
    pub name: String,
    pub position: String,
    pub bio: Option<String>,
    #[serde(rename = "photoUrl")]
    pub photo_url: Option<String>,
    pub email: Option<String>,
    #[serde(rename = "linkedinUrl")]
    pub linkedin_url: Option<String>,
}

impl Entity for TeamMember {
    fn id(&self) -> i64 {
        self.id
    }
}

/// An authenticated admin user's profile.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct UserProfile {
    pub id: i64,
    pub name: String,
    pub email: Option<String>,
    pub role: Option<String>,
}

/// Login request body for `/admin/login`.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Credentials {
    pub email: String,
    pub password: String,
}

/// Registration request body for `/admin/register`.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct RegisterRequest {
    pub name: String,
    pub email: String,
    pub password: String,
}

/// Response from the login endpoint: the user record plus a bearer token.
#[derive(Debug, Clone, Deserialize)]
pub struct LoginResponse {
    pub id: i64,
    pub name: String,
    pub email: Option<String>,
    pub role: Option<String>,
    pub token: String,
}

impl LoginResponse {
    /// Split into the profile to display and the token to store.
    pub fn into_parts(self) -> (UserProfile, String) {
        let profile = UserProfile {
            id: self.id,
            name: self.name,
            email: self.email,
            role: self.role,
        };
        (profile, self.token)
    }
}
