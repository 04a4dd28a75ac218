//! Authentication & account DTOs

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use utoipa::ToSchema;
use validator::Validate;

use crate::application::{AccountInput, AuthResult, ProviderRegistration};
use crate::domain::{OwnerProfile, Provider, ProviderDocument, User, UserProfile};

#[derive(Debug, Deserialize, Validate, ToSchema)]
pub struct LoginRequest {
    #[validate(length(min = 1, message = "email is required"))]
    pub email: String,
    #[validate(length(min = 1, message = "password is required"))]
    pub password: String,
}

#[derive(Debug, Serialize, ToSchema)]
pub struct LoginResponse {
    pub token: String,
    pub token_type: String,
    pub expires_in: i64,
    pub user: UserInfo,
}

impl From<AuthResult> for LoginResponse {
    fn from(r: AuthResult) -> Self {
        Self {
            token: r.token,
            token_type: r.token_type,
            expires_in: r.expires_in,
            user: r.user.into(),
        }
    }
}

#[derive(Debug, Serialize, ToSchema)]
pub struct UserInfo {
    pub id: i32,
    pub email: String,
    pub first_name: String,
    pub surname: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub patronymic: Option<String>,
    /// `owner`, `provider`, `user` or `admin`
    pub role: String,
    pub created_at: DateTime<Utc>,
}

impl From<User> for UserInfo {
    fn from(u: User) -> Self {
        Self {
            id: u.id,
            email: u.email,
            first_name: u.first_name,
            surname: u.surname,
            patronymic: u.patronymic,
            role: u.role.to_string(),
            created_at: u.created_at,
        }
    }
}

#[derive(Debug, Deserialize, Validate, ToSchema)]
pub struct RegisterOwnerRequest {
    #[validate(email(message = "invalid email format"))]
    pub email: String,
    #[validate(length(min = 8, max = 128, message = "password must be 8-128 characters"))]
    pub password: String,
    #[validate(length(min = 1, max = 100, message = "first name is required"))]
    pub first_name: String,
    #[validate(length(min = 1, max = 100, message = "surname is required"))]
    pub surname: String,
    pub patronymic: Option<String>,
    #[validate(length(max = 20))]
    pub phone: Option<String>,
    pub address: Option<String>,
}

impl RegisterOwnerRequest {
    pub fn account(&self) -> AccountInput {
        AccountInput {
            email: self.email.clone(),
            password: self.password.clone(),
            first_name: self.first_name.clone(),
            surname: self.surname.clone(),
            patronymic: self.patronymic.clone(),
        }
    }
}

#[derive(Debug, Deserialize, Validate, ToSchema)]
pub struct RegisterProviderRequest {
    #[validate(email(message = "invalid email format"))]
    pub email: String,
    #[validate(length(min = 8, max = 128, message = "password must be 8-128 characters"))]
    pub password: String,
    #[validate(length(min = 1, max = 100, message = "first name is required"))]
    pub first_name: String,
    #[validate(length(min = 1, max = 100, message = "surname is required"))]
    pub surname: String,
    pub patronymic: Option<String>,
    #[validate(length(min = 1, max = 200, message = "company name is required"))]
    pub company_name: String,
    /// `vet`, `groomer` or `sitter`
    #[schema(example = "groomer")]
    pub kind: String,
    #[validate(range(min = 1, max = 500))]
    pub service_radius_km: Option<i32>,
    #[validate(range(min = 0))]
    pub hourly_rate_cents: i64,
}

impl RegisterProviderRequest {
    pub fn account(&self) -> AccountInput {
        AccountInput {
            email: self.email.clone(),
            password: self.password.clone(),
            first_name: self.first_name.clone(),
            surname: self.surname.clone(),
            patronymic: self.patronymic.clone(),
        }
    }
}

#[derive(Debug, Serialize, ToSchema)]
pub struct OwnerInfo {
    pub phone: Option<String>,
    pub address: Option<String>,
}

impl From<OwnerProfile> for OwnerInfo {
    fn from(o: OwnerProfile) -> Self {
        Self {
            phone: o.phone,
            address: o.address,
        }
    }
}

#[derive(Debug, Serialize, ToSchema)]
pub struct ProviderInfo {
    pub id: i32,
    pub company_name: String,
    pub kind: String,
    pub service_radius_km: i32,
    pub hourly_rate_cents: i64,
    pub is_verified: bool,
}

impl From<Provider> for ProviderInfo {
    fn from(p: Provider) -> Self {
        Self {
            id: p.id,
            company_name: p.company_name,
            kind: p.kind.to_string(),
            service_radius_km: p.service_radius_km,
            hourly_rate_cents: p.hourly_rate_cents,
            is_verified: p.is_verified,
        }
    }
}

#[derive(Debug, Serialize, ToSchema)]
pub struct ProviderRegistrationResponse {
    pub user: UserInfo,
    pub provider: ProviderInfo,
    /// Number of catalog services assigned on registration
    pub assigned_services: usize,
}

impl From<ProviderRegistration> for ProviderRegistrationResponse {
    fn from(r: ProviderRegistration) -> Self {
        Self {
            user: r.user.into(),
            provider: r.provider.into(),
            assigned_services: r.assigned.len(),
        }
    }
}

#[derive(Debug, Deserialize, Validate, ToSchema)]
pub struct SubmitDocumentRequest {
    /// `license` or `certificate`
    #[schema(example = "license")]
    pub document_type: String,
    #[validate(length(min = 1, max = 500, message = "file URL is required"))]
    pub file_url: String,
}

#[derive(Debug, Serialize, ToSchema)]
pub struct DocumentDto {
    pub id: i32,
    pub document_type: String,
    pub file_url: String,
    pub status: String,
}

impl From<ProviderDocument> for DocumentDto {
    fn from(d: ProviderDocument) -> Self {
        Self {
            id: d.id,
            document_type: d.document_type.as_str().to_string(),
            file_url: d.file_url,
            status: d.status.as_str().to_string(),
        }
    }
}

#[derive(Debug, Serialize, ToSchema)]
pub struct ProfileResponse {
    pub user: UserInfo,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub owner: Option<OwnerInfo>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub provider: Option<ProviderInfo>,
    pub documents: Vec<DocumentDto>,
}

impl From<UserProfile> for ProfileResponse {
    fn from(p: UserProfile) -> Self {
        Self {
            user: p.user.into(),
            owner: p.owner.map(Into::into),
            provider: p.provider.map(Into::into),
            documents: p.documents.into_iter().map(Into::into).collect(),
        }
    }
}
