//! User, owner and provider domain entities

use std::str::FromStr;

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use crate::domain::ProviderKind;
use crate::support::errors::DomainError;

/// User role
///
/// `User` is the default role and cannot act; `Admin` is reserved.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum UserRole {
    #[default]
    User,
    Owner,
    Provider,
    Admin,
}

impl UserRole {
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::User => "user",
            Self::Owner => "owner",
            Self::Provider => "provider",
            Self::Admin => "admin",
        }
    }
}

impl FromStr for UserRole {
    type Err = DomainError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "user" => Ok(Self::User),
            "owner" => Ok(Self::Owner),
            "provider" => Ok(Self::Provider),
            "admin" => Ok(Self::Admin),
            other => Err(DomainError::Validation(format!("Unknown role: {}", other))),
        }
    }
}

impl std::fmt::Display for UserRole {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

/// Base account shared by owners and providers
#[derive(Debug, Clone)]
pub struct User {
    pub id: i32,
    pub email: String,
    pub password_hash: String,
    pub first_name: String,
    pub surname: String,
    pub patronymic: Option<String>,
    pub role: UserRole,
    pub created_at: DateTime<Utc>,
}

impl User {
    pub fn full_name(&self) -> String {
        match &self.patronymic {
            Some(p) => format!("{} {} {}", self.surname, self.first_name, p),
            None => format!("{} {}", self.surname, self.first_name),
        }
    }
}

/// Fields needed to create a user row
#[derive(Debug, Clone)]
pub struct NewUser {
    pub email: String,
    pub password_hash: String,
    pub first_name: String,
    pub surname: String,
    pub patronymic: Option<String>,
    pub role: UserRole,
}

/// Owner subtype payload
#[derive(Debug, Clone, Default, PartialEq)]
pub struct OwnerProfile {
    pub phone: Option<String>,
    pub address: Option<String>,
}

/// Provider subtype. `id` is the owning user's id.
#[derive(Debug, Clone, PartialEq)]
pub struct Provider {
    pub id: i32,
    pub company_name: String,
    pub kind: ProviderKind,
    pub service_radius_km: i32,
    /// Hourly rate in the smallest currency unit
    pub hourly_rate_cents: i64,
    pub is_verified: bool,
}

impl Provider {
    /// Whether the verification gate lets this provider act.
    pub fn can_act(&self) -> bool {
        !self.kind.requires_verification() || self.is_verified
    }
}

#[derive(Debug, Clone)]
pub struct NewProvider {
    pub company_name: String,
    pub kind: ProviderKind,
    pub service_radius_km: i32,
    pub hourly_rate_cents: i64,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum DocumentType {
    License,
    Certificate,
}

impl DocumentType {
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::License => "license",
            Self::Certificate => "certificate",
        }
    }
}

impl FromStr for DocumentType {
    type Err = DomainError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "license" => Ok(Self::License),
            "certificate" => Ok(Self::Certificate),
            other => Err(DomainError::Validation(format!(
                "Unknown document type: {}",
                other
            ))),
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum DocumentStatus {
    #[default]
    Pending,
    Approved,
    Rejected,
}

impl DocumentStatus {
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Pending => "pending",
            Self::Approved => "approved",
            Self::Rejected => "rejected",
        }
    }
}

/// Verification document uploaded by a provider
#[derive(Debug, Clone)]
pub struct ProviderDocument {
    pub id: i32,
    pub provider_id: i32,
    pub document_type: DocumentType,
    pub file_url: String,
    pub status: DocumentStatus,
}

/// A user with its subtype payload resolved
#[derive(Debug, Clone)]
pub struct UserProfile {
    pub user: User,
    pub owner: Option<OwnerProfile>,
    pub provider: Option<Provider>,
    pub documents: Vec<ProviderDocument>,
}

#[cfg(test)]
mod tests {
    use super::*;

    fn provider(kind: ProviderKind, is_verified: bool) -> Provider {
        Provider {
            id: 1,
            company_name: "Paws & Co".into(),
            kind,
            service_radius_km: 10,
            hourly_rate_cents: 2500,
            is_verified,
        }
    }

    #[test]
    fn unverified_vet_cannot_act() {
        assert!(!provider(ProviderKind::Vet, false).can_act());
        assert!(provider(ProviderKind::Vet, true).can_act());
    }

    #[test]
    fn groomers_and_sitters_act_without_verification() {
        assert!(provider(ProviderKind::Groomer, false).can_act());
        assert!(provider(ProviderKind::Sitter, false).can_act());
    }

    #[test]
    fn role_roundtrip() {
        for role in [UserRole::User, UserRole::Owner, UserRole::Provider, UserRole::Admin] {
            assert_eq!(role.as_str().parse::<UserRole>().unwrap(), role);
        }
    }

    #[test]
    fn full_name_includes_patronymic_when_present() {
        let mut user = User {
            id: 1,
            email: "a@b.c".into(),
            password_hash: String::new(),
            first_name: "Ivan".into(),
            surname: "Petrov".into(),
            patronymic: None,
            role: UserRole::Owner,
            created_at: Utc::now(),
        };
        assert_eq!(user.full_name(), "Petrov Ivan");
        user.patronymic = Some("Sergeevich".into());
        assert_eq!(user.full_name(), "Petrov Ivan Sergeevich");
    }
}
