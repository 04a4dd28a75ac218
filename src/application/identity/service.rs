//! User management service: application-layer orchestration
//!
//! Registration, login, caller resolution, provider documents and account
//! removal. HTTP handlers should be thin wrappers that delegate to this
//! service.

use tracing::info;

use crate::application::pets::remove_pet;
use crate::auth::{create_token, hash_password, verify_password, Caller, JwtConfig, ProviderAccess};
use crate::domain::catalog::synchronizer;
use crate::domain::user::{NewProvider, NewUser};
use crate::domain::{
    DocumentType, DomainError, DomainResult, OwnerProfile, Provider, ProviderDocument,
    ProviderKind, ProviderService, RepositoryProvider, User, UserProfile, UserRole,
};
use crate::infrastructure::DatabaseStorage;

/// Default radius a new provider serves
pub const DEFAULT_SERVICE_RADIUS_KM: i32 = 10;

/// Authentication result returned after a successful login
#[derive(Debug, Clone)]
pub struct AuthResult {
    pub token: String,
    pub token_type: String,
    pub expires_in: i64,
    pub user: User,
}

/// Common account fields of both registration flows
#[derive(Debug, Clone)]
pub struct AccountInput {
    pub email: String,
    pub password: String,
    pub first_name: String,
    pub surname: String,
    pub patronymic: Option<String>,
}

#[derive(Debug, Clone)]
pub struct RegisterOwner {
    pub account: AccountInput,
    pub phone: Option<String>,
    pub address: Option<String>,
}

#[derive(Debug, Clone)]
pub struct RegisterProvider {
    pub account: AccountInput,
    pub company_name: String,
    pub kind: ProviderKind,
    pub service_radius_km: Option<i32>,
    pub hourly_rate_cents: i64,
}

/// A freshly registered provider and the catalog rows it received
#[derive(Debug, Clone)]
pub struct ProviderRegistration {
    pub user: User,
    pub provider: Provider,
    pub assigned: Vec<ProviderService>,
}

/// User service: orchestrates all identity use-cases.
#[derive(Clone)]
pub struct UserService {
    storage: DatabaseStorage,
    jwt_config: JwtConfig,
    bcrypt_cost: u32,
}

impl UserService {
    pub fn new(storage: DatabaseStorage, jwt_config: JwtConfig, bcrypt_cost: u32) -> Self {
        Self {
            storage,
            jwt_config,
            bcrypt_cost,
        }
    }

    // ── Authentication ──────────────────────────────────────────

    /// Authenticate by email + password and return a JWT.
    pub async fn login(&self, email: &str, password: &str) -> DomainResult<AuthResult> {
        let repos = self.storage.repos();
        let email = email.trim().to_lowercase();
        let Some(user) = repos.users().find_by_email(&email).await? else {
            return Err(DomainError::Unauthorized("Invalid credentials".into()));
        };

        let valid = verify_password(password, &user.password_hash).unwrap_or(false);
        if !valid {
            return Err(DomainError::Unauthorized("Invalid credentials".into()));
        }

        let token = create_token(user.id, user.role.as_str(), &self.jwt_config)
            .map_err(|e| DomainError::Storage(format!("Failed to create token: {}", e)))?;

        info!(user_id = user.id, role = %user.role, "User logged in");
        Ok(AuthResult {
            token,
            token_type: "Bearer".into(),
            expires_in: self.jwt_config.expiration_hours * 3600,
            user,
        })
    }

    /// Build the guard's view of an authenticated user.
    pub async fn resolve_caller(&self, user_id: i32) -> DomainResult<Caller> {
        let repos = self.storage.repos();
        let Some(user) = repos.users().find_by_id(user_id).await? else {
            return Err(DomainError::Unauthorized("Unknown user".into()));
        };

        let provider = match user.role {
            UserRole::Provider => repos
                .users()
                .find_provider(user_id)
                .await?
                .as_ref()
                .map(ProviderAccess::from),
            _ => None,
        };

        Ok(Caller {
            user_id,
            role: user.role,
            provider,
        })
    }

    // ── Registration ────────────────────────────────────────────

    pub async fn register_owner(&self, req: RegisterOwner) -> DomainResult<User> {
        let new_user = self.new_user(&req.account, UserRole::Owner)?;

        let uow = self.storage.begin().await?;
        let repos = uow.repos();

        let user = repos
            .users()
            .insert_user(new_user)
            .await
            .map_err(email_taken)?;
        repos
            .users()
            .insert_owner_profile(
                user.id,
                OwnerProfile {
                    phone: req.phone,
                    address: req.address,
                },
            )
            .await
            .map_err(|e| match e {
                DomainError::Conflict(_) => {
                    DomainError::Conflict("Phone number already registered".into())
                }
                other => other,
            })?;

        uow.commit().await?;

        info!(user_id = user.id, "Owner registered");
        Ok(user)
    }

    /// Register a provider and assign it every service of its kind, all in
    /// one unit of work.
    pub async fn register_provider(
        &self,
        req: RegisterProvider,
    ) -> DomainResult<ProviderRegistration> {
        if req.company_name.trim().is_empty() {
            return Err(DomainError::Validation("Company name is required".into()));
        }
        if req.hourly_rate_cents < 0 {
            return Err(DomainError::Validation(
                "Hourly rate must be non-negative".into(),
            ));
        }
        let new_user = self.new_user(&req.account, UserRole::Provider)?;

        let uow = self.storage.begin().await?;
        let repos = uow.repos();

        let user = repos
            .users()
            .insert_user(new_user)
            .await
            .map_err(email_taken)?;
        let provider = repos
            .users()
            .insert_provider(
                user.id,
                NewProvider {
                    company_name: req.company_name,
                    kind: req.kind,
                    service_radius_km: req
                        .service_radius_km
                        .unwrap_or(DEFAULT_SERVICE_RADIUS_KM),
                    hourly_rate_cents: req.hourly_rate_cents,
                },
            )
            .await?;
        let assigned = synchronizer::on_provider_registered(&repos, &provider).await?;

        uow.commit().await?;

        info!(
            user_id = user.id,
            kind = %provider.kind,
            assigned = assigned.len(),
            "Provider registered"
        );
        Ok(ProviderRegistration {
            user,
            provider,
            assigned,
        })
    }

    /// Create the back-office account unless one with this email exists.
    /// Returns `true` when an account was created.
    pub async fn ensure_admin(&self, account: AccountInput) -> DomainResult<bool> {
        let email = account.email.trim().to_lowercase();
        if self
            .storage
            .repos()
            .users()
            .find_by_email(&email)
            .await?
            .is_some()
        {
            return Ok(false);
        }

        let new_user = self.new_user(&account, UserRole::Admin)?;
        let uow = self.storage.begin().await?;
        let user = uow.repos().users().insert_user(new_user).await?;
        uow.commit().await?;

        info!(user_id = user.id, email = %user.email, "Admin account created");
        Ok(true)
    }

    // ── Queries ─────────────────────────────────────────────────

    pub async fn profile(&self, user_id: i32) -> DomainResult<UserProfile> {
        let repos = self.storage.repos();
        let user = repos
            .users()
            .find_by_id(user_id)
            .await?
            .ok_or_else(|| DomainError::not_found("User", user_id))?;

        let owner = repos.users().find_owner_profile(user_id).await?;
        let provider = repos.users().find_provider(user_id).await?;
        let documents = match provider {
            Some(_) => repos.users().list_documents(user_id).await?,
            None => Vec::new(),
        };

        Ok(UserProfile {
            user,
            owner,
            provider,
            documents,
        })
    }

    // ── Provider verification ───────────────────────────────────

    /// Upload a verification document; unverified providers may do this.
    pub async fn submit_document(
        &self,
        caller: &Caller,
        document_type: DocumentType,
        file_url: &str,
    ) -> DomainResult<ProviderDocument> {
        let provider = caller.require_provider()?;
        if file_url.trim().is_empty() {
            return Err(DomainError::Validation("File URL is required".into()));
        }

        let uow = self.storage.begin().await?;
        let document = uow
            .repos()
            .users()
            .insert_document(provider.id, document_type, file_url)
            .await
            .map_err(|e| match e {
                DomainError::Conflict(_) => DomainError::Conflict(format!(
                    "A {} document was already submitted",
                    document_type.as_str()
                )),
                other => other,
            })?;
        uow.commit().await?;

        info!(
            provider_id = provider.id,
            document_type = document_type.as_str(),
            "Provider document submitted"
        );
        Ok(document)
    }

    /// Back-office hook: mark a provider as verified.
    pub async fn verify_provider(&self, provider_id: i32) -> DomainResult<Provider> {
        let uow = self.storage.begin().await?;
        let repos = uow.repos();

        repos.users().set_provider_verified(provider_id, true).await?;
        let provider = repos
            .users()
            .find_provider(provider_id)
            .await?
            .ok_or_else(|| DomainError::not_found("Provider", provider_id))?;
        uow.commit().await?;

        info!(provider_id, kind = %provider.kind, "Provider verified");
        Ok(provider)
    }

    // ── Account removal ─────────────────────────────────────────

    /// Remove an account with every dependent row, in one unit of work.
    ///
    /// Provider: bookings on its slots are detached, then slots, catalog
    /// rows and documents go. Owner: each pet goes with its bookings and
    /// medical records; a completed booking on any pet blocks the removal.
    pub async fn delete_account(&self, user_id: i32) -> DomainResult<()> {
        let uow = self.storage.begin().await?;
        let repos = uow.repos();

        let user = repos
            .users()
            .find_by_id(user_id)
            .await?
            .ok_or_else(|| DomainError::not_found("User", user_id))?;

        match user.role {
            UserRole::Provider => {
                for slot in repos.slots().list_for_provider(user_id).await? {
                    repos.bookings().detach_slot(slot.id).await?;
                }
                repos.slots().delete_for_provider(user_id).await?;
                repos.provider_services().delete_for_provider(user_id).await?;
                repos.users().delete_documents(user_id).await?;
            }
            UserRole::Owner => {
                for pet in repos.pets().list_for_owner(user_id).await? {
                    remove_pet(&repos, pet.id).await?;
                }
            }
            UserRole::User | UserRole::Admin => {}
        }

        repos.users().delete(user_id).await?;
        uow.commit().await?;

        info!(user_id, role = %user.role, "Account deleted");
        Ok(())
    }

    // ── Helpers ─────────────────────────────────────────────────

    fn new_user(&self, account: &AccountInput, role: UserRole) -> DomainResult<NewUser> {
        if !account.email.contains('@') {
            return Err(DomainError::Validation("Invalid email address".into()));
        }
        if account.password.len() < 8 {
            return Err(DomainError::Validation(
                "Password must be at least 8 characters".into(),
            ));
        }
        if account.first_name.trim().is_empty() || account.surname.trim().is_empty() {
            return Err(DomainError::Validation(
                "First name and surname are required".into(),
            ));
        }

        let password_hash = hash_password(&account.password, self.bcrypt_cost)
            .map_err(|e| DomainError::Storage(format!("Failed to hash password: {}", e)))?;

        Ok(NewUser {
            email: account.email.trim().to_lowercase(),
            password_hash,
            first_name: account.first_name.clone(),
            surname: account.surname.clone(),
            patronymic: account.patronymic.clone(),
            role,
        })
    }
}

fn email_taken(e: DomainError) -> DomainError {
    match e {
        DomainError::Conflict(_) => DomainError::Conflict("Email already registered".into()),
        other => other,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::application::testing::{account, fixture, Fixture};
    use crate::domain::ServiceDetails;

    #[tokio::test]
    async fn failure_mid_fan_out_rolls_back_the_provider() {
        let f = fixture().await;
        for name in ["Bath", "Trim"] {
            f.service(
                name,
                ServiceDetails::Grooming {
                    tools_required: "clippers".into(),
                    coat_type: "any".into(),
                },
            )
            .await;
        }
        let request = || RegisterProvider {
            account: account("g@example.com"),
            company_name: "Clip Co".into(),
            kind: ProviderKind::Groomer,
            service_radius_km: None,
            hourly_rate_cents: 2500,
        };
        f.reject_assignments_after(1).await;

        assert!(f.users.register_provider(request()).await.is_err());
        let err = f
            .users
            .login("g@example.com", "password123")
            .await
            .unwrap_err();
        assert!(matches!(err, DomainError::Unauthorized(_)));

        // Nothing was left behind: the same email registers cleanly and both
        // services are assigned exactly once.
        f.accept_assignments().await;
        let registration = f.users.register_provider(request()).await.unwrap();
        assert_eq!(registration.assigned.len(), 2);
        let entries = f
            .catalog
            .list_provider_services(registration.provider.id)
            .await
            .unwrap();
        assert_eq!(entries.len(), 2);
    }

    #[tokio::test]
    async fn owner_registration_and_login() {
        let Fixture { users, .. } = fixture().await;

        let user = users
            .register_owner(RegisterOwner {
                account: account("Owner@Example.com"),
                phone: Some("+100".into()),
                address: None,
            })
            .await
            .unwrap();
        assert_eq!(user.role, UserRole::Owner);
        assert_eq!(user.email, "owner@example.com");

        let auth = users.login("owner@example.com", "password123").await.unwrap();
        assert_eq!(auth.user.id, user.id);
        assert_eq!(auth.token_type, "Bearer");

        let err = users.login("owner@example.com", "wrong-pass").await.unwrap_err();
        assert!(matches!(err, DomainError::Unauthorized(_)));
        let err = users.login("nobody@example.com", "password123").await.unwrap_err();
        assert!(matches!(err, DomainError::Unauthorized(_)));
    }

    #[tokio::test]
    async fn duplicate_email_is_a_conflict_and_leaves_nothing_behind() {
        let f = fixture().await;
        f.owner("dup@example.com").await;

        let err = f
            .users
            .register_provider(RegisterProvider {
                account: account("dup@example.com"),
                company_name: "Dup".into(),
                kind: ProviderKind::Groomer,
                service_radius_km: None,
                hourly_rate_cents: 0,
            })
            .await
            .unwrap_err();
        assert!(matches!(err, DomainError::Conflict(_)));
    }

    #[tokio::test]
    async fn duplicate_phone_rolls_back_the_user_row() {
        let f = fixture().await;
        let req = |email: &str| RegisterOwner {
            account: account(email),
            phone: Some("+555".into()),
            address: None,
        };
        f.users.register_owner(req("first@example.com")).await.unwrap();

        let err = f
            .users
            .register_owner(req("second@example.com"))
            .await
            .unwrap_err();
        assert!(matches!(err, DomainError::Conflict(_)));

        // the second user row was rolled back with the failed profile
        let err = f
            .users
            .login("second@example.com", "password123")
            .await
            .unwrap_err();
        assert!(matches!(err, DomainError::Unauthorized(_)));
    }

    #[tokio::test]
    async fn weak_password_is_rejected() {
        let f = fixture().await;
        let mut acc = account("weak@example.com");
        acc.password = "short".into();
        let err = f
            .users
            .register_owner(RegisterOwner {
                account: acc,
                phone: None,
                address: None,
            })
            .await
            .unwrap_err();
        assert!(matches!(err, DomainError::Validation(_)));
    }

    #[tokio::test]
    async fn resolve_caller_carries_provider_verification() {
        let f = fixture().await;
        let vet = f.provider("vet@example.com", ProviderKind::Vet).await;

        let caller = f.users.resolve_caller(vet.id).await.unwrap();
        assert_eq!(caller.role, UserRole::Provider);
        assert!(caller.require_active_provider().is_err());

        f.users.verify_provider(vet.id).await.unwrap();
        let caller = f.users.resolve_caller(vet.id).await.unwrap();
        assert!(caller.require_active_provider().is_ok());

        let err = f.users.resolve_caller(9999).await.unwrap_err();
        assert!(matches!(err, DomainError::Unauthorized(_)));
    }

    #[tokio::test]
    async fn unverified_vet_submits_one_document_per_type() {
        let f = fixture().await;
        let vet = f.provider("vet@example.com", ProviderKind::Vet).await;
        let caller = f.users.resolve_caller(vet.id).await.unwrap();

        let doc = f
            .users
            .submit_document(&caller, DocumentType::License, "https://files/license.pdf")
            .await
            .unwrap();
        assert_eq!(doc.provider_id, vet.id);

        let err = f
            .users
            .submit_document(&caller, DocumentType::License, "https://files/again.pdf")
            .await
            .unwrap_err();
        assert!(matches!(err, DomainError::Conflict(_)));

        f.users
            .submit_document(&caller, DocumentType::Certificate, "https://files/cert.pdf")
            .await
            .unwrap();
        let profile = f.users.profile(vet.id).await.unwrap();
        assert_eq!(profile.documents.len(), 2);
        assert!(profile.owner.is_none());
    }

    #[tokio::test]
    async fn owners_cannot_submit_documents() {
        let f = fixture().await;
        let owner = f.owner("o@example.com").await;
        let caller = f.users.resolve_caller(owner.id).await.unwrap();
        let err = f
            .users
            .submit_document(&caller, DocumentType::License, "https://x")
            .await
            .unwrap_err();
        assert!(matches!(err, DomainError::PermissionDenied(_)));
    }

    #[tokio::test]
    async fn deleting_a_provider_detaches_its_bookings() {
        let f = fixture().await;
        let service = f
            .service(
                "Bath",
                ServiceDetails::Grooming {
                    tools_required: "shampoo".into(),
                    coat_type: "any".into(),
                },
            )
            .await;
        let groomer = f.provider("g@example.com", ProviderKind::Groomer).await;
        let owner = f.owner("o@example.com").await;
        let pet = f.pet(owner.id, "Rex").await;
        let slot = f.slot(groomer.id, 10).await;
        let booking = f.book(owner.id, pet.id, slot.id, service.id).await;

        f.users.delete_account(groomer.id).await.unwrap();

        let details = f
            .bookings
            .get_booking(&Caller::owner(owner.id), booking.booking.id)
            .await
            .unwrap();
        assert!(details.slot.is_none());
        assert!(details.booking.slot_id.is_none());
        assert!(f.catalog.list_provider_services(groomer.id).await.is_err());
    }

    #[tokio::test]
    async fn deleting_an_owner_removes_pets_and_bookings() {
        let f = fixture().await;
        let service = f
            .service(
                "Walk",
                ServiceDetails::Sitting {
                    max_pets: 2,
                    overnight_available: false,
                },
            )
            .await;
        let sitter = f.provider("s@example.com", ProviderKind::Sitter).await;
        let owner = f.owner("o@example.com").await;
        let pet = f.pet(owner.id, "Tom").await;
        let slot = f.slot(sitter.id, 9).await;
        f.book(owner.id, pet.id, slot.id, service.id).await;

        f.users.delete_account(owner.id).await.unwrap();

        assert!(f.bookings.list_for_provider(sitter.id).await.unwrap().is_empty());
        let err = f.users.profile(owner.id).await.unwrap_err();
        assert!(matches!(err, DomainError::NotFound { .. }));
    }

    #[tokio::test]
    async fn admin_account_is_created_once() {
        let f = fixture().await;
        assert!(f.users.ensure_admin(account("root@example.com")).await.unwrap());
        assert!(!f.users.ensure_admin(account("ROOT@example.com")).await.unwrap());

        let auth = f.users.login("root@example.com", "password123").await.unwrap();
        assert_eq!(auth.user.role, UserRole::Admin);
    }
}
