//! User repository interface

use async_trait::async_trait;

use super::model::{
    DocumentType, NewProvider, NewUser, OwnerProfile, Provider, ProviderDocument, User,
};
use crate::domain::{DomainResult, ProviderKind};

#[async_trait]
pub trait UserRepository: Send + Sync {
    /// Insert the base user row. Duplicate email → `Conflict`.
    async fn insert_user(&self, user: NewUser) -> DomainResult<User>;
    async fn insert_owner_profile(&self, user_id: i32, profile: OwnerProfile) -> DomainResult<()>;
    async fn insert_provider(&self, user_id: i32, provider: NewProvider) -> DomainResult<Provider>;

    async fn find_by_id(&self, id: i32) -> DomainResult<Option<User>>;
    async fn find_by_email(&self, email: &str) -> DomainResult<Option<User>>;
    async fn find_owner_profile(&self, user_id: i32) -> DomainResult<Option<OwnerProfile>>;
    async fn find_provider(&self, user_id: i32) -> DomainResult<Option<Provider>>;
    async fn find_providers_by_kind(&self, kind: ProviderKind) -> DomainResult<Vec<Provider>>;

    async fn set_provider_verified(&self, user_id: i32, verified: bool) -> DomainResult<()>;

    /// One document per type and provider → `Conflict` on a second one.
    async fn insert_document(
        &self,
        provider_id: i32,
        document_type: DocumentType,
        file_url: &str,
    ) -> DomainResult<ProviderDocument>;
    async fn list_documents(&self, provider_id: i32) -> DomainResult<Vec<ProviderDocument>>;
    async fn delete_documents(&self, provider_id: i32) -> DomainResult<u64>;

    /// Remove the user row together with its owner/provider subtype row.
    async fn delete(&self, user_id: i32) -> DomainResult<()>;
}
