//! Catalog repository interfaces

use async_trait::async_trait;

use super::model::{CatalogEntry, NewProviderService, NewService, ProviderService, Service};
use crate::domain::{DomainResult, ProviderKind};

#[async_trait]
pub trait ServiceRepository: Send + Sync {
    /// Insert the base row and its kind-specific subtype row
    async fn insert(&self, service: NewService) -> DomainResult<Service>;
    async fn find_by_id(&self, id: i32) -> DomainResult<Option<Service>>;
    async fn find_by_kind(&self, kind: ProviderKind) -> DomainResult<Vec<Service>>;
    async fn find_all(&self) -> DomainResult<Vec<Service>>;
    async fn delete(&self, id: i32) -> DomainResult<()>;
}

#[async_trait]
pub trait ProviderServiceRepository: Send + Sync {
    /// Duplicate `(provider_id, service_id)` → `Conflict`.
    async fn insert(&self, assignment: NewProviderService) -> DomainResult<ProviderService>;
    async fn find_by_id(&self, id: i32) -> DomainResult<Option<ProviderService>>;
    async fn find_by_pair(
        &self,
        provider_id: i32,
        service_id: i32,
    ) -> DomainResult<Option<ProviderService>>;
    async fn list_for_provider(&self, provider_id: i32) -> DomainResult<Vec<CatalogEntry>>;
    async fn update(&self, assignment: ProviderService) -> DomainResult<()>;
    async fn delete_for_provider(&self, provider_id: i32) -> DomainResult<u64>;
    async fn delete_for_service(&self, service_id: i32) -> DomainResult<u64>;
}
