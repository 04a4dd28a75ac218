//! Catalog synchronizer
//!
//! Keeps the invariant "every provider is assigned every service of its own
//! kind". Both entry points are additive only and must run inside the unit
//! of work that created the triggering provider or service, so the fan-out
//! commits or rolls back together with it.

use tracing::info;

use super::model::{NewProviderService, ProviderService, Service};
use crate::domain::repositories::RepositoryProvider;
use crate::domain::user::Provider;
use crate::domain::DomainResult;

/// Assign every existing service of `provider.kind` to a newly registered provider.
pub async fn on_provider_registered(
    repos: &dyn RepositoryProvider,
    provider: &Provider,
) -> DomainResult<Vec<ProviderService>> {
    let services = repos.services().find_by_kind(provider.kind).await?;

    let mut created = Vec::with_capacity(services.len());
    for service in &services {
        let assignment = NewProviderService::seeded_from(provider.id, service);
        created.push(repos.provider_services().insert(assignment).await?);
    }

    info!(
        provider_id = provider.id,
        kind = %provider.kind,
        assigned = created.len(),
        "Catalog synchronized for new provider"
    );
    Ok(created)
}

/// Assign a newly created service to every provider of its kind.
pub async fn on_service_created(
    repos: &dyn RepositoryProvider,
    service: &Service,
) -> DomainResult<Vec<ProviderService>> {
    let providers = repos.users().find_providers_by_kind(service.kind()).await?;

    let mut created = Vec::with_capacity(providers.len());
    for provider in &providers {
        let assignment = NewProviderService::seeded_from(provider.id, service);
        created.push(repos.provider_services().insert(assignment).await?);
    }

    info!(
        service_id = service.id,
        kind = %service.kind(),
        assigned = created.len(),
        "Catalog synchronized for new service"
    );
    Ok(created)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::catalog::{NewService, ServiceDetails};
    use crate::domain::user::{NewProvider, NewUser};
    use crate::domain::{DomainError, ProviderKind, UserRole};
    use crate::infrastructure::database::storage::testing::in_memory_storage;

    async fn insert_provider(
        repos: &dyn RepositoryProvider,
        email: &str,
        kind: ProviderKind,
    ) -> Provider {
        let user = repos
            .users()
            .insert_user(NewUser {
                email: email.into(),
                password_hash: "hash".into(),
                first_name: "Sam".into(),
                surname: "Brush".into(),
                patronymic: None,
                role: UserRole::Provider,
            })
            .await
            .unwrap();
        repos
            .users()
            .insert_provider(
                user.id,
                NewProvider {
                    company_name: "Brush & Co".into(),
                    kind,
                    service_radius_km: 10,
                    hourly_rate_cents: 2000,
                },
            )
            .await
            .unwrap()
    }

    async fn insert_service(
        repos: &dyn RepositoryProvider,
        name: &str,
        details: ServiceDetails,
    ) -> Service {
        repos
            .services()
            .insert(NewService {
                name: name.into(),
                base_price_cents: 1500,
                duration_min: 45,
                details,
            })
            .await
            .unwrap()
    }

    fn grooming() -> ServiceDetails {
        ServiceDetails::Grooming {
            tools_required: "clippers".into(),
            coat_type: "double".into(),
        }
    }

    fn sitting() -> ServiceDetails {
        ServiceDetails::Sitting {
            max_pets: 2,
            overnight_available: true,
        }
    }

    #[tokio::test]
    async fn new_provider_receives_only_services_of_its_kind() {
        let storage = in_memory_storage().await;
        let uow = storage.begin().await.unwrap();
        let repos = uow.repos();

        let bath = insert_service(&repos, "Bath", grooming()).await;
        insert_service(&repos, "Trim", grooming()).await;
        insert_service(&repos, "Walk", sitting()).await;
        let groomer = insert_provider(&repos, "g@example.com", ProviderKind::Groomer).await;

        let created = on_provider_registered(&repos, &groomer).await.unwrap();

        assert_eq!(created.len(), 2);
        let seeded = created.iter().find(|a| a.service_id == bath.id).unwrap();
        assert_eq!(seeded.provider_id, groomer.id);
        assert_eq!(seeded.custom_price_cents, 1500);
        assert_eq!(seeded.custom_duration, 45);
    }

    #[tokio::test]
    async fn new_service_reaches_every_provider_of_its_kind() {
        let storage = in_memory_storage().await;
        let uow = storage.begin().await.unwrap();
        let repos = uow.repos();

        let first = insert_provider(&repos, "a@example.com", ProviderKind::Sitter).await;
        let second = insert_provider(&repos, "b@example.com", ProviderKind::Sitter).await;
        insert_provider(&repos, "c@example.com", ProviderKind::Groomer).await;
        let walk = insert_service(&repos, "Walk", sitting()).await;

        let created = on_service_created(&repos, &walk).await.unwrap();

        let mut providers: Vec<i32> = created.iter().map(|a| a.provider_id).collect();
        providers.sort();
        assert_eq!(providers, vec![first.id, second.id]);
    }

    #[tokio::test]
    async fn repeated_fan_out_is_a_conflict() {
        let storage = in_memory_storage().await;
        let uow = storage.begin().await.unwrap();
        let repos = uow.repos();

        insert_service(&repos, "Bath", grooming()).await;
        let groomer = insert_provider(&repos, "g@example.com", ProviderKind::Groomer).await;
        on_provider_registered(&repos, &groomer).await.unwrap();

        let err = on_provider_registered(&repos, &groomer).await.unwrap_err();
        assert!(matches!(err, DomainError::Conflict(_)));
    }

    #[tokio::test]
    async fn nothing_to_assign_is_not_an_error() {
        let storage = in_memory_storage().await;
        let uow = storage.begin().await.unwrap();
        let repos = uow.repos();

        let vet = insert_provider(&repos, "v@example.com", ProviderKind::Vet).await;

        assert!(on_provider_registered(&repos, &vet).await.unwrap().is_empty());
    }
}
