//! Catalog service
//!
//! Service creation runs the synchronizer in the same unit of work, so a
//! service never becomes visible without its provider assignments.

use tracing::info;

use crate::auth::{ensure_service_group, Caller};
use crate::domain::catalog::synchronizer;
use crate::domain::{
    CatalogEntry, DomainError, DomainResult, NewService, ProviderKind, ProviderService,
    ProviderServicePatch, RepositoryProvider, Service,
};
use crate::infrastructure::DatabaseStorage;

/// A freshly created service with the assignments fanned out for it
#[derive(Debug, Clone)]
pub struct ServiceCreation {
    pub service: Service,
    pub assigned: Vec<ProviderService>,
}

#[derive(Clone)]
pub struct CatalogService {
    storage: DatabaseStorage,
}

impl CatalogService {
    pub fn new(storage: DatabaseStorage) -> Self {
        Self { storage }
    }

    pub async fn create_service(&self, new_service: NewService) -> DomainResult<ServiceCreation> {
        new_service.validate()?;

        let uow = self.storage.begin().await?;
        let repos = uow.repos();
        let service = repos.services().insert(new_service).await?;
        let assigned = synchronizer::on_service_created(&repos, &service).await?;
        uow.commit().await?;

        info!(
            service_id = service.id,
            kind = %service.kind(),
            assigned = assigned.len(),
            "Service created"
        );
        Ok(ServiceCreation { service, assigned })
    }

    pub async fn list_services(&self, kind: Option<ProviderKind>) -> DomainResult<Vec<Service>> {
        let repos = self.storage.repos();
        match kind {
            Some(kind) => repos.services().find_by_kind(kind).await,
            None => repos.services().find_all().await,
        }
    }

    pub async fn get_service(&self, id: i32) -> DomainResult<Service> {
        self.storage
            .repos()
            .services()
            .find_by_id(id)
            .await?
            .ok_or_else(|| DomainError::not_found("Service", id))
    }

    pub async fn list_provider_services(&self, provider_id: i32) -> DomainResult<Vec<CatalogEntry>> {
        let repos = self.storage.repos();
        if repos.users().find_provider(provider_id).await?.is_none() {
            return Err(DomainError::not_found("Provider", provider_id));
        }
        repos.provider_services().list_for_provider(provider_id).await
    }

    /// Edit price, duration or notes of one of the caller's own assignments.
    pub async fn update_provider_service(
        &self,
        caller: &Caller,
        id: i32,
        patch: ProviderServicePatch,
    ) -> DomainResult<ProviderService> {
        let provider = caller.require_active_provider()?;

        let uow = self.storage.begin().await?;
        let repos = uow.repos();
        let mut assignment = repos
            .provider_services()
            .find_by_id(id)
            .await?
            .ok_or_else(|| DomainError::not_found("ProviderService", id))?;
        if assignment.provider_id != provider.id {
            return Err(DomainError::PermissionDenied(
                "ProviderService belongs to another provider".into(),
            ));
        }

        let service = repos
            .services()
            .find_by_id(assignment.service_id)
            .await?
            .ok_or_else(|| DomainError::not_found("Service", assignment.service_id))?;
        ensure_service_group(provider.kind, &service)?;

        assignment.apply(patch)?;
        repos.provider_services().update(assignment.clone()).await?;
        uow.commit().await?;
        Ok(assignment)
    }

    /// Remove a service and its assignments. Bookings still pointing at it
    /// make the delete fail with `Conflict`.
    pub async fn delete_service(&self, id: i32) -> DomainResult<()> {
        let uow = self.storage.begin().await?;
        let repos = uow.repos();
        if repos.services().find_by_id(id).await?.is_none() {
            return Err(DomainError::not_found("Service", id));
        }

        let removed = repos.provider_services().delete_for_service(id).await?;
        repos.services().delete(id).await.map_err(|e| match e {
            DomainError::Conflict(_) => {
                DomainError::Conflict(format!("Service {} is still referenced by bookings", id))
            }
            other => other,
        })?;
        uow.commit().await?;

        info!(service_id = id, assignments = removed, "Service deleted");
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::application::testing::fixture;
    use crate::domain::ServiceDetails;

    fn vet_service(name: &str) -> NewService {
        NewService {
            name: name.into(),
            base_price_cents: 3000,
            duration_min: 30,
            details: ServiceDetails::Veterinary {
                animal_type: "dog".into(),
                emergency_available: false,
            },
        }
    }

    fn grooming() -> ServiceDetails {
        ServiceDetails::Grooming {
            tools_required: "clippers".into(),
            coat_type: "short".into(),
        }
    }

    #[tokio::test]
    async fn provider_registered_first_gets_new_service() {
        let f = fixture().await;
        let groomer = f.provider("g@example.com", ProviderKind::Groomer).await;

        let created = f
            .catalog
            .create_service(NewService {
                name: "Bath".into(),
                base_price_cents: 2500,
                duration_min: 45,
                details: grooming(),
            })
            .await
            .unwrap();
        assert_eq!(created.assigned.len(), 1);

        let entries = f.catalog.list_provider_services(groomer.id).await.unwrap();
        assert_eq!(entries.len(), 1);
        assert_eq!(entries[0].service.id, created.service.id);
        assert_eq!(entries[0].assignment.custom_price_cents, 2500);
        assert_eq!(entries[0].assignment.custom_duration, 45);
    }

    #[tokio::test]
    async fn failure_mid_fan_out_rolls_back_the_service() {
        let f = fixture().await;
        let first = f.provider("a@example.com", ProviderKind::Groomer).await;
        let second = f.provider("b@example.com", ProviderKind::Groomer).await;
        f.reject_assignments_after(1).await;

        let result = f
            .catalog
            .create_service(NewService {
                name: "Bath".into(),
                base_price_cents: 1500,
                duration_min: 60,
                details: grooming(),
            })
            .await;
        assert!(result.is_err());

        assert!(f.catalog.list_services(None).await.unwrap().is_empty());
        for provider_id in [first.id, second.id] {
            let entries = f.catalog.list_provider_services(provider_id).await.unwrap();
            assert!(entries.is_empty());
        }
    }

    #[tokio::test]
    async fn service_is_not_assigned_across_kinds() {
        let f = fixture().await;
        let sitter = f.provider("s@example.com", ProviderKind::Sitter).await;
        let created = f.catalog.create_service(vet_service("Checkup")).await.unwrap();

        assert!(created.assigned.is_empty());
        assert!(f
            .catalog
            .list_provider_services(sitter.id)
            .await
            .unwrap()
            .is_empty());
    }

    #[tokio::test]
    async fn invalid_service_is_rejected_without_side_effects() {
        let f = fixture().await;
        let mut bad = vet_service("Checkup");
        bad.duration_min = 0;

        let err = f.catalog.create_service(bad).await.unwrap_err();
        assert!(matches!(err, DomainError::Validation(_)));
        assert!(f.catalog.list_services(None).await.unwrap().is_empty());
    }

    #[tokio::test]
    async fn list_services_filters_by_kind() {
        let f = fixture().await;
        f.service("Bath", grooming()).await;
        f.catalog.create_service(vet_service("Checkup")).await.unwrap();

        assert_eq!(f.catalog.list_services(None).await.unwrap().len(), 2);
        let vets = f
            .catalog
            .list_services(Some(ProviderKind::Vet))
            .await
            .unwrap();
        assert_eq!(vets.len(), 1);
        assert_eq!(vets[0].name, "Checkup");
    }

    #[tokio::test]
    async fn provider_edits_own_assignment() {
        let f = fixture().await;
        f.service("Bath", grooming()).await;
        let groomer = f.provider("g@example.com", ProviderKind::Groomer).await;
        let caller = f.users.resolve_caller(groomer.id).await.unwrap();
        let entry = f.catalog.list_provider_services(groomer.id).await.unwrap()[0].clone();

        let updated = f
            .catalog
            .update_provider_service(
                &caller,
                entry.assignment.id,
                ProviderServicePatch {
                    custom_price_cents: Some(3100),
                    extra_info: Some("Includes nail trim".into()),
                    ..Default::default()
                },
            )
            .await
            .unwrap();
        assert_eq!(updated.custom_price_cents, 3100);
        assert_eq!(updated.custom_duration, entry.assignment.custom_duration);

        let err = f
            .catalog
            .update_provider_service(&caller, entry.assignment.id, ProviderServicePatch::default())
            .await
            .unwrap_err();
        assert!(matches!(err, DomainError::Validation(_)));
    }

    #[tokio::test]
    async fn provider_cannot_edit_someone_elses_assignment() {
        let f = fixture().await;
        f.service("Bath", grooming()).await;
        let first = f.provider("g1@example.com", ProviderKind::Groomer).await;
        let second = f.provider("g2@example.com", ProviderKind::Groomer).await;
        let entry = f.catalog.list_provider_services(first.id).await.unwrap()[0].clone();
        let intruder = f.users.resolve_caller(second.id).await.unwrap();

        let err = f
            .catalog
            .update_provider_service(
                &intruder,
                entry.assignment.id,
                ProviderServicePatch {
                    custom_duration: Some(10),
                    ..Default::default()
                },
            )
            .await
            .unwrap_err();
        assert!(matches!(err, DomainError::PermissionDenied(_)));
    }

    #[tokio::test]
    async fn unverified_vet_cannot_edit_assignments() {
        let f = fixture().await;
        f.catalog.create_service(vet_service("Checkup")).await.unwrap();
        let vet = f.provider("v@example.com", ProviderKind::Vet).await;
        let entry = f.catalog.list_provider_services(vet.id).await.unwrap()[0].clone();
        let caller = f.users.resolve_caller(vet.id).await.unwrap();

        let err = f
            .catalog
            .update_provider_service(
                &caller,
                entry.assignment.id,
                ProviderServicePatch {
                    custom_price_cents: Some(1),
                    ..Default::default()
                },
            )
            .await
            .unwrap_err();
        assert!(matches!(err, DomainError::PermissionDenied(_)));
    }

    #[tokio::test]
    async fn deleting_service_removes_assignments() {
        let f = fixture().await;
        let service = f.service("Bath", grooming()).await;
        let groomer = f.provider("g@example.com", ProviderKind::Groomer).await;

        f.catalog.delete_service(service.id).await.unwrap();
        assert!(f
            .catalog
            .list_provider_services(groomer.id)
            .await
            .unwrap()
            .is_empty());
        let err = f.catalog.get_service(service.id).await.unwrap_err();
        assert!(matches!(err, DomainError::NotFound { .. }));
    }

    #[tokio::test]
    async fn booked_service_cannot_be_deleted() {
        let f = fixture().await;
        let service = f.service("Bath", grooming()).await;
        let groomer = f.provider("g@example.com", ProviderKind::Groomer).await;
        let owner = f.owner("o@example.com").await;
        let pet = f.pet(owner.id, "Rex").await;
        let slot = f.slot(groomer.id, 9).await;
        f.book(owner.id, pet.id, slot.id, service.id).await;

        let err = f.catalog.delete_service(service.id).await.unwrap_err();
        assert!(matches!(err, DomainError::Conflict(_)));
        assert_eq!(
            f.catalog.list_provider_services(groomer.id).await.unwrap().len(),
            1
        );
    }
}
