//! SeaORM implementation of ProviderServiceRepository

use async_trait::async_trait;
use log::debug;
use sea_orm::{
    ActiveModelTrait, ActiveValue::NotSet, ColumnTrait, ConnectionTrait, EntityTrait, QueryFilter,
    QueryOrder, Set,
};

use super::db_err;
use super::service_repository::load_service;
use crate::domain::catalog::{
    CatalogEntry, NewProviderService, ProviderService, ProviderServiceRepository,
};
use crate::domain::{DomainError, DomainResult};
use crate::infrastructure::database::entities::{provider_service, service};

pub struct SeaOrmProviderServiceRepository<'a, C> {
    db: &'a C,
}

impl<'a, C: ConnectionTrait> SeaOrmProviderServiceRepository<'a, C> {
    pub fn new(db: &'a C) -> Self {
        Self { db }
    }
}

fn model_to_domain(m: provider_service::Model) -> ProviderService {
    ProviderService {
        id: m.id,
        provider_id: m.provider_id,
        service_id: m.service_id,
        custom_price_cents: m.custom_price_cents,
        custom_duration: m.custom_duration,
        extra_info: m.extra_info,
    }
}

#[async_trait]
impl<'a, C> ProviderServiceRepository for SeaOrmProviderServiceRepository<'a, C>
where
    C: ConnectionTrait + Send + Sync,
{
    async fn insert(&self, a: NewProviderService) -> DomainResult<ProviderService> {
        debug!(
            "Assigning service {} to provider {}",
            a.service_id, a.provider_id
        );

        let model = provider_service::ActiveModel {
            id: NotSet,
            provider_id: Set(a.provider_id),
            service_id: Set(a.service_id),
            custom_price_cents: Set(a.custom_price_cents),
            custom_duration: Set(a.custom_duration),
            extra_info: Set(None),
        };
        let saved = model.insert(self.db).await.map_err(db_err)?;
        Ok(model_to_domain(saved))
    }

    async fn find_by_id(&self, id: i32) -> DomainResult<Option<ProviderService>> {
        let model = provider_service::Entity::find_by_id(id)
            .one(self.db)
            .await
            .map_err(db_err)?;
        Ok(model.map(model_to_domain))
    }

    async fn find_by_pair(
        &self,
        provider_id: i32,
        service_id: i32,
    ) -> DomainResult<Option<ProviderService>> {
        let model = provider_service::Entity::find()
            .filter(provider_service::Column::ProviderId.eq(provider_id))
            .filter(provider_service::Column::ServiceId.eq(service_id))
            .one(self.db)
            .await
            .map_err(db_err)?;
        Ok(model.map(model_to_domain))
    }

    async fn list_for_provider(&self, provider_id: i32) -> DomainResult<Vec<CatalogEntry>> {
        let rows = provider_service::Entity::find()
            .filter(provider_service::Column::ProviderId.eq(provider_id))
            .order_by_asc(provider_service::Column::ServiceId)
            .find_also_related(service::Entity)
            .all(self.db)
            .await
            .map_err(db_err)?;

        let mut entries = Vec::with_capacity(rows.len());
        for (assignment, service) in rows {
            let service = service.ok_or_else(|| {
                DomainError::Storage(format!(
                    "Provider service {} references a missing service",
                    assignment.id
                ))
            })?;
            entries.push(CatalogEntry {
                assignment: model_to_domain(assignment),
                service: load_service(self.db, service).await?,
            });
        }
        Ok(entries)
    }

    async fn update(&self, a: ProviderService) -> DomainResult<()> {
        debug!("Updating provider service: {}", a.id);

        let existing = provider_service::Entity::find_by_id(a.id)
            .one(self.db)
            .await
            .map_err(db_err)?;

        if existing.is_none() {
            return Err(DomainError::not_found("ProviderService", a.id));
        }

        let model = provider_service::ActiveModel {
            id: Set(a.id),
            provider_id: Set(a.provider_id),
            service_id: Set(a.service_id),
            custom_price_cents: Set(a.custom_price_cents),
            custom_duration: Set(a.custom_duration),
            extra_info: Set(a.extra_info),
        };
        model.update(self.db).await.map_err(db_err)?;
        Ok(())
    }

    async fn delete_for_provider(&self, provider_id: i32) -> DomainResult<u64> {
        let result = provider_service::Entity::delete_many()
            .filter(provider_service::Column::ProviderId.eq(provider_id))
            .exec(self.db)
            .await
            .map_err(db_err)?;
        Ok(result.rows_affected)
    }

    async fn delete_for_service(&self, service_id: i32) -> DomainResult<u64> {
        let result = provider_service::Entity::delete_many()
            .filter(provider_service::Column::ServiceId.eq(service_id))
            .exec(self.db)
            .await
            .map_err(db_err)?;
        Ok(result.rows_affected)
    }
}
