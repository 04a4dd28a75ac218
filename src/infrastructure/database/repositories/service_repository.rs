//! SeaORM implementation of ServiceRepository
//!
//! A service is stored as a base row plus one row in the attribute table of
//! its kind; both are written and read together.

use async_trait::async_trait;
use log::debug;
use sea_orm::{
    ActiveModelTrait, ActiveValue::NotSet, ColumnTrait, ConnectionTrait, EntityTrait, QueryFilter,
    QueryOrder, Set,
};

use super::db_err;
use crate::domain::catalog::{NewService, Service, ServiceDetails, ServiceRepository};
use crate::domain::{DomainError, DomainResult, ProviderKind};
use crate::infrastructure::database::entities::{
    grooming_service, provider, service, sitting_service, veterinary_service,
};

pub struct SeaOrmServiceRepository<'a, C> {
    db: &'a C,
}

impl<'a, C: ConnectionTrait> SeaOrmServiceRepository<'a, C> {
    pub fn new(db: &'a C) -> Self {
        Self { db }
    }
}

// ── Conversion helpers ──────────────────────────────────────────

fn missing_details(id: i32) -> DomainError {
    DomainError::Storage(format!("Service {} has no attribute row for its kind", id))
}

/// Resolve the kind-specific attributes of a base service row.
pub(super) async fn load_service<C: ConnectionTrait>(
    db: &C,
    m: service::Model,
) -> DomainResult<Service> {
    let details = match m.kind {
        provider::ProviderKind::Vet => {
            let row = veterinary_service::Entity::find_by_id(m.id)
                .one(db)
                .await
                .map_err(db_err)?
                .ok_or_else(|| missing_details(m.id))?;
            ServiceDetails::Veterinary {
                animal_type: row.animal_type,
                emergency_available: row.emergency_available,
            }
        }
        provider::ProviderKind::Groomer => {
            let row = grooming_service::Entity::find_by_id(m.id)
                .one(db)
                .await
                .map_err(db_err)?
                .ok_or_else(|| missing_details(m.id))?;
            ServiceDetails::Grooming {
                tools_required: row.tools_required,
                coat_type: row.coat_type,
            }
        }
        provider::ProviderKind::Sitter => {
            let row = sitting_service::Entity::find_by_id(m.id)
                .one(db)
                .await
                .map_err(db_err)?
                .ok_or_else(|| missing_details(m.id))?;
            ServiceDetails::Sitting {
                max_pets: row.max_pets,
                overnight_available: row.overnight_available,
            }
        }
    };

    Ok(Service {
        id: m.id,
        name: m.name,
        base_price_cents: m.base_price_cents,
        duration_min: m.duration_min,
        details,
    })
}

pub(super) async fn load_service_by_id<C: ConnectionTrait>(
    db: &C,
    id: i32,
) -> DomainResult<Option<Service>> {
    match service::Entity::find_by_id(id)
        .one(db)
        .await
        .map_err(db_err)?
    {
        Some(m) => Ok(Some(load_service(db, m).await?)),
        None => Ok(None),
    }
}

// ── ServiceRepository impl ──────────────────────────────────────

#[async_trait]
impl<'a, C> ServiceRepository for SeaOrmServiceRepository<'a, C>
where
    C: ConnectionTrait + Send + Sync,
{
    async fn insert(&self, s: NewService) -> DomainResult<Service> {
        debug!("Inserting {} service: {}", s.details.kind(), s.name);

        let base = service::ActiveModel {
            id: NotSet,
            name: Set(s.name.clone()),
            base_price_cents: Set(s.base_price_cents),
            duration_min: Set(s.duration_min),
            kind: Set(s.details.kind().into()),
        };
        let saved = base.insert(self.db).await.map_err(db_err)?;

        match &s.details {
            ServiceDetails::Veterinary {
                animal_type,
                emergency_available,
            } => {
                veterinary_service::ActiveModel {
                    id: Set(saved.id),
                    animal_type: Set(animal_type.clone()),
                    emergency_available: Set(*emergency_available),
                }
                .insert(self.db)
                .await
                .map_err(db_err)?;
            }
            ServiceDetails::Grooming {
                tools_required,
                coat_type,
            } => {
                grooming_service::ActiveModel {
                    id: Set(saved.id),
                    tools_required: Set(tools_required.clone()),
                    coat_type: Set(coat_type.clone()),
                }
                .insert(self.db)
                .await
                .map_err(db_err)?;
            }
            ServiceDetails::Sitting {
                max_pets,
                overnight_available,
            } => {
                sitting_service::ActiveModel {
                    id: Set(saved.id),
                    max_pets: Set(*max_pets),
                    overnight_available: Set(*overnight_available),
                }
                .insert(self.db)
                .await
                .map_err(db_err)?;
            }
        }

        Ok(Service {
            id: saved.id,
            name: saved.name,
            base_price_cents: saved.base_price_cents,
            duration_min: saved.duration_min,
            details: s.details,
        })
    }

    async fn find_by_id(&self, id: i32) -> DomainResult<Option<Service>> {
        load_service_by_id(self.db, id).await
    }

    async fn find_by_kind(&self, kind: ProviderKind) -> DomainResult<Vec<Service>> {
        let models = service::Entity::find()
            .filter(service::Column::Kind.eq(provider::ProviderKind::from(kind)))
            .order_by_asc(service::Column::Id)
            .all(self.db)
            .await
            .map_err(db_err)?;

        let mut services = Vec::with_capacity(models.len());
        for m in models {
            services.push(load_service(self.db, m).await?);
        }
        Ok(services)
    }

    async fn find_all(&self) -> DomainResult<Vec<Service>> {
        let models = service::Entity::find()
            .order_by_asc(service::Column::Id)
            .all(self.db)
            .await
            .map_err(db_err)?;

        let mut services = Vec::with_capacity(models.len());
        for m in models {
            services.push(load_service(self.db, m).await?);
        }
        Ok(services)
    }

    async fn delete(&self, id: i32) -> DomainResult<()> {
        debug!("Deleting service: {}", id);

        veterinary_service::Entity::delete_by_id(id)
            .exec(self.db)
            .await
            .map_err(db_err)?;
        grooming_service::Entity::delete_by_id(id)
            .exec(self.db)
            .await
            .map_err(db_err)?;
        sitting_service::Entity::delete_by_id(id)
            .exec(self.db)
            .await
            .map_err(db_err)?;

        let result = service::Entity::delete_by_id(id)
            .exec(self.db)
            .await
            .map_err(db_err)?;
        if result.rows_affected == 0 {
            return Err(DomainError::not_found("Service", id));
        }
        Ok(())
    }
}
