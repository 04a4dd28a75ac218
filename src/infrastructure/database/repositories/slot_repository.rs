//! SeaORM implementation of SlotRepository

use async_trait::async_trait;
use log::debug;
use sea_orm::{
    ActiveModelTrait, ActiveValue::NotSet, ColumnTrait, ConnectionTrait, EntityTrait, QueryFilter,
    QueryOrder, Set,
};

use super::db_err;
use crate::domain::scheduling::{AvailableSlot, NewSlot, SlotRepository};
use crate::domain::{DomainError, DomainResult};
use crate::infrastructure::database::entities::available_slot;

pub struct SeaOrmSlotRepository<'a, C> {
    db: &'a C,
}

impl<'a, C: ConnectionTrait> SeaOrmSlotRepository<'a, C> {
    pub fn new(db: &'a C) -> Self {
        Self { db }
    }
}

pub(super) fn model_to_domain(m: available_slot::Model) -> AvailableSlot {
    AvailableSlot {
        id: m.id,
        provider_id: m.provider_id,
        date: m.date,
        start_time: m.start_time,
        end_time: m.end_time,
        is_available: m.is_available,
    }
}

#[async_trait]
impl<'a, C> SlotRepository for SeaOrmSlotRepository<'a, C>
where
    C: ConnectionTrait + Send + Sync,
{
    async fn insert(&self, s: NewSlot) -> DomainResult<AvailableSlot> {
        debug!(
            "Inserting slot for provider {} on {} at {}",
            s.provider_id, s.date, s.start_time
        );

        let model = available_slot::ActiveModel {
            id: NotSet,
            provider_id: Set(s.provider_id),
            date: Set(s.date),
            start_time: Set(s.start_time),
            end_time: Set(s.end_time),
            is_available: Set(s.is_available),
        };
        let saved = model.insert(self.db).await.map_err(db_err)?;
        Ok(model_to_domain(saved))
    }

    async fn find_by_id(&self, id: i32) -> DomainResult<Option<AvailableSlot>> {
        let model = available_slot::Entity::find_by_id(id)
            .one(self.db)
            .await
            .map_err(db_err)?;
        Ok(model.map(model_to_domain))
    }

    async fn list_for_provider(&self, provider_id: i32) -> DomainResult<Vec<AvailableSlot>> {
        let models = available_slot::Entity::find()
            .filter(available_slot::Column::ProviderId.eq(provider_id))
            .order_by_asc(available_slot::Column::Date)
            .order_by_asc(available_slot::Column::StartTime)
            .all(self.db)
            .await
            .map_err(db_err)?;
        Ok(models.into_iter().map(model_to_domain).collect())
    }

    async fn delete(&self, id: i32) -> DomainResult<()> {
        debug!("Deleting slot: {}", id);

        let result = available_slot::Entity::delete_by_id(id)
            .exec(self.db)
            .await
            .map_err(db_err)?;
        if result.rows_affected == 0 {
            return Err(DomainError::not_found("AvailableSlot", id));
        }
        Ok(())
    }

    async fn delete_for_provider(&self, provider_id: i32) -> DomainResult<u64> {
        let result = available_slot::Entity::delete_many()
            .filter(available_slot::Column::ProviderId.eq(provider_id))
            .exec(self.db)
            .await
            .map_err(db_err)?;
        Ok(result.rows_affected)
    }
}
