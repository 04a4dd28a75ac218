//! SeaORM implementation of BookingRepository

use async_trait::async_trait;
use log::debug;
use sea_orm::sea_query::Expr;
use sea_orm::{
    ActiveModelTrait, ActiveValue::NotSet, ColumnTrait, ConnectionTrait, EntityTrait, JoinType,
    QueryFilter, QueryOrder, QuerySelect, RelationTrait, Set,
};

use super::db_err;
use super::pet_repository::pet_to_domain;
use super::service_repository::load_service_by_id;
use super::slot_repository;
use crate::domain::scheduling::{
    Booking, BookingDetails, BookingRepository, BookingStatus, NewBooking,
};
use crate::domain::{DomainError, DomainResult};
use crate::infrastructure::database::entities::{available_slot, booking, pet};

pub struct SeaOrmBookingRepository<'a, C> {
    db: &'a C,
}

impl<'a, C: ConnectionTrait> SeaOrmBookingRepository<'a, C> {
    pub fn new(db: &'a C) -> Self {
        Self { db }
    }
}

// ── Conversion helpers ──────────────────────────────────────────

fn model_to_domain(m: booking::Model) -> Booking {
    Booking {
        id: m.id,
        pet_id: m.pet_id,
        slot_id: m.slot_id,
        service_id: m.service_id,
        status: m.status.into(),
        notes: m.notes,
    }
}

/// Resolve pet, slot and service of a booking row.
async fn load_details<C: ConnectionTrait>(db: &C, m: booking::Model) -> DomainResult<BookingDetails> {
    let pet = pet::Entity::find_by_id(m.pet_id)
        .one(db)
        .await
        .map_err(db_err)?
        .map(pet_to_domain)
        .ok_or_else(|| {
            DomainError::Storage(format!("Booking {} references a missing pet", m.id))
        })?;

    let slot = match m.slot_id {
        Some(slot_id) => available_slot::Entity::find_by_id(slot_id)
            .one(db)
            .await
            .map_err(db_err)?
            .map(slot_repository::model_to_domain),
        None => None,
    };

    let service = load_service_by_id(db, m.service_id)
        .await?
        .ok_or_else(|| {
            DomainError::Storage(format!("Booking {} references a missing service", m.id))
        })?;

    Ok(BookingDetails {
        booking: model_to_domain(m),
        pet,
        slot,
        service,
    })
}

async fn load_all_details<C: ConnectionTrait>(
    db: &C,
    models: Vec<booking::Model>,
) -> DomainResult<Vec<BookingDetails>> {
    let mut details = Vec::with_capacity(models.len());
    for m in models {
        details.push(load_details(db, m).await?);
    }
    Ok(details)
}

// ── BookingRepository impl ──────────────────────────────────────

#[async_trait]
impl<'a, C> BookingRepository for SeaOrmBookingRepository<'a, C>
where
    C: ConnectionTrait + Send + Sync,
{
    async fn insert(&self, b: NewBooking) -> DomainResult<Booking> {
        debug!(
            "Inserting booking: pet={} slot={} service={}",
            b.pet_id, b.slot_id, b.service_id
        );

        let model = booking::ActiveModel {
            id: NotSet,
            pet_id: Set(b.pet_id),
            slot_id: Set(Some(b.slot_id)),
            service_id: Set(b.service_id),
            status: Set(BookingStatus::Pending.into()),
            notes: Set(b.notes),
        };
        let saved = model.insert(self.db).await.map_err(db_err)?;
        Ok(model_to_domain(saved))
    }

    async fn find_by_id(&self, id: i32) -> DomainResult<Option<Booking>> {
        let model = booking::Entity::find_by_id(id)
            .one(self.db)
            .await
            .map_err(db_err)?;
        Ok(model.map(model_to_domain))
    }

    async fn find_details(&self, id: i32) -> DomainResult<Option<BookingDetails>> {
        let model = booking::Entity::find_by_id(id)
            .one(self.db)
            .await
            .map_err(db_err)?;
        match model {
            Some(m) => Ok(Some(load_details(self.db, m).await?)),
            None => Ok(None),
        }
    }

    async fn list_for_provider(&self, provider_id: i32) -> DomainResult<Vec<BookingDetails>> {
        let models = booking::Entity::find()
            .join(JoinType::InnerJoin, booking::Relation::Slot.def())
            .filter(available_slot::Column::ProviderId.eq(provider_id))
            .order_by_asc(booking::Column::Id)
            .all(self.db)
            .await
            .map_err(db_err)?;
        load_all_details(self.db, models).await
    }

    async fn list_for_owner(&self, owner_id: i32) -> DomainResult<Vec<BookingDetails>> {
        let models = booking::Entity::find()
            .join(JoinType::InnerJoin, booking::Relation::Pet.def())
            .filter(pet::Column::OwnerId.eq(owner_id))
            .order_by_asc(booking::Column::Id)
            .all(self.db)
            .await
            .map_err(db_err)?;
        load_all_details(self.db, models).await
    }

    async fn list_for_pet(&self, pet_id: i32) -> DomainResult<Vec<Booking>> {
        let models = booking::Entity::find()
            .filter(booking::Column::PetId.eq(pet_id))
            .order_by_asc(booking::Column::Id)
            .all(self.db)
            .await
            .map_err(db_err)?;
        Ok(models.into_iter().map(model_to_domain).collect())
    }

    async fn update_status(&self, id: i32, status: BookingStatus) -> DomainResult<()> {
        debug!("Updating booking {} status to {}", id, status);

        let result = booking::Entity::update_many()
            .col_expr(
                booking::Column::Status,
                Expr::value(booking::BookingStatus::from(status)),
            )
            .filter(booking::Column::Id.eq(id))
            .exec(self.db)
            .await
            .map_err(db_err)?;
        if result.rows_affected == 0 {
            return Err(DomainError::not_found("Booking", id));
        }
        Ok(())
    }

    async fn delete(&self, id: i32) -> DomainResult<()> {
        debug!("Deleting booking: {}", id);

        let result = booking::Entity::delete_by_id(id)
            .exec(self.db)
            .await
            .map_err(db_err)?;
        if result.rows_affected == 0 {
            return Err(DomainError::not_found("Booking", id));
        }
        Ok(())
    }

    async fn detach_slot(&self, slot_id: i32) -> DomainResult<u64> {
        let result = booking::Entity::update_many()
            .col_expr(booking::Column::SlotId, Expr::value(Option::<i32>::None))
            .filter(booking::Column::SlotId.eq(slot_id))
            .exec(self.db)
            .await
            .map_err(db_err)?;
        Ok(result.rows_affected)
    }
}
