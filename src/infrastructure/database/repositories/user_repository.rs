//! SeaORM implementation of UserRepository

use async_trait::async_trait;
use chrono::Utc;
use log::debug;
use sea_orm::sea_query::Expr;
use sea_orm::{
    ActiveModelTrait, ActiveValue::NotSet, ColumnTrait, ConnectionTrait, EntityTrait, QueryFilter,
    QueryOrder, Set,
};

use super::db_err;
use crate::domain::user::{
    DocumentStatus, DocumentType, NewProvider, NewUser, OwnerProfile, Provider, ProviderDocument,
    User, UserRepository,
};
use crate::domain::{DomainError, DomainResult, ProviderKind};
use crate::infrastructure::database::entities::{owner, provider, provider_document, user};

pub struct SeaOrmUserRepository<'a, C> {
    db: &'a C,
}

impl<'a, C: ConnectionTrait> SeaOrmUserRepository<'a, C> {
    pub fn new(db: &'a C) -> Self {
        Self { db }
    }
}

// ── Conversion helpers ──────────────────────────────────────────

fn user_to_domain(m: user::Model) -> User {
    User {
        id: m.id,
        email: m.email,
        password_hash: m.password_hash,
        first_name: m.first_name,
        surname: m.surname,
        patronymic: m.patronymic,
        role: m.role.into(),
        created_at: m.created_at,
    }
}

fn provider_to_domain(m: provider::Model) -> Provider {
    Provider {
        id: m.id,
        company_name: m.company_name,
        kind: m.kind.into(),
        service_radius_km: m.service_radius_km,
        hourly_rate_cents: m.hourly_rate_cents,
        is_verified: m.is_verified,
    }
}

fn document_to_domain(m: provider_document::Model) -> ProviderDocument {
    ProviderDocument {
        id: m.id,
        provider_id: m.provider_id,
        document_type: m.document_type.into(),
        file_url: m.file_url,
        status: m.status.into(),
    }
}

// ── UserRepository impl ─────────────────────────────────────────

#[async_trait]
impl<'a, C> UserRepository for SeaOrmUserRepository<'a, C>
where
    C: ConnectionTrait + Send + Sync,
{
    async fn insert_user(&self, u: NewUser) -> DomainResult<User> {
        debug!("Inserting user: {}", u.email);

        let model = user::ActiveModel {
            id: NotSet,
            email: Set(u.email),
            password_hash: Set(u.password_hash),
            first_name: Set(u.first_name),
            surname: Set(u.surname),
            patronymic: Set(u.patronymic),
            role: Set(u.role.into()),
            created_at: Set(Utc::now()),
        };
        let saved = model.insert(self.db).await.map_err(db_err)?;
        Ok(user_to_domain(saved))
    }

    async fn insert_owner_profile(&self, user_id: i32, profile: OwnerProfile) -> DomainResult<()> {
        debug!("Inserting owner profile for user {}", user_id);

        let model = owner::ActiveModel {
            id: Set(user_id),
            phone: Set(profile.phone),
            address: Set(profile.address),
        };
        model.insert(self.db).await.map_err(db_err)?;
        Ok(())
    }

    async fn insert_provider(&self, user_id: i32, p: NewProvider) -> DomainResult<Provider> {
        debug!("Inserting {} provider for user {}", p.kind, user_id);

        let model = provider::ActiveModel {
            id: Set(user_id),
            company_name: Set(p.company_name),
            kind: Set(p.kind.into()),
            service_radius_km: Set(p.service_radius_km),
            hourly_rate_cents: Set(p.hourly_rate_cents),
            is_verified: Set(false),
        };
        let saved = model.insert(self.db).await.map_err(db_err)?;
        Ok(provider_to_domain(saved))
    }

    async fn find_by_id(&self, id: i32) -> DomainResult<Option<User>> {
        let model = user::Entity::find_by_id(id)
            .one(self.db)
            .await
            .map_err(db_err)?;
        Ok(model.map(user_to_domain))
    }

    async fn find_by_email(&self, email: &str) -> DomainResult<Option<User>> {
        let model = user::Entity::find()
            .filter(user::Column::Email.eq(email))
            .one(self.db)
            .await
            .map_err(db_err)?;
        Ok(model.map(user_to_domain))
    }

    async fn find_owner_profile(&self, user_id: i32) -> DomainResult<Option<OwnerProfile>> {
        let model = owner::Entity::find_by_id(user_id)
            .one(self.db)
            .await
            .map_err(db_err)?;
        Ok(model.map(|m| OwnerProfile {
            phone: m.phone,
            address: m.address,
        }))
    }

    async fn find_provider(&self, user_id: i32) -> DomainResult<Option<Provider>> {
        let model = provider::Entity::find_by_id(user_id)
            .one(self.db)
            .await
            .map_err(db_err)?;
        Ok(model.map(provider_to_domain))
    }

    async fn find_providers_by_kind(&self, kind: ProviderKind) -> DomainResult<Vec<Provider>> {
        let models = provider::Entity::find()
            .filter(provider::Column::Kind.eq(provider::ProviderKind::from(kind)))
            .order_by_asc(provider::Column::Id)
            .all(self.db)
            .await
            .map_err(db_err)?;
        Ok(models.into_iter().map(provider_to_domain).collect())
    }

    async fn set_provider_verified(&self, user_id: i32, verified: bool) -> DomainResult<()> {
        debug!("Setting provider {} verified={}", user_id, verified);

        let result = provider::Entity::update_many()
            .col_expr(provider::Column::IsVerified, Expr::value(verified))
            .filter(provider::Column::Id.eq(user_id))
            .exec(self.db)
            .await
            .map_err(db_err)?;

        if result.rows_affected == 0 {
            return Err(DomainError::not_found("Provider", user_id));
        }
        Ok(())
    }

    async fn insert_document(
        &self,
        provider_id: i32,
        document_type: DocumentType,
        file_url: &str,
    ) -> DomainResult<ProviderDocument> {
        debug!(
            "Inserting {} document for provider {}",
            document_type.as_str(),
            provider_id
        );

        let model = provider_document::ActiveModel {
            id: NotSet,
            provider_id: Set(provider_id),
            document_type: Set(document_type.into()),
            file_url: Set(file_url.to_string()),
            status: Set(DocumentStatus::Pending.into()),
        };
        let saved = model.insert(self.db).await.map_err(db_err)?;
        Ok(document_to_domain(saved))
    }

    async fn list_documents(&self, provider_id: i32) -> DomainResult<Vec<ProviderDocument>> {
        let models = provider_document::Entity::find()
            .filter(provider_document::Column::ProviderId.eq(provider_id))
            .order_by_asc(provider_document::Column::Id)
            .all(self.db)
            .await
            .map_err(db_err)?;
        Ok(models.into_iter().map(document_to_domain).collect())
    }

    async fn delete_documents(&self, provider_id: i32) -> DomainResult<u64> {
        let result = provider_document::Entity::delete_many()
            .filter(provider_document::Column::ProviderId.eq(provider_id))
            .exec(self.db)
            .await
            .map_err(db_err)?;
        Ok(result.rows_affected)
    }

    async fn delete(&self, user_id: i32) -> DomainResult<()> {
        debug!("Deleting user: {}", user_id);

        owner::Entity::delete_by_id(user_id)
            .exec(self.db)
            .await
            .map_err(db_err)?;
        provider::Entity::delete_by_id(user_id)
            .exec(self.db)
            .await
            .map_err(db_err)?;

        let result = user::Entity::delete_by_id(user_id)
            .exec(self.db)
            .await
            .map_err(db_err)?;
        if result.rows_affected == 0 {
            return Err(DomainError::not_found("User", user_id));
        }
        Ok(())
    }
}
