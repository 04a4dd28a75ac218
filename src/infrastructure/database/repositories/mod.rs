//! Database repository implementations
//!
//! Per-aggregate SeaORM repositories + unified RepositoryProvider. Every
//! repository borrows the connection it runs on, which is normally the
//! transaction of the current unit of work.

pub mod booking_repository;
pub mod pet_repository;
pub mod provider_service_repository;
pub mod repository_provider;
pub mod service_repository;
pub mod slot_repository;
pub mod user_repository;

pub use repository_provider::SeaOrmRepositoryProvider;

use sea_orm::{DbErr, SqlErr};

use crate::domain::DomainError;

/// Translate a database error at the repository boundary.
///
/// Constraint violations become `Conflict`; everything else is `Storage`.
pub(crate) fn db_err(e: DbErr) -> DomainError {
    match e.sql_err() {
        Some(SqlErr::UniqueConstraintViolation(msg)) => DomainError::Conflict(msg),
        Some(SqlErr::ForeignKeyConstraintViolation(msg)) => DomainError::Conflict(msg),
        _ => DomainError::Storage(e.to_string()),
    }
}
