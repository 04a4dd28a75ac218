//! Repository traits for the domain layer
//!
//! Contains:
//! - `RepositoryProvider`: unified access to all per-aggregate repositories
//! - `DomainResult`: standard result type for domain operations

use super::catalog::{ProviderServiceRepository, ServiceRepository};
use super::pet::PetRepository;
use super::scheduling::{BookingRepository, SlotRepository};
use super::user::UserRepository;

pub use crate::support::errors::DomainResult;

// ── RepositoryProvider ──────────────────────────────────────────

/// Provides access to all domain repositories bound to one unit of work.
///
/// Every repository handed out by one provider shares the same transaction
/// handle, so work done through it commits or rolls back as a whole:
///
/// ```ignore
/// let uow = storage.begin().await?;
/// let repos = uow.repos();
/// let provider = repos.users().insert_provider(user.id, new_provider).await?;
/// synchronizer::on_provider_registered(&repos, &provider).await?;
/// uow.commit().await?;
/// ```
pub trait RepositoryProvider: Send + Sync {
    fn users(&self) -> &dyn UserRepository;
    fn services(&self) -> &dyn ServiceRepository;
    fn provider_services(&self) -> &dyn ProviderServiceRepository;
    fn pets(&self) -> &dyn PetRepository;
    fn slots(&self) -> &dyn SlotRepository;
    fn bookings(&self) -> &dyn BookingRepository;
}
