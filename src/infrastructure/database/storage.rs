//! Database storage: connection pool and per-operation units of work

use log::debug;
use sea_orm::{DatabaseConnection, DatabaseTransaction, TransactionTrait};

use super::repositories::{db_err, SeaOrmRepositoryProvider};
use crate::domain::DomainResult;

/// Database storage implementation
///
/// Cheap to clone; the connection pool is shared.
#[derive(Clone)]
pub struct DatabaseStorage {
    db: DatabaseConnection,
}

impl DatabaseStorage {
    pub fn new(db: DatabaseConnection) -> Self {
        Self { db }
    }

    /// Get database connection reference
    pub fn connection(&self) -> &DatabaseConnection {
        &self.db
    }

    /// Repositories on the pool itself, for read-only queries.
    pub fn repos(&self) -> SeaOrmRepositoryProvider<'_, DatabaseConnection> {
        SeaOrmRepositoryProvider::new(&self.db)
    }

    /// Open a unit of work. Every repository used for one operation must
    /// come from the same unit of work.
    pub async fn begin(&self) -> DomainResult<UnitOfWork> {
        let txn = self.db.begin().await.map_err(db_err)?;
        Ok(UnitOfWork { txn })
    }
}

/// One database transaction shared by all repositories of an operation.
///
/// Dropping it without calling [`UnitOfWork::commit`] rolls everything back.
pub struct UnitOfWork {
    txn: DatabaseTransaction,
}

impl UnitOfWork {
    pub fn repos(&self) -> SeaOrmRepositoryProvider<'_, DatabaseTransaction> {
        SeaOrmRepositoryProvider::new(&self.txn)
    }

    pub async fn commit(self) -> DomainResult<()> {
        self.txn.commit().await.map_err(db_err)?;
        debug!("Unit of work committed");
        Ok(())
    }
}

#[cfg(test)]
pub(crate) mod testing {
    use sea_orm::{ConnectOptions, Database};
    use sea_orm_migration::MigratorTrait;
    use tempfile::TempDir;

    use super::DatabaseStorage;
    use crate::infrastructure::database::migrator::Migrator;
    use crate::infrastructure::database::{init_database, DatabaseConfig};

    /// Fresh in-memory SQLite database with every migration applied.
    ///
    /// The pool holds exactly one connection so the in-memory database
    /// survives between units of work and concurrent transactions queue
    /// up on it.
    pub async fn in_memory_storage() -> DatabaseStorage {
        let mut opts = ConnectOptions::new("sqlite::memory:");
        opts.max_connections(1)
            .min_connections(1)
            .sqlx_logging(false);

        let db = Database::connect(opts).await.unwrap();
        Migrator::up(&db, None).await.unwrap();
        DatabaseStorage::new(db)
    }

    /// File-backed SQLite with the production pool settings, so several
    /// connections write concurrently. Keep the directory alive for the
    /// duration of the test.
    pub async fn file_storage() -> (TempDir, DatabaseStorage) {
        let dir = TempDir::new().unwrap();
        let path = dir.path().join("petcare.db");
        let config = DatabaseConfig::sqlite(&path.to_string_lossy());
        assert!(config.max_connections > 1);

        let db = init_database(&config).await.unwrap();
        Migrator::up(&db, None).await.unwrap();
        (dir, DatabaseStorage::new(db))
    }
}
