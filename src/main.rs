//! PetCare marketplace service
//!
//! REST API connecting pet owners with vets, groomers and sitters.
//! Reads configuration from a TOML file (~/.config/petcare/config.toml).

use std::time::Duration;

use sea_orm_migration::MigratorTrait;
use tracing::{error, info, warn};
use tracing_subscriber::EnvFilter;

use petcare::application::{AccountInput, UserService};
use petcare::auth::JwtConfig;
use petcare::config::{AppConfig, LogFormat};
use petcare::infrastructure::database::migrator::Migrator;
use petcare::{config_path_from_env, create_api_router, init_database, DatabaseConfig, DatabaseStorage};

fn init_logging(cfg: &AppConfig) {
    let filter =
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(&cfg.logging.level));
    match cfg.logging.format {
        LogFormat::Json => tracing_subscriber::fmt()
            .json()
            .with_env_filter(filter)
            .init(),
        LogFormat::Pretty => tracing_subscriber::fmt().with_env_filter(filter).init(),
    }
}

#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    // ── Load configuration ─────────────────────────────────────
    let config_path = config_path_from_env();
    let app_cfg = match AppConfig::load(&config_path) {
        Ok(cfg) => {
            init_logging(&cfg);
            info!("Configuration loaded from {}", config_path.display());
            cfg
        }
        Err(e) => {
            let cfg = AppConfig::default();
            init_logging(&cfg);
            error!("Failed to load config: {}. Using defaults.", e);
            cfg
        }
    };

    info!("Starting PetCare service...");

    let jwt_config = JwtConfig {
        secret: app_cfg.security.jwt_secret.clone(),
        expiration_hours: app_cfg.security.jwt_expiration_hours,
        issuer: "petcare".to_string(),
    };
    info!(
        "JWT configured with {}h token expiration",
        jwt_config.expiration_hours
    );

    // ── Database ───────────────────────────────────────────────
    let db_config = DatabaseConfig::from(&app_cfg.database);
    let db = match init_database(&db_config).await {
        Ok(db) => db,
        Err(e) => {
            error!("Failed to connect to database: {}", e);
            return Err(e.into());
        }
    };

    info!("Running database migrations...");
    if let Err(e) = Migrator::up(&db, None).await {
        error!("Failed to run migrations: {}", e);
        return Err(e.into());
    }
    info!("Migrations completed");

    let storage = DatabaseStorage::new(db.clone());
    let users = UserService::new(
        storage.clone(),
        jwt_config.clone(),
        app_cfg.security.bcrypt_cost,
    );

    // Back-office account for catalog management and provider verification
    let admin = AccountInput {
        email: app_cfg.admin.email.clone(),
        password: app_cfg.admin.password.clone(),
        first_name: "Admin".to_string(),
        surname: "PetCare".to_string(),
        patronymic: None,
    };
    match users.ensure_admin(admin).await {
        Ok(true) => {
            info!("Default admin created: {}", app_cfg.admin.email);
            warn!("Please change the admin password immediately!");
        }
        Ok(false) => {}
        Err(e) => error!("Failed to create admin user: {}", e),
    }

    let api_router = create_api_router(storage, users, jwt_config);

    // ── REST API server with graceful shutdown ─────────────────
    let api_addr = app_cfg.server.address();
    let listener = tokio::net::TcpListener::bind(&api_addr).await?;
    info!("REST API server listening on http://{}", api_addr);
    info!("Swagger UI available at http://{}/docs/", api_addr);

    let (stop_tx, stop_rx) = tokio::sync::oneshot::channel::<()>();
    let server = axum::serve(listener, api_router).with_graceful_shutdown(async move {
        let _ = stop_rx.await;
        info!("REST API server received shutdown signal");
    });
    let mut api_task = tokio::spawn(async move { server.await });

    tokio::select! {
        result = &mut api_task => {
            match result {
                Ok(Ok(())) => info!("REST API server stopped"),
                Ok(Err(e)) => error!("REST API server error: {}", e),
                Err(e) => error!("REST API server task panicked: {}", e),
            }
        }
        _ = tokio::signal::ctrl_c() => {
            info!("Shutdown requested, draining in-flight requests...");
            let _ = stop_tx.send(());
            let grace = Duration::from_secs(app_cfg.server.shutdown_timeout);
            if tokio::time::timeout(grace, &mut api_task).await.is_err() {
                warn!("In-flight requests still running after {:?}, aborting", grace);
                api_task.abort();
            }
        }
    }

    if let Err(e) = db.close().await {
        warn!("Error closing database connection: {}", e);
    } else {
        info!("Database connection closed");
    }

    info!("PetCare service shutdown complete");
    Ok(())
}
