use std::sync::Arc;

use sea_orm::{DatabaseConnection, SqlxPostgresConnector};
use sqlx::postgres::{PgConnectOptions, PgPool, PgPoolOptions, PgSslMode};

use crate::config::{Config, StoreBackend};
use crate::store::{seed_demo_data, MemoryStore, PgStore, Store};

/// Application state shared across all handlers
#[derive(Clone)]
pub struct AppState {
    /// Persistence backend chosen at startup
    pub store: Arc<dyn Store>,
    pub config: Config,
}

impl AppState {
    /// Create a new AppState with the backend selected by the configuration
    pub async fn new(config: Config) -> Result<Self, AppStateError> {
        let store: Arc<dyn Store> = match config.store_backend {
            StoreBackend::Memory => {
                tracing::info!("Using in-memory storage - data will be lost on restart");
                Arc::new(MemoryStore::new())
            }
            StoreBackend::Postgres => {
                let db = connect_postgres(&config).await?;
                Arc::new(PgStore::new(db))
            }
        };

        if config.seed_demo_data {
            seed_demo_data(store.as_ref())
                .await
                .map_err(|e| AppStateError::Seed(e.to_string()))?;
        }

        Ok(Self { store, config })
    }

    /// Create AppState with a custom store (for testing)
    pub fn with_store(config: Config, store: Arc<dyn Store>) -> Self {
        Self { store, config }
    }
}

/// Connect the pool, create the schema if missing, and hand the pool to SeaORM
async fn connect_postgres(config: &Config) -> Result<DatabaseConnection, AppStateError> {
    let options = PgConnectOptions::new()
        .host(&config.db_host)
        .port(config.db_port)
        .username(&config.db_user)
        .password(&config.db_password)
        .database(&config.db_name)
        .ssl_mode(PgSslMode::Disable);

    let pg_pool: PgPool = PgPoolOptions::new()
        .max_connections(config.db_max_connections)
        .connect_with(options)
        .await
        .map_err(|e| AppStateError::Postgres(e.to_string()))?;
    tracing::info!(
        host = %config.db_host,
        port = config.db_port,
        database = %config.db_name,
        "Connected to PostgreSQL database"
    );

    sqlx::migrate!("./migrations")
        .run(&pg_pool)
        .await
        .map_err(|e| AppStateError::Migration(e.to_string()))?;
    tracing::info!("Database tables ready");

    Ok(SqlxPostgresConnector::from_sqlx_postgres_pool(pg_pool))
}

#[derive(Debug, thiserror::Error)]
pub enum AppStateError {
    #[error("PostgreSQL connection error: {0}")]
    Postgres(String),

    #[error("Migration error: {0}")]
    Migration(String),

    #[error("Failed to load demo data: {0}")]
    Seed(String),
}
