use std::sync::Arc;

use axum::http::HeaderValue;
use axum_test::TestServer;
use trackp::build_router;
use trackp::config::{Config, StoreBackend};
use trackp::state::AppState;
use trackp::store::MemoryStore;

/// Test configuration
pub fn test_config() -> Config {
    Config {
        store_backend: StoreBackend::Memory,
        db_host: "localhost".to_string(),
        db_port: 5432,
        db_user: "postgres".to_string(),
        db_password: "postgres".to_string(),
        db_name: "trackp_test".to_string(),
        db_max_connections: 5,
        host: "127.0.0.1".to_string(),
        port: 0,
        cors_allowed_origin: HeaderValue::from_static("http://localhost:3000"),
        seed_demo_data: false,
        log_json: false,
    }
}

/// Test application wrapper
pub struct TestApp {
    pub server: TestServer,
    pub state: AppState,
}

impl TestApp {
    /// Create a new test application backed by a fresh in-memory store
    pub async fn new() -> Self {
        let config = test_config();
        let store = Arc::new(MemoryStore::new());
        let state = AppState::with_store(config, store);

        let router = build_router(state.clone());
        let server = TestServer::new(router).expect("Failed to create test server");

        Self { server, state }
    }

    /// Create a test application backed by PostgreSQL.
    ///
    /// Returns `None` unless `TEST_DB_HOST` is set, so the suite still runs
    /// on machines without a database. The schema is bootstrapped on connect.
    #[allow(dead_code)]
    pub async fn postgres() -> Option<Self> {
        dotenvy::dotenv().ok();
        let db_host = std::env::var("TEST_DB_HOST").ok()?;

        let var = |key: &str, default: &str| std::env::var(key).unwrap_or_else(|_| default.to_string());
        let config = Config {
            store_backend: StoreBackend::Postgres,
            db_host,
            db_port: var("TEST_DB_PORT", "5432")
                .parse()
                .expect("TEST_DB_PORT must be a port number"),
            db_user: var("TEST_DB_USER", "postgres"),
            db_password: var("TEST_DB_PASSWORD", "postgres"),
            db_name: var("TEST_DB_NAME", "trackp_test"),
            ..test_config()
        };

        let state = AppState::new(config)
            .await
            .expect("Failed to connect to the test database");

        let router = build_router(state.clone());
        let server = TestServer::new(router).expect("Failed to create test server");

        Some(Self { server, state })
    }
}
