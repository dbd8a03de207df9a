/// Common test utilities and fixtures
use axum::Router;
use jobboard_server::{
    services::{AuthService, UserService},
    state::AppState,
};
use sqlx::SqlitePool;
use std::sync::Arc;
use tempfile::TempDir;

/// Test database backed by a real SQLite file, removed on drop
pub struct TestDb {
    pub pool: SqlitePool,
    _temp_dir: TempDir,
}

/// Create a test database with migrations applied
pub async fn create_test_db() -> TestDb {
    let temp_dir = tempfile::tempdir().expect("Failed to create temp dir");
    let db_path = temp_dir.path().join("test.db");
    let db_url = format!("sqlite://{}", db_path.display());

    let pool = jobboard_storage::create_pool(&db_url)
        .await
        .expect("Failed to create pool");

    jobboard_storage::run_migrations(&pool)
        .await
        .expect("Failed to run migrations");

    TestDb {
        pool,
        _temp_dir: temp_dir,
    }
}

/// Build the application router over a fresh test database
pub async fn create_test_app() -> (Router, Arc<AuthService>, TestDb) {
    let test_db = create_test_db().await;

    let auth_service = Arc::new(AuthService::new(
        "test-secret-key".to_string(),
        1, // 1 hour
    ));
    let user_service = Arc::new(UserService::new(test_db.pool.clone()));

    let app_state = AppState::new(
        test_db.pool.clone(),
        user_service,
        Arc::clone(&auth_service),
    );

    let app = jobboard_server::create_router(app_state);

    (app, auth_service, test_db)
}

/// Test user credentials
pub mod fixtures {
    pub const TEST_USERNAME: &str = "testuser";
    pub const TEST_EMAIL: &str = "testuser@example.com";
    pub const TEST_PASSWORD: &str = "TestPassword123!";
}
