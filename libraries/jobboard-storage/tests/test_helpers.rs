//! Test helpers and fixtures for storage integration tests
//!
//! These helpers create test databases using real SQLite files (not
//! in-memory) to match production behavior and properly test migrations
//! and constraints.

use jobboard_core::User;
use sqlx::SqlitePool;
use tempfile::TempDir;

/// Test database wrapper that cleans up on drop
pub struct TestDb {
    pub pool: SqlitePool,
    _temp_dir: TempDir,
}

impl TestDb {
    /// Create a new test database with migrations applied
    pub async fn new() -> Self {
        let temp_dir = tempfile::tempdir().expect("Failed to create temp dir");
        let db_path = temp_dir.path().join("test.db");
        let db_url = format!("sqlite://{}", db_path.display());

        let pool = jobboard_storage::create_pool(&db_url)
            .await
            .expect("Failed to create pool");

        jobboard_storage::run_migrations(&pool)
            .await
            .expect("Failed to run migrations");

        Self {
            pool,
            _temp_dir: temp_dir,
        }
    }

    /// Get the pool reference
    pub fn pool(&self) -> &SqlitePool {
        &self.pool
    }
}

/// Test fixture: a user record as it arrives from an HTTP body
pub fn unsaved_user(username: &str, email: &str) -> User {
    User {
        id: None,
        username: username.to_string(),
        email: email.to_string(),
        is_admin: false,
        created_at: None,
    }
}

/// Test fixture: create and persist a user, returning its id
pub async fn create_test_user(pool: &SqlitePool, username: &str, email: &str) -> i64 {
    let saved = jobboard_storage::users::save(pool, unsaved_user(username, email))
        .await
        .expect("Failed to create test user");

    saved.id.expect("Saved user should have an id")
}
