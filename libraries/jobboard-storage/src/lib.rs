//! Jobboard Storage
//!
//! `SQLite` persistence layer for the jobboard server.
//!
//! Each feature owns its own queries (vertical slicing): [`users`] covers
//! accounts and credentials, [`profiles`] covers profile documents.
//!
//! # Example
//!
//! ```rust,no_run
//! use jobboard_core::User;
//!
//! # async fn example() -> Result<(), Box<dyn std::error::Error>> {
//! let pool = jobboard_storage::create_pool("sqlite://jobboard.db").await?;
//! jobboard_storage::run_migrations(&pool).await?;
//!
//! let user = User {
//!     id: None,
//!     username: "alice".to_string(),
//!     email: "alice@example.com".to_string(),
//!     is_admin: false,
//!     created_at: None,
//! };
//! let saved = jobboard_storage::users::save(&pool, user).await?;
//! assert!(saved.id.is_some());
//! # Ok(())
//! # }
//! ```

mod error;

// Vertical slices
pub mod profiles;
pub mod users;

pub use error::StorageError;

use sqlx::migrate::Migrator;
use sqlx::sqlite::SqlitePool;

// Embed migrations into binary
static MIGRATOR: Migrator = sqlx::migrate!("./migrations");

/// Run database migrations
///
/// This should be called once when the application starts to ensure
/// the database schema is up to date.
///
/// # Errors
///
/// Returns an error if migrations fail to run
pub async fn run_migrations(pool: &SqlitePool) -> Result<(), sqlx::migrate::MigrateError> {
    MIGRATOR.run(pool).await
}

/// Create a new `SQLite` pool
///
/// # Arguments
///
/// * `database_url` - `SQLite` connection string (e.g., `<sqlite://jobboard.db>`)
///
/// # Errors
///
/// Returns an error if the connection fails
pub async fn create_pool(database_url: &str) -> Result<SqlitePool, sqlx::Error> {
    use sqlx::sqlite::{SqliteConnectOptions, SqliteJournalMode, SqlitePoolOptions};
    use std::str::FromStr;

    // Parse the URL into options so we can configure SQLite behavior
    let options = SqliteConnectOptions::from_str(database_url)?
        .create_if_missing(true)
        .journal_mode(SqliteJournalMode::Wal)
        .busy_timeout(std::time::Duration::from_secs(30));

    let pool = SqlitePoolOptions::new()
        .max_connections(5)
        .connect_with(options)
        .await?;

    Ok(pool)
}
