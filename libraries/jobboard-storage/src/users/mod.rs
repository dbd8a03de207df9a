//! User account and credential queries

use crate::StorageError;
use jobboard_core::User;
use sqlx::sqlite::SqliteRow;
use sqlx::{Row, SqlitePool};

type Result<T> = std::result::Result<T, StorageError>;

fn row_to_user(row: &SqliteRow) -> User {
    User {
        id: Some(row.get::<i64, _>("id")),
        username: row.get("username"),
        email: row.get("email"),
        is_admin: row.get::<bool, _>("is_admin"),
        created_at: chrono::DateTime::from_timestamp(row.get::<i64, _>("created_at"), 0)
            .map(|dt| dt.to_rfc3339()),
    }
}

/// Persist a user record and return the stored form
///
/// A record without an id is inserted and receives one from the database
/// along with its creation timestamp; a record with an id updates that row.
/// The returned record is read back from the database.
pub async fn save(pool: &SqlitePool, user: User) -> Result<User> {
    let id = match user.id {
        None => {
            let created_at = chrono::Utc::now().timestamp();

            let result = sqlx::query(
                "INSERT INTO users (username, email, is_admin, created_at) VALUES (?, ?, ?, ?)",
            )
            .bind(&user.username)
            .bind(&user.email)
            .bind(user.is_admin)
            .bind(created_at)
            .execute(pool)
            .await?;

            result.last_insert_rowid()
        }
        Some(id) => {
            let result =
                sqlx::query("UPDATE users SET username = ?, email = ?, is_admin = ? WHERE id = ?")
                    .bind(&user.username)
                    .bind(&user.email)
                    .bind(user.is_admin)
                    .bind(id)
                    .execute(pool)
                    .await?;

            if result.rows_affected() == 0 {
                return Err(StorageError::not_found("User", id.to_string()));
            }

            id
        }
    };

    find_by_id(pool, id)
        .await?
        .ok_or_else(|| StorageError::not_found("User", id.to_string()))
}

/// Look up a user by id
pub async fn find_by_id(pool: &SqlitePool, id: i64) -> Result<Option<User>> {
    let row = sqlx::query("SELECT id, username, email, is_admin, created_at FROM users WHERE id = ?")
        .bind(id)
        .fetch_optional(pool)
        .await?;

    Ok(row.as_ref().map(row_to_user))
}

/// Look up a user by email
pub async fn find_by_email(pool: &SqlitePool, email: &str) -> Result<Option<User>> {
    let row =
        sqlx::query("SELECT id, username, email, is_admin, created_at FROM users WHERE email = ?")
            .bind(email)
            .fetch_optional(pool)
            .await?;

    Ok(row.as_ref().map(row_to_user))
}

/// Get all users
pub async fn get_all(pool: &SqlitePool) -> Result<Vec<User>> {
    let rows =
        sqlx::query("SELECT id, username, email, is_admin, created_at FROM users ORDER BY username")
            .fetch_all(pool)
            .await?;

    Ok(rows.iter().map(row_to_user).collect())
}

/// Delete a user
pub async fn delete(pool: &SqlitePool, id: i64) -> Result<()> {
    let result = sqlx::query("DELETE FROM users WHERE id = ?")
        .bind(id)
        .execute(pool)
        .await?;

    if result.rows_affected() == 0 {
        return Err(StorageError::not_found("User", id.to_string()));
    }

    Ok(())
}

/// Create or update user credentials
///
/// `password_hash` should already be hashed with bcrypt.
pub async fn set_password_hash(
    pool: &SqlitePool,
    user_id: i64,
    password_hash: &str,
) -> Result<()> {
    let now = chrono::Utc::now().timestamp();

    sqlx::query(
        "INSERT INTO user_credentials (user_id, password_hash, created_at, updated_at)
         VALUES (?, ?, ?, ?)
         ON CONFLICT(user_id)
         DO UPDATE SET password_hash = excluded.password_hash, updated_at = excluded.updated_at",
    )
    .bind(user_id)
    .bind(password_hash)
    .bind(now)
    .bind(now)
    .execute(pool)
    .await?;

    Ok(())
}

/// Get a user's password hash for authentication
///
/// Returns None if the user has no credentials.
pub async fn get_password_hash(pool: &SqlitePool, user_id: i64) -> Result<Option<String>> {
    let row = sqlx::query("SELECT password_hash FROM user_credentials WHERE user_id = ?")
        .bind(user_id)
        .fetch_optional(pool)
        .await?;

    Ok(row.map(|r| r.get("password_hash")))
}

/// Delete user credentials
pub async fn delete_credentials(pool: &SqlitePool, user_id: i64) -> Result<()> {
    sqlx::query("DELETE FROM user_credentials WHERE user_id = ?")
        .bind(user_id)
        .execute(pool)
        .await?;

    Ok(())
}
