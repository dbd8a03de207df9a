/// User service - forwards user records to the storage layer
use crate::error::Result;
use jobboard_core::User;
use sqlx::SqlitePool;

/// Persistence delegate for user records
///
/// Constructed with the storage handle it forwards to. Records pass
/// through without being inspected or modified; the caller gets back
/// exactly what the storage layer returned.
#[derive(Clone)]
pub struct UserService {
    pool: SqlitePool,
}

impl UserService {
    pub fn new(pool: SqlitePool) -> Self {
        Self { pool }
    }

    /// Persist a user record and return the stored form
    pub async fn create_user(&self, user: User) -> Result<User> {
        Ok(jobboard_storage::users::save(&self.pool, user).await?)
    }
}
