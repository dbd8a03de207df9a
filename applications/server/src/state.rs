/// Shared application state
use crate::services::{AuthService, UserService};
use sqlx::SqlitePool;
use std::sync::Arc;

/// Application state shared across all handlers
///
/// Built once at startup; handlers reach their collaborators through it
/// instead of constructing them per request.
#[derive(Clone)]
pub struct AppState {
    pub pool: SqlitePool,
    pub user_service: Arc<UserService>,
    pub auth_service: Arc<AuthService>,
}

impl AppState {
    pub fn new(
        pool: SqlitePool,
        user_service: Arc<UserService>,
        auth_service: Arc<AuthService>,
    ) -> Self {
        Self {
            pool,
            user_service,
            auth_service,
        }
    }
}
