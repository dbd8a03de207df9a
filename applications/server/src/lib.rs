//! Jobboard Server Library
//!
//! Job-board user backend: pass-through user persistence, registration,
//! login, and profile management over axum.
//!
//! This library exposes the core components for testing purposes.

pub mod api;
pub mod config;
pub mod error;
pub mod middleware;
pub mod router;
pub mod services;
pub mod state;

// Re-export commonly used types for convenience
pub use config::ServerConfig;
pub use error::{Result, ServerError};
pub use router::create_router;
pub use services::{auth::AuthService, users::UserService};
pub use state::AppState;
