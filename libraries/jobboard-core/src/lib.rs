//! Jobboard Core
//!
//! Domain types shared by the storage layer and the HTTP server.

#![forbid(unsafe_code)]

pub mod types;

// Re-export commonly used types
pub use types::{Experience, Profile, User};
