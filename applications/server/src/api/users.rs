/// User API routes
use crate::{error::Result, state::AppState};
use axum::{extract::State, Json};
use jobboard_core::User;

/// POST /user
///
/// Accepts a user record and returns its persisted form. The body is
/// handed to the user service as-is; the response is whatever the
/// storage layer returned, including the assigned id on first save.
pub async fn create_user(
    State(app_state): State<AppState>,
    Json(user): Json<User>,
) -> Result<Json<User>> {
    let saved = app_state.user_service.create_user(user).await?;
    Ok(Json(saved))
}
