/// Authentication API routes
use crate::{
    error::{Result, ServerError},
    services::auth::Role,
    state::AppState,
};
use axum::{extract::State, Json};
use jobboard_core::User;
use serde::{Deserialize, Serialize};

#[derive(Debug, Deserialize)]
pub struct RegisterRequest {
    pub username: String,
    pub email: String,
    pub password: String,
}

#[derive(Debug, Serialize)]
pub struct RegisterResponse {
    pub message: String,
    pub data: User,
}

#[derive(Debug, Deserialize)]
pub struct LoginRequest {
    pub email: String,
    pub password: String,
}

#[derive(Debug, Serialize)]
pub struct LoginResponse {
    pub message: String,
    pub data: User,
    pub token: String,
}

/// POST /api/v1/auth/register
pub async fn register(
    State(app_state): State<AppState>,
    Json(req): Json<RegisterRequest>,
) -> Result<Json<RegisterResponse>> {
    let password_hash = app_state.auth_service.hash_password(&req.password)?;

    let user = app_state
        .user_service
        .create_user(User {
            id: None,
            username: req.username,
            email: req.email,
            is_admin: false,
            created_at: None,
        })
        .await?;

    let user_id = user
        .id
        .ok_or_else(|| ServerError::Internal("Saved user has no id".to_string()))?;

    jobboard_storage::users::set_password_hash(&app_state.pool, user_id, &password_hash).await?;

    Ok(Json(RegisterResponse {
        message: "User has been registered successfully".to_string(),
        data: user,
    }))
}

/// POST /api/v1/auth/login
pub async fn login(
    State(app_state): State<AppState>,
    Json(req): Json<LoginRequest>,
) -> Result<Json<LoginResponse>> {
    // Look up the user by email
    let user = jobboard_storage::users::find_by_email(&app_state.pool, &req.email)
        .await?
        .ok_or_else(|| ServerError::NotFound("User not found".to_string()))?;

    let user_id = user
        .id
        .ok_or_else(|| ServerError::Internal("Stored user has no id".to_string()))?;

    // Compare against the stored hash; a user without credentials cannot log in
    let password_hash = jobboard_storage::users::get_password_hash(&app_state.pool, user_id)
        .await?
        .ok_or_else(|| ServerError::BadRequest("Invalid credentials".to_string()))?;

    if !app_state
        .auth_service
        .verify_password(&req.password, &password_hash)?
    {
        return Err(ServerError::BadRequest("Invalid credentials".to_string()));
    }

    let role = if user.is_admin { Role::Admin } else { Role::User };
    let token = app_state.auth_service.create_token(user_id, role)?;

    Ok(Json(LoginResponse {
        message: "Login successful".to_string(),
        data: user,
        token,
    }))
}
