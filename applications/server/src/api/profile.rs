/// Profile API routes
use crate::{
    error::{Result, ServerError},
    middleware::AuthenticatedUser,
    state::AppState,
};
use axum::{extract::State, Json};
use jobboard_core::{Experience, Profile};
use serde::{Deserialize, Serialize};

#[derive(Debug, Deserialize)]
pub struct UpdateProfileRequest {
    #[serde(default)]
    pub name: Option<String>,

    #[serde(default)]
    pub location: Option<String>,

    #[serde(default)]
    pub phone: Option<String>,

    #[serde(default)]
    pub about: Option<String>,

    #[serde(default)]
    pub skills: Vec<String>,

    #[serde(default)]
    pub experience: Vec<Experience>,
}

#[derive(Debug, Serialize)]
pub struct UpdateProfileResponse {
    pub message: String,
    pub profile: Profile,
}

/// GET /api/v1/user/profile
pub async fn get_profile(
    State(app_state): State<AppState>,
    auth: AuthenticatedUser,
) -> Result<Json<Profile>> {
    let profile = jobboard_storage::profiles::find_by_user(&app_state.pool, auth.user_id)
        .await?
        .ok_or_else(|| ServerError::NotFound("Profile not found".to_string()))?;

    Ok(Json(profile))
}

/// PUT /api/v1/user/profile
pub async fn update_profile(
    State(app_state): State<AppState>,
    auth: AuthenticatedUser,
    Json(req): Json<UpdateProfileRequest>,
) -> Result<Json<UpdateProfileResponse>> {
    // Uploaded object keys survive a profile update
    let (avatar_key, resume_key) =
        match jobboard_storage::profiles::find_by_user(&app_state.pool, auth.user_id).await? {
            Some(existing) => (existing.avatar_key, existing.resume_key),
            None => (None, None),
        };

    let profile = jobboard_storage::profiles::upsert(
        &app_state.pool,
        Profile {
            user_id: auth.user_id,
            name: req.name,
            location: req.location,
            phone: req.phone,
            about: req.about,
            skills: req.skills,
            experience: req.experience,
            avatar_key,
            resume_key,
            created_at: None,
            updated_at: None,
        },
    )
    .await?;

    Ok(Json(UpdateProfileResponse {
        message: "Profile updated successfully".to_string(),
        profile,
    }))
}

/// DELETE /api/v1/user/profile
pub async fn delete_profile(
    State(app_state): State<AppState>,
    auth: AuthenticatedUser,
) -> Result<Json<serde_json::Value>> {
    jobboard_storage::profiles::delete(&app_state.pool, auth.user_id).await?;

    Ok(Json(serde_json::json!({
        "message": "Profile deleted successfully"
    })))
}
