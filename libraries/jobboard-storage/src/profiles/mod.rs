//! Profile queries
//!
//! One profile row per user; `skills` and `experience` live in JSON text
//! columns so the document shape can evolve without schema churn.

use crate::StorageError;
use jobboard_core::{Experience, Profile};
use sqlx::sqlite::SqliteRow;
use sqlx::{Row, SqlitePool};

type Result<T> = std::result::Result<T, StorageError>;

fn row_to_profile(row: &SqliteRow) -> Result<Profile> {
    let skills: Vec<String> = serde_json::from_str(&row.get::<String, _>("skills"))?;
    let experience: Vec<Experience> = serde_json::from_str(&row.get::<String, _>("experience"))?;

    Ok(Profile {
        user_id: row.get("user_id"),
        name: row.get("name"),
        location: row.get("location"),
        phone: row.get("phone"),
        about: row.get("about"),
        skills,
        experience,
        avatar_key: row.get("avatar_key"),
        resume_key: row.get("resume_key"),
        created_at: chrono::DateTime::from_timestamp(row.get::<i64, _>("created_at"), 0)
            .map(|dt| dt.to_rfc3339()),
        updated_at: chrono::DateTime::from_timestamp(row.get::<i64, _>("updated_at"), 0)
            .map(|dt| dt.to_rfc3339()),
    })
}

/// Create or update a user's profile and return the stored form
///
/// `created_at` is preserved across updates; `updated_at` is bumped on
/// every write.
pub async fn upsert(pool: &SqlitePool, profile: Profile) -> Result<Profile> {
    let skills = serde_json::to_string(&profile.skills)?;
    let experience = serde_json::to_string(&profile.experience)?;
    let now = chrono::Utc::now().timestamp();

    sqlx::query(
        "INSERT INTO profiles (user_id, name, location, phone, about, skills, experience,
                               avatar_key, resume_key, created_at, updated_at)
         VALUES (?, ?, ?, ?, ?, ?, ?, ?, ?, ?, ?)
         ON CONFLICT(user_id)
         DO UPDATE SET name = excluded.name,
                       location = excluded.location,
                       phone = excluded.phone,
                       about = excluded.about,
                       skills = excluded.skills,
                       experience = excluded.experience,
                       avatar_key = excluded.avatar_key,
                       resume_key = excluded.resume_key,
                       updated_at = excluded.updated_at",
    )
    .bind(profile.user_id)
    .bind(&profile.name)
    .bind(&profile.location)
    .bind(&profile.phone)
    .bind(&profile.about)
    .bind(skills)
    .bind(experience)
    .bind(&profile.avatar_key)
    .bind(&profile.resume_key)
    .bind(now)
    .bind(now)
    .execute(pool)
    .await?;

    find_by_user(pool, profile.user_id)
        .await?
        .ok_or_else(|| StorageError::not_found("Profile", profile.user_id.to_string()))
}

/// Look up the profile for a user
pub async fn find_by_user(pool: &SqlitePool, user_id: i64) -> Result<Option<Profile>> {
    let row = sqlx::query(
        "SELECT user_id, name, location, phone, about, skills, experience,
                avatar_key, resume_key, created_at, updated_at
         FROM profiles WHERE user_id = ?",
    )
    .bind(user_id)
    .fetch_optional(pool)
    .await?;

    row.as_ref().map(row_to_profile).transpose()
}

/// Delete the profile for a user
pub async fn delete(pool: &SqlitePool, user_id: i64) -> Result<()> {
    let result = sqlx::query("DELETE FROM profiles WHERE user_id = ?")
        .bind(user_id)
        .execute(pool)
        .await?;

    if result.rows_affected() == 0 {
        return Err(StorageError::not_found("Profile", user_id.to_string()));
    }

    Ok(())
}
