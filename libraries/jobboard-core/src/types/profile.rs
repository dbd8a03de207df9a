/// Profile domain types
use serde::{Deserialize, Serialize};

/// A single work-experience entry on a profile
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Experience {
    #[serde(default)]
    pub title: Option<String>,

    #[serde(default)]
    pub company: Option<String>,

    #[serde(default)]
    pub location: Option<String>,

    /// Start date (RFC 3339 string)
    #[serde(default, rename = "from")]
    pub from_date: Option<String>,

    /// End date (RFC 3339 string), absent while `current` is true
    #[serde(default, rename = "to")]
    pub to_date: Option<String>,

    #[serde(default)]
    pub current: bool,

    #[serde(default)]
    pub description: Option<String>,
}

/// User profile
///
/// One profile per user; writes are upserts keyed on `user_id`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Profile {
    /// Owning user
    pub user_id: i64,

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

    /// Object-store key for the profile picture
    #[serde(default)]
    pub avatar_key: Option<String>,

    /// Object-store key for the resume
    #[serde(default)]
    pub resume_key: Option<String>,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub created_at: Option<String>,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub updated_at: Option<String>,
}
