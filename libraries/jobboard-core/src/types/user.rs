/// User domain type
use serde::{Deserialize, Serialize};

/// User account
///
/// `id` and `created_at` are assigned by the storage layer on first save;
/// a record deserialized from an HTTP body usually carries neither.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct User {
    /// Unique user identifier
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub id: Option<i64>,

    /// Login name, unique across accounts
    pub username: String,

    /// Email address, unique across accounts
    pub email: String,

    /// Administrator flag
    #[serde(default)]
    pub is_admin: bool,

    /// Account creation timestamp (RFC 3339 string)
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub created_at: Option<String>,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn deserializes_without_id_or_timestamp() {
        let user: User =
            serde_json::from_str(r#"{"username": "alice", "email": "alice@example.com"}"#)
                .unwrap();

        assert_eq!(user.id, None);
        assert_eq!(user.username, "alice");
        assert!(!user.is_admin);
        assert_eq!(user.created_at, None);
    }

    #[test]
    fn absent_fields_stay_absent_in_json() {
        let user = User {
            id: None,
            username: "alice".to_string(),
            email: "alice@example.com".to_string(),
            is_admin: false,
            created_at: None,
        };

        let json = serde_json::to_value(&user).unwrap();
        assert!(json.get("id").is_none());
        assert!(json.get("created_at").is_none());
    }
}
