//! Integration tests for the users vertical slice
//!
//! Covers save semantics (insert vs. update), lookups, and the credential
//! table operations.

mod test_helpers;

use jobboard_storage::{users, StorageError};
use test_helpers::*;

#[tokio::test]
async fn test_save_without_id_inserts_and_assigns_id() {
    let test_db = TestDb::new().await;
    let pool = test_db.pool();

    let saved = users::save(pool, unsaved_user("alice", "alice@example.com"))
        .await
        .expect("Failed to save user");

    assert_eq!(saved.id, Some(1));
    assert_eq!(saved.username, "alice");
    assert_eq!(saved.email, "alice@example.com");
    assert!(!saved.is_admin);
    assert!(saved.created_at.is_some(), "insert should assign created_at");
}

#[tokio::test]
async fn test_save_does_not_alter_input_fields() {
    let test_db = TestDb::new().await;
    let pool = test_db.pool();

    let input = unsaved_user("bob", "bob@example.com");
    let saved = users::save(pool, input.clone())
        .await
        .expect("Failed to save user");

    assert_eq!(saved.username, input.username);
    assert_eq!(saved.email, input.email);
    assert_eq!(saved.is_admin, input.is_admin);
}

#[tokio::test]
async fn test_save_with_id_updates_existing_row() {
    let test_db = TestDb::new().await;
    let pool = test_db.pool();

    let saved = users::save(pool, unsaved_user("carol", "carol@example.com"))
        .await
        .expect("Failed to save user");

    let mut updated = saved.clone();
    updated.email = "carol@corp.example.com".to_string();

    let stored = users::save(pool, updated).await.expect("Failed to update");

    assert_eq!(stored.id, saved.id);
    assert_eq!(stored.email, "carol@corp.example.com");
    // created_at is not rewritten on update
    assert_eq!(stored.created_at, saved.created_at);

    let all = users::get_all(pool).await.expect("Failed to list users");
    assert_eq!(all.len(), 1, "update must not create a second row");
}

#[tokio::test]
async fn test_save_with_unknown_id_is_not_found() {
    let test_db = TestDb::new().await;
    let pool = test_db.pool();

    let mut user = unsaved_user("dave", "dave@example.com");
    user.id = Some(42);

    let err = users::save(pool, user).await.unwrap_err();
    assert!(matches!(err, StorageError::NotFound { .. }));
}

#[tokio::test]
async fn test_duplicate_email_is_rejected() {
    let test_db = TestDb::new().await;
    let pool = test_db.pool();

    users::save(pool, unsaved_user("erin", "erin@example.com"))
        .await
        .expect("Failed to save user");

    let err = users::save(pool, unsaved_user("erin2", "erin@example.com"))
        .await
        .unwrap_err();
    assert!(matches!(err, StorageError::Database(_)));
}

#[tokio::test]
async fn test_find_by_email() {
    let test_db = TestDb::new().await;
    let pool = test_db.pool();

    create_test_user(pool, "frank", "frank@example.com").await;

    let found = users::find_by_email(pool, "frank@example.com")
        .await
        .expect("Failed to query");
    assert_eq!(found.map(|u| u.username), Some("frank".to_string()));

    let missing = users::find_by_email(pool, "nobody@example.com")
        .await
        .expect("Failed to query");
    assert!(missing.is_none());
}

#[tokio::test]
async fn test_get_all_orders_by_username() {
    let test_db = TestDb::new().await;
    let pool = test_db.pool();

    create_test_user(pool, "zoe", "zoe@example.com").await;
    create_test_user(pool, "amir", "amir@example.com").await;

    let all = users::get_all(pool).await.expect("Failed to list users");
    let names: Vec<&str> = all.iter().map(|u| u.username.as_str()).collect();
    assert_eq!(names, vec!["amir", "zoe"]);
}

#[tokio::test]
async fn test_delete_user() {
    let test_db = TestDb::new().await;
    let pool = test_db.pool();

    let id = create_test_user(pool, "gus", "gus@example.com").await;

    users::delete(pool, id).await.expect("Failed to delete");
    assert!(users::find_by_id(pool, id)
        .await
        .expect("Failed to query")
        .is_none());

    let err = users::delete(pool, id).await.unwrap_err();
    assert!(matches!(err, StorageError::NotFound { .. }));
}

#[tokio::test]
async fn test_credentials_roundtrip_and_upsert() {
    let test_db = TestDb::new().await;
    let pool = test_db.pool();

    let id = create_test_user(pool, "hana", "hana@example.com").await;

    assert!(users::get_password_hash(pool, id)
        .await
        .expect("Failed to query")
        .is_none());

    users::set_password_hash(pool, id, "hash-one")
        .await
        .expect("Failed to set hash");
    assert_eq!(
        users::get_password_hash(pool, id)
            .await
            .expect("Failed to query"),
        Some("hash-one".to_string())
    );

    // Second write replaces the first
    users::set_password_hash(pool, id, "hash-two")
        .await
        .expect("Failed to replace hash");
    assert_eq!(
        users::get_password_hash(pool, id)
            .await
            .expect("Failed to query"),
        Some("hash-two".to_string())
    );

    users::delete_credentials(pool, id)
        .await
        .expect("Failed to delete credentials");
    assert!(users::get_password_hash(pool, id)
        .await
        .expect("Failed to query")
        .is_none());
}
