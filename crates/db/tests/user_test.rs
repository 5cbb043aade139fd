//! Integration tests for User repository.

mod common;

use repairdesk_core::{NewUser, UserPatch};
use repairdesk_db::{RepoError, UserRepository};

#[tokio::test]
async fn test_user_find_by_login_matches_email_or_username() {
    let db = common::setup().await;
    let repo = UserRepository::new(db.clone());
    let user = common::create_user(&db).await;

    let by_email = repo
        .find_by_login(&user.email)
        .await
        .expect("query")
        .expect("User should exist");
    let by_username = repo
        .find_by_login(&user.username)
        .await
        .expect("query")
        .expect("User should exist");

    assert_eq!(by_email.id, user.id);
    assert_eq!(by_username.id, user.id);
    assert!(repo.find_by_login("nobody").await.expect("query").is_none());
}

#[tokio::test]
async fn test_user_duplicate_email_rejected() {
    let db = common::setup().await;
    let repo = UserRepository::new(db.clone());
    let user = common::create_user(&db).await;

    let result = repo
        .create(
            NewUser {
                email: user.email.clone(),
                username: "someone-else".to_string(),
                password: "password123".to_string(),
                full_name: String::new(),
                is_active: true,
                is_superuser: false,
            },
            "$argon2id$test_hash",
        )
        .await;

    assert!(matches!(result, Err(RepoError::Duplicate(_))));
}

#[tokio::test]
async fn test_user_update_flags_and_password() {
    let db = common::setup().await;
    let repo = UserRepository::new(db.clone());
    let user = common::create_user(&db).await;

    let updated = repo
        .update(
            user.id,
            UserPatch {
                is_active: Some(false),
                ..UserPatch::default()
            },
            None,
        )
        .await
        .expect("Failed to update user");
    assert!(!updated.is_active);
    assert_eq!(updated.email, user.email);
    assert_eq!(updated.hashed_password, user.hashed_password);

    let updated = repo
        .set_password(user.id, "$argon2id$other_hash")
        .await
        .expect("Failed to set password");
    assert_eq!(updated.hashed_password, "$argon2id$other_hash");
}

#[tokio::test]
async fn test_user_update_to_taken_email_rejected() {
    let db = common::setup().await;
    let repo = UserRepository::new(db.clone());
    let first = common::create_user(&db).await;
    let second = common::create_user(&db).await;

    let result = repo
        .update(
            second.id,
            UserPatch {
                email: Some(first.email.clone()),
                ..UserPatch::default()
            },
            None,
        )
        .await;

    assert!(matches!(result, Err(RepoError::Duplicate(_))));
    assert_eq!(repo.list().await.expect("list").len(), 2);
}
