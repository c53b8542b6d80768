//! Authentication and authorization tests

use chrono::Duration;

use inkpress::auth::{allowed, allowed_on_owned, hash_password, verify_password, Action, TokenService};
use inkpress::models::Role;

fn tokens() -> TokenService {
    TokenService::new("test-secret", 30)
}

#[test]
fn test_token_round_trip_resolves_subject() {
    let tokens = tokens();
    let token = tokens.issue("admin@blog.com").expect("issue");
    assert_eq!(token.split('.').count(), 3);
    assert_eq!(tokens.verify(&token).expect("verify"), "admin@blog.com");
}

#[test]
fn test_token_degrades_past_expiry() {
    let tokens = tokens();
    let token = tokens
        .issue_with_ttl("admin@blog.com", Duration::seconds(-1))
        .expect("issue");
    assert!(tokens.verify(&token).is_err());
}

#[test]
fn test_token_from_other_secret_rejected() {
    let foreign = TokenService::new("someone-else", 30)
        .issue("admin@blog.com")
        .expect("issue");
    assert!(tokens().verify(&foreign).is_err());
}

#[test]
fn test_policy_matches_permission_table() {
    // admin: all actions
    for action in [
        Action::WritePostOwn,
        Action::WritePostAny,
        Action::WriteCategory,
        Action::ModerateComment,
        Action::ManageUser,
    ] {
        assert!(allowed(Role::Admin, action));
    }

    // editor: any-post, categories, moderation
    assert!(allowed(Role::Editor, Action::WritePostAny));
    assert!(allowed(Role::Editor, Action::WriteCategory));
    assert!(allowed(Role::Editor, Action::ModerateComment));
    assert!(!allowed(Role::Editor, Action::ManageUser));

    // user: own posts only
    assert!(allowed(Role::User, Action::WritePostOwn));
    assert!(!allowed(Role::User, Action::WritePostAny));
    assert!(!allowed(Role::User, Action::WriteCategory));
    assert!(!allowed(Role::User, Action::ModerateComment));
    assert!(!allowed(Role::User, Action::ManageUser));
}

#[test]
fn test_policy_is_deterministic() {
    for _ in 0..3 {
        assert!(!allowed(Role::User, Action::ManageUser));
        assert!(allowed(Role::Editor, Action::WriteCategory));
    }
}

#[test]
fn test_ownership_check() {
    assert!(allowed_on_owned(Role::User, Action::WritePostAny, 3, Some(3)));
    assert!(!allowed_on_owned(Role::User, Action::WritePostAny, 3, Some(4)));
    assert!(allowed_on_owned(Role::Admin, Action::WritePostAny, 3, Some(4)));
}

#[test]
fn test_password_hash_round_trip() {
    let hash = hash_password("s3cret").unwrap();
    assert!(verify_password("s3cret", &hash).unwrap());
    assert!(!verify_password("other", &hash).unwrap());
}
