use crate::{CoreError, User};

#[test]
fn test_user_new_starts_with_empty_exercise_list() {
    let user = User::new("alice".to_string());

    assert_eq!(user.username, "alice");
    assert!(user.exercises.is_empty());
}

#[test]
fn test_users_get_distinct_ids() {
    let a = User::new("a".to_string());
    let b = User::new("b".to_string());

    assert_ne!(a.id, b.id);
}

#[test]
fn test_validate_username_accepts_non_blank() {
    let name = User::validate_username(Some("bob".to_string())).unwrap();
    assert_eq!(name, "bob");
}

#[test]
fn test_validate_username_rejects_missing_and_blank() {
    let missing = User::validate_username(None);
    assert!(matches!(missing, Err(CoreError::Validation { ref message, .. }) if message == "username is required"));

    let blank = User::validate_username(Some("   ".to_string()));
    assert!(matches!(blank, Err(CoreError::Validation { ref field, .. }) if field.as_deref() == Some("username")));
}
