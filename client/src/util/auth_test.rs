use super::*;
use crate::net::types::User;

fn admin() -> User {
    User {
        id: 1,
        username: "admin".to_owned(),
        email: "admin@laundrymart.test".to_owned(),
        full_name: None,
        phone: None,
        address: None,
        role: Role::Admin,
    }
}

#[test]
fn should_redirect_unauth_when_not_loading_and_user_missing() {
    let state = SessionState { user: None, loading: false };
    assert!(should_redirect_unauth(&state));
}

#[test]
fn should_not_redirect_while_loading() {
    let state = SessionState { user: None, loading: true };
    assert!(!should_redirect_unauth(&state));
}

#[test]
fn should_not_redirect_when_user_exists() {
    let state = SessionState { user: Some(admin()), loading: false };
    assert!(!should_redirect_unauth(&state));
}

#[test]
fn landing_path_sends_admins_to_dashboard() {
    assert_eq!(landing_path(Role::Admin), "/admin");
    assert_eq!(landing_path(Role::Customer), "/");
    assert_eq!(landing_path(Role::Rider), "/");
}
