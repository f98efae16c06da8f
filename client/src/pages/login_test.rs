use super::*;

#[test]
fn validate_login_input_trims_username() {
    assert_eq!(
        validate_login_input("  admin  ", "secret"),
        Ok(LoginRequest { username: "admin".to_owned(), password: "secret".to_owned() })
    );
}

#[test]
fn validate_login_input_keeps_password_whitespace() {
    let request = validate_login_input("admin", " pass ").unwrap();
    assert_eq!(request.password, " pass ");
}

#[test]
fn validate_login_input_requires_both_fields() {
    assert_eq!(validate_login_input("   ", "secret"), Err(LOGIN_REQUIRED_MESSAGE));
    assert_eq!(validate_login_input("admin", ""), Err(LOGIN_REQUIRED_MESSAGE));
}
