use super::*;

#[test]
fn valid_form_is_trimmed() {
    let request = register_request(" alice ", " a@example.com ", "secret").unwrap();
    assert_eq!(request.username, "alice");
    assert_eq!(request.email, "a@example.com");
}

#[test]
fn username_is_required_and_bounded() {
    assert_eq!(register_request("", "a@example.com", "secret").unwrap_err(), "Username is required.");
    let long = "x".repeat(USERNAME_MAX_LENGTH + 1);
    assert!(register_request(&long, "a@example.com", "secret").is_err());
    let max = "x".repeat(USERNAME_MAX_LENGTH);
    assert!(register_request(&max, "a@example.com", "secret").is_ok());
}

#[test]
fn email_needs_local_part_and_domain() {
    for bad in ["", "alice", "@example.com", "alice@", "alice@localhost", "alice@.com"] {
        assert!(register_request("alice", bad, "secret").is_err(), "{bad} accepted");
    }
}

#[test]
fn password_needs_six_characters() {
    assert_eq!(
        register_request("alice", "a@example.com", "12345").unwrap_err(),
        "Password must be at least 6 characters."
    );
    assert!(register_request("alice", "a@example.com", "123456").is_ok());
}

#[test]
fn field_errors_win_over_generic_message() {
    let err = crate::net::error::classify(400, r#"{"message":"Validation failed","errors":{"email":"Email is already in use"}}"#)
        .unwrap();
    assert_eq!(register_error_message(&err), "Email is already in use");
}

#[test]
fn generic_message_when_no_field_matches() {
    let err = crate::net::error::classify(409, r#"{"message":"Username is already taken"}"#).unwrap();
    assert_eq!(register_error_message(&err), "Username is already taken");
}
