use super::*;

#[test]
fn classify_success_is_none() {
    assert!(classify(200, "{}").is_none());
    assert!(classify(201, "").is_none());
    assert!(classify(204, "").is_none());
}

#[test]
fn classify_401_is_unauthorized_with_default_message() {
    let err = classify(401, "").unwrap();
    assert!(err.is_unauthorized());
    assert_eq!(err.to_string(), UNAUTHORIZED_MESSAGE);
}

#[test]
fn classify_429_keeps_server_message_verbatim() {
    let err = classify(429, r#"{"message":"Too many attempts"}"#).unwrap();
    assert!(err.is_rate_limited());
    assert!(!err.is_unauthorized());
    assert_eq!(err.to_string(), "Too many attempts");
}

#[test]
fn classify_429_without_body_uses_friendly_default() {
    let err = classify(429, "").unwrap();
    assert_eq!(err.to_string(), RATE_LIMITED_MESSAGE);
    assert_ne!(err.to_string(), SERVER_MESSAGE);
}

#[test]
fn classify_400_collects_field_errors() {
    let body = r#"{"status":400,"error":"Validation Failed","message":"Invalid input","errors":{"email":"Email is invalid"}}"#;
    let err = classify(400, body).unwrap();
    assert_eq!(err.to_string(), "Invalid input");
    assert_eq!(err.field_error("email"), Some("Email is invalid"));
    assert_eq!(err.field_error("username"), None);
}

#[test]
fn classify_404_without_message_reports_status() {
    let err = classify(404, "not json").unwrap();
    assert_eq!(err, ApiError::Validation { status: 404, message: "Request failed (404).".to_owned(), fields: BTreeMap::new() });
}

#[test]
fn classify_null_errors_field_keeps_message() {
    let err = classify(409, r#"{"message":"Category already exists","errors":null}"#).unwrap();
    assert_eq!(err.to_string(), "Category already exists");
}

#[test]
fn classify_5xx_is_server_error() {
    let err = classify(503, "").unwrap();
    assert_eq!(err, ApiError::Server { status: 503, message: SERVER_MESSAGE.to_owned() });
}

#[test]
fn classify_blank_message_falls_back_to_default() {
    let err = classify(500, r#"{"message":"   "}"#).unwrap();
    assert_eq!(err.to_string(), SERVER_MESSAGE);
}

#[test]
fn network_error_mentions_connection() {
    let err = ApiError::Network("connection refused".to_owned());
    assert!(err.to_string().contains("connection refused"));
    assert!(!err.is_unauthorized());
}
