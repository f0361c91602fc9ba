use super::*;

// =============================================================
// from_status
// =============================================================

#[test]
fn from_status_401_is_unauthorized() {
    let err = ApiError::from_status(401, r#"{"message":"Unauthorized"}"#);
    assert_eq!(err, ApiError::Unauthorized);
    assert!(err.is_unauthorized());
}

#[test]
fn from_status_keeps_backend_message() {
    let err = ApiError::from_status(404, r#"{"message":"Fatura não encontrada"}"#);
    assert_eq!(
        err,
        ApiError::Request { status: 404, message: "Fatura não encontrada".to_owned() }
    );
    assert!(!err.is_unauthorized());
}

#[test]
fn from_status_without_payload_uses_fallback() {
    let err = ApiError::from_status(502, "<html>Bad Gateway</html>");
    assert_eq!(
        err,
        ApiError::Request { status: 502, message: GENERIC_REQUEST_ERROR.to_owned() }
    );
}

// =============================================================
// extract_message
// =============================================================

#[test]
fn extract_message_joins_validation_array() {
    let body = r#"{"message":["email must be an email","password should not be empty"]}"#;
    assert_eq!(
        extract_message(body),
        "email must be an email; password should not be empty"
    );
}

#[test]
fn extract_message_ignores_blank_and_non_string() {
    assert_eq!(extract_message(r#"{"message":"  "}"#), GENERIC_REQUEST_ERROR);
    assert_eq!(extract_message(r#"{"message":42}"#), GENERIC_REQUEST_ERROR);
    assert_eq!(extract_message(r#"{"message":[]}"#), GENERIC_REQUEST_ERROR);
    assert_eq!(extract_message(r#"{"error":"x"}"#), GENERIC_REQUEST_ERROR);
    assert_eq!(extract_message(""), GENERIC_REQUEST_ERROR);
}
