use super::*;

// =============================================================
// error_message
// =============================================================

#[test]
fn error_message_prefers_server_error() {
    let body = r#"{"error":"Invalid credentials"}"#;
    assert_eq!(error_message(body, "fallback"), "Invalid credentials");
}

#[test]
fn error_message_falls_back_on_empty_body() {
    assert_eq!(error_message("", "Login failed. Please try again."), "Login failed. Please try again.");
}

#[test]
fn error_message_falls_back_on_unexpected_shape() {
    assert_eq!(error_message(r#"{"detail":"boom"}"#, "fallback"), "fallback");
    assert_eq!(error_message("<html>502</html>", "fallback"), "fallback");
}

// =============================================================
// AuthResponse
// =============================================================

#[test]
fn auth_response_identity_fields_are_optional() {
    let resp: AuthResponse = serde_json::from_str(r#"{"token":"t1"}"#).unwrap();
    assert_eq!(resp.token, "t1");
    assert_eq!(resp.email, None);
    assert_eq!(resp.username, None);
}

#[test]
fn auth_response_with_identity() {
    let resp: AuthResponse =
        serde_json::from_str(r#"{"token":"t1","email":"u@e.com","username":"u"}"#).unwrap();
    assert_eq!(resp.email.as_deref(), Some("u@e.com"));
    assert_eq!(resp.username.as_deref(), Some("u"));
}

// =============================================================
// Request serialization
// =============================================================

#[test]
fn signup_request_uses_camel_case() {
    let req = SignupRequest {
        email: "u@e.com",
        username: "u",
        password: "secret123",
        confirm_password: "secret123",
    };
    let json = serde_json::to_value(&req).unwrap();
    assert!(json.get("confirmPassword").is_some());
    assert!(json.get("confirm_password").is_none());
}

#[test]
fn reset_request_uses_camel_case() {
    let req = ResetPasswordRequest {
        token: "tok",
        password: "secret123",
        confirm_password: "secret123",
    };
    let json = serde_json::to_value(&req).unwrap();
    assert_eq!(json.get("token").and_then(|v| v.as_str()), Some("tok"));
    assert!(json.get("confirmPassword").is_some());
}
