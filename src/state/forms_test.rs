use super::*;

// =============================================================
// is_valid_email
// =============================================================

#[test]
fn accepts_ordinary_addresses() {
    assert!(is_valid_email("user@example.com"));
    assert!(is_valid_email("a.b+c@sub.domain.io"));
}

#[test]
fn rejects_missing_parts() {
    assert!(!is_valid_email(""));
    assert!(!is_valid_email("user"));
    assert!(!is_valid_email("user@"));
    assert!(!is_valid_email("user@host"));
    assert!(!is_valid_email("@host.com"));
    assert!(!is_valid_email("user@host."));
    assert!(!is_valid_email("user@.com"));
}

#[test]
fn rejects_whitespace() {
    assert!(!is_valid_email("us er@example.com"));
    assert!(!is_valid_email(" user@example.com"));
    assert!(!is_valid_email("user@example.com "));
    // A whitespace-free substring is still not a valid address.
    assert!(!is_valid_email("foo bar@x.com"));
}

// =============================================================
// LoginForm
// =============================================================

#[test]
fn login_empty_identifier_is_required() {
    let form = LoginForm {
        email: String::new(),
        password: "secret123".to_owned(),
    };
    let errors = form.validate();
    assert_eq!(errors.email, Some("Email is required"));
    assert!(errors.password.is_none());
    assert!(!errors.is_empty());
}

#[test]
fn login_invalid_email_is_flagged() {
    let form = LoginForm {
        email: "not-an-email".to_owned(),
        password: "secret123".to_owned(),
    };
    assert_eq!(form.validate().email, Some("Email is invalid"));
}

#[test]
fn login_short_password_is_flagged() {
    let form = LoginForm {
        email: "user@example.com".to_owned(),
        password: "12345".to_owned(),
    };
    assert_eq!(
        form.validate().password,
        Some("Password must be at least 6 characters")
    );
}

#[test]
fn login_valid_form_has_no_errors() {
    let form = LoginForm {
        email: "user@example.com".to_owned(),
        password: "secret123".to_owned(),
    };
    assert!(form.validate().is_empty());
}

// =============================================================
// SignupForm
// =============================================================

#[test]
fn signup_all_empty_flags_every_field() {
    let errors = SignupForm::default().validate();
    assert_eq!(errors.email, Some("Email is required"));
    assert_eq!(errors.username, Some("Username is required"));
    assert_eq!(errors.password, Some("Password is required"));
    assert_eq!(errors.confirm_password, Some("Please confirm your password"));
}

#[test]
fn signup_mismatched_confirmation_is_flagged() {
    let form = SignupForm {
        email: "user@example.com".to_owned(),
        username: "user".to_owned(),
        password: "secret123".to_owned(),
        confirm_password: "secret124".to_owned(),
    };
    let errors = form.validate();
    assert_eq!(errors.confirm_password, Some("Passwords do not match"));
    assert!(errors.password.is_none());
}

#[test]
fn signup_valid_form_has_no_errors() {
    let form = SignupForm {
        email: "user@example.com".to_owned(),
        username: "user".to_owned(),
        password: "secret123".to_owned(),
        confirm_password: "secret123".to_owned(),
    };
    assert!(form.validate().is_empty());
}

// =============================================================
// ResetForm
// =============================================================

#[test]
fn reset_requires_password_and_confirmation() {
    let errors = ResetForm::default().validate();
    assert_eq!(errors.password, Some("Password is required"));
    assert_eq!(errors.confirm_password, Some("Please confirm your password"));
}

#[test]
fn reset_valid_form_has_no_errors() {
    let form = ResetForm {
        password: "secret123".to_owned(),
        confirm_password: "secret123".to_owned(),
    };
    assert!(form.validate().is_empty());
}

// =============================================================
// validate_reset_email
// =============================================================

#[test]
fn reset_email_uses_single_message() {
    assert_eq!(validate_reset_email(""), Some("Please enter a valid email"));
    assert_eq!(
        validate_reset_email("nope"),
        Some("Please enter a valid email")
    );
    assert_eq!(validate_reset_email("user@example.com"), None);
}
