//! Client-side validation for the auth forms.
//!
//! Each form is a plain struct with a `validate` method returning per-field
//! messages. Validation runs before any network call; a form with errors
//! never reaches `net::api`. Messages are the exact strings the pages
//! render.

#[cfg(test)]
#[path = "forms_test.rs"]
mod forms_test;

/// Minimum accepted password length.
pub const MIN_PASSWORD_LEN: usize = 6;

/// Loose email shape check: something before `@`, a domain, and a TLD.
/// Whitespace anywhere, including leading or trailing, rejects the address;
/// the shape check is deliberately not a substring match.
pub fn is_valid_email(email: &str) -> bool {
    if email.contains(char::is_whitespace) {
        return false;
    }
    let Some((local, domain)) = email.split_once('@') else {
        return false;
    };
    let Some((host, tld)) = domain.rsplit_once('.') else {
        return false;
    };
    !local.is_empty() && !host.is_empty() && !tld.is_empty()
}

fn email_error(email: &str) -> Option<&'static str> {
    if email.is_empty() {
        Some("Email is required")
    } else if !is_valid_email(email) {
        Some("Email is invalid")
    } else {
        None
    }
}

fn password_error(password: &str) -> Option<&'static str> {
    if password.is_empty() {
        Some("Password is required")
    } else if password.len() < MIN_PASSWORD_LEN {
        Some("Password must be at least 6 characters")
    } else {
        None
    }
}

fn confirm_error(password: &str, confirm: &str) -> Option<&'static str> {
    if confirm.is_empty() {
        Some("Please confirm your password")
    } else if password != confirm {
        Some("Passwords do not match")
    } else {
        None
    }
}

// =============================================================
// Login
// =============================================================

#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct LoginForm {
    pub email: String,
    pub password: String,
}

#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct LoginErrors {
    pub email: Option<&'static str>,
    pub password: Option<&'static str>,
}

impl LoginErrors {
    pub fn is_empty(&self) -> bool {
        self.email.is_none() && self.password.is_none()
    }
}

impl LoginForm {
    pub fn validate(&self) -> LoginErrors {
        LoginErrors {
            email: email_error(&self.email),
            password: password_error(&self.password),
        }
    }
}

// =============================================================
// Signup
// =============================================================

#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct SignupForm {
    pub email: String,
    pub username: String,
    pub password: String,
    pub confirm_password: String,
}

#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct SignupErrors {
    pub email: Option<&'static str>,
    pub username: Option<&'static str>,
    pub password: Option<&'static str>,
    pub confirm_password: Option<&'static str>,
}

impl SignupErrors {
    pub fn is_empty(&self) -> bool {
        self.email.is_none()
            && self.username.is_none()
            && self.password.is_none()
            && self.confirm_password.is_none()
    }
}

impl SignupForm {
    pub fn validate(&self) -> SignupErrors {
        SignupErrors {
            email: email_error(&self.email),
            username: if self.username.trim().is_empty() {
                Some("Username is required")
            } else {
                None
            },
            password: password_error(&self.password),
            confirm_password: confirm_error(&self.password, &self.confirm_password),
        }
    }
}

// =============================================================
// Reset password
// =============================================================

#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct ResetForm {
    pub password: String,
    pub confirm_password: String,
}

#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct ResetErrors {
    pub password: Option<&'static str>,
    pub confirm_password: Option<&'static str>,
}

impl ResetErrors {
    pub fn is_empty(&self) -> bool {
        self.password.is_none() && self.confirm_password.is_none()
    }
}

impl ResetForm {
    pub fn validate(&self) -> ResetErrors {
        ResetErrors {
            password: password_error(&self.password),
            confirm_password: confirm_error(&self.password, &self.confirm_password),
        }
    }
}

/// Forgot-password modal check: one email field.
pub fn validate_reset_email(email: &str) -> Option<&'static str> {
    if is_valid_email(email) {
        None
    } else {
        Some("Please enter a valid email")
    }
}
