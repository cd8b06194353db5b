//! REST helpers for the external auth backend.
//!
//! Client-side (hydrate): real HTTP calls via `gloo-net`.
//! Server-side (SSR): stubs returning an error, since auth only happens in
//! the browser.
//!
//! ERROR HANDLING
//! ==============
//! Every helper returns `Result<_, String>` where the error is already
//! display-ready banner text: the server's `error` field when the body has
//! one, otherwise a per-endpoint fallback. Network unavailability and
//! server rejection collapse to the same fallback on purpose. Exactly one
//! request per call, with no retry and no timeout.

use super::types::AuthResponse;

pub const LOGIN_FALLBACK: &str = "Login failed. Please try again.";
pub const SIGNUP_FALLBACK: &str = "Signup failed. Please try again.";
pub const FORGOT_FALLBACK: &str = "Failed to send reset email";
pub const RESET_FALLBACK: &str = "Failed to reset password";

#[cfg(feature = "hydrate")]
async fn post_json<B, T>(path: &str, body: &B, fallback: &str) -> Result<T, String>
where
    B: serde::Serialize,
    T: serde::de::DeserializeOwned,
{
    let resp = gloo_net::http::Request::post(path)
        .json(body)
        .map_err(|_| fallback.to_owned())?
        .send()
        .await
        .map_err(|_| fallback.to_owned())?;

    if resp.ok() {
        resp.json::<T>().await.map_err(|_| fallback.to_owned())
    } else {
        log::warn!("POST {path} failed with status {}", resp.status());
        let body = resp.text().await.unwrap_or_default();
        Err(super::types::error_message(&body, fallback))
    }
}

/// `POST /api/auth/login`.
pub async fn login(email: &str, password: &str) -> Result<AuthResponse, String> {
    #[cfg(feature = "hydrate")]
    {
        let body = super::types::LoginRequest { email, password };
        post_json("/api/auth/login", &body, LOGIN_FALLBACK).await
    }
    #[cfg(not(feature = "hydrate"))]
    {
        let _ = (email, password);
        Err("not available on server".to_owned())
    }
}

/// `POST /api/auth/signup`.
pub async fn signup(
    email: &str,
    username: &str,
    password: &str,
    confirm_password: &str,
) -> Result<AuthResponse, String> {
    #[cfg(feature = "hydrate")]
    {
        let body = super::types::SignupRequest {
            email,
            username,
            password,
            confirm_password,
        };
        post_json("/api/auth/signup", &body, SIGNUP_FALLBACK).await
    }
    #[cfg(not(feature = "hydrate"))]
    {
        let _ = (email, username, password, confirm_password);
        Err("not available on server".to_owned())
    }
}

/// `POST /api/auth/forgot-password`. Returns the server's confirmation
/// message.
pub async fn forgot_password(email: &str) -> Result<String, String> {
    #[cfg(feature = "hydrate")]
    {
        let body = super::types::ForgotPasswordRequest { email };
        let resp: super::types::MessageResponse =
            post_json("/api/auth/forgot-password", &body, FORGOT_FALLBACK).await?;
        Ok(resp.message)
    }
    #[cfg(not(feature = "hydrate"))]
    {
        let _ = email;
        Err("not available on server".to_owned())
    }
}

/// `POST /api/auth/reset-password`. Returns the server's confirmation
/// message.
pub async fn reset_password(
    token: &str,
    password: &str,
    confirm_password: &str,
) -> Result<String, String> {
    #[cfg(feature = "hydrate")]
    {
        let body = super::types::ResetPasswordRequest {
            token,
            password,
            confirm_password,
        };
        let resp: super::types::MessageResponse =
            post_json("/api/auth/reset-password", &body, RESET_FALLBACK).await?;
        Ok(resp.message)
    }
    #[cfg(not(feature = "hydrate"))]
    {
        let _ = (token, password, confirm_password);
        Err("not available on server".to_owned())
    }
}
