//! Routed pages.

pub mod about;
pub mod contact;
pub mod history;
pub mod home;
pub mod login;
pub mod reset_password;
pub mod signup;
