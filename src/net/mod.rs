//! Auth REST client: request/response payloads and one helper per endpoint.

pub mod api;
pub mod types;
