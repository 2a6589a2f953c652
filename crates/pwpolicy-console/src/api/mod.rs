//! JSON API over the codec, the catalog, and realm policies.
//!
//! - `GET  /v1/server-info/password-policies`
//! - `GET  /v1/realms`
//! - `GET  /v1/realms/:realm/password-policy`
//! - `PUT  /v1/realms/:realm/password-policy`
//! - `POST /v1/password-policy/parse`
//! - `POST /v1/password-policy/serialize`

pub mod error;
pub mod handlers;

pub use error::ApiError;
