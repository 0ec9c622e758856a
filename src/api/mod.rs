//! Catalog API module
//!
//! This module handles:
//! - HTTP access to the catalog endpoints (client.rs)
//! - Locating lists and records in unknown envelopes (normalize.rs)
//! - Resolving canonical fields from inconsistent records (fields.rs)

pub mod client;
pub mod fields;
pub mod normalize;

pub use client::CatalogClient;

/// Any failure to obtain a usable JSON body
///
/// Cloneable so it can travel inside iced messages.
#[derive(Debug, Clone, PartialEq, thiserror::Error)]
pub enum FetchError {
    #[error("invalid request URL: {0}")]
    Url(String),
    #[error("request failed: {0}")]
    Network(String),
    #[error("server responded with status {0}")]
    Status(u16),
    #[error("response was not valid JSON: {0}")]
    Decode(String),
}

impl From<reqwest::Error> for FetchError {
    fn from(err: reqwest::Error) -> Self {
        if let Some(status) = err.status() {
            FetchError::Status(status.as_u16())
        } else if err.is_decode() {
            FetchError::Decode(err.to_string())
        } else {
            FetchError::Network(err.to_string())
        }
    }
}
