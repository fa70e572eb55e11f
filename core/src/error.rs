//! Error types for the catalog client and the presentation pipeline.
//!
//! # Design
//! `NotFound` gets a dedicated variant because detail views distinguish
//! "the record does not exist" from "the catalog answered with an unexpected
//! status". It is only produced by single-resource lookups; a 404 on a
//! collection endpoint stays a plain `Transport` error.
//!
//! `RenderError` is kept apart from `ApiError`: render failures are caught by
//! `ErrorBoundary`, fetch failures by the data binding.

use thiserror::Error;

use crate::types::ResourceKind;

/// Errors surfaced by `ResourceClient`, transports and catalog services.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ApiError {
    /// The catalog answered with a status outside 200..=299.
    #[error("could not fetch {path}, received {status}")]
    Transport { status: u16, path: String },

    /// A single-resource lookup answered 404.
    #[error("{kind} {id} not found")]
    NotFound { kind: ResourceKind, id: String },

    /// The response body is not the expected JSON structure.
    #[error("could not decode response from {path}: {message}")]
    Decode { path: String, message: String },

    /// A record carries no `/<digits>/` suffix in its canonical url.
    #[error("resource has no canonical id: {resource}")]
    MalformedResource { resource: String },

    /// No HTTP response was received at all.
    #[error("request to {path} failed: {message}")]
    Network { path: String, message: String },
}

/// Failures raised while rendering already-resolved data.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum RenderError {
    #[error("missing field `{0}`")]
    MissingField(&'static str),

    #[error("{0}")]
    Failed(String),
}
