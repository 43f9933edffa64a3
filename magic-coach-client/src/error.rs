/*
 * Copyright 2025 Security Union LLC
 *
 * Licensed under either of
 *
 * * Apache License, Version 2.0
 *   (http://www.apache.org/licenses/LICENSE-2.0)
 * * MIT license
 *   (http://opensource.org/licenses/MIT)
 *
 * at your option.
 */

//! Error types for the room API client.

use thiserror::Error;

/// Errors returned by [`GameApiClient`](crate::GameApiClient) methods.
#[derive(Debug, Error)]
pub enum ApiError {
    /// The backend answered `{"status": "error"}` (room full, wrong admin
    /// password, not the owner, ...).
    #[error("{0}")]
    Rejected(String),

    /// The room or player no longer exists (HTTP 404).
    #[error("Not found: {0}")]
    NotFound(String),

    /// A non-2xx answer whose body is not a status envelope.
    #[error("Server error ({status}): {body}")]
    ServerError { status: u16, body: String },

    /// A network or transport error.
    #[error("Network error: {0}")]
    Network(#[from] reqwest::Error),

    /// A 2xx answer that does not match the expected shape.
    #[error("Unexpected response: {0}")]
    Decode(#[from] serde_json::Error),
}

impl ApiError {
    /// True when the addressed room or player is gone for good.
    pub fn is_gone(&self) -> bool {
        matches!(self, ApiError::NotFound(_) | ApiError::Rejected(_))
    }
}
