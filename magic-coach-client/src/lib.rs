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

//! Cross-platform REST client for the Magic Coach room backend.
//!
//! Works on WASM (browser) and native targets via [`reqwest`].
//!
//! # Example
//!
//! ```no_run
//! use magic_coach_client::GameApiClient;
//!
//! # async fn example() -> Result<(), magic_coach_client::ApiError> {
//! let client = GameApiClient::new("http://localhost:8000");
//! let joined = client.join_room("ABC123", "mika", 6).await?;
//! let room = client.get_room(&joined.room_code).await?;
//! println!("{} players in {}", room.players.len(), room.room_code);
//! # Ok(())
//! # }
//! ```

pub mod admin;
pub mod error;
pub mod players;
pub mod rooms;

pub use error::ApiError;
pub use magic_coach_types;

use magic_coach_types::Envelope;
use reqwest::Client;
use serde::de::DeserializeOwned;

/// A typed REST client for the room backend.
///
/// Every method maps the backend's `{"status": "error"}` answers to
/// [`ApiError::Rejected`] so callers only see typed payloads on success.
#[derive(Debug, Clone)]
pub struct GameApiClient {
    base_url: String,
    http: Client,
}

impl PartialEq for GameApiClient {
    fn eq(&self, other: &Self) -> bool {
        self.base_url == other.base_url
    }
}

impl GameApiClient {
    /// Create a new client pointing at the given backend base URL,
    /// e.g. `"http://localhost:8000"`.
    pub fn new(base_url: &str) -> Self {
        Self {
            base_url: base_url.trim_end_matches('/').to_string(),
            http: Client::new(),
        }
    }

    pub fn base_url(&self) -> &str {
        &self.base_url
    }

    pub(crate) fn get(&self, path: &str) -> reqwest::RequestBuilder {
        log::debug!("GET {path}");
        self.http.get(self.url(path))
    }

    pub(crate) fn post(&self, path: &str) -> reqwest::RequestBuilder {
        log::debug!("POST {path}");
        self.http.post(self.url(path))
    }

    fn url(&self, path: &str) -> String {
        format!("{}{}", self.base_url, path)
    }
}

/// Read a status-tagged body and return its payload.
pub(crate) async fn read_envelope<T: DeserializeOwned>(
    response: reqwest::Response,
) -> Result<T, ApiError> {
    let status = response.status().as_u16();
    let body = response.text().await?;
    decode_envelope(status, &body)
}

/// Read a body that has no `status` field (room listings).
pub(crate) async fn read_plain<T: DeserializeOwned>(
    response: reqwest::Response,
) -> Result<T, ApiError> {
    let status = response.status().as_u16();
    let body = response.text().await?;
    decode_plain(status, &body)
}

/// The backend sends its error envelope with 200, 400, 403 and 404 alike, so
/// the body is decoded before the HTTP status is looked at.
pub(crate) fn decode_envelope<T: DeserializeOwned>(
    status: u16,
    body: &str,
) -> Result<T, ApiError> {
    match serde_json::from_str::<Envelope<T>>(body) {
        Ok(Envelope::Ok(payload)) => Ok(payload),
        Ok(Envelope::Error { message }) if status == 404 => Err(ApiError::NotFound(message)),
        Ok(Envelope::Error { message }) => Err(ApiError::Rejected(message)),
        Err(_) if !is_success(status) => Err(ApiError::ServerError {
            status,
            body: body.to_string(),
        }),
        Err(e) => Err(ApiError::Decode(e)),
    }
}

pub(crate) fn decode_plain<T: DeserializeOwned>(status: u16, body: &str) -> Result<T, ApiError> {
    if !is_success(status) {
        return Err(ApiError::ServerError {
            status,
            body: body.to_string(),
        });
    }
    Ok(serde_json::from_str(body)?)
}

fn is_success(status: u16) -> bool {
    (200..300).contains(&status)
}
