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

//! Response types for the room backend.
//!
//! Most endpoints answer with a `status` discriminator and the payload fields
//! flattened next to it:
//! - On success: `{ "status": "ok", "player_id": 7, ... }`
//! - On failure: `{ "status": "error", "message": "..." }`
//!
//! The room listings (`/rooms/`, `/admin_list_rooms/`) return a bare
//! [`RoomList`] without a `status` field.

use serde::{Deserialize, Serialize};

// ---------------------------------------------------------------------------
// Envelope
// ---------------------------------------------------------------------------

/// Status-tagged response envelope.
#[derive(Debug, Serialize, Deserialize, Clone, PartialEq)]
#[serde(tag = "status", rename_all = "lowercase")]
pub enum Envelope<T> {
    Ok(T),
    Error {
        #[serde(default)]
        message: String,
    },
}

impl<T> Envelope<T> {
    /// Unwrap the payload, or hand back the backend's error message.
    pub fn into_result(self) -> Result<T, String> {
        match self {
            Envelope::Ok(payload) => Ok(payload),
            Envelope::Error { message } => Err(message),
        }
    }
}

/// Payload of endpoints that only acknowledge the request.
#[derive(Debug, Serialize, Deserialize, Clone, PartialEq, Default)]
pub struct Ack {
    #[serde(default)]
    pub message: Option<String>,
}

// ---------------------------------------------------------------------------
// Rooms and players
// ---------------------------------------------------------------------------

/// Payload of `POST /join/`.
#[derive(Debug, Serialize, Deserialize, Clone, PartialEq)]
pub struct JoinRoomResponse {
    pub player_id: i64,
    pub room_code: String,
    pub max_player: u32,
}

/// One entry of [`RoomState::players`].
#[derive(Debug, Serialize, Deserialize, Clone, PartialEq)]
pub struct PlayerSummary {
    pub id: i64,
    pub nickname: String,
    /// No heartbeat seen for more than five seconds.
    #[serde(default)]
    pub idle: bool,
}

/// Payload of `GET /room/{room_code}/players/`.
#[derive(Debug, Serialize, Deserialize, Clone, PartialEq)]
pub struct RoomState {
    pub room_code: String,
    pub players: Vec<PlayerSummary>,
    pub started: bool,
    pub owner_id: Option<i64>,
    /// Seconds per round.
    pub round_time: u32,
}

impl RoomState {
    pub fn is_owner(&self, player_id: i64) -> bool {
        self.owner_id == Some(player_id)
    }

    pub fn owner(&self) -> Option<&PlayerSummary> {
        let owner_id = self.owner_id?;
        self.players.iter().find(|p| p.id == owner_id)
    }
}

/// One row of a room listing.
#[derive(Debug, Serialize, Deserialize, Clone, PartialEq)]
pub struct RoomSummary {
    pub room_code: String,
    pub player_count: u32,
    pub max_player: u32,
    /// Only the admin listing reports this; open rooms are never started.
    #[serde(default)]
    pub started: bool,
}

impl RoomSummary {
    pub fn is_full(&self) -> bool {
        self.player_count >= self.max_player
    }
}

/// Payload of `GET /rooms/` and `GET /admin_list_rooms/`.
#[derive(Debug, Serialize, Deserialize, Clone, PartialEq, Default)]
pub struct RoomList {
    pub rooms: Vec<RoomSummary>,
}
