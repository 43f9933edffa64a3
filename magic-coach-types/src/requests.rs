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

//! Request bodies for the room backend.
//!
//! Every mutating endpoint takes a JSON body via `POST`.

use serde::{Deserialize, Serialize};

/// Request body for `POST /join/`.
///
/// Joining an unknown room code creates the room with `max_player` seats and
/// makes the joining player its owner.
#[derive(Debug, Serialize, Deserialize, Clone, PartialEq)]
pub struct JoinRoomRequest {
    pub room_code: String,
    pub nickname: String,
    pub max_player: u32,
}

/// Request body for `POST /leave/` and `POST /heartbeat/`.
#[derive(Debug, Serialize, Deserialize, Clone, PartialEq)]
pub struct PlayerRequest {
    pub player_id: i64,
}

/// Request body for `POST /start/`.
#[derive(Debug, Serialize, Deserialize, Clone, PartialEq)]
pub struct RoomCodeRequest {
    pub room_code: String,
}

/// Request body for `POST /kick_player/`. Only idle players can be kicked.
#[derive(Debug, Serialize, Deserialize, Clone, PartialEq)]
pub struct KickPlayerRequest {
    pub room_code: String,
    pub target_player_id: i64,
}

/// Request body for `POST /transfer_owner/`.
#[derive(Debug, Serialize, Deserialize, Clone, PartialEq)]
pub struct TransferOwnerRequest {
    pub room_code: String,
    /// Must be the current owner, otherwise the backend refuses.
    pub owner_id: i64,
    pub new_owner_id: i64,
}

/// Request body for `POST /set_room_settings/`.
#[derive(Debug, Serialize, Deserialize, Clone, PartialEq)]
pub struct RoomSettingsRequest {
    pub room_code: String,
    pub owner_id: i64,
    /// Seconds per round.
    pub round_time: u32,
}

/// Request body for `POST /admin_delete_room/`.
#[derive(Debug, Serialize, Deserialize, Clone, PartialEq)]
pub struct AdminRoomRequest {
    pub room_code: String,
    pub admin_password: String,
}

/// Request body for `POST /admin_delete_all_rooms/`.
#[derive(Debug, Serialize, Deserialize, Clone, PartialEq)]
pub struct AdminRequest {
    pub admin_password: String,
}
