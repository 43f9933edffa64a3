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

//! Room endpoints: join, state, start, settings, open-room listing.

use magic_coach_types::requests::{JoinRoomRequest, RoomCodeRequest, RoomSettingsRequest};
use magic_coach_types::responses::{Ack, JoinRoomResponse, RoomList, RoomState};

use crate::error::ApiError;
use crate::{read_envelope, read_plain, GameApiClient};

impl GameApiClient {
    /// Join a room. An unknown room code creates the room with
    /// `max_player` seats and the joining player as owner.
    ///
    /// Calls `POST /join/`.
    ///
    /// Rejected when the game already started, the nickname is taken in
    /// that room, or the room is full.
    pub async fn join_room(
        &self,
        room_code: &str,
        nickname: &str,
        max_player: u32,
    ) -> Result<JoinRoomResponse, ApiError> {
        let body = JoinRoomRequest {
            room_code: room_code.to_string(),
            nickname: nickname.to_string(),
            max_player,
        };
        let response = self.post("/join/").json(&body).send().await?;
        read_envelope(response).await
    }

    /// Current players, owner and settings of a room. This is the polling
    /// endpoint for the lobby and the game view.
    ///
    /// Calls `GET /room/{room_code}/players/`.
    pub async fn get_room(&self, room_code: &str) -> Result<RoomState, ApiError> {
        let path = format!("/room/{}/players/", urlencoding::encode(room_code));
        let response = self.get(&path).send().await?;
        read_envelope(response).await
    }

    /// Start the game. Needs at least three players in the room.
    ///
    /// Calls `POST /start/`.
    pub async fn start_game(&self, room_code: &str) -> Result<(), ApiError> {
        let body = RoomCodeRequest {
            room_code: room_code.to_string(),
        };
        let response = self.post("/start/").json(&body).send().await?;
        read_envelope::<Ack>(response).await.map(|_| ())
    }

    /// Change the round length. Owner only.
    ///
    /// Calls `POST /set_room_settings/`.
    pub async fn set_room_settings(
        &self,
        room_code: &str,
        owner_id: i64,
        round_time: u32,
    ) -> Result<(), ApiError> {
        let body = RoomSettingsRequest {
            room_code: room_code.to_string(),
            owner_id,
            round_time,
        };
        let response = self.post("/set_room_settings/").json(&body).send().await?;
        read_envelope::<Ack>(response).await.map(|_| ())
    }

    /// Rooms that have not started yet.
    ///
    /// Calls `GET /rooms/`.
    pub async fn list_rooms(&self) -> Result<RoomList, ApiError> {
        let response = self.get("/rooms/").send().await?;
        read_plain(response).await
    }
}
