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

//! Player endpoints: leave, heartbeat, kick, ownership transfer.

use magic_coach_types::requests::{KickPlayerRequest, PlayerRequest, TransferOwnerRequest};
use magic_coach_types::responses::Ack;

use crate::error::ApiError;
use crate::{read_envelope, GameApiClient};

impl GameApiClient {
    /// Leave the room. The backend deletes an emptied room and hands
    /// ownership to the earliest remaining player when the owner leaves.
    ///
    /// Calls `POST /leave/`.
    pub async fn leave_room(&self, player_id: i64) -> Result<(), ApiError> {
        let body = PlayerRequest { player_id };
        let response = self.post("/leave/").json(&body).send().await?;
        read_envelope::<Ack>(response).await.map(|_| ())
    }

    /// Mark the player as present. Players without a heartbeat for a few
    /// seconds are reported idle, after a minute they are removed.
    ///
    /// Calls `POST /heartbeat/`.
    pub async fn heartbeat(&self, player_id: i64) -> Result<(), ApiError> {
        let body = PlayerRequest { player_id };
        let response = self.post("/heartbeat/").json(&body).send().await?;
        read_envelope::<Ack>(response).await.map(|_| ())
    }

    /// Remove an idle player from the room.
    ///
    /// Calls `POST /kick_player/`. Active players cannot be kicked (HTTP 403).
    pub async fn kick_player(&self, room_code: &str, target_player_id: i64) -> Result<(), ApiError> {
        let body = KickPlayerRequest {
            room_code: room_code.to_string(),
            target_player_id,
        };
        let response = self.post("/kick_player/").json(&body).send().await?;
        read_envelope::<Ack>(response).await.map(|_| ())
    }

    /// Hand room ownership to another player. `owner_id` must be the
    /// current owner.
    ///
    /// Calls `POST /transfer_owner/`.
    pub async fn transfer_owner(
        &self,
        room_code: &str,
        owner_id: i64,
        new_owner_id: i64,
    ) -> Result<(), ApiError> {
        let body = TransferOwnerRequest {
            room_code: room_code.to_string(),
            owner_id,
            new_owner_id,
        };
        let response = self.post("/transfer_owner/").json(&body).send().await?;
        read_envelope::<Ack>(response).await.map(|_| ())
    }
}
