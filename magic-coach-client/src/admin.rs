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

//! Admin endpoints. Deletions are guarded by the backend's admin password.

use magic_coach_types::requests::{AdminRequest, AdminRoomRequest};
use magic_coach_types::responses::{Ack, RoomList};

use crate::error::ApiError;
use crate::{read_envelope, read_plain, GameApiClient};

impl GameApiClient {
    /// Every room, started or not, newest first.
    ///
    /// Calls `GET /admin_list_rooms/`.
    pub async fn admin_list_rooms(&self) -> Result<RoomList, ApiError> {
        let response = self.get("/admin_list_rooms/").send().await?;
        read_plain(response).await
    }

    /// Calls `POST /admin_delete_room/`.
    pub async fn admin_delete_room(
        &self,
        room_code: &str,
        admin_password: &str,
    ) -> Result<(), ApiError> {
        let body = AdminRoomRequest {
            room_code: room_code.to_string(),
            admin_password: admin_password.to_string(),
        };
        let response = self.post("/admin_delete_room/").json(&body).send().await?;
        read_envelope::<Ack>(response).await.map(|_| ())
    }

    /// Delete every room and, with them, every player.
    ///
    /// Calls `POST /admin_delete_all_rooms/`. Returns the backend's
    /// confirmation message when it sends one.
    pub async fn admin_delete_all_rooms(
        &self,
        admin_password: &str,
    ) -> Result<Option<String>, ApiError> {
        let body = AdminRequest {
            admin_password: admin_password.to_string(),
        };
        let response = self
            .post("/admin_delete_all_rooms/")
            .json(&body)
            .send()
            .await?;
        read_envelope::<Ack>(response).await.map(|ack| ack.message)
    }
}
