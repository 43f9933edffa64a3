// Copyright 2025 Security Union LLC
// Licensed under MIT OR Apache-2.0
//
// Wire-level tests for `GameApiClient`.
//
// Each test mounts a mock backend that only answers when the method, path
// and JSON body match, so a wrong endpoint or field name shows up as a
// failed call rather than a silently decoded default.

#![cfg(not(target_arch = "wasm32"))]

use magic_coach_client::{ApiError, GameApiClient};
use serde_json::json;
use wiremock::matchers::{body_json, method, path};
use wiremock::{Mock, MockServer, ResponseTemplate};

async fn backend() -> (MockServer, GameApiClient) {
    let server = MockServer::start().await;
    let client = GameApiClient::new(&format!("{}/", server.uri()));
    (server, client)
}

fn ok(payload: serde_json::Value) -> ResponseTemplate {
    let mut body = payload;
    body["status"] = json!("ok");
    ResponseTemplate::new(200).set_body_json(body)
}

#[tokio::test]
async fn join_room_posts_form_to_join() {
    let (server, client) = backend().await;
    Mock::given(method("POST"))
        .and(path("/join/"))
        .and(body_json(json!({
            "room_code": "ABC123",
            "nickname": "mika",
            "max_player": 6
        })))
        .respond_with(ok(json!({
            "player_id": 17,
            "room_code": "ABC123",
            "max_player": 6
        })))
        .expect(1)
        .mount(&server)
        .await;

    let joined = client.join_room("ABC123", "mika", 6).await.unwrap();
    assert_eq!(joined.player_id, 17);
    assert_eq!(joined.room_code, "ABC123");
}

#[tokio::test]
async fn get_room_escapes_room_code_in_path() {
    let (server, client) = backend().await;
    Mock::given(method("GET"))
        .and(path("/room/A%20B%2F1/players/"))
        .respond_with(ok(json!({
            "room_code": "A B/1",
            "players": [{"id": 1, "nickname": "ann", "idle": false}],
            "started": false,
            "owner_id": 1,
            "round_time": 20
        })))
        .expect(1)
        .mount(&server)
        .await;

    let state = client.get_room("A B/1").await.unwrap();
    assert_eq!(state.room_code, "A B/1");
    assert!(state.is_owner(1));
}

#[tokio::test]
async fn get_room_maps_missing_room_to_not_found() {
    let (server, client) = backend().await;
    Mock::given(method("GET"))
        .and(path("/room/GONE/players/"))
        .respond_with(
            ResponseTemplate::new(404)
                .set_body_json(json!({"status": "error", "message": "Room not found"})),
        )
        .mount(&server)
        .await;

    let err = client.get_room("GONE").await.unwrap_err();
    assert!(matches!(err, ApiError::NotFound(ref m) if m == "Room not found"));
    assert!(err.is_gone());
}

#[tokio::test]
async fn kick_player_names_the_target() {
    let (server, client) = backend().await;
    Mock::given(method("POST"))
        .and(path("/kick_player/"))
        .and(body_json(json!({"room_code": "ABC123", "target_player_id": 5})))
        .respond_with(ok(json!({})))
        .expect(1)
        .mount(&server)
        .await;

    client.kick_player("ABC123", 5).await.unwrap();
}

#[tokio::test]
async fn kicking_an_active_player_is_rejected() {
    let (server, client) = backend().await;
    Mock::given(method("POST"))
        .and(path("/kick_player/"))
        .respond_with(
            ResponseTemplate::new(403)
                .set_body_json(json!({"status": "error", "message": "Player is active"})),
        )
        .mount(&server)
        .await;

    let err = client.kick_player("ABC123", 5).await.unwrap_err();
    assert!(matches!(err, ApiError::Rejected(ref m) if m == "Player is active"));
}

#[tokio::test]
async fn transfer_owner_sends_both_ids() {
    let (server, client) = backend().await;
    Mock::given(method("POST"))
        .and(path("/transfer_owner/"))
        .and(body_json(json!({
            "room_code": "ABC123",
            "owner_id": 4,
            "new_owner_id": 9
        })))
        .respond_with(ok(json!({})))
        .expect(1)
        .mount(&server)
        .await;

    client.transfer_owner("ABC123", 4, 9).await.unwrap();
}

#[tokio::test]
async fn leave_room_posts_player_id() {
    let (server, client) = backend().await;
    Mock::given(method("POST"))
        .and(path("/leave/"))
        .and(body_json(json!({"player_id": 42})))
        .respond_with(ok(json!({})))
        .expect(1)
        .mount(&server)
        .await;

    client.leave_room(42).await.unwrap();
}

#[tokio::test]
async fn set_room_settings_sends_round_time() {
    let (server, client) = backend().await;
    Mock::given(method("POST"))
        .and(path("/set_room_settings/"))
        .and(body_json(json!({
            "room_code": "ABC123",
            "owner_id": 4,
            "round_time": 45
        })))
        .respond_with(ok(json!({})))
        .expect(1)
        .mount(&server)
        .await;

    client.set_room_settings("ABC123", 4, 45).await.unwrap();
}

#[tokio::test]
async fn delete_all_rooms_returns_backend_message() {
    let (server, client) = backend().await;
    Mock::given(method("POST"))
        .and(path("/admin_delete_all_rooms/"))
        .and(body_json(json!({"admin_password": "hunter2"})))
        .respond_with(ok(json!({"message": "3 rooms deleted"})))
        .expect(1)
        .mount(&server)
        .await;

    let message = client.admin_delete_all_rooms("hunter2").await.unwrap();
    assert_eq!(message.as_deref(), Some("3 rooms deleted"));
}

#[tokio::test]
async fn open_rooms_are_read_without_envelope() {
    let (server, client) = backend().await;
    Mock::given(method("GET"))
        .and(path("/rooms/"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({
            "rooms": [{"room_code": "ABC123", "player_count": 2, "max_player": 6}]
        })))
        .expect(1)
        .mount(&server)
        .await;

    let list = client.list_rooms().await.unwrap();
    assert_eq!(list.rooms.len(), 1);
    assert!(!list.rooms[0].started);
}
