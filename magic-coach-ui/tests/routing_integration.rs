// Copyright 2025 Security Union LLC
// Licensed under MIT OR Apache-2.0
//
// Integration tests for the route table.
//
// Each test points the browser history at a concrete URL, renders the real
// `App` (session context + BrowserRouter + Switch) and checks that the page
// bound to that path is on screen. Parameterised routes must hand the
// literal path segment to the page, which echoes it in `data-room-code`.

#![cfg(all(target_arch = "wasm32", not(target_os = "wasi")))]

mod support;

use std::time::Duration;

use support::{
    cleanup, clear_stored_session, create_mount_point, inject_app_config, navigate_to,
    remove_app_config, text_of,
};
use wasm_bindgen_test::*;
use yew::platform::time::sleep;

use magic_coach_ui::app::App;

wasm_bindgen_test::wasm_bindgen_test_configure!(run_in_browser);

/// Render `App` at `path` and hand the mount point to `check`.
async fn render_at(path: &str, check: impl FnOnce(&web_sys::Element)) {
    inject_app_config();
    clear_stored_session();
    let previous = navigate_to(path);

    let mount = create_mount_point();
    let handle = yew::Renderer::<App>::with_root(mount.clone()).render();
    sleep(Duration::ZERO).await;

    check(&mount);

    handle.destroy();
    cleanup(&mount);
    navigate_to(&previous);
    remove_app_config();
}

#[wasm_bindgen_test]
async fn root_renders_join_screen() {
    render_at("/", |mount| {
        assert!(
            mount.query_selector("#join-room").unwrap().is_some(),
            "join screen should be mounted at /"
        );
        assert!(
            mount.query_selector(".join-form").unwrap().is_some(),
            "join form should be present"
        );
        let admin = mount
            .query_selector("a.admin-link")
            .unwrap()
            .expect("admin lobby link");
        assert_eq!(admin.get_attribute("href").as_deref(), Some("/admin-lobby"));
    })
    .await;
}

#[wasm_bindgen_test]
async fn room_path_forwards_room_code_to_lobby() {
    render_at("/room/ABC123", |mount| {
        let lobby = mount
            .query_selector("#room-lobby")
            .unwrap()
            .expect("room lobby should be mounted");
        assert_eq!(lobby.get_attribute("data-room-code").as_deref(), Some("ABC123"));
        assert_eq!(text_of(mount, "#room-lobby h1").as_deref(), Some("Room ABC123"));
        // No session stored, so the visitor is sent to the join screen.
        assert!(mount.query_selector(".join-prompt").unwrap().is_some());
    })
    .await;
}

#[wasm_bindgen_test]
async fn game_path_forwards_room_code_to_game_view() {
    render_at("/game/XYZ9", |mount| {
        let game = mount
            .query_selector("#game-play")
            .unwrap()
            .expect("game view should be mounted");
        assert_eq!(game.get_attribute("data-room-code").as_deref(), Some("XYZ9"));
        assert_eq!(text_of(mount, "#game-play h1").as_deref(), Some("Game XYZ9"));
    })
    .await;
}

#[wasm_bindgen_test]
async fn admin_path_renders_admin_lobby() {
    render_at("/admin-lobby", |mount| {
        assert!(mount.query_selector("#admin-lobby").unwrap().is_some());
        assert!(mount
            .query_selector("input.admin-password-input")
            .unwrap()
            .is_some());
        assert!(mount.query_selector("#join-room").unwrap().is_none());
    })
    .await;
}

#[wasm_bindgen_test]
async fn unknown_path_renders_not_found() {
    render_at("/no-such-page", |mount| {
        assert!(mount.query_selector("#not-found").unwrap().is_some());
        assert_eq!(text_of(mount, "#not-found h1").as_deref(), Some("404"));
    })
    .await;
}
