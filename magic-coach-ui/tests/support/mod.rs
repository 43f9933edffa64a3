// Copyright 2025 Security Union LLC
// Licensed under MIT OR Apache-2.0
//
// Shared test harness for magic-coach-ui component tests.
//
// Provides mount/cleanup helpers, runtime config injection, session
// seeding and history manipulation so that individual test files stay
// focused on assertions rather than boilerplate.
//
// Each test file that does `mod support;` compiles its own copy, so not every
// function is used in every compilation unit.
#![allow(dead_code)]

use wasm_bindgen::JsValue;

// ---------------------------------------------------------------------------
// DOM helpers
// ---------------------------------------------------------------------------

/// Create a fresh `<div>`, attach it to `<body>`, and return it.
pub fn create_mount_point() -> web_sys::Element {
    let document = gloo_utils::document();
    let div = document.create_element("div").unwrap();
    document.body().unwrap().append_child(&div).unwrap();
    div
}

/// Remove the mount-point from `<body>` so subsequent tests start clean.
pub fn cleanup(mount: &web_sys::Element) {
    gloo_utils::document()
        .body()
        .unwrap()
        .remove_child(mount)
        .ok();
}

// ---------------------------------------------------------------------------
// Runtime config injection
// ---------------------------------------------------------------------------

/// Inject a `window.__APP_CONFIG` pointing at an unreachable backend, so
/// pages render their offline state without a server.
pub fn inject_app_config() {
    let config = js_sys::Object::new();
    let set = |key: &str, val: &JsValue| {
        js_sys::Reflect::set(&config, &key.into(), val).unwrap();
    };
    set("apiBaseUrl", &"http://test:8000".into());
    set("pollIntervalMs", &JsValue::from(60_000));
    set("heartbeatIntervalMs", &JsValue::from(60_000));
    set("debugEnabled", &"false".into());

    let frozen = js_sys::Object::freeze(&config);
    let window = gloo_utils::window();
    js_sys::Reflect::set(&window, &"__APP_CONFIG".into(), &frozen).unwrap();
}

/// Remove `window.__APP_CONFIG` so tests don't leak state.
pub fn remove_app_config() {
    let window = gloo_utils::window();
    let _ = js_sys::Reflect::delete_property(&window.into(), &"__APP_CONFIG".into());
}

// ---------------------------------------------------------------------------
// Session and history
// ---------------------------------------------------------------------------

/// Make sure no player session from an earlier test is restored.
pub fn clear_stored_session() {
    magic_coach_ui::context::clear_session_from_storage();
}

/// Point the browser at `path` without reloading, as a router link would.
/// Returns the previous path so the test can restore it.
pub fn navigate_to(path: &str) -> String {
    let window = gloo_utils::window();
    let previous = window.location().pathname().unwrap_or_else(|_| "/".into());
    window
        .history()
        .unwrap()
        .push_state_with_url(&JsValue::NULL, "", Some(path))
        .unwrap();
    previous
}

/// Text content of the first element matching `selector`, if any.
pub fn text_of(mount: &web_sys::Element, selector: &str) -> Option<String> {
    mount
        .query_selector(selector)
        .unwrap()
        .and_then(|el| el.text_content())
}

/// Persist a session as if the player had joined `room_code` earlier.
pub fn store_session(player_id: i64, nickname: &str, room_code: &str) {
    magic_coach_ui::context::save_session_to_storage(&magic_coach_ui::context::PlayerSession {
        player_id,
        nickname: nickname.to_string(),
        room_code: room_code.to_string(),
    });
}
