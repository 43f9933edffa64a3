// SPDX-License-Identifier: MIT OR Apache-2.0

//! Context providers for the application
//!
//! The player session is shared across pages through Yew's
//! `ContextProvider` and mirrored to `localStorage`, so a reload in the
//! lobby or game view keeps the player in their room.

use magic_coach_types::{NICKNAME_MAX_LEN, ROOM_CODE_MAX_LEN};
use serde::{Deserialize, Serialize};
use yew::prelude::*;

/// Who the local player is and which room they joined.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct PlayerSession {
    pub player_id: i64,
    pub nickname: String,
    pub room_code: String,
}

impl PlayerSession {
    pub fn is_in(&self, room_code: &str) -> bool {
        self.room_code == room_code
    }
}

/// Whether this browser should drop its session after `room_code` closed
/// (`room_gone`) or stopped listing the local player (`seat_removed`).
///
/// A session for some other room is never affected by what happens here.
pub fn loses_session(
    session: Option<&PlayerSession>,
    room_code: &str,
    room_gone: bool,
    seat_removed: bool,
) -> bool {
    (room_gone || seat_removed) && session.is_some_and(|s| s.is_in(room_code))
}

/// Type alias used throughout the app when accessing the session context.
///
/// `None` until the player joins a room; set back to `None` on leave.
pub type PlayerSessionCtx = UseStateHandle<Option<PlayerSession>>;

// -----------------------------------------------------------------------------
// Local-storage helpers
// -----------------------------------------------------------------------------

const SESSION_KEY: &str = "mc_player_session";
const NICKNAME_KEY: &str = "mc_nickname";

fn local_storage() -> Option<web_sys::Storage> {
    web_sys::window().and_then(|w| w.local_storage().ok().flatten())
}

/// Read the saved session (if any). A corrupt entry is treated as absent.
pub fn load_session_from_storage() -> Option<PlayerSession> {
    let raw = local_storage()?.get_item(SESSION_KEY).ok().flatten()?;
    match serde_json::from_str(&raw) {
        Ok(session) => Some(session),
        Err(e) => {
            log::warn!("Discarding unreadable player session: {e}");
            None
        }
    }
}

pub fn save_session_to_storage(session: &PlayerSession) {
    let Some(storage) = local_storage() else {
        return;
    };
    match serde_json::to_string(session) {
        Ok(raw) => {
            let _ = storage.set_item(SESSION_KEY, &raw);
            let _ = storage.set_item(NICKNAME_KEY, &session.nickname);
        }
        Err(e) => log::error!("Failed to serialise player session: {e}"),
    }
}

/// Forget the room but keep the nickname for the next join.
pub fn clear_session_from_storage() {
    if let Some(storage) = local_storage() {
        let _ = storage.remove_item(SESSION_KEY);
    }
}

/// Last nickname used on this browser, to pre-fill the join form.
pub fn load_nickname_from_storage() -> Option<String> {
    local_storage()?.get_item(NICKNAME_KEY).ok().flatten()
}

// -----------------------------------------------------------------------------
// Validation helpers
// -----------------------------------------------------------------------------

use once_cell::sync::Lazy;

static ROOM_CODE_RE: Lazy<regex::Regex> =
    Lazy::new(|| regex::Regex::new(r"^[A-Za-z0-9]+$").unwrap());

/// Returns `true` iff the nickname is non-blank and fits the backend column.
pub fn is_valid_nickname(name: &str) -> bool {
    let trimmed = name.trim();
    !trimmed.is_empty() && trimmed.chars().count() <= NICKNAME_MAX_LEN
}

/// Returns `true` iff the room code is 1..=10 ASCII letters or digits.
pub fn is_valid_room_code(code: &str) -> bool {
    code.len() <= ROOM_CODE_MAX_LEN && ROOM_CODE_RE.is_match(code)
}
