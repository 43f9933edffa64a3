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

//! Shared API types for the Magic Coach room backend.
//!
//! This crate defines the HTTP contract between the room backend and the
//! browser front end. It carries no transport or UI code.

pub mod requests;
pub mod responses;

pub use responses::Envelope;

/// Fewest players a room needs before the owner can start the game.
pub const MIN_PLAYERS: u32 = 3;

/// Upper bound for a room's `max_player` setting.
pub const MAX_PLAYERS: u32 = 10;

/// `max_player` used when the creator does not pick one.
pub const DEFAULT_MAX_PLAYERS: u32 = 6;

/// Seconds per round for a freshly created room.
pub const DEFAULT_ROUND_TIME_SECS: u32 = 20;

pub const NICKNAME_MAX_LEN: usize = 20;
pub const ROOM_CODE_MAX_LEN: usize = 10;

/// Check a room size chosen at creation time.
pub fn validate_max_player(max_player: u32) -> Result<u32, String> {
    if (MIN_PLAYERS..=MAX_PLAYERS).contains(&max_player) {
        Ok(max_player)
    } else {
        Err(format!(
            "Room size must be between {MIN_PLAYERS} and {MAX_PLAYERS} players"
        ))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn max_player_bounds_are_inclusive() {
        assert_eq!(validate_max_player(MIN_PLAYERS), Ok(3));
        assert_eq!(validate_max_player(MAX_PLAYERS), Ok(10));
        assert_eq!(validate_max_player(DEFAULT_MAX_PLAYERS), Ok(6));
        assert!(validate_max_player(2).is_err());
        assert!(validate_max_player(11).is_err());
    }
}
