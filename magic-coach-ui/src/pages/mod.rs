pub mod admin_lobby;
pub mod game_play;
pub mod join_room;
pub mod not_found;
pub mod room_lobby;
