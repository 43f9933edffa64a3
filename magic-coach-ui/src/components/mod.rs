pub mod heartbeat;
pub mod player_list;
pub mod room_table;
pub mod round_timer;
