// SPDX-License-Identifier: MIT OR Apache-2.0

//! Polling hooks shared by the lobby and the game view.

use std::rc::Rc;

use gloo_timers::callback::Interval;
use magic_coach_types::responses::RoomState;
use wasm_bindgen_futures::spawn_local;
use yew::prelude::*;

use crate::constants::{api_client, heartbeat_interval_ms, poll_interval_ms};

// -----------------------------------------------------------------------------
// Heartbeat
// -----------------------------------------------------------------------------

/// Keep `player_id` marked as present while the calling component is
/// mounted. `None` sends nothing.
#[hook]
pub fn use_heartbeat(player_id: Option<i64>) {
    use_effect_with(player_id, move |player_id| {
        let interval = (*player_id).map(|player_id| {
            send_heartbeat(player_id);
            Interval::new(heartbeat_interval_ms(), move || send_heartbeat(player_id))
        });

        move || drop(interval)
    });
}

fn send_heartbeat(player_id: i64) {
    spawn_local(async move {
        let client = match api_client() {
            Ok(client) => client,
            Err(e) => {
                log::error!("Heartbeat skipped: {e}");
                return;
            }
        };
        if let Err(e) = client.heartbeat(player_id).await {
            log::warn!("Heartbeat for player {player_id} failed: {e}");
        }
    });
}

// -----------------------------------------------------------------------------
// Room state polling
// -----------------------------------------------------------------------------

/// Latest known state of a room.
#[derive(Debug, Clone, PartialEq, Default)]
pub struct RoomPoll {
    pub state: Option<RoomState>,
    pub error: Option<String>,
    /// The backend reported the room as closed or unknown.
    pub gone: bool,
}

impl RoomPoll {
    pub fn is_loading(&self) -> bool {
        self.state.is_none() && self.error.is_none()
    }
}

pub enum RoomPollAction {
    Loaded(RoomState),
    /// Transient failure, the last known state is kept.
    Failed(String),
    Gone(String),
}

impl Reducible for RoomPoll {
    type Action = RoomPollAction;

    fn reduce(self: Rc<Self>, action: Self::Action) -> Rc<Self> {
        match action {
            RoomPollAction::Loaded(state) => RoomPoll {
                state: Some(state),
                error: None,
                gone: false,
            },
            RoomPollAction::Failed(error) => RoomPoll {
                state: self.state.clone(),
                error: Some(error),
                gone: self.gone,
            },
            RoomPollAction::Gone(error) => RoomPoll {
                state: None,
                error: Some(error),
                gone: true,
            },
        }
        .into()
    }
}

/// Fetch `room_code` now and then every poll interval until unmount.
#[hook]
pub fn use_room_poll(room_code: String) -> RoomPoll {
    let poll = use_reducer(RoomPoll::default);

    {
        let dispatcher = poll.dispatcher();
        use_effect_with(room_code, move |room_code| {
            let fetch = {
                let room_code = room_code.clone();
                move || fetch_room(room_code.clone(), dispatcher.clone())
            };
            fetch();
            let interval = Interval::new(poll_interval_ms(), fetch);

            move || drop(interval)
        });
    }

    (*poll).clone()
}

fn fetch_room(room_code: String, dispatcher: UseReducerDispatcher<RoomPoll>) {
    spawn_local(async move {
        let client = match api_client() {
            Ok(client) => client,
            Err(e) => {
                dispatcher.dispatch(RoomPollAction::Failed(e));
                return;
            }
        };
        match client.get_room(&room_code).await {
            Ok(state) => dispatcher.dispatch(RoomPollAction::Loaded(state)),
            Err(e) if e.is_gone() => {
                log::info!("Room {room_code} is gone: {e}");
                dispatcher.dispatch(RoomPollAction::Gone(e.to_string()));
            }
            Err(e) => {
                log::warn!("Polling room {room_code} failed: {e}");
                dispatcher.dispatch(RoomPollAction::Failed(e.to_string()));
            }
        }
    });
}
