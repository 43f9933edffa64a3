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

//! Room lobby: who is here, owner controls, and the hand-off to the game.

use std::future::Future;

use magic_coach_client::{ApiError, GameApiClient};
use magic_coach_types::responses::RoomState;
use magic_coach_types::MIN_PLAYERS;
use web_sys::HtmlInputElement;
use yew::prelude::*;
use yew_router::prelude::*;

use crate::components::heartbeat::Heartbeat;
use crate::components::player_list::PlayerList;
use crate::constants::api_client;
use crate::context::{clear_session_from_storage, loses_session, PlayerSessionCtx};
use crate::hooks::use_room_poll;
use crate::routing::Route;

/// Accepted round length, in seconds.
pub const ROUND_TIME_RANGE: std::ops::RangeInclusive<u32> = 5..=300;

#[derive(Properties, PartialEq, Clone)]
pub struct RoomLobbyProps {
    pub room_code: String,
}

/// What the lobby should show for the local player.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Seat {
    /// No session for this room on this browser.
    Visitor,
    /// Joined, and still listed by the backend.
    Seated { player_id: i64, is_owner: bool },
    /// Joined earlier but no longer listed (kicked or timed out).
    Removed,
}

impl Seat {
    pub fn of(session_player: Option<i64>, state: Option<&RoomState>) -> Self {
        let Some(player_id) = session_player else {
            return Seat::Visitor;
        };
        match state {
            Some(state) if !state.players.iter().any(|p| p.id == player_id) => Seat::Removed,
            Some(state) => Seat::Seated {
                player_id,
                is_owner: state.is_owner(player_id),
            },
            // Not loaded yet; assume the seat until the backend says otherwise.
            None => Seat::Seated {
                player_id,
                is_owner: false,
            },
        }
    }
}

pub fn can_start(state: &RoomState) -> bool {
    !state.started && state.players.len() as u32 >= MIN_PLAYERS
}

pub fn parse_round_time(raw: &str) -> Result<u32, String> {
    match raw.trim().parse::<u32>() {
        Ok(secs) if ROUND_TIME_RANGE.contains(&secs) => Ok(secs),
        _ => Err(format!(
            "Round time must be {} to {} seconds",
            ROUND_TIME_RANGE.start(),
            ROUND_TIME_RANGE.end()
        )),
    }
}

/// Run an owner action against the backend and surface its error, if any.
fn run_action<F, Fut>(action_error: UseStateHandle<Option<String>>, action: F)
where
    F: FnOnce(GameApiClient) -> Fut + 'static,
    Fut: Future<Output = Result<(), ApiError>> + 'static,
{
    wasm_bindgen_futures::spawn_local(async move {
        let result = match api_client() {
            Ok(client) => action(client).await.map_err(|e| e.to_string()),
            Err(e) => Err(e),
        };
        match result {
            Ok(()) => action_error.set(None),
            Err(message) => {
                log::warn!("Lobby action failed: {message}");
                action_error.set(Some(message));
            }
        }
    });
}

#[function_component(RoomLobby)]
pub fn room_lobby(props: &RoomLobbyProps) -> Html {
    let session_ctx =
        use_context::<PlayerSessionCtx>().expect("Player session context provider is missing");
    let navigator = use_navigator().expect("Navigator context missing");
    let poll = use_room_poll(props.room_code.clone());
    let action_error = use_state(|| None as Option<String>);
    let round_time_input = use_state(String::new);

    let session_player = (*session_ctx)
        .as_ref()
        .filter(|s| s.is_in(&props.room_code))
        .map(|s| s.player_id);
    let seat = Seat::of(session_player, poll.state.as_ref());
    let started = poll.state.as_ref().is_some_and(|s| s.started);

    // Hand-off to the game view once the owner starts.
    {
        let navigator = navigator.clone();
        let room_code = props.room_code.clone();
        let seated = matches!(seat, Seat::Seated { .. });
        use_effect_with((started, seated), move |&(started, seated)| {
            if started && seated {
                log::info!("Room {room_code} started, entering the game");
                navigator.push(&Route::GamePlay { room_code });
            }
            || ()
        });
    }

    // Closed room or lost seat: forget this room's session and go home.
    {
        let session_ctx = session_ctx.clone();
        let navigator = navigator.clone();
        let room_code = props.room_code.clone();
        let lost = loses_session(
            (*session_ctx).as_ref(),
            &props.room_code,
            poll.gone,
            seat == Seat::Removed,
        );
        use_effect_with(lost, move |&lost| {
            if lost {
                log::info!("Lost the seat in room {room_code}, back to the join screen");
                clear_session_from_storage();
                session_ctx.set(None);
                navigator.push(&Route::JoinRoom);
            }
            || ()
        });
    }

    let on_leave = {
        let session_ctx = session_ctx.clone();
        let navigator = navigator.clone();
        let action_error = action_error.clone();
        Callback::from(move |_: MouseEvent| {
            let Some(player_id) = session_player else {
                navigator.push(&Route::JoinRoom);
                return;
            };
            let session_ctx = session_ctx.clone();
            let navigator = navigator.clone();
            let action_error = action_error.clone();
            wasm_bindgen_futures::spawn_local(async move {
                let result = match api_client() {
                    Ok(client) => client.leave_room(player_id).await.map_err(|e| e.to_string()),
                    Err(e) => Err(e),
                };
                if let Err(message) = result {
                    // Leaving locally anyway; the backend drops silent players.
                    log::warn!("Leave request failed: {message}");
                }
                clear_session_from_storage();
                session_ctx.set(None);
                action_error.set(None);
                navigator.push(&Route::JoinRoom);
            });
        })
    };

    let on_start = {
        let action_error = action_error.clone();
        let room_code = props.room_code.clone();
        Callback::from(move |_: MouseEvent| {
            let room_code = room_code.clone();
            run_action(action_error.clone(), move |client| async move {
                client.start_game(&room_code).await
            });
        })
    };

    let owner_id = match seat {
        Seat::Seated {
            player_id,
            is_owner: true,
        } => Some(player_id),
        _ => None,
    };

    let on_kick = owner_id.map(|_| {
        let action_error = action_error.clone();
        let room_code = props.room_code.clone();
        Callback::from(move |target: i64| {
            let room_code = room_code.clone();
            run_action(action_error.clone(), move |client| async move {
                client.kick_player(&room_code, target).await
            });
        })
    });

    let on_transfer = owner_id.map(|owner_id| {
        let action_error = action_error.clone();
        let room_code = props.room_code.clone();
        Callback::from(move |target: i64| {
            let room_code = room_code.clone();
            run_action(action_error.clone(), move |client| async move {
                client.transfer_owner(&room_code, owner_id, target).await
            });
        })
    });

    let on_round_time_input = {
        let round_time_input = round_time_input.clone();
        Callback::from(move |e: InputEvent| {
            let input: HtmlInputElement = e.target_unchecked_into();
            round_time_input.set(input.value());
        })
    };

    let on_round_time_submit = {
        let action_error = action_error.clone();
        let round_time_input = round_time_input.clone();
        let room_code = props.room_code.clone();
        Callback::from(move |e: SubmitEvent| {
            e.prevent_default();
            let Some(owner_id) = owner_id else {
                return;
            };
            let round_time = match parse_round_time(&round_time_input) {
                Ok(secs) => secs,
                Err(message) => {
                    action_error.set(Some(message));
                    return;
                }
            };
            let room_code = room_code.clone();
            run_action(action_error.clone(), move |client| async move {
                client
                    .set_room_settings(&room_code, owner_id, round_time)
                    .await
            });
        })
    };

    let body = match (&seat, poll.state.as_ref()) {
        _ if poll.gone => html! {
            <div class="room-gone">
                <p>{"This room has been closed."}</p>
                <Link<Route> to={Route::JoinRoom}>{"Back to the join screen"}</Link<Route>>
            </div>
        },
        (Seat::Visitor, _) => html! {
            <div class="join-prompt">
                <p>{ format!("You have not joined room {} yet.", props.room_code) }</p>
                <Link<Route> to={Route::JoinRoom}>{"Go to the join screen"}</Link<Route>>
            </div>
        },
        (Seat::Removed, _) => html! {
            <div class="removed-notice">
                <p>{"You are no longer in this room."}</p>
                <Link<Route> to={Route::JoinRoom}>{"Join another room"}</Link<Route>>
            </div>
        },
        (Seat::Seated { .. }, None) => html! { <p class="loading">{"Loading room..."}</p> },
        (Seat::Seated { player_id, is_owner }, Some(state)) => {
            let owner_controls = if *is_owner {
                html! {
                    <div class="owner-controls">
                        <button
                            class="btn-start"
                            disabled={!can_start(state)}
                            onclick={on_start}
                        >
                            {"Start game"}
                        </button>
                        if !can_start(state) {
                            <p class="start-hint">
                                { format!("At least {MIN_PLAYERS} players are needed to start.") }
                            </p>
                        }
                        <form class="round-time-form" onsubmit={on_round_time_submit}>
                            <input
                                class="round-time-input"
                                type="number"
                                min={ROUND_TIME_RANGE.start().to_string()}
                                max={ROUND_TIME_RANGE.end().to_string()}
                                placeholder={state.round_time.to_string()}
                                oninput={on_round_time_input}
                                value={(*round_time_input).clone()}
                            />
                            <button type="submit">{"Set round time"}</button>
                        </form>
                    </div>
                }
            } else {
                html! { <p class="waiting-hint">{"Waiting for the owner to start the game."}</p> }
            };

            html! {
                <>
                    <Heartbeat player_id={Some(*player_id)} />
                    <p class="room-settings">
                        { format!("Round time: {} s", state.round_time) }
                    </p>
                    <PlayerList
                        players={state.players.clone()}
                        owner_id={state.owner_id}
                        self_id={Some(*player_id)}
                        on_kick={on_kick}
                        on_transfer={on_transfer}
                    />
                    { owner_controls }
                    <button class="btn-leave" onclick={on_leave}>{"Leave room"}</button>
                </>
            }
        }
    };

    let error_html = match (*action_error).as_ref().or(poll.error.as_ref()) {
        Some(err) if !poll.gone => html! { <p class="error">{ err }</p> },
        _ => html! {},
    };

    html! {
        <div id="room-lobby" class="room-lobby-page" data-room-code={props.room_code.clone()}>
            <h1>{ format!("Room {}", props.room_code) }</h1>
            { error_html }
            { body }
        </div>
    }
}
