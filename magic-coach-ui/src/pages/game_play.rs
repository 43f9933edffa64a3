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

use yew::prelude::*;
use yew_router::prelude::*;

use crate::components::heartbeat::Heartbeat;
use crate::components::player_list::PlayerList;
use crate::components::round_timer::RoundTimer;
use crate::constants::api_client;
use crate::context::{clear_session_from_storage, loses_session, PlayerSessionCtx};
use crate::hooks::use_room_poll;
use crate::routing::Route;

#[derive(Properties, PartialEq, Clone)]
pub struct GamePlayProps {
    pub room_code: String,
}

#[function_component(GamePlay)]
pub fn game_play(props: &GamePlayProps) -> Html {
    let session_ctx =
        use_context::<PlayerSessionCtx>().expect("Player session context provider is missing");
    let navigator = use_navigator().expect("Navigator context missing");
    let poll = use_room_poll(props.room_code.clone());
    let entered_at = use_memo((), |_| js_sys::Date::now());

    let player_id = (*session_ctx)
        .as_ref()
        .filter(|s| s.is_in(&props.room_code))
        .map(|s| s.player_id);

    let removed = match (player_id, &poll.state) {
        (Some(id), Some(state)) => !state.players.iter().any(|p| p.id == id),
        _ => false,
    };

    {
        let session_ctx = session_ctx.clone();
        let navigator = navigator.clone();
        let lost = loses_session((*session_ctx).as_ref(), &props.room_code, poll.gone, removed);
        use_effect_with(lost, move |&lost| {
            if lost {
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
        Callback::from(move |_: MouseEvent| {
            let session_ctx = session_ctx.clone();
            let navigator = navigator.clone();
            wasm_bindgen_futures::spawn_local(async move {
                if let Some(player_id) = player_id {
                    match api_client() {
                        Ok(client) => {
                            if let Err(e) = client.leave_room(player_id).await {
                                log::warn!("Leave request failed: {e}");
                            }
                        }
                        Err(e) => log::error!("Cannot leave: {e}"),
                    }
                }
                clear_session_from_storage();
                session_ctx.set(None);
                navigator.push(&Route::JoinRoom);
            });
        })
    };

    let body = if poll.gone {
        html! {
            <div class="room-gone">
                <p>{"This game has ended."}</p>
                <Link<Route> to={Route::JoinRoom}>{"Back to the join screen"}</Link<Route>>
            </div>
        }
    } else if let Some(state) = &poll.state {
        html! {
            <>
                <RoundTimer round_time={state.round_time} start_time_ms={*entered_at} />
                if let Some(owner) = state.owner() {
                    <p class="game-owner">{ format!("Hosted by {}", owner.nickname) }</p>
                }
                <PlayerList
                    players={state.players.clone()}
                    owner_id={state.owner_id}
                    self_id={player_id}
                />
                if player_id.is_none() {
                    <p class="spectator-hint">{"You are watching this game."}</p>
                }
            </>
        }
    } else if let Some(err) = &poll.error {
        html! { <p class="error">{ err }</p> }
    } else {
        html! { <p class="loading">{"Loading game..."}</p> }
    };

    html! {
        <div id="game-play" class="game-play-page" data-room-code={props.room_code.clone()}>
            <Heartbeat player_id={player_id} />
            <h1>{ format!("Game {}", props.room_code) }</h1>
            { body }
            <button class="btn-leave" onclick={on_leave}>{"Leave game"}</button>
        </div>
    }
}
