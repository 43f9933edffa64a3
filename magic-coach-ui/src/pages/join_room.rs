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

//! Landing page: pick a nickname and a room code, or pick an open room.

use magic_coach_types::responses::RoomSummary;
use magic_coach_types::{validate_max_player, DEFAULT_MAX_PLAYERS, MAX_PLAYERS, MIN_PLAYERS};
use web_sys::{HtmlInputElement, HtmlSelectElement};
use yew::prelude::*;
use yew_router::prelude::*;

use crate::components::room_table::RoomTable;
use crate::constants::api_client;
use crate::context::{
    clear_session_from_storage, is_valid_nickname, is_valid_room_code, load_nickname_from_storage,
    save_session_to_storage, PlayerSession, PlayerSessionCtx,
};
use crate::routing::{Route, ADMIN_LOBBY_ROUTE_NAME};

/// Validated join form, ready to send.
#[derive(Debug, Clone, PartialEq)]
pub struct JoinForm {
    pub nickname: String,
    pub room_code: String,
    pub max_player: u32,
}

impl JoinForm {
    pub fn parse(nickname: &str, room_code: &str, max_player: u32) -> Result<Self, String> {
        let nickname = nickname.trim();
        let room_code = room_code.trim();
        if !is_valid_nickname(nickname) {
            return Err("Please enter a nickname (up to 20 characters).".to_string());
        }
        if !is_valid_room_code(room_code) {
            return Err("Room codes are 1-10 letters or digits.".to_string());
        }
        let max_player = validate_max_player(max_player)?;
        Ok(Self {
            nickname: nickname.to_string(),
            room_code: room_code.to_string(),
            max_player,
        })
    }
}

/// What submitting the form does, given the seat this browser already holds.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum JoinPlan {
    /// Already seated in the requested room; just go back to its lobby.
    Resume,
    /// Join, first leaving the room of `release` if set.
    Join { release: Option<i64> },
}

impl JoinPlan {
    pub fn for_session(session: Option<&PlayerSession>, room_code: &str) -> Self {
        match session {
            Some(session) if session.is_in(room_code) => JoinPlan::Resume,
            Some(session) => JoinPlan::Join {
                release: Some(session.player_id),
            },
            None => JoinPlan::Join { release: None },
        }
    }
}

#[function_component(JoinRoom)]
pub fn join_room() -> Html {
    let session_ctx =
        use_context::<PlayerSessionCtx>().expect("Player session context provider is missing");
    let navigator = use_navigator().expect("Navigator context missing");

    let nickname = use_state(|| load_nickname_from_storage().unwrap_or_default());
    let room_code = use_state(String::new);
    let max_player = use_state(|| DEFAULT_MAX_PLAYERS);
    let error_state = use_state(|| None as Option<String>);
    let busy = use_state(|| false);
    let open_rooms = use_state(Vec::<RoomSummary>::new);

    // Open rooms, fetched once on mount.
    {
        let open_rooms = open_rooms.clone();
        use_effect_with((), move |_| {
            wasm_bindgen_futures::spawn_local(async move {
                let client = match api_client() {
                    Ok(client) => client,
                    Err(e) => {
                        log::error!("Cannot list rooms: {e}");
                        return;
                    }
                };
                match client.list_rooms().await {
                    Ok(list) => open_rooms.set(list.rooms),
                    Err(e) => log::warn!("Listing open rooms failed: {e}"),
                }
            });
            || ()
        });
    }

    let on_nickname = {
        let nickname = nickname.clone();
        Callback::from(move |e: InputEvent| {
            let input: HtmlInputElement = e.target_unchecked_into();
            nickname.set(input.value());
        })
    };

    let on_room_code = {
        let room_code = room_code.clone();
        Callback::from(move |e: InputEvent| {
            let input: HtmlInputElement = e.target_unchecked_into();
            room_code.set(input.value());
        })
    };

    let on_max_player = {
        let max_player = max_player.clone();
        Callback::from(move |e: Event| {
            let select: HtmlSelectElement = e.target_unchecked_into();
            if let Ok(value) = select.value().parse::<u32>() {
                max_player.set(value);
            }
        })
    };

    let on_pick_room = {
        let room_code = room_code.clone();
        Callback::from(move |code: String| room_code.set(code))
    };

    let on_submit = {
        let nickname = nickname.clone();
        let room_code = room_code.clone();
        let max_player = max_player.clone();
        let error_state = error_state.clone();
        let busy = busy.clone();
        let session_ctx = session_ctx.clone();
        let navigator = navigator.clone();
        Callback::from(move |e: SubmitEvent| {
            e.prevent_default();
            if *busy {
                return;
            }
            let form = match JoinForm::parse(&nickname, &room_code, *max_player) {
                Ok(form) => form,
                Err(message) => {
                    error_state.set(Some(message));
                    return;
                }
            };

            let release = match JoinPlan::for_session((*session_ctx).as_ref(), &form.room_code) {
                JoinPlan::Resume => {
                    navigator.push(&Route::RoomLobby {
                        room_code: form.room_code,
                    });
                    return;
                }
                JoinPlan::Join { release } => release,
            };

            busy.set(true);
            error_state.set(None);
            let error_state = error_state.clone();
            let busy = busy.clone();
            let session_ctx = session_ctx.clone();
            let navigator = navigator.clone();
            wasm_bindgen_futures::spawn_local(async move {
                let result = match api_client() {
                    Ok(client) => {
                        if let Some(previous) = release {
                            if let Err(e) = client.leave_room(previous).await {
                                log::warn!("Leaving the previous room failed: {e}");
                            }
                            clear_session_from_storage();
                            session_ctx.set(None);
                        }
                        client
                            .join_room(&form.room_code, &form.nickname, form.max_player)
                            .await
                            .map_err(|e| e.to_string())
                    }
                    Err(e) => Err(e),
                };
                busy.set(false);
                match result {
                    Ok(joined) => {
                        log::info!(
                            "Joined room {} as player {}",
                            joined.room_code,
                            joined.player_id
                        );
                        let session = PlayerSession {
                            player_id: joined.player_id,
                            nickname: form.nickname,
                            room_code: joined.room_code.clone(),
                        };
                        save_session_to_storage(&session);
                        session_ctx.set(Some(session));
                        navigator.push(&Route::RoomLobby {
                            room_code: joined.room_code,
                        });
                    }
                    Err(message) => {
                        log::warn!("Join failed: {message}");
                        error_state.set(Some(message));
                    }
                }
            });
        })
    };

    let resume_link = match &*session_ctx {
        Some(session) => html! {
            <p class="resume-room">
                { format!("You are still in room {}. ", session.room_code) }
                <Link<Route> to={Route::RoomLobby { room_code: session.room_code.clone() }}>
                    {"Back to the lobby"}
                </Link<Route>>
            </p>
        },
        None => html! {},
    };

    let admin_link = match Route::by_name(ADMIN_LOBBY_ROUTE_NAME) {
        Some(route) => html! {
            <Link<Route> classes="admin-link" to={route}>{"Admin"}</Link<Route>>
        },
        None => html! {},
    };

    let error_html = if let Some(err) = &*error_state {
        html! { <p class="error">{ err }</p> }
    } else {
        html! {}
    };

    html! {
        <div id="join-room" class="join-room-page">
            <h1>{"Magic Coach"}</h1>
            { resume_link }
            <form class="join-form" onsubmit={on_submit}>
                <input
                    class="nickname-input"
                    placeholder="Nickname"
                    maxlength="20"
                    required=true
                    autofocus=true
                    oninput={on_nickname}
                    value={(*nickname).clone()}
                />
                <input
                    class="room-code-input"
                    placeholder="Room code"
                    maxlength="10"
                    pattern="^[A-Za-z0-9]+$"
                    required=true
                    oninput={on_room_code}
                    value={(*room_code).clone()}
                />
                <label class="max-player-label">
                    {"Players (new rooms)"}
                    <select class="max-player-select" onchange={on_max_player}>
                        { for (MIN_PLAYERS..=MAX_PLAYERS).map(|n| html! {
                            <option value={n.to_string()} selected={n == *max_player}>{ n }</option>
                        }) }
                    </select>
                </label>
                { error_html }
                <button class="cta-button" type="submit" disabled={*busy}>{"Join"}</button>
            </form>
            <section class="open-rooms">
                <h2>{"Open rooms"}</h2>
                <RoomTable rooms={(*open_rooms).clone()} on_select={Some(on_pick_room)} />
            </section>
            { admin_link }
        </div>
    }
}
