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

//! Tabular room listing used by the join screen and the admin lobby.

use magic_coach_types::responses::RoomSummary;
use yew::prelude::*;

#[derive(Properties, Clone, PartialEq)]
pub struct RoomTableProps {
    pub rooms: Vec<RoomSummary>,
    /// Show the "started" column (admin view).
    #[prop_or_default]
    pub show_started: bool,
    /// Row action with the room code, e.g. "pick this room".
    #[prop_or_default]
    pub on_select: Option<Callback<String>>,
    #[prop_or_default]
    pub on_delete: Option<Callback<String>>,
}

#[function_component(RoomTable)]
pub fn room_table(props: &RoomTableProps) -> Html {
    if props.rooms.is_empty() {
        return html! { <p class="room-table-empty">{"No rooms right now."}</p> };
    }

    html! {
        <table class="room-table">
            <thead>
                <tr>
                    <th>{"Room"}</th>
                    <th>{"Players"}</th>
                    if props.show_started {
                        <th>{"Status"}</th>
                    }
                    <th></th>
                </tr>
            </thead>
            <tbody>
                { for props.rooms.iter().map(|room| room_row(props, room)) }
            </tbody>
        </table>
    }
}

fn room_row(props: &RoomTableProps, room: &RoomSummary) -> Html {
    let select = props.on_select.as_ref().map(|on_select| {
        let code = room.room_code.clone();
        html! {
            <button
                class="btn-select-room"
                disabled={room.is_full()}
                onclick={on_select.reform(move |_| code.clone())}
            >
                {"Pick"}
            </button>
        }
    });
    let delete = props.on_delete.as_ref().map(|on_delete| {
        let code = room.room_code.clone();
        html! {
            <button class="btn-delete-room" onclick={on_delete.reform(move |_| code.clone())}>
                {"Delete"}
            </button>
        }
    });

    html! {
        <tr key={room.room_code.clone()} data-room-code={room.room_code.clone()}>
            <td class="room-code">{ &room.room_code }</td>
            <td>{ format!("{}/{}", room.player_count, room.max_player) }</td>
            if props.show_started {
                <td>{ if room.started { "playing" } else { "waiting" } }</td>
            }
            <td>{ select }{ delete }</td>
        </tr>
    }
}
