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

use magic_coach_types::responses::PlayerSummary;
use yew::prelude::*;

#[derive(Properties, Clone, PartialEq)]
pub struct PlayerListProps {
    pub players: Vec<PlayerSummary>,
    #[prop_or_default]
    pub owner_id: Option<i64>,
    /// The local player, highlighted and never offered as an action target.
    #[prop_or_default]
    pub self_id: Option<i64>,
    /// Owner action: remove an idle player. Hidden when `None`.
    #[prop_or_default]
    pub on_kick: Option<Callback<i64>>,
    /// Owner action: hand over ownership. Hidden when `None`.
    #[prop_or_default]
    pub on_transfer: Option<Callback<i64>>,
}

#[function_component(PlayerList)]
pub fn player_list(props: &PlayerListProps) -> Html {
    html! {
        <ul class="player-list">
            { for props.players.iter().map(|player| player_row(props, player)) }
        </ul>
    }
}

fn player_row(props: &PlayerListProps, player: &PlayerSummary) -> Html {
    let is_owner = props.owner_id == Some(player.id);
    let is_self = props.self_id == Some(player.id);

    let row_class = classes!(
        "player-list-item",
        is_self.then_some("player-self"),
        player.idle.then_some("player-idle"),
    );

    let kick_button = match &props.on_kick {
        Some(on_kick) if player.idle && !is_self => {
            let player_id = player.id;
            html! {
                <button class="btn-kick" onclick={on_kick.reform(move |_| player_id)}>
                    {"Kick"}
                </button>
            }
        }
        _ => html! {},
    };

    let transfer_button = match &props.on_transfer {
        Some(on_transfer) if !is_self && !is_owner => {
            let player_id = player.id;
            html! {
                <button class="btn-transfer" onclick={on_transfer.reform(move |_| player_id)}>
                    {"Make owner"}
                </button>
            }
        }
        _ => html! {},
    };

    html! {
        <li class={row_class} key={player.id.to_string()}>
            if is_owner {
                <span class="owner-crown" title="Room owner">{"👑"}</span>
            }
            <span class="player-nickname">{ &player.nickname }</span>
            if player.idle {
                <span class="idle-badge">{"away"}</span>
            }
            { kick_button }
            { transfer_button }
        </li>
    }
}
