// SPDX-License-Identifier: MIT OR Apache-2.0

//! Renderless component that keeps the local player marked as present.
//!
//! Lets struct components and function components alike mount the
//! heartbeat by rendering `<Heartbeat player_id={..} />`.

use yew::prelude::*;

use crate::hooks::use_heartbeat;

#[derive(Properties, PartialEq, Clone)]
pub struct HeartbeatProps {
    #[prop_or_default]
    pub player_id: Option<i64>,
}

#[function_component(Heartbeat)]
pub fn heartbeat(props: &HeartbeatProps) -> Html {
    use_heartbeat(props.player_id);
    html! {}
}
