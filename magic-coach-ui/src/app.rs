// SPDX-License-Identifier: MIT OR Apache-2.0

//! Application root: session context around a browser-history router.

use yew::prelude::*;
use yew_router::prelude::*;

use crate::context::{load_session_from_storage, PlayerSessionCtx};
use crate::routing::{switch, Route};

#[function_component(App)]
pub fn app() -> Html {
    // Restore the session so a reload keeps the player in their room.
    let session = use_state(load_session_from_storage);

    html! {
        <ContextProvider<PlayerSessionCtx> context={session}>
            <BrowserRouter>
                <Switch<Route> render={switch} />
            </BrowserRouter>
        </ContextProvider<PlayerSessionCtx>>
    }
}
