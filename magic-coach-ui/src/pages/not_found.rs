use yew::prelude::*;
use yew_router::prelude::*;

use crate::routing::Route;

#[function_component(NotFound)]
pub fn not_found() -> Html {
    html! {
        <div id="not-found" class="not-found-page">
            <h1>{ "404" }</h1>
            <p>{ "Page not found" }</p>
            <Link<Route> to={Route::JoinRoom}>{ "Go Home" }</Link<Route>>
        </div>
    }
}
