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

//! Application route definitions.
//!
//! The route table is the `Route` enum: `yew-router` matches the browser
//! path against the `#[at]` patterns and `switch` renders the bound page.
//! Parameterised routes hand their captured `room_code` to the page as a
//! prop.

use enum_display::EnumDisplay;
use yew::prelude::*;
use yew_router::prelude::*;

use crate::pages::admin_lobby::AdminLobby;
use crate::pages::game_play::GamePlay;
use crate::pages::join_room::JoinRoom;
use crate::pages::not_found::NotFound;
use crate::pages::room_lobby::RoomLobby;

/// Name under which the admin lobby can be reached without knowing its path.
pub const ADMIN_LOBBY_ROUTE_NAME: &str = "AdminLobby";

#[derive(Clone, Routable, PartialEq, Debug, EnumDisplay)]
pub enum Route {
    #[at("/")]
    JoinRoom,
    #[at("/room/:room_code")]
    RoomLobby { room_code: String },
    #[at("/admin-lobby")]
    AdminLobby,
    #[at("/game/:room_code")]
    GamePlay { room_code: String },
    #[not_found]
    #[at("/404")]
    NotFound,
}

impl Route {
    /// The route's name, for routes that have one.
    pub fn name(&self) -> Option<&'static str> {
        match self {
            Route::AdminLobby => Some(ADMIN_LOBBY_ROUTE_NAME),
            _ => None,
        }
    }

    /// Look up a named route. Only parameterless routes carry a name.
    pub fn by_name(name: &str) -> Option<Route> {
        match name {
            ADMIN_LOBBY_ROUTE_NAME => Some(Route::AdminLobby),
            _ => None,
        }
    }

    /// Whether the captured path parameters are passed to the page as props.
    pub fn forwards_props(&self) -> bool {
        matches!(self, Route::RoomLobby { .. } | Route::GamePlay { .. })
    }
}

pub fn switch(route: Route) -> Html {
    log::debug!("Rendering route {route}");
    match route {
        Route::JoinRoom => html! { <JoinRoom /> },
        Route::RoomLobby { room_code } => html! { <RoomLobby {room_code} /> },
        Route::AdminLobby => html! { <AdminLobby /> },
        Route::GamePlay { room_code } => html! { <GamePlay {room_code} /> },
        Route::NotFound => html! { <NotFound /> },
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn root_resolves_to_join_room() {
        assert_eq!(Route::recognize("/"), Some(Route::JoinRoom));
    }

    #[test]
    fn room_path_captures_room_code() {
        assert_eq!(
            Route::recognize("/room/ABC123"),
            Some(Route::RoomLobby {
                room_code: "ABC123".to_string()
            })
        );
    }

    #[test]
    fn game_path_captures_room_code() {
        let route = Route::recognize("/game/XYZ9").unwrap();
        assert_eq!(
            route,
            Route::GamePlay {
                room_code: "XYZ9".to_string()
            }
        );
        assert!(route.forwards_props());
    }

    #[test]
    fn admin_lobby_is_literal_and_named() {
        let route = Route::recognize("/admin-lobby").unwrap();
        assert_eq!(route, Route::AdminLobby);
        assert_eq!(route.name(), Some("AdminLobby"));
        assert_eq!(Route::by_name("AdminLobby"), Some(Route::AdminLobby));
        assert_eq!(route.to_path(), "/admin-lobby");
    }

    #[test]
    fn only_admin_lobby_has_a_name() {
        assert_eq!(Route::JoinRoom.name(), None);
        assert_eq!(
            Route::RoomLobby {
                room_code: "A".to_string()
            }
            .name(),
            None
        );
        assert_eq!(Route::by_name("RoomLobby"), None);
        assert_eq!(Route::by_name("adminlobby"), None);
    }

    #[test]
    fn parameterised_routes_forward_props() {
        assert!(Route::RoomLobby {
            room_code: "A".to_string()
        }
        .forwards_props());
        assert!(Route::GamePlay {
            room_code: "A".to_string()
        }
        .forwards_props());
        assert!(!Route::JoinRoom.forwards_props());
        assert!(!Route::AdminLobby.forwards_props());
    }

    #[test]
    fn paths_are_built_from_room_code() {
        assert_eq!(
            Route::RoomLobby {
                room_code: "ABC123".to_string()
            }
            .to_path(),
            "/room/ABC123"
        );
        assert_eq!(
            Route::GamePlay {
                room_code: "XYZ9".to_string()
            }
            .to_path(),
            "/game/XYZ9"
        );
        assert_eq!(Route::JoinRoom.to_path(), "/");
    }

    #[test]
    fn unknown_paths_fall_back_to_not_found() {
        assert_eq!(Route::recognize("/lobby"), Some(Route::NotFound));
        assert_eq!(Route::recognize("/room"), Some(Route::NotFound));
        assert_eq!(Route::recognize("/room/ABC123/extra"), Some(Route::NotFound));
    }

    #[test]
    fn display_uses_variant_name() {
        assert_eq!(Route::AdminLobby.to_string(), "AdminLobby");
        assert_eq!(
            Route::GamePlay {
                room_code: "Q".to_string()
            }
            .to_string(),
            "GamePlay"
        );
    }
}
