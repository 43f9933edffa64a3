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
 *
 * Unless you explicitly state otherwise, any contribution intentionally
 * submitted for inclusion in the work by you, as defined in the Apache-2.0
 * license, shall be dual licensed as above, without any additional terms or
 * conditions.
 */

//! Admin lobby: every room on the backend, with password-guarded deletion.

use magic_coach_types::responses::{RoomList, RoomSummary};
use web_sys::HtmlInputElement;
use yew::prelude::*;
use yew_router::prelude::*;

use crate::components::room_table::RoomTable;
use crate::constants::api_client;
use crate::routing::Route;

pub enum AdminLobbyMsg {
    FetchRooms,
    FetchSuccess(RoomList),
    FetchError(String),
    PasswordInput(String),
    DeleteRoom(String),
    DeleteAll,
    DeleteSuccess(Option<String>),
    DeleteError(String),
}

pub struct AdminLobby {
    rooms: Vec<RoomSummary>,
    loading: bool,
    error: Option<String>,
    notice: Option<String>,
    password: String,
}

impl Component for AdminLobby {
    type Message = AdminLobbyMsg;
    type Properties = ();

    fn create(ctx: &Context<Self>) -> Self {
        ctx.link().send_message(AdminLobbyMsg::FetchRooms);

        Self {
            rooms: Vec::new(),
            loading: true,
            error: None,
            notice: None,
            password: String::new(),
        }
    }

    fn update(&mut self, ctx: &Context<Self>, msg: Self::Message) -> bool {
        match msg {
            AdminLobbyMsg::FetchRooms => {
                self.loading = true;

                let link = ctx.link().clone();
                wasm_bindgen_futures::spawn_local(async move {
                    match fetch_all_rooms().await {
                        Ok(list) => link.send_message(AdminLobbyMsg::FetchSuccess(list)),
                        Err(e) => link.send_message(AdminLobbyMsg::FetchError(e)),
                    }
                });

                true
            }
            AdminLobbyMsg::FetchSuccess(list) => {
                self.rooms = list.rooms;
                self.loading = false;
                self.error = None;
                true
            }
            AdminLobbyMsg::FetchError(error) => {
                log::warn!("Admin room listing failed: {error}");
                self.loading = false;
                self.error = Some(error);
                true
            }
            AdminLobbyMsg::PasswordInput(password) => {
                self.password = password;
                false
            }
            AdminLobbyMsg::DeleteRoom(room_code) => {
                if !self.require_password() {
                    return true;
                }
                let link = ctx.link().clone();
                let password = self.password.clone();
                wasm_bindgen_futures::spawn_local(async move {
                    let result = match api_client() {
                        Ok(client) => client
                            .admin_delete_room(&room_code, &password)
                            .await
                            .map(|_| Some(format!("Room {room_code} deleted")))
                            .map_err(|e| e.to_string()),
                        Err(e) => Err(e),
                    };
                    match result {
                        Ok(notice) => link.send_message(AdminLobbyMsg::DeleteSuccess(notice)),
                        Err(e) => link.send_message(AdminLobbyMsg::DeleteError(e)),
                    }
                });
                false
            }
            AdminLobbyMsg::DeleteAll => {
                if !self.require_password() {
                    return true;
                }
                let link = ctx.link().clone();
                let password = self.password.clone();
                wasm_bindgen_futures::spawn_local(async move {
                    let result = match api_client() {
                        Ok(client) => client
                            .admin_delete_all_rooms(&password)
                            .await
                            .map(|message| message.or_else(|| Some("All rooms deleted".to_string())))
                            .map_err(|e| e.to_string()),
                        Err(e) => Err(e),
                    };
                    match result {
                        Ok(notice) => link.send_message(AdminLobbyMsg::DeleteSuccess(notice)),
                        Err(e) => link.send_message(AdminLobbyMsg::DeleteError(e)),
                    }
                });
                false
            }
            AdminLobbyMsg::DeleteSuccess(notice) => {
                if let Some(notice) = &notice {
                    log::info!("{notice}");
                }
                self.notice = notice;
                self.error = None;
                ctx.link().send_message(AdminLobbyMsg::FetchRooms);
                true
            }
            AdminLobbyMsg::DeleteError(error) => {
                log::warn!("Admin deletion failed: {error}");
                self.notice = None;
                self.error = Some(error);
                true
            }
        }
    }

    fn view(&self, ctx: &Context<Self>) -> Html {
        let link = ctx.link();
        let on_password = link.callback(|e: InputEvent| {
            let input: HtmlInputElement = e.target_unchecked_into();
            AdminLobbyMsg::PasswordInput(input.value())
        });
        let on_delete = link.callback(AdminLobbyMsg::DeleteRoom);

        html! {
            <div id="admin-lobby" class="admin-lobby-page">
                <h1>{"Admin lobby"}</h1>
                <div class="admin-toolbar">
                    <input
                        class="admin-password-input"
                        type="password"
                        placeholder="Admin password"
                        oninput={on_password}
                    />
                    <button class="btn-refresh" onclick={link.callback(|_| AdminLobbyMsg::FetchRooms)}>
                        {"Refresh"}
                    </button>
                    <button
                        class="btn-delete-all"
                        disabled={self.rooms.is_empty()}
                        onclick={link.callback(|_| AdminLobbyMsg::DeleteAll)}
                    >
                        {"Delete all rooms"}
                    </button>
                </div>
                if let Some(notice) = &self.notice {
                    <p class="notice">{ notice }</p>
                }
                if let Some(error) = &self.error {
                    <p class="error">{ error }</p>
                }
                if self.loading && self.rooms.is_empty() {
                    <p class="loading">{"Loading rooms..."}</p>
                } else {
                    <RoomTable rooms={self.rooms.clone()} show_started=true on_delete={Some(on_delete)} />
                }
                <Link<Route> to={Route::JoinRoom}>{"Back to the join screen"}</Link<Route>>
            </div>
        }
    }
}

impl AdminLobby {
    fn require_password(&mut self) -> bool {
        if self.password.is_empty() {
            self.error = Some("Enter the admin password first.".to_string());
            false
        } else {
            true
        }
    }
}

async fn fetch_all_rooms() -> Result<RoomList, String> {
    let client = api_client().map_err(|e| format!("Config error: {e}"))?;
    client.admin_list_rooms().await.map_err(|e| format!("{e}"))
}
