use dioxus::prelude::*;

use crate::client::api::ApiClient;
use crate::client::components::PlanventureTitleButton;
use crate::client::router::Route;
use crate::client::store::auth::AuthState;

#[component]
pub fn ProtectedNavbar() -> Element {
    let mut auth = use_context::<Signal<AuthState>>();
    let api = use_context::<ApiClient>();
    let nav = use_navigator();

    rsx! {
        div {
            class: "navbar bg-base-200 fixed",
            div {
                class: "navbar-start",
                PlanventureTitleButton {}
                Link {
                    to: Route::Dashboard {},
                    class: "btn btn-ghost ml-2",
                    "My Trips"
                }
            }
            div {
                class: "navbar-end",
                div { class: "h-10",
                    button {
                        class: "btn btn-outline",
                        onclick: move |_| {
                            api.tokens().clear();
                            auth.write().token = None;
                            nav.push(Route::Home {});
                        },
                        "Logout"
                    }
                }
            }
        }
    }
}
