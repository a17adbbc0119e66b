use dioxus::prelude::*;

use crate::client::components::PlanventureTitleButton;
use crate::client::router::Route;
use crate::client::store::auth::AuthState;

#[component]
pub fn Navbar() -> Element {
    let auth = use_context::<Signal<AuthState>>();

    rsx! {
        div {
            class: "navbar bg-base-200",
            div {
                class: "navbar-start",
                PlanventureTitleButton {}
            }
            div {
                class: "navbar-end",
                if auth.read().is_authenticated() {
                    Link {
                        to: Route::Dashboard {},
                        class: "btn btn-primary w-28",
                        "My Trips"
                    }
                } else {
                    ul { class: "flex gap-2",
                        li {
                            Link {
                                to: Route::Login {},
                                class: "btn btn-outline w-24",
                                "Login"
                            }
                        }
                        li {
                            Link {
                                to: Route::Register {},
                                class: "btn btn-primary w-24",
                                "Sign Up"
                            }
                        }
                    }
                }
            }
        }

        Outlet::<Route> {}
    }
}
