use dioxus::prelude::*;

use crate::client::components::auth::ProtectedNavbar;
use crate::client::router::Route;
use crate::client::store::auth::AuthState;

/// Layout for routes that require a session; bounces to the login page when
/// no token is held.
#[component]
pub fn ProtectedLayout() -> Element {
    let auth = use_context::<Signal<AuthState>>();
    let nav = use_navigator();

    use_effect(move || {
        if !auth.read().is_authenticated() {
            nav.replace(Route::Login {});
        }
    });

    if !auth.read().is_authenticated() {
        return rsx! {
            div { class: "min-h-screen flex items-center justify-center",
                span { class: "loading loading-spinner loading-lg" }
            }
        };
    }

    rsx! {
        ProtectedNavbar {}
        Outlet::<Route> {}
    }
}
