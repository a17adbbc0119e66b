use dioxus::prelude::*;

use crate::client::api::{ApiClient, ApiConfig};
use crate::client::router::Route;
use crate::client::store::auth::AuthState;

#[component]
pub fn App() -> Element {
    let api = use_context_provider(|| {
        #[cfg(feature = "web")]
        let tokens = crate::client::api::BrowserTokenStore;
        #[cfg(not(feature = "web"))]
        let tokens = crate::client::api::MemoryTokenStore::default();

        ApiClient::new(ApiConfig::default(), tokens)
    });

    // Restore the persisted session before the router decides where to land.
    use_context_provider(|| {
        Signal::new(AuthState {
            token: api.tokens().get(),
        })
    });

    rsx! {
        Router::<Route> {}
    }
}
