use dioxus::prelude::*;

use crate::client::components::Page;
use crate::client::router::Route;

#[component]
pub fn NotFound(segments: Vec<String>) -> Element {
    rsx!(
        Page { class: "flex items-center justify-center",
            div { class: "flex flex-col items-center gap-2",
                p { class: "text-2xl",
                    "Page not found"
                }
                Link {
                    to: Route::Home {},
                    class: "btn btn-outline",
                    "Back to Home"
                }
            }
        }
    )
}
