use dioxus::prelude::*;

#[component]
pub fn EmptySection(title: &'static str, message: &'static str) -> Element {
    rsx! {
        div { class: "card bg-base-200",
            div { class: "card-body items-center text-center",
                h3 { class: "font-semibold",
                    "{title}"
                }
                p { class: "text-sm opacity-70",
                    "{message}"
                }
            }
        }
    }
}
