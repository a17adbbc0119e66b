use dioxus::prelude::*;
use dioxus_free_icons::icons::fa_solid_icons::{FaFilePen, FaWandMagicSparkles};
use dioxus_free_icons::Icon;

#[component]
pub fn EmptyItinerary(
    on_create_empty: EventHandler<()>,
    on_use_template: EventHandler<()>,
) -> Element {
    rsx! {
        div { class: "card bg-base-200 text-center",
            div { class: "card-body items-center",
                h3 { class: "text-lg font-semibold",
                    "Start Planning Your Trip"
                }
                p { class: "text-sm opacity-70 mb-4",
                    "Create an itinerary to organize your daily activities, meals, and travel arrangements."
                }
                div { class: "flex flex-wrap justify-center gap-2",
                    button {
                        class: "btn btn-outline flex gap-2",
                        onclick: move |_| on_create_empty.call(()),
                        Icon {
                            width: 20,
                            height: 20,
                            icon: FaFilePen
                        }
                        p {
                            "Start from Scratch"
                        }
                    }
                    button {
                        class: "btn btn-primary flex gap-2",
                        onclick: move |_| on_use_template.call(()),
                        Icon {
                            width: 20,
                            height: 20,
                            icon: FaWandMagicSparkles
                        }
                        p {
                            "Use Template"
                        }
                    }
                }
            }
        }
    }
}
