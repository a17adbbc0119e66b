use dioxus::document::{Meta, Title};
use dioxus::prelude::*;

use crate::client::components::Page;
use crate::client::router::Route;
use crate::client::store::auth::AuthState;

#[component]
pub fn HomeActions() -> Element {
    let auth = use_context::<Signal<AuthState>>();

    rsx!(
        ul { class: "flex gap-2",
            if auth.read().is_authenticated() {
                li {
                    Link {
                        to: Route::Dashboard {},
                        class: "btn btn-primary w-36",
                        "Go to My Trips"
                    }
                }
            } else {
                li {
                    Link {
                        to: Route::Login {},
                        class: "btn btn-outline w-28",
                        "Login"
                    }
                }
                li {
                    Link {
                        to: Route::Register {},
                        class: "btn btn-primary w-28",
                        "Sign Up"
                    }
                }
            }
        }
    )
}

#[component]
pub fn Home() -> Element {
    rsx!(
        Title { "Planventure Home" }
        Meta {
            name: "description",
            content: "Plan trips, build day-by-day itineraries, and keep accommodations and transportation in one place."
        }
        Page { class: "flex items-center justify-center",
            div { class: "flex flex-col items-center gap-4",
                div { class: "flex items-center gap-2",
                    p { class: "text-2xl",
                        "Planventure"
                    }
                    p {
                        "v0.1.0-Alpha.1"
                    }
                }
                div {
                    HomeActions { }
                }
                div { class: "flex flex-col gap-2 px-4 max-w-256 text-center",
                    p { class: "font-bold",
                        "Your trips, planned end to end"
                    }
                    p {
                        "Create a trip with a destination and date range, then lay out every day of it:
                        time-slotted activities, meals, accommodations, and the transportation that ties
                        it all together."
                    }
                    ul { class: "list-disc pl-6 text-left",
                        li { "Dashboard of every trip you have planned" }
                        li { "Day-by-day itinerary builder with a ready-made template" }
                        li { "Accommodation and transportation tracking per trip" }
                    }
                }
            }
        }
    )
}
