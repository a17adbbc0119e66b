use dioxus::document::{Meta, Title};
use dioxus::prelude::*;
use dioxus_free_icons::icons::fa_solid_icons::FaPlus;
use dioxus_free_icons::Icon;
use dioxus_logger::tracing;

use crate::client::api::{ApiClient, ApiError};
use crate::client::components::trips::{TripCard, TripCardSkeleton};
use crate::client::components::Page;
use crate::client::router::Route;

#[component]
pub fn Dashboard() -> Element {
    let api = use_context::<ApiClient>();
    let trips = use_resource(move || {
        let api = api.clone();
        async move { api.fetch_trips().await }
    });

    let body = match &*trips.read_unchecked() {
        None => rsx! {
            div { class: "grid grid-cols-1 sm:grid-cols-2 lg:grid-cols-3 gap-4",
                for _ in 0..3 {
                    TripCardSkeleton { }
                }
            }
        },
        Some(Err(ApiError::SessionExpired)) => rsx! {
            div { class: "alert alert-error flex justify-between",
                p {
                    "Session expired. Please login again."
                }
                Link {
                    to: Route::Login {},
                    class: "btn btn-sm",
                    "Login"
                }
            }
        },
        Some(Err(err)) => {
            tracing::error!("failed to load trips: {err}");
            rsx! {
                div { class: "alert alert-error",
                    "{err}"
                }
            }
        }
        Some(Ok(trips)) if trips.is_empty() => rsx! {
            div { class: "card bg-base-200",
                div { class: "card-body items-center text-center",
                    h2 { class: "card-title",
                        "Welcome to Planventure!"
                    }
                    p {
                        "You have no trips yet. Plan your first one to get started."
                    }
                    Link {
                        to: Route::NewTrip {},
                        class: "btn btn-primary mt-2",
                        "Plan a New Trip"
                    }
                }
            }
        },
        Some(Ok(trips)) => rsx! {
            div { class: "grid grid-cols-1 sm:grid-cols-2 lg:grid-cols-3 gap-4",
                for trip in trips.iter() {
                    TripCard { trip: trip.clone() }
                }
                Link {
                    to: Route::NewTrip {},
                    class: "btn btn-outline h-full min-h-48 flex flex-col gap-2",
                    Icon {
                        width: 24,
                        height: 24,
                        icon: FaPlus
                    }
                    p {
                        "Add New Trip"
                    }
                }
            }
        },
    };

    rsx!(
        Title { "My Trips | Planventure" }
        Meta {
            name: "description",
            content: "Your planned trips, all in one place."
        }
        Page { class: "flex flex-col items-center",
            div { class: "w-full max-w-[1440px] p-6",
                div { class: "flex items-center justify-between mb-6",
                    h1 { class: "text-2xl font-semibold",
                        "My Trips"
                    }
                    Link {
                        to: Route::NewTrip {},
                        class: "btn btn-primary flex gap-2",
                        Icon {
                            width: 16,
                            height: 16,
                            icon: FaPlus
                        }
                        p {
                            "New Trip"
                        }
                    }
                }
                {body}
            }
        }
    )
}
