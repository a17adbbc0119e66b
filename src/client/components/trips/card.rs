use dioxus::prelude::*;
use dioxus_free_icons::icons::fa_solid_icons::{FaArrowRight, FaCalendarDays, FaLocationDot};
use dioxus_free_icons::Icon;

use crate::client::router::Route;
use crate::model::trip::TripDto;

#[component]
pub fn TripCard(trip: TripDto) -> Element {
    let dates = format!(
        "{} - {}",
        trip.start_date.format("%b %-d, %Y"),
        trip.end_date.format("%b %-d, %Y")
    );

    rsx! {
        div {
            class: "card bg-base-100 shadow-sm h-full",
            div {
                class: "card-body",
                h2 {
                    class: "card-title",
                    "{trip.title}"
                }
                div { class: "flex items-center gap-2 text-sm",
                    Icon {
                        width: 16,
                        height: 16,
                        icon: FaLocationDot
                    }
                    p {
                        "{trip.destination}"
                    }
                }
                div { class: "flex items-center gap-2 text-sm",
                    Icon {
                        width: 16,
                        height: 16,
                        icon: FaCalendarDays
                    }
                    p {
                        "{dates}"
                    }
                }
                div { class: "card-actions justify-end mt-2",
                    Link {
                        to: Route::TripDetails { trip_id: trip.id },
                        class: "btn btn-sm btn-primary flex gap-2",
                        p {
                            "View Details"
                        }
                        Icon {
                            width: 16,
                            height: 16,
                            icon: FaArrowRight
                        }
                    }
                }
            }
        }
    }
}

#[component]
pub fn TripCardSkeleton() -> Element {
    rsx! {
        div {
            class: "card bg-base-100 shadow-sm h-full",
            div {
                class: "card-body",
                div {
                    class: "skeleton h-8 w-3/4"
                }
                div {
                    class: "skeleton h-4 w-1/2"
                }
                div {
                    class: "skeleton h-4 w-2/3"
                }
                div { class: "card-actions justify-end mt-2",
                    div {
                        class: "skeleton h-8 w-28"
                    }
                }
            }
        }
    }
}
