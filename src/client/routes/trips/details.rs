use dioxus::document::{Meta, Title};
use dioxus::prelude::*;
use dioxus_free_icons::icons::fa_solid_icons::{
    FaArrowLeft, FaCalendarDays, FaLocationDot, FaPencil, FaPlus,
};
use dioxus_free_icons::Icon;
use dioxus_logger::tracing;

use crate::client::api::{ApiClient, ApiError};
use crate::client::components::itinerary::{DayCard, EmptyItinerary};
use crate::client::components::overview::{AccommodationCard, EmptySection, TransportationCard};
use crate::client::components::Page;
use crate::client::router::Route;
use crate::client::store::itinerary::{date_range, Itinerary};
use crate::client::store::overview::{AccommodationRecord, RecordList, TransportationRecord};
use crate::model::trip::TripDto;

#[derive(Clone, Copy, PartialEq)]
enum DetailsTab {
    Overview,
    Itinerary,
}

/// One fetch per page instance; everything below the header is local state
/// that dies with the page.
#[component]
pub fn TripDetails(trip_id: i64) -> Element {
    let api = use_context::<ApiClient>();
    let trip = use_resource(move || {
        let api = api.clone();
        async move { api.fetch_trip(trip_id).await }
    });

    let body = match &*trip.read_unchecked() {
        None => rsx! {
            div { class: "flex flex-col gap-4",
                div { class: "skeleton h-10 w-64" }
                div { class: "skeleton h-64 w-full" }
            }
        },
        Some(Err(ApiError::NotFound)) => rsx! {
            div { class: "alert alert-error flex justify-between",
                p {
                    "Trip not found"
                }
                Link {
                    to: Route::Dashboard {},
                    class: "btn btn-sm",
                    "Back to Dashboard"
                }
            }
        },
        Some(Err(err)) => {
            tracing::error!("failed to load trip {trip_id}: {err}");
            rsx! {
                div { class: "alert alert-error flex justify-between",
                    p {
                        "{err}"
                    }
                    Link {
                        to: Route::Dashboard {},
                        class: "btn btn-sm",
                        "Back to Dashboard"
                    }
                }
            }
        }
        Some(Ok(trip)) => rsx! {
            TripDetailsBody { trip: trip.clone() }
        },
    };

    rsx!(
        Title { "Trip Details | Planventure" }
        Meta {
            name: "description",
            content: "Trip overview and day-by-day itinerary."
        }
        Page { class: "flex flex-col items-center",
            div { class: "w-full max-w-5xl p-6",
                Link {
                    to: Route::Dashboard {},
                    class: "btn btn-ghost mb-4 flex gap-2 w-fit",
                    Icon {
                        width: 16,
                        height: 16,
                        icon: FaArrowLeft
                    }
                    p {
                        "Back to Dashboard"
                    }
                }
                {body}
            }
        }
    )
}

#[component]
fn TripDetailsBody(trip: TripDto) -> Element {
    let mut tab = use_signal(|| DetailsTab::Overview);
    let itinerary = use_signal(Itinerary::new);
    let accommodations = use_signal(RecordList::<AccommodationRecord>::new);
    let transportation = use_signal(RecordList::<TransportationRecord>::new);

    let dates = format!(
        "{} - {}",
        trip.start_date.format("%b %-d"),
        trip.end_date.format("%b %-d, %Y")
    );
    let current = tab();
    let overview_class = if current == DetailsTab::Overview {
        "tab tab-active"
    } else {
        "tab"
    };
    let itinerary_class = if current == DetailsTab::Itinerary {
        "tab tab-active"
    } else {
        "tab"
    };

    rsx! {
        div { class: "card bg-base-100 shadow-sm",
            div { class: "card-body",
                div { class: "flex justify-between items-start",
                    div {
                        h1 { class: "text-3xl font-semibold mb-2",
                            "{trip.title}"
                        }
                        div { class: "flex flex-wrap gap-2",
                            span { class: "badge badge-outline badge-primary flex gap-1",
                                Icon {
                                    width: 12,
                                    height: 12,
                                    icon: FaLocationDot
                                }
                                "{trip.destination}"
                            }
                            span { class: "badge badge-outline flex gap-1",
                                Icon {
                                    width: 12,
                                    height: 12,
                                    icon: FaCalendarDays
                                }
                                "{dates}"
                            }
                        }
                    }
                    Link {
                        to: Route::EditTrip { trip_id: trip.id },
                        class: "btn btn-outline flex gap-2",
                        Icon {
                            width: 16,
                            height: 16,
                            icon: FaPencil
                        }
                        p {
                            "Edit Trip"
                        }
                    }
                }
                div { class: "divider" }
                div { role: "tablist", class: "tabs tabs-bordered",
                    button {
                        role: "tab",
                        class: overview_class,
                        onclick: move |_| tab.set(DetailsTab::Overview),
                        "Overview"
                    }
                    button {
                        role: "tab",
                        class: itinerary_class,
                        onclick: move |_| tab.set(DetailsTab::Itinerary),
                        "Itinerary"
                    }
                }
                div { class: "pt-6",
                    if current == DetailsTab::Overview {
                        OverviewTab { accommodations, transportation }
                    } else {
                        ItineraryTab { trip: trip.clone(), itinerary }
                    }
                }
            }
        }
    }
}

#[component]
fn OverviewTab(
    mut accommodations: Signal<RecordList<AccommodationRecord>>,
    mut transportation: Signal<RecordList<TransportationRecord>>,
) -> Element {
    let accommodation_records: Vec<AccommodationRecord> =
        accommodations.read().iter().cloned().collect();
    let transportation_records: Vec<TransportationRecord> =
        transportation.read().iter().cloned().collect();

    rsx! {
        section { class: "mb-6",
            div { class: "flex items-center justify-between mb-2",
                h2 { class: "text-lg font-semibold",
                    "Accommodations"
                }
                button {
                    class: "btn btn-sm btn-outline flex gap-1",
                    onclick: move |_| {
                        accommodations.write().add(AccommodationRecord::placeholder());
                    },
                    Icon {
                        width: 14,
                        height: 14,
                        icon: FaPlus
                    }
                    p {
                        "Add Accommodation"
                    }
                }
            }
            if accommodation_records.is_empty() {
                EmptySection {
                    title: "No accommodations yet",
                    message: "Track where you're staying, with check-in and check-out times."
                }
            } else {
                for record in accommodation_records {
                    AccommodationCard {
                        record,
                        on_update: move |updated: AccommodationRecord| {
                            if !accommodations.write().update(updated) {
                                tracing::warn!("discarded update for a missing accommodation");
                            }
                        },
                        on_delete: move |id: u64| {
                            if !accommodations.write().remove(id) {
                                tracing::warn!("discarded delete for a missing accommodation");
                            }
                        },
                    }
                }
            }
        }
        section {
            div { class: "flex items-center justify-between mb-2",
                h2 { class: "text-lg font-semibold",
                    "Transportation"
                }
                button {
                    class: "btn btn-sm btn-outline flex gap-1",
                    onclick: move |_| {
                        transportation.write().add(TransportationRecord::placeholder());
                    },
                    Icon {
                        width: 14,
                        height: 14,
                        icon: FaPlus
                    }
                    p {
                        "Add Transportation"
                    }
                }
            }
            if transportation_records.is_empty() {
                EmptySection {
                    title: "No transportation yet",
                    message: "Track flights, trains, and other legs between destinations."
                }
            } else {
                for record in transportation_records {
                    TransportationCard {
                        record,
                        on_update: move |updated: TransportationRecord| {
                            if !transportation.write().update(updated) {
                                tracing::warn!("discarded update for a missing transportation leg");
                            }
                        },
                        on_delete: move |id: u64| {
                            if !transportation.write().remove(id) {
                                tracing::warn!("discarded delete for a missing transportation leg");
                            }
                        },
                    }
                }
            }
        }
    }
}

#[component]
fn ItineraryTab(trip: TripDto, mut itinerary: Signal<Itinerary>) -> Element {
    // A reversed range can only come from a malformed server record; surface
    // it instead of rendering an empty planner.
    let days = match date_range(trip.start_date, trip.end_date) {
        Ok(days) => days,
        Err(err) => {
            return rsx! {
                div { class: "alert alert-error",
                    "{err}"
                }
            };
        }
    };

    if !itinerary.read().is_seeded() {
        let template_days = days.clone();
        return rsx! {
            EmptyItinerary {
                on_create_empty: move |_| itinerary.write().seed_empty(&days),
                on_use_template: move |_| itinerary.write().seed_from_template(&template_days),
            }
        };
    }

    rsx! {
        for day in days {
            DayCard { day, itinerary }
        }
    }
}
