use dioxus::document::{Meta, Title};
use dioxus::prelude::*;
use dioxus_free_icons::icons::fa_solid_icons::FaTrash;
use dioxus_free_icons::Icon;

use crate::client::api::{ApiClient, ApiError};
use crate::client::components::trips::TripForm;
use crate::client::components::Page;
use crate::client::router::Route;
use crate::model::trip::TripDataDto;

#[component]
pub fn EditTrip(trip_id: i64) -> Element {
    let api = use_context::<ApiClient>();
    let nav = use_navigator();
    let trip = use_resource(move || {
        let api = api.clone();
        async move { api.fetch_trip(trip_id).await }
    });

    let mut submitting = use_signal(|| false);
    let mut error = use_signal(|| None::<String>);

    let api = use_context::<ApiClient>();
    let body = match &*trip.read_unchecked() {
        None => rsx! {
            div { class: "flex flex-col gap-4",
                div { class: "skeleton h-10 w-48" }
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
        Some(Err(err)) => rsx! {
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
        },
        Some(Ok(trip)) => {
            let update_api = api.clone();
            let delete_api = api.clone();
            rsx! {
                div { class: "card bg-base-100 shadow-sm w-full",
                    div { class: "card-body",
                        div { class: "flex items-center justify-between",
                            h1 { class: "card-title",
                                "Edit Trip"
                            }
                            button {
                                class: "btn btn-outline btn-error btn-sm flex gap-2",
                                disabled: submitting(),
                                onclick: move |_| {
                                    submitting.set(true);
                                    error.set(None);
                                    let api = delete_api.clone();
                                    spawn(async move {
                                        match api.delete_trip(trip_id).await {
                                            Ok(()) => {
                                                nav.push(Route::Dashboard {});
                                            }
                                            Err(err) => {
                                                error.set(Some(err.to_string()));
                                                submitting.set(false);
                                            }
                                        }
                                    });
                                },
                                Icon {
                                    width: 14,
                                    height: 14,
                                    icon: FaTrash
                                }
                                p {
                                    "Delete Trip"
                                }
                            }
                        }
                        if let Some(err) = error() {
                            div { class: "alert alert-error",
                                "{err}"
                            }
                        }
                        TripForm {
                            trip: trip.clone(),
                            submitting: submitting(),
                            submit_label: "Save Changes",
                            on_submit: move |data: TripDataDto| {
                                submitting.set(true);
                                error.set(None);
                                let api = update_api.clone();
                                spawn(async move {
                                    match api.update_trip(trip_id, &data).await {
                                        Ok(updated) => {
                                            nav.push(Route::TripDetails { trip_id: updated.id });
                                        }
                                        Err(err) => {
                                            error.set(Some(err.to_string()));
                                            submitting.set(false);
                                        }
                                    }
                                });
                            },
                        }
                    }
                }
            }
        }
    };

    rsx!(
        Title { "Edit Trip | Planventure" }
        Meta {
            name: "description",
            content: "Edit the trip's title, destination, and dates."
        }
        Page { class: "flex justify-center",
            div { class: "w-full max-w-xl",
                {body}
            }
        }
    )
}
