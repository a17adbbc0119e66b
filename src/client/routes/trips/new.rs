use dioxus::document::{Meta, Title};
use dioxus::prelude::*;

use crate::client::api::ApiClient;
use crate::client::components::trips::TripForm;
use crate::client::components::Page;
use crate::client::router::Route;
use crate::model::trip::TripDataDto;

#[component]
pub fn NewTrip() -> Element {
    let api = use_context::<ApiClient>();
    let nav = use_navigator();
    let mut submitting = use_signal(|| false);
    let mut error = use_signal(|| None::<String>);

    rsx!(
        Title { "New Trip | Planventure" }
        Meta {
            name: "description",
            content: "Plan a new trip."
        }
        Page { class: "flex justify-center",
            div { class: "card bg-base-100 shadow-sm w-full max-w-xl h-fit",
                div { class: "card-body",
                    h1 { class: "card-title",
                        "Plan a New Trip"
                    }
                    if let Some(err) = error() {
                        div { class: "alert alert-error",
                            "{err}"
                        }
                    }
                    TripForm {
                        submitting: submitting(),
                        submit_label: "Create Trip",
                        on_submit: move |data: TripDataDto| {
                            submitting.set(true);
                            error.set(None);
                            let api = api.clone();
                            spawn(async move {
                                match api.create_trip(&data).await {
                                    Ok(_) => {
                                        nav.push(Route::Dashboard {});
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
    )
}
