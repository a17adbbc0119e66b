use dioxus::prelude::*;

use crate::client::router::Route;
use crate::client::validate::{self, FieldError};
use crate::model::trip::{TripDataDto, TripDto};

/// Shared form for the new-trip and edit-trip pages. The page owns the API
/// call; the form only reports a validated payload.
#[component]
pub fn TripForm(
    trip: Option<TripDto>,
    submitting: bool,
    submit_label: &'static str,
    on_submit: EventHandler<TripDataDto>,
) -> Element {
    let (initial_title, initial_destination, initial_start, initial_end) = match &trip {
        Some(trip) => (
            trip.title.clone(),
            trip.destination.clone(),
            trip.start_date.to_string(),
            trip.end_date.to_string(),
        ),
        None => Default::default(),
    };

    let mut title = use_signal(move || initial_title);
    let mut destination = use_signal(move || initial_destination);
    let mut start_date = use_signal(move || initial_start);
    let mut end_date = use_signal(move || initial_end);

    let mut title_error = use_signal(|| None::<FieldError>);
    let mut destination_error = use_signal(|| None::<FieldError>);
    let mut start_error = use_signal(|| None::<FieldError>);
    let mut end_error = use_signal(|| None::<FieldError>);

    let nav = use_navigator();

    let handle_submit = move |_| {
        let checked_title = validate::required("Title", &title.read());
        let checked_destination = validate::required("Destination", &destination.read());
        let checked_start = validate::date("Start date", &start_date.read());
        let checked_end = validate::date("End date", &end_date.read());
        let checked_order = match (&checked_start, &checked_end) {
            (Ok(start), Ok(end)) => validate::date_pair(*start, *end),
            _ => Ok(()),
        };

        title_error.set(checked_title.as_ref().err().cloned());
        destination_error.set(checked_destination.as_ref().err().cloned());
        start_error.set(checked_start.as_ref().err().cloned());
        end_error.set(
            checked_end
                .as_ref()
                .err()
                .cloned()
                .or_else(|| checked_order.as_ref().err().cloned()),
        );

        if let (Ok(title), Ok(destination), Ok(start_date), Ok(end_date), Ok(())) = (
            checked_title,
            checked_destination,
            checked_start,
            checked_end,
            checked_order,
        ) {
            on_submit.call(TripDataDto {
                title,
                destination,
                start_date,
                end_date,
            });
        }
    };

    rsx! {
        div { class: "flex flex-col gap-4",
            label { class: "form-control w-full",
                div { class: "label",
                    span { class: "label-text", "Trip Title" }
                }
                input {
                    class: "input input-bordered w-full",
                    r#type: "text",
                    value: "{title}",
                    oninput: move |evt| title.set(evt.value()),
                }
                if let Some(err) = title_error() {
                    p { class: "text-error text-sm mt-1", "{err}" }
                }
            }
            label { class: "form-control w-full",
                div { class: "label",
                    span { class: "label-text", "Destination" }
                }
                input {
                    class: "input input-bordered w-full",
                    r#type: "text",
                    value: "{destination}",
                    oninput: move |evt| destination.set(evt.value()),
                }
                if let Some(err) = destination_error() {
                    p { class: "text-error text-sm mt-1", "{err}" }
                }
            }
            label { class: "form-control w-full",
                div { class: "label",
                    span { class: "label-text", "Start Date" }
                }
                input {
                    class: "input input-bordered w-full",
                    r#type: "date",
                    value: "{start_date}",
                    oninput: move |evt| start_date.set(evt.value()),
                }
                if let Some(err) = start_error() {
                    p { class: "text-error text-sm mt-1", "{err}" }
                }
            }
            label { class: "form-control w-full",
                div { class: "label",
                    span { class: "label-text", "End Date" }
                }
                input {
                    class: "input input-bordered w-full",
                    r#type: "date",
                    value: "{end_date}",
                    oninput: move |evt| end_date.set(evt.value()),
                }
                if let Some(err) = end_error() {
                    p { class: "text-error text-sm mt-1", "{err}" }
                }
            }
            div { class: "flex gap-2 mt-2",
                button {
                    class: "btn btn-outline flex-1",
                    onclick: move |_| {
                        nav.push(Route::Dashboard {});
                    },
                    "Cancel"
                }
                button {
                    class: "btn btn-primary flex-1",
                    disabled: submitting,
                    onclick: handle_submit,
                    if submitting {
                        span { class: "loading loading-spinner loading-sm" }
                    }
                    "{submit_label}"
                }
            }
        }
    }
}
