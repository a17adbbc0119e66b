use dioxus::prelude::*;
use dioxus_free_icons::icons::fa_solid_icons::{FaFloppyDisk, FaPencil, FaTrash, FaXmark};
use dioxus_free_icons::Icon;

use crate::client::store::overview::{TransportKind, TransportationRecord};

#[component]
pub fn TransportationCard(
    record: TransportationRecord,
    on_update: EventHandler<TransportationRecord>,
    on_delete: EventHandler<u64>,
) -> Element {
    // Freshly added records are blank, so they open straight into editing.
    let mut is_editing = use_signal({
        let blank = record.origin.is_empty() && record.destination.is_empty();
        move || blank
    });
    let mut kind_input = use_signal({
        let kind = record.kind.value().to_string();
        move || kind
    });
    let mut origin_input = use_signal({
        let origin = record.origin.clone();
        move || origin
    });
    let mut destination_input = use_signal({
        let destination = record.destination.clone();
        move || destination
    });
    let mut departure_input = use_signal({
        let departure = record.departure.clone();
        move || departure
    });
    let mut arrival_input = use_signal({
        let arrival = record.arrival.clone();
        move || arrival
    });
    let mut booking_ref_input = use_signal({
        let booking_ref = record.booking_ref.clone();
        move || booking_ref
    });

    let start_editing = {
        let record = record.clone();
        move |_| {
            kind_input.set(record.kind.value().to_string());
            origin_input.set(record.origin.clone());
            destination_input.set(record.destination.clone());
            departure_input.set(record.departure.clone());
            arrival_input.set(record.arrival.clone());
            booking_ref_input.set(record.booking_ref.clone());
            is_editing.set(true);
        }
    };

    let record_id = record.id;
    let record_kind = record.kind;
    let save = move |_| {
        on_update.call(TransportationRecord {
            id: record_id,
            kind: TransportKind::from_value(&kind_input.read()).unwrap_or(record_kind),
            origin: origin_input.read().clone(),
            destination: destination_input.read().clone(),
            departure: departure_input.read().clone(),
            arrival: arrival_input.read().clone(),
            booking_ref: booking_ref_input.read().clone(),
        });
        is_editing.set(false);
    };

    let kind_label = record.kind.label();
    let leg = format!("{} \u{2192} {}", record.origin, record.destination);

    rsx! {
        div { class: "card bg-base-100 border border-base-300 mb-2",
            div { class: "card-body p-4",
                if is_editing() {
                    div { class: "flex flex-col gap-2",
                        label { class: "form-control w-full",
                            div { class: "label",
                                span { class: "label-text", "Type" }
                            }
                            select {
                                class: "select select-bordered w-full",
                                onchange: move |evt| kind_input.set(evt.value()),
                                for kind in TransportKind::ALL {
                                    option {
                                        value: kind.value(),
                                        selected: *kind_input.read() == kind.value(),
                                        {kind.label()}
                                    }
                                }
                            }
                        }
                        label { class: "form-control w-full",
                            div { class: "label",
                                span { class: "label-text", "From" }
                            }
                            input {
                                class: "input input-bordered w-full",
                                r#type: "text",
                                value: "{origin_input}",
                                oninput: move |evt| origin_input.set(evt.value()),
                            }
                        }
                        label { class: "form-control w-full",
                            div { class: "label",
                                span { class: "label-text", "To" }
                            }
                            input {
                                class: "input input-bordered w-full",
                                r#type: "text",
                                value: "{destination_input}",
                                oninput: move |evt| destination_input.set(evt.value()),
                            }
                        }
                        label { class: "form-control w-full",
                            div { class: "label",
                                span { class: "label-text", "Departure" }
                            }
                            input {
                                class: "input input-bordered w-full",
                                r#type: "datetime-local",
                                value: "{departure_input}",
                                oninput: move |evt| departure_input.set(evt.value()),
                            }
                        }
                        label { class: "form-control w-full",
                            div { class: "label",
                                span { class: "label-text", "Arrival" }
                            }
                            input {
                                class: "input input-bordered w-full",
                                r#type: "datetime-local",
                                value: "{arrival_input}",
                                oninput: move |evt| arrival_input.set(evt.value()),
                            }
                        }
                        label { class: "form-control w-full",
                            div { class: "label",
                                span { class: "label-text", "Booking Reference" }
                            }
                            input {
                                class: "input input-bordered w-full",
                                r#type: "text",
                                value: "{booking_ref_input}",
                                oninput: move |evt| booking_ref_input.set(evt.value()),
                            }
                        }
                        div { class: "flex justify-end gap-1",
                            button {
                                class: "btn btn-ghost btn-sm",
                                onclick: move |_| is_editing.set(false),
                                Icon {
                                    width: 16,
                                    height: 16,
                                    icon: FaXmark
                                }
                            }
                            button {
                                class: "btn btn-success btn-sm",
                                onclick: save,
                                Icon {
                                    width: 16,
                                    height: 16,
                                    icon: FaFloppyDisk
                                }
                            }
                        }
                    }
                } else {
                    div { class: "flex justify-between items-start",
                        div { class: "flex flex-col gap-1",
                            p { class: "font-semibold",
                                "{kind_label}"
                            }
                            p { class: "text-sm opacity-70",
                                "{leg}"
                            }
                            if !record.departure.is_empty() {
                                p { class: "text-sm",
                                    "Departure: {record.departure}"
                                }
                            }
                            if !record.arrival.is_empty() {
                                p { class: "text-sm",
                                    "Arrival: {record.arrival}"
                                }
                            }
                            if !record.booking_ref.is_empty() {
                                p { class: "text-sm",
                                    "Booking Reference: {record.booking_ref}"
                                }
                            }
                        }
                        div {
                            button {
                                class: "btn btn-ghost btn-sm",
                                onclick: start_editing,
                                Icon {
                                    width: 16,
                                    height: 16,
                                    icon: FaPencil
                                }
                            }
                            button {
                                class: "btn btn-ghost btn-sm text-error",
                                onclick: move |_| on_delete.call(record_id),
                                Icon {
                                    width: 16,
                                    height: 16,
                                    icon: FaTrash
                                }
                            }
                        }
                    }
                }
            }
        }
    }
}
