use dioxus::prelude::*;
use dioxus_free_icons::icons::fa_solid_icons::{FaFloppyDisk, FaPencil, FaTrash, FaXmark};
use dioxus_free_icons::Icon;

use crate::client::store::overview::AccommodationRecord;

#[component]
pub fn AccommodationCard(
    record: AccommodationRecord,
    on_update: EventHandler<AccommodationRecord>,
    on_delete: EventHandler<u64>,
) -> Element {
    // Freshly added records are blank, so they open straight into editing.
    let mut is_editing = use_signal({
        let blank = record.name.is_empty();
        move || blank
    });
    let mut name_input = use_signal({
        let name = record.name.clone();
        move || name
    });
    let mut address_input = use_signal({
        let address = record.address.clone();
        move || address
    });
    let mut check_in_input = use_signal({
        let check_in = record.check_in.clone();
        move || check_in
    });
    let mut check_out_input = use_signal({
        let check_out = record.check_out.clone();
        move || check_out
    });
    let mut booking_ref_input = use_signal({
        let booking_ref = record.booking_ref.clone();
        move || booking_ref
    });

    let start_editing = {
        let record = record.clone();
        move |_| {
            name_input.set(record.name.clone());
            address_input.set(record.address.clone());
            check_in_input.set(record.check_in.clone());
            check_out_input.set(record.check_out.clone());
            booking_ref_input.set(record.booking_ref.clone());
            is_editing.set(true);
        }
    };

    let record_id = record.id;
    let save = move |_| {
        on_update.call(AccommodationRecord {
            id: record_id,
            name: name_input.read().clone(),
            address: address_input.read().clone(),
            check_in: check_in_input.read().clone(),
            check_out: check_out_input.read().clone(),
            booking_ref: booking_ref_input.read().clone(),
        });
        is_editing.set(false);
    };

    rsx! {
        div { class: "card bg-base-100 border border-base-300 mb-2",
            div { class: "card-body p-4",
                if is_editing() {
                    div { class: "flex flex-col gap-2",
                        label { class: "form-control w-full",
                            div { class: "label",
                                span { class: "label-text", "Name" }
                            }
                            input {
                                class: "input input-bordered w-full",
                                r#type: "text",
                                value: "{name_input}",
                                oninput: move |evt| name_input.set(evt.value()),
                            }
                        }
                        label { class: "form-control w-full",
                            div { class: "label",
                                span { class: "label-text", "Address" }
                            }
                            input {
                                class: "input input-bordered w-full",
                                r#type: "text",
                                value: "{address_input}",
                                oninput: move |evt| address_input.set(evt.value()),
                            }
                        }
                        label { class: "form-control w-full",
                            div { class: "label",
                                span { class: "label-text", "Check-in" }
                            }
                            input {
                                class: "input input-bordered w-full",
                                r#type: "datetime-local",
                                value: "{check_in_input}",
                                oninput: move |evt| check_in_input.set(evt.value()),
                            }
                        }
                        label { class: "form-control w-full",
                            div { class: "label",
                                span { class: "label-text", "Check-out" }
                            }
                            input {
                                class: "input input-bordered w-full",
                                r#type: "datetime-local",
                                value: "{check_out_input}",
                                oninput: move |evt| check_out_input.set(evt.value()),
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
                                "{record.name}"
                            }
                            p { class: "text-sm opacity-70",
                                "{record.address}"
                            }
                            if !record.check_in.is_empty() {
                                p { class: "text-sm",
                                    "Check-in: {record.check_in}"
                                }
                            }
                            if !record.check_out.is_empty() {
                                p { class: "text-sm",
                                    "Check-out: {record.check_out}"
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
