use dioxus::prelude::*;
use dioxus_free_icons::icons::fa_solid_icons::{
    FaClock, FaFloppyDisk, FaLocationDot, FaPencil, FaTrash, FaXmark,
};
use dioxus_free_icons::Icon;

use crate::client::store::itinerary::{SlotKind, TimeSlot};
use crate::client::validate::{self, FieldError};

#[component]
pub fn SlotCard(
    slot: TimeSlot,
    on_update: EventHandler<TimeSlot>,
    on_delete: EventHandler<u64>,
) -> Element {
    let mut is_editing = use_signal(|| false);
    let mut time_input = use_signal(String::new);
    let mut activity_input = use_signal(String::new);
    let mut location_input = use_signal(String::new);
    let mut kind_input = use_signal(String::new);
    let mut time_error = use_signal(|| None::<FieldError>);

    let time_label = slot.time.format("%H:%M").to_string();
    let kind_label = slot.kind.label();

    let start_editing = {
        let slot = slot.clone();
        move |_| {
            time_input.set(slot.time.format("%H:%M").to_string());
            activity_input.set(slot.activity.clone());
            location_input.set(slot.location.clone());
            kind_input.set(slot.kind.value().to_string());
            time_error.set(None);
            is_editing.set(true);
        }
    };

    let save = {
        let slot = slot.clone();
        move |_| {
            let time = match validate::time(&time_input.read()) {
                Ok(time) => time,
                Err(err) => {
                    time_error.set(Some(err));
                    return;
                }
            };
            on_update.call(TimeSlot {
                id: slot.id,
                time,
                activity: activity_input.read().trim().to_string(),
                location: location_input.read().trim().to_string(),
                kind: SlotKind::from_value(&kind_input.read()).unwrap_or(slot.kind),
            });
            is_editing.set(false);
        }
    };

    rsx! {
        div { class: "card bg-base-100 border border-base-300 mb-2",
            div { class: "card-body p-4",
                if is_editing() {
                    div { class: "flex flex-col gap-2",
                        label { class: "form-control w-full",
                            div { class: "label",
                                span { class: "label-text", "Time" }
                            }
                            input {
                                class: "input input-bordered w-full",
                                r#type: "time",
                                value: "{time_input}",
                                oninput: move |evt| time_input.set(evt.value()),
                            }
                            if let Some(err) = time_error() {
                                p { class: "text-error text-sm mt-1", "{err}" }
                            }
                        }
                        label { class: "form-control w-full",
                            div { class: "label",
                                span { class: "label-text", "Activity" }
                            }
                            input {
                                class: "input input-bordered w-full",
                                r#type: "text",
                                value: "{activity_input}",
                                oninput: move |evt| activity_input.set(evt.value()),
                            }
                        }
                        label { class: "form-control w-full",
                            div { class: "label",
                                span { class: "label-text", "Location" }
                            }
                            input {
                                class: "input input-bordered w-full",
                                r#type: "text",
                                value: "{location_input}",
                                oninput: move |evt| location_input.set(evt.value()),
                            }
                        }
                        label { class: "form-control w-full",
                            div { class: "label",
                                span { class: "label-text", "Type" }
                            }
                            select {
                                class: "select select-bordered w-full",
                                onchange: move |evt| kind_input.set(evt.value()),
                                for kind in SlotKind::ALL {
                                    option {
                                        value: kind.value(),
                                        selected: *kind_input.read() == kind.value(),
                                        {kind.label()}
                                    }
                                }
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
                                "{slot.activity}"
                            }
                            div { class: "flex gap-4 text-sm opacity-70",
                                div { class: "flex items-center gap-1",
                                    Icon {
                                        width: 14,
                                        height: 14,
                                        icon: FaClock
                                    }
                                    p {
                                        "{time_label}"
                                    }
                                }
                                if !slot.location.is_empty() {
                                    div { class: "flex items-center gap-1",
                                        Icon {
                                            width: 14,
                                            height: 14,
                                            icon: FaLocationDot
                                        }
                                        p {
                                            "{slot.location}"
                                        }
                                    }
                                }
                                span { class: "badge badge-outline",
                                    "{kind_label}"
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
                                onclick: move |_| on_delete.call(slot.id),
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
