use chrono::NaiveDate;
use dioxus::prelude::*;
use dioxus_free_icons::icons::fa_solid_icons::{FaChevronDown, FaChevronUp, FaPlus};
use dioxus_free_icons::Icon;
use dioxus_logger::tracing;

use crate::client::components::itinerary::SlotCard;
use crate::client::store::itinerary::{Itinerary, TimeSlot};

#[component]
pub fn DayCard(day: NaiveDate, mut itinerary: Signal<Itinerary>) -> Element {
    let mut expanded = use_signal(|| true);

    let slots = itinerary.read().sorted_slots(day);
    let heading = day.format("%A, %B %-d").to_string();

    rsx! {
        div { class: "card bg-base-100 shadow-sm mb-4 overflow-hidden",
            button {
                class: "flex items-center justify-between p-4 bg-primary/10 cursor-pointer w-full text-left",
                onclick: move |_| {
                    let open = expanded();
                    expanded.set(!open);
                },
                h3 { class: "text-lg font-semibold",
                    "{heading}"
                }
                if expanded() {
                    Icon {
                        width: 16,
                        height: 16,
                        icon: FaChevronUp
                    }
                } else {
                    Icon {
                        width: 16,
                        height: 16,
                        icon: FaChevronDown
                    }
                }
            }
            if expanded() {
                div { class: "p-4",
                    if slots.is_empty() {
                        p { class: "text-center opacity-70 py-2",
                            "No activities planned for this day yet."
                        }
                    } else {
                        for slot in slots {
                            SlotCard {
                                slot,
                                on_update: move |updated: TimeSlot| {
                                    if !itinerary.write().update_slot(day, updated) {
                                        tracing::warn!("discarded update for a slot no longer on {day}");
                                    }
                                },
                                on_delete: move |slot_id: u64| {
                                    if !itinerary.write().delete_slot(day, slot_id) {
                                        tracing::warn!("discarded delete for a slot no longer on {day}");
                                    }
                                },
                            }
                        }
                    }
                    button {
                        class: "btn btn-ghost mt-2 flex gap-2",
                        onclick: move |_| {
                            itinerary.write().add_slot(day, TimeSlot::placeholder());
                        },
                        Icon {
                            width: 16,
                            height: 16,
                            icon: FaPlus
                        }
                        p {
                            "Add Activity"
                        }
                    }
                }
            }
        }
    }
}
