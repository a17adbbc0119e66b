//! Local itinerary state for the trip details view.
//!
//! The itinerary is a per-day mapping of time slots covering the span of one
//! trip. Edits are local to the page; nothing here talks to the server. Slot
//! lists keep insertion order in storage and are only sorted by time when a
//! day is displayed.

use std::collections::BTreeMap;

use chrono::{NaiveDate, NaiveTime};
use thiserror::Error;

use super::next_id;

/// Raised when a trip's end date precedes its start date.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Error)]
#[error("end date {end} is before start date {start}")]
pub struct DateRangeError {
    pub start: NaiveDate,
    pub end: NaiveDate,
}

/// Returns every calendar day from `start` to `end` inclusive, ascending.
pub fn date_range(start: NaiveDate, end: NaiveDate) -> Result<Vec<NaiveDate>, DateRangeError> {
    if end < start {
        return Err(DateRangeError { start, end });
    }
    Ok(start.iter_days().take_while(|day| *day <= end).collect())
}

/// What a time slot is scheduled for.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum SlotKind {
    Activity,
    Transportation,
    Accommodation,
    Food,
}

impl SlotKind {
    pub const ALL: [SlotKind; 4] = [
        SlotKind::Activity,
        SlotKind::Transportation,
        SlotKind::Accommodation,
        SlotKind::Food,
    ];

    /// Label shown in the slot type selector.
    pub fn label(self) -> &'static str {
        match self {
            SlotKind::Activity => "Activity",
            SlotKind::Transportation => "Transportation",
            SlotKind::Accommodation => "Accommodation",
            SlotKind::Food => "Food",
        }
    }

    /// Form value for the slot type selector.
    pub fn value(self) -> &'static str {
        match self {
            SlotKind::Activity => "activity",
            SlotKind::Transportation => "transportation",
            SlotKind::Accommodation => "accommodation",
            SlotKind::Food => "food",
        }
    }

    /// Parses a form value back into a kind.
    pub fn from_value(value: &str) -> Option<SlotKind> {
        SlotKind::ALL.into_iter().find(|kind| kind.value() == value)
    }
}

/// A single scheduled entry within a day.
#[derive(Clone, Debug, PartialEq)]
pub struct TimeSlot {
    /// Unique within the slot's day.
    pub id: u64,
    pub time: NaiveTime,
    pub activity: String,
    /// May be empty; only rendered when set.
    pub location: String,
    pub kind: SlotKind,
}

impl TimeSlot {
    /// Seeds the midday slot created by the add-activity button, meant to be
    /// edited in place.
    pub fn placeholder() -> Self {
        TimeSlot {
            id: next_id(),
            time: hm(12, 0),
            activity: String::new(),
            location: String::new(),
            kind: SlotKind::Activity,
        }
    }
}

/// The default day plan applied by the use-template action.
const DEFAULT_TEMPLATE: [(u32, u32, &str, SlotKind); 6] = [
    (9, 0, "Breakfast", SlotKind::Food),
    (10, 0, "Morning Activity", SlotKind::Activity),
    (12, 30, "Lunch", SlotKind::Food),
    (14, 0, "Afternoon Activity", SlotKind::Activity),
    (16, 0, "Free Time / Rest", SlotKind::Activity),
    (19, 0, "Dinner", SlotKind::Food),
];

/// Builds the default set of slots for one day, with fresh ids on every call
/// so repeated seeding never collides.
pub fn template_for_day(_day: NaiveDate) -> Vec<TimeSlot> {
    DEFAULT_TEMPLATE
        .iter()
        .map(|&(hour, minute, activity, kind)| TimeSlot {
            id: next_id(),
            time: hm(hour, minute),
            activity: activity.to_string(),
            location: String::new(),
            kind,
        })
        .collect()
}

/// Midnight fallback only applies to out-of-range input, which the template
/// constants never supply.
fn hm(hour: u32, minute: u32) -> NaiveTime {
    NaiveTime::from_hms_opt(hour, minute, 0).unwrap_or_default()
}

/// Per-day time slot mapping for one trip-details page instance.
#[derive(Clone, Debug, Default, PartialEq)]
pub struct Itinerary {
    days: BTreeMap<NaiveDate, Vec<TimeSlot>>,
}

impl Itinerary {
    pub fn new() -> Self {
        Self::default()
    }

    /// False until one of the seed operations has run.
    pub fn is_seeded(&self) -> bool {
        !self.days.is_empty()
    }

    /// The days currently held, ascending.
    pub fn days(&self) -> impl Iterator<Item = NaiveDate> + '_ {
        self.days.keys().copied()
    }

    /// The day's slots in insertion order; empty when the day is absent.
    pub fn slots(&self, day: NaiveDate) -> &[TimeSlot] {
        self.days.get(&day).map(Vec::as_slice).unwrap_or_default()
    }

    /// The day's slots ordered by time for display.
    pub fn sorted_slots(&self, day: NaiveDate) -> Vec<TimeSlot> {
        let mut slots = self.slots(day).to_vec();
        slots.sort_by_key(|slot| slot.time);
        slots
    }

    /// Appends a slot to the day, creating the day on first use.
    pub fn add_slot(&mut self, day: NaiveDate, slot: TimeSlot) {
        self.days.entry(day).or_default().push(slot);
    }

    /// Replaces the day's slot carrying the same id. Returns whether a match
    /// was found; a `false` means the edit was dropped and the caller should
    /// surface that.
    pub fn update_slot(&mut self, day: NaiveDate, slot: TimeSlot) -> bool {
        let Some(slots) = self.days.get_mut(&day) else {
            return false;
        };
        match slots.iter_mut().find(|existing| existing.id == slot.id) {
            Some(existing) => {
                *existing = slot;
                true
            }
            None => false,
        }
    }

    /// Removes the day's slot by id. Returns whether a match was found.
    pub fn delete_slot(&mut self, day: NaiveDate, slot_id: u64) -> bool {
        let Some(slots) = self.days.get_mut(&day) else {
            return false;
        };
        let before = slots.len();
        slots.retain(|slot| slot.id != slot_id);
        slots.len() != before
    }

    /// Resets every listed day to an empty slot list, dropping whatever the
    /// mapping held before.
    pub fn seed_empty(&mut self, days: &[NaiveDate]) {
        self.days = days.iter().map(|&day| (day, Vec::new())).collect();
    }

    /// Resets every listed day to the default template, dropping whatever the
    /// mapping held before.
    pub fn seed_from_template(&mut self, days: &[NaiveDate]) {
        self.days = days
            .iter()
            .map(|&day| (day, template_for_day(day)))
            .collect();
    }
}
