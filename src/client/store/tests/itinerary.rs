use chrono::NaiveDate;

use crate::client::store::itinerary::{
    date_range, template_for_day, DateRangeError, Itinerary, SlotKind, TimeSlot,
};

fn day(value: &str) -> NaiveDate {
    value.parse().unwrap()
}

fn slot(id: u64, time: &str, activity: &str) -> TimeSlot {
    TimeSlot {
        id,
        time: chrono::NaiveTime::parse_from_str(time, "%H:%M").unwrap(),
        activity: activity.to_string(),
        location: String::new(),
        kind: SlotKind::Activity,
    }
}

/// Expect a single-day trip to produce exactly its one day
#[test]
fn date_range_single_day() {
    let range = date_range(day("2024-03-01"), day("2024-03-01")).unwrap();

    assert_eq!(range, vec![day("2024-03-01")]);
    assert_eq!(range[0].to_string(), "2024-03-01");
}

/// Expect an inclusive ascending run of days between the trip bounds
#[test]
fn date_range_spans_inclusive_days() {
    let range = date_range(day("2024-03-01"), day("2024-03-03")).unwrap();

    let keys: Vec<String> = range.iter().map(ToString::to_string).collect();
    assert_eq!(keys, vec!["2024-03-01", "2024-03-02", "2024-03-03"]);
}

/// Expect month and leap-day boundaries to be covered without gaps
#[test]
fn date_range_crosses_month_boundary() {
    let start = day("2024-02-27");
    let end = day("2024-03-02");

    let range = date_range(start, end).unwrap();

    assert_eq!(range.len(), (end - start).num_days() as usize + 1);
    assert!(range.contains(&day("2024-02-29")));
    assert!(range.windows(2).all(|pair| pair[0] < pair[1]));
    assert_eq!(range.first(), Some(&start));
    assert_eq!(range.last(), Some(&end));
}

/// Expect an explicit error when the end date precedes the start date
#[test]
fn date_range_rejects_reversed_bounds() {
    let result = date_range(day("2024-03-03"), day("2024-03-01"));

    assert_eq!(
        result,
        Err(DateRangeError {
            start: day("2024-03-03"),
            end: day("2024-03-01"),
        })
    );
}

/// Expect the template to carry the six fixed slots in ascending time order
#[test]
fn template_has_fixed_times_in_order() {
    let slots = template_for_day(day("2024-03-01"));

    let times: Vec<String> = slots
        .iter()
        .map(|slot| slot.time.format("%H:%M").to_string())
        .collect();
    assert_eq!(
        times,
        vec!["09:00", "10:00", "12:30", "14:00", "16:00", "19:00"]
    );
    assert!(slots.iter().all(|slot| slot.location.is_empty()));
}

/// Expect two template calls for the same day to never share slot ids
#[test]
fn template_ids_are_fresh_per_call() {
    let first = template_for_day(day("2024-03-01"));
    let second = template_for_day(day("2024-03-01"));

    for slot in &first {
        assert!(second.iter().all(|other| other.id != slot.id));
    }
}

/// Expect add then update by id to leave one slot reflecting the update
#[test]
fn update_replaces_matching_slot() {
    let mut itinerary = Itinerary::new();
    let monday = day("2024-03-04");
    itinerary.add_slot(monday, slot(1, "12:00", "Museum"));

    let mut edited = slot(1, "15:30", "Gallery");
    edited.location = "Old Town".to_string();
    let found = itinerary.update_slot(monday, edited.clone());

    assert!(found);
    assert_eq!(itinerary.slots(monday), &[edited]);
}

/// Expect an update against an unknown id to report no match
#[test]
fn update_reports_missing_slot() {
    let mut itinerary = Itinerary::new();
    let monday = day("2024-03-04");
    itinerary.add_slot(monday, slot(1, "12:00", "Museum"));

    assert!(!itinerary.update_slot(monday, slot(99, "15:30", "Gallery")));
    assert!(!itinerary.update_slot(day("2024-03-05"), slot(1, "15:30", "Gallery")));
    assert_eq!(itinerary.slots(monday).len(), 1);
}

/// Expect delete by id to empty the day and report the match
#[test]
fn delete_removes_matching_slot() {
    let mut itinerary = Itinerary::new();
    let monday = day("2024-03-04");
    itinerary.add_slot(monday, slot(1, "12:00", "Museum"));

    assert!(itinerary.delete_slot(monday, 1));
    assert!(itinerary.slots(monday).is_empty());
    assert!(!itinerary.delete_slot(monday, 1));
}

/// Expect display order to be sorted by time regardless of insertion order
#[test]
fn sorted_slots_orders_by_time() {
    let mut itinerary = Itinerary::new();
    let monday = day("2024-03-04");
    itinerary.add_slot(monday, slot(1, "20:00", "Dinner"));
    itinerary.add_slot(monday, slot(2, "08:00", "Breakfast"));
    itinerary.add_slot(monday, slot(3, "13:00", "Lunch"));

    let times: Vec<String> = itinerary
        .sorted_slots(monday)
        .iter()
        .map(|slot| slot.time.format("%H:%M").to_string())
        .collect();
    assert_eq!(times, vec!["08:00", "13:00", "20:00"]);

    // Storage order is untouched.
    assert_eq!(itinerary.slots(monday)[0].id, 1);
}

/// Expect seeding from the template then seeding empty to reset every day
#[test]
fn seed_empty_resets_templated_days() {
    let mut itinerary = Itinerary::new();
    let range = date_range(day("2024-03-01"), day("2024-03-03")).unwrap();

    itinerary.seed_from_template(&range);
    assert!(itinerary.is_seeded());
    assert!(range.iter().all(|&day| itinerary.slots(day).len() == 6));

    itinerary.seed_empty(&range);
    assert!(itinerary.is_seeded());
    assert!(range.iter().all(|&day| itinerary.slots(day).is_empty()));
}

/// Expect seeding to replace the whole mapping, not merge into it
#[test]
fn seed_replaces_previous_days() {
    let mut itinerary = Itinerary::new();
    itinerary.seed_empty(&[day("2024-03-01"), day("2024-03-02")]);
    itinerary.add_slot(day("2024-03-01"), slot(1, "12:00", "Museum"));

    itinerary.seed_empty(&[day("2024-03-02"), day("2024-03-03")]);

    let days: Vec<NaiveDate> = itinerary.days().collect();
    assert_eq!(days, vec![day("2024-03-02"), day("2024-03-03")]);
    assert!(itinerary.slots(day("2024-03-01")).is_empty());
}
