use crate::client::store::overview::{
    AccommodationRecord, RecordList, TransportKind, TransportationRecord,
};

/// Expect placeholder records to receive distinct ids
#[test]
fn placeholders_get_distinct_ids() {
    let first = AccommodationRecord::placeholder();
    let second = AccommodationRecord::placeholder();

    assert_ne!(first.id, second.id);
    assert!(first.name.is_empty());
}

/// Expect update by id to replace the matching record in place
#[test]
fn update_replaces_matching_record() {
    let mut list = RecordList::new();
    let mut record = AccommodationRecord::placeholder();
    let id = record.id;
    list.add(record.clone());

    record.name = "Harbour Hotel".to_string();
    record.address = "1 Quay St".to_string();
    let found = list.update(record);

    assert!(found);
    assert_eq!(list.len(), 1);
    let stored = list.iter().next().unwrap();
    assert_eq!(stored.id, id);
    assert_eq!(stored.name, "Harbour Hotel");
}

/// Expect an update against an unknown id to report no match
#[test]
fn update_reports_missing_record() {
    let mut list = RecordList::new();
    list.add(TransportationRecord::placeholder());

    let mut stray = TransportationRecord::placeholder();
    stray.origin = "Lisbon".to_string();

    assert!(!list.update(stray));
    assert!(list.iter().all(|record| record.origin.is_empty()));
}

/// Expect remove by id to drop the record and report the match
#[test]
fn remove_drops_matching_record() {
    let mut list = RecordList::new();
    let record = TransportationRecord::placeholder();
    let id = record.id;
    list.add(record);
    list.add(TransportationRecord::placeholder());

    assert!(list.remove(id));
    assert_eq!(list.len(), 1);
    assert!(!list.remove(id));
}

/// Expect insertion order to be preserved across edits
#[test]
fn records_keep_insertion_order() {
    let mut list = RecordList::new();
    let mut first = AccommodationRecord::placeholder();
    first.name = "First".to_string();
    let mut second = AccommodationRecord::placeholder();
    second.name = "Second".to_string();
    list.add(first.clone());
    list.add(second);

    first.name = "First, renamed".to_string();
    list.update(first);

    let names: Vec<&str> = list.iter().map(|record| record.name.as_str()).collect();
    assert_eq!(names, vec!["First, renamed", "Second"]);
}

/// Expect transport kind form values to round-trip and reject junk
#[test]
fn transport_kind_parses_form_values() {
    assert_eq!(TransportKind::from_value("train"), Some(TransportKind::Train));
    assert_eq!(TransportKind::from_value("teleport"), None);
    assert_eq!(TransportKind::Car.label(), "Car Rental");
}
