//! Local accommodation and transportation lists for the trip overview tab.
//!
//! Both lists are edited in place and are never sent to the server; syncing
//! them is a deliberate extension point.

use super::next_id;

/// Record types stored in a [`RecordList`].
pub trait Keyed {
    fn id(&self) -> u64;
}

/// An ordered list of records addressed by id.
#[derive(Clone, Debug, PartialEq)]
pub struct RecordList<T> {
    records: Vec<T>,
}

impl<T> Default for RecordList<T> {
    fn default() -> Self {
        Self {
            records: Vec::new(),
        }
    }
}

impl<T: Keyed> RecordList<T> {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn is_empty(&self) -> bool {
        self.records.is_empty()
    }

    pub fn len(&self) -> usize {
        self.records.len()
    }

    /// Records in insertion order.
    pub fn iter(&self) -> std::slice::Iter<'_, T> {
        self.records.iter()
    }

    /// Appends the record.
    pub fn add(&mut self, record: T) {
        self.records.push(record);
    }

    /// Replaces the record carrying the same id. Returns whether a match was
    /// found.
    pub fn update(&mut self, record: T) -> bool {
        match self
            .records
            .iter_mut()
            .find(|existing| existing.id() == record.id())
        {
            Some(existing) => {
                *existing = record;
                true
            }
            None => false,
        }
    }

    /// Removes the record by id. Returns whether a match was found.
    pub fn remove(&mut self, id: u64) -> bool {
        let before = self.records.len();
        self.records.retain(|record| record.id() != id);
        self.records.len() != before
    }
}

/// A place to stay during the trip.
///
/// The datetime fields are form-local strings straight from the inputs; they
/// are never parsed because the records never leave the page.
#[derive(Clone, Debug, PartialEq)]
pub struct AccommodationRecord {
    pub id: u64,
    pub name: String,
    pub address: String,
    pub check_in: String,
    pub check_out: String,
    pub booking_ref: String,
}

impl AccommodationRecord {
    /// Seeds a blank record for inline editing.
    pub fn placeholder() -> Self {
        AccommodationRecord {
            id: next_id(),
            name: String::new(),
            address: String::new(),
            check_in: String::new(),
            check_out: String::new(),
            booking_ref: String::new(),
        }
    }
}

impl Keyed for AccommodationRecord {
    fn id(&self) -> u64 {
        self.id
    }
}

/// How a transportation leg is travelled.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum TransportKind {
    Flight,
    Train,
    Bus,
    Car,
}

impl TransportKind {
    pub const ALL: [TransportKind; 4] = [
        TransportKind::Flight,
        TransportKind::Train,
        TransportKind::Bus,
        TransportKind::Car,
    ];

    /// Label shown in the transport type selector.
    pub fn label(self) -> &'static str {
        match self {
            TransportKind::Flight => "Flight",
            TransportKind::Train => "Train",
            TransportKind::Bus => "Bus",
            TransportKind::Car => "Car Rental",
        }
    }

    /// Form value for the transport type selector.
    pub fn value(self) -> &'static str {
        match self {
            TransportKind::Flight => "flight",
            TransportKind::Train => "train",
            TransportKind::Bus => "bus",
            TransportKind::Car => "car",
        }
    }

    /// Parses a form value back into a kind.
    pub fn from_value(value: &str) -> Option<TransportKind> {
        TransportKind::ALL
            .into_iter()
            .find(|kind| kind.value() == value)
    }
}

/// A transportation leg of the trip.
#[derive(Clone, Debug, PartialEq)]
pub struct TransportationRecord {
    pub id: u64,
    pub kind: TransportKind,
    pub origin: String,
    pub destination: String,
    pub departure: String,
    pub arrival: String,
    pub booking_ref: String,
}

impl TransportationRecord {
    /// Seeds a blank record for inline editing.
    pub fn placeholder() -> Self {
        TransportationRecord {
            id: next_id(),
            kind: TransportKind::Flight,
            origin: String::new(),
            destination: String::new(),
            departure: String::new(),
            arrival: String::new(),
            booking_ref: String::new(),
        }
    }
}

impl Keyed for TransportationRecord {
    fn id(&self) -> u64 {
        self.id
    }
}
