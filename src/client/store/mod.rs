//! Client-side state owned by the running page.
//!
//! Everything in here is in-memory only. The itinerary and overview stores
//! live for one trip-details page instance and are dropped on unmount; the
//! auth store lives for the whole app and mirrors the persisted token slot.

pub mod auth;
pub mod itinerary;
pub mod overview;

#[cfg(test)]
mod tests;

use std::sync::atomic::{AtomicU64, Ordering};

static NEXT_ID: AtomicU64 = AtomicU64::new(1);

/// Returns a process-wide unique id for locally created records.
///
/// Ids only need to be unique among records created by this page load, so a
/// counter is enough and keeps tests deterministic.
pub fn next_id() -> u64 {
    NEXT_ID.fetch_add(1, Ordering::Relaxed)
}
