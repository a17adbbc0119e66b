pub mod details;
pub mod edit;
pub mod new;

pub use details::TripDetails;
pub use edit::EditTrip;
pub use new::NewTrip;
