pub mod accommodation_card;
pub mod empty_section;
pub mod transportation_card;

pub use accommodation_card::AccommodationCard;
pub use empty_section::EmptySection;
pub use transportation_card::TransportationCard;
