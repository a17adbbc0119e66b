mod itinerary;
mod overview;
