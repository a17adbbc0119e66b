use dioxus::prelude::*;

use crate::client::{
    components::{auth::ProtectedLayout, Navbar},
    routes::{
        trips::{EditTrip, NewTrip, TripDetails},
        Dashboard, Home, Login, NotFound, Register,
    },
};

#[derive(Debug, Clone, Routable, PartialEq)]
#[rustfmt::skip]
pub enum Route {
    #[layout(Navbar)]

    #[route("/")]
    Home {},

    #[route("/login")]
    Login {},

    #[route("/register")]
    Register {},

    #[route("/:..segments")]
    NotFound { segments: Vec<String> },

    #[end_layout]

    #[layout(ProtectedLayout)]

        #[route("/dashboard")]
        Dashboard {},

        #[nest("/trips")]

            #[route("/new")]
            NewTrip {},

            #[route("/:trip_id")]
            TripDetails { trip_id: i64 },

            #[route("/:trip_id/edit")]
            EditTrip { trip_id: i64 },
}
