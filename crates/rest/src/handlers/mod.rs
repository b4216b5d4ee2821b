//! HTTP request handlers.
//!
//! - [`films`] - film detail, listing and search
//! - [`genres`] - genre detail and listing
//! - [`persons`] - person detail, search and filmography
//! - [`health`] - dependency health report

pub mod films;
pub mod genres;
pub mod health;
pub mod persons;

pub use films::{film_details_handler, film_list_handler, film_search_handler};
pub use genres::{genre_details_handler, genre_list_handler};
pub use health::health_handler;
pub use persons::{person_details_handler, person_films_handler, person_search_handler};
