//! Response schemas.
//!
//! Output types are decoupled from the stored entities: ids are exposed as
//! `uuid` and credits as `full_name`.

mod film;
mod genre;
mod person;

pub use film::{FilmGenreOut, FilmOut, FilmPersonOut, FilmShortOut};
pub use genre::GenreOut;
pub use person::{PersonFilmOut, PersonOut, PersonRolesOut};
