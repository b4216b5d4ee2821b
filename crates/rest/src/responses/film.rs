use movies_service::{Film, FilmPerson, Genre};
use serde::Serialize;

/// A credited contributor in a film detail.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct FilmPersonOut {
    pub uuid: String,
    pub full_name: String,
}

impl From<&FilmPerson> for FilmPersonOut {
    fn from(person: &FilmPerson) -> Self {
        Self {
            uuid: person.id.clone(),
            full_name: person.name.clone(),
        }
    }
}

/// A resolved genre in a film detail.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct FilmGenreOut {
    pub uuid: String,
    pub name: String,
}

impl From<&Genre> for FilmGenreOut {
    fn from(genre: &Genre) -> Self {
        Self {
            uuid: genre.id.clone(),
            name: genre.name.clone(),
        }
    }
}

/// Film detail.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct FilmOut {
    pub uuid: String,
    pub title: String,
    pub description: Option<String>,
    pub imdb_rating: Option<f64>,
    pub genre: Vec<FilmGenreOut>,
    pub actors: Vec<FilmPersonOut>,
    pub writers: Vec<FilmPersonOut>,
    pub directors: Vec<FilmPersonOut>,
}

impl FilmOut {
    /// Builds the detail view of `film` with its already resolved genres.
    pub fn new(film: Film, genres: &[Genre]) -> Self {
        let credits = |people: &[FilmPerson]| people.iter().map(FilmPersonOut::from).collect();
        Self {
            genre: genres.iter().map(FilmGenreOut::from).collect(),
            actors: credits(&film.actors),
            writers: credits(&film.writers),
            directors: credits(&film.directors),
            uuid: film.id,
            title: film.title,
            description: film.description,
            imdb_rating: film.imdb_rating,
        }
    }
}

/// Film entry in list and search results.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct FilmShortOut {
    pub uuid: String,
    pub title: String,
    pub imdb_rating: Option<f64>,
}

impl From<Film> for FilmShortOut {
    fn from(film: Film) -> Self {
        Self {
            uuid: film.id,
            title: film.title,
            imdb_rating: film.imdb_rating,
        }
    }
}
