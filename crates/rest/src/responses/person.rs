use movies_service::{Film, Person, PersonFilm};
use serde::Serialize;

/// The roles a person held in one film.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct PersonRolesOut {
    pub uuid: String,
    pub roles: Vec<String>,
}

impl From<PersonFilm> for PersonRolesOut {
    fn from(film: PersonFilm) -> Self {
        Self {
            uuid: film.id,
            roles: film.roles.iter().map(|r| r.as_str().to_string()).collect(),
        }
    }
}

/// Person detail and search entry.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct PersonOut {
    pub uuid: String,
    pub full_name: String,
    pub films: Vec<PersonRolesOut>,
}

impl From<Person> for PersonOut {
    fn from(person: Person) -> Self {
        Self {
            uuid: person.id,
            full_name: person.full_name,
            films: person.films.into_iter().map(PersonRolesOut::from).collect(),
        }
    }
}

/// Film entry in a person's filmography.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct PersonFilmOut {
    pub uuid: String,
    pub title: String,
    pub imdb_rating: Option<f64>,
}

impl From<Film> for PersonFilmOut {
    fn from(film: Film) -> Self {
        Self {
            uuid: film.id,
            title: film.title,
            imdb_rating: film.imdb_rating,
        }
    }
}
