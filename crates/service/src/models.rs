//! Catalog entities as stored in the search engine.
//!
//! Every type here deserializes directly from an engine document and
//! serializes to the cache payload, so field names follow the index mappings.

use std::collections::BTreeSet;
use std::fmt;

use serde::de::DeserializeOwned;
use serde::{Deserialize, Serialize};

/// A typed catalog entity served through [`EntityService`](crate::EntityService).
pub trait Entity: Serialize + DeserializeOwned + Send + Sync + 'static {
    /// Entity kind, used as the cache key prefix.
    const KIND: &'static str;

    /// The entity id.
    fn id(&self) -> &str;

    /// Checks invariants that the document shape alone cannot express.
    fn validate(&self) -> Result<(), String> {
        Ok(())
    }
}

/// A credited contributor embedded in a film document.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct FilmPerson {
    pub id: String,
    pub name: String,
}

/// A film.
///
/// Credits are stored twice: as id+name references (`actors`, ...) and as
/// plain name lists (`actors_names`, ...). The two representations are
/// positionally aligned.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Film {
    pub id: String,
    pub title: String,
    #[serde(default)]
    pub description: Option<String>,
    #[serde(default)]
    pub imdb_rating: Option<f64>,
    #[serde(default)]
    pub actors: Vec<FilmPerson>,
    #[serde(default)]
    pub writers: Vec<FilmPerson>,
    #[serde(default)]
    pub directors: Vec<FilmPerson>,
    /// Genre names, not ids.
    #[serde(default)]
    pub genres: Vec<String>,
    #[serde(default)]
    pub actors_names: Vec<String>,
    #[serde(default)]
    pub writers_names: Vec<String>,
    #[serde(default)]
    pub directors_names: Vec<String>,
}

impl Film {
    /// Returns the credited references for `role`.
    pub fn credits(&self, role: Role) -> &[FilmPerson] {
        match role {
            Role::Actor => &self.actors,
            Role::Director => &self.directors,
            Role::Writer => &self.writers,
        }
    }

    /// Returns the flattened name list for `role`.
    pub fn names(&self, role: Role) -> &[String] {
        match role {
            Role::Actor => &self.actors_names,
            Role::Director => &self.directors_names,
            Role::Writer => &self.writers_names,
        }
    }
}

impl Entity for Film {
    const KIND: &'static str = "movies";

    fn id(&self) -> &str {
        &self.id
    }

    fn validate(&self) -> Result<(), String> {
        for role in Role::ALL {
            let (credits, names) = (self.credits(role).len(), self.names(role).len());
            if credits != names {
                return Err(format!(
                    "{} has {} references but {} names",
                    role.nested_path(),
                    credits,
                    names
                ));
            }
        }
        Ok(())
    }
}

/// A genre.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Genre {
    pub id: String,
    pub name: String,
    #[serde(default)]
    pub description: Option<String>,
}

impl Entity for Genre {
    const KIND: &'static str = "genres";

    fn id(&self) -> &str {
        &self.id
    }
}

/// A contributor role within a film.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Role {
    Actor,
    Director,
    Writer,
}

impl Role {
    /// Every role, in derivation order.
    pub const ALL: [Role; 3] = [Role::Actor, Role::Director, Role::Writer];

    /// Returns the role label (`actor`, `director`, `writer`).
    pub fn as_str(&self) -> &'static str {
        match self {
            Role::Actor => "actor",
            Role::Director => "director",
            Role::Writer => "writer",
        }
    }

    /// Returns the nested collection holding this role's credits in a film
    /// document.
    pub fn nested_path(&self) -> &'static str {
        match self {
            Role::Actor => "actors",
            Role::Director => "directors",
            Role::Writer => "writers",
        }
    }
}

impl fmt::Display for Role {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// The roles a person held in one film.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct PersonFilm {
    pub id: String,
    #[serde(default)]
    pub roles: BTreeSet<Role>,
}

/// A person.
///
/// `films` is not part of the person document; it is filled in by
/// [`PersonService`](crate::PersonService) and stays empty otherwise.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Person {
    pub id: String,
    pub full_name: String,
    #[serde(default)]
    pub films: Vec<PersonFilm>,
}

impl Entity for Person {
    const KIND: &'static str = "persons";

    fn id(&self) -> &str {
        &self.id
    }
}
