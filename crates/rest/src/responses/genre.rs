use movies_service::Genre;
use serde::Serialize;

/// Genre detail and list entry.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct GenreOut {
    pub uuid: String,
    pub name: String,
    pub description: Option<String>,
}

impl From<Genre> for GenreOut {
    fn from(genre: Genre) -> Self {
        Self {
            uuid: genre.id,
            name: genre.name,
            description: genre.description,
        }
    }
}
