//! Person to film role resolution.
//!
//! Film documents carry flattened name lists per role, not person ids, so a
//! person's role in a film is found by looking their full name up in each
//! list. Two contributors sharing a name within one film cannot be told
//! apart.

use std::collections::BTreeSet;

use crate::models::{Film, Person, PersonFilm, Role};

/// Returns the roles under which `full_name` is credited in `film`.
pub fn roles_in_film(full_name: &str, film: &Film) -> BTreeSet<Role> {
    Role::ALL
        .into_iter()
        .filter(|role| film.names(*role).iter().any(|name| name == full_name))
        .collect()
}

/// Derives one [`PersonFilm`] per film, in the order the films are given.
///
/// Films where the name appears under no role are still listed, with an
/// empty role set.
pub fn derive_roles(person: &Person, films: &[Film]) -> Vec<PersonFilm> {
    films
        .iter()
        .map(|film| PersonFilm {
            id: film.id.clone(),
            roles: roles_in_film(&person.full_name, film),
        })
        .collect()
}
