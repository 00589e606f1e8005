//! In-memory person/movie store.
//!
//! A [`GraphStore`] is assembled once through [`GraphStoreBuilder`] and is
//! read-only afterwards, so any number of searches can borrow it at once.

use std::collections::{BTreeSet, HashMap};
use std::fmt;

use crate::error::{Error, Result};

#[derive(Debug, Clone, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct PersonId(String);

#[derive(Debug, Clone, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct MovieId(String);

impl PersonId {
    pub fn new(id: impl Into<String>) -> Self {
        Self(id.into())
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl MovieId {
    pub fn new(id: impl Into<String>) -> Self {
        Self(id.into())
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for PersonId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

impl fmt::Display for MovieId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Person {
    pub id: PersonId,
    pub name: String,
    /// `None` when the dataset leaves the birth year blank.
    pub birth: Option<u32>,
    pub movies: BTreeSet<MovieId>,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Movie {
    pub id: MovieId,
    pub title: String,
    pub year: Option<u32>,
    pub stars: BTreeSet<PersonId>,
}

/// People, movies and the lower-cased name index.
#[derive(Debug, Default)]
pub struct GraphStore {
    people: HashMap<PersonId, Person>,
    movies: HashMap<MovieId, Movie>,
    names: HashMap<String, BTreeSet<PersonId>>,
}

impl GraphStore {
    pub fn builder() -> GraphStoreBuilder {
        GraphStoreBuilder::default()
    }

    pub fn get_person(&self, id: &PersonId) -> Result<&Person> {
        self.people
            .get(id)
            .ok_or_else(|| Error::PersonNotFound(id.clone()))
    }

    pub fn get_movie(&self, id: &MovieId) -> Result<&Movie> {
        self.movies
            .get(id)
            .ok_or_else(|| Error::MovieNotFound(id.clone()))
    }

    /// Case-insensitive name lookup. Ids come back in ascending order.
    pub fn resolve_name(&self, name: &str) -> Vec<PersonId> {
        self.names
            .get(&name.to_lowercase())
            .map(|ids| ids.iter().cloned().collect())
            .unwrap_or_default()
    }

    pub fn person_count(&self) -> usize {
        self.people.len()
    }

    pub fn movie_count(&self) -> usize {
        self.movies.len()
    }

    // crate-internal fast path for neighbor expansion, skips the error wrapping
    pub(crate) fn person(&self, id: &PersonId) -> Option<&Person> {
        self.people.get(id)
    }

    pub(crate) fn movie(&self, id: &MovieId) -> Option<&Movie> {
        self.movies.get(id)
    }
}

/// Mutable staging area for a [`GraphStore`].
#[derive(Debug, Default)]
pub struct GraphStoreBuilder {
    store: GraphStore,
}

impl GraphStoreBuilder {
    pub fn new() -> Self {
        Self::default()
    }

    /// Adds or replaces a person. Credits already recorded for the id are kept.
    pub fn add_person(
        &mut self,
        id: PersonId,
        name: impl Into<String>,
        birth: Option<u32>,
    ) -> &mut Self {
        let name = name.into();

        if let Some(previous) = self.store.people.get(&id) {
            let key = previous.name.to_lowercase();
            if let Some(ids) = self.store.names.get_mut(&key) {
                ids.remove(&id);
                if ids.is_empty() {
                    self.store.names.remove(&key);
                }
            }
        }

        self.store
            .names
            .entry(name.to_lowercase())
            .or_default()
            .insert(id.clone());

        let person = self.store.people.entry(id.clone()).or_insert_with(|| Person {
            id,
            name: String::new(),
            birth: None,
            movies: BTreeSet::new(),
        });
        person.name = name;
        person.birth = birth;
        self
    }

    /// Adds or replaces a movie. Stars already recorded for the id are kept.
    pub fn add_movie(
        &mut self,
        id: MovieId,
        title: impl Into<String>,
        year: Option<u32>,
    ) -> &mut Self {
        let movie = self.store.movies.entry(id.clone()).or_insert_with(|| Movie {
            id,
            title: String::new(),
            year: None,
            stars: BTreeSet::new(),
        });
        movie.title = title.into();
        movie.year = year;
        self
    }

    /// Records that `person` starred in `movie`.
    ///
    /// Returns `false` and changes nothing when either id is unknown.
    pub fn add_star(&mut self, person: &PersonId, movie: &MovieId) -> bool {
        if !self.store.people.contains_key(person) || !self.store.movies.contains_key(movie) {
            return false;
        }
        if let Some(p) = self.store.people.get_mut(person) {
            p.movies.insert(movie.clone());
        }
        if let Some(m) = self.store.movies.get_mut(movie) {
            m.stars.insert(person.clone());
        }
        true
    }

    pub fn build(self) -> GraphStore {
        self.store
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn pid(s: &str) -> PersonId {
        PersonId::new(s)
    }

    fn mid(s: &str) -> MovieId {
        MovieId::new(s)
    }

    #[test]
    fn test_lookups() {
        let mut builder = GraphStore::builder();
        builder
            .add_person(pid("1"), "Kevin Bacon", Some(1958))
            .add_movie(mid("10"), "Apollo 13", Some(1995));
        assert!(builder.add_star(&pid("1"), &mid("10")));
        let store = builder.build();

        let kevin = store.get_person(&pid("1")).unwrap();
        assert_eq!(kevin.name, "Kevin Bacon");
        assert!(kevin.movies.contains(&mid("10")));
        assert!(store.get_movie(&mid("10")).unwrap().stars.contains(&pid("1")));
        assert_eq!(store.person_count(), 1);
        assert_eq!(store.movie_count(), 1);
    }

    #[test]
    fn test_missing_ids_are_not_found() {
        let store = GraphStore::builder().build();
        assert!(matches!(
            store.get_person(&pid("404")),
            Err(Error::PersonNotFound(id)) if id == pid("404")
        ));
        assert!(matches!(store.get_movie(&mid("404")), Err(Error::MovieNotFound(_))));
    }

    #[test]
    fn test_resolve_name_ignores_case() {
        let mut builder = GraphStore::builder();
        builder
            .add_person(pid("2"), "Emma Watson", Some(1990))
            .add_person(pid("1"), "Emma Watson", None)
            .add_person(pid("3"), "Tom Hanks", Some(1956));
        let store = builder.build();

        assert_eq!(store.resolve_name("EMMA watson"), vec![pid("1"), pid("2")]); // ascending ids
        assert_eq!(store.resolve_name("tom hanks"), vec![pid("3")]);
        assert!(store.resolve_name("Nobody").is_empty());
    }

    #[test]
    fn test_dangling_star_is_rejected() {
        let mut builder = GraphStore::builder();
        builder.add_person(pid("1"), "A", None);
        assert!(!builder.add_star(&pid("1"), &mid("99")));
        assert!(!builder.add_star(&pid("99"), &mid("99")));
        let store = builder.build();
        assert!(store.get_person(&pid("1")).unwrap().movies.is_empty());
    }

    #[test]
    fn test_readding_person_moves_name_index() {
        let mut builder = GraphStore::builder();
        builder
            .add_person(pid("1"), "Old Name", None)
            .add_movie(mid("10"), "M", None);
        builder.add_star(&pid("1"), &mid("10"));
        builder.add_person(pid("1"), "New Name", Some(2000));
        let store = builder.build();

        assert!(store.resolve_name("old name").is_empty());
        assert_eq!(store.resolve_name("new name"), vec![pid("1")]);
        assert!(store.get_person(&pid("1")).unwrap().movies.contains(&mid("10"))); // credits kept
    }
}
