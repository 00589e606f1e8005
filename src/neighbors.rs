use std::collections::BTreeSet;

use crate::graph_store::{GraphStore, MovieId, PersonId};

/// Returns `(movie_id, person_id)` pairs for people who starred with `person_id`.
///
/// The set is ordered by movie id, then person id, which fixes the order the
/// search expands neighbors in. The person themself is never included, and an
/// unknown id has no neighbors.
pub fn neighbors_for_person(
    store: &GraphStore,
    person_id: &PersonId,
) -> BTreeSet<(MovieId, PersonId)> {
    let mut neighbors = BTreeSet::new();
    let Some(person) = store.person(person_id) else {
        return neighbors;
    };

    for movie_id in &person.movies {
        if let Some(movie) = store.movie(movie_id) {
            for star in movie.stars.iter().filter(|star| *star != person_id) {
                neighbors.insert((movie_id.clone(), star.clone()));
            }
        }
    }
    neighbors
}
