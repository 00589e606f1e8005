//! Breadth-first shortest-path search between two people.
//!
//! The search is a small state machine: it stays [`SearchState::Searching`]
//! while the frontier has nodes to expand and ends in either
//! [`SearchState::Found`] or [`SearchState::Exhausted`]. Neighbors are
//! expanded in ascending `(movie id, person id)` order, so the same store and
//! endpoints always produce the same path.

use tracing::debug;

use crate::frontier::{Frontier, SearchNode};
use crate::graph_store::{GraphStore, MovieId, PersonId};
use crate::neighbors::neighbors_for_person;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SearchState {
    Searching,
    Found,
    Exhausted,
}

/// One hop of a path: `person` was reached through `movie`.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PathStep {
    pub movie: MovieId,
    pub person: PersonId,
}

impl PathStep {
    pub fn new(movie: MovieId, person: PersonId) -> Self {
        Self { movie, person }
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum PathResult {
    /// Hops from source to target, in order. Empty when source and target are the same person.
    Connected(Vec<PathStep>),
    NotConnected,
}

impl PathResult {
    /// Degrees of separation, or `None` when not connected.
    pub fn degrees(&self) -> Option<usize> {
        match self {
            PathResult::Connected(steps) => Some(steps.len()),
            PathResult::NotConnected => None,
        }
    }

    pub fn steps(&self) -> Option<&[PathStep]> {
        match self {
            PathResult::Connected(steps) => Some(steps),
            PathResult::NotConnected => None,
        }
    }
}

/// One search run over a borrowed store.
///
/// Both ids are expected to exist; an unknown source has no neighbors and
/// simply exhausts.
pub struct PathFinder<'a> {
    store: &'a GraphStore,
    target: PersonId,
    frontier: Frontier,
    expanded: Vec<SearchNode>,
    state: SearchState,
    path: Vec<PathStep>,
}

impl<'a> PathFinder<'a> {
    pub fn new(store: &'a GraphStore, source: PersonId, target: PersonId) -> Self {
        let mut frontier = Frontier::new();
        let state = if source == target {
            SearchState::Found // zero degrees, nothing to expand
        } else {
            frontier.push(SearchNode::root(source));
            SearchState::Searching
        };

        Self {
            store,
            target,
            frontier,
            expanded: Vec::new(),
            state,
            path: Vec::new(),
        }
    }

    pub fn state(&self) -> SearchState {
        self.state
    }

    /// Number of people fully expanded so far.
    pub fn explored_count(&self) -> usize {
        self.frontier.explored_count()
    }

    /// Expands the oldest frontier node. Terminal states are sticky.
    pub fn step(&mut self) -> SearchState {
        if self.state != SearchState::Searching {
            return self.state;
        }

        let Some(node) = self.frontier.pop_oldest() else {
            debug!(explored = self.frontier.explored_count(), "frontier exhausted");
            self.state = SearchState::Exhausted;
            return self.state;
        };

        let parent = self.expanded.len();
        let person = node.person.clone();
        self.expanded.push(node);

        for (movie, neighbor) in neighbors_for_person(self.store, &person) {
            if neighbor == self.target {
                self.path = self.reconstruct(parent, PathStep::new(movie, neighbor));
                self.state = SearchState::Found;
                debug!(
                    explored = self.frontier.explored_count(),
                    degrees = self.path.len(),
                    "target reached"
                );
                return self.state;
            }

            // rejected when already queued or explored
            self.frontier.push(SearchNode {
                person: neighbor,
                movie: Some(movie),
                parent: Some(parent),
            });
        }

        self.frontier.mark_explored(person);
        self.state
    }

    /// Steps until the search ends.
    pub fn run(mut self) -> PathResult {
        loop {
            match self.step() {
                SearchState::Searching => continue,
                SearchState::Found => return PathResult::Connected(self.path),
                SearchState::Exhausted => return PathResult::NotConnected,
            }
        }
    }

    fn reconstruct(&self, mut parent: usize, last: PathStep) -> Vec<PathStep> {
        let mut path = vec![last];
        loop {
            let node = &self.expanded[parent];
            if let Some(movie) = &node.movie {
                path.push(PathStep::new(movie.clone(), node.person.clone()));
            }
            match node.parent {
                Some(index) => parent = index,
                None => break,
            }
        }
        path.reverse();
        path
    }
}

/// Shortest list of `(movie, person)` hops connecting `source` to `target`.
pub fn find_path(store: &GraphStore, source: &PersonId, target: &PersonId) -> PathResult {
    if source == target {
        return PathResult::Connected(Vec::new());
    }
    PathFinder::new(store, source.clone(), target.clone()).run()
}
