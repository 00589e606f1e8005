//! Breadth-first exploration queue.

use std::collections::{HashSet, VecDeque};

use crate::graph_store::{MovieId, PersonId};

/// How a person was reached during one search.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SearchNode {
    pub person: PersonId,
    /// Movie shared with the parent; `None` for the source.
    pub movie: Option<MovieId>,
    /// Index of the parent in the search's list of expanded nodes.
    pub parent: Option<usize>,
}

impl SearchNode {
    pub fn root(person: PersonId) -> Self {
        Self {
            person,
            movie: None,
            parent: None,
        }
    }
}

/// FIFO queue of nodes awaiting expansion plus the explored set.
///
/// A person is accepted at most once while queued and never again after
/// being explored, so every person is expanded at most once per search.
#[derive(Debug, Default)]
pub struct Frontier {
    queue: VecDeque<SearchNode>,
    queued: HashSet<PersonId>,
    explored: HashSet<PersonId>,
}

impl Frontier {
    pub fn new() -> Self {
        Self::default()
    }

    /// Returns `false` without queueing when the person is already queued or explored.
    pub fn push(&mut self, node: SearchNode) -> bool {
        if self.explored.contains(&node.person) || self.queued.contains(&node.person) {
            return false;
        }
        self.queued.insert(node.person.clone());
        self.queue.push_back(node);
        true
    }

    pub fn pop_oldest(&mut self) -> Option<SearchNode> {
        let node = self.queue.pop_front()?;
        self.queued.remove(&node.person);
        Some(node)
    }

    pub fn is_empty(&self) -> bool {
        self.queue.is_empty()
    }

    pub fn len(&self) -> usize {
        self.queue.len()
    }

    pub fn contains_person(&self, person: &PersonId) -> bool {
        self.queued.contains(person)
    }

    pub fn mark_explored(&mut self, person: PersonId) {
        self.explored.insert(person);
    }

    pub fn is_explored(&self, person: &PersonId) -> bool {
        self.explored.contains(person)
    }

    pub fn explored_count(&self) -> usize {
        self.explored.len()
    }
}
