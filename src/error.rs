//! Error types for the degrees crate.

use thiserror::Error;

use crate::graph_store::{MovieId, PersonId};

#[derive(Error, Debug)]
pub enum Error {
    /// Lookup of a person id that is not in the store.
    #[error("person not found: {0}")]
    PersonNotFound(PersonId),

    /// Lookup of a movie id that is not in the store.
    #[error("movie not found: {0}")]
    MovieNotFound(MovieId),

    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("CSV error: {0}")]
    Csv(#[from] csv::Error),
}

pub type Result<T> = std::result::Result<T, Error>;
