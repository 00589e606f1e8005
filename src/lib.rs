//! Degrees of separation between people in a cast dataset.
//!
//! Load a dataset with [`data_loading::load_data`], resolve names with
//! [`disambiguation::person_id_for_name`] and search with
//! [`path_finder::find_path`].

pub mod data_loading;
pub mod disambiguation;
pub mod error;
pub mod frontier;
pub mod graph_store;
pub mod neighbors;
pub mod path_finder;
pub mod report;

pub use error::{Error, Result};
pub use graph_store::{GraphStore, GraphStoreBuilder, Movie, MovieId, Person, PersonId};
pub use path_finder::{find_path, PathFinder, PathResult, PathStep, SearchState};
