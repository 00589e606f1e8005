use std::io::Write;

use crate::error::Result;
use crate::graph_store::{GraphStore, PersonId};
use crate::path_finder::PathResult;

/// Writes the "N degrees of separation" narrative for a search result.
pub fn write_path<W: Write>(
    store: &GraphStore,
    source: &PersonId,
    result: &PathResult,
    mut out: W,
) -> Result<()> {
    let Some(steps) = result.steps() else {
        writeln!(out, "Not connected.")?;
        return Ok(());
    };

    writeln!(out, "{} degrees of separation.", steps.len())?;
    let mut previous = store.get_person(source)?;
    for (i, step) in steps.iter().enumerate() {
        let person = store.get_person(&step.person)?;
        let movie = store.get_movie(&step.movie)?;
        writeln!(
            out,
            "{}: {} and {} starred in {}",
            i + 1,
            previous.name,
            person.name,
            movie.title
        )?;
        previous = person;
    }
    Ok(())
}
