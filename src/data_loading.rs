//! CSV ingestion of a cast dataset directory.
//!
//! A dataset directory holds `people.csv` (`id,name,birth`), `movies.csv`
//! (`id,title,year`) and `stars.csv` (`person_id,movie_id`), each with a
//! header row.

use std::fs::File;
use std::io::Read;
use std::path::Path;

use serde::Deserialize;
use tracing::{info, warn};

use crate::error::Result;
use crate::graph_store::{GraphStore, GraphStoreBuilder, MovieId, PersonId};

#[derive(Debug, Deserialize)]
struct PersonRow {
    id: String,
    name: String,
    birth: Option<u32>,
}

#[derive(Debug, Deserialize)]
struct MovieRow {
    id: String,
    title: String,
    year: Option<u32>,
}

#[derive(Debug, Deserialize)]
struct StarRow {
    person_id: String,
    movie_id: String,
}

/// A `stars.csv` row pointing at a person or movie that does not exist.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SkippedStar {
    /// 1-based data line, header excluded.
    pub line: usize,
    pub person_id: PersonId,
    pub movie_id: MovieId,
}

#[derive(Debug, Default, Clone, PartialEq, Eq)]
pub struct LoadReport {
    pub people: usize,
    pub movies: usize,
    pub stars: usize,
    pub skipped_stars: Vec<SkippedStar>,
}

/// Loads the three CSV files under `directory` into a [`GraphStore`].
pub fn load_data(directory: &Path) -> Result<(GraphStore, LoadReport)> {
    let people = File::open(directory.join("people.csv"))?;
    let movies = File::open(directory.join("movies.csv"))?;
    let stars = File::open(directory.join("stars.csv"))?;
    let (store, report) = load_from_readers(people, movies, stars)?;

    info!(
        directory = %directory.display(),
        people = report.people,
        movies = report.movies,
        stars = report.stars,
        skipped = report.skipped_stars.len(),
        "dataset loaded"
    );
    Ok((store, report))
}

/// Same as [`load_data`] but over arbitrary readers.
pub fn load_from_readers<P: Read, M: Read, S: Read>(
    people: P,
    movies: M,
    stars: S,
) -> Result<(GraphStore, LoadReport)> {
    let mut builder = GraphStore::builder();
    let mut report = LoadReport::default();

    report.people = load_people(&mut builder, people)?;
    report.movies = load_movies(&mut builder, movies)?;
    load_stars(&mut builder, stars, &mut report)?;

    Ok((builder.build(), report))
}

fn reader<R: Read>(source: R) -> csv::Reader<R> {
    csv::ReaderBuilder::new()
        .trim(csv::Trim::Headers)
        .from_reader(source)
}

fn load_people<R: Read>(builder: &mut GraphStoreBuilder, source: R) -> Result<usize> {
    let mut count = 0;
    for row in reader(source).deserialize::<PersonRow>() {
        let row = row?;
        builder.add_person(PersonId::new(row.id), row.name, row.birth);
        count += 1;
    }
    Ok(count)
}

fn load_movies<R: Read>(builder: &mut GraphStoreBuilder, source: R) -> Result<usize> {
    let mut count = 0;
    for row in reader(source).deserialize::<MovieRow>() {
        let row = row?;
        builder.add_movie(MovieId::new(row.id), row.title, row.year);
        count += 1;
    }
    Ok(count)
}

fn load_stars<R: Read>(
    builder: &mut GraphStoreBuilder,
    source: R,
    report: &mut LoadReport,
) -> Result<()> {
    for (index, row) in reader(source).deserialize::<StarRow>().enumerate() {
        let row = row?;
        let person_id = PersonId::new(row.person_id);
        let movie_id = MovieId::new(row.movie_id);

        if builder.add_star(&person_id, &movie_id) {
            report.stars += 1;
        } else {
            warn!(
                line = index + 1,
                person = %person_id,
                movie = %movie_id,
                "skipping star row with unknown id"
            );
            report.skipped_stars.push(SkippedStar {
                line: index + 1,
                person_id,
                movie_id,
            });
        }
    }
    Ok(())
}
