use std::io::{self, BufRead, Write};
use std::path::PathBuf;
use std::process::ExitCode;

use anyhow::{Context, Result};
use clap::Parser;
use tracing_subscriber::EnvFilter;

use degrees::data_loading::load_data;
use degrees::disambiguation::person_id_for_name;
use degrees::report::write_path;
use degrees::{find_path, GraphStore, PersonId};

#[derive(Parser)]
#[command(name = "degrees")]
#[command(about = "Degrees of separation through shared movies", long_about = None)]
struct Cli {
    /// Directory holding people.csv, movies.csv and stars.csv
    #[arg(default_value = "large")]
    directory: PathBuf,

    /// First person's name; prompted for when omitted
    #[arg(long)]
    source: Option<String>,

    /// Second person's name; prompted for when omitted
    #[arg(long)]
    target: Option<String>,
}

fn main() -> Result<ExitCode> {
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn")),
        )
        .with_writer(io::stderr)
        .init();

    let cli = Cli::parse();

    println!("Loading data...");
    let (store, _report) = load_data(&cli.directory)
        .with_context(|| format!("failed to load dataset from {}", cli.directory.display()))?;
    println!("Data loaded.");

    let Some(source) = lookup(&store, cli.source)? else {
        eprintln!("Person not found.");
        return Ok(ExitCode::FAILURE);
    };
    let Some(target) = lookup(&store, cli.target)? else {
        eprintln!("Person not found.");
        return Ok(ExitCode::FAILURE);
    };

    let result = find_path(&store, &source, &target);
    write_path(&store, &source, &result, io::stdout().lock())?;
    Ok(ExitCode::SUCCESS)
}

/// Takes the name from the flag or prompts for it, then resolves it to an id.
fn lookup(store: &GraphStore, name: Option<String>) -> Result<Option<PersonId>> {
    let stdin = io::stdin();
    let mut input = stdin.lock();
    let name = match name {
        Some(name) => name,
        None => {
            print!("Name: ");
            io::stdout().flush()?;
            let mut line = String::new();
            input.read_line(&mut line)?;
            line.trim().to_string()
        }
    };
    Ok(person_id_for_name(store, &name, input, io::stdout().lock())?)
}
