//! Runs the `degrees` binary against a small on-disk dataset.

use std::path::Path;
use std::process::Command;

fn write_dataset(dir: &Path) {
    std::fs::write(dir.join("people.csv"), "id,name,birth\n1,Alice,1970\n2,Bob,\n").unwrap();
    std::fs::write(dir.join("movies.csv"), "id,title,year\n11,First,2001\n").unwrap();
    std::fs::write(dir.join("stars.csv"), "person_id,movie_id\n1,11\n2,11\n").unwrap();
}

fn degrees(dir: &Path, source: &str, target: &str) -> std::process::Output {
    Command::new(env!("CARGO_BIN_EXE_degrees"))
        .arg(dir)
        .args(["--source", source, "--target", target])
        .env_remove("RUST_LOG")
        .output()
        .unwrap()
}

#[test]
fn test_unknown_name_reported_on_stderr() {
    let dir = tempfile::tempdir().unwrap();
    write_dataset(dir.path());

    let output = degrees(dir.path(), "Nobody", "Bob");
    let stdout = String::from_utf8(output.stdout).unwrap();
    let stderr = String::from_utf8(output.stderr).unwrap();

    assert!(!output.status.success());
    assert!(stderr.contains("Person not found."));
    assert!(!stdout.contains("Person not found."));
}

#[test]
fn test_connected_names_print_narrative() {
    let dir = tempfile::tempdir().unwrap();
    write_dataset(dir.path());

    let output = degrees(dir.path(), "alice", "BOB");
    let stdout = String::from_utf8(output.stdout).unwrap();

    assert!(output.status.success());
    assert_eq!(
        stdout,
        "Loading data...\n\
         Data loaded.\n\
         1 degrees of separation.\n\
         1: Alice and Bob starred in First\n"
    );
}
