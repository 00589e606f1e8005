use std::io::{BufRead, Write};

use crate::error::Result;
use crate::graph_store::{GraphStore, PersonId};

/// Resolves a typed name to one person id, asking on `output` which one is
/// meant when several people share the name.
///
/// Returns `None` when the name is unknown or the answer is not one of the
/// listed ids.
pub fn person_id_for_name<R: BufRead, W: Write>(
    store: &GraphStore,
    name: &str,
    mut input: R,
    mut output: W,
) -> Result<Option<PersonId>> {
    let mut candidates = store.resolve_name(name);
    match candidates.len() {
        0 => return Ok(None),
        1 => return Ok(candidates.pop()),
        _ => {}
    }

    writeln!(output, "Which '{}'?", name)?;
    for id in &candidates {
        let person = store.get_person(id)?;
        let birth = person
            .birth
            .map(|year| year.to_string())
            .unwrap_or_else(|| "unknown".to_string());
        writeln!(output, "ID: {}, Name: {}, Birth: {}", id, person.name, birth)?;
    }
    write!(output, "Intended Person ID: ")?;
    output.flush()?;

    let mut answer = String::new();
    input.read_line(&mut answer)?;
    let answer = PersonId::new(answer.trim());
    Ok(candidates.into_iter().find(|id| *id == answer))
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Cursor;

    fn store() -> GraphStore {
        let mut builder = GraphStore::builder();
        builder
            .add_person(PersonId::new("1"), "Emma Watson", Some(1990))
            .add_person(PersonId::new("2"), "Emma Watson", None)
            .add_person(PersonId::new("3"), "Tom Hanks", Some(1956));
        builder.build()
    }

    fn ask(name: &str, answer: &str) -> (Option<PersonId>, String) {
        let mut output = Vec::new();
        let id = person_id_for_name(&store(), name, Cursor::new(answer), &mut output).unwrap();
        (id, String::from_utf8(output).unwrap())
    }

    #[test]
    fn test_unique_name_needs_no_prompt() {
        let (id, output) = ask("tom HANKS", "");
        assert_eq!(id, Some(PersonId::new("3")));
        assert!(output.is_empty());
    }

    #[test]
    fn test_unknown_name() {
        let (id, _) = ask("Nobody", "");
        assert_eq!(id, None);
    }

    #[test]
    fn test_ambiguous_name_prompts() {
        let (id, output) = ask("Emma Watson", "2\n");
        assert_eq!(id, Some(PersonId::new("2")));
        assert_eq!(
            output,
            "Which 'Emma Watson'?\n\
             ID: 1, Name: Emma Watson, Birth: 1990\n\
             ID: 2, Name: Emma Watson, Birth: unknown\n\
             Intended Person ID: "
        );
    }

    #[test]
    fn test_ambiguous_name_with_bad_answer() {
        let (id, _) = ask("Emma Watson", "3\n"); // a real id, but not a candidate
        assert_eq!(id, None);
        let (id, _) = ask("Emma Watson", "");
        assert_eq!(id, None);
    }
}
