//! structedit command-line tool.
//!
//! Applies one path edit to a JSON document and prints the result:
//! - `get <path>` - Print the value at path (`null` when absent)
//! - `set <path> <json>` - Write JSON at path
//! - `delete <path> [--cleanup]` - Remove the value at path
//! - `splice <path> <start> <delete_count> [json...]` - Splice the list at path
//! - `push <path> <json>` - Append to the list at path
//! - `pop <path>` - Remove the last element of the list at path
//! - `equal <json>` - Form-style deep equality against the document
//!
//! The document is read from `--input` or stdin. An empty document is
//! treated as absent.

mod error;

use std::io::Read;
use std::path::PathBuf;

use clap::{Parser, Subcommand};
use serde_json::Value as JsonValue;
use structedit_core::field_array;
use structedit_core::{Path, Representation, Structure, Value};
use structedit_serde::TypedAccess;
use tracing::debug;

pub use error::CliError;

/// structedit - apply a path edit to a JSON document
#[derive(Parser, Debug)]
#[command(name = "structedit")]
#[command(author, version, about, long_about = None)]
pub struct Args {
    /// Read the document from FILE instead of stdin
    #[arg(long, short, value_name = "FILE")]
    pub input: Option<PathBuf>,

    /// Container backing for edits (plain or persistent)
    #[arg(
        long,
        short,
        env = "STRUCTEDIT_REPRESENTATION",
        default_value_t = Representation::Plain
    )]
    pub representation: Representation,

    /// Print JSON on a single line
    #[arg(long)]
    pub compact: bool,

    #[command(subcommand)]
    pub command: Command,
}

#[derive(Subcommand, Debug, Clone)]
pub enum Command {
    /// Print the value at PATH
    Get { path: String },

    /// Write JSON at PATH
    Set { path: String, json: String },

    /// Remove the value at PATH
    Delete {
        path: String,

        /// Also remove map ancestors left empty
        #[arg(long)]
        cleanup: bool,
    },

    /// Remove DELETE_COUNT elements at START from the list at PATH and insert ITEMS
    Splice {
        path: String,
        start: usize,
        delete_count: usize,
        items: Vec<String>,
    },

    /// Append JSON to the list at PATH
    Push { path: String, json: String },

    /// Remove the last element of the list at PATH
    Pop { path: String },

    /// Compare the document with JSON, treating blank values as equal
    Equal { json: String },
}

fn parse_json(argument: &str) -> Result<JsonValue, CliError> {
    serde_json::from_str(argument).map_err(|source| CliError::InvalidArgument {
        argument: argument.to_string(),
        source,
    })
}

/// Read the document from `input`, or stdin when `None`.
pub fn read_document(input: Option<&std::path::Path>) -> Result<Option<JsonValue>, CliError> {
    let text = match input {
        Some(file) => std::fs::read_to_string(file)?,
        None => {
            let mut text = String::new();
            std::io::stdin().read_to_string(&mut text)?;
            text
        }
    };

    if text.trim().is_empty() {
        return Ok(None);
    }
    Ok(Some(serde_json::from_str(&text)?))
}

/// Execute `command` against `document` and return the JSON to print.
pub fn run_command(
    structure: &dyn Structure,
    document: Option<&Value>,
    command: &Command,
) -> Result<JsonValue, CliError> {
    debug!(?command, representation = %structure.representation(), "running command");

    let result = match command {
        Command::Get { path } => {
            let found = structure.get_in(document, &Path::parse(path));
            return Ok(found.map(|value| structure.to_json(value)).unwrap_or(JsonValue::Null));
        }
        Command::Set { path, json } => {
            let value = structure.from_json(parse_json(json)?);
            Some(structure.set_in(document, &Path::parse(path), value))
        }
        Command::Delete { path, cleanup } => {
            let path = Path::parse(path);
            if *cleanup {
                structure.delete_in_with_cleanup(document, &path)?
            } else {
                structure.delete_in(document, &path)?
            }
        }
        Command::Splice {
            path,
            start,
            delete_count,
            items,
        } => {
            let slots = items
                .iter()
                .map(|item| -> Result<Option<Value>, CliError> {
                    Ok(Some(structure.from_json(parse_json(item)?)))
                })
                .collect::<Result<Vec<_>, _>>()?;
            Some(field_array::array_splice(
                structure,
                document,
                &Path::parse(path),
                *start,
                *delete_count,
                slots,
            ))
        }
        Command::Push { path, json } => {
            let value = structure.from_json(parse_json(json)?);
            Some(field_array::array_push(
                structure,
                document,
                &Path::parse(path),
                Some(value),
            ))
        }
        Command::Pop { path } => Some(field_array::array_pop(
            structure,
            document,
            &Path::parse(path),
        )),
        Command::Equal { json } => {
            let other = structure.from_json(parse_json(json)?);
            return Ok(JsonValue::Bool(
                structure.deep_equal(document, Some(&other)),
            ));
        }
    };

    Ok(result
        .map(|value| structure.to_json(&value))
        .unwrap_or(JsonValue::Null))
}

/// Format `json` for output.
pub fn render(json: &JsonValue, compact: bool) -> Result<String, CliError> {
    if compact {
        Ok(serde_json::to_string(json)?)
    } else {
        Ok(serde_json::to_string_pretty(json)?)
    }
}

/// Read the document, run the command and render the result.
pub fn run(args: &Args) -> Result<String, CliError> {
    let structure = args.representation.structure();
    let document = read_document(args.input.as_deref())?.map(|json| structure.from_json(json));
    let result = run_command(structure, document.as_ref(), &args.command)?;
    render(&result, args.compact)
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;
    use structedit_core::{PERSISTENT, PLAIN};

    fn both() -> [&'static dyn Structure; 2] {
        [&PLAIN, &PERSISTENT]
    }

    fn run_on(structure: &dyn Structure, document: JsonValue, command: Command) -> JsonValue {
        let document = structure.from_json(document);
        run_command(structure, Some(&document), &command).unwrap()
    }

    #[test]
    fn get_reads_path() {
        for structure in both() {
            let document = json!({"foo": {"bar": ["baz", {"dog": 42}]}});
            let get = |path: &str| {
                run_on(structure, document.clone(), Command::Get { path: path.into() })
            };
            assert_eq!(get("foo.bar[1].dog"), json!(42));
            assert_eq!(get("foo.missing"), JsonValue::Null);
        }
    }

    #[test]
    fn set_creates_path() {
        for structure in both() {
            let result = run_on(
                structure,
                json!({}),
                Command::Set {
                    path: "a.b[0]".into(),
                    json: r#""success""#.into(),
                },
            );
            assert_eq!(result, json!({"a": {"b": ["success"]}}));
        }
    }

    #[test]
    fn set_on_absent_document() {
        let command = Command::Set {
            path: "a".into(),
            json: "1".into(),
        };
        assert_eq!(run_command(&PLAIN, None, &command).unwrap(), json!({"a": 1}));
    }

    #[test]
    fn set_rejects_bad_json() {
        let command = Command::Set {
            path: "a".into(),
            json: "not json".into(),
        };
        let err = run_command(&PLAIN, None, &command).unwrap_err();
        assert!(matches!(err, CliError::InvalidArgument { ref argument, .. } if argument == "not json"));
    }

    #[test]
    fn delete_and_cleanup() {
        for structure in both() {
            let document = json!({"a": {"b": {"c": 1}}, "x": 2});
            let plain = run_on(
                structure,
                document.clone(),
                Command::Delete {
                    path: "a.b.c".into(),
                    cleanup: false,
                },
            );
            assert_eq!(plain, json!({"a": {"b": {}}, "x": 2}));

            let cleaned = run_on(
                structure,
                document,
                Command::Delete {
                    path: "a.b.c".into(),
                    cleanup: true,
                },
            );
            assert_eq!(cleaned, json!({"x": 2}));
        }
    }

    #[test]
    fn delete_key_from_list_fails() {
        let document = PLAIN.from_json(json!({"foo": ["dog"]}));
        let command = Command::Delete {
            path: "foo[bar]".into(),
            cleanup: false,
        };
        let err = run_command(&PLAIN, Some(&document), &command).unwrap_err();
        assert!(matches!(err, CliError::Core(structedit_core::Error::InvalidIndex { .. })));
    }

    #[test]
    fn splice_push_pop() {
        for structure in both() {
            let document = json!({"items": ["a", "b", "c", "d"]});
            let spliced = run_on(
                structure,
                document.clone(),
                Command::Splice {
                    path: "items".into(),
                    start: 1,
                    delete_count: 1,
                    items: vec![r#""e""#.into()],
                },
            );
            assert_eq!(spliced, json!({"items": ["a", "e", "c", "d"]}));

            let pushed = run_on(
                structure,
                document.clone(),
                Command::Push {
                    path: "items".into(),
                    json: "5".into(),
                },
            );
            assert_eq!(pushed, json!({"items": ["a", "b", "c", "d", 5]}));

            let popped = run_on(structure, document, Command::Pop { path: "items".into() });
            assert_eq!(popped, json!({"items": ["a", "b", "c"]}));
        }
    }

    #[test]
    fn equal_is_form_equality() {
        for structure in both() {
            let equal = run_on(
                structure,
                json!({"a": {"b": ""}}),
                Command::Equal {
                    json: r#"{"a": {}}"#.into(),
                },
            );
            assert_eq!(equal, json!(true));
            let different = run_on(
                structure,
                json!({"a": 1}),
                Command::Equal {
                    json: r#"{"a": 2}"#.into(),
                },
            );
            assert_eq!(different, json!(false));
        }
    }

    #[test]
    fn render_modes() {
        let json = json!({"a": [1, 2]});
        assert_eq!(render(&json, true).unwrap(), r#"{"a":[1,2]}"#);
        assert!(render(&json, false).unwrap().contains('\n'));
    }
}
