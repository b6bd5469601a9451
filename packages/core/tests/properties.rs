//! Invariants of the edit operations, checked over a table of paths.

use collection_literals::btree;
use structedit_core::{deep_equal, path, Path, Structure, Value, PERSISTENT, PLAIN};

fn both() -> [&'static dyn Structure; 2] {
    [&PLAIN, &PERSISTENT]
}

const PATHS: &[&str] = &[
    "a",
    "a.b.c",
    "a.b[0]",
    "a.b[3].c",
    "list[1]",
    "list[5].deep[2]",
    "map.inner",
    "map.new.key",
    "map[key]",
    "[0]",
];

fn states() -> Vec<Option<Value>> {
    let populated = Value::from(btree! {
        "list".to_string() => Value::from(vec!["x", "y", "z"]),
        "map".to_string() => Value::from(btree! {
            "inner".to_string() => Value::from(1),
            "key".to_string() => Value::from(vec![1, 2]),
        }),
    });
    vec![None, Some(Value::map()), Some(populated)]
}

fn sample_values() -> Vec<Value> {
    vec![
        Value::from("v"),
        Value::from(7),
        Value::from(vec![1, 2]),
        Value::from(btree! { "k".to_string() => Value::from(false) }),
    ]
}

#[test]
fn set_then_get_round_trips() {
    for structure in both() {
        for state in states() {
            let state = state.map(|s| structure.from_plain(s));
            for raw in PATHS {
                let path = path!(raw);
                for value in sample_values() {
                    let updated = structure.set_in(state.as_ref(), &path, value.clone());
                    let read = structure.get_in(Some(&updated), &path);
                    assert!(
                        deep_equal(read, Some(&value)),
                        "{:?} {} on {:?}: read {:?}",
                        structure,
                        raw,
                        state,
                        read
                    );
                }
            }
        }
    }
}

#[test]
fn set_and_delete_do_not_mutate_input() {
    for structure in both() {
        for state in states().into_iter().flatten() {
            let state = structure.from_plain(state);
            let snapshot = structure.to_plain(&state);
            for raw in PATHS {
                let path = path!(raw);
                let _ = structure.set_in(Some(&state), &path, Value::from("changed"));
                let _ = structure.delete_in(Some(&state), &path);
                let _ = structure.delete_in_with_cleanup(Some(&state), &path);
                assert_eq!(state, snapshot, "{:?} {}", structure, raw);
            }
        }
    }
}

#[test]
fn delete_of_missing_path_is_identity() {
    let missing = ["nope", "map.nope", "map.inner.deeper", "list[9]", "map.key[4]"];
    for structure in both() {
        for state in states().into_iter().flatten() {
            let state = structure.from_plain(state);
            for raw in missing {
                let path = path!(raw);
                assert!(structure.get_in(Some(&state), &path).is_none());
                let result = structure.delete_in(Some(&state), &path).unwrap().unwrap();
                assert!(result.ptr_eq(&state), "{:?} {}", structure, raw);
            }
        }
    }
}

#[test]
fn delete_then_get_is_absent_for_map_keys() {
    for structure in both() {
        let state = structure.from_plain(states().pop().flatten().unwrap_or_default());
        for raw in ["map.inner", "map.key", "list"] {
            let path = path!(raw);
            let result = structure.delete_in(Some(&state), &path).unwrap().unwrap();
            assert!(structure.get_in(Some(&result), &path).is_none());
            assert!(structure.get_in(Some(&state), &path).is_some());
        }
    }
}

#[test]
fn delete_shares_untouched_subtrees() {
    for structure in both() {
        let state = structure.from_plain(states().pop().flatten().unwrap_or_default());
        let result = structure.delete_in(Some(&state), &path!("map.inner")).unwrap().unwrap();
        let before = structure.get_in(Some(&state), &path!("list"));
        let after = structure.get_in(Some(&result), &path!("list"));
        assert!(matches!((before, after), (Some(b), Some(a)) if a.ptr_eq(b)));
    }
}

#[test]
fn set_shares_untouched_subtrees() {
    for structure in both() {
        let state = structure.from_plain(states().pop().flatten().unwrap_or_default());
        let result = structure.set_in(Some(&state), &path!("map.inner"), Value::from(2));
        let before = structure.get_in(Some(&state), &path!("list"));
        let after = structure.get_in(Some(&result), &path!("list"));
        assert!(matches!((before, after), (Some(b), Some(a)) if a.ptr_eq(b)));
    }
}

#[test]
fn empty_splice_is_identity() {
    for structure in both() {
        let list = structure.from_plain(Value::from(vec!["a", "b", "c"]));
        for start in 0..5 {
            let result = structure.splice(Some(&list), start, 0, Vec::new());
            assert!(result.ptr_eq(&list));
            assert_eq!(result, list);
        }
    }
}

#[test]
fn blank_equivalence_symmetry() {
    let undefined: Option<&Value> = None;
    let empty = Value::from("");
    let null = Value::Null;
    let no = Value::from(false);
    assert!(deep_equal(undefined, Some(&empty)));
    assert!(deep_equal(Some(&empty), undefined));
    assert!(deep_equal(Some(&null), Some(&no)));
    assert!(deep_equal(Some(&no), Some(&null)));
}

#[test]
fn deep_equal_is_symmetric_over_fixtures() {
    let mut values: Vec<Option<Value>> = states();
    values.extend(sample_values().into_iter().map(Some));
    values.push(Some(Value::from("")));
    values.push(Some(Value::list()));
    for a in &values {
        for b in &values {
            assert_eq!(
                deep_equal(a.as_ref(), b.as_ref()),
                deep_equal(b.as_ref(), a.as_ref()),
                "{:?} vs {:?}",
                a,
                b
            );
        }
    }
}

#[test]
fn path_parsing_is_total() {
    for raw in ["", ".", "[", "]", "a[", "a]b", "[[0]]", "a.[0]", "\u{1F600}.x", "a['unterminated"] {
        let path = Path::parse(raw);
        let _ = PLAIN.set_in(None, &path, Value::from(1));
    }
}
