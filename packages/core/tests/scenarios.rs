//! Behaviour shared by both adapters, checked through `&dyn Structure`.

use collection_literals::btree;
use structedit_core::{path, Error, Path, Structure, Value, PERSISTENT, PLAIN};

fn both() -> [&'static dyn Structure; 2] {
    [&PLAIN, &PERSISTENT]
}

fn obj(entries: Vec<(&str, Value)>) -> Value {
    Value::from(
        entries
            .into_iter()
            .map(|(k, v)| (k.to_string(), v))
            .collect::<std::collections::BTreeMap<_, _>>(),
    )
}

fn fixture() -> Value {
    Value::from(btree! {
        "foo".to_string() => Value::from(btree! {
            "bar".to_string() => Value::from(vec![
                Value::from("baz"),
                obj(vec![("dog", Value::from(42))]),
            ]),
        }),
        "other".to_string() => obj(vec![("x", Value::from(true))]),
    })
}

#[test]
fn set_in_creates_nested_maps() {
    for structure in both() {
        let result = structure.set_in(Some(&structure.empty()), &path!("a.b.c"), Value::from("success"));
        let expected = obj(vec![("a", obj(vec![("b", obj(vec![("c", Value::from("success"))]))]))]);
        assert_eq!(result, expected);
        assert_eq!(result.representation(), Some(structure.representation()));
    }
}

#[test]
fn set_in_creates_lists_for_indexes() {
    for structure in both() {
        let result = structure.set_in(Some(&structure.empty()), &path!("a.b[0]"), Value::from("success"));
        let expected = obj(vec![("a", obj(vec![("b", Value::from(vec!["success"]))]))]);
        assert_eq!(result, expected);
        let list = structure.get_in(Some(&result), &path!("a.b"));
        assert_eq!(list.and_then(Value::representation), Some(structure.representation()));
    }
}

#[test]
fn set_in_index_followed_by_key() {
    for structure in both() {
        let result = structure.set_in(None, &path!("a[1].b"), Value::from("deep"));
        let list = structure.get_in(Some(&result), &path!("a")).and_then(Value::as_list);
        let slots: Vec<Option<&Value>> = list.map(|l| l.iter().collect()).unwrap_or_default();
        assert_eq!(slots.len(), 2);
        assert_eq!(slots[0], None);
        assert_eq!(slots[1], Some(&obj(vec![("b", Value::from("deep"))])));
    }
}

#[test]
fn non_numeric_brackets_make_maps() {
    for structure in both() {
        let result = structure.set_in(None, &path!("a.b[c].d[e]"), Value::from(1));
        let expected = obj(vec![(
            "a",
            obj(vec![("b", obj(vec![("c", obj(vec![("d", obj(vec![("e", Value::from(1))]))]))]))]),
        )]);
        assert_eq!(result, expected);
    }
}

#[test]
fn delete_in_removes_list_slot() {
    for structure in both() {
        let state = structure.from_plain(fixture());
        let result = structure
            .delete_in(Some(&state), &path!("foo.bar[0]"))
            .unwrap()
            .unwrap();
        let bar = structure.get_in(Some(&result), &path!("foo.bar"));
        assert_eq!(bar, Some(&Value::from(vec![obj(vec![("dog", Value::from(42))])])));
    }
}

#[test]
fn delete_in_rejects_key_into_list() {
    for structure in both() {
        let state = structure.from_plain(obj(vec![("foo", Value::from(vec!["dog"]))]));
        let result = structure.delete_in(Some(&state), &path!("foo[bar]"));
        assert!(matches!(result, Err(Error::InvalidIndex { .. })));
    }
}

#[test]
fn splice_replaces_in_place() {
    for structure in both() {
        let list = structure.from_plain(Value::from(vec!["a", "b", "c", "d"]));
        let result = structure.splice(Some(&list), 1, 1, vec![Some(Value::from("e"))]);
        assert_eq!(result, Value::from(vec!["a", "e", "c", "d"]));
    }
}

#[test]
fn splice_past_end_leaves_holes() {
    for structure in both() {
        let list = structure.from_plain(Value::from(vec!["a"]));
        let result = structure.splice(Some(&list), 3, 0, vec![Some(Value::from("d"))]);
        let slots: Vec<Option<&Value>> = result.as_list().map(|l| l.iter().collect()).unwrap_or_default();
        assert_eq!(
            slots,
            vec![Some(&Value::from("a")), None, None, Some(&Value::from("d"))]
        );
    }
}

#[test]
fn deep_equal_blank_nested() {
    for structure in both() {
        let a = structure.from_plain(obj(vec![("a", obj(vec![("b", Value::from(""))]))]));
        let b = structure.from_plain(obj(vec![("a", obj(vec![]))]));
        assert!(structure.deep_equal(Some(&a), Some(&b)));
        assert!(structure.deep_equal(Some(&b), Some(&a)));
    }
}

#[test]
fn deep_equal_across_adapters() {
    let plain = PLAIN.from_plain(fixture());
    let persistent = PERSISTENT.from_plain(fixture());
    for structure in both() {
        assert!(structure.deep_equal(Some(&plain), Some(&persistent)));
        assert!(structure.deep_equal(Some(&persistent), Some(&plain)));
    }
}

#[test]
fn sentinel_errors_on_lists() {
    for structure in both() {
        let state = structure.set_in(None, &path!("members[0]"), Value::from("a"));
        let errors = structure.set_in(Some(&state), &path!("members._error"), Value::from("too few"));
        assert_eq!(
            structure.get_in(Some(&errors), &path!("members._error")),
            Some(&Value::from("too few"))
        );
        assert_eq!(structure.size(structure.get_in(Some(&errors), &path!("members"))), 1);
        assert!(!structure.deep_equal(Some(&state), Some(&errors)));
    }
}

#[test]
fn root_path_replaces_state() {
    for structure in both() {
        let state = structure.from_plain(fixture());
        assert_eq!(structure.set_in(Some(&state), &Path::root(), Value::from(1)), Value::from(1));
        let kept = structure.delete_in(Some(&state), &Path::root()).unwrap().unwrap();
        assert!(kept.ptr_eq(&state));
    }
}
