//! Property-based tests - pragmatic approach testing output invariants
//!
//! These complement the integration tests by checking the serializer's
//! structural guarantees across generated inputs: determinism, the
//! assignments-before-sections rule, quote selection, and hole skipping.

use proptest::prelude::*;
use tomlify::{to_string, TomlMap, TomlValue};

fn key_strategy() -> impl Strategy<Value = String> {
    "[a-z][a-z0-9_]{0,7}"
}

fn scalar_strategy() -> impl Strategy<Value = TomlValue> {
    prop_oneof![
        any::<bool>().prop_map(TomlValue::from),
        any::<i64>().prop_map(TomlValue::from),
        "[a-zA-Z0-9 _.-]{0,12}".prop_map(TomlValue::from),
    ]
}

fn value_strategy() -> impl Strategy<Value = TomlValue> {
    scalar_strategy().prop_recursive(3, 24, 6, |inner| {
        prop_oneof![
            prop::collection::vec(inner.clone(), 0..4).prop_map(TomlValue::Array),
            prop::collection::vec((key_strategy(), inner), 0..4).prop_map(|entries| {
                TomlValue::Table(entries.into_iter().collect::<TomlMap>())
            }),
        ]
    })
}

fn table_strategy() -> impl Strategy<Value = TomlValue> {
    prop::collection::vec((key_strategy(), value_strategy()), 0..6)
        .prop_map(|entries| TomlValue::Table(entries.into_iter().collect::<TomlMap>()))
}

proptest! {
    #[test]
    fn prop_deterministic(doc in table_strategy()) {
        let first = to_string(&doc).unwrap();
        let second = to_string(&doc.clone()).unwrap();
        prop_assert_eq!(first, second);
    }

    #[test]
    fn prop_never_fails_lenient(doc in value_strategy()) {
        prop_assert!(to_string(&doc).is_ok());
    }

    #[test]
    fn prop_assignments_before_sections(doc in table_strategy()) {
        let out = to_string(&doc).unwrap();

        // Once the first section header appears, no further top-level
        // assignment may follow; headers always start right after a blank
        // line, so splitting on the first "\n[" cleanly separates the
        // assignment block from the section block.
        if let TomlValue::Table(table) = &doc {
            let assignment_block = match out.find("\n[") {
                Some(pos) => &out[..pos],
                None => &out[..],
            };
            for (key, value) in table.iter() {
                if value.is_table() {
                    continue;
                }
                let line_start = format!("{} = ", key);
                prop_assert!(
                    assignment_block.lines().any(|l| l.starts_with(&line_start)),
                    "assignment for {} missing from pre-section block", key
                );
            }
        }
    }

    #[test]
    fn prop_plain_string_round_trip(s in "[a-zA-Z0-9 _.-]{0,16}") {
        // No quote characters and no newline: exact single-quoted line.
        let mut table = TomlMap::new();
        table.insert("k".to_string(), TomlValue::from(s.clone()));
        let out = to_string(&TomlValue::Table(table)).unwrap();
        prop_assert_eq!(out, format!("k = '{}'\n", s));
    }

    #[test]
    fn prop_single_quote_escalates(s in "[a-z]{0,5}'[a-z]{0,5}") {
        let mut table = TomlMap::new();
        table.insert("k".to_string(), TomlValue::from(s.clone()));
        let out = to_string(&TomlValue::Table(table)).unwrap();
        prop_assert_eq!(out, format!("k = \"{}\"\n", s));
    }

    #[test]
    fn prop_holes_invisible(values in prop::collection::vec(any::<i64>(), 0..8),
                            hole_mask in prop::collection::vec(any::<bool>(), 0..8)) {
        // An array with holes renders identically to the same array with
        // the holes removed.
        let with_holes: Vec<TomlValue> = values
            .iter()
            .zip(hole_mask.iter().chain(std::iter::repeat(&false)))
            .map(|(v, &hole)| if hole { TomlValue::Null } else { TomlValue::from(*v) })
            .collect();
        let without_holes: Vec<TomlValue> = with_holes
            .iter()
            .filter(|v| !v.is_null())
            .cloned()
            .collect();

        let mut left = TomlMap::new();
        left.insert("k".to_string(), TomlValue::Array(with_holes));
        let mut right = TomlMap::new();
        right.insert("k".to_string(), TomlValue::Array(without_holes));

        prop_assert_eq!(
            to_string(&TomlValue::Table(left)).unwrap(),
            to_string(&TomlValue::Table(right)).unwrap()
        );
    }
}
