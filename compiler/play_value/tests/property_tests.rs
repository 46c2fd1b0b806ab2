//! Property-based tests for Play containers.
//!
//! Verifies:
//! 1. List LIFO: popping after N pushes yields the pushed values reversed
//! 2. Map equality does not depend on the order keys were inserted
//! 3. Aliased handles observe each other's mutations

#![allow(clippy::unwrap_used, clippy::expect_used, reason = "Tests can panic")]
#![allow(
    clippy::doc_markdown,
    clippy::redundant_closure_for_method_calls,
    reason = "Proptest macros generate code with these patterns"
)]

use play_value::{ListValue, MapValue, Value};
use proptest::prelude::*;

// -- Strategies --

/// Scalar values usable as list elements and map keys.
fn scalar_strategy() -> impl Strategy<Value = Value> {
    prop_oneof![
        Just(Value::Null),
        any::<bool>().prop_map(Value::Bool),
        (-1_000_000i64..1_000_000).prop_map(|n| Value::Number(n as f64)),
        "[a-z]{0,8}".prop_map(Value::string),
    ]
}

/// Distinct string keys paired with numeric values.
fn entries_strategy() -> impl Strategy<Value = Vec<(String, f64)>> {
    prop::collection::hash_map("[a-z]{1,6}", -1000i32..1000, 0..16).prop_map(|m| {
        m.into_iter()
            .map(|(k, v)| (k, f64::from(v)))
            .collect::<Vec<_>>()
    })
}

fn build_map(entries: &[(String, f64)]) -> MapValue {
    let map = MapValue::new();
    for (k, v) in entries {
        map.put(&Value::string(k.as_str()), Value::Number(*v))
            .unwrap();
    }
    map
}

proptest! {
    #[test]
    fn list_pop_reverses_push(values in prop::collection::vec(scalar_strategy(), 0..32)) {
        let list = ListValue::new();
        for v in &values {
            list.push(v.clone()).unwrap();
        }
        let popped: Vec<Value> = (0..values.len()).map(|_| list.pop()).collect();
        let mut expected = values.clone();
        expected.reverse();
        prop_assert_eq!(popped, expected);
        prop_assert!(list.is_empty());
    }

    #[test]
    fn map_equality_is_order_insensitive(
        entries in entries_strategy(),
        seed in any::<u64>(),
    ) {
        let mut shuffled = entries.clone();
        // deterministic permutation from the seed
        if !shuffled.is_empty() {
            let len = shuffled.len();
            let mut state = seed;
            for i in (1..len).rev() {
                state = state.wrapping_mul(6_364_136_223_846_793_005).wrapping_add(1);
                let j = (state >> 33) as usize % (i + 1);
                shuffled.swap(i, j);
            }
        }
        let a = Value::Map(build_map(&entries));
        let b = Value::Map(build_map(&shuffled));
        prop_assert!(a.equals(&b));
        prop_assert!(b.equals(&a));
    }

    #[test]
    fn list_aliases_see_mutations(
        initial in prop::collection::vec(scalar_strategy(), 0..8),
        extra in scalar_strategy(),
    ) {
        let a = Value::list(initial.clone());
        let b = a.clone();
        b.to_list().unwrap().push(extra).unwrap();
        prop_assert_eq!(a.to_list().unwrap().len(), initial.len() + 1);
        prop_assert!(a.equals(&b));
    }
}
