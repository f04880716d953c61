use pretty_assertions::assert_eq;
use proptest::prelude::*;
use wry_ir::StringInterner;

use super::*;

fn entries(array: &WryArray) -> Vec<(Key, Value)> {
    array.iter().map(|(k, v)| (*k, v.clone())).collect()
}

#[test]
fn test_badges_do_not_consume_indices() {
    let interner = StringInterner::new();
    let b = interner.intern("b");

    // [a, b: 2, c]
    let mut array = WryArray::new();
    array.append(Value::string("a"));
    array.set(Key::Badge(b), Value::Int(2));
    array.append(Value::string("c"));

    assert_eq!(
        entries(&array),
        vec![
            (Key::Index(0), Value::string("a")),
            (Key::Badge(b), Value::Int(2)),
            (Key::Index(1), Value::string("c")),
        ]
    );
    assert_eq!(array.next_index(), Some(2));
}

#[test]
fn test_explicit_index_advances_counter() {
    // [a, 5: x, c]
    let mut array = WryArray::new();
    array.append(Value::string("a"));
    array.set(Key::Index(5), Value::string("x"));
    array.append(Value::string("c"));

    assert_eq!(
        entries(&array),
        vec![
            (Key::Index(0), Value::string("a")),
            (Key::Index(5), Value::string("x")),
            (Key::Index(6), Value::string("c")),
        ]
    );
}

#[test]
fn test_smaller_explicit_index_leaves_counter() {
    let mut array: WryArray = [Value::Int(1), Value::Int(2), Value::Int(3)]
        .into_iter()
        .collect();
    array.set(Key::Index(1), Value::Int(20));

    assert_eq!(array.next_index(), Some(3));
    assert_eq!(array.append(Value::Int(4)), Some(Key::Index(3)));
}

#[test]
fn test_largest_index_exhausts_auto_indexing() {
    let mut array = WryArray::new();
    array.set(Key::Index(u64::MAX), Value::string("last"));

    assert_eq!(array.next_index(), None);
    assert_eq!(array.append(Value::string("lost")), None);
    assert_eq!(array.get(Key::Index(u64::MAX)), Some(&Value::string("last")));
    assert_eq!(array.len(), 1);

    // Smaller explicit indices are still accepted.
    array.set(Key::Index(7), Value::Int(7));
    assert_eq!(array.len(), 2);
    assert_eq!(array.next_index(), None);
}

#[test]
fn test_overwrite_keeps_position() {
    let interner = StringInterner::new();
    let x = interner.intern("x");
    let y = interner.intern("y");

    let mut array = WryArray::new();
    array.set(Key::Badge(x), Value::Int(1));
    array.set(Key::Badge(y), Value::Int(2));
    let previous = array.set(Key::Badge(x), Value::Int(10));

    assert_eq!(previous, Some(Value::Int(1)));
    assert_eq!(
        entries(&array),
        vec![(Key::Badge(x), Value::Int(10)), (Key::Badge(y), Value::Int(2))]
    );
}

#[test]
fn test_remove_preserves_order() {
    let mut array: WryArray = (1..=4).map(Value::Int).collect();
    assert_eq!(array.remove(Key::Index(1)), Some(Value::Int(2)));
    assert_eq!(array.remove(Key::Index(1)), None);

    assert_eq!(
        array.keys().collect::<Vec<_>>(),
        vec![Key::Index(0), Key::Index(2), Key::Index(3)]
    );
    assert_eq!(array.len(), 3);
    assert!(!array.contains_key(Key::Index(1)));
}

#[test]
fn test_iteration_is_restartable() {
    let array: WryArray = (0..3).map(Value::Int).collect();
    let first: Vec<_> = array.iter().map(|(k, _)| *k).collect();
    let second: Vec<_> = array.iter().map(|(k, _)| *k).collect();
    assert_eq!(first, second);
}

#[test]
fn test_expand_renumbers_indices_and_sets_badges() {
    let interner = StringInterner::new();
    let tag = interner.intern("tag");

    let mut spread = WryArray::new();
    spread.set(Key::Index(7), Value::string("x"));
    spread.set(Key::Badge(tag), Value::Bool(true));

    let mut array: WryArray = std::iter::once(Value::string("a")).collect();
    array.expand(spread);

    assert_eq!(
        entries(&array),
        vec![
            (Key::Index(0), Value::string("a")),
            (Key::Index(1), Value::string("x")),
            (Key::Badge(tag), Value::Bool(true)),
        ]
    );
}

#[test]
fn test_equality_is_order_sensitive() {
    let interner = StringInterner::new();
    let a = interner.intern("a");
    let b = interner.intern("b");

    let ab: WryArray = [(Key::Badge(a), Value::Int(1)), (Key::Badge(b), Value::Int(2))]
        .into_iter()
        .collect();
    let ba: WryArray = [(Key::Badge(b), Value::Int(2)), (Key::Badge(a), Value::Int(1))]
        .into_iter()
        .collect();

    assert_eq!(ab, ab.clone());
    assert_ne!(ab, ba);
}

#[test]
fn test_empty() {
    let array = WryArray::new();
    assert!(array.is_empty());
    assert_eq!(array.len(), 0);
    assert_eq!(array.next_index(), Some(0));
    assert_eq!(array.get(Key::Index(0)), None);
}

proptest! {
    /// Appends number `0..n` in order whatever badges are set in between.
    #[test]
    fn prop_appends_are_dense(ops in prop::collection::vec(any::<bool>(), 0..64)) {
        let interner = StringInterner::new();
        let mut array = WryArray::new();
        let mut appended = 0u64;
        for (i, is_append) in ops.iter().enumerate() {
            if *is_append {
                let key = array.append(Value::Int(0));
                prop_assert_eq!(key, Some(Key::Index(appended)));
                appended += 1;
            } else {
                let badge = interner.intern(&format!("badge{i}"));
                array.set(Key::Badge(badge), Value::Null);
            }
        }

        let indices: Vec<u64> = array
            .keys()
            .filter_map(|key| match key {
                Key::Index(index) => Some(index),
                Key::Badge(_) => None,
            })
            .collect();
        prop_assert_eq!(indices, (0..appended).collect::<Vec<_>>());
        prop_assert_eq!(array.next_index(), Some(appended));
    }
}
