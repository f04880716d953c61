use super::*;
use crate::StringInterner;

#[test]
fn test_ranges() {
    let range = StmtRange::new(4, 3);
    assert_eq!(range.len(), 3);
    assert_eq!(range.to_range(), 4..7);
    assert!(StmtRange::EMPTY.is_empty());
    assert_eq!(format!("{range:?}"), "StmtRange(4..7)");
}

#[test]
fn test_key_display() {
    let interner = StringInterner::new();
    let badge = Key::Badge(interner.intern("x"));

    assert_eq!(badge.display(&interner).to_string(), "x");
    assert_eq!(Key::Index(7).display(&interner).to_string(), "7");
    assert!(badge.is_badge());
    assert!(Key::Index(0).is_index());
}

#[test]
fn test_badge_and_index_keys_differ() {
    let interner = StringInterner::new();
    assert_ne!(Key::Badge(interner.intern("0")), Key::Index(0));
}

#[test]
fn test_operator_symbols() {
    assert_eq!(BinaryOp::LtEq.as_symbol(), "<=");
    assert!(BinaryOp::NotEq.is_relational());
    assert!(!BinaryOp::And.is_relational());
    assert_eq!(UnaryOp::Not.as_symbol(), "not");
}
