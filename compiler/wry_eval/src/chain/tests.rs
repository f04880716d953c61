use pretty_assertions::assert_eq;
use wry_ir::StringInterner;

use super::*;

fn frame_with(key: Key, value: Value) -> Frame {
    let mut array = WryArray::new();
    array.set(key, value);
    Frame::new(array)
}

#[test]
fn test_resolve_innermost_wins() {
    let interner = StringInterner::new();
    let x = Key::Badge(interner.intern("x"));

    let outer = frame_with(x, Value::Int(1));
    let inner = frame_with(x, Value::Int(2));
    let mut chain = Chain::from_frame(outer.clone());
    chain.push(inner.clone());

    let (value, holder) = chain.resolve(x).unwrap();
    assert_eq!(value, Value::Int(2));
    assert!(holder.ptr_eq(&inner));

    chain.pop();
    let (value, holder) = chain.resolve(x).unwrap();
    assert_eq!(value, Value::Int(1));
    assert!(holder.ptr_eq(&outer));
}

#[test]
fn test_shadowing_leaves_outer_frame_alone() {
    let interner = StringInterner::new();
    let x = Key::Badge(interner.intern("x"));

    let outer = frame_with(x, Value::Int(1));
    let mut chain = Chain::from_frame(outer.clone());
    chain.push(Frame::default());
    chain.bind_local(x, Value::Int(99));

    assert_eq!(chain.resolve(x).map(|(v, _)| v), Some(Value::Int(99)));
    assert_eq!(outer.borrow().get(x), Some(&Value::Int(1)));
}

#[test]
fn test_resolve_miss() {
    let interner = StringInterner::new();
    let chain = Chain::from_frame(Frame::default());
    assert!(chain.resolve(Key::Badge(interner.intern("missing"))).is_none());
    assert!(Chain::new().resolve(Key::Index(0)).is_none());
}

#[test]
fn test_bind_local_on_empty_chain_pushes_frame() {
    let mut chain = Chain::new();
    assert!(chain.is_empty());
    chain.bind_local(Key::Index(0), Value::Bool(true));
    assert_eq!(chain.depth(), 1);
    assert_eq!(
        chain.innermost().unwrap().borrow().get(Key::Index(0)),
        Some(&Value::Bool(true))
    );
}

#[test]
fn test_clones_share_frames_but_not_pushes() {
    let interner = StringInterner::new();
    let x = Key::Badge(interner.intern("x"));
    let y = Key::Badge(interner.intern("y"));

    let mut chain = Chain::from_frame(Frame::default());
    let captured = chain.clone();

    chain.bind_local(x, Value::Int(1));
    chain.push(frame_with(y, Value::Int(2)));

    // Assignments into a shared frame are visible to the capture; pushes are not.
    assert_eq!(captured.resolve(x).map(|(v, _)| v), Some(Value::Int(1)));
    assert!(captured.resolve(y).is_none());
    assert_eq!(captured.depth(), 1);
    assert_eq!(chain.depth(), 2);
}

#[test]
fn test_frames_iterate_innermost_first() {
    let a = Frame::default();
    let b = Frame::default();
    let mut chain = Chain::from_frame(a.clone());
    chain.push(b.clone());

    let frames: Vec<&Frame> = chain.frames().collect();
    assert_eq!(frames.len(), 2);
    assert!(frames[0].ptr_eq(&b));
    assert!(frames[1].ptr_eq(&a));
}

#[test]
fn test_stacked_on_keeps_order() {
    let interner = StringInterner::new();
    let k = Key::Badge(interner.intern("k"));

    let base_outer = frame_with(k, Value::Int(1));
    let base_inner = Frame::default();
    let mut base = Chain::from_frame(base_outer.clone());
    base.push(base_inner.clone());

    let top_frame = frame_with(k, Value::Int(3));
    let top = Chain::from_frame(top_frame.clone());

    let stacked = top.stacked_on(&base);
    let frames: Vec<&Frame> = stacked.frames().collect();
    assert_eq!(stacked.depth(), 3);
    assert!(frames[0].ptr_eq(&top_frame));
    assert!(frames[1].ptr_eq(&base_inner));
    assert!(frames[2].ptr_eq(&base_outer));
    assert_eq!(stacked.resolve(k).map(|(v, _)| v), Some(Value::Int(3)));
    assert_eq!(base.depth(), 2);
}

#[test]
fn test_flatten_outer_first_inner_overrides_in_place() {
    let interner = StringInterner::new();
    let a = Key::Badge(interner.intern("a"));
    let b = Key::Badge(interner.intern("b"));
    let c = Key::Badge(interner.intern("c"));

    let mut outer = WryArray::new();
    outer.set(a, Value::Int(1));
    outer.set(b, Value::Int(2));
    let mut inner = WryArray::new();
    inner.set(c, Value::Int(3));
    inner.set(a, Value::Int(10));

    let mut chain = Chain::from_frame(Frame::new(outer));
    chain.push(Frame::new(inner));

    let flat: Vec<(Key, Value)> = chain
        .flatten()
        .into_iter()
        .collect();
    assert_eq!(
        flat,
        vec![(a, Value::Int(10)), (b, Value::Int(2)), (c, Value::Int(3))]
    );
}

#[test]
fn test_pop_shared_link_keeps_other_owner() {
    let interner = StringInterner::new();
    let x = Key::Badge(interner.intern("x"));

    let mut chain = Chain::from_frame(Frame::default());
    chain.push(frame_with(x, Value::Int(5)));
    let shared = chain.clone();

    assert!(chain.pop().is_some());
    assert_eq!(chain.depth(), 1);
    assert_eq!(shared.depth(), 2);
    assert_eq!(shared.resolve(x).map(|(v, _)| v), Some(Value::Int(5)));
}

#[test]
fn test_ptr_eq() {
    let chain = Chain::from_frame(Frame::default());
    let clone = chain.clone();
    let other = Chain::from_frame(Frame::default());
    assert!(chain.ptr_eq(&clone));
    assert!(!chain.ptr_eq(&other));
    assert!(Chain::new().ptr_eq(&Chain::new()));
}

#[test]
fn test_long_chain_drops_without_recursion() {
    let mut chain = Chain::new();
    for _ in 0..200_000 {
        chain.push(Frame::default());
    }
    assert_eq!(chain.depth(), 200_000);
    drop(chain);
}
