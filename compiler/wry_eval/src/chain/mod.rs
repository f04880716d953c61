//! Chains of frames: scope stacks and prototype stacks.
//!
//! A [`Chain`] is a persistent, shared-tail list of [`Frame`]s. Pushing onto
//! a chain never disturbs clones taken earlier, so a closure that captured a
//! chain keeps seeing exactly the frames that were live when it was created,
//! while still observing later assignments into those frames.
//!
//! Frame 0 is the innermost frame. Lookup walks outward and stops at the
//! first frame holding the key.

use std::cell::{Ref, RefCell, RefMut};
use std::fmt;
use std::rc::Rc;

use wry_ir::Key;

use crate::{Value, WryArray};

/// A shared, mutable container acting as one chain element.
///
/// Single-threaded by construction (`Rc`, not `Arc`).
#[repr(transparent)]
pub struct Frame(Rc<RefCell<WryArray>>);

impl Frame {
    #[inline]
    pub fn new(array: WryArray) -> Self {
        Frame(Rc::new(RefCell::new(array)))
    }

    #[inline]
    pub fn borrow(&self) -> Ref<'_, WryArray> {
        self.0.borrow()
    }

    #[inline]
    pub fn borrow_mut(&self) -> RefMut<'_, WryArray> {
        self.0.borrow_mut()
    }

    /// True when both handles refer to the same container.
    #[inline]
    pub fn ptr_eq(&self, other: &Frame) -> bool {
        Rc::ptr_eq(&self.0, &other.0)
    }
}

impl Clone for Frame {
    #[inline]
    fn clone(&self) -> Self {
        Frame(Rc::clone(&self.0))
    }
}

impl Default for Frame {
    fn default() -> Self {
        Frame::new(WryArray::new())
    }
}

impl fmt::Debug for Frame {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self.0.try_borrow() {
            Ok(array) => f.debug_tuple("Frame").field(&array.len()).finish(),
            Err(_) => f.write_str("Frame(<borrowed>)"),
        }
    }
}

struct Link {
    frame: Frame,
    next: Chain,
    depth: usize,
}

/// Persistent stack of frames, innermost first.
#[derive(Clone, Default)]
pub struct Chain {
    head: Option<Rc<Link>>,
}

impl Chain {
    pub fn new() -> Self {
        Self::default()
    }

    /// One-frame chain.
    pub fn from_frame(frame: Frame) -> Self {
        let mut chain = Chain::new();
        chain.push(frame);
        chain
    }

    /// Make `frame` the innermost frame.
    pub fn push(&mut self, frame: Frame) {
        let next = std::mem::take(self);
        let depth = next.depth() + 1;
        self.head = Some(Rc::new(Link { frame, next, depth }));
    }

    /// Remove and return the innermost frame.
    pub fn pop(&mut self) -> Option<Frame> {
        let link = self.head.take()?;
        let (frame, next) = match Rc::try_unwrap(link) {
            Ok(link) => (link.frame, link.next),
            Err(shared) => (shared.frame.clone(), shared.next.clone()),
        };
        *self = next;
        Some(frame)
    }

    #[inline]
    pub fn innermost(&self) -> Option<&Frame> {
        self.head.as_ref().map(|link| &link.frame)
    }

    /// Number of frames.
    #[inline]
    pub fn depth(&self) -> usize {
        self.head.as_ref().map_or(0, |link| link.depth)
    }

    #[inline]
    pub fn is_empty(&self) -> bool {
        self.head.is_none()
    }

    /// Frames from innermost to outermost.
    pub fn frames(&self) -> Frames<'_> {
        Frames { next: self }
    }

    /// Find `key` in the innermost frame holding it.
    pub fn resolve(&self, key: Key) -> Option<(Value, Frame)> {
        self.frames().find_map(|frame| {
            let value = frame.borrow().get(key).cloned();
            value.map(|value| (value, frame.clone()))
        })
    }

    /// Bind `key` in the innermost frame, shadowing outer bindings.
    ///
    /// An empty chain gets a fresh frame first.
    pub fn bind_local(&mut self, key: Key, value: Value) {
        if self.is_empty() {
            self.push(Frame::default());
        }
        if let Some(frame) = self.innermost() {
            frame.borrow_mut().set(key, value);
        }
    }

    /// `self`'s frames placed on top of `base`'s.
    #[must_use]
    pub fn stacked_on(&self, base: &Chain) -> Chain {
        let mut top: Vec<&Frame> = self.frames().collect();
        let mut chain = base.clone();
        while let Some(frame) = top.pop() {
            chain.push(frame.clone());
        }
        chain
    }

    /// Merged view: outer entries first, inner entries override in place.
    pub fn flatten(&self) -> WryArray {
        let frames: Vec<&Frame> = self.frames().collect();
        let mut merged = WryArray::new();
        for frame in frames.into_iter().rev() {
            for (key, value) in frame.borrow().iter() {
                merged.set(*key, value.clone());
            }
        }
        merged
    }

    /// True when both chains share the same head link.
    pub fn ptr_eq(&self, other: &Chain) -> bool {
        match (&self.head, &other.head) {
            (Some(a), Some(b)) => Rc::ptr_eq(a, b),
            (None, None) => true,
            _ => false,
        }
    }
}

impl Drop for Chain {
    // Unlink iteratively so long chains do not recurse on drop.
    fn drop(&mut self) {
        let mut head = self.head.take();
        while let Some(link) = head {
            match Rc::try_unwrap(link) {
                Ok(mut link) => head = link.next.head.take(),
                Err(_) => break,
            }
        }
    }
}

impl fmt::Debug for Chain {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_list().entries(self.frames()).finish()
    }
}

/// Iterator over a chain's frames, innermost first.
pub struct Frames<'a> {
    next: &'a Chain,
}

impl<'a> Iterator for Frames<'a> {
    type Item = &'a Frame;

    fn next(&mut self) -> Option<&'a Frame> {
        let link = self.next.head.as_deref()?;
        self.next = &link.next;
        Some(&link.frame)
    }
}

#[cfg(test)]
#[expect(clippy::unwrap_used, reason = "Tests use unwrap for brevity")]
mod tests;
