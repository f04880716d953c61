//! Live call stack: depth limit and backtraces.

use wry_ir::{Name, Span, StringInterner};

use crate::errors::{recursion_limit_exceeded, BacktraceFrame, EvalBacktrace, EvalError};

/// One active call.
#[derive(Clone, Copy, Debug)]
pub struct CallFrame {
    /// `Name::EMPTY` for anonymous functions.
    pub name: Name,
    /// Where the call was made.
    pub call_span: Option<Span>,
}

/// Stack of active calls with a depth limit.
///
/// ```ignore
/// stack.push(CallFrame { name, call_span: Some(span) })?;
/// // ... evaluate the body ...
/// stack.pop();
/// ```
#[derive(Clone, Debug)]
pub struct CallStack {
    frames: Vec<CallFrame>,
    max_depth: usize,
}

impl CallStack {
    pub fn new(max_depth: usize) -> Self {
        CallStack {
            frames: Vec::new(),
            max_depth,
        }
    }

    /// Push a call, failing with `RecursionLimit` when the stack is full.
    /// Nothing is pushed on failure.
    pub fn push(&mut self, frame: CallFrame) -> Result<(), EvalError> {
        if self.frames.len() >= self.max_depth {
            return Err(recursion_limit_exceeded(self.max_depth));
        }
        self.frames.push(frame);
        Ok(())
    }

    pub fn pop(&mut self) {
        debug_assert!(!self.frames.is_empty(), "CallStack::pop on empty stack");
        self.frames.pop();
    }

    #[inline]
    pub fn depth(&self) -> usize {
        self.frames.len()
    }

    #[inline]
    pub fn max_depth(&self) -> usize {
        self.max_depth
    }

    /// Snapshot, most recent call first.
    pub fn capture(&self, interner: &StringInterner) -> EvalBacktrace {
        let frames = self
            .frames
            .iter()
            .rev()
            .map(|frame| BacktraceFrame {
                name: if frame.name == Name::EMPTY {
                    "<anonymous>".to_string()
                } else {
                    interner.lookup(frame.name).to_string()
                },
                span: frame.call_span,
            })
            .collect();
        EvalBacktrace::new(frames)
    }

    /// Attach a backtrace to a fault that does not have one yet.
    /// Control-flow signals pass through untouched.
    pub fn attach_backtrace(&self, err: EvalError, interner: &StringInterner) -> EvalError {
        if err.is_control_flow() || err.backtrace.is_some() || self.frames.is_empty() {
            return err;
        }
        err.with_backtrace(self.capture(interner))
    }
}

impl Default for CallStack {
    fn default() -> Self {
        CallStack::new(crate::DEFAULT_MAX_CALL_DEPTH)
    }
}
