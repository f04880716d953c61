//! RAII guards for the execution chain.
//!
//! Every frame the interpreter pushes is popped by a guard's `Drop`, so the
//! chain is restored on normal exit, on `?` propagation of a fault or
//! control-flow signal, and during unwinding.
//!
//! - [`ScopedInterpreter`]: pushes one frame onto the current chain
//! - [`SwappedInterpreter`]: replaces the whole chain (function calls,
//!   `inherit` bodies) and puts the caller's chain back on drop
//!
//! Both guards deref to [`Interpreter`], so code inside the scope calls
//! interpreter methods directly:
//!
//! ```text
//! self.with_frame(frame, |scoped| scoped.eval_stmts(body.stmts))
//! ```

use std::ops::{Deref, DerefMut};

use wry_ir::SharedArena;

use super::Interpreter;
use crate::{Chain, Frame};

/// Guard that pops the frame it pushed.
pub struct ScopedInterpreter<'guard, 'interp> {
    interpreter: &'guard mut Interpreter<'interp>,
}

impl Drop for ScopedInterpreter<'_, '_> {
    fn drop(&mut self) {
        self.interpreter.env.pop();
        tracing::debug!(depth = self.interpreter.env.depth(), "pop frame");
    }
}

impl<'interp> Deref for ScopedInterpreter<'_, 'interp> {
    type Target = Interpreter<'interp>;

    fn deref(&self) -> &Self::Target {
        self.interpreter
    }
}

impl DerefMut for ScopedInterpreter<'_, '_> {
    fn deref_mut(&mut self) -> &mut Self::Target {
        self.interpreter
    }
}

/// Guard that restores the caller's chain (and arena) it swapped out.
pub struct SwappedInterpreter<'guard, 'interp> {
    interpreter: &'guard mut Interpreter<'interp>,
    saved_chain: Chain,
    saved_arena: Option<SharedArena>,
}

impl Drop for SwappedInterpreter<'_, '_> {
    fn drop(&mut self) {
        self.interpreter.env = std::mem::take(&mut self.saved_chain);
        if let Some(arena) = self.saved_arena.take() {
            self.interpreter.arena = arena;
        }
        tracing::debug!(depth = self.interpreter.env.depth(), "restore chain");
    }
}

impl<'interp> Deref for SwappedInterpreter<'_, 'interp> {
    type Target = Interpreter<'interp>;

    fn deref(&self) -> &Self::Target {
        self.interpreter
    }
}

impl DerefMut for SwappedInterpreter<'_, '_> {
    fn deref_mut(&mut self) -> &mut Self::Target {
        self.interpreter
    }
}

impl<'a> Interpreter<'a> {
    /// Push `frame` until the returned guard drops.
    pub fn scoped(&mut self, frame: Frame) -> ScopedInterpreter<'_, 'a> {
        self.env.push(frame);
        tracing::debug!(depth = self.env.depth(), "push frame");
        ScopedInterpreter { interpreter: self }
    }

    /// Run `f` under a fresh empty frame.
    pub fn with_env_scope<T, F>(&mut self, f: F) -> T
    where
        F: FnOnce(&mut ScopedInterpreter<'_, 'a>) -> T,
    {
        self.with_frame(Frame::default(), f)
    }

    /// Run `f` with `frame` pushed.
    pub fn with_frame<T, F>(&mut self, frame: Frame, f: F) -> T
    where
        F: FnOnce(&mut ScopedInterpreter<'_, 'a>) -> T,
    {
        let mut scoped = self.scoped(frame);
        f(&mut scoped)
    }

    /// Evaluate against `chain` (and `arena`, when given) until the returned
    /// guard drops.
    pub fn with_chain(
        &mut self,
        chain: Chain,
        arena: Option<SharedArena>,
    ) -> SwappedInterpreter<'_, 'a> {
        let saved_chain = std::mem::replace(&mut self.env, chain);
        let saved_arena = arena.map(|arena| std::mem::replace(&mut self.arena, arena));
        SwappedInterpreter {
            interpreter: self,
            saved_chain,
            saved_arena,
        }
    }
}
