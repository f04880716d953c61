//! Statement evaluation.
//!
//! Blocks push a fresh frame; `for` iterations and `catch`/`with` bodies run
//! in a frame pre-populated with their bindings. Flow statements turn into
//! control-flow signals on the error channel.

use std::rc::Rc;

use wry_ir::{Block, CatchClause, ExprId, Key, Name, Span, StmtId, StmtKind, StmtRange};
use wry_stack::ensure_sufficient_stack;

use super::Interpreter;
use crate::errors::{
    expected_kind, integer_overflow, raised, unbound_name, ControlFlow, EvalError, EvalResult,
};
use crate::exec::control::{catches, fault_value};
use crate::unary_operators::to_condition;
use crate::{ArrayValue, Frame, FunctionValue, Value, WryArray};

impl Interpreter<'_> {
    /// Evaluate `stmts` in the current frame; the value of the last one wins.
    pub(crate) fn eval_stmts(&mut self, stmts: StmtRange) -> EvalResult {
        let arena = self.arena.clone();
        let mut last = Value::Null;
        for &id in arena.stmt_list(stmts) {
            last = self.eval_stmt(id)?;
        }
        Ok(last)
    }

    /// Evaluate `block` under a fresh frame.
    pub(crate) fn eval_block(&mut self, block: Block) -> EvalResult {
        ensure_sufficient_stack(|| self.with_env_scope(|scoped| scoped.eval_stmts(block.stmts)))
    }

    fn eval_stmt(&mut self, id: StmtId) -> EvalResult {
        let stmt = *self.arena.stmt(id);
        tracing::trace!(kind = ?stmt.kind, "stmt");
        let result = match stmt.kind {
            StmtKind::Expr(expr) => self.eval_expr(expr),
            StmtKind::If {
                cond,
                then_block,
                else_block,
            } => self.eval_if(cond, then_block, else_block),
            StmtKind::Do(block) => self.eval_block(block),
            StmtKind::For {
                key,
                value,
                iter,
                body,
            } => self.eval_for(key, value, iter, body),
            StmtKind::Try { body, catch } => self.eval_try(body, catch),
            StmtKind::With {
                resource,
                binding,
                body,
            } => self.eval_with(resource, binding, body, stmt.span),
            StmtKind::AssignBlock { name, body } => {
                let value = self.eval_block(body)?;
                self.env.bind_local(Key::Badge(name), value.clone());
                Ok(value)
            }
            StmtKind::FuncBlock { name, func } => {
                // The captured chain holds the frame the function is bound
                // into, so the body can call itself.
                let function =
                    FunctionValue::script(name, func, self.arena.clone(), self.env.clone());
                let value = Value::function(function);
                self.env.bind_local(Key::Badge(name), value.clone());
                Ok(value)
            }
            StmtKind::InheritBlock { name, parent, body } => {
                self.eval_inherit(name, parent, body)
            }
            StmtKind::Return(value) => {
                let value = self.eval_optional(value)?;
                Err(EvalError::return_with(value))
            }
            StmtKind::Break => Err(EvalError::break_signal()),
            StmtKind::Continue => Err(EvalError::continue_signal()),
            StmtKind::Raise(value) => {
                let value = self.eval_optional(value)?;
                let message = value.display(self.interner).to_string();
                Err(raised(value, message))
            }
        };
        result.map_err(|err| err.or_span(stmt.span))
    }

    fn eval_optional(&mut self, expr: Option<ExprId>) -> EvalResult {
        match expr {
            Some(expr) => self.eval_expr(expr),
            None => Ok(Value::Null),
        }
    }

    fn eval_if(&mut self, cond: ExprId, then_block: Block, else_block: Option<Block>) -> EvalResult {
        let value = self.eval_expr(cond)?;
        let taken = to_condition(&value, "`if` condition")
            .map_err(|err| err.with_span(self.arena.expr(cond).span))?;
        if taken {
            self.eval_block(then_block)
        } else if let Some(else_block) = else_block {
            self.eval_block(else_block)
        } else {
            Ok(Value::Null)
        }
    }

    fn eval_for(&mut self, key: Option<Name>, value: Name, iter: ExprId, body: Block) -> EvalResult {
        let iterable = self.eval_expr(iter)?;
        let array = match iterable {
            Value::Array(array) => array,
            other => {
                return Err(expected_kind("`for`", "array", other.type_name())
                    .with_span(self.arena.expr(iter).span));
            }
        };

        for (entry_key, entry_value) in array.flatten() {
            let mut frame = WryArray::with_capacity(2);
            if let Some(key) = key {
                frame.set(Key::Badge(key), self.key_value(entry_key)?);
            }
            frame.set(Key::Badge(value), entry_value);

            let result = ensure_sufficient_stack(|| {
                self.with_frame(Frame::new(frame), |scoped| scoped.eval_stmts(body.stmts))
            });
            if let Err(err) = result {
                match err.control_flow {
                    Some(ControlFlow::Break) => break,
                    Some(ControlFlow::Continue) => {}
                    _ => return Err(err),
                }
            }
        }
        Ok(Value::Null)
    }

    /// A key as a loop variable: indices as Int, badges as Str.
    fn key_value(&self, key: Key) -> EvalResult {
        match key {
            Key::Index(index) => i64::try_from(index)
                .map(Value::Int)
                .map_err(|_| integer_overflow("key conversion")),
            Key::Badge(name) => Ok(Value::string(self.interner.lookup(name))),
        }
    }

    fn eval_try(&mut self, body: Block, catch: CatchClause) -> EvalResult {
        let err = match self.eval_block(body) {
            Ok(value) => return Ok(value),
            Err(err) => err,
        };

        let arena = self.arena.clone();
        if !catches(arena.names(catch.kinds), &err, self.interner) {
            return Err(err);
        }
        tracing::debug!(kind = err.kind.name(), "caught fault");

        let mut frame = WryArray::new();
        if let Some(binding) = catch.binding {
            frame.set(Key::Badge(binding), fault_value(err, &self.names));
        }
        ensure_sufficient_stack(|| {
            self.with_frame(Frame::new(frame), |scoped| scoped.eval_stmts(catch.body.stmts))
        })
    }

    fn eval_with(
        &mut self,
        resource: ExprId,
        binding: Option<Name>,
        body: Block,
        span: Span,
    ) -> EvalResult {
        let resource = self.eval_expr(resource)?;
        let hook = |name: Name| -> Option<Rc<FunctionValue>> {
            resource
                .as_array()
                .and_then(|array| array.get(Key::Badge(name)))
                .and_then(|value| value.as_function().cloned())
        };
        let enter = hook(self.names.enter);
        let release = hook(self.names.release);

        let bound = match enter {
            Some(enter) => self.call_function(&enter, WryArray::new(), Some(span))?,
            None => resource.clone(),
        };
        tracing::debug!(release = release.is_some(), "resource acquired");

        let mut frame = WryArray::new();
        if let Some(binding) = binding {
            frame.set(Key::Badge(binding), bound);
        }
        let result = ensure_sufficient_stack(|| {
            self.with_frame(Frame::new(frame), |scoped| scoped.eval_stmts(body.stmts))
        });

        let Some(release) = release else {
            return result;
        };
        let released = self.call_function(&release, WryArray::new(), Some(span));
        tracing::debug!("resource released");

        match (result, released) {
            (Ok(value), Ok(_)) => Ok(value),
            (Ok(_), Err(release_err)) => Err(release_err),
            (Err(err), Ok(_)) => Err(err),
            (Err(err), Err(release_err)) => {
                tracing::warn!(error = %release_err, "release failed while unwinding");
                Err(err)
            }
        }
    }

    fn eval_inherit(&mut self, name: Name, parent: Name, body: Block) -> EvalResult {
        let parent_value = self
            .env
            .resolve(Key::Badge(parent))
            .map(|(value, _)| value)
            .ok_or_else(|| unbound_name(self.interner.lookup(parent)))?;
        let parent = match parent_value {
            Value::Array(array) => array,
            other => return Err(expected_kind("`inherit`", "array", other.type_name())),
        };

        let own = Frame::default();
        let mut body_chain = parent.chain().stacked_on(&self.env);
        body_chain.push(own.clone());
        {
            let mut inner = self.with_chain(body_chain, None);
            ensure_sufficient_stack(|| inner.eval_stmts(body.stmts))?;
        }

        let mut chain = parent.chain().clone();
        chain.push(own);
        let value = Value::Array(ArrayValue::from_chain(chain));
        self.env.bind_local(Key::Badge(name), value.clone());
        Ok(value)
    }
}
