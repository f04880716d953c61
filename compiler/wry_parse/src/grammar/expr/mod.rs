//! Expression parsing.
//!
//! # Module Structure
//!
//! - `mod.rs`: Entry point (`parse_expr`) and the binary precedence chain
//! - `operators.rs`: Token to operator tables
//! - `postfix.rs`: Call, member, index
//! - `primary.rs`: Literals, names, badges, arrays, groups, argument lists
//!   and function expressions

mod operators;
mod postfix;
mod primary;

use wry_ir::{BinaryOp, Expr, ExprId, ExprKind, Key, Span, TokenKind, UnaryOp};
use wry_stack::ensure_sufficient_stack;

use crate::{ParseError, Parser};
use operators::Tier;

impl Parser<'_> {
    /// Parse an expression.
    ///
    /// Uses `ensure_sufficient_stack` to prevent stack overflow on deeply
    /// nested expressions.
    pub(crate) fn parse_expr(&mut self) -> Result<ExprId, ParseError> {
        ensure_sufficient_stack(|| self.parse_assign())
    }

    fn span_of(&self, id: ExprId) -> Span {
        self.arena.expr(id).span
    }

    fn alloc_binary(&mut self, op: BinaryOp, left: ExprId, right: ExprId) -> ExprId {
        let span = self.span_of(left).merge(self.span_of(right));
        self.arena
            .alloc_expr(Expr::new(ExprKind::Binary { op, left, right }, span))
    }

    /// `assignExpr := (NAME | '@' key) '=' assignExpr | orExpr`
    fn parse_assign(&mut self) -> Result<ExprId, ParseError> {
        let left = self.parse_or()?;

        if !self.check(TokenKind::Eq) {
            return Ok(left);
        }

        let left_expr = *self.arena.expr(left);
        let target = match left_expr.kind {
            ExprKind::Ident(name) => Key::Badge(name),
            ExprKind::Badge(key) => key,
            _ => return Err(ParseError::invalid_assignment_target(left_expr.span)),
        };
        self.advance();
        let value = self.parse_expr()?;
        let span = left_expr.span.merge(self.span_of(value));
        Ok(self
            .arena
            .alloc_expr(Expr::new(ExprKind::Assign { target, value }, span)))
    }

    /// `orExpr := andExpr ('or' andExpr)*`
    fn parse_or(&mut self) -> Result<ExprId, ParseError> {
        let mut left = self.parse_and()?;
        while self.eat(TokenKind::Or) {
            let right = self.parse_and()?;
            left = self.alloc_binary(BinaryOp::Or, left, right);
        }
        Ok(left)
    }

    /// `andExpr := notExpr ('and' notExpr)*`
    fn parse_and(&mut self) -> Result<ExprId, ParseError> {
        let mut left = self.parse_not()?;
        while self.eat(TokenKind::And) {
            let right = self.parse_not()?;
            left = self.alloc_binary(BinaryOp::And, left, right);
        }
        Ok(left)
    }

    /// `notExpr := 'not' notExpr | relationExpr`
    fn parse_not(&mut self) -> Result<ExprId, ParseError> {
        if self.check(TokenKind::Not) {
            let start = self.advance().span;
            let operand = ensure_sufficient_stack(|| self.parse_not())?;
            let span = start.merge(self.span_of(operand));
            return Ok(self.arena.alloc_expr(Expr::new(
                ExprKind::Unary {
                    op: UnaryOp::Not,
                    operand,
                },
                span,
            )));
        }
        self.parse_relation()
    }

    /// `relationExpr := composeExpr (relop composeExpr)?`
    ///
    /// Comparisons do not associate: `a < b < c` is rejected.
    fn parse_relation(&mut self) -> Result<ExprId, ParseError> {
        let left = self.parse_compose()?;
        let Some(op) = self.peek_binary(Tier::Relation) else {
            return Ok(left);
        };
        self.advance();
        let right = self.parse_compose()?;
        if self.peek_binary(Tier::Relation).is_some() {
            return Err(ParseError::chained_comparison(self.current_span()));
        }
        Ok(self.alloc_binary(op, left, right))
    }

    /// `composeExpr := addExpr ('&' addExpr)*`
    fn parse_compose(&mut self) -> Result<ExprId, ParseError> {
        let mut left = self.parse_tier(Tier::Sum)?;
        while self.eat(TokenKind::Amp) {
            let right = self.parse_tier(Tier::Sum)?;
            let span = self.span_of(left).merge(self.span_of(right));
            left = self
                .arena
                .alloc_expr(Expr::new(ExprKind::Compose { left, right }, span));
        }
        Ok(left)
    }

    /// Left-associative chain of `tier` operators.
    ///
    /// `addExpr := multExpr (('+'|'-') multExpr)*`
    /// `multExpr := unarySignExpr (('*'|'/'|'%') unarySignExpr)*`
    fn parse_tier(&mut self, tier: Tier) -> Result<ExprId, ParseError> {
        let operand = |p: &mut Self| match tier.tighter() {
            Some(next) => p.parse_tier(next),
            None => p.parse_unary_sign(),
        };
        let mut left = operand(self)?;
        while let Some(op) = self.peek_binary(tier) {
            self.advance();
            let right = operand(self)?;
            left = self.alloc_binary(op, left, right);
        }
        Ok(left)
    }

    /// `unarySignExpr := ('+'|'-') unarySignExpr | postfix`
    fn parse_unary_sign(&mut self) -> Result<ExprId, ParseError> {
        let Some(op) = self.peek_sign() else {
            return self.parse_postfix();
        };
        let start = self.advance().span;
        let operand = ensure_sufficient_stack(|| self.parse_unary_sign())?;
        let span = start.merge(self.span_of(operand));
        Ok(self
            .arena
            .alloc_expr(Expr::new(ExprKind::Unary { op, operand }, span)))
    }
}
