//! Postfix expressions: call, member and key lookup.

use wry_ir::{Expr, ExprId, ExprKind, Key, TokenKind};

use crate::{ErrorContext, ParseError, Parser};

impl Parser<'_> {
    /// `postfix := atom ( '(' entries ')' | '.' (NAME|INT) | '[' expr ']' )*`
    pub(super) fn parse_postfix(&mut self) -> Result<ExprId, ParseError> {
        let mut expr = self.parse_atom()?;
        loop {
            expr = match self.current_kind() {
                TokenKind::LParen => {
                    self.in_error_context(ErrorContext::FunctionCall, |p| p.parse_call(expr))?
                }
                TokenKind::Dot => {
                    self.in_error_context(ErrorContext::MemberAccess, |p| p.parse_member(expr))?
                }
                TokenKind::LBracket => {
                    self.in_error_context(ErrorContext::IndexExpression, |p| p.parse_index(expr))?
                }
                _ => return Ok(expr),
            };
        }
    }

    fn parse_call(&mut self, func: ExprId) -> Result<ExprId, ParseError> {
        let (entries, _, close) = self.parse_delimited_entries(TokenKind::LParen, TokenKind::RParen)?;
        let args = self.arena.alloc_entries(entries);
        let span = self.span_of(func).merge(close);
        Ok(self
            .arena
            .alloc_expr(Expr::new(ExprKind::Call { func, args }, span)))
    }

    fn parse_member(&mut self, receiver: ExprId) -> Result<ExprId, ParseError> {
        self.advance();
        let tok = self.current();
        let key = match tok.kind {
            TokenKind::Ident(name) => Key::Badge(name),
            TokenKind::Int(n) => Key::Index(u64::try_from(n).unwrap_or_default()),
            found => {
                return Err(ParseError::unexpected_token(
                    "member name or index",
                    found,
                    tok.span,
                ))
            }
        };
        self.advance();
        let span = self.span_of(receiver).merge(tok.span);
        Ok(self
            .arena
            .alloc_expr(Expr::new(ExprKind::Member { receiver, key }, span)))
    }

    fn parse_index(&mut self, receiver: ExprId) -> Result<ExprId, ParseError> {
        let open = self.current_span();
        self.cursor.push_newline_mode(false);
        self.advance();
        let key = self.parse_expr();
        self.cursor.pop_newline_mode();
        let key = key?;

        if !self.check(TokenKind::RBracket) {
            return Err(self.close_error(TokenKind::LBracket, open, TokenKind::RBracket));
        }
        let close = self.advance().span;
        let span = self.span_of(receiver).merge(close);
        Ok(self
            .arena
            .alloc_expr(Expr::new(ExprKind::Index { receiver, key }, span)))
    }
}
