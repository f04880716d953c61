//! Primary expressions and entry lists.
//!
//! Entry lists are shared by array literals, argument lists and calls:
//! `entry := key ':' expr | '...' NAME | expr`.

use wry_ir::{
    Entry, EntryKind, Expr, ExprId, ExprKind, FuncDef, FuncId, Key, Name, Param, Span, TokenKind,
};

use crate::{ErrorContext, ParseError, Parser};

impl Parser<'_> {
    /// `atom := literal | NAME | '@' key | arrayLiteral | groupExpr | argExpr
    ///        | functionExpression`
    pub(super) fn parse_atom(&mut self) -> Result<ExprId, ParseError> {
        let tok = self.current();
        let kind = match tok.kind {
            TokenKind::Null => ExprKind::Null,
            TokenKind::True => ExprKind::Bool(true),
            TokenKind::False => ExprKind::Bool(false),
            TokenKind::Int(n) => ExprKind::Int(n),
            TokenKind::Float(bits) => ExprKind::Float(bits),
            TokenKind::Str(name) => ExprKind::Str(name),
            TokenKind::Ident(name) => ExprKind::Ident(name),
            TokenKind::At => return self.parse_badge(),
            TokenKind::LBracket => {
                return self.in_error_context(ErrorContext::ArrayLiteral, Self::parse_array)
            }
            TokenKind::LParen => return self.parse_paren(),
            TokenKind::Func => {
                return self.in_error_context(ErrorContext::FunctionExpression, |p| {
                    let start = p.advance().span;
                    let func = p.parse_func_rest(Name::EMPTY, start)?;
                    let span = start.merge(p.previous_span());
                    Ok(p.arena.alloc_expr(Expr::new(ExprKind::Func(func), span)))
                })
            }
            found => return Err(ParseError::expected_expression(found, tok.span)),
        };
        self.advance();
        Ok(self.arena.alloc_expr(Expr::new(kind, tok.span)))
    }

    /// `'@' key`
    fn parse_badge(&mut self) -> Result<ExprId, ParseError> {
        let start = self.advance().span;
        let tok = self.current();
        let key = self.key_of(tok.kind).ok_or_else(|| {
            ParseError::unexpected_token("name, integer or string after `@`", tok.kind, tok.span)
        })?;
        self.advance();
        Ok(self
            .arena
            .alloc_expr(Expr::new(ExprKind::Badge(key), start.merge(tok.span))))
    }

    /// `key := NAME | INT | STRING`
    fn key_of(&self, kind: TokenKind) -> Option<Key> {
        match kind {
            TokenKind::Ident(name) | TokenKind::Str(name) => Some(Key::Badge(name)),
            TokenKind::Int(n) => u64::try_from(n).ok().map(Key::Index),
            _ => None,
        }
    }

    /// `arrayLiteral := '[' entries ']'`
    fn parse_array(&mut self) -> Result<ExprId, ParseError> {
        let (entries, _, span) =
            self.parse_delimited_entries(TokenKind::LBracket, TokenKind::RBracket)?;
        let range = self.arena.alloc_entries(entries);
        Ok(self.arena.alloc_expr(Expr::new(ExprKind::Array(range), span)))
    }

    /// `groupExpr := '(' expr ')'` or `argExpr := '(' entries ')'`.
    ///
    /// A single plain expression without a trailing comma is a group;
    /// anything else is an argument list.
    fn parse_paren(&mut self) -> Result<ExprId, ParseError> {
        let (entries, trailing_comma, span) = self.in_error_context(
            ErrorContext::ArgumentList,
            |p| p.parse_delimited_entries(TokenKind::LParen, TokenKind::RParen),
        )?;

        if let [Entry {
            kind: EntryKind::Item(inner),
            ..
        }] = entries.as_slice()
        {
            if !trailing_comma {
                return Ok(*inner);
            }
        }

        let range = self.arena.alloc_entries(entries);
        Ok(self.arena.alloc_expr(Expr::new(ExprKind::Args(range), span)))
    }

    /// Parse `open entries close`, returning the entries, whether a trailing
    /// comma was present and the span from `open` through `close`.
    pub(super) fn parse_delimited_entries(
        &mut self,
        open: TokenKind,
        close: TokenKind,
    ) -> Result<(Vec<Entry>, bool, Span), ParseError> {
        let open_span = self.current_span();
        self.cursor.push_newline_mode(false);
        self.advance();
        let entries = self.parse_entries(open, open_span, close);
        self.cursor.pop_newline_mode();
        let (entries, trailing_comma) = entries?;

        let close_span = self.expect(close)?.span;
        Ok((entries, trailing_comma, open_span.merge(close_span)))
    }

    /// `entries := (entry (',' entry)* ','?)?`, stopping before `close`.
    fn parse_entries(
        &mut self,
        open: TokenKind,
        open_span: Span,
        close: TokenKind,
    ) -> Result<(Vec<Entry>, bool), ParseError> {
        let mut entries = Vec::new();
        let mut trailing_comma = false;
        while !self.check(close) {
            entries.push(self.parse_entry()?);
            trailing_comma = self.eat(TokenKind::Comma);
            if !trailing_comma && !self.check(close) {
                return Err(self.close_error(open, open_span, close));
            }
        }
        Ok((entries, trailing_comma))
    }

    /// Error for a list that neither continues nor closes.
    pub(super) fn close_error(&self, open: TokenKind, open_span: Span, close: TokenKind) -> ParseError {
        let found = self.current_kind();
        if found == TokenKind::Eof {
            ParseError::unclosed_delimiter(open, open_span, found, self.current_span())
        } else {
            ParseError::unexpected_token(&format!("`,` or {close}"), found, self.current_span())
        }
    }

    /// `entry := key ':' expr | '...' NAME | expr`
    fn parse_entry(&mut self) -> Result<Entry, ParseError> {
        let start = self.current_span();

        if self.eat(TokenKind::Ellipsis) {
            let name = self.expect_ident()?;
            return Ok(Entry {
                kind: EntryKind::Expand(name),
                span: start.merge(self.previous_span()),
            });
        }

        if self.peek_kind(1) == TokenKind::Colon {
            if let Some(key) = self.key_of(self.current_kind()) {
                self.advance();
                self.advance();
                let value = self.parse_expr()?;
                return Ok(Entry {
                    kind: EntryKind::Keyed { key, value },
                    span: start.merge(self.span_of(value)),
                });
            }
        }

        let value = self.parse_expr()?;
        Ok(Entry {
            kind: EntryKind::Item(value),
            span: self.span_of(value),
        })
    }

    /// `params block` after `func` (and the name, for a func-block).
    pub(crate) fn parse_func_rest(&mut self, name: Name, start: Span) -> Result<FuncId, ParseError> {
        let params = self.in_error_context(ErrorContext::FunctionParams, Self::parse_params)?;

        // Loops do not extend into function bodies.
        let outer_loops = std::mem::take(&mut self.loop_depth);
        let body = self.parse_block();
        self.loop_depth = outer_loops;
        let body = body?;

        let params = self.arena.alloc_params(params);
        Ok(self.arena.alloc_func(FuncDef {
            name,
            params,
            body,
            span: start.merge(body.span),
        }))
    }

    /// `params := '(' (param (',' param)*)? ')'`
    /// `param := NAME ('=' expr)? | '...' NAME`
    fn parse_params(&mut self) -> Result<Vec<Param>, ParseError> {
        let open_span = self.current_span();
        self.expect(TokenKind::LParen)?;
        self.cursor.push_newline_mode(false);
        let params = self.parse_param_list(open_span);
        self.cursor.pop_newline_mode();
        let params = params?;
        self.expect(TokenKind::RParen)?;
        Ok(params)
    }

    fn parse_param_list(&mut self, open_span: Span) -> Result<Vec<Param>, ParseError> {
        let mut params = Vec::new();
        while !self.check(TokenKind::RParen) {
            let start = self.current_span();
            let rest = self.eat(TokenKind::Ellipsis);
            let name = self.expect_ident()?;
            let default = if !rest && self.eat(TokenKind::Eq) {
                Some(self.parse_expr()?)
            } else {
                None
            };
            params.push(Param {
                name,
                default,
                rest,
                span: start.merge(self.previous_span()),
            });

            if rest && !self.check(TokenKind::RParen) {
                return Err(ParseError::unexpected_token(
                    "`)` after rest parameter",
                    self.current_kind(),
                    self.current_span(),
                ));
            }
            if !self.eat(TokenKind::Comma) && !self.check(TokenKind::RParen) {
                return Err(self.close_error(TokenKind::LParen, open_span, TokenKind::RParen));
            }
        }
        Ok(params)
    }
}
