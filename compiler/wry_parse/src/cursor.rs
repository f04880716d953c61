//! Token cursor for navigating the token stream.
//!
//! Newlines terminate statements, except inside `(...)` and `[...]`. The
//! cursor keeps a stack of newline modes: entering a bracket pushes
//! "insignificant" and entering a block pushes "significant". While the
//! innermost mode is insignificant, newline tokens are skipped
//! transparently by every lookahead and `advance`.

use wry_ir::{Name, Span, StringInterner, Token, TokenKind, TokenList};

use crate::ParseError;

/// Cursor for navigating tokens.
pub struct Cursor<'a> {
    tokens: &'a TokenList,
    interner: &'a StringInterner,
    pos: usize,
    /// `true` = newlines are significant.
    newline_modes: Vec<bool>,
}

impl<'a> Cursor<'a> {
    /// Create a new cursor at the start of the token stream.
    pub fn new(tokens: &'a TokenList, interner: &'a StringInterner) -> Self {
        Cursor {
            tokens,
            interner,
            pos: 0,
            newline_modes: Vec::new(),
        }
    }

    pub fn interner(&self) -> &'a StringInterner {
        self.interner
    }

    #[inline]
    fn newlines_significant(&self) -> bool {
        self.newline_modes.last().copied().unwrap_or(true)
    }

    /// Enter a region with the given newline mode.
    pub fn push_newline_mode(&mut self, significant: bool) {
        self.newline_modes.push(significant);
        self.settle();
    }

    /// Leave the innermost newline region.
    pub fn pop_newline_mode(&mut self) {
        self.newline_modes.pop();
    }

    /// Move past newlines if they are currently insignificant.
    fn settle(&mut self) {
        if !self.newlines_significant() {
            while self.raw_kind(self.pos) == TokenKind::Newline {
                self.pos += 1;
            }
        }
    }

    /// Kind at an absolute index; the stream always ends in `Eof`.
    #[inline]
    fn raw_kind(&self, index: usize) -> TokenKind {
        self.tokens
            .get(index)
            .map_or(TokenKind::Eof, |tok| tok.kind)
    }

    /// Get the current token.
    #[inline]
    pub fn current(&self) -> Token {
        match self.tokens.get(self.pos) {
            Some(tok) => *tok,
            None => Token::new(TokenKind::Eof, self.eof_span()),
        }
    }

    fn eof_span(&self) -> Span {
        self.tokens.last().map_or(Span::DUMMY, |tok| tok.span)
    }

    #[inline]
    pub fn current_kind(&self) -> TokenKind {
        self.raw_kind(self.pos)
    }

    #[inline]
    pub fn current_span(&self) -> Span {
        self.current().span
    }

    /// Span of the most recently consumed token.
    pub fn previous_span(&self) -> Span {
        let mut index = self.pos;
        while index > 0 {
            index -= 1;
            let tok = self.tokens[index];
            if tok.kind != TokenKind::Newline || self.newlines_significant() {
                return tok.span;
            }
        }
        Span::DUMMY
    }

    /// Kind of the `n`th token after the current one, honoring the
    /// newline mode.
    pub fn peek_kind(&self, n: usize) -> TokenKind {
        let skip = !self.newlines_significant();
        let mut index = self.pos;
        let mut remaining = n;
        loop {
            if skip {
                while self.raw_kind(index) == TokenKind::Newline {
                    index += 1;
                }
            }
            if remaining == 0 {
                return self.raw_kind(index);
            }
            if self.raw_kind(index) == TokenKind::Eof {
                return TokenKind::Eof;
            }
            index += 1;
            remaining -= 1;
        }
    }

    /// First non-newline kind at or after the current token.
    pub fn peek_past_newlines(&self) -> TokenKind {
        let mut index = self.pos;
        while self.raw_kind(index) == TokenKind::Newline {
            index += 1;
        }
        self.raw_kind(index)
    }

    #[inline]
    pub fn is_at_end(&self) -> bool {
        self.current_kind() == TokenKind::Eof
    }

    /// Check if the current token has the same variant as `kind`.
    #[inline]
    pub fn check(&self, kind: TokenKind) -> bool {
        self.current_kind().same_variant(kind)
    }

    #[inline]
    pub fn check_ident(&self) -> bool {
        matches!(self.current_kind(), TokenKind::Ident(_))
    }

    /// Advance to the next token and return the consumed token.
    ///
    /// Never moves past `Eof`.
    pub fn advance(&mut self) -> Token {
        let tok = self.current();
        if tok.kind != TokenKind::Eof {
            self.pos += 1;
        }
        self.settle();
        tok
    }

    /// Consume the current token if it matches.
    pub fn eat(&mut self, kind: TokenKind) -> bool {
        if self.check(kind) {
            self.advance();
            true
        } else {
            false
        }
    }

    /// Skip all newline tokens.
    pub fn skip_newlines(&mut self) {
        while self.current_kind() == TokenKind::Newline {
            self.pos += 1;
        }
    }

    /// Expect the current token to be of the given kind, advance and return it.
    #[inline]
    pub fn expect(&mut self, kind: TokenKind) -> Result<Token, ParseError> {
        if self.check(kind) {
            Ok(self.advance())
        } else {
            Err(self.make_expect_error(kind))
        }
    }

    #[cold]
    #[inline(never)]
    fn make_expect_error(&self, kind: TokenKind) -> ParseError {
        ParseError::unexpected_token(&kind.to_string(), self.current_kind(), self.current_span())
    }

    /// Expect and consume an identifier, returning its interned name.
    #[inline]
    pub fn expect_ident(&mut self) -> Result<Name, ParseError> {
        if let TokenKind::Ident(name) = self.current_kind() {
            self.advance();
            Ok(name)
        } else {
            Err(ParseError::expected_identifier(
                self.current_kind(),
                self.current_span(),
            ))
        }
    }
}

#[cfg(test)]
#[expect(clippy::unwrap_used, reason = "Tests use unwrap for brevity")]
mod tests;
