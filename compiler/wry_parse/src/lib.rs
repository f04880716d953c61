//! Recursive descent parser for Wry.
//!
//! Produces a flat AST in an `ExprArena`. Parsing stops at the first
//! syntax error; there is no recovery.

mod cursor;
mod error;
mod grammar;

pub use cursor::Cursor;
pub use error::{ErrorContext, ParseError};

use wry_ir::{ExprArena, Name, Script, SharedArena, Span, StringInterner, Token, TokenKind, TokenList};

/// Parser state.
pub struct Parser<'a> {
    cursor: Cursor<'a>,
    arena: ExprArena,
    /// Number of `for` bodies enclosing the current statement within the
    /// current function.
    loop_depth: u32,
}

/// Result of parsing a script.
#[derive(Debug)]
pub struct ParseOutput {
    /// The script; empty when `error` is set.
    pub script: Script,
    pub arena: SharedArena,
    pub error: Option<ParseError>,
}

impl ParseOutput {
    pub fn has_errors(&self) -> bool {
        self.error.is_some()
    }
}

impl<'a> Parser<'a> {
    /// Create a new parser.
    pub fn new(tokens: &'a TokenList, interner: &'a StringInterner) -> Self {
        Parser {
            cursor: Cursor::new(tokens, interner),
            arena: ExprArena::new(),
            loop_depth: 0,
        }
    }

    // Cursor delegation

    #[inline]
    fn current(&self) -> Token {
        self.cursor.current()
    }

    #[inline]
    fn current_kind(&self) -> TokenKind {
        self.cursor.current_kind()
    }

    #[inline]
    fn current_span(&self) -> Span {
        self.cursor.current_span()
    }

    #[inline]
    fn previous_span(&self) -> Span {
        self.cursor.previous_span()
    }

    #[inline]
    fn peek_kind(&self, n: usize) -> TokenKind {
        self.cursor.peek_kind(n)
    }

    #[inline]
    fn check(&self, kind: TokenKind) -> bool {
        self.cursor.check(kind)
    }

    #[inline]
    fn check_ident(&self) -> bool {
        self.cursor.check_ident()
    }

    #[inline]
    fn advance(&mut self) -> Token {
        self.cursor.advance()
    }

    #[inline]
    fn eat(&mut self, kind: TokenKind) -> bool {
        self.cursor.eat(kind)
    }

    #[inline]
    fn skip_newlines(&mut self) {
        self.cursor.skip_newlines();
    }

    #[inline]
    fn expect(&mut self, kind: TokenKind) -> Result<Token, ParseError> {
        self.cursor.expect(kind)
    }

    #[inline]
    fn expect_ident(&mut self) -> Result<Name, ParseError> {
        self.cursor.expect_ident()
    }

    /// Run `f`, tagging any error it returns with `context`.
    fn in_error_context<T>(
        &mut self,
        context: ErrorContext,
        f: impl FnOnce(&mut Self) -> Result<T, ParseError>,
    ) -> Result<T, ParseError> {
        f(self).map_err(|err| err.with_context(context))
    }

    /// Parse a whole script.
    #[tracing::instrument(level = "debug", skip_all)]
    pub fn parse_script(mut self) -> ParseOutput {
        let result = self.in_error_context(ErrorContext::Script, Self::parse_script_body);
        let (script, error) = match result {
            Ok(script) => (script, None),
            Err(err) => (Script::default(), Some(err)),
        };
        tracing::debug!(
            exprs = self.arena.expr_count(),
            stmts = self.arena.stmt_count(),
            failed = error.is_some(),
            "parsed script"
        );
        ParseOutput {
            script,
            arena: SharedArena::new(self.arena),
            error,
        }
    }
}

/// Parse a token list into a script.
pub fn parse(tokens: &TokenList, interner: &StringInterner) -> ParseOutput {
    Parser::new(tokens, interner).parse_script()
}
