//! Grammar rules, split by syntactic category.
//!
//! - `mod.rs`: script body, blocks and statement sequencing
//! - `stmt.rs`: compound and flow statements
//! - `expr/`: the expression precedence chain, postfix forms and atoms

mod expr;
mod stmt;

use wry_ir::{Block, Script, StmtId, TokenKind};
use wry_stack::ensure_sufficient_stack;

use crate::{ErrorContext, ParseError, Parser};

impl Parser<'_> {
    /// `script := NEWLINE* (statement NEWLINE*)* EOF`
    pub(crate) fn parse_script_body(&mut self) -> Result<Script, ParseError> {
        let start = self.current_span();
        let stmts = self.parse_statements(TokenKind::Eof)?;
        let span = start.merge(self.current_span());
        Ok(Script {
            body: self.arena.alloc_stmt_list(stmts),
            span,
        })
    }

    /// Statements up to (not including) `end`.
    fn parse_statements(&mut self, end: TokenKind) -> Result<Vec<StmtId>, ParseError> {
        let mut stmts = Vec::new();
        loop {
            self.skip_newlines();
            if self.check(end) || self.check(TokenKind::Eof) {
                return Ok(stmts);
            }
            self.parse_statement(&mut stmts)?;
        }
    }

    /// `block := '{' blockStatements '}'`
    pub(crate) fn parse_block(&mut self) -> Result<Block, ParseError> {
        ensure_sufficient_stack(|| self.in_error_context(ErrorContext::Block, Self::parse_block_inner))
    }

    fn parse_block_inner(&mut self) -> Result<Block, ParseError> {
        if !self.check(TokenKind::LBrace) {
            return Err(ParseError::expected_block(
                self.current_kind(),
                self.current_span(),
            ));
        }
        let open = self.current_span();
        self.cursor.push_newline_mode(true);
        self.advance();

        let stmts = self.parse_statements(TokenKind::RBrace);
        self.cursor.pop_newline_mode();
        let stmts = stmts?;

        if !self.check(TokenKind::RBrace) {
            return Err(ParseError::unclosed_delimiter(
                TokenKind::LBrace,
                open,
                self.current_kind(),
                self.current_span(),
            ));
        }
        let close = self.advance().span;
        Ok(Block {
            stmts: self.arena.alloc_stmt_list(stmts),
            span: open.merge(close),
        })
    }

    /// After a statement: `;`, a newline, `}` or end of input.
    ///
    /// `}` and end of input are left for the enclosing rule.
    fn expect_statement_end(&mut self) -> Result<(), ParseError> {
        match self.current_kind() {
            TokenKind::Newline | TokenKind::Semicolon => {
                self.advance();
                Ok(())
            }
            TokenKind::RBrace | TokenKind::Eof => Ok(()),
            found => Err(ParseError::unexpected_token(
                "end of statement",
                found,
                self.current_span(),
            )),
        }
    }
}
