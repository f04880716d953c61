//! Statement parsing.

use wry_diagnostic::ErrorCode;
use wry_ir::{Block, CatchClause, ExprId, Name, NameRange, Stmt, StmtId, StmtKind, TokenKind};

use crate::{ErrorContext, ParseError, Parser};

impl Parser<'_> {
    /// Parse one statement (compound or small) plus its terminator.
    pub(super) fn parse_statement(&mut self, out: &mut Vec<StmtId>) -> Result<(), ParseError> {
        let start = self.current_span();
        let kind = match self.current_kind() {
            TokenKind::If => {
                self.in_error_context(ErrorContext::IfStatement, Self::parse_if)?
            }
            TokenKind::Do => self.in_error_context(ErrorContext::DoStatement, |p| {
                p.advance();
                Ok(StmtKind::Do(p.parse_block()?))
            })?,
            TokenKind::For => self.in_error_context(ErrorContext::ForLoop, Self::parse_for)?,
            TokenKind::Try => {
                self.in_error_context(ErrorContext::TryStatement, Self::parse_try)?
            }
            TokenKind::With => {
                self.in_error_context(ErrorContext::WithStatement, Self::parse_with)?
            }
            TokenKind::Inherit => {
                self.in_error_context(ErrorContext::InheritBlock, Self::parse_inherit)?
            }
            TokenKind::Func if matches!(self.peek_kind(1), TokenKind::Ident(_)) => {
                self.in_error_context(ErrorContext::FuncBlock, Self::parse_func_block)?
            }
            TokenKind::Ident(name)
                if self.peek_kind(1) == TokenKind::Eq && self.peek_kind(2) == TokenKind::LBrace =>
            {
                self.in_error_context(ErrorContext::AssignBlock, |p| {
                    p.advance();
                    p.advance();
                    let body = p.parse_block()?;
                    Ok(StmtKind::AssignBlock { name, body })
                })?
            }
            _ => {
                // inlineStatementList: the rest of the line may continue
                // after `;`, handled by the caller's loop.
                self.parse_small_statement()?
            }
        };
        let span = start.merge(self.previous_span());
        out.push(self.arena.alloc_stmt(Stmt::new(kind, span)));
        self.expect_statement_end()
    }

    /// `smallStatement := flowStatement | expr`
    fn parse_small_statement(&mut self) -> Result<StmtKind, ParseError> {
        let tok = self.current();
        match tok.kind {
            TokenKind::Return => {
                self.advance();
                Ok(StmtKind::Return(self.parse_optional_expr()?))
            }
            TokenKind::Raise => {
                self.advance();
                Ok(StmtKind::Raise(self.parse_optional_expr()?))
            }
            TokenKind::Break | TokenKind::Continue => {
                if self.loop_depth == 0 {
                    return Err(ParseError::outside_loop(tok.kind, tok.span));
                }
                self.advance();
                Ok(if tok.kind == TokenKind::Break {
                    StmtKind::Break
                } else {
                    StmtKind::Continue
                })
            }
            _ => Ok(StmtKind::Expr(self.parse_expr()?)),
        }
    }

    /// Expression following `return`/`raise`, absent at a statement end.
    fn parse_optional_expr(&mut self) -> Result<Option<ExprId>, ParseError> {
        match self.current_kind() {
            TokenKind::Newline | TokenKind::Semicolon | TokenKind::RBrace | TokenKind::Eof => {
                Ok(None)
            }
            _ => self.parse_expr().map(Some),
        }
    }

    /// Consume `kw` if it is the next token after any newlines.
    ///
    /// Lets `else`, `elif` and `catch` start on the line after `}`.
    fn eat_continuation(&mut self, kw: TokenKind) -> bool {
        if self.cursor.peek_past_newlines() == kw {
            self.skip_newlines();
            self.advance();
            true
        } else {
            false
        }
    }

    /// `ifStatement := 'if' expr block ('elif' expr block)* ('else' block)?`
    ///
    /// `elif` chains desugar into an `else` block holding a nested `if`.
    fn parse_if(&mut self) -> Result<StmtKind, ParseError> {
        self.advance();
        let cond = self.parse_expr()?;
        let then_block = self.parse_block()?;

        let else_block = if self.cursor.peek_past_newlines() == TokenKind::Elif {
            self.skip_newlines();
            let elif_start = self.current_span();
            let nested = self.parse_if()?;
            let span = elif_start.merge(self.previous_span());
            let stmt = self.arena.alloc_stmt(Stmt::new(nested, span));
            Some(Block {
                stmts: self.arena.alloc_stmt_list([stmt]),
                span,
            })
        } else if self.eat_continuation(TokenKind::Else) {
            Some(self.parse_block()?)
        } else {
            None
        };

        Ok(StmtKind::If {
            cond,
            then_block,
            else_block,
        })
    }

    /// `forStatement := 'for' NAME (',' NAME)? 'in' expr block`
    fn parse_for(&mut self) -> Result<StmtKind, ParseError> {
        self.advance();
        let first = self.expect_ident()?;
        let (key, value) = if self.eat(TokenKind::Comma) {
            (Some(first), self.expect_ident()?)
        } else {
            (None, first)
        };
        self.expect(TokenKind::In)?;
        let iter = self.parse_expr()?;

        self.loop_depth += 1;
        let body = self.parse_block();
        self.loop_depth -= 1;

        Ok(StmtKind::For {
            key,
            value,
            iter,
            body: body?,
        })
    }

    /// `tryStatement := 'try' block 'catch' catchHead? block`
    fn parse_try(&mut self) -> Result<StmtKind, ParseError> {
        self.advance();
        let body = self.parse_block()?;
        if !self.eat_continuation(TokenKind::Catch) {
            return Err(ParseError::unexpected_token(
                "`catch`",
                self.current_kind(),
                self.current_span(),
            ));
        }
        let catch = self.in_error_context(ErrorContext::CatchClause, Self::parse_catch_clause)?;
        Ok(StmtKind::Try { body, catch })
    }

    /// `catchHead := NAME | NAME (',' NAME)* 'as' NAME`
    fn parse_catch_clause(&mut self) -> Result<CatchClause, ParseError> {
        let mut binding = None;
        let mut kinds = NameRange::EMPTY;

        if self.check_ident() {
            let first_span = self.current_span();
            let mut names: Vec<Name> = vec![self.expect_ident()?];
            while self.eat(TokenKind::Comma) {
                names.push(self.expect_ident()?);
            }
            if self.eat(TokenKind::As) {
                binding = Some(self.expect_ident()?);
                kinds = self.arena.alloc_names(names);
            } else if let [name] = names[..] {
                let text = self.cursor.interner().lookup(name);
                if ErrorCode::is_fault_kind(text) {
                    return Err(ParseError::kind_as_catch_binding(text, first_span));
                }
                binding = Some(name);
            } else {
                return Err(ParseError::unexpected_token(
                    "`as`",
                    self.current_kind(),
                    self.current_span(),
                ));
            }
        }

        let body = self.parse_block()?;
        Ok(CatchClause {
            binding,
            kinds,
            body,
        })
    }

    /// `withStatement := 'with' expr ('as' NAME)? block`
    fn parse_with(&mut self) -> Result<StmtKind, ParseError> {
        self.advance();
        let resource = self.parse_expr()?;
        let binding = if self.eat(TokenKind::As) {
            Some(self.expect_ident()?)
        } else {
            None
        };
        let body = self.parse_block()?;
        Ok(StmtKind::With {
            resource,
            binding,
            body,
        })
    }

    /// `funcBlock := 'func' NAME params block`
    fn parse_func_block(&mut self) -> Result<StmtKind, ParseError> {
        let start = self.advance().span;
        let name = self.expect_ident()?;
        let func = self.parse_func_rest(name, start)?;
        Ok(StmtKind::FuncBlock { name, func })
    }

    /// `inheritBlock := 'inherit' NAME 'from' NAME block`
    fn parse_inherit(&mut self) -> Result<StmtKind, ParseError> {
        self.advance();
        let name = self.expect_ident()?;
        self.expect(TokenKind::From)?;
        let parent = self.expect_ident()?;
        let body = self.parse_block()?;
        Ok(StmtKind::InheritBlock { name, parent, body })
    }
}
