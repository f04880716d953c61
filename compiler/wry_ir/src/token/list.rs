use std::ops::Deref;

use super::{Token, TokenKind};

/// Tokens in source order. The lexer always ends the list with `Eof`.
///
/// Dereferences to a slice for indexing and iteration; only appending is
/// allowed through the list itself.
#[derive(Clone, Default, Debug, PartialEq, Eq)]
pub struct TokenList(Vec<Token>);

impl TokenList {
    pub fn new() -> Self {
        Self::default()
    }

    #[inline]
    pub fn push(&mut self, token: Token) {
        self.0.push(token);
    }

    /// Kind of the most recently pushed token.
    pub fn last_kind(&self) -> Option<TokenKind> {
        self.0.last().map(|token| token.kind)
    }
}

impl Deref for TokenList {
    type Target = [Token];

    fn deref(&self) -> &[Token] {
        &self.0
    }
}

impl<'a> IntoIterator for &'a TokenList {
    type Item = &'a Token;
    type IntoIter = std::slice::Iter<'a, Token>;

    fn into_iter(self) -> Self::IntoIter {
        self.0.iter()
    }
}
