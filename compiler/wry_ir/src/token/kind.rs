use std::fmt;

use crate::Name;

/// Token kinds.
///
/// Floats are stored as bits so the enum stays `Eq + Hash`.
#[derive(Copy, Clone, Eq, PartialEq, Hash, Debug)]
pub enum TokenKind {
    // Literals
    Int(i64),
    Float(u64),
    /// String literal, escapes already cooked.
    Str(Name),
    Ident(Name),

    // Keywords
    And,
    As,
    Break,
    Catch,
    Continue,
    Do,
    Elif,
    Else,
    False,
    For,
    From,
    Func,
    If,
    In,
    Inherit,
    Not,
    Null,
    Or,
    Raise,
    Return,
    True,
    Try,
    With,

    // Delimiters
    LParen,
    RParen,
    LBracket,
    RBracket,
    LBrace,
    RBrace,
    Comma,
    Colon,
    Semicolon,
    Dot,
    Ellipsis,
    At,

    // Operators
    Amp,
    Eq,
    EqEq,
    NotEq,
    Lt,
    LtEq,
    Gt,
    GtEq,
    Plus,
    Minus,
    Star,
    Slash,
    Percent,

    Newline,
    Eof,
}

impl TokenKind {
    /// Fixed source text of punctuation and keywords; `None` for tokens
    /// carrying a payload.
    pub fn as_str(self) -> Option<&'static str> {
        let s = match self {
            TokenKind::Int(_) | TokenKind::Float(_) | TokenKind::Str(_) | TokenKind::Ident(_) => {
                return None
            }
            TokenKind::And => "and",
            TokenKind::As => "as",
            TokenKind::Break => "break",
            TokenKind::Catch => "catch",
            TokenKind::Continue => "continue",
            TokenKind::Do => "do",
            TokenKind::Elif => "elif",
            TokenKind::Else => "else",
            TokenKind::False => "false",
            TokenKind::For => "for",
            TokenKind::From => "from",
            TokenKind::Func => "func",
            TokenKind::If => "if",
            TokenKind::In => "in",
            TokenKind::Inherit => "inherit",
            TokenKind::Not => "not",
            TokenKind::Null => "null",
            TokenKind::Or => "or",
            TokenKind::Raise => "raise",
            TokenKind::Return => "return",
            TokenKind::True => "true",
            TokenKind::Try => "try",
            TokenKind::With => "with",
            TokenKind::LParen => "(",
            TokenKind::RParen => ")",
            TokenKind::LBracket => "[",
            TokenKind::RBracket => "]",
            TokenKind::LBrace => "{",
            TokenKind::RBrace => "}",
            TokenKind::Comma => ",",
            TokenKind::Colon => ":",
            TokenKind::Semicolon => ";",
            TokenKind::Dot => ".",
            TokenKind::Ellipsis => "...",
            TokenKind::At => "@",
            TokenKind::Amp => "&",
            TokenKind::Eq => "=",
            TokenKind::EqEq => "==",
            TokenKind::NotEq => "!=",
            TokenKind::Lt => "<",
            TokenKind::LtEq => "<=",
            TokenKind::Gt => ">",
            TokenKind::GtEq => ">=",
            TokenKind::Plus => "+",
            TokenKind::Minus => "-",
            TokenKind::Star => "*",
            TokenKind::Slash => "/",
            TokenKind::Percent => "%",
            TokenKind::Newline => "newline",
            TokenKind::Eof => "end of file",
        };
        Some(s)
    }

    /// The keyword spelled `word`, if it is one.
    pub fn keyword(word: &str) -> Option<TokenKind> {
        Some(match word {
            "and" => TokenKind::And,
            "as" => TokenKind::As,
            "break" => TokenKind::Break,
            "catch" => TokenKind::Catch,
            "continue" => TokenKind::Continue,
            "do" => TokenKind::Do,
            "elif" => TokenKind::Elif,
            "else" => TokenKind::Else,
            "false" => TokenKind::False,
            "for" => TokenKind::For,
            "from" => TokenKind::From,
            "func" => TokenKind::Func,
            "if" => TokenKind::If,
            "in" => TokenKind::In,
            "inherit" => TokenKind::Inherit,
            "not" => TokenKind::Not,
            "null" => TokenKind::Null,
            "or" => TokenKind::Or,
            "raise" => TokenKind::Raise,
            "return" => TokenKind::Return,
            "true" => TokenKind::True,
            "try" => TokenKind::Try,
            "with" => TokenKind::With,
            _ => return None,
        })
    }

    /// Short description used in "expected X, found Y" messages.
    pub fn describe(self) -> &'static str {
        match self {
            TokenKind::Int(_) => "integer literal",
            TokenKind::Float(_) => "float literal",
            TokenKind::Str(_) => "string literal",
            TokenKind::Ident(_) => "identifier",
            other => other.as_str().unwrap_or("token"),
        }
    }

    /// Check whether two kinds have the same variant, ignoring payloads.
    #[inline]
    pub fn same_variant(self, other: TokenKind) -> bool {
        std::mem::discriminant(&self) == std::mem::discriminant(&other)
    }
}

impl fmt::Display for TokenKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self.as_str() {
            Some(s) => write!(f, "`{s}`"),
            None => write!(f, "{}", self.describe()),
        }
    }
}
