//! Wry lexer: source text to a [`TokenList`].
//!
//! Scanning is done by a logos-derived automaton; this module turns its raw
//! slices into interned, range-checked tokens. Comments and horizontal
//! whitespace never reach the token list. Newlines do, since they end
//! statements. The first malformed token aborts lexing.

mod escape;
mod lex_error;
mod raw_token;

use logos::Logos;
use wry_ir::{Span, StringInterner, Token, TokenKind, TokenList};

pub use lex_error::{LexError, LexErrorKind};

use escape::unescape_string;
use raw_token::RawToken;

/// Lex `source`, interning identifiers and string contents into `interner`.
pub fn lex(source: &str, interner: &StringInterner) -> Result<TokenList, LexError> {
    let mut tokens = TokenList::new();
    let mut scanner = RawToken::lexer(source);

    while let Some(scanned) = scanner.next() {
        let span = Span::from_range(scanner.span());
        let text = scanner.slice();
        let raw = scanned.map_err(|()| {
            let found = text.chars().next().unwrap_or('\0');
            LexError::new(span, LexErrorKind::InvalidCharacter(found))
        })?;

        if raw == RawToken::Float && tokens.last_kind() == Some(TokenKind::Dot) {
            // `pair.0.1` is two member keys, not a member named `0.1`.
            push_member_pair(&mut tokens, text, span)?;
            continue;
        }
        let kind = cook(raw, text, span, interner)?;
        tokens.push(Token::new(kind, span));
    }

    let end = u32::try_from(source.len()).unwrap_or(u32::MAX);
    tokens.push(Token::new(TokenKind::Eof, Span::point(end)));
    Ok(tokens)
}

fn bad_number(text: &str, span: Span) -> LexError {
    LexError::new(span, LexErrorKind::InvalidNumber(text.to_string()))
}

/// Turn one scanned slice into its final token kind.
fn cook(
    raw: RawToken,
    text: &str,
    span: Span,
    interner: &StringInterner,
) -> Result<TokenKind, LexError> {
    match raw {
        RawToken::Newline => Ok(TokenKind::Newline),
        RawToken::Punct(kind) => Ok(kind),
        RawToken::Word => Ok(TokenKind::keyword(text)
            .unwrap_or_else(|| TokenKind::Ident(interner.intern(text)))),
        RawToken::Int => decimal(text)
            .map(TokenKind::Int)
            .ok_or_else(|| bad_number(text, span)),
        RawToken::Float => text
            .replace('_', "")
            .parse::<f64>()
            .ok()
            .filter(|value| value.is_finite())
            .map(|value| TokenKind::Float(value.to_bits()))
            .ok_or_else(|| bad_number(text, span)),
        RawToken::Str => {
            let body = &text[1..text.len() - 1];
            let cooked = unescape_string(body).map_err(|bad| {
                // Offsets inside `body` are one past the opening quote.
                let at = span.start + u32::try_from(bad.offset + 1).unwrap_or(0);
                let width = u32::try_from(bad.escape_char.len_utf8()).unwrap_or(1);
                LexError::new(
                    Span::new(at, at + 1 + width),
                    LexErrorKind::InvalidEscape(bad.escape_char),
                )
            })?;
            Ok(TokenKind::Str(interner.intern(&cooked)))
        }
        RawToken::OpenStr => Err(LexError::new(span, LexErrorKind::UnterminatedString)),
    }
}

/// Split a float-shaped slice such as `0.1` into `Int`, `Dot`, `Int`.
fn push_member_pair(tokens: &mut TokenList, text: &str, span: Span) -> Result<(), LexError> {
    let (left, right) = text
        .split_once('.')
        .filter(|(_, right)| !right.contains(['e', 'E']))
        .ok_or_else(|| bad_number(text, span))?;
    let (Some(left_key), Some(right_key)) = (decimal(left), decimal(right)) else {
        return Err(bad_number(text, span));
    };
    let dot = span.start + u32::try_from(left.len()).map_err(|_| bad_number(text, span))?;

    tokens.push(Token::new(TokenKind::Int(left_key), Span::new(span.start, dot)));
    tokens.push(Token::new(TokenKind::Dot, Span::new(dot, dot + 1)));
    tokens.push(Token::new(TokenKind::Int(right_key), Span::new(dot + 1, span.end)));
    Ok(())
}

/// Value of a run of decimal digits with optional `_` separators, or `None`
/// when it does not fit in an `i64`.
fn decimal(digits: &str) -> Option<i64> {
    digits
        .bytes()
        .filter(|&b| b != b'_')
        .try_fold(0i64, |acc, b| {
            acc.checked_mul(10)?.checked_add(i64::from(b.checked_sub(b'0')?))
        })
}

#[cfg(test)]
#[expect(clippy::unwrap_used, reason = "Tests use unwrap for brevity")]
mod tests;
