//! Which tokens spell which operators.

use wry_ir::{BinaryOp, TokenKind, UnaryOp};

use crate::Parser;

/// Binary precedence tiers handled by table lookup, loosest first.
///
/// `and`, `or` and `&` have their own productions.
#[derive(Copy, Clone, Debug, Eq, PartialEq)]
pub(super) enum Tier {
    Relation,
    Sum,
    Product,
}

impl Tier {
    /// The next tighter tier, or `None` below products.
    pub(super) fn tighter(self) -> Option<Tier> {
        match self {
            Tier::Relation => Some(Tier::Sum),
            Tier::Sum => Some(Tier::Product),
            Tier::Product => None,
        }
    }
}

fn binary(kind: TokenKind) -> Option<(Tier, BinaryOp)> {
    let entry = match kind {
        TokenKind::EqEq => (Tier::Relation, BinaryOp::Eq),
        TokenKind::NotEq => (Tier::Relation, BinaryOp::NotEq),
        TokenKind::Lt => (Tier::Relation, BinaryOp::Lt),
        TokenKind::LtEq => (Tier::Relation, BinaryOp::LtEq),
        TokenKind::Gt => (Tier::Relation, BinaryOp::Gt),
        TokenKind::GtEq => (Tier::Relation, BinaryOp::GtEq),
        TokenKind::Plus => (Tier::Sum, BinaryOp::Add),
        TokenKind::Minus => (Tier::Sum, BinaryOp::Sub),
        TokenKind::Star => (Tier::Product, BinaryOp::Mul),
        TokenKind::Slash => (Tier::Product, BinaryOp::Div),
        TokenKind::Percent => (Tier::Product, BinaryOp::Mod),
        _ => return None,
    };
    Some(entry)
}

impl Parser<'_> {
    /// The binary operator at the cursor if it belongs to `tier`.
    pub(super) fn peek_binary(&self, tier: Tier) -> Option<BinaryOp> {
        binary(self.current_kind())
            .filter(|(found, _)| *found == tier)
            .map(|(_, op)| op)
    }

    /// A prefix `+` or `-` at the cursor.
    pub(super) fn peek_sign(&self) -> Option<UnaryOp> {
        match self.current_kind() {
            TokenKind::Minus => Some(UnaryOp::Neg),
            TokenKind::Plus => Some(UnaryOp::Plus),
            _ => None,
        }
    }
}
