//! Expression parsing with operator precedence.
//!
//! Precedence (lowest → highest):
//! 3. `+`, `-`
//! 2. `*`, `/`
//! 1. unary `-`, `+`
//!
//! Primaries are number literals, constant names, and parenthesized
//! expressions. Nothing else (calls, attributes, indexing) is reachable.

use symconf_lexer::token::TokenKind;
use symconf_types::ast::*;
use symconf_types::{ErrorCode, ExprError, Number};

use crate::parser::Parser;

/// Maximum height of the expression tree.
///
/// Parentheses, unary operators and every operator of a binary chain
/// each add one level, so evaluating and dropping the tree stays shallow.
pub const MAX_DEPTH: u32 = 256;

impl Parser {
    // ══════════════════════════════════════════════════════════════════════════
    // Entry Point
    // ══════════════════════════════════════════════════════════════════════════

    /// Parse an expression.
    pub(crate) fn parse_expression(&mut self) -> Option<Expr> {
        if !self.enter() {
            return None;
        }
        let result = self.parse_add();
        self.depth -= 1;
        result
    }

    /// Bump the nesting depth, reporting an error past [`MAX_DEPTH`].
    fn enter(&mut self) -> bool {
        self.depth += 1;
        if self.depth > MAX_DEPTH {
            self.error_at_current(
                ErrorCode::NESTING_TOO_DEEP,
                format!("maximum expression nesting depth is {MAX_DEPTH}"),
            );
            self.depth -= 1;
            return false;
        }
        true
    }

    // ══════════════════════════════════════════════════════════════════════════
    // Precedence Chain
    // ══════════════════════════════════════════════════════════════════════════

    /// `AddExpr = MulExpr { ("+" | "-") MulExpr }`
    fn parse_add(&mut self) -> Option<Expr> {
        let mut left = self.parse_mul()?;
        let base = self.depth;
        loop {
            let op = match self.peek_kind() {
                TokenKind::Plus => BinOp::Add,
                TokenKind::Minus => BinOp::Sub,
                _ => break,
            };
            self.advance();
            // Each operator wraps `left` one level deeper.
            if !self.enter() {
                self.depth = base;
                return None;
            }
            let Some(right) = self.parse_mul() else {
                self.depth = base;
                return None;
            };
            let span = left.span.merge(right.span);
            left = Expr::new(
                ExprKind::Binary {
                    left: Box::new(left),
                    op,
                    right: Box::new(right),
                },
                span,
            );
        }
        self.depth = base;
        Some(left)
    }

    /// `MulExpr = UnaryExpr { ("*" | "/") UnaryExpr }`
    fn parse_mul(&mut self) -> Option<Expr> {
        let mut left = self.parse_unary()?;
        let base = self.depth;
        loop {
            let op = match self.peek_kind() {
                TokenKind::Star => BinOp::Mul,
                TokenKind::Slash => BinOp::Div,
                _ => break,
            };
            self.advance();
            if !self.enter() {
                self.depth = base;
                return None;
            }
            let Some(right) = self.parse_unary() else {
                self.depth = base;
                return None;
            };
            let span = left.span.merge(right.span);
            left = Expr::new(
                ExprKind::Binary {
                    left: Box::new(left),
                    op,
                    right: Box::new(right),
                },
                span,
            );
        }
        self.depth = base;
        Some(left)
    }

    /// `UnaryExpr = ("-" | "+") UnaryExpr | PrimaryExpr`
    fn parse_unary(&mut self) -> Option<Expr> {
        let op = match self.peek_kind() {
            TokenKind::Minus => UnaryOp::Neg,
            TokenKind::Plus => UnaryOp::Plus,
            _ => return self.parse_primary(),
        };
        let start = self.advance();
        if !self.enter() {
            return None;
        }
        let operand = self.parse_unary();
        self.depth -= 1;
        let operand = operand?;
        let span = start.merge(operand.span);
        Some(Expr::new(
            ExprKind::Unary {
                op,
                operand: Box::new(operand),
            },
            span,
        ))
    }

    /// `PrimaryExpr = Number | Identifier | "(" Expr ")"`
    fn parse_primary(&mut self) -> Option<Expr> {
        let span = self.current_span();
        match self.peek_kind().clone() {
            TokenKind::IntLit(n) => {
                self.advance();
                Some(Expr::new(ExprKind::NumberLit(Number::Int(n)), span))
            }
            TokenKind::FloatLit(n) => {
                self.advance();
                Some(Expr::new(ExprKind::NumberLit(Number::Float(n)), span))
            }
            TokenKind::Identifier(name) => {
                self.advance();
                Some(Expr::new(ExprKind::Identifier(name), span))
            }
            TokenKind::LParen => {
                self.advance();
                let inner = self.parse_expression()?;
                if !self.eat(&TokenKind::RParen) {
                    self.report(
                        ExprError::new(ErrorCode::UNCLOSED_PAREN, "unclosed '('", span)
                            .with_suggestion("add a closing ')'"),
                    );
                    return None;
                }
                let span = span.merge(self.previous_span());
                Some(Expr::new(ExprKind::Paren(Box::new(inner)), span))
            }
            TokenKind::Eof => {
                self.error_at_current(
                    ErrorCode::UNEXPECTED_TOKEN,
                    "expected a number, a name or '(', got end of expression",
                );
                None
            }
            other if other.is_operator() => {
                self.report(
                    ExprError::new(
                        ErrorCode::UNEXPECTED_TOKEN,
                        format!("expected an operand, got '{other}'"),
                        span,
                    )
                    .with_suggestion("operators must sit between two operands"),
                );
                None
            }
            other => {
                self.error_at_current(
                    ErrorCode::UNEXPECTED_TOKEN,
                    format!("expected a number, a name or '(', got '{other}'"),
                );
                None
            }
        }
    }
}
