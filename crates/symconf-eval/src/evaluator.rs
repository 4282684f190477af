//! Tree-walking evaluator for expression ASTs.
//!
//! The evaluator only knows four operators, two unary signs, number
//! literals and the names bound in the [`Environment`] it borrows. There
//! is no other reachable name, call or attribute.

use crate::env::Environment;
use crate::error::{EvalError, EvalResult};
use symconf_types::ast::*;
use symconf_types::{Number, Scalar};

/// Evaluates expressions against a borrowed environment.
pub struct Evaluator<'env> {
    env: &'env Environment,
}

impl<'env> Evaluator<'env> {
    pub fn new(env: &'env Environment) -> Self {
        Self { env }
    }

    // ══════════════════════════════════════════════════════════════════════
    // Expression evaluation
    // ══════════════════════════════════════════════════════════════════════

    /// Evaluate an expression to a scalar.
    pub fn eval_expr(&self, expr: &Expr) -> EvalResult<Scalar> {
        match &expr.kind {
            ExprKind::NumberLit(n) => Ok(Scalar::Number(*n)),
            ExprKind::Identifier(name) => self.eval_identifier(name),
            ExprKind::Binary { left, op, right } => {
                let lv = self.eval_expr(left)?;
                let rv = self.eval_expr(right)?;
                self.eval_binary(*op, lv, rv)
            }
            ExprKind::Unary { op, operand } => self.eval_unary(*op, operand),
            ExprKind::Paren(inner) => self.eval_expr(inner),
        }
    }

    fn eval_identifier(&self, name: &str) -> EvalResult<Scalar> {
        self.env
            .get(name)
            .cloned()
            .ok_or_else(|| EvalError::UndefinedName(name.to_string()))
    }

    // ── Operators ────────────────────────────────────────────────────────

    fn eval_binary(&self, op: BinOp, lv: Scalar, rv: Scalar) -> EvalResult<Scalar> {
        match (lv, rv) {
            (Scalar::Number(a), Scalar::Number(b)) => arith(op, a, b).map(Scalar::Number),
            (Scalar::Text(a), Scalar::Text(b)) if op == BinOp::Add => {
                Ok(Scalar::Text(format!("{a}{b}")))
            }
            (lv, rv) => Err(EvalError::TypeMismatch(format!(
                "cannot apply '{op}' to {} and {}",
                lv.type_name(),
                rv.type_name()
            ))),
        }
    }

    fn eval_unary(&self, op: UnaryOp, operand: &Expr) -> EvalResult<Scalar> {
        let val = self.eval_expr(operand)?;
        match (op, val) {
            (UnaryOp::Plus, Scalar::Number(n)) => Ok(Scalar::Number(n)),
            (UnaryOp::Neg, Scalar::Number(Number::Int(i))) => i
                .checked_neg()
                .map(Scalar::from)
                .ok_or_else(|| EvalError::Overflow(format!("-({i})"))),
            (UnaryOp::Neg, Scalar::Number(Number::Float(f))) => Ok(Scalar::from(-f)),
            (_, val) => Err(EvalError::TypeMismatch(format!(
                "cannot negate {}",
                val.type_name()
            ))),
        }
    }
}

/// Numeric promotion: integer operands stay integral for `+ - *`,
/// division always produces a float, and any float operand makes a float.
fn arith(op: BinOp, a: Number, b: Number) -> EvalResult<Number> {
    if op == BinOp::Div {
        if b.is_zero() {
            return Err(EvalError::DivisionByZero);
        }
        return finite(op, a.as_f64() / b.as_f64());
    }

    match (a, b) {
        (Number::Int(x), Number::Int(y)) => {
            let result = match op {
                BinOp::Add => x.checked_add(y),
                BinOp::Sub => x.checked_sub(y),
                BinOp::Mul => x.checked_mul(y),
                BinOp::Div => unreachable!("handled above"),
            };
            result
                .map(Number::Int)
                .ok_or_else(|| EvalError::Overflow(format!("{x} {op} {y}")))
        }
        _ => {
            let (x, y) = (a.as_f64(), b.as_f64());
            let result = match op {
                BinOp::Add => x + y,
                BinOp::Sub => x - y,
                BinOp::Mul => x * y,
                BinOp::Div => unreachable!("handled above"),
            };
            finite(op, result)
        }
    }
}

fn finite(op: BinOp, value: f64) -> EvalResult<Number> {
    if value.is_finite() {
        Ok(Number::Float(value))
    } else {
        Err(EvalError::NonFinite(format!("'{op}' produced {value}")))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_int_arith_stays_integral() {
        assert_eq!(arith(BinOp::Add, 8080.into(), 2.into()).unwrap(), Number::Int(8082));
        assert_eq!(arith(BinOp::Mul, 6.into(), 7.into()).unwrap(), Number::Int(42));
        assert_eq!(arith(BinOp::Sub, 5.into(), 7.into()).unwrap(), Number::Int(-2));
    }

    #[test]
    fn test_division_is_always_float() {
        assert_eq!(arith(BinOp::Div, 100.into(), 2.into()).unwrap(), Number::Float(50.0));
        assert_eq!(arith(BinOp::Div, 1.into(), 4.into()).unwrap(), Number::Float(0.25));
    }

    #[test]
    fn test_float_operand_promotes() {
        assert_eq!(arith(BinOp::Mul, 100.into(), 1.2.into()).unwrap(), Number::Float(120.0));
        assert_eq!(arith(BinOp::Add, 1.5.into(), 1.into()).unwrap(), Number::Float(2.5));
    }

    #[test]
    fn test_division_by_zero() {
        assert!(matches!(
            arith(BinOp::Div, 1.into(), 0.into()),
            Err(EvalError::DivisionByZero)
        ));
        assert!(matches!(
            arith(BinOp::Div, 1.into(), 0.0.into()),
            Err(EvalError::DivisionByZero)
        ));
    }

    #[test]
    fn test_int_overflow() {
        assert!(matches!(
            arith(BinOp::Mul, i128::MAX.into(), 2.into()),
            Err(EvalError::Overflow(_))
        ));
    }

    #[test]
    fn test_float_overflow_is_non_finite() {
        assert!(matches!(
            arith(BinOp::Mul, 1e308.into(), 10.into()),
            Err(EvalError::NonFinite(_))
        ));
    }
}
