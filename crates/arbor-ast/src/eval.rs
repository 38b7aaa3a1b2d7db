//! Reduction of expression trees to a numeric value.

use crate::ast::{Expr, NumericLiteral, Value};
use crate::errors::{EvalError, EvalResult};

/// Evaluate a tree, reporting the leftmost wildcard if one is present.
///
/// Addition wraps around on overflow.
pub fn eval_expr(expr: &Expr) -> EvalResult<u64> {
    Ok(match expr {
        Expr::Literal(NumericLiteral {
            value: Value::Concrete(n),
            ..
        }) => *n,
        Expr::Literal(NumericLiteral {
            value: Value::Wildcard,
            id,
        }) => {
            return Err(EvalError::UnboundWildcard {
                identifier: id.clone(),
            });
        }
        Expr::Add(add) => eval_expr(&add.left)?.wrapping_add(eval_expr(&add.right)?),
    })
}

impl Expr {
    pub fn try_evaluate(&self) -> EvalResult<u64> {
        eval_expr(self)
    }

    /// Evaluate a concrete tree.
    ///
    /// # Panics
    ///
    /// Panics if the tree contains a wildcard. Evaluating a pattern is a
    /// programming error, never a user error.
    pub fn evaluate(&self) -> u64 {
        match eval_expr(self) {
            Ok(value) => value,
            Err(err) => panic!("{err}"),
        }
    }
}
