//! Structural matching of pattern trees against query trees.

use arbor_ast::{Expr, Value};

/// Whether `query` has the shape of `pattern`.
///
/// Additions match child by child, in order; `a + 0` and `0 + a` are distinct
/// patterns. Concrete literals match equal values, and a wildcard on either
/// side matches any literal. Identifiers play no part in matching, so two
/// wildcards sharing a name bind independently and are not required to see
/// equal values.
pub fn matches(pattern: &Expr, query: &Expr) -> bool {
    match (pattern, query) {
        (Expr::Add(p), Expr::Add(q)) => matches(&p.left, &q.left) && matches(&p.right, &q.right),
        (Expr::Literal(p), Expr::Literal(q)) => match (p.value, q.value) {
            (Value::Concrete(a), Value::Concrete(b)) => a == b,
            (Value::Wildcard, _) | (_, Value::Wildcard) => true,
        },
        (Expr::Add(_), Expr::Literal(_)) | (Expr::Literal(_), Expr::Add(_)) => false,
    }
}
