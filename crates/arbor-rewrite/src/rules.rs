//! Transforms shipped with the default optimizer.

use arbor_ast::Expr;

use crate::transform::Transform;

/// `0 + x -> x`
pub fn zero_on_left() -> Transform {
    Transform::new(
        "Left-wise Binary Addition with Zero",
        Expr::add(Expr::literal(0), Expr::wildcard("right")),
        Expr::wildcard("right"),
    )
}

/// `x + 0 -> x`
pub fn zero_on_right() -> Transform {
    Transform::new(
        "Right-wise Binary Addition with Zero",
        Expr::add(Expr::wildcard("left"), Expr::literal(0)),
        Expr::wildcard("left"),
    )
}

/// The additive identity rules, left-wise first.
pub fn default_transforms() -> Vec<Transform> {
    vec![zero_on_left(), zero_on_right()]
}
