//! Construction of replacement subtrees from output patterns.
//!
//! Once a transform's input pattern has matched a subtree, the pattern and the
//! subtree are structurally isomorphic. Flattening both in post-order therefore
//! yields two sequences in positional correspondence: the identifier of the
//! i-th pattern node names the i-th node of the matched subtree. Output
//! wildcards are resolved through that correspondence.

use arbor_ast::walk::post_order;
use arbor_ast::{Expr, Identifier, NumericLiteral, Value};

use crate::matcher::matches;
use crate::transform::Transform;

/// Build the replacement for `position`, which must match
/// `transform.input_pattern()`.
///
/// Neither the transform nor `position` is modified; the result is a new tree
/// whose nodes all carry the empty identifier.
///
/// # Panics
///
/// Panics if `position` is not isomorphic to the input pattern, or if an
/// output wildcard has no binding. Both indicate a caller or transform bug.
pub fn apply_transform_at(transform: &Transform, position: &Expr) -> Expr {
    debug_assert!(
        matches(transform.input_pattern(), position),
        "transform `{}` applied at a position it does not match",
        transform.name()
    );

    let expressions = post_order(position);
    let identifiers = flatten_identifiers(transform.input_pattern());
    assert_eq!(
        expressions.len(),
        identifiers.len(),
        "transform `{}`: matched subtree and input pattern flatten to different lengths",
        transform.name()
    );

    substitute(transform.output_pattern(), &expressions, &identifiers)
}

fn flatten_identifiers(pattern: &Expr) -> Vec<&Identifier> {
    post_order(pattern).into_iter().map(Expr::id).collect()
}

fn substitute(pattern: &Expr, expressions: &[&Expr], identifiers: &[&Identifier]) -> Expr {
    match pattern {
        Expr::Add(add) => Expr::add(
            substitute(&add.left, expressions, identifiers),
            substitute(&add.right, expressions, identifiers),
        ),
        Expr::Literal(NumericLiteral {
            value: Value::Wildcard,
            id,
        }) => {
            let Some(index) = identifiers.iter().position(|candidate| *candidate == id) else {
                unreachable!("output wildcard `?{id}` is not bound in the input pattern");
            };
            match expressions[index] {
                Expr::Literal(bound) => Expr::from_value(bound.value),
                Expr::Add(_) => unreachable!("wildcard `?{id}` is bound to an addition node"),
            }
        }
        Expr::Literal(NumericLiteral { value, .. }) => Expr::from_value(*value),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn zero_on_left() -> Transform {
        Transform::new(
            "zero on left",
            Expr::add(Expr::literal(0), Expr::wildcard("right")),
            Expr::wildcard("right"),
        )
    }

    #[test]
    fn copies_the_bound_value() {
        let position = Expr::add(Expr::literal(0), Expr::literal(17));
        let replacement = apply_transform_at(&zero_on_left(), &position);
        assert_eq!(replacement, Expr::literal(17));
    }

    #[test]
    fn leaves_inputs_untouched() {
        let transform = zero_on_left();
        let before = transform.clone();
        let position = Expr::add(Expr::literal(0), Expr::literal(3));
        let snapshot = position.clone();

        apply_transform_at(&transform, &position);

        assert_eq!(transform, before);
        assert_eq!(position, snapshot);
    }

    #[test]
    fn rebuilds_additions_and_concrete_literals() {
        let transform = Transform::new(
            "swap and pad",
            Expr::add(Expr::wildcard("a"), Expr::wildcard("b")),
            Expr::add(Expr::add(Expr::wildcard("b"), Expr::wildcard("a")), Expr::literal(0)),
        );
        let position = Expr::add(Expr::literal(4), Expr::literal(9));
        let replacement = apply_transform_at(&transform, &position);
        assert_eq!(replacement.to_string(), "((9 + 4) + 0)");
    }

    #[test]
    fn resolves_bindings_in_nested_patterns() {
        let transform = Transform::new(
            "reassociate",
            Expr::add(Expr::add(Expr::wildcard("a"), Expr::wildcard("b")), Expr::wildcard("c")),
            Expr::add(Expr::wildcard("a"), Expr::add(Expr::wildcard("b"), Expr::wildcard("c"))),
        );
        let position = Expr::add(Expr::add(Expr::literal(1), Expr::literal(2)), Expr::literal(3));
        let replacement = apply_transform_at(&transform, &position);
        assert_eq!(replacement.to_string(), "(1 + (2 + 3))");
        assert_eq!(replacement.evaluate(), position.evaluate());
    }

    #[test]
    fn replacement_carries_no_identifiers() {
        let position = Expr::add(Expr::literal(0), Expr::literal(5).with_id("five")).with_id("sum");
        let replacement = apply_transform_at(&zero_on_left(), &position);
        assert!(replacement.id().is_empty());
    }

    #[test]
    fn first_occurrence_of_a_reused_identifier_wins() {
        let transform = Transform::new(
            "first x",
            Expr::add(Expr::wildcard("x"), Expr::wildcard("x")),
            Expr::wildcard("x"),
        );
        let position = Expr::add(Expr::literal(1), Expr::literal(2));
        assert_eq!(apply_transform_at(&transform, &position), Expr::literal(1));
    }

    #[test]
    #[should_panic(expected = "transform `zero on left`")]
    fn rejects_non_isomorphic_position() {
        let position = Expr::add(Expr::literal(0), Expr::add(Expr::literal(1), Expr::literal(2)));
        apply_transform_at(&zero_on_left(), &position);
    }
}
