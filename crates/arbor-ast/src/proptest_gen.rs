//! Tree generators for property-based testing.

use proptest::prelude::*;

use crate::ast::Expr;

impl Expr {
    /// Concrete trees up to `depth` levels of nesting.
    ///
    /// Zero is heavily weighted among the literals so that the additive
    /// identity rules have something to fire on.
    pub fn concrete_generator(depth: u32) -> impl Strategy<Value = Self> {
        let leaf = prop_oneof![
            2 => Just(Expr::literal(0)),
            3 => (0u64..=1000).prop_map(Expr::literal),
            1 => any::<u64>().prop_map(Expr::literal),
        ];
        leaf.prop_recursive(depth, 1 << depth.min(8), 2, |inner| {
            (inner.clone(), inner).prop_map(|(left, right)| Expr::add(left, right))
        })
    }

    /// Trees whose literals may be wildcards bound to one of a few names.
    pub fn pattern_generator(depth: u32) -> impl Strategy<Value = Self> {
        let leaf = prop_oneof![
            (0u64..=3).prop_map(Expr::literal),
            prop::sample::select(vec!["a", "b", "left", "right"]).prop_map(Expr::wildcard),
        ];
        leaf.prop_recursive(depth, 1 << depth.min(8), 2, |inner| {
            (inner.clone(), inner).prop_map(|(left, right)| Expr::add(left, right))
        })
    }
}
