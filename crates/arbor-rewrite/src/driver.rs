//! Single-pass application of transforms to expression trees.
//!
//! Each configured transform runs exactly once over the current tree, top
//! down. The first matching node on any root-to-leaf path is replaced and its
//! replacement is not visited again by the same transform; sibling subtrees
//! are rewritten independently. There is no fixed-point iteration.

use arbor_ast::{BinaryAddition, Expr};
use tracing::{debug, info_span, trace};

use crate::matcher::matches;
use crate::rules::default_transforms;
use crate::substitute::apply_transform_at;
use crate::transform::Transform;

/// Result of running an [`Optimizer`].
#[derive(Debug, Clone)]
pub struct OptimizeResult {
    /// The rewritten tree.
    pub expr: Expr,
    /// Number of rewrite sites per transform, in configuration order.
    pub rewrites: Vec<usize>,
}

impl OptimizeResult {
    pub fn total_rewrites(&self) -> usize {
        self.rewrites.iter().sum()
    }
}

/// An ordered list of transforms applied one pass each.
#[derive(Debug, Clone)]
pub struct Optimizer {
    transforms: Vec<Transform>,
}

impl Default for Optimizer {
    fn default() -> Self {
        Self {
            transforms: default_transforms(),
        }
    }
}

impl Optimizer {
    /// An optimizer with no transforms; it returns trees unchanged.
    pub fn empty() -> Self {
        Self {
            transforms: Vec::new(),
        }
    }

    /// Append a transform, to run after those already configured.
    pub fn add_transform(mut self, transform: Transform) -> Self {
        self.transforms.push(transform);
        self
    }

    pub fn transforms(&self) -> &[Transform] {
        &self.transforms
    }

    /// Rewrite `root` and return the optimized tree. `root` is not modified.
    pub fn optimize(&self, root: &Expr) -> Expr {
        self.run(root).expr
    }

    /// Rewrite `root`, reporting how often each transform fired.
    pub fn run(&self, root: &Expr) -> OptimizeResult {
        let _span = info_span!("optimize", transforms = self.transforms.len()).entered();

        let mut current: Option<Expr> = None;
        let mut rewrites = Vec::with_capacity(self.transforms.len());
        for transform in &self.transforms {
            let input = current.as_ref().unwrap_or(root);
            let mut count = 0;
            let output = {
                let _span = info_span!("transform", transform = transform.name()).entered();
                rewrite(transform, input, &mut count)
            };
            debug!(transform = transform.name(), rewrites = count, "pass finished");
            rewrites.push(count);
            current = Some(output);
        }

        OptimizeResult {
            expr: current.unwrap_or_else(|| root.clone()),
            rewrites,
        }
    }
}

/// Optimize `root` with the default transforms.
pub fn optimize(root: &Expr) -> Expr {
    Optimizer::default().optimize(root)
}

/// Run one top-down pass of `transform` over `node`, returning a new tree.
pub fn apply_transform(transform: &Transform, node: &Expr) -> Expr {
    let mut count = 0;
    rewrite(transform, node, &mut count)
}

fn rewrite(transform: &Transform, node: &Expr, count: &mut usize) -> Expr {
    match node {
        Expr::Add(add) => {
            trace!(transform = transform.name(), node = %node, "trying match");
            if matches(transform.input_pattern(), node) {
                let replacement = apply_transform_at(transform, node);
                debug!(
                    transform = transform.name(),
                    matched = %node,
                    replacement = %replacement,
                    "rewrote subtree"
                );
                *count += 1;
                return replacement;
            }
            Expr::Add(BinaryAddition {
                left: Box::new(rewrite(transform, &add.left, count)),
                right: Box::new(rewrite(transform, &add.right, count)),
                id: add.id.clone(),
            })
        }
        // Only addition sites are rewritten.
        Expr::Literal(_) => node.clone(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::rules::{zero_on_left, zero_on_right};
    use insta::assert_snapshot;

    fn lit(n: u64) -> Expr {
        Expr::literal(n)
    }

    fn add(left: Expr, right: Expr) -> Expr {
        Expr::add(left, right)
    }

    #[test]
    fn left_zero_is_eliminated() {
        let input = add(lit(0), lit(1));
        let output = optimize(&input);
        assert_eq!(output, lit(1));
        assert_eq!(output.evaluate(), input.evaluate());
    }

    #[test]
    fn right_zero_is_eliminated() {
        let input = add(lit(1), lit(0));
        let output = optimize(&input);
        assert_eq!(output, lit(1));
        assert_eq!(output.evaluate(), input.evaluate());
    }

    #[test]
    fn tree_without_zeros_passes_through() {
        let input = add(lit(2), lit(3));
        let result = Optimizer::default().run(&input);
        assert_eq!(result.expr, input);
        assert_eq!(result.expr.evaluate(), 5);
        assert_eq!(result.total_rewrites(), 0);
    }

    #[test]
    fn passes_run_in_configuration_order() {
        let input = add(add(lit(0), lit(1)), add(lit(1), lit(0)));

        let after_left = apply_transform(&zero_on_left(), &input);
        assert_snapshot!(after_left.to_string(), @"(1 + (1 + 0))");

        let after_right = apply_transform(&zero_on_right(), &after_left);
        assert_snapshot!(after_right.to_string(), @"(1 + 1)");

        let result = Optimizer::default().run(&input);
        assert_eq!(result.expr, after_right);
        assert_eq!(result.rewrites, [1, 1]);
        assert_eq!(result.expr.evaluate(), input.evaluate());
    }

    #[test]
    fn siblings_are_rewritten_independently() {
        let input = add(add(lit(0), lit(1)), add(lit(0), lit(2)));
        let result = Optimizer::default().run(&input);
        assert_snapshot!(result.expr.to_string(), @"(1 + 2)");
        assert_eq!(result.rewrites, [2, 0]);
    }

    #[test]
    fn no_fixed_point_iteration() {
        // The left-wise pass exposes a new `0 + 5` site at the root, but each
        // transform runs only once.
        let input = add(lit(0), add(lit(0), lit(5)));
        let output = optimize(&input);
        assert_snapshot!(output.to_string(), @"(0 + 5)");
        assert_eq!(output.evaluate(), 5);
    }

    #[test]
    fn zero_plus_zero_collapses_once() {
        assert_eq!(optimize(&add(lit(0), lit(0))), lit(0));
    }

    #[test]
    fn replacement_is_not_revisited() {
        let grow = Transform::new(
            "grow",
            add(Expr::wildcard("a"), Expr::wildcard("b")),
            add(add(Expr::wildcard("a"), Expr::wildcard("b")), lit(0)),
        );
        let result = Optimizer::empty().add_transform(grow).run(&add(lit(1), lit(2)));
        assert_snapshot!(result.expr.to_string(), @"((1 + 2) + 0)");
        assert_eq!(result.rewrites, [1]);
    }

    #[test]
    fn unmatched_additions_keep_their_identifier() {
        let input = add(lit(2), add(lit(0), lit(3))).with_id("outer");
        let output = optimize(&input);
        assert_eq!(output.id().as_str(), "outer");
        assert_eq!(output, add(lit(2), lit(3)).with_id("outer"));
    }

    #[test]
    fn literals_are_cloned() {
        assert_eq!(optimize(&lit(0)), lit(0));
        assert_eq!(apply_transform(&zero_on_left(), &lit(9)), lit(9));
    }

    #[test]
    fn empty_optimizer_returns_copy() {
        let input = add(lit(0), lit(1));
        let result = Optimizer::empty().run(&input);
        assert_eq!(result.expr, input);
        assert!(result.rewrites.is_empty());
    }

    #[test]
    fn input_is_never_mutated() {
        let input = add(add(lit(0), lit(1)), lit(0));
        let snapshot = input.clone();
        let output = optimize(&input);
        assert_eq!(input, snapshot);
        assert_eq!(output, lit(1));
    }
}
