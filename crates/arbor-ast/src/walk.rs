//! Tree traversal utilities.
//!
//! Post-order is the canonical linearization of a tree: children left to
//! right, then the parent. Every flattening that relies on positional
//! correspondence between two trees must go through [`walk_post_order`].

use std::ops::ControlFlow;

use crate::ast::{Expr, Value};

/// Visit every node of `expr` in post-order, stopping early on `Break`.
pub fn walk_post_order<'a, B>(
    expr: &'a Expr,
    f: &mut dyn FnMut(&'a Expr) -> ControlFlow<B>,
) -> ControlFlow<B> {
    if let Expr::Add(add) = expr {
        walk_post_order(&add.left, f)?;
        walk_post_order(&add.right, f)?;
    }
    f(expr)
}

/// Collect the nodes of `expr` in post-order.
pub fn post_order(expr: &Expr) -> Vec<&Expr> {
    let mut nodes = Vec::with_capacity(expr.size());
    let _ = walk_post_order::<()>(expr, &mut |node| {
        nodes.push(node);
        ControlFlow::Continue(())
    });
    nodes
}

impl Expr {
    /// Whether the tree is free of wildcards and can be evaluated.
    pub fn is_concrete(&self) -> bool {
        walk_post_order(self, &mut |node| match node {
            Expr::Literal(lit) if lit.value == Value::Wildcard => ControlFlow::Break(()),
            _ => ControlFlow::Continue(()),
        })
        .is_continue()
    }
}
