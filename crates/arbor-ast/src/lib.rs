//! Expression trees for the arbor rewriting engine.
//!
//! The grammar is closed: a tree is built from numeric literals and binary
//! additions only. Pattern trees use the same grammar, with wildcard literals
//! carrying the binding names that rewrite rules refer to.

pub mod ast;
pub mod errors;
pub mod eval;
#[cfg(any(test, feature = "proptest"))]
pub mod proptest_gen;
pub mod walk;

pub use ast::{BinaryAddition, Expr, ExprKind, Identifier, NumericLiteral, Value};
pub use errors::EvalError;
pub use eval::eval_expr;
pub use walk::walk_post_order;
