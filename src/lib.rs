//! arbor: a rule-based term rewriter for a toy expression language.
//!
//! Re-exports the expression tree and the rewrite engine, and hosts the
//! sample cases driven by the `arbor` binary.

pub mod demo;

pub use arbor_ast::{Expr, ExprKind, Identifier, Value};
pub use arbor_rewrite::{Optimizer, OptimizeResult, Transform, TransformError, matches, optimize};
pub use demo::{DemoCase, DemoOutcome, demo_cases, run_demo};
