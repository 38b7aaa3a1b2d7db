//! Declarative rewriting of arbor expression trees.
//!
//! A [`Transform`] pairs an input pattern with an output pattern. The
//! [`Optimizer`] applies an ordered list of transforms to a tree, one
//! single top-down pass per transform, and always produces a fresh tree.

pub mod driver;
pub mod errors;
pub mod matcher;
pub mod rules;
pub mod substitute;
pub mod transform;

pub use driver::{OptimizeResult, Optimizer, apply_transform, optimize};
pub use errors::TransformError;
pub use matcher::matches;
pub use substitute::apply_transform_at;
pub use transform::Transform;
