//! Named rewrite rules.

use arbor_ast::walk::post_order;
use arbor_ast::{Expr, Value};

use crate::errors::{TransformError, TransformResult};

/// An immutable rewrite rule: wherever `input_pattern` matches, the matched
/// subtree is replaced by `output_pattern` with its wildcards resolved.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Transform {
    name: String,
    input_pattern: Expr,
    output_pattern: Expr,
}

impl Transform {
    /// Build a transform, checking that every wildcard of the output pattern
    /// is bound to a wildcard of the input pattern.
    pub fn try_new(
        name: impl Into<String>,
        input_pattern: Expr,
        output_pattern: Expr,
    ) -> TransformResult<Self> {
        let name = name.into();
        check_bindings(&name, &input_pattern, &output_pattern)?;
        Ok(Transform {
            name,
            input_pattern,
            output_pattern,
        })
    }

    /// Build a transform from hard-coded patterns.
    ///
    /// # Panics
    ///
    /// Panics if the patterns are malformed; see [`Transform::try_new`].
    pub fn new(name: impl Into<String>, input_pattern: Expr, output_pattern: Expr) -> Self {
        match Self::try_new(name, input_pattern, output_pattern) {
            Ok(transform) => transform,
            Err(err) => panic!("malformed transform: {err}"),
        }
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn input_pattern(&self) -> &Expr {
        &self.input_pattern
    }

    pub fn output_pattern(&self) -> &Expr {
        &self.output_pattern
    }
}

impl std::fmt::Display for Transform {
    fn fmt(&self, f: &mut std::fmt::Formatter) -> std::fmt::Result {
        write!(
            f,
            "{}: {} -> {}",
            self.name, self.input_pattern, self.output_pattern
        )
    }
}

/// Substitution resolves a wildcard through the first input node carrying the
/// same identifier, so that node has to be a wildcard literal.
fn check_bindings(name: &str, input: &Expr, output: &Expr) -> TransformResult<()> {
    let bound = post_order(input);
    for node in post_order(output) {
        let Expr::Literal(lit) = node else { continue };
        if lit.value != Value::Wildcard {
            continue;
        }
        if lit.id.is_empty() {
            return Err(TransformError::EmptyWildcardIdentifier {
                transform: name.to_owned(),
            });
        }
        match bound.iter().find(|candidate| candidate.id() == &lit.id) {
            None => {
                return Err(TransformError::UnboundWildcard {
                    transform: name.to_owned(),
                    identifier: lit.id.clone(),
                });
            }
            Some(Expr::Literal(binding)) if binding.value.is_wildcard() => {}
            Some(_) => {
                return Err(TransformError::NonWildcardBinding {
                    transform: name.to_owned(),
                    identifier: lit.id.clone(),
                });
            }
        }
    }
    Ok(())
}
