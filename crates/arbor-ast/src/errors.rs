//! Error types for tree evaluation.

use derive_more::Display;

use crate::ast::Identifier;

pub type EvalResult<T> = Result<T, EvalError>;

#[derive(Clone, Debug, Display, PartialEq, Eq)]
pub enum EvalError {
    /// A wildcard survived into a tree that was asked for a value.
    #[display("cannot evaluate wildcard `?{identifier}`: pattern trees must be substituted first")]
    UnboundWildcard { identifier: Identifier },
}

impl std::error::Error for EvalError {}
