//! Error types for transform construction.

use arbor_ast::Identifier;
use derive_more::Display;

pub type TransformResult<T> = Result<T, TransformError>;

#[derive(Clone, Debug, Display, PartialEq, Eq)]
pub enum TransformError {
    #[display("transform `{transform}`: output wildcard `?{identifier}` is not bound in the input pattern")]
    UnboundWildcard {
        transform: String,
        identifier: Identifier,
    },

    #[display("transform `{transform}`: `{identifier}` is bound to a non-wildcard node in the input pattern")]
    NonWildcardBinding {
        transform: String,
        identifier: Identifier,
    },

    #[display("transform `{transform}`: output wildcard has an empty identifier")]
    EmptyWildcardIdentifier { transform: String },
}

impl std::error::Error for TransformError {}
