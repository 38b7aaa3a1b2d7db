//! Node grammar of the expression language.

use derive_more::Display;

/// Binding name attached to a node.
///
/// Concrete nodes carry the empty identifier; pattern nodes carry the name
/// that an output pattern uses to refer back to the matched value.
#[derive(Clone, Debug, Default, PartialEq, Eq, Hash, PartialOrd, Ord, Display)]
pub struct Identifier(String);

impl Identifier {
    /// The empty identifier carried by concrete nodes.
    pub const fn none() -> Self {
        Identifier(String::new())
    }

    pub fn new(name: impl Into<String>) -> Self {
        Identifier(name.into())
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }
}

impl From<&str> for Identifier {
    fn from(name: &str) -> Self {
        Identifier::new(name)
    }
}

impl From<String> for Identifier {
    fn from(name: String) -> Self {
        Identifier(name)
    }
}

/// Payload of a numeric literal.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Display)]
pub enum Value {
    /// A concrete unsigned integer.
    #[display("{_0}")]
    Concrete(u64),
    /// Matches and binds to any value at this position.
    #[display("?")]
    Wildcard,
}

impl Value {
    pub fn is_wildcard(&self) -> bool {
        matches!(self, Value::Wildcard)
    }

    pub fn as_concrete(&self) -> Option<u64> {
        match self {
            Value::Concrete(n) => Some(*n),
            Value::Wildcard => None,
        }
    }
}

impl From<u64> for Value {
    fn from(n: u64) -> Self {
        Value::Concrete(n)
    }
}

/// Discriminant of an [`Expr`] node.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Display)]
pub enum ExprKind {
    #[display("numeric literal")]
    NumericLiteral,
    #[display("binary addition")]
    BinaryAddition,
}

#[derive(Clone, Debug, PartialEq, Eq, Hash)]
pub struct NumericLiteral {
    pub value: Value,
    pub id: Identifier,
}

#[derive(Clone, Debug, PartialEq, Eq, Hash)]
pub struct BinaryAddition {
    pub left: Box<Expr>,
    pub right: Box<Expr>,
    pub id: Identifier,
}

/// An expression tree node.
///
/// Every node exclusively owns its children, so `clone` is always a deep copy
/// and no subtree is ever reachable from two parents.
#[derive(Clone, Debug, PartialEq, Eq, Hash)]
pub enum Expr {
    Literal(NumericLiteral),
    Add(BinaryAddition),
}

impl Expr {
    /// A concrete numeric literal.
    pub fn literal(n: u64) -> Self {
        Expr::Literal(NumericLiteral {
            value: Value::Concrete(n),
            id: Identifier::none(),
        })
    }

    /// A wildcard literal bound to `id`.
    pub fn wildcard(id: impl Into<Identifier>) -> Self {
        Expr::Literal(NumericLiteral {
            value: Value::Wildcard,
            id: id.into(),
        })
    }

    /// A literal holding `value` with the empty identifier.
    pub fn from_value(value: Value) -> Self {
        Expr::Literal(NumericLiteral {
            value,
            id: Identifier::none(),
        })
    }

    pub fn add(left: Expr, right: Expr) -> Self {
        Expr::Add(BinaryAddition {
            left: Box::new(left),
            right: Box::new(right),
            id: Identifier::none(),
        })
    }

    /// Replace the identifier of this node, leaving its children untouched.
    pub fn with_id(mut self, id: impl Into<Identifier>) -> Self {
        match &mut self {
            Expr::Literal(lit) => lit.id = id.into(),
            Expr::Add(add) => add.id = id.into(),
        }
        self
    }

    pub fn kind(&self) -> ExprKind {
        match self {
            Expr::Literal(_) => ExprKind::NumericLiteral,
            Expr::Add(_) => ExprKind::BinaryAddition,
        }
    }

    pub fn id(&self) -> &Identifier {
        match self {
            Expr::Literal(lit) => &lit.id,
            Expr::Add(add) => &add.id,
        }
    }

    pub fn as_literal(&self) -> Option<&NumericLiteral> {
        match self {
            Expr::Literal(lit) => Some(lit),
            Expr::Add(_) => None,
        }
    }

    pub fn as_addition(&self) -> Option<&BinaryAddition> {
        match self {
            Expr::Add(add) => Some(add),
            Expr::Literal(_) => None,
        }
    }

    /// Number of nodes in the tree.
    pub fn size(&self) -> usize {
        match self {
            Expr::Literal(_) => 1,
            Expr::Add(add) => 1 + add.left.size() + add.right.size(),
        }
    }

    /// Length of the longest root-to-leaf path, counting nodes.
    pub fn depth(&self) -> usize {
        match self {
            Expr::Literal(_) => 1,
            Expr::Add(add) => 1 + add.left.depth().max(add.right.depth()),
        }
    }
}

impl std::fmt::Display for Expr {
    fn fmt(&self, f: &mut std::fmt::Formatter) -> std::fmt::Result {
        match self {
            Expr::Literal(NumericLiteral {
                value: Value::Concrete(n),
                ..
            }) => write!(f, "{}", n),
            Expr::Literal(NumericLiteral {
                value: Value::Wildcard,
                id,
            }) => write!(f, "?{}", id),
            Expr::Add(add) => write!(f, "({} + {})", add.left, add.right),
        }
    }
}
