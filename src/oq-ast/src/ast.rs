//! Abstract Syntax Tree (AST) definitions for filter expressions.
//!
//! The tree is immutable and acyclic: every node owns its children, and
//! the combinators consume their operands and return fresh nodes. Each
//! node renders itself through `Display`; binary and unary operations
//! always parenthesize, which makes the canonical text safe to re-parse
//! independently of operator precedence.

use std::fmt;
use std::str::FromStr;

use crate::value::Value;

/// Error raised when a textual operator or function name falls outside
/// the supported set.
///
/// The closed enums below make every other invalid construction
/// unrepresentable; only text-to-variant mapping can fail.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
#[error("unsupported operation '{name}'")]
pub struct UnsupportedOperation {
    /// The rejected operator or function name.
    pub name: String,
}

/// Binary operators: six comparisons plus the two boolean connectives.
#[derive(Debug, Clone, Copy, PartialEq, Eq, serde::Serialize)]
pub enum BinaryOperator {
    /// Equal (`eq`)
    Eq,
    /// Not equal (`ne`)
    Ne,
    /// Greater than (`gt`)
    Gt,
    /// Greater than or equal (`ge`)
    Ge,
    /// Less than (`lt`)
    Lt,
    /// Less than or equal (`le`)
    Le,
    /// Logical AND (`and`)
    And,
    /// Logical OR (`or`)
    Or,
}

impl BinaryOperator {
    /// True for the six comparison operators, false for `and`/`or`.
    pub fn is_comparison(self) -> bool {
        !matches!(self, BinaryOperator::And | BinaryOperator::Or)
    }
}

impl fmt::Display for BinaryOperator {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            BinaryOperator::Eq => write!(f, "eq"),
            BinaryOperator::Ne => write!(f, "ne"),
            BinaryOperator::Gt => write!(f, "gt"),
            BinaryOperator::Ge => write!(f, "ge"),
            BinaryOperator::Lt => write!(f, "lt"),
            BinaryOperator::Le => write!(f, "le"),
            BinaryOperator::And => write!(f, "and"),
            BinaryOperator::Or => write!(f, "or"),
        }
    }
}

impl FromStr for BinaryOperator {
    type Err = UnsupportedOperation;

    /// Case-insensitive keyword lookup.
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_ascii_lowercase().as_str() {
            "eq" => Ok(BinaryOperator::Eq),
            "ne" => Ok(BinaryOperator::Ne),
            "gt" => Ok(BinaryOperator::Gt),
            "ge" => Ok(BinaryOperator::Ge),
            "lt" => Ok(BinaryOperator::Lt),
            "le" => Ok(BinaryOperator::Le),
            "and" => Ok(BinaryOperator::And),
            "or" => Ok(BinaryOperator::Or),
            _ => Err(UnsupportedOperation {
                name: s.to_string(),
            }),
        }
    }
}

/// Unary operators.
#[derive(Debug, Clone, Copy, PartialEq, Eq, serde::Serialize)]
pub enum UnaryOperator {
    /// Logical NOT (`not`)
    Not,
}

impl fmt::Display for UnaryOperator {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            UnaryOperator::Not => write!(f, "not"),
        }
    }
}

/// The reserved string predicate functions.
#[derive(Debug, Clone, Copy, PartialEq, Eq, serde::Serialize)]
pub enum StringFunction {
    /// Substring test (`contains`)
    Contains,
    /// Prefix test (`startswith`)
    StartsWith,
    /// Suffix test (`endswith`)
    EndsWith,
}

impl fmt::Display for StringFunction {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            StringFunction::Contains => write!(f, "contains"),
            StringFunction::StartsWith => write!(f, "startswith"),
            StringFunction::EndsWith => write!(f, "endswith"),
        }
    }
}

impl FromStr for StringFunction {
    type Err = UnsupportedOperation;

    /// Case-insensitive function name lookup.
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_ascii_lowercase().as_str() {
            "contains" => Ok(StringFunction::Contains),
            "startswith" => Ok(StringFunction::StartsWith),
            "endswith" => Ok(StringFunction::EndsWith),
            _ => Err(UnsupportedOperation {
                name: s.to_string(),
            }),
        }
    }
}

/// Core expression node.
///
/// Built either fluently through [`crate::builder::Field`] or by the
/// parser; both converge on the same shapes and the same rendering.
#[derive(Debug, Clone, PartialEq, serde::Serialize)]
pub enum Expr {
    /// Reference to an attribute by slash-separated path
    Field {
        /// Normalized path, `/` separated
        path: String,
    },

    /// Literal scalar value
    Literal(Value),

    /// String predicate function applied to argument expressions
    Function {
        /// Which reserved function
        name: StringFunction,
        /// Argument expressions, in call order (at least one)
        args: Vec<Expr>,
    },

    /// Binary operation, either a comparison or a boolean connective
    Binary {
        /// Left operand
        left: Box<Expr>,
        /// Operator
        op: BinaryOperator,
        /// Right operand
        right: Box<Expr>,
    },

    /// Unary operation
    Unary {
        /// Operator
        op: UnaryOperator,
        /// Operand
        expr: Box<Expr>,
    },
}

impl Expr {
    /// Field reference with the path normalized to the `/` separator.
    pub fn field(path: impl Into<String>) -> Self {
        Expr::Field {
            path: path.into().replace('.', "/"),
        }
    }

    /// Literal from anything convertible to a scalar value.
    pub fn literal(value: impl Into<Value>) -> Self {
        Expr::Literal(value.into())
    }

    /// Binary node from two operands.
    pub fn binary(left: Expr, op: BinaryOperator, right: Expr) -> Self {
        Expr::Binary {
            left: Box::new(left),
            op,
            right: Box::new(right),
        }
    }

    /// Combine with another expression under `and`.
    pub fn and_with(self, other: Expr) -> Self {
        Expr::binary(self, BinaryOperator::And, other)
    }

    /// Combine with another expression under `or`.
    pub fn or_with(self, other: Expr) -> Self {
        Expr::binary(self, BinaryOperator::Or, other)
    }

    /// Invert under `not`.
    pub fn negate(self) -> Self {
        Expr::Unary {
            op: UnaryOperator::Not,
            expr: Box::new(self),
        }
    }
}

impl fmt::Display for Expr {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Expr::Field { path } => write!(f, "{path}"),
            Expr::Literal(value) => write!(f, "{value}"),
            Expr::Function { name, args } => {
                write!(f, "{name}(")?;
                for (i, arg) in args.iter().enumerate() {
                    if i > 0 {
                        write!(f, ", ")?;
                    }
                    write!(f, "{arg}")?;
                }
                write!(f, ")")
            }
            Expr::Binary { left, op, right } => write!(f, "({left} {op} {right})"),
            Expr::Unary { op, expr } => write!(f, "({op} {expr})"),
        }
    }
}
