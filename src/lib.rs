//! odataq: fluent builder and parser for OData v4 `$filter` expressions
//!
//! Filters are built one of two ways and converge on the same expression
//! tree: programmatically through the fluent builder, or by parsing
//! existing filter text. Either way, rendering produces the canonical
//! form ready to be attached as a `$filter` query-parameter value.
//!
//! # Building filters
//!
//! ```rust
//! use odataq::{build_filter, FilterExpression};
//!
//! let filter: FilterExpression = build_filter("worker.person.legalName.givenName")
//!     .eq("John")
//!     .into();
//! assert_eq!(
//!     filter.to_query_string(),
//!     "(worker/person/legalName/givenName eq 'John')"
//! );
//! ```
//!
//! # Combining filters
//!
//! ```rust
//! use odataq::{build_filter, FilterExpression};
//!
//! let active = FilterExpression::from(build_filter("status").eq("Active"));
//! let adult = FilterExpression::from(build_filter("age").ge(18));
//! let combined = active.and_with(adult);
//! assert_eq!(
//!     combined.to_query_string(),
//!     "((status eq 'Active') and (age ge 18))"
//! );
//! ```
//!
//! # Parsing filter text
//!
//! ```rust
//! use odataq::FilterExpression;
//!
//! let filter: FilterExpression = "Status eq 'Active' and Score gt 50".parse()?;
//! assert_eq!(
//!     filter.to_query_string(),
//!     "((Status eq 'Active') and (Score gt 50))"
//! );
//! # Ok::<(), odataq::ParseError>(())
//! ```
//!
//! Parsing is all-or-nothing: malformed input returns a [`ParseError`]
//! (with a [`LexError`] inside it for lexical failures) and never a
//! partial tree. The engine is pure and synchronous — no I/O, no shared
//! state — so it can be used freely from concurrent callers.

#![warn(missing_docs)]
#![warn(clippy::all)]
#![allow(
    clippy::missing_errors_doc,
    clippy::missing_panics_doc,
    clippy::module_name_repetitions
)]

use std::fmt;
use std::str::FromStr;

// Re-export the expression model and parser types
pub use oq_ast::{
    BinaryOperator, Expr, Field, StringFunction, UnaryOperator, UnsupportedOperation, Value,
};
pub use oq_parser::{tokenize, FilterParser, LexError, ParseError, Token, TokenKind};

/// A complete filter, ready to be rendered into a `$filter` value.
///
/// Wraps the root of an expression tree built either fluently
/// ([`FilterExpression::field`]) or by parsing text ([`str::parse`]).
/// The wrapped tree is never mutated: combinators consume their operands
/// and return new instances.
#[derive(Debug, Clone, PartialEq, serde::Serialize)]
pub struct FilterExpression {
    node: Expr,
}

impl FilterExpression {
    /// Start a fluent filter on a field path.
    ///
    /// ```rust
    /// use odataq::FilterExpression;
    ///
    /// let filter: FilterExpression = FilterExpression::field("lastName").eq("Smith").into();
    /// assert_eq!(filter.to_query_string(), "(lastName eq 'Smith')");
    /// ```
    pub fn field(path: impl Into<String>) -> Field {
        Field::new(path)
    }

    /// Borrow the wrapped expression tree.
    pub fn expr(&self) -> &Expr {
        &self.node
    }

    /// Unwrap into the expression tree.
    pub fn into_expr(self) -> Expr {
        self.node
    }

    /// The canonical text, suitable for direct use as a `$filter`
    /// query-parameter value — no further escaping required.
    pub fn to_query_string(&self) -> String {
        self.node.to_string()
    }

    /// Combine with another filter under `and`.
    pub fn and_with(self, other: impl Into<FilterExpression>) -> Self {
        FilterExpression {
            node: self.node.and_with(other.into().node),
        }
    }

    /// Combine with another filter under `or`.
    pub fn or_with(self, other: impl Into<FilterExpression>) -> Self {
        FilterExpression {
            node: self.node.or_with(other.into().node),
        }
    }

    /// Invert under `not`.
    pub fn negate(self) -> Self {
        FilterExpression {
            node: self.node.negate(),
        }
    }
}

impl From<Expr> for FilterExpression {
    fn from(node: Expr) -> Self {
        FilterExpression { node }
    }
}

impl From<Field> for FilterExpression {
    fn from(field: Field) -> Self {
        FilterExpression { node: field.into() }
    }
}

impl fmt::Display for FilterExpression {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.node)
    }
}

impl FromStr for FilterExpression {
    type Err = ParseError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        parse_filter(s)
    }
}

/// Entry point for programmatic construction: a fluent builder rooted at
/// `path`.
pub fn build_filter(path: impl Into<String>) -> Field {
    Field::new(path)
}

/// Parse caller-supplied filter text into a [`FilterExpression`].
pub fn parse_filter(text: &str) -> Result<FilterExpression, ParseError> {
    let parser = FilterParser::new();
    let node = parser.parse(text)?;
    log::debug!("parsed filter: {node}");
    Ok(FilterExpression { node })
}
