//! oq-ast: Expression AST for OData `$filter` expressions
//!
//! This crate defines the expression tree that both the fluent builder and
//! the parser produce, along with the canonical textual rendering every
//! node knows how to emit.
//!
//! # Quick Start
//!
//! ```rust
//! use oq_ast::Field;
//!
//! let expr = Field::new("worker.person.legalName.givenName").eq("John");
//! assert_eq!(expr.to_string(), "(worker/person/legalName/givenName eq 'John')");
//! ```
//!
//! # Rendering rules
//!
//! - Binary and unary operations always parenthesize themselves, so the
//!   canonical text re-parses without relying on operator precedence.
//! - String literals are single-quoted with embedded quotes doubled.
//! - Field paths use `/` as the segment separator; `.` is accepted at
//!   construction time and normalized.

#![warn(missing_docs)]
#![warn(clippy::all)]
#![allow(
    clippy::missing_errors_doc,
    clippy::missing_panics_doc,
    clippy::module_name_repetitions,
    clippy::must_use_candidate
)]

pub mod ast;
pub mod builder;
pub mod value;

pub use ast::*;
pub use builder::*;
pub use value::*;
