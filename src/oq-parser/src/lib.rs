//! oq-parser: tokenizer and recursive-descent parser for filter text
//!
//! This crate converts a textual filter into the `oq-ast` expression
//! tree, through two stages: [`tokenize`] produces a flat token stream,
//! and [`FilterParser`] consumes it under an explicit operator-precedence
//! grammar. The parser builds the same node shapes the fluent builder
//! does, so parsed and built filters render identically.
//!
//! # Quick Start
//!
//! ```rust
//! use oq_parser::FilterParser;
//!
//! let parser = FilterParser::new();
//! let expr = parser.parse("status eq 'Active' and age ge 18")?;
//! assert_eq!(expr.to_string(), "((status eq 'Active') and (age ge 18))");
//! # Ok::<(), oq_parser::ParseError>(())
//! ```
//!
//! # Error Handling
//!
//! Lexical and structural failures are distinct and carry offsets:
//!
//! ```rust
//! use oq_parser::{FilterParser, ParseError};
//!
//! let parser = FilterParser::new();
//! match parser.parse("a eq 1) extra") {
//!     Err(ParseError::TrailingInput { position, .. }) => assert_eq!(position, 6),
//!     other => panic!("expected trailing input error, got {other:?}"),
//! }
//! ```

#![warn(missing_docs)]
#![warn(clippy::all)]
#![allow(
    clippy::missing_errors_doc,
    clippy::missing_panics_doc,
    clippy::module_name_repetitions
)]

pub mod error;
pub mod lexer;
pub mod parser;

// Re-export main types
pub use error::*;
pub use lexer::*;
pub use parser::*;
