//! Error types for tokenizing and parsing filter text.

use thiserror::Error;

/// Errors raised while tokenizing filter text.
///
/// The tokenizer fails fast: the first character that matches no token
/// pattern aborts the pass instead of being skipped.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum LexError {
    /// A character matched none of the token patterns.
    #[error("unrecognized character '{ch}' at offset {offset}")]
    UnrecognizedChar {
        /// The offending character.
        ch: char,
        /// Byte offset into the input.
        offset: usize,
    },

    /// A string literal was opened but never closed.
    #[error("unterminated string literal starting at offset {offset}")]
    UnterminatedString {
        /// Byte offset of the opening quote.
        offset: usize,
    },
}

/// Errors raised while parsing a token stream into an expression tree.
///
/// Parsing is all-or-nothing: any error aborts the call and no partial
/// tree is returned.
#[derive(Debug, Clone, PartialEq, Error)]
pub enum ParseError {
    /// The tokenizer rejected the input.
    #[error(transparent)]
    Lex(#[from] LexError),

    /// A specific token was required and something else was found.
    #[error("unexpected {found} at offset {position}, expected {expected}")]
    UnexpectedToken {
        /// Description of the token that was found.
        found: String,
        /// What the grammar required at this point.
        expected: String,
        /// Byte offset of the found token.
        position: usize,
    },

    /// Input ended while more tokens were required.
    #[error("unexpected end of input, expected {expected}")]
    UnexpectedEof {
        /// What the grammar required at this point.
        expected: String,
    },

    /// A complete expression parsed but unconsumed tokens remain.
    #[error("trailing input starting with {found} at offset {position}")]
    TrailingInput {
        /// Description of the first unconsumed token.
        found: String,
        /// Byte offset of the first unconsumed token.
        position: usize,
    },

    /// An identifier was called like a function but is not a supported one.
    #[error("unknown function '{name}' at offset {position}")]
    UnknownFunction {
        /// The unsupported function name.
        name: String,
        /// Byte offset of the identifier.
        position: usize,
    },

    /// The input was empty or all whitespace.
    #[error("empty filter expression")]
    EmptyInput,
}

/// Result type for parsing operations
pub type Result<T> = std::result::Result<T, ParseError>;
