//! Tokenizer for the filter grammar.
//!
//! A single left-to-right pass over the input with longest-match-first
//! alternation across the fixed token patterns. Reserved words are
//! matched case-insensitively and only as whole words, so `notes` is an
//! identifier while `NOT` is a keyword. Whitespace separates tokens and
//! is discarded; every surviving token carries the byte offset of its
//! first character.

use std::fmt;

use nom::{
    branch::alt,
    bytes::complete::{take_while, take_while1},
    character::complete::{char, digit1},
    combinator::{map, map_res, opt, recognize},
    error::ErrorKind,
    IResult, Parser,
};

use oq_ast::{BinaryOperator, StringFunction};

use crate::error::LexError;

/// A single lexical unit of the filter grammar.
#[derive(Debug, Clone, PartialEq)]
pub struct Token {
    /// What was matched.
    pub kind: TokenKind,
    /// Byte offset of the first matched character.
    pub offset: usize,
}

/// Token kinds produced by [`tokenize`].
#[derive(Debug, Clone, PartialEq)]
pub enum TokenKind {
    /// `(`
    LParen,
    /// `)`
    RParen,
    /// `,`
    Comma,
    /// Reserved binary operator keyword (`eq`, `ne`, ..., `and`, `or`)
    Operator(BinaryOperator),
    /// The `not` keyword
    Not,
    /// Reserved string function name
    Function(StringFunction),
    /// `true` or `false`
    Bool(bool),
    /// The `null` keyword
    Null,
    /// Integer literal
    Int(i64),
    /// Floating point literal
    Float(f64),
    /// Identifier: a field path
    Ident(String),
    /// Single-quoted string with doubled-quote escapes resolved
    Str(String),
}

impl fmt::Display for TokenKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            TokenKind::LParen => write!(f, "'('"),
            TokenKind::RParen => write!(f, "')'"),
            TokenKind::Comma => write!(f, "','"),
            TokenKind::Operator(op) => write!(f, "'{op}'"),
            TokenKind::Not => write!(f, "'not'"),
            TokenKind::Function(name) => write!(f, "'{name}'"),
            TokenKind::Bool(b) => write!(f, "'{b}'"),
            TokenKind::Null => write!(f, "'null'"),
            TokenKind::Int(i) => write!(f, "number {i}"),
            TokenKind::Float(x) => write!(f, "number {x}"),
            TokenKind::Ident(name) => write!(f, "identifier '{name}'"),
            TokenKind::Str(_) => write!(f, "string literal"),
        }
    }
}

/// Tokenize filter text into a flat token stream.
///
/// Fails on the first character that matches no token pattern — no
/// silent skipping.
pub fn tokenize(input: &str) -> Result<Vec<Token>, LexError> {
    let mut tokens = Vec::new();
    let mut rest = input.trim_start();
    while !rest.is_empty() {
        let offset = input.len() - rest.len();
        let (next, kind) = lex_token(rest).map_err(|_| error_at(rest, offset))?;
        tokens.push(Token { kind, offset });
        rest = next.trim_start();
    }
    log::trace!("tokenized {} tokens from {} bytes", tokens.len(), input.len());
    Ok(tokens)
}

/// Classify a lexer failure: an opening quote that never closed, or a
/// character outside every token pattern.
fn error_at(rest: &str, offset: usize) -> LexError {
    let ch = rest.chars().next().unwrap_or_default();
    if ch == '\'' {
        LexError::UnterminatedString { offset }
    } else {
        LexError::UnrecognizedChar { ch, offset }
    }
}

fn lex_token(input: &str) -> IResult<&str, TokenKind> {
    alt((
        map(char('('), |_| TokenKind::LParen),
        map(char(')'), |_| TokenKind::RParen),
        map(char(','), |_| TokenKind::Comma),
        lex_string,
        lex_number,
        lex_word,
    ))
    .parse(input)
}

/// Single-quoted string; an embedded quote is written as `''`.
fn lex_string(input: &str) -> IResult<&str, TokenKind> {
    let (rest, _) = char('\'').parse(input)?;
    let mut value = String::new();
    let mut chars = rest.char_indices().peekable();
    while let Some((i, ch)) = chars.next() {
        if ch == '\'' {
            if matches!(chars.peek(), Some((_, '\''))) {
                chars.next();
                value.push('\'');
            } else {
                return Ok((&rest[i + 1..], TokenKind::Str(value)));
            }
        } else {
            value.push(ch);
        }
    }
    Err(nom::Err::Error(nom::error::Error::new(input, ErrorKind::Eof)))
}

/// Numeric literal: optional leading `-`, digits, optional fraction.
fn lex_number(input: &str) -> IResult<&str, TokenKind> {
    map_res(
        recognize((opt(char('-')), digit1, opt((char('.'), digit1)))),
        |s: &str| -> Result<TokenKind, String> {
            if s.contains('.') {
                s.parse::<f64>()
                    .map(TokenKind::Float)
                    .map_err(|e| e.to_string())
            } else if let Ok(int_val) = s.parse::<i64>() {
                Ok(TokenKind::Int(int_val))
            } else {
                // digits beyond i64 widen to a float
                s.parse::<f64>()
                    .map(TokenKind::Float)
                    .map_err(|e| e.to_string())
            }
        },
    )
    .parse(input)
}

/// Maximal-munch word, then classification into keyword vs identifier.
fn lex_word(input: &str) -> IResult<&str, TokenKind> {
    map(
        recognize((
            take_while1(|c: char| c.is_ascii_alphabetic() || c == '_'),
            take_while(|c: char| {
                c.is_ascii_alphanumeric() || c == '_' || c == '.' || c == '/'
            }),
        )),
        classify_word,
    )
    .parse(input)
}

/// Reserved words match case-insensitively and only when the whole word
/// matches.
fn classify_word(word: &str) -> TokenKind {
    let lower = word.to_ascii_lowercase();
    if let Ok(op) = lower.parse::<BinaryOperator>() {
        return TokenKind::Operator(op);
    }
    if let Ok(func) = lower.parse::<StringFunction>() {
        return TokenKind::Function(func);
    }
    match lower.as_str() {
        "not" => TokenKind::Not,
        "true" => TokenKind::Bool(true),
        "false" => TokenKind::Bool(false),
        "null" => TokenKind::Null,
        _ => TokenKind::Ident(word.to_string()),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn kinds(input: &str) -> Vec<TokenKind> {
        tokenize(input)
            .expect("tokenize failed")
            .into_iter()
            .map(|t| t.kind)
            .collect()
    }

    #[test]
    fn test_simple_comparison() {
        assert_eq!(
            kinds("status eq 'Active'"),
            vec![
                TokenKind::Ident("status".to_string()),
                TokenKind::Operator(BinaryOperator::Eq),
                TokenKind::Str("Active".to_string()),
            ]
        );
    }

    #[test]
    fn test_punctuation_and_functions() {
        assert_eq!(
            kinds("contains(name, 'x')"),
            vec![
                TokenKind::Function(StringFunction::Contains),
                TokenKind::LParen,
                TokenKind::Ident("name".to_string()),
                TokenKind::Comma,
                TokenKind::Str("x".to_string()),
                TokenKind::RParen,
            ]
        );
    }

    #[test]
    fn test_offsets_are_byte_positions() {
        let tokens = tokenize("  a eq 1").expect("tokenize failed");
        assert_eq!(tokens[0].offset, 2);
        assert_eq!(tokens[1].offset, 4);
        assert_eq!(tokens[2].offset, 7);
    }

    #[test]
    fn test_keywords_are_case_insensitive() {
        assert_eq!(
            kinds("NOT True AND FALSE Or NULL"),
            vec![
                TokenKind::Not,
                TokenKind::Bool(true),
                TokenKind::Operator(BinaryOperator::And),
                TokenKind::Bool(false),
                TokenKind::Operator(BinaryOperator::Or),
                TokenKind::Null,
            ]
        );
    }

    #[test]
    fn test_keyword_prefix_stays_identifier() {
        // whole-word matching only: these all contain reserved prefixes
        assert_eq!(
            kinds("notes android organization"),
            vec![
                TokenKind::Ident("notes".to_string()),
                TokenKind::Ident("android".to_string()),
                TokenKind::Ident("organization".to_string()),
            ]
        );
    }

    #[test]
    fn test_identifier_case_is_preserved() {
        assert_eq!(kinds("FirstName"), vec![TokenKind::Ident("FirstName".to_string())]);
    }

    #[test]
    fn test_dotted_and_slashed_paths_are_single_tokens() {
        assert_eq!(
            kinds("worker.person.firstName worker/person/firstName"),
            vec![
                TokenKind::Ident("worker.person.firstName".to_string()),
                TokenKind::Ident("worker/person/firstName".to_string()),
            ]
        );
    }

    #[test]
    fn test_numbers() {
        assert_eq!(
            kinds("42 -7 3.14 -0.5"),
            vec![
                TokenKind::Int(42),
                TokenKind::Int(-7),
                TokenKind::Float(3.14),
                TokenKind::Float(-0.5),
            ]
        );
    }

    #[test]
    fn test_oversized_integer_widens_to_float() {
        assert_eq!(
            kinds("99999999999999999999"),
            vec![TokenKind::Float(1e20)]
        );
    }

    #[test]
    fn test_string_with_doubled_quote() {
        assert_eq!(
            kinds("'O''Brien'"),
            vec![TokenKind::Str("O'Brien".to_string())]
        );
    }

    #[test]
    fn test_empty_string_literal() {
        assert_eq!(kinds("''"), vec![TokenKind::Str(String::new())]);
    }

    #[test]
    fn test_empty_input_yields_no_tokens() {
        assert_eq!(tokenize(""), Ok(Vec::new()));
        assert_eq!(tokenize("   \t\n"), Ok(Vec::new()));
    }

    #[test]
    fn test_unrecognized_character_fails_fast() {
        assert_eq!(
            tokenize("a eq #"),
            Err(LexError::UnrecognizedChar { ch: '#', offset: 5 })
        );
    }

    #[test]
    fn test_unterminated_string() {
        assert_eq!(
            tokenize("name eq 'unterminated"),
            Err(LexError::UnterminatedString { offset: 8 })
        );
    }

    #[test]
    fn test_trailing_escaped_quote_is_unterminated() {
        // the two final quotes form an escape, so the literal never closes
        assert_eq!(
            tokenize("'ends with ''"),
            Err(LexError::UnterminatedString { offset: 0 })
        );
    }

    #[test]
    fn test_escaped_quote_then_close() {
        assert_eq!(
            kinds("'ends with '''"),
            vec![TokenKind::Str("ends with '".to_string())]
        );
    }
}
