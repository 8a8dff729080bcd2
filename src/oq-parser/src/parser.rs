//! Recursive-descent parser from token stream to expression tree.
//!
//! Grammar, lowest to highest precedence:
//!
//! ```text
//! expr      := or_expr
//! or_expr   := and_expr ( 'or' and_expr )*
//! and_expr  := not_expr ( 'and' not_expr )*
//! not_expr  := 'not'? cmp_expr
//! cmp_expr  := primary ( cmp_op primary )?
//! primary   := func_name '(' expr ( ',' expr )* ')'
//!            | '(' expr ')'
//!            | identifier | string | number | bool | null
//! ```
//!
//! `or` and `and` accumulate iteratively, fixing left associativity and
//! keeping stack depth flat on long chains. `not` applies to exactly one
//! comparison. The parser reconstructs the same node shapes the fluent
//! builder produces, so both origins render identically.

use oq_ast::{BinaryOperator, Expr, Value};

use crate::error::{ParseError, Result};
use crate::lexer::{tokenize, Token, TokenKind};

/// Parser for textual filter expressions.
pub struct FilterParser {
    // future parser configuration could go here
}

impl FilterParser {
    /// Create a new parser instance.
    pub fn new() -> Self {
        Self {}
    }

    /// Parse filter text into an expression tree.
    ///
    /// All-or-nothing: any lexical or structural error aborts the call,
    /// including tokens left over after a complete expression.
    pub fn parse(&self, input: &str) -> Result<Expr> {
        if input.trim().is_empty() {
            return Err(ParseError::EmptyInput);
        }

        let tokens = tokenize(input)?;
        log::trace!("parsing {} tokens", tokens.len());
        let mut cursor = Cursor {
            tokens: &tokens,
            pos: 0,
        };
        let expr = cursor.parse_or()?;
        if let Some(token) = cursor.peek() {
            return Err(ParseError::TrailingInput {
                found: token.kind.to_string(),
                position: token.offset,
            });
        }
        Ok(expr)
    }
}

impl Default for FilterParser {
    fn default() -> Self {
        Self::new()
    }
}

/// Token cursor with one-token lookahead.
struct Cursor<'a> {
    tokens: &'a [Token],
    pos: usize,
}

impl<'a> Cursor<'a> {
    fn peek(&self) -> Option<&'a Token> {
        self.tokens.get(self.pos)
    }

    fn bump(&mut self) -> Option<&'a Token> {
        let token = self.tokens.get(self.pos)?;
        self.pos += 1;
        Some(token)
    }

    /// Consume the next token if it matches `kind`.
    fn eat(&mut self, kind: &TokenKind) -> bool {
        if self.peek().is_some_and(|t| t.kind == *kind) {
            self.pos += 1;
            true
        } else {
            false
        }
    }

    /// Require an exact token, e.g. a closing parenthesis.
    fn expect(&mut self, kind: &TokenKind, expected: &str) -> Result<()> {
        match self.peek() {
            Some(token) if token.kind == *kind => {
                self.pos += 1;
                Ok(())
            }
            Some(token) => Err(ParseError::UnexpectedToken {
                found: token.kind.to_string(),
                expected: expected.to_string(),
                position: token.offset,
            }),
            None => Err(ParseError::UnexpectedEof {
                expected: expected.to_string(),
            }),
        }
    }

    /// `or_expr := and_expr ( 'or' and_expr )*`
    fn parse_or(&mut self) -> Result<Expr> {
        let mut node = self.parse_and()?;
        while self.eat(&TokenKind::Operator(BinaryOperator::Or)) {
            let right = self.parse_and()?;
            node = Expr::binary(node, BinaryOperator::Or, right);
        }
        Ok(node)
    }

    /// `and_expr := not_expr ( 'and' not_expr )*`
    fn parse_and(&mut self) -> Result<Expr> {
        let mut node = self.parse_not()?;
        while self.eat(&TokenKind::Operator(BinaryOperator::And)) {
            let right = self.parse_not()?;
            node = Expr::binary(node, BinaryOperator::And, right);
        }
        Ok(node)
    }

    /// `not_expr := 'not'? cmp_expr` — `not` binds to a single comparison.
    fn parse_not(&mut self) -> Result<Expr> {
        if self.eat(&TokenKind::Not) {
            let operand = self.parse_comparison()?;
            return Ok(operand.negate());
        }
        self.parse_comparison()
    }

    /// `cmp_expr := primary ( cmp_op primary )?` — the comparison is
    /// optional, so a bare field is a legal sub-expression.
    fn parse_comparison(&mut self) -> Result<Expr> {
        let left = self.parse_primary()?;
        let op = match self.peek() {
            Some(token) => match token.kind {
                TokenKind::Operator(op) if op.is_comparison() => op,
                _ => return Ok(left),
            },
            None => return Ok(left),
        };
        self.pos += 1;
        let right = self.parse_primary()?;
        Ok(Expr::binary(left, op, right))
    }

    fn parse_primary(&mut self) -> Result<Expr> {
        let Some(token) = self.bump() else {
            return Err(ParseError::UnexpectedEof {
                expected: "an expression".to_string(),
            });
        };
        match &token.kind {
            TokenKind::Function(name) => {
                let name = *name;
                self.expect(&TokenKind::LParen, "'(' after function name")?;
                let mut args = vec![self.parse_or()?];
                while self.eat(&TokenKind::Comma) {
                    args.push(self.parse_or()?);
                }
                self.expect(&TokenKind::RParen, "')' closing the argument list")?;
                Ok(Expr::Function { name, args })
            }
            TokenKind::LParen => {
                let node = self.parse_or()?;
                self.expect(&TokenKind::RParen, "')'")?;
                Ok(node)
            }
            TokenKind::Ident(path) => {
                // an identifier called like a function is outside the
                // supported set
                if self.peek().is_some_and(|t| t.kind == TokenKind::LParen) {
                    return Err(ParseError::UnknownFunction {
                        name: path.clone(),
                        position: token.offset,
                    });
                }
                Ok(Expr::field(path.clone()))
            }
            TokenKind::Str(s) => Ok(Expr::Literal(Value::String(s.clone()))),
            TokenKind::Int(i) => Ok(Expr::Literal(Value::Int(*i))),
            TokenKind::Float(x) => Ok(Expr::Literal(Value::Float(*x))),
            TokenKind::Bool(b) => Ok(Expr::Literal(Value::Bool(*b))),
            TokenKind::Null => Ok(Expr::Literal(Value::Null)),
            kind => Err(ParseError::UnexpectedToken {
                found: kind.to_string(),
                expected: "an expression".to_string(),
                position: token.offset,
            }),
        }
    }
}
