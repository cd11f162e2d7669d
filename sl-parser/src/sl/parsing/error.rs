//! Syntax errors
//!
//! The parser stops at the first mismatch. The error says what the current production
//! expected, what token was actually there, and where.

use crate::sl::ast::range::Position;
use crate::sl::token::{Token, TokenKind};
use std::fmt;
use std::ops::Range;

/// What the parser was looking for when it failed
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Expected {
    Token(TokenKind),
    Keyword(&'static str),
    Identifier,
    Operator,
    Expression,
    /// Any S-expression element: an atom, `(` or `)`
    SExpr,
    EndOfInput,
    /// A `(` that would nest forms deeper than the parser allows
    ShallowerNesting,
}

/// What the parser found instead
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Found {
    Token(Token),
    EndOfInput,
}

/// A structural or keyword mismatch
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SyntaxError {
    pub expected: Expected,
    pub found: Found,
    pub span: Range<usize>,
    pub position: Position,
}

impl fmt::Display for Expected {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Expected::Token(kind) => write!(f, "{}", kind),
            Expected::Keyword(keyword) => write!(f, "keyword '{}'", keyword),
            Expected::Identifier => write!(f, "an identifier"),
            Expected::Operator => write!(f, "an operator ('=', 'and' or 'or')"),
            Expected::Expression => {
                write!(f, "an expression ('(variable', '(negation' or '((')")
            }
            Expected::SExpr => write!(f, "an atom, '(' or ')'"),
            Expected::EndOfInput => write!(f, "end of input"),
            Expected::ShallowerNesting => {
                write!(f, "at most {} nested forms", super::cursor::MAX_DEPTH)
            }
        }
    }
}

impl fmt::Display for Found {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Found::Token(token) => write!(f, "{}", token),
            Found::EndOfInput => write!(f, "end of input"),
        }
    }
}

impl fmt::Display for SyntaxError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "{}: expected {}, found {}",
            self.position, self.expected, self.found
        )
    }
}

impl std::error::Error for SyntaxError {}
