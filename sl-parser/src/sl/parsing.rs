//! Parsing module for the sl format
//!
//!     Two parsers read the same token stream:
//!         1. The structural parser ([parser]) builds the typed AST. It is a hand-written
//!            recursive descent over a [cursor] with a fixed two-token lookahead window.
//!         2. The generic S-expression parser ([sexpr](crate::sl::sexpr)) only checks that
//!            parentheses balance and builds an untyped tree of atoms and lists. It is used
//!            for diagnostic dumps.
//!
//! Structural Parsing
//!
//!     Every production is a keyword-tagged form. A production opens its parenthesis,
//!     consumes its tag and any further keyword atoms, recurses into its sub-productions,
//!     then closes. Keywords are compared on atom text, so `:` (a terminal) and `post` (an
//!     identifier) are matched the same way. Names must lex as identifiers.
//!
//!     Repetitions and the `Expression` alternatives are decided by peeking at most two
//!     tokens: `(` followed by the tag of the production to try. The parser never backtracks
//!     and never recovers; the first mismatch is returned as a [`SyntaxError`].
//!
//! Testing
//!
//!     Parser tests use the verified samples of the [testing module](crate::sl::testing).

pub mod cursor;
pub mod error;
pub mod parser;

pub use cursor::{TokenCursor, LOOKAHEAD, MAX_DEPTH};
pub use error::{Expected, Found, SyntaxError};
pub use parser::parse;

use crate::sl::ast::Document;
use crate::sl::lexing::{tokenize, LexError};
use std::fmt;

/// Failure of [`parse_document`]: either stage can reject the input
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ParseError {
    Lex(LexError),
    Syntax(SyntaxError),
}

impl fmt::Display for ParseError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ParseError::Lex(err) => write!(f, "{}", err),
            ParseError::Syntax(err) => write!(f, "{}", err),
        }
    }
}

impl std::error::Error for ParseError {}

impl From<LexError> for ParseError {
    fn from(err: LexError) -> Self {
        ParseError::Lex(err)
    }
}

impl From<SyntaxError> for ParseError {
    fn from(err: SyntaxError) -> Self {
        ParseError::Syntax(err)
    }
}

/// Lex and parse a source string in one call
pub fn parse_document(source: &str) -> Result<Document, ParseError> {
    let tokens = tokenize(source)?;
    Ok(parse(&tokens, source)?)
}
