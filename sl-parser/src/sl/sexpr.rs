//! Generic S-expression parsing
//!
//!     The untyped view of a source: every input is a single S-expression, either an atom or
//!     a parenthesized list of S-expressions.
//!
//!         SExpr = <atom> | "(" SExpr* ")" .
//!
//!     This parser knows no keywords. It accepts anything whose parentheses balance, and is
//!     used to dump the shape of an input that the structural parser rejects, or to look at
//!     the tree the structural parser walks.
//!
//!     It is built with chumsky combinators over the logos token stream. Errors are mapped to
//!     the same [`SyntaxError`] the structural parser reports. Inputs nested deeper than
//!     [`MAX_DEPTH`] are rejected before the combinators run.

use crate::sl::ast::range::SourceLocation;
use crate::sl::ast::traits::AstNode;
use crate::sl::parsing::{Expected, Found, SyntaxError, MAX_DEPTH};
use crate::sl::token::{Token, TokenSpan};
use chumsky::prelude::*;
use log::debug;
use serde::Serialize;
use std::ops::Range;

/// Type alias for parser error
type ParserError = Simple<TokenSpan>;

/// A node of the generic parse tree
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(tag = "kind", rename_all = "snake_case")]
pub enum SExpr {
    Atom { text: String, span: Range<usize> },
    List { items: Vec<SExpr>, span: Range<usize> },
}

impl SExpr {
    /// Byte range covered by this node, parentheses included
    pub fn span(&self) -> Range<usize> {
        match self {
            SExpr::Atom { span, .. } | SExpr::List { span, .. } => span.clone(),
        }
    }

    pub fn as_atom(&self) -> Option<&str> {
        match self {
            SExpr::Atom { text, .. } => Some(text),
            SExpr::List { .. } => None,
        }
    }

    pub fn items(&self) -> &[SExpr] {
        match self {
            SExpr::Atom { .. } => &[],
            SExpr::List { items, .. } => items,
        }
    }

    /// Text of the first item when it is an atom, the tag of a keyword form
    pub fn tag(&self) -> Option<&str> {
        self.items().first().and_then(SExpr::as_atom)
    }
}

impl AstNode for SExpr {
    fn node_type(&self) -> &'static str {
        match self {
            SExpr::Atom { .. } => "atom",
            SExpr::List { .. } => "list",
        }
    }

    fn display_label(&self) -> String {
        match self {
            SExpr::Atom { text, .. } => text.clone(),
            SExpr::List { items, .. } => format!("{} item(s)", items.len()),
        }
    }

    fn children(&self) -> Vec<&dyn AstNode> {
        self.items().iter().map(|item| item as &dyn AstNode).collect()
    }
}

fn kind(token: Token) -> impl Parser<TokenSpan, TokenSpan, Error = ParserError> + Clone {
    filter(move |(t, _): &TokenSpan| t == &token)
}

/// One S-expression, recursively
pub fn sexpr() -> impl Parser<TokenSpan, SExpr, Error = ParserError> + Clone {
    recursive(|sexpr| {
        let atom = filter(|(t, _): &TokenSpan| t.is_atom()).map(|(t, span): TokenSpan| {
            SExpr::Atom {
                text: t.text().to_string(),
                span,
            }
        });

        let list = kind(Token::OpenParen)
            .then(sexpr.repeated())
            .then(kind(Token::CloseParen))
            .map(
                |(((_, open), items), (_, close)): ((TokenSpan, Vec<SExpr>), TokenSpan)| {
                    SExpr::List {
                        items,
                        span: open.start..close.end,
                    }
                },
            );

        atom.or(list)
    })
}

/// Parse a token stream holding exactly one S-expression
pub fn parse_sexpr(tokens: &[TokenSpan], source: &str) -> Result<SExpr, SyntaxError> {
    check_nesting(tokens, source)?;
    let tree = sexpr()
        .then_ignore(end())
        .parse(tokens.to_vec())
        .map_err(|errors| to_syntax_error(errors, source))?;
    debug!("parsed S-expression spanning {:?}", tree.span());
    Ok(tree)
}

/// Reject the first `(` that opens more than [`MAX_DEPTH`] lists
fn check_nesting(tokens: &[TokenSpan], source: &str) -> Result<(), SyntaxError> {
    let mut depth = 0usize;
    for (token, span) in tokens {
        match token {
            Token::OpenParen if depth >= MAX_DEPTH => {
                return Err(SyntaxError {
                    expected: Expected::ShallowerNesting,
                    found: Found::Token(token.clone()),
                    span: span.clone(),
                    position: SourceLocation::new(source).byte_to_position(span.start),
                });
            }
            Token::OpenParen => depth += 1,
            Token::CloseParen => depth = depth.saturating_sub(1),
            _ => {}
        }
    }
    Ok(())
}

/// Keep the first chumsky error and express it in the parser's own terms
fn to_syntax_error(errors: Vec<ParserError>, source: &str) -> SyntaxError {
    let first = errors.into_iter().next();
    let found = first.as_ref().and_then(|e| e.found().cloned());
    let wants_end = first
        .as_ref()
        .map(|e| e.expected().any(Option::is_none))
        .unwrap_or(false);

    let (found, span) = match found {
        Some((token, span)) => (Found::Token(token), span),
        None => (Found::EndOfInput, source.len()..source.len()),
    };
    let expected = match found {
        Found::Token(_) if wants_end => Expected::EndOfInput,
        _ => Expected::SExpr,
    };

    SyntaxError {
        expected,
        position: SourceLocation::new(source).byte_to_position(span.start),
        found,
        span,
    }
}
