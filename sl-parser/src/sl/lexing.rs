//! Lexing for the sl format
//!
//! Converts source text into a flat stream of `(Token, Range<usize>)` pairs. The
//! tokenization itself is handled entirely by logos (see [`Token`]); this module drives the
//! lexer, keeps the byte ranges, and turns the first unrecognized slice into a
//! [`LexError`].
//!
//! The stream is finite and ordered, and can only be restarted by lexing the source again.

use crate::sl::ast::range::{Position, SourceLocation};
use crate::sl::token::{Token, TokenStream};
use log::trace;
use logos::Logos;
use std::fmt;
use std::ops::Range;

/// A slice of the source that matches no token rule
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct LexError {
    pub text: String,
    pub span: Range<usize>,
    pub position: Position,
}

impl fmt::Display for LexError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}: unrecognized input {:?}", self.position, self.text)
    }
}

impl std::error::Error for LexError {}

/// Tokenize a source string, keeping the byte range of every token
pub fn tokenize(source: &str) -> Result<TokenStream, LexError> {
    let mut lexer = Token::lexer(source);
    let mut tokens = Vec::new();

    while let Some(result) = lexer.next() {
        match result {
            Ok(token) => tokens.push((token, lexer.span())),
            Err(()) => {
                let span = lexer.span();
                let position = SourceLocation::new(source).byte_to_position(span.start);
                return Err(LexError {
                    text: lexer.slice().to_string(),
                    span,
                    position,
                });
            }
        }
    }

    trace!("lexed {} tokens from {} bytes", tokens.len(), source.len());
    Ok(tokens)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn kinds(source: &str) -> Vec<Token> {
        tokenize(source)
            .unwrap()
            .into_iter()
            .map(|(t, _)| t)
            .collect()
    }

    #[test]
    fn test_simple_tokenization() {
        assert_eq!(
            kinds("(pattern x)"),
            vec![
                Token::OpenParen,
                Token::Ident("pattern".into()),
                Token::Ident("x".into()),
                Token::CloseParen,
            ]
        );
    }

    #[test]
    fn test_identifier_type_pair_tokenization() {
        assert_eq!(
            kinds("(identifier_type_pair r : (type (basic_type Int)))"),
            vec![
                Token::OpenParen,
                Token::Ident("identifier_type_pair".into()),
                Token::Ident("r".into()),
                Token::Terminal(":".into()),
                Token::OpenParen,
                Token::Ident("type".into()),
                Token::OpenParen,
                Token::Ident("basic_type".into()),
                Token::Ident("Int".into()),
                Token::CloseParen,
                Token::CloseParen,
                Token::CloseParen,
            ]
        );
    }

    #[test]
    fn test_spans_slice_the_source() {
        let source = "(a\n  =)";
        let tokens = tokenize(source).unwrap();
        assert_eq!(tokens[0].1, 0..1);
        assert_eq!(tokens[1].1, 1..2);
        assert_eq!(tokens[2].1, 5..6);
        assert_eq!(&source[tokens[2].1.clone()], "=");
        assert_eq!(tokens[3].1, 6..7);
    }

    #[test]
    fn test_empty_input() {
        assert_eq!(tokenize("").unwrap(), vec![]);
        assert_eq!(tokenize(" \t\r\n ").unwrap(), vec![]);
    }

    #[test]
    fn test_unrecognized_whitespace_is_an_error() {
        // A vertical tab is whitespace to the terminal rule but is not skipped
        let err = tokenize("(a\n\u{0B})").unwrap_err();
        assert_eq!(err.span, 3..4);
        assert_eq!(err.position, Position::new(1, 0));
        assert_eq!(err.text, "\u{0B}");
    }

    #[test]
    fn test_lex_error_display() {
        let err = tokenize("(\u{0B})").unwrap_err();
        assert_eq!(err.to_string(), "1:2: unrecognized input \"\\u{b}\"");
    }
}
