//! Token cursor with a bounded lookahead window
//!
//! The structural parser never backtracks. Productions consume tokens through the
//! `expect_*` methods, and decide between alternatives or whether to repeat by peeking at
//! most [`LOOKAHEAD`] tokens ahead.
//!
//! Every form is parsed by a nested call, so the cursor also counts open parentheses and
//! refuses to go deeper than [`MAX_DEPTH`]. Past that, a [`SyntaxError`] is returned
//! instead of exhausting the stack.

use super::error::{Expected, Found, SyntaxError};
use crate::sl::ast::range::SourceLocation;
use crate::sl::token::{Token, TokenKind, TokenSpan};

/// How many tokens a production may inspect before committing
pub const LOOKAHEAD: usize = 2;

/// How many forms may be open at once
pub const MAX_DEPTH: usize = 128;

pub struct TokenCursor<'a> {
    tokens: &'a [TokenSpan],
    pos: usize,
    depth: usize,
    source_len: usize,
    location: SourceLocation,
}

impl<'a> TokenCursor<'a> {
    pub fn new(tokens: &'a [TokenSpan], source: &str) -> Self {
        Self {
            tokens,
            pos: 0,
            depth: 0,
            source_len: source.len(),
            location: SourceLocation::new(source),
        }
    }

    /// Peek at the token `offset` places ahead of the cursor
    pub fn peek(&self, offset: usize) -> Option<&'a Token> {
        debug_assert!(offset < LOOKAHEAD, "lookahead is bounded to {}", LOOKAHEAD);
        self.tokens.get(self.pos + offset).map(|(token, _)| token)
    }

    /// Whether the window shows `(` followed by the atom `tag`
    pub fn at_form(&self, tag: &str) -> bool {
        matches!(
            (self.peek(0), self.peek(1)),
            (Some(Token::OpenParen), Some(t)) if t.is_atom_text(tag)
        )
    }

    /// Number of forms opened and not yet closed
    pub fn depth(&self) -> usize {
        self.depth
    }

    pub fn is_at_end(&self) -> bool {
        self.pos >= self.tokens.len()
    }

    fn advance(&mut self) -> Option<&'a TokenSpan> {
        let token = self.tokens.get(self.pos);
        if token.is_some() {
            self.pos += 1;
        }
        token
    }

    /// Build an error for the token `offset` places ahead of the cursor
    pub fn error_at(&self, offset: usize, expected: Expected) -> SyntaxError {
        let (found, span) = match self.tokens.get(self.pos + offset) {
            Some((token, span)) => (Found::Token(token.clone()), span.clone()),
            None => (Found::EndOfInput, self.source_len..self.source_len),
        };
        SyntaxError {
            expected,
            position: self.location.byte_to_position(span.start),
            found,
            span,
        }
    }

    /// Build an error for the token under the cursor
    pub fn error(&self, expected: Expected) -> SyntaxError {
        self.error_at(0, expected)
    }

    pub fn expect_open(&mut self) -> Result<(), SyntaxError> {
        match self.peek(0) {
            Some(Token::OpenParen) if self.depth >= MAX_DEPTH => {
                Err(self.error(Expected::ShallowerNesting))
            }
            Some(Token::OpenParen) => {
                self.advance();
                self.depth += 1;
                Ok(())
            }
            _ => Err(self.error(Expected::Token(TokenKind::OpenParen))),
        }
    }

    pub fn expect_close(&mut self) -> Result<(), SyntaxError> {
        match self.peek(0) {
            Some(Token::CloseParen) => {
                self.advance();
                self.depth = self.depth.saturating_sub(1);
                Ok(())
            }
            _ => Err(self.error(Expected::Token(TokenKind::CloseParen))),
        }
    }

    /// Consume an atom whose text is exactly `keyword`
    pub fn expect_keyword(&mut self, keyword: &'static str) -> Result<(), SyntaxError> {
        match self.peek(0) {
            Some(token) if token.is_atom_text(keyword) => {
                self.advance();
                Ok(())
            }
            _ => Err(self.error(Expected::Keyword(keyword))),
        }
    }

    /// Consume an identifier and return its text
    pub fn expect_ident(&mut self) -> Result<String, SyntaxError> {
        match self.peek(0) {
            Some(Token::Ident(name)) => {
                self.advance();
                Ok(name.clone())
            }
            _ => Err(self.error(Expected::Identifier)),
        }
    }

    /// Consume an atom whose text is one of `choices`, returning the text
    pub fn expect_one_of(
        &mut self,
        choices: &[&str],
        expected: Expected,
    ) -> Result<String, SyntaxError> {
        match self.peek(0) {
            Some(token) if token.is_atom() && choices.contains(&token.text()) => {
                self.advance();
                Ok(token.text().to_string())
            }
            _ => Err(self.error(expected)),
        }
    }

    /// Open a keyword-tagged form: `(` followed by its tag
    pub fn open_form(&mut self, tag: &'static str) -> Result<(), SyntaxError> {
        self.expect_open()?;
        self.expect_keyword(tag)
    }

    pub fn expect_end(&self) -> Result<(), SyntaxError> {
        if self.is_at_end() {
            Ok(())
        } else {
            Err(self.error(Expected::EndOfInput))
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::sl::lexing::tokenize;
    use crate::sl::ast::range::Position;

    #[test]
    fn test_at_form_uses_two_tokens() {
        let source = "(pattern x)";
        let tokens = tokenize(source).unwrap();
        let cursor = TokenCursor::new(&tokens, source);
        assert!(cursor.at_form("pattern"));
        assert!(!cursor.at_form("pattern_list"));
    }

    #[test]
    fn test_expect_sequence() {
        let source = "(pattern x)";
        let tokens = tokenize(source).unwrap();
        let mut cursor = TokenCursor::new(&tokens, source);
        cursor.open_form("pattern").unwrap();
        assert_eq!(cursor.expect_ident().unwrap(), "x");
        cursor.expect_close().unwrap();
        assert!(cursor.expect_end().is_ok());
    }

    #[test]
    fn test_keyword_mismatch_reports_found_token() {
        let source = "(patern x)";
        let tokens = tokenize(source).unwrap();
        let mut cursor = TokenCursor::new(&tokens, source);
        let err = cursor.open_form("pattern").unwrap_err();
        assert_eq!(err.expected, Expected::Keyword("pattern"));
        assert_eq!(err.found, Found::Token(Token::Ident("patern".into())));
        assert_eq!(err.span, 1..7);
        assert_eq!(err.position, Position::new(0, 1));
    }

    #[test]
    fn test_end_of_input_error_points_past_source() {
        let source = "(a";
        let tokens = tokenize(source).unwrap();
        let mut cursor = TokenCursor::new(&tokens, source);
        cursor.expect_open().unwrap();
        cursor.expect_ident().unwrap();
        let err = cursor.expect_close().unwrap_err();
        assert_eq!(err.found, Found::EndOfInput);
        assert_eq!(err.span, 2..2);
    }

    #[test]
    fn test_depth_follows_parentheses() {
        let source = "((a))";
        let tokens = tokenize(source).unwrap();
        let mut cursor = TokenCursor::new(&tokens, source);
        cursor.expect_open().unwrap();
        cursor.expect_open().unwrap();
        assert_eq!(cursor.depth(), 2);
        cursor.expect_ident().unwrap();
        cursor.expect_close().unwrap();
        assert_eq!(cursor.depth(), 1);
        cursor.expect_close().unwrap();
        assert_eq!(cursor.depth(), 0);
    }

    #[test]
    fn test_open_past_max_depth_fails() {
        let source = "(".repeat(MAX_DEPTH + 1);
        let tokens = tokenize(&source).unwrap();
        let mut cursor = TokenCursor::new(&tokens, &source);
        for _ in 0..MAX_DEPTH {
            cursor.expect_open().unwrap();
        }
        let err = cursor.expect_open().unwrap_err();
        assert_eq!(err.expected, Expected::ShallowerNesting);
        assert_eq!(err.found, Found::Token(Token::OpenParen));
        assert_eq!(err.span, MAX_DEPTH..MAX_DEPTH + 1);
    }

    #[test]
    fn test_expect_one_of() {
        let source = "and xor";
        let tokens = tokenize(source).unwrap();
        let mut cursor = TokenCursor::new(&tokens, source);
        let ops = ["=", "and", "or"];
        assert_eq!(cursor.expect_one_of(&ops, Expected::Operator).unwrap(), "and");
        let err = cursor.expect_one_of(&ops, Expected::Operator).unwrap_err();
        assert_eq!(err.expected, Expected::Operator);
    }
}
