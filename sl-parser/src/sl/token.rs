//! Token definitions for the sl format
//!
//! This module defines all the tokens that can be produced by the sl lexer.
//! The tokens are defined using the logos derive macro for efficient tokenization.
//!
//! The format is a plain S-expression syntax, so there are only four kinds of tokens.
//! Whitespace is skipped by the lexer and never reaches the token stream. End of input
//! is not a token: the parser reports it when it runs out of tokens.
use logos::Logos;
use serde::Serialize;
use std::fmt;
use std::ops::Range;

/// Type alias for a token paired with its byte range in the source
pub type TokenSpan = (Token, Range<usize>);

/// Type alias for token stream (to satisfy clippy::type_complexity)
pub type TokenStream = Vec<TokenSpan>;

/// All possible tokens in the sl format
#[derive(Logos, Debug, PartialEq, Eq, Hash, Clone, Serialize)]
#[logos(skip r"[ \t\r\n]+")]
pub enum Token {
    #[token("(")]
    OpenParen,

    #[token(")")]
    CloseParen,

    // Identifiers win over terminals on equal length; a longer terminal still wins (`x:`)
    #[regex(r"[a-zA-Z_]\w*", |lex| lex.slice().to_string(), priority = 3)]
    Ident(String),

    // Catch-all for keyword atoms such as `:` and `=`
    #[regex(r"[^\s()]+", |lex| lex.slice().to_string(), priority = 2)]
    Terminal(String),
}

/// The kind of a token, without its text
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
pub enum TokenKind {
    OpenParen,
    CloseParen,
    Ident,
    Terminal,
}

impl Token {
    pub fn kind(&self) -> TokenKind {
        match self {
            Token::OpenParen => TokenKind::OpenParen,
            Token::CloseParen => TokenKind::CloseParen,
            Token::Ident(_) => TokenKind::Ident,
            Token::Terminal(_) => TokenKind::Terminal,
        }
    }

    /// The literal source text of this token
    pub fn text(&self) -> &str {
        match self {
            Token::OpenParen => "(",
            Token::CloseParen => ")",
            Token::Ident(text) | Token::Terminal(text) => text,
        }
    }

    /// Atoms are the non-parenthesis tokens: identifiers and terminals
    pub fn is_atom(&self) -> bool {
        matches!(self, Token::Ident(_) | Token::Terminal(_))
    }

    /// Check if this token is an atom with exactly the given text
    pub fn is_atom_text(&self, text: &str) -> bool {
        self.is_atom() && self.text() == text
    }
}

impl fmt::Display for Token {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Token::Ident(text) => write!(f, "identifier '{}'", text),
            other => write!(f, "'{}'", other.text()),
        }
    }
}

impl fmt::Display for TokenKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            TokenKind::OpenParen => write!(f, "'('"),
            TokenKind::CloseParen => write!(f, "')'"),
            TokenKind::Ident => write!(f, "an identifier"),
            TokenKind::Terminal => write!(f, "a terminal"),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn lex_all(source: &str) -> Vec<Token> {
        Token::lexer(source).filter_map(|result| result.ok()).collect()
    }

    #[test]
    fn test_parens() {
        let mut lexer = Token::lexer("()");
        assert_eq!(lexer.next(), Some(Ok(Token::OpenParen)));
        assert_eq!(lexer.next(), Some(Ok(Token::CloseParen)));
        assert_eq!(lexer.next(), None);
    }

    #[test]
    fn test_identifier_beats_terminal() {
        assert_eq!(lex_all("sl_document"), vec![Token::Ident("sl_document".into())]);
        assert_eq!(lex_all("_x1"), vec![Token::Ident("_x1".into())]);
    }

    #[test]
    fn test_terminals() {
        assert_eq!(
            lex_all(": = <="),
            vec![
                Token::Terminal(":".into()),
                Token::Terminal("=".into()),
                Token::Terminal("<=".into()),
            ]
        );
    }

    #[test]
    fn test_longest_match_prefers_terminal() {
        // The terminal run is longer than the identifier prefix
        assert_eq!(lex_all("x:"), vec![Token::Terminal("x:".into())]);
        assert_eq!(lex_all("1abc"), vec![Token::Terminal("1abc".into())]);
    }

    #[test]
    fn test_whitespace_skipped() {
        assert_eq!(
            lex_all(" (\tpattern\r\n x ) "),
            vec![
                Token::OpenParen,
                Token::Ident("pattern".into()),
                Token::Ident("x".into()),
                Token::CloseParen,
            ]
        );
    }

    #[test]
    fn test_token_predicates() {
        assert!(Token::Ident("and".into()).is_atom());
        assert!(Token::Terminal("=".into()).is_atom_text("="));
        assert!(!Token::OpenParen.is_atom());
        assert!(!Token::Ident("or".into()).is_atom_text("and"));
        assert_eq!(Token::CloseParen.kind(), TokenKind::CloseParen);
    }

    #[test]
    fn test_display() {
        assert_eq!(Token::Ident("x".into()).to_string(), "identifier 'x'");
        assert_eq!(Token::Terminal(":".into()).to_string(), "':'");
        assert_eq!(Token::OpenParen.to_string(), "'('");
    }
}
