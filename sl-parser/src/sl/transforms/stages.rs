//! Individual transformation stages
//!
//! Each stage implements [`Runnable`] over one step of the pipeline. Tokenization keeps the
//! source next to the tokens ([`Lexed`]) since both parsers need it to report positions.

use crate::sl::ast::Document;
use crate::sl::lexing::tokenize;
use crate::sl::lowering::{lower_document, Declaration, LoweringOptions};
use crate::sl::parsing::parse;
use crate::sl::sexpr::{parse_sexpr, SExpr};
use crate::sl::token::TokenStream;
use crate::sl::transforms::{Runnable, TransformError};

/// Source text together with its token stream
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Lexed {
    pub source: String,
    pub tokens: TokenStream,
}

/// String -> Lexed
#[derive(Debug, Default)]
pub struct Tokenization;

impl Tokenization {
    pub fn new() -> Self {
        Tokenization
    }
}

impl Runnable<String, Lexed> for Tokenization {
    fn run(&self, source: String) -> Result<Lexed, TransformError> {
        let tokens = tokenize(&source)?;
        Ok(Lexed { source, tokens })
    }
}

/// Lexed -> Document, with the structural parser
#[derive(Debug, Default)]
pub struct Parsing;

impl Parsing {
    pub fn new() -> Self {
        Parsing
    }
}

impl Runnable<Lexed, Document> for Parsing {
    fn run(&self, input: Lexed) -> Result<Document, TransformError> {
        Ok(parse(&input.tokens, &input.source)?)
    }
}

/// Lexed -> SExpr, with the generic parser
#[derive(Debug, Default)]
pub struct SExprParsing;

impl SExprParsing {
    pub fn new() -> Self {
        SExprParsing
    }
}

impl Runnable<Lexed, SExpr> for SExprParsing {
    fn run(&self, input: Lexed) -> Result<SExpr, TransformError> {
        Ok(parse_sexpr(&input.tokens, &input.source)?)
    }
}

/// Document -> declarations
#[derive(Debug, Default)]
pub struct Lowering {
    options: LoweringOptions,
}

impl Lowering {
    pub fn new(options: LoweringOptions) -> Self {
        Self { options }
    }
}

impl Runnable<Document, Vec<Declaration>> for Lowering {
    fn run(&self, doc: Document) -> Result<Vec<Declaration>, TransformError> {
        Ok(lower_document(&doc, &self.options)?)
    }
}
