//! Standard transform definitions
//!
//! Pre-built pipelines, defined as `once_cell::sync::Lazy` statics. The declaration pipeline
//! uses the default [`LoweringOptions`]; [`string_to_declarations`] builds one with other
//! options.

use crate::sl::ast::Document;
use crate::sl::lowering::{Declaration, LoweringOptions};
use crate::sl::sexpr::SExpr;
use crate::sl::token::TokenStream;
use crate::sl::transforms::stages::{Lexed, Lowering, Parsing, SExprParsing, Tokenization};
use crate::sl::transforms::Transform;
use once_cell::sync::Lazy;

pub type LexingTransform = Transform<String, TokenStream>;
pub type SExprTransform = Transform<String, SExpr>;
pub type AstTransform = Transform<String, Document>;
pub type DeclarationsTransform = Transform<String, Vec<Declaration>>;

/// String -> token stream
pub static LEXING: Lazy<LexingTransform> = Lazy::new(|| {
    Transform::from_fn(Ok)
        .then(Tokenization::new())
        .then(Transform::from_fn(|lexed: Lexed| Ok(lexed.tokens)))
});

/// String -> generic S-expression tree
pub static STRING_TO_SEXPR: Lazy<SExprTransform> = Lazy::new(|| {
    Transform::from_fn(Ok)
        .then(Tokenization::new())
        .then(SExprParsing::new())
});

/// String -> typed AST
pub static STRING_TO_AST: Lazy<AstTransform> = Lazy::new(|| {
    Transform::from_fn(Ok)
        .then(Tokenization::new())
        .then(Parsing::new())
});

/// String -> declarations, with the default lowering options
pub static STRING_TO_DECLARATIONS: Lazy<DeclarationsTransform> =
    Lazy::new(|| string_to_declarations(LoweringOptions::default()));

/// String -> declarations, with the given lowering options
pub fn string_to_declarations(options: LoweringOptions) -> DeclarationsTransform {
    Transform::from_fn(|source: String| STRING_TO_AST.run(source)).then(Lowering::new(options))
}
