//! Transform pipeline infrastructure
//!
//! The pipeline stages (lexing, parsing, lowering) are plain functions. This module wraps
//! them as composable values so that the CLI, the loader and the tests share the same
//! pipelines.
//!
//! # `Runnable`
//!
//! Any stage implementing `Runnable<I, O>` turns an `I` into an `O` or fails with a
//! [`TransformError`].
//!
//! # `Transform<I, O>`
//!
//! A boxed, composable pipeline. `.then(stage)` chains a stage whose input is the current
//! output; the compiler checks that the types line up:
//!
//! ```rust,ignore
//! let pipeline = Transform::from_fn(Ok)
//!     .then(Tokenization::new())   // String -> Lexed
//!     .then(Parsing::new());       // Lexed -> Document
//! ```
//!
//! # Static pipelines
//!
//! The common paths are built once as `once_cell::sync::Lazy` statics in [`standard`]:
//! `LEXING`, `STRING_TO_SEXPR`, `STRING_TO_AST` and `STRING_TO_DECLARATIONS`.
//!
//! ```rust,ignore
//! use sl_parser::sl::transforms::standard::STRING_TO_AST;
//!
//! let doc = STRING_TO_AST.run(source)?;
//! ```

pub mod stages;
pub mod standard;

use crate::sl::lexing::LexError;
use crate::sl::lowering::LowerError;
use crate::sl::parsing::SyntaxError;
use std::fmt;

/// Error that can occur during transformation
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum TransformError {
    Lex(LexError),
    Syntax(SyntaxError),
    Lower(LowerError),
    /// A stage failed for a reason outside the three pipeline errors
    StageFailed { stage: String, message: String },
}

impl fmt::Display for TransformError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            TransformError::Lex(err) => write!(f, "lexing error: {}", err),
            TransformError::Syntax(err) => write!(f, "syntax error: {}", err),
            TransformError::Lower(err) => write!(f, "lowering error: {}", err),
            TransformError::StageFailed { stage, message } => {
                write!(f, "Stage '{}' failed: {}", stage, message)
            }
        }
    }
}

impl std::error::Error for TransformError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            TransformError::Lex(err) => Some(err),
            TransformError::Syntax(err) => Some(err),
            TransformError::Lower(err) => Some(err),
            TransformError::StageFailed { .. } => None,
        }
    }
}

impl From<LexError> for TransformError {
    fn from(err: LexError) -> Self {
        TransformError::Lex(err)
    }
}

impl From<SyntaxError> for TransformError {
    fn from(err: SyntaxError) -> Self {
        TransformError::Syntax(err)
    }
}

impl From<LowerError> for TransformError {
    fn from(err: LowerError) -> Self {
        TransformError::Lower(err)
    }
}

/// Trait for anything that can transform an input to an output
pub trait Runnable<I, O> {
    fn run(&self, input: I) -> Result<O, TransformError>;
}

/// A composable transformation pipeline from `I` to `O`
pub struct Transform<I, O> {
    run_fn: Box<dyn Fn(I) -> Result<O, TransformError> + Send + Sync>,
}

impl<I, O> Transform<I, O> {
    /// Create a transform from a function
    pub fn from_fn<F>(f: F) -> Self
    where
        F: Fn(I) -> Result<O, TransformError> + Send + Sync + 'static,
    {
        Transform {
            run_fn: Box::new(f),
        }
    }

    /// Chain a stage onto this transform's output
    pub fn then<O2, S>(self, stage: S) -> Transform<I, O2>
    where
        S: Runnable<O, O2> + Send + Sync + 'static,
        I: 'static,
        O: 'static,
        O2: 'static,
    {
        let prev_run = self.run_fn;
        Transform {
            run_fn: Box::new(move |input| {
                let intermediate = prev_run(input)?;
                stage.run(intermediate)
            }),
        }
    }

    /// Execute this transform on the given input
    pub fn run(&self, input: I) -> Result<O, TransformError> {
        (self.run_fn)(input)
    }
}

impl<I, O> Runnable<I, O> for Transform<I, O>
where
    I: 'static,
    O: 'static,
{
    fn run(&self, input: I) -> Result<O, TransformError> {
        Transform::run(self, input)
    }
}
