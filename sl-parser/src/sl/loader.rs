//! Document loading utilities
//!
//! `DocumentLoader` reads sl source from a file or a string and runs transforms on it. It is
//! the only place in the library that touches the filesystem; everything past it works on
//! an in-memory `String`.
//!
//! # Example
//!
//! ```rust,ignore
//! use sl_parser::sl::loader::DocumentLoader;
//!
//! let loader = DocumentLoader::from_path("samples/010-single-equality.sl")?;
//! let doc = loader.parse()?;
//! let decls = loader.lower(&LoweringOptions::default())?;
//! ```

use crate::sl::ast::Document;
use crate::sl::lowering::{Declaration, LoweringOptions};
use crate::sl::sexpr::SExpr;
use crate::sl::token::TokenStream;
use crate::sl::transforms::standard::{
    string_to_declarations, LEXING, STRING_TO_AST, STRING_TO_SEXPR,
};
use crate::sl::transforms::{Transform, TransformError};
use log::debug;
use std::fs;
use std::path::Path;

/// Error that can occur when loading documents
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum LoaderError {
    /// IO error when reading file
    Io(String),
    /// Transform/parsing error
    Transform(TransformError),
}

impl std::fmt::Display for LoaderError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            LoaderError::Io(msg) => write!(f, "IO error: {}", msg),
            LoaderError::Transform(err) => write!(f, "{}", err),
        }
    }
}

impl std::error::Error for LoaderError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            LoaderError::Io(_) => None,
            LoaderError::Transform(err) => Some(err),
        }
    }
}

impl From<std::io::Error> for LoaderError {
    fn from(err: std::io::Error) -> Self {
        LoaderError::Io(err.to_string())
    }
}

impl From<TransformError> for LoaderError {
    fn from(err: TransformError) -> Self {
        LoaderError::Transform(err)
    }
}

/// Source text with transform shortcuts
pub struct DocumentLoader {
    source: String,
}

impl DocumentLoader {
    /// Load from a file path
    pub fn from_path<P: AsRef<Path>>(path: P) -> Result<Self, LoaderError> {
        let path = path.as_ref();
        let source = fs::read_to_string(path)?;
        debug!("loaded {} bytes from {}", source.len(), path.display());
        Ok(DocumentLoader { source })
    }

    /// Load from a string
    pub fn from_string<S: Into<String>>(source: S) -> Self {
        DocumentLoader {
            source: source.into(),
        }
    }

    /// Run a custom transform on the source
    ///
    /// All the shortcuts below go through this.
    pub fn with<O: 'static>(&self, transform: &Transform<String, O>) -> Result<O, LoaderError> {
        Ok(transform.run(self.source.clone())?)
    }

    /// Shortcut for `.with(&LEXING)`
    pub fn tokenize(&self) -> Result<TokenStream, LoaderError> {
        self.with(&LEXING)
    }

    /// Shortcut for `.with(&STRING_TO_SEXPR)`
    pub fn sexpr(&self) -> Result<SExpr, LoaderError> {
        self.with(&STRING_TO_SEXPR)
    }

    /// Shortcut for `.with(&STRING_TO_AST)`
    pub fn parse(&self) -> Result<Document, LoaderError> {
        self.with(&STRING_TO_AST)
    }

    /// Parse and lower with the given options
    pub fn lower(&self, options: &LoweringOptions) -> Result<Vec<Declaration>, LoaderError> {
        self.with(&string_to_declarations(options.clone()))
    }
}
