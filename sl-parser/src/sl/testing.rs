//! Testing utilities
//!
//!     sl sources are verbose and easy to get subtly wrong: a missing parenthesis deep in a
//!     post expression makes a test exercise the error path instead of the one it means to.
//!     Tests therefore follow two rules:
//!
//!         1. Source text comes from the verified files under `sl-parser/samples/`, through
//!            the [samples] constants or [`sample_path`]. Short inline strings are fine for
//!            tests about a single token or form.
//!         2. ASTs built by hand come from the [factories], so that they look like what the
//!            parser produces.
//!
//! Samples
//!
//!     Files are numbered by theme. Files from 900 up are malformed on purpose.
//!
//!         010  one function, one equality
//!         020  three functions, with negation and conjunction
//!         030  grouped parameters (`x, y : Int`) and disjunction
//!         040  negated conjunction, two return bindings
//!         050  no functions at all
//!         900  missing closing parenthesis
//!         910  operator outside `=`, `and`, `or`
//!         920  unknown definition keyword

use std::path::PathBuf;

/// Verified sample sources, embedded at compile time
pub mod samples {
    pub const SINGLE_EQUALITY: &str = include_str!("../../samples/010-single-equality.sl");
    pub const MULTIPLE_FUNCTIONS: &str = include_str!("../../samples/020-multiple-functions.sl");
    pub const GROUPED_PARAMETERS: &str = include_str!("../../samples/030-grouped-parameters.sl");
    pub const NESTED_NEGATION: &str = include_str!("../../samples/040-nested-negation.sl");
    pub const NO_FUNCTIONS: &str = include_str!("../../samples/050-no-functions.sl");

    pub const MISSING_CLOSE_PAREN: &str = include_str!("../../samples/900-missing-close-paren.sl");
    pub const UNSUPPORTED_OPERATOR: &str =
        include_str!("../../samples/910-unsupported-operator.sl");
    pub const UNKNOWN_KEYWORD: &str = include_str!("../../samples/920-unknown-keyword.sl");

    /// The well-formed samples, in file order
    pub const VALID: &[&str] = &[
        SINGLE_EQUALITY,
        MULTIPLE_FUNCTIONS,
        GROUPED_PARAMETERS,
        NESTED_NEGATION,
        NO_FUNCTIONS,
    ];

    /// The malformed samples, in file order
    pub const MALFORMED: &[&str] = &[MISSING_CLOSE_PAREN, UNSUPPORTED_OPERATOR, UNKNOWN_KEYWORD];
}

/// Absolute path of a file under `sl-parser/samples/`
pub fn sample_path(name: &str) -> PathBuf {
    PathBuf::from(env!("CARGO_MANIFEST_DIR"))
        .join("samples")
        .join(name)
}

/// Builders for AST values
pub mod factories {
    use crate::sl::ast::{
        DefinitionBlock, Document, Expression, FunctionDefinition, IdentTypePair,
        ImplicitDefinition, PatternList, PatternTypePair, PostExpression, Type,
    };

    /// A parameter group of basic-typed names
    ///
    /// Panics on an empty name list, which the parser never produces.
    pub fn param_group(names: &[&str], ty: &str) -> PatternTypePair {
        let names = names.iter().map(|n| n.to_string()).collect();
        PatternTypePair {
            patterns: PatternList::new(names).expect("a parameter group needs a name"),
            ty: Type::basic(ty),
        }
    }

    pub fn returns(name: &str, ty: &str) -> IdentTypePair {
        IdentTypePair {
            name: name.to_string(),
            ty: Type::basic(ty),
        }
    }

    pub fn implicit(
        name: &str,
        parameters: Vec<PatternTypePair>,
        returns: Vec<IdentTypePair>,
        postcondition: Expression,
    ) -> ImplicitDefinition {
        ImplicitDefinition {
            name: name.to_string(),
            parameters,
            returns,
            postcondition: PostExpression {
                expression: postcondition,
            },
        }
    }

    pub fn document(definitions: Vec<ImplicitDefinition>) -> Document {
        Document::new(DefinitionBlock::new(
            definitions
                .into_iter()
                .map(FunctionDefinition::Implicit)
                .collect(),
        ))
    }
}
