//! Definition elements
//!
//!  A function definition specifies a function by its signature and a postcondition,
//!  without giving a body: the postcondition is what the function's results must satisfy
//!  with respect to its parameters.
//!
//! Syntax:
//!     (function_definition
//!         (implicit_function_definition <name>
//!             (parameter_types (pattern_type_pair_list (pattern_list (pattern <name>)+) : <type>)*)
//!             (identifier_type_pair_list (identifier_type_pair <name> : <type>)*)
//!             (post_expression post <expression>)))
//!
//! Example:
//!     `max(x, y : Int) r : Int post r = x or r = y` is written with each binary operation
//!     grouped explicitly; see `samples/030-grouped-parameters.sl`.
//!
//! Only implicit definitions exist today. [`FunctionDefinition`] is still an enum so a new
//! kind of definition is a compile-time checked extension everywhere definitions are
//! matched.

use super::super::traits::AstNode;
use super::expression::Expression;
use super::types::Type;
use serde::Serialize;

/// A function definition
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub enum FunctionDefinition {
    Implicit(ImplicitDefinition),
}

impl FunctionDefinition {
    pub fn name(&self) -> &str {
        match self {
            FunctionDefinition::Implicit(def) => &def.name,
        }
    }
}

/// A function given by signature and postcondition
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ImplicitDefinition {
    pub name: String,
    pub parameters: Vec<PatternTypePair>,
    pub returns: Vec<IdentTypePair>,
    pub postcondition: PostExpression,
}

/// One or more parameter names sharing a type, as in `x, y : Int`
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct PatternTypePair {
    pub patterns: PatternList,
    pub ty: Type,
}

/// A non-empty ordered list of pattern names
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(transparent)]
pub struct PatternList(Vec<String>);

impl PatternList {
    /// Returns `None` for an empty list
    pub fn new(names: Vec<String>) -> Option<Self> {
        if names.is_empty() {
            None
        } else {
            Some(Self(names))
        }
    }

    pub fn names(&self) -> &[String] {
        &self.0
    }
}

/// A single return name bound to a type
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct IdentTypePair {
    pub name: String,
    pub ty: Type,
}

/// The postcondition of a definition
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct PostExpression {
    pub expression: Expression,
}

impl AstNode for FunctionDefinition {
    fn node_type(&self) -> &'static str {
        "function_definition"
    }

    fn display_label(&self) -> String {
        self.name().to_string()
    }

    fn children(&self) -> Vec<&dyn AstNode> {
        match self {
            FunctionDefinition::Implicit(def) => vec![def as &dyn AstNode],
        }
    }
}

impl AstNode for ImplicitDefinition {
    fn node_type(&self) -> &'static str {
        "implicit_function_definition"
    }

    fn display_label(&self) -> String {
        self.name.clone()
    }

    fn children(&self) -> Vec<&dyn AstNode> {
        let params = self.parameters.iter().map(|p| p as &dyn AstNode);
        let returns = self.returns.iter().map(|r| r as &dyn AstNode);
        params
            .chain(returns)
            .chain(std::iter::once(&self.postcondition as &dyn AstNode))
            .collect()
    }
}

impl AstNode for PatternTypePair {
    fn node_type(&self) -> &'static str {
        "pattern_type_pair"
    }

    fn display_label(&self) -> String {
        format!("{} : {}", self.patterns.names().join(", "), self.ty)
    }
}

impl AstNode for IdentTypePair {
    fn node_type(&self) -> &'static str {
        "identifier_type_pair"
    }

    fn display_label(&self) -> String {
        format!("{} : {}", self.name, self.ty)
    }
}

impl AstNode for PostExpression {
    fn node_type(&self) -> &'static str {
        "post_expression"
    }

    fn display_label(&self) -> String {
        String::new()
    }

    fn children(&self) -> Vec<&dyn AstNode> {
        vec![&self.expression as &dyn AstNode]
    }
}
