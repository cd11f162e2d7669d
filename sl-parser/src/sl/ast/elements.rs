//! Element-specific AST node definitions for the sl format
//!
//!     Elements fall into three groups:
//!
//!     Structure:
//!         The document skeleton. A document holds one definition block, which holds the
//!         function definitions in source order. See [document](document).
//!
//!     Definitions:
//!         A function definition and its typed bindings. See [definition](definition).
//!
//!     Types and Expressions:
//!         The types bindings carry and the boolean postcondition language.
//!         See [types](types) and [expression](expression).

pub mod definition;
pub mod document;
pub mod expression;
pub mod types;

pub use definition::{
    FunctionDefinition, IdentTypePair, ImplicitDefinition, PatternList, PatternTypePair,
    PostExpression,
};
pub use document::{DefinitionBlock, Document};
pub use expression::{Expression, Operator};
pub use types::{BasicType, CompositeType, Type};
