//! AST definitions for the sl format
//!
//!     This module provides the typed Abstract Syntax Tree the structural parser builds,
//!     along with source position tracking and a uniform node trait used by the tree
//!     formatters.
//!
//! Document Structure
//!
//!     An sl document specifies a list of functions. Each function has a name, typed
//!     parameters, typed return bindings and a postcondition: a boolean expression over the
//!     parameters and returns. The document is deliberately rigid:
//!
//!         Document
//!         └─ DefinitionBlock
//!            └─ FunctionDefinition*        (in source order)
//!               └─ ImplicitDefinition
//!                  ├─ PatternTypePair*     (x, y : Int)
//!                  ├─ IdentTypePair*       (r : Int)
//!                  └─ PostExpression
//!                     └─ Expression
//!
//!     See the [elements](elements) module for the node definitions.
//!
//! Ownership
//!
//!     Every node owns its children outright. Expressions are a recursive tree built bottom
//!     up by the parser with `Box`ed operands; nothing is shared and there are no cycles.
//!     Nodes are never mutated after parsing.
//!
//! Locations
//!
//!     AST nodes do not carry locations: once a document parses, nothing downstream reports
//!     errors against source text. Lexing and syntax errors carry the byte range and
//!     [`Position`](range::Position) of the offending token instead.

pub mod elements;
pub mod range;
pub mod traits;

pub use elements::{
    BasicType, CompositeType, DefinitionBlock, Document, Expression, FunctionDefinition,
    IdentTypePair, ImplicitDefinition, Operator, PatternList, PatternTypePair, PostExpression,
    Type,
};
pub use range::{Position, SourceLocation};
pub use traits::AstNode;
