//! Lowering from the AST to generated declarations
//!
//!     Every function definition becomes two declarations, in source order:
//!
//!         1. A signature stub with the function's own name, its parameter groups as
//!            parameters and its return bindings as results. It has no body.
//!         2. A check function named `<prefix><name>`. Its parameters are the signature's
//!            parameters followed by its results, its single unnamed result is the boolean
//!            type, and its body returns the lowered postcondition.
//!
//!     For `f(x : Int) r : Int post x = r` with the default options:
//!
//!         f(x: Int) -> (r: Int)
//!         POST_f(x: Int, r: Int) -> Bool { return x == r }
//!
//! Expressions
//!
//!     Variables lower to identifiers, negation to logical not, and a binary node to the
//!     operator found in a fixed table keyed on the operator text: `and`, `or` and `=`.
//!     Lowering does no name resolution and no type checking.
//!
//! Failure
//!
//!     A composite type, an operator outside the table or an expression shape with no rule
//!     aborts the whole document. The [`LowerError`] names the definition and where in it
//!     the failure happened. No partial output is returned.

pub mod declarations;
pub mod error;
pub mod lower;

pub use declarations::{
    BinaryOperator, CheckFunction, Declaration, Field, FunctionStub, GenExpr, Statement, TypeRef,
};
pub use error::{LowerError, LowerErrorKind, LowerSite};
pub use lower::{lower_definition, lower_document, LoweringOptions};
