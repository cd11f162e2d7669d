//! The generated declarations
//!
//! Lowering produces a flat list of [`Declaration`]s, two per specified function: a
//! [`FunctionStub`] signature and a [`CheckFunction`]. The model is target-neutral; turning
//! it into text is the job of [`crate::sl::formats::source`].

use serde::Serialize;

/// One top-level generated item
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(tag = "kind", rename_all = "snake_case")]
pub enum Declaration {
    Signature(FunctionStub),
    Check(CheckFunction),
}

impl Declaration {
    pub fn name(&self) -> &str {
        match self {
            Declaration::Signature(stub) => &stub.name,
            Declaration::Check(check) => &check.stub.name,
        }
    }

    pub fn stub(&self) -> &FunctionStub {
        match self {
            Declaration::Signature(stub) => stub,
            Declaration::Check(check) => &check.stub,
        }
    }
}

/// A function header with no body
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct FunctionStub {
    pub name: String,
    pub params: Vec<Field>,
    pub results: Vec<Field>,
}

/// A boolean-valued function whose body evaluates a postcondition
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct CheckFunction {
    pub stub: FunctionStub,
    pub body: Vec<Statement>,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub enum Statement {
    Return(GenExpr),
}

/// Names sharing one type. `names` is empty for an unnamed result.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Field {
    pub names: Vec<String>,
    pub ty: TypeRef,
}

impl Field {
    pub fn named(names: Vec<String>, ty: TypeRef) -> Self {
        Self { names, ty }
    }

    pub fn unnamed(ty: TypeRef) -> Self {
        Self {
            names: Vec::new(),
            ty,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub enum TypeRef {
    Named(String),
}

impl TypeRef {
    pub fn named(name: impl Into<String>) -> Self {
        TypeRef::Named(name.into())
    }
}

/// A generated boolean expression
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub enum GenExpr {
    Ident(String),
    Not(Box<GenExpr>),
    Binary {
        op: BinaryOperator,
        lhs: Box<GenExpr>,
        rhs: Box<GenExpr>,
    },
}

impl GenExpr {
    pub fn ident(name: impl Into<String>) -> Self {
        GenExpr::Ident(name.into())
    }

    pub fn not(operand: GenExpr) -> Self {
        GenExpr::Not(Box::new(operand))
    }

    pub fn binary(op: BinaryOperator, lhs: GenExpr, rhs: GenExpr) -> Self {
        GenExpr::Binary {
            op,
            lhs: Box::new(lhs),
            rhs: Box::new(rhs),
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
pub enum BinaryOperator {
    LogicalAnd,
    LogicalOr,
    Equal,
}
