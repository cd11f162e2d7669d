//! Expression elements
//!
//!  Postconditions are written in a small boolean language: variable references, negation,
//!  and the binary operators `=`, `and` and `or`.
//!
//! Syntax:
//!     (variable (name <name>))
//!     (negation not (expression <expression>))
//!     ((expression <expression>) <operator> (expression <expression>))
//!
//!  Grouping is always explicit, so the tree shape is the evaluation order and there is no
//!  precedence or associativity. `a and b and c` has to be written as two nested binary
//!  nodes.
//!
//!  The operator is kept as the text written in the source. The parser only admits the
//!  three known operators, but lowering maps the text itself and reports any other.
//!
//!  [`Expression::Call`] is not produced by the parser. It models function application in
//!  postconditions, which lowering does not implement yet.

use super::super::traits::AstNode;
use serde::Serialize;
use std::fmt;

/// A boolean expression
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub enum Expression {
    Variable {
        name: String,
    },
    Negation {
        operand: Box<Expression>,
    },
    BinaryOp {
        op: Operator,
        lhs: Box<Expression>,
        rhs: Box<Expression>,
    },
    Call {
        function: String,
        arguments: Vec<Expression>,
    },
}

impl Expression {
    pub fn variable(name: impl Into<String>) -> Self {
        Expression::Variable { name: name.into() }
    }

    pub fn negation(operand: Expression) -> Self {
        Expression::Negation {
            operand: Box::new(operand),
        }
    }

    pub fn binary(op: impl Into<Operator>, lhs: Expression, rhs: Expression) -> Self {
        Expression::BinaryOp {
            op: op.into(),
            lhs: Box::new(lhs),
            rhs: Box::new(rhs),
        }
    }
}

/// A binary operator, as written in the source
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize)]
#[serde(transparent)]
pub struct Operator(String);

impl Operator {
    pub fn new(text: impl Into<String>) -> Self {
        Self(text.into())
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl From<&str> for Operator {
    fn from(text: &str) -> Self {
        Operator::new(text)
    }
}

impl From<String> for Operator {
    fn from(text: String) -> Self {
        Operator(text)
    }
}

impl fmt::Display for Operator {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

impl fmt::Display for Expression {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Expression::Variable { name } => write!(f, "{}", name),
            Expression::Negation { operand } => write!(f, "not ({})", operand),
            Expression::BinaryOp { op, lhs, rhs } => write!(f, "({}) {} ({})", lhs, op, rhs),
            Expression::Call {
                function,
                arguments,
            } => {
                write!(f, "{}(", function)?;
                for (i, arg) in arguments.iter().enumerate() {
                    if i > 0 {
                        write!(f, ", ")?;
                    }
                    write!(f, "{}", arg)?;
                }
                write!(f, ")")
            }
        }
    }
}

impl AstNode for Expression {
    fn node_type(&self) -> &'static str {
        match self {
            Expression::Variable { .. } => "variable",
            Expression::Negation { .. } => "negation",
            Expression::BinaryOp { .. } => "binary_expression",
            Expression::Call { .. } => "call",
        }
    }

    fn display_label(&self) -> String {
        match self {
            Expression::Variable { name } => name.clone(),
            Expression::Negation { .. } => "not".to_string(),
            Expression::BinaryOp { op, .. } => op.to_string(),
            Expression::Call { function, .. } => function.clone(),
        }
    }

    fn children(&self) -> Vec<&dyn AstNode> {
        match self {
            Expression::Variable { .. } => Vec::new(),
            Expression::Negation { operand } => vec![&**operand as &dyn AstNode],
            Expression::BinaryOp { lhs, rhs, .. } => vec![&**lhs as &dyn AstNode, &**rhs],
            Expression::Call { arguments, .. } => {
                arguments.iter().map(|a| a as &dyn AstNode).collect()
            }
        }
    }
}
