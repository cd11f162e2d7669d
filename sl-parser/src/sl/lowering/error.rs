//! Lowering errors

use std::fmt;

/// Why a node could not be lowered
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum LowerErrorKind {
    /// A type other than a basic, named type
    UnsupportedType(String),
    /// Operator text outside the operator table
    UnsupportedOperator(String),
    /// An expression shape with no lowering rule
    UnimplementedExpression(&'static str),
}

/// Where in a definition lowering failed
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum LowerSite {
    /// Parameter group, by index
    Parameter(usize),
    /// Return binding, by index
    Return(usize),
    Postcondition,
}

/// A failure to lower one definition, which aborts the whole document
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct LowerError {
    pub definition: String,
    pub site: LowerSite,
    pub kind: LowerErrorKind,
}

impl fmt::Display for LowerErrorKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            LowerErrorKind::UnsupportedType(ty) => write!(f, "unsupported type '{}'", ty),
            LowerErrorKind::UnsupportedOperator(op) => write!(f, "unsupported operator '{}'", op),
            LowerErrorKind::UnimplementedExpression(shape) => {
                write!(f, "unimplemented expression: {}", shape)
            }
        }
    }
}

impl fmt::Display for LowerSite {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            LowerSite::Parameter(i) => write!(f, "parameter group {}", i + 1),
            LowerSite::Return(i) => write!(f, "return {}", i + 1),
            LowerSite::Postcondition => write!(f, "postcondition"),
        }
    }
}

impl fmt::Display for LowerError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "function '{}', {}: {}",
            self.definition, self.site, self.kind
        )
    }
}

impl std::error::Error for LowerError {}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_display() {
        let err = LowerError {
            definition: "f".into(),
            site: LowerSite::Postcondition,
            kind: LowerErrorKind::UnsupportedOperator("xor".into()),
        };
        assert_eq!(
            err.to_string(),
            "function 'f', postcondition: unsupported operator 'xor'"
        );

        let err = LowerError {
            definition: "g".into(),
            site: LowerSite::Parameter(0),
            kind: LowerErrorKind::UnsupportedType("Point { x: Int }".into()),
        };
        assert_eq!(
            err.to_string(),
            "function 'g', parameter group 1: unsupported type 'Point { x: Int }'"
        );
    }
}
