//! Type elements
//!
//! Bindings carry a type. The grammar only has basic types, named by an identifier:
//!
//! Syntax:
//!     (type (basic_type <name>))
//!
//! Composite types are part of the model so that they can be represented, but nothing
//! parses them and lowering rejects them.

use serde::Serialize;
use std::fmt;

/// The type of a binding
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub enum Type {
    Basic(BasicType),
    Composite(CompositeType),
}

impl Type {
    pub fn basic(name: impl Into<String>) -> Self {
        Type::Basic(BasicType { name: name.into() })
    }
}

/// A type referenced by name, e.g. `Int`
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct BasicType {
    pub name: String,
}

/// A named record of typed fields
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct CompositeType {
    pub name: String,
    pub fields: Vec<(String, Type)>,
}

impl fmt::Display for Type {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Type::Basic(basic) => write!(f, "{}", basic.name),
            Type::Composite(composite) => {
                write!(f, "{} {{ ", composite.name)?;
                for (i, (name, ty)) in composite.fields.iter().enumerate() {
                    if i > 0 {
                        write!(f, ", ")?;
                    }
                    write!(f, "{}: {}", name, ty)?;
                }
                write!(f, " }}")
            }
        }
    }
}
