//! Document element
//!
//! The root of a parse. A document holds exactly one definition block, and the block holds
//! the function definitions in the order they appear in the source; lowering preserves
//! that order.
//!
//! Syntax:
//!     (sl_document
//!         (sl_definition_block
//!             (sl_function_definitions functions <function_definition>*)))

use super::super::traits::AstNode;
use super::definition::FunctionDefinition;
use serde::Serialize;

/// The root of a parsed sl source
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Document {
    pub block: DefinitionBlock,
}

impl Document {
    pub fn new(block: DefinitionBlock) -> Self {
        Self { block }
    }

    /// Shortcut to the function definitions of the document's block
    pub fn functions(&self) -> &[FunctionDefinition] {
        &self.block.functions
    }
}

/// Ordered function definitions
#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize)]
pub struct DefinitionBlock {
    pub functions: Vec<FunctionDefinition>,
}

impl DefinitionBlock {
    pub fn new(functions: Vec<FunctionDefinition>) -> Self {
        Self { functions }
    }
}

impl AstNode for Document {
    fn node_type(&self) -> &'static str {
        "document"
    }

    fn display_label(&self) -> String {
        String::new()
    }

    fn children(&self) -> Vec<&dyn AstNode> {
        vec![&self.block as &dyn AstNode]
    }
}

impl AstNode for DefinitionBlock {
    fn node_type(&self) -> &'static str {
        "definition_block"
    }

    fn display_label(&self) -> String {
        format!("{} function(s)", self.functions.len())
    }

    fn children(&self) -> Vec<&dyn AstNode> {
        self.functions.iter().map(|f| f as &dyn AstNode).collect()
    }
}
