//! AST traits - Common interfaces for uniform node access
//!
//! The tree formatters walk the AST without knowing the concrete node types; every node
//! reports its type name, a short label and its children through [`AstNode`].

/// Uniform read-only view over an AST node
pub trait AstNode {
    /// Snake-case name of the node type, e.g. `pattern_type_pair`
    fn node_type(&self) -> &'static str;

    /// Short human label: the node's name, operator or type, empty when it has none
    fn display_label(&self) -> String;

    /// Child nodes in source order
    fn children(&self) -> Vec<&dyn AstNode> {
        Vec::new()
    }
}
