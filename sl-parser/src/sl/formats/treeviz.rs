//! Treeviz formatter
//!
//! One line per node, nesting drawn with box connectors:
//!
//!     ⧉ document
//!     └─ ☰ definition_block 1 function(s)
//!       └─ ƒ function_definition f
//!         └─ ≔ implicit_function_definition f
//!           ├─ ∷ pattern_type_pair x : Int
//!           ├─ ∷ identifier_type_pair r : Int
//!           └─ ⊢ post_expression
//!             └─ ⊙ binary_expression =
//!               ├─ ◦ variable x
//!               └─ ◦ variable r
//!
//! Works on anything implementing [`AstNode`], so the same output is used for the typed AST
//! and the generic S-expression tree. Labels are truncated to 40 characters.

use crate::sl::ast::traits::AstNode;

const MAX_LABEL: usize = 40;

fn truncate(s: &str, max_chars: usize) -> String {
    if s.chars().count() > max_chars {
        let mut truncated = s.chars().take(max_chars).collect::<String>();
        truncated.push('…');
        truncated
    } else {
        s.to_string()
    }
}

fn get_icon(node_type: &str) -> &'static str {
    match node_type {
        "document" => "⧉",
        "definition_block" => "☰",
        "function_definition" => "ƒ",
        "implicit_function_definition" => "≔",
        "pattern_type_pair" | "identifier_type_pair" => "∷",
        "post_expression" => "⊢",
        "binary_expression" => "⊙",
        "negation" => "¬",
        "variable" | "atom" => "◦",
        "list" => "( )",
        _ => "○",
    }
}

fn node_line(node: &dyn AstNode) -> String {
    let label = node.display_label();
    if label.is_empty() {
        format!("{} {}", get_icon(node.node_type()), node.node_type())
    } else {
        format!(
            "{} {} {}",
            get_icon(node.node_type()),
            node.node_type(),
            truncate(&label, MAX_LABEL)
        )
    }
}

fn format_node(node: &dyn AstNode, prefix: &str, is_last: bool, output: &mut String) {
    let connector = if is_last { "└─" } else { "├─" };
    output.push_str(&format!("{}{} {}\n", prefix, connector, node_line(node)));

    let child_prefix = format!("{}{}", prefix, if is_last { "  " } else { "│ " });
    let children = node.children();
    let count = children.len();
    for (i, child) in children.into_iter().enumerate() {
        format_node(child, &child_prefix, i + 1 == count, output);
    }
}

/// Render a tree rooted at `root`
pub fn to_treeviz_str(root: &dyn AstNode) -> String {
    let mut output = format!("{}\n", node_line(root));
    let children = root.children();
    let count = children.len();
    for (i, child) in children.into_iter().enumerate() {
        format_node(child, "", i + 1 == count, &mut output);
    }
    output
}
