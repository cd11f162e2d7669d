//! Source text renderer for generated declarations
//!
//! Renders the output of lowering in a Rust-like surface syntax:
//!
//!     fn f(x: Int) -> (r: Int);
//!
//!     fn POST_f(x: Int, r: Int) -> Bool {
//!         return x == r;
//!     }
//!
//! Fields keep their grouping (`x, y: Int`). A binary operand that is itself binary is
//! parenthesized, as is the operand of a negation when it is binary, so the printed text
//! has the tree's shape without relying on precedence.

use crate::sl::lowering::{
    BinaryOperator, CheckFunction, Declaration, Field, FunctionStub, GenExpr, Statement, TypeRef,
};

/// Layout choices for [`render`]
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RenderOptions {
    /// One level of indentation inside function bodies
    pub indent: String,
    /// Blank lines printed between two declarations
    pub blank_lines_between: usize,
}

impl Default for RenderOptions {
    fn default() -> Self {
        Self {
            indent: "    ".to_string(),
            blank_lines_between: 1,
        }
    }
}

/// Render declarations in order, each ending with a newline
pub fn render(declarations: &[Declaration], options: &RenderOptions) -> String {
    let separator = "\n".repeat(options.blank_lines_between);
    declarations
        .iter()
        .map(|decl| render_declaration(decl, options))
        .collect::<Vec<_>>()
        .join(&separator)
}

pub fn render_declaration(declaration: &Declaration, options: &RenderOptions) -> String {
    match declaration {
        Declaration::Signature(stub) => format!("{};\n", render_header(stub)),
        Declaration::Check(check) => render_check(check, options),
    }
}

fn render_check(check: &CheckFunction, options: &RenderOptions) -> String {
    let mut out = format!("{} {{\n", render_header(&check.stub));
    for statement in &check.body {
        out.push_str(&options.indent);
        out.push_str(&render_statement(statement));
        out.push('\n');
    }
    out.push_str("}\n");
    out
}

fn render_header(stub: &FunctionStub) -> String {
    let params = render_fields(&stub.params);
    match stub.results.as_slice() {
        [] => format!("fn {}({})", stub.name, params),
        [single] if single.names.is_empty() => {
            format!("fn {}({}) -> {}", stub.name, params, render_type(&single.ty))
        }
        results => format!(
            "fn {}({}) -> ({})",
            stub.name,
            params,
            render_fields(results)
        ),
    }
}

fn render_fields(fields: &[Field]) -> String {
    fields
        .iter()
        .map(render_field)
        .collect::<Vec<_>>()
        .join(", ")
}

fn render_field(field: &Field) -> String {
    if field.names.is_empty() {
        render_type(&field.ty)
    } else {
        format!("{}: {}", field.names.join(", "), render_type(&field.ty))
    }
}

fn render_type(ty: &TypeRef) -> String {
    match ty {
        TypeRef::Named(name) => name.clone(),
    }
}

fn render_statement(statement: &Statement) -> String {
    match statement {
        Statement::Return(expr) => format!("return {};", render_expr(expr)),
    }
}

fn operator_symbol(op: BinaryOperator) -> &'static str {
    match op {
        BinaryOperator::LogicalAnd => "&&",
        BinaryOperator::LogicalOr => "||",
        BinaryOperator::Equal => "==",
    }
}

/// Render an expression as it appears inside a larger one
fn render_operand(expr: &GenExpr) -> String {
    match expr {
        GenExpr::Binary { .. } => format!("({})", render_expr(expr)),
        _ => render_expr(expr),
    }
}

pub fn render_expr(expr: &GenExpr) -> String {
    match expr {
        GenExpr::Ident(name) => name.clone(),
        GenExpr::Not(operand) => format!("!{}", render_operand(operand)),
        GenExpr::Binary { op, lhs, rhs } => format!(
            "{} {} {}",
            render_operand(lhs),
            operator_symbol(*op),
            render_operand(rhs)
        ),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn int(names: &[&str]) -> Field {
        Field::named(
            names.iter().map(|n| n.to_string()).collect(),
            TypeRef::named("Int"),
        )
    }

    #[test]
    fn test_signature() {
        let stub = FunctionStub {
            name: "max".into(),
            params: vec![int(&["x", "y"])],
            results: vec![int(&["r"])],
        };
        assert_eq!(
            render_declaration(&Declaration::Signature(stub), &RenderOptions::default()),
            "fn max(x, y: Int) -> (r: Int);\n"
        );
    }

    #[test]
    fn test_signature_without_results() {
        let stub = FunctionStub {
            name: "g".into(),
            params: vec![],
            results: vec![],
        };
        assert_eq!(
            render_declaration(&Declaration::Signature(stub), &RenderOptions::default()),
            "fn g();\n"
        );
    }

    #[test]
    fn test_check_uses_indent_option() {
        let check = CheckFunction {
            stub: FunctionStub {
                name: "POST_f".into(),
                params: vec![int(&["x"]), int(&["r"])],
                results: vec![Field::unnamed(TypeRef::named("Bool"))],
            },
            body: vec![Statement::Return(GenExpr::binary(
                BinaryOperator::Equal,
                GenExpr::ident("x"),
                GenExpr::ident("r"),
            ))],
        };
        let options = RenderOptions {
            indent: "\t".into(),
            blank_lines_between: 0,
        };
        assert_eq!(
            render_declaration(&Declaration::Check(check), &options),
            "fn POST_f(x: Int, r: Int) -> Bool {\n\treturn x == r;\n}\n"
        );
    }

    #[test]
    fn test_nested_operands_are_parenthesized() {
        let expr = GenExpr::binary(
            BinaryOperator::LogicalOr,
            GenExpr::binary(
                BinaryOperator::Equal,
                GenExpr::ident("r"),
                GenExpr::ident("x"),
            ),
            GenExpr::not(GenExpr::binary(
                BinaryOperator::LogicalAnd,
                GenExpr::ident("a"),
                GenExpr::ident("b"),
            )),
        );
        assert_eq!(render_expr(&expr), "(r == x) || !(a && b)");
        assert_eq!(render_expr(&GenExpr::not(GenExpr::ident("b"))), "!b");
    }

    #[test]
    fn test_blank_lines_between() {
        let stub = |name: &str| {
            Declaration::Signature(FunctionStub {
                name: name.into(),
                params: vec![],
                results: vec![],
            })
        };
        let decls = vec![stub("a"), stub("b")];
        assert_eq!(
            render(&decls, &RenderOptions::default()),
            "fn a();\n\nfn b();\n"
        );
        let tight = RenderOptions {
            blank_lines_between: 0,
            ..RenderOptions::default()
        };
        assert_eq!(render(&decls, &tight), "fn a();\nfn b();\n");
        assert_eq!(render(&[], &tight), "");
    }
}
