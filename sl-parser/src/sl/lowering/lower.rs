//! The lowering rules
//!
//! Each definition is lowered independently by [`lower_definition`], a pure function of the
//! definition and the options. [`lower_document`] folds it over the block in source order
//! and stops at the first error.

use super::declarations::{
    BinaryOperator, CheckFunction, Declaration, Field, FunctionStub, GenExpr, Statement, TypeRef,
};
use super::error::{LowerError, LowerErrorKind, LowerSite};
use crate::sl::ast::{
    Document, Expression, FunctionDefinition, IdentTypePair, ImplicitDefinition, Operator,
    PatternTypePair, Type,
};
use crate::sl::grammar::kw;
use log::{debug, trace};

/// Naming choices for the generated checks
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct LoweringOptions {
    /// Prepended to a function's name to name its check
    pub check_prefix: String,
    /// Type of the check's single unnamed result
    pub bool_type: String,
}

impl Default for LoweringOptions {
    fn default() -> Self {
        Self {
            check_prefix: "POST_".to_string(),
            bool_type: "Bool".to_string(),
        }
    }
}

/// Operator text to generated operator
const OPERATOR_TABLE: &[(&str, BinaryOperator)] = &[
    (kw::AND, BinaryOperator::LogicalAnd),
    (kw::OR, BinaryOperator::LogicalOr),
    (kw::EQUAL, BinaryOperator::Equal),
];

type KindResult<T> = Result<T, LowerErrorKind>;

/// Lower every definition of a document: a signature then a check, in source order
pub fn lower_document(
    doc: &Document,
    options: &LoweringOptions,
) -> Result<Vec<Declaration>, LowerError> {
    let mut declarations = Vec::with_capacity(doc.functions().len() * 2);
    for function in doc.functions() {
        let (signature, check) = match function {
            FunctionDefinition::Implicit(def) => lower_definition(def, options)?,
        };
        declarations.push(Declaration::Signature(signature));
        declarations.push(Declaration::Check(check));
    }
    debug!("lowered {} declaration(s)", declarations.len());
    Ok(declarations)
}

/// Lower one implicit definition into its signature and its check
pub fn lower_definition(
    def: &ImplicitDefinition,
    options: &LoweringOptions,
) -> Result<(FunctionStub, CheckFunction), LowerError> {
    let fail = |site: LowerSite| {
        let definition = def.name.clone();
        move |kind: LowerErrorKind| LowerError {
            definition,
            site,
            kind,
        }
    };

    let params = def
        .parameters
        .iter()
        .enumerate()
        .map(|(i, pair)| lower_parameter(pair).map_err(fail(LowerSite::Parameter(i))))
        .collect::<Result<Vec<_>, _>>()?;
    let results = def
        .returns
        .iter()
        .enumerate()
        .map(|(i, pair)| lower_return(pair).map_err(fail(LowerSite::Return(i))))
        .collect::<Result<Vec<_>, _>>()?;
    let condition =
        lower_expression(&def.postcondition.expression).map_err(fail(LowerSite::Postcondition))?;

    let check = CheckFunction {
        stub: FunctionStub {
            name: format!("{}{}", options.check_prefix, def.name),
            params: params.iter().chain(results.iter()).cloned().collect(),
            results: vec![Field::unnamed(TypeRef::named(options.bool_type.clone()))],
        },
        body: vec![Statement::Return(condition)],
    };
    let signature = FunctionStub {
        name: def.name.clone(),
        params,
        results,
    };
    trace!("lowered definition '{}'", def.name);
    Ok((signature, check))
}

/// A parameter group stays one field, keeping all of its names
fn lower_parameter(pair: &PatternTypePair) -> KindResult<Field> {
    Ok(Field::named(
        pair.patterns.names().to_vec(),
        lower_type(&pair.ty)?,
    ))
}

fn lower_return(pair: &IdentTypePair) -> KindResult<Field> {
    Ok(Field::named(vec![pair.name.clone()], lower_type(&pair.ty)?))
}

pub fn lower_type(ty: &Type) -> KindResult<TypeRef> {
    match ty {
        Type::Basic(basic) => Ok(TypeRef::named(basic.name.clone())),
        Type::Composite(_) => Err(LowerErrorKind::UnsupportedType(ty.to_string())),
    }
}

pub fn lower_operator(op: &Operator) -> KindResult<BinaryOperator> {
    OPERATOR_TABLE
        .iter()
        .find(|(text, _)| *text == op.as_str())
        .map(|(_, lowered)| *lowered)
        .ok_or_else(|| LowerErrorKind::UnsupportedOperator(op.to_string()))
}

/// Lower a postcondition expression
///
/// Names are carried over as they are; nothing checks that they are bound. For a binary
/// node the right operand is lowered before the left one, so when both sides fail the error
/// reported is the right one's.
pub fn lower_expression(expr: &Expression) -> KindResult<GenExpr> {
    match expr {
        Expression::Variable { name } => Ok(GenExpr::ident(name.clone())),
        Expression::Negation { operand } => Ok(GenExpr::not(lower_expression(operand)?)),
        Expression::BinaryOp { op, lhs, rhs } => {
            let rhs = lower_expression(rhs)?;
            let lhs = lower_expression(lhs)?;
            Ok(GenExpr::binary(lower_operator(op)?, lhs, rhs))
        }
        Expression::Call { .. } => Err(LowerErrorKind::UnimplementedExpression("function call")),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::sl::ast::{CompositeType, PatternList, PostExpression};
    use crate::sl::testing::factories::{document, implicit, param_group, returns};
    use rstest::rstest;

    fn var(name: &str) -> Expression {
        Expression::variable(name)
    }

    #[test]
    fn test_single_equality() {
        let def = implicit(
            "f",
            vec![param_group(&["x"], "Int")],
            vec![returns("r", "Int")],
            Expression::binary("=", var("x"), var("r")),
        );
        let (signature, check) = lower_definition(&def, &LoweringOptions::default()).unwrap();

        assert_eq!(
            signature,
            FunctionStub {
                name: "f".into(),
                params: vec![Field::named(vec!["x".into()], TypeRef::named("Int"))],
                results: vec![Field::named(vec!["r".into()], TypeRef::named("Int"))],
            }
        );
        assert_eq!(check.stub.name, "POST_f");
        assert_eq!(
            check.stub.params,
            vec![
                Field::named(vec!["x".into()], TypeRef::named("Int")),
                Field::named(vec!["r".into()], TypeRef::named("Int")),
            ]
        );
        assert_eq!(check.stub.results, vec![Field::unnamed(TypeRef::named("Bool"))]);
        assert_eq!(
            check.body,
            vec![Statement::Return(GenExpr::binary(
                BinaryOperator::Equal,
                GenExpr::ident("x"),
                GenExpr::ident("r"),
            ))]
        );
    }

    #[test]
    fn test_grouped_parameters_stay_one_field() {
        let def = implicit(
            "max",
            vec![param_group(&["x", "y"], "Int")],
            vec![returns("r", "Int")],
            var("r"),
        );
        let (signature, check) = lower_definition(&def, &LoweringOptions::default()).unwrap();
        assert_eq!(signature.params.len(), 1);
        assert_eq!(signature.params[0].names, vec!["x", "y"]);
        assert_eq!(check.stub.params.len(), 2);
    }

    #[test]
    fn test_check_params_are_params_then_results() {
        let def = implicit(
            "swap",
            vec![param_group(&["a"], "Int"), param_group(&["b"], "Nat")],
            vec![returns("c", "Int"), returns("d", "Nat")],
            var("a"),
        );
        let (signature, check) = lower_definition(&def, &LoweringOptions::default()).unwrap();
        let expected: Vec<Field> = signature
            .params
            .iter()
            .chain(signature.results.iter())
            .cloned()
            .collect();
        assert_eq!(check.stub.params, expected);
    }

    #[test]
    fn test_options_name_the_check() {
        let def = implicit("f", vec![], vec![], var("x"));
        let options = LoweringOptions {
            check_prefix: "check_".into(),
            bool_type: "bool".into(),
        };
        let (_, check) = lower_definition(&def, &options).unwrap();
        assert_eq!(check.stub.name, "check_f");
        assert_eq!(check.stub.results, vec![Field::unnamed(TypeRef::named("bool"))]);
    }

    #[rstest]
    #[case("=", BinaryOperator::Equal)]
    #[case("and", BinaryOperator::LogicalAnd)]
    #[case("or", BinaryOperator::LogicalOr)]
    fn test_operator_table(#[case] text: &str, #[case] expected: BinaryOperator) {
        assert_eq!(lower_operator(&Operator::from(text)), Ok(expected));
    }

    #[rstest]
    #[case("xor")]
    #[case("==")]
    #[case("AND")]
    #[case("")]
    fn test_unknown_operator_is_named(#[case] text: &str) {
        let expr = Expression::binary(text, var("a"), var("b"));
        assert_eq!(
            lower_expression(&expr),
            Err(LowerErrorKind::UnsupportedOperator(text.to_string()))
        );
    }

    #[test]
    fn test_negation_of_unbound_name() {
        assert_eq!(
            lower_expression(&Expression::negation(var("x"))),
            Ok(GenExpr::not(GenExpr::ident("x")))
        );
    }

    #[test]
    fn test_right_operand_is_lowered_first() {
        let call = Expression::Call {
            function: "len".into(),
            arguments: vec![var("s")],
        };
        let expr = Expression::binary("and", Expression::binary("xor", var("a"), var("b")), call);
        assert_eq!(
            lower_expression(&expr),
            Err(LowerErrorKind::UnimplementedExpression("function call"))
        );
    }

    #[test]
    fn test_basic_and_composite_types() {
        assert_eq!(lower_type(&Type::basic("Int")), Ok(TypeRef::named("Int")));
        let point = Type::Composite(CompositeType {
            name: "Point".into(),
            fields: vec![("x".into(), Type::basic("Int"))],
        });
        assert_eq!(
            lower_type(&point),
            Err(LowerErrorKind::UnsupportedType("Point { x: Int }".into()))
        );
    }

    #[test]
    fn test_composite_parameter_reports_site() {
        let def = ImplicitDefinition {
            name: "g".into(),
            parameters: vec![
                param_group(&["a"], "Int"),
                PatternTypePair {
                    patterns: PatternList::new(vec!["p".into()]).unwrap(),
                    ty: Type::Composite(CompositeType {
                        name: "Point".into(),
                        fields: vec![],
                    }),
                },
            ],
            returns: vec![],
            postcondition: PostExpression {
                expression: var("p"),
            },
        };
        let err = lower_definition(&def, &LoweringOptions::default()).unwrap_err();
        assert_eq!(err.definition, "g");
        assert_eq!(err.site, LowerSite::Parameter(1));
        assert!(matches!(err.kind, LowerErrorKind::UnsupportedType(_)));
    }

    #[test]
    fn test_document_order_and_count() {
        let doc = document(vec![
            implicit("a", vec![], vec![returns("r", "Int")], var("r")),
            implicit("b", vec![], vec![], var("x")),
            implicit("c", vec![], vec![], var("y")),
        ]);
        let decls = lower_document(&doc, &LoweringOptions::default()).unwrap();
        let names: Vec<&str> = decls.iter().map(Declaration::name).collect();
        assert_eq!(names, vec!["a", "POST_a", "b", "POST_b", "c", "POST_c"]);
        for pair in decls.chunks(2) {
            assert!(matches!(pair[0], Declaration::Signature(_)));
            assert!(matches!(pair[1], Declaration::Check(_)));
        }
    }

    #[test]
    fn test_failure_produces_no_partial_output() {
        let doc = document(vec![
            implicit("ok", vec![], vec![], var("x")),
            implicit(
                "bad",
                vec![],
                vec![],
                Expression::binary("implies", var("a"), var("b")),
            ),
        ]);
        let err = lower_document(&doc, &LoweringOptions::default()).unwrap_err();
        assert_eq!(err.definition, "bad");
        assert_eq!(err.site, LowerSite::Postcondition);
    }

    #[test]
    fn test_empty_document() {
        let doc = document(vec![]);
        assert!(lower_document(&doc, &LoweringOptions::default())
            .unwrap()
            .is_empty());
    }
}
