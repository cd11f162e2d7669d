//! Recursive descent parser for the sl grammar
//!
//! One function per production of [`crate::sl::grammar::PRODUCTIONS`]. Each function opens
//! its form, verifies the literal tag atoms, recurses into its sub-productions and closes
//! the form. The first mismatch is returned as a [`SyntaxError`]; nothing is recovered.

use super::cursor::TokenCursor;
use super::error::{Expected, SyntaxError};
use crate::sl::ast::{
    DefinitionBlock, Document, Expression, FunctionDefinition, IdentTypePair, ImplicitDefinition,
    Operator, PatternList, PatternTypePair, PostExpression, Type,
};
use crate::sl::grammar::kw;
use crate::sl::token::{Token, TokenSpan};
use log::debug;

type ParseResult<T> = Result<T, SyntaxError>;

/// Parse a complete token stream into a document
///
/// The stream must hold exactly one document; trailing tokens are an error.
pub fn parse(tokens: &[TokenSpan], source: &str) -> ParseResult<Document> {
    let mut cursor = TokenCursor::new(tokens, source);
    let doc = document(&mut cursor)?;
    cursor.expect_end()?;
    debug!("parsed {} function definition(s)", doc.functions().len());
    Ok(doc)
}

fn document(c: &mut TokenCursor) -> ParseResult<Document> {
    c.open_form(kw::SL_DOCUMENT)?;
    let block = definition_block(c)?;
    c.expect_close()?;
    Ok(Document::new(block))
}

fn definition_block(c: &mut TokenCursor) -> ParseResult<DefinitionBlock> {
    c.open_form(kw::SL_DEFINITION_BLOCK)?;
    let functions = function_definitions(c)?;
    c.expect_close()?;
    Ok(DefinitionBlock::new(functions))
}

fn function_definitions(c: &mut TokenCursor) -> ParseResult<Vec<FunctionDefinition>> {
    c.open_form(kw::SL_FUNCTION_DEFINITIONS)?;
    c.expect_keyword(kw::FUNCTIONS)?;
    let mut functions = Vec::new();
    while c.at_form(kw::FUNCTION_DEFINITION) {
        functions.push(function_definition(c)?);
    }
    c.expect_close()?;
    Ok(functions)
}

fn function_definition(c: &mut TokenCursor) -> ParseResult<FunctionDefinition> {
    c.open_form(kw::FUNCTION_DEFINITION)?;
    let def = implicit_definition(c)?;
    c.expect_close()?;
    Ok(FunctionDefinition::Implicit(def))
}

fn implicit_definition(c: &mut TokenCursor) -> ParseResult<ImplicitDefinition> {
    c.open_form(kw::IMPLICIT_FUNCTION_DEFINITION)?;
    let name = c.expect_ident()?;
    let parameters = parameter_types(c)?;
    let returns = identifier_type_pair_list(c)?;
    let postcondition = post_expression(c)?;
    c.expect_close()?;
    Ok(ImplicitDefinition {
        name,
        parameters,
        returns,
        postcondition,
    })
}

fn parameter_types(c: &mut TokenCursor) -> ParseResult<Vec<PatternTypePair>> {
    c.open_form(kw::PARAMETER_TYPES)?;
    let mut pairs = Vec::new();
    while c.at_form(kw::PATTERN_TYPE_PAIR_LIST) {
        pairs.push(pattern_type_pair(c)?);
    }
    c.expect_close()?;
    Ok(pairs)
}

fn pattern_type_pair(c: &mut TokenCursor) -> ParseResult<PatternTypePair> {
    c.open_form(kw::PATTERN_TYPE_PAIR_LIST)?;
    let patterns = pattern_list(c)?;
    c.expect_keyword(kw::COLON)?;
    let ty = type_(c)?;
    c.expect_close()?;
    Ok(PatternTypePair { patterns, ty })
}

fn pattern_list(c: &mut TokenCursor) -> ParseResult<PatternList> {
    c.open_form(kw::PATTERN_LIST)?;
    let mut names = vec![pattern(c)?];
    while c.at_form(kw::PATTERN) {
        names.push(pattern(c)?);
    }
    let patterns =
        PatternList::new(names).ok_or_else(|| c.error(Expected::Keyword(kw::PATTERN)))?;
    c.expect_close()?;
    Ok(patterns)
}

fn pattern(c: &mut TokenCursor) -> ParseResult<String> {
    c.open_form(kw::PATTERN)?;
    let name = c.expect_ident()?;
    c.expect_close()?;
    Ok(name)
}

fn identifier_type_pair_list(c: &mut TokenCursor) -> ParseResult<Vec<IdentTypePair>> {
    c.open_form(kw::IDENTIFIER_TYPE_PAIR_LIST)?;
    let mut pairs = Vec::new();
    while c.at_form(kw::IDENTIFIER_TYPE_PAIR) {
        pairs.push(identifier_type_pair(c)?);
    }
    c.expect_close()?;
    Ok(pairs)
}

fn identifier_type_pair(c: &mut TokenCursor) -> ParseResult<IdentTypePair> {
    c.open_form(kw::IDENTIFIER_TYPE_PAIR)?;
    let name = c.expect_ident()?;
    c.expect_keyword(kw::COLON)?;
    let ty = type_(c)?;
    c.expect_close()?;
    Ok(IdentTypePair { name, ty })
}

fn type_(c: &mut TokenCursor) -> ParseResult<Type> {
    c.open_form(kw::TYPE)?;
    let ty = basic_type(c)?;
    c.expect_close()?;
    Ok(ty)
}

fn basic_type(c: &mut TokenCursor) -> ParseResult<Type> {
    c.open_form(kw::BASIC_TYPE)?;
    let name = c.expect_ident()?;
    c.expect_close()?;
    Ok(Type::basic(name))
}

fn post_expression(c: &mut TokenCursor) -> ParseResult<PostExpression> {
    c.open_form(kw::POST_EXPRESSION)?;
    c.expect_keyword(kw::POST)?;
    let expression = expression(c)?;
    c.expect_close()?;
    Ok(PostExpression { expression })
}

/// Pick the expression alternative from the two-token window
fn expression(c: &mut TokenCursor) -> ParseResult<Expression> {
    match (c.peek(0), c.peek(1)) {
        (Some(Token::OpenParen), Some(t)) if t.is_atom_text(kw::VARIABLE) => variable(c),
        (Some(Token::OpenParen), Some(t)) if t.is_atom_text(kw::NEGATION) => negation(c),
        (Some(Token::OpenParen), Some(Token::OpenParen)) => binary_expression(c),
        (Some(Token::OpenParen), _) => Err(c.error_at(1, Expected::Expression)),
        _ => Err(c.error(Expected::Expression)),
    }
}

fn variable(c: &mut TokenCursor) -> ParseResult<Expression> {
    c.open_form(kw::VARIABLE)?;
    c.open_form(kw::NAME)?;
    let name = c.expect_ident()?;
    c.expect_close()?;
    c.expect_close()?;
    Ok(Expression::variable(name))
}

fn negation(c: &mut TokenCursor) -> ParseResult<Expression> {
    c.open_form(kw::NEGATION)?;
    c.expect_keyword(kw::NOT)?;
    let operand = operand(c)?;
    c.expect_close()?;
    Ok(Expression::negation(operand))
}

fn binary_expression(c: &mut TokenCursor) -> ParseResult<Expression> {
    c.expect_open()?;
    let lhs = operand(c)?;
    let op = c.expect_one_of(kw::OPERATORS, Expected::Operator)?;
    let rhs = operand(c)?;
    c.expect_close()?;
    Ok(Expression::binary(Operator::new(op), lhs, rhs))
}

fn operand(c: &mut TokenCursor) -> ParseResult<Expression> {
    c.open_form(kw::EXPRESSION)?;
    let expr = expression(c)?;
    c.expect_close()?;
    Ok(expr)
}
