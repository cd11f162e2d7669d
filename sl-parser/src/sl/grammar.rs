//! Grammar description for the sl format
//!
//!     The structural parser is hand-written, one function per production. This module holds
//!     what those functions agree on: the literal keyword atoms ([`kw`]) and a description of
//!     every production ([`PRODUCTIONS`]), which [`ebnf`] renders for documentation and
//!     debugging. Rendering the grammar consumes no input.
//!
//! Form of a production
//!
//!     Every production is a parenthesized, keyword-tagged form:
//!
//!         "(" <tag keyword> <more keywords>* <sub-productions> ")"
//!
//!     The only exception is `Expression`, whose three alternatives are told apart by the
//!     first two tokens (see [`crate::sl::parsing`]).

/// Literal keyword atoms matched verbatim by the parser
pub mod kw {
    pub const SL_DOCUMENT: &str = "sl_document";
    pub const SL_DEFINITION_BLOCK: &str = "sl_definition_block";
    pub const SL_FUNCTION_DEFINITIONS: &str = "sl_function_definitions";
    pub const FUNCTIONS: &str = "functions";
    pub const FUNCTION_DEFINITION: &str = "function_definition";
    pub const IMPLICIT_FUNCTION_DEFINITION: &str = "implicit_function_definition";
    pub const PARAMETER_TYPES: &str = "parameter_types";
    pub const PATTERN_TYPE_PAIR_LIST: &str = "pattern_type_pair_list";
    pub const PATTERN_LIST: &str = "pattern_list";
    pub const PATTERN: &str = "pattern";
    pub const IDENTIFIER_TYPE_PAIR_LIST: &str = "identifier_type_pair_list";
    pub const IDENTIFIER_TYPE_PAIR: &str = "identifier_type_pair";
    pub const TYPE: &str = "type";
    pub const BASIC_TYPE: &str = "basic_type";
    pub const POST_EXPRESSION: &str = "post_expression";
    pub const POST: &str = "post";
    pub const EXPRESSION: &str = "expression";
    pub const VARIABLE: &str = "variable";
    pub const NAME: &str = "name";
    pub const NEGATION: &str = "negation";
    pub const NOT: &str = "not";
    pub const COLON: &str = ":";

    pub const EQUAL: &str = "=";
    pub const AND: &str = "and";
    pub const OR: &str = "or";

    /// The binary operators, in the order the grammar lists them
    pub const OPERATORS: &[&str] = &[EQUAL, AND, OR];

    pub const ALL: &[&str] = &[
        SL_DOCUMENT,
        SL_DEFINITION_BLOCK,
        SL_FUNCTION_DEFINITIONS,
        FUNCTIONS,
        FUNCTION_DEFINITION,
        IMPLICIT_FUNCTION_DEFINITION,
        PARAMETER_TYPES,
        PATTERN_TYPE_PAIR_LIST,
        PATTERN_LIST,
        PATTERN,
        IDENTIFIER_TYPE_PAIR_LIST,
        IDENTIFIER_TYPE_PAIR,
        TYPE,
        BASIC_TYPE,
        POST_EXPRESSION,
        POST,
        EXPRESSION,
        VARIABLE,
        NAME,
        NEGATION,
        NOT,
        COLON,
        EQUAL,
        AND,
        OR,
    ];
}

/// One element on the right-hand side of a production
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Term {
    Open,
    Close,
    Keyword(&'static str),
    Ident,
    Rule(&'static str),
    ZeroOrMore(&'static str),
    OneOrMore(&'static str),
    Choice(&'static [Term]),
}

/// A named production
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Production {
    pub name: &'static str,
    pub terms: &'static [Term],
}

use Term::*;

/// Every production of the structural grammar, root first
pub static PRODUCTIONS: &[Production] = &[
    Production {
        name: "Document",
        terms: &[Open, Keyword(kw::SL_DOCUMENT), Rule("DefinitionBlock"), Close],
    },
    Production {
        name: "DefinitionBlock",
        terms: &[
            Open,
            Keyword(kw::SL_DEFINITION_BLOCK),
            Rule("FunctionDefinitions"),
            Close,
        ],
    },
    Production {
        name: "FunctionDefinitions",
        terms: &[
            Open,
            Keyword(kw::SL_FUNCTION_DEFINITIONS),
            Keyword(kw::FUNCTIONS),
            ZeroOrMore("FunctionDefinition"),
            Close,
        ],
    },
    Production {
        name: "FunctionDefinition",
        terms: &[
            Open,
            Keyword(kw::FUNCTION_DEFINITION),
            Rule("ImplicitDefinition"),
            Close,
        ],
    },
    Production {
        name: "ImplicitDefinition",
        terms: &[
            Open,
            Keyword(kw::IMPLICIT_FUNCTION_DEFINITION),
            Ident,
            Rule("ParameterTypes"),
            Rule("IdentifierTypePairList"),
            Rule("PostExpression"),
            Close,
        ],
    },
    Production {
        name: "ParameterTypes",
        terms: &[
            Open,
            Keyword(kw::PARAMETER_TYPES),
            ZeroOrMore("PatternTypePairList"),
            Close,
        ],
    },
    Production {
        name: "PatternTypePairList",
        terms: &[
            Open,
            Keyword(kw::PATTERN_TYPE_PAIR_LIST),
            Rule("PatternList"),
            Keyword(kw::COLON),
            Rule("Type"),
            Close,
        ],
    },
    Production {
        name: "PatternList",
        terms: &[Open, Keyword(kw::PATTERN_LIST), OneOrMore("Pattern"), Close],
    },
    Production {
        name: "Pattern",
        terms: &[Open, Keyword(kw::PATTERN), Ident, Close],
    },
    Production {
        name: "IdentifierTypePairList",
        terms: &[
            Open,
            Keyword(kw::IDENTIFIER_TYPE_PAIR_LIST),
            ZeroOrMore("IdentifierTypePair"),
            Close,
        ],
    },
    Production {
        name: "IdentifierTypePair",
        terms: &[
            Open,
            Keyword(kw::IDENTIFIER_TYPE_PAIR),
            Ident,
            Keyword(kw::COLON),
            Rule("Type"),
            Close,
        ],
    },
    Production {
        name: "Type",
        terms: &[Open, Keyword(kw::TYPE), Rule("BasicType"), Close],
    },
    Production {
        name: "BasicType",
        terms: &[Open, Keyword(kw::BASIC_TYPE), Ident, Close],
    },
    Production {
        name: "PostExpression",
        terms: &[
            Open,
            Keyword(kw::POST_EXPRESSION),
            Keyword(kw::POST),
            Rule("Expression"),
            Close,
        ],
    },
    Production {
        name: "Expression",
        terms: &[Choice(&[
            Rule("Variable"),
            Rule("Negation"),
            Rule("BinaryExpression"),
        ])],
    },
    Production {
        name: "Variable",
        terms: &[
            Open,
            Keyword(kw::VARIABLE),
            Open,
            Keyword(kw::NAME),
            Ident,
            Close,
            Close,
        ],
    },
    Production {
        name: "Negation",
        terms: &[
            Open,
            Keyword(kw::NEGATION),
            Keyword(kw::NOT),
            Rule("Operand"),
            Close,
        ],
    },
    Production {
        name: "BinaryExpression",
        terms: &[
            Open,
            Rule("Operand"),
            Rule("Operator"),
            Rule("Operand"),
            Close,
        ],
    },
    Production {
        name: "Operand",
        terms: &[Open, Keyword(kw::EXPRESSION), Rule("Expression"), Close],
    },
    Production {
        name: "Operator",
        terms: &[Choice(&[
            Keyword(kw::EQUAL),
            Keyword(kw::AND),
            Keyword(kw::OR),
        ])],
    },
];

fn render_term(term: &Term) -> String {
    match term {
        Open => "\"(\"".to_string(),
        Close => "\")\"".to_string(),
        Keyword(text) => format!("\"{}\"", text),
        Ident => "<ident>".to_string(),
        Rule(name) => name.to_string(),
        ZeroOrMore(name) => format!("{}*", name),
        OneOrMore(name) => format!("{}+", name),
        Choice(alternatives) => alternatives
            .iter()
            .map(render_term)
            .collect::<Vec<_>>()
            .join(" | "),
    }
}

/// Render one production as an EBNF line
pub fn render_production(production: &Production) -> String {
    let terms = production
        .terms
        .iter()
        .map(render_term)
        .collect::<Vec<_>>()
        .join(" ");
    format!("{} = {} .", production.name, terms)
}

/// Render the whole grammar as EBNF, one production per line
pub fn ebnf() -> String {
    PRODUCTIONS
        .iter()
        .map(render_production)
        .collect::<Vec<_>>()
        .join("\n")
}
