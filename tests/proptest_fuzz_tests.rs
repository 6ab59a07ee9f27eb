//! Property-based fuzzing tests for the scanner and parser
//!
//! These tests use proptest to generate random inputs and verify that:
//! 1. Neither stage panics on arbitrary input
//! 2. Generated well-formed programs parse with the expected shape
//! 3. Rendering a parsed program and parsing it again is stable

use proptest::prelude::*;
use tiny_sexpr::{parse, scan, Expression, Program, TokenKind};

// =============================================================================
// STRATEGY GENERATORS
// =============================================================================

/// Generate random strings that might break parsers
fn arbitrary_source_string() -> impl Strategy<Value = String> {
    prop::string::string_regex(r"[\x00-\x7F]{0,300}").unwrap()
}

/// Generate tokens that look like s-expression elements
fn sexp_token() -> impl Strategy<Value = String> {
    prop_oneof![
        Just("(".to_string()),
        Just(")".to_string()),
        "[0-9]{1,6}",
        r#""[a-zA-Z0-9 ]{0,12}""#,
        "[a-zA-Z]{1,8}",
    ]
}

/// Generate token soup that always scans but rarely parses
fn sexp_like_string() -> impl Strategy<Value = String> {
    prop::collection::vec(sexp_token(), 0..40).prop_map(|tokens| tokens.join(" "))
}

/// Generate well-formed expression trees
fn expression() -> impl Strategy<Value = Expression> {
    let leaf = prop_oneof![
        "[0-9]{1,6}".prop_map(Expression::number),
        "[a-zA-Z0-9 ]{0,12}".prop_map(Expression::string),
    ];
    leaf.prop_recursive(6, 64, 5, |inner| {
        ("[a-zA-Z]{1,8}", prop::collection::vec(inner, 0..5))
            .prop_map(|(name, params)| Expression::call(name, params))
    })
}

fn program() -> impl Strategy<Value = Program> {
    prop::collection::vec(expression(), 0..6).prop_map(|body| Program { body })
}

// =============================================================================
// SCANNER / PARSER FUZZ TESTS
// =============================================================================

proptest! {
    /// The scanner should never panic on arbitrary input
    #[test]
    fn scanner_never_panics(source in arbitrary_source_string()) {
        let _ = scan(&source);
    }

    /// Token soup always scans, and parsing it returns rather than panics
    #[test]
    fn parser_never_panics_on_token_soup(source in sexp_like_string()) {
        let tokens = scan(&source).unwrap();
        let _ = parse(&tokens);
    }

    /// Parser handles deeply nested calls
    #[test]
    fn parser_handles_deep_nesting(depth in 1usize..100) {
        let source = format!("{}1{}", "(f ".repeat(depth), ")".repeat(depth));
        let tokens = scan(&source).unwrap();
        let program = parse(&tokens).unwrap();
        prop_assert_eq!(program.len(), 1);
        prop_assert_eq!(program.body[0].depth(), depth);
    }

    /// Unbalanced parentheses scan fine but never parse
    #[test]
    fn parser_rejects_unbalanced_parens(opens in 0usize..30, closes in 0usize..30) {
        prop_assume!(opens != closes);
        let source = format!("{}1{}", "(f ".repeat(opens), ")".repeat(closes));
        let tokens = scan(&source).unwrap();
        prop_assert!(parse(&tokens).is_err());
    }

    /// Rendering a program and scanning/parsing it again yields the same tree
    #[test]
    fn display_round_trips(program in program()) {
        let source = program.to_string();
        let tokens = scan(&source).unwrap();
        let reparsed = parse(&tokens).unwrap();
        prop_assert_eq!(reparsed, program);
    }

    /// Accepted programs have one `(` token per `)` token
    #[test]
    fn paren_tokens_balance(program in program()) {
        let tokens = scan(&program.to_string()).unwrap();
        let opens = tokens.iter().filter(|t| t.is_open_paren()).count();
        let closes = tokens.iter().filter(|t| t.is_close_paren()).count();
        prop_assert_eq!(opens, closes);
    }

    /// Numbers and names never merge across whitespace or parens
    #[test]
    fn literals_stay_separate(
        number in "[0-9]{1,6}",
        name in "[a-zA-Z]{1,8}",
        sep in prop_oneof![Just(" "), Just("\n"), Just("\t"), Just("(")],
    ) {
        let source = format!("{number}{sep}{name}");
        let tokens = scan(&source).unwrap();
        let literals: Vec<_> = tokens
            .iter()
            .filter(|t| t.kind != TokenKind::Paren)
            .map(|t| (t.kind, t.value.clone()))
            .collect();
        prop_assert_eq!(
            literals,
            vec![(TokenKind::Number, number), (TokenKind::Name, name)]
        );
    }
}
