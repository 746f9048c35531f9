use rpncalc::{
    error::{SyntaxError, Violation},
    pipeline::{
        lexer::tokenize,
        token::Token,
        validator::{is_valid, validate},
    },
};
use rstest::rstest;

fn tokens(src: &str) -> Vec<Token> {
    tokenize(src).unwrap_or_else(|e| panic!("Failed to tokenize {src:?}: {e}"))
}

#[rstest]
#[case("7")]
#[case("3 + 4")]
#[case("(3 + 4) * 2")]
#[case("((1))")]
#[case("-5 + 3")]
#[case("2 ^ 3 ^ 2")]
#[case("1 - -1")]
#[case("(1 + (2 * (3 - 4)))")]
#[case("(-1) / (.5)")]
fn accepts_well_formed_expressions(#[case] src: &str) {
    let tokens = tokens(src);
    assert_eq!(validate(&tokens), Ok(()), "{src:?} should be valid");
    assert!(is_valid(&tokens));
}

#[rstest]
#[case("", Violation::EmptyExpression)]
#[case("3 + + 4", Violation::AdjacentOperators { position: 2 })]
#[case("3 * / 4", Violation::AdjacentOperators { position: 2 })]
#[case("3 4", Violation::AdjacentOperands { position: 1 })]
#[case("3 (4)", Violation::AdjacentOperands { position: 1 })]
#[case("(3)(4)", Violation::AdjacentOperands { position: 3 })]
#[case("(3)4", Violation::AdjacentOperands { position: 3 })]
#[case("+ 3", Violation::LeadingOperator { position: 0 })]
#[case("- 5", Violation::LeadingOperator { position: 0 })]
#[case("(* 3)", Violation::LeadingOperator { position: 1 })]
#[case("3 +", Violation::TrailingOperator { position: 1 })]
#[case("(3 +)", Violation::TrailingOperator { position: 2 })]
#[case("()", Violation::EmptyGroup { position: 1 })]
#[case("3 + 4)", Violation::UnmatchedCloseParen { position: 3 })]
#[case(")3(", Violation::UnmatchedCloseParen { position: 0 })]
#[case("(3 + 4", Violation::UnclosedParen { open: 1 })]
#[case("((3)", Violation::UnclosedParen { open: 1 })]
#[case("((", Violation::UnclosedParen { open: 2 })]
#[case("3 * (", Violation::UnclosedParen { open: 1 })]
fn rejects_with_first_violation(#[case] src: &str, #[case] violation: Violation) {
    let tokens = tokens(src);
    assert_eq!(validate(&tokens), Err(SyntaxError::InvalidExpression(violation)));
    assert!(!is_valid(&tokens));
}

#[test]
fn missing_close_paren_is_always_invalid() {
    for src in ["(1", "(1 + 2", "((1 + 2) * 3", "2 * (3 - (4 + 5)"] {
        assert!(!is_valid(&tokens(src)), "{src:?} should be invalid");
    }
}

#[test]
fn close_before_open_is_always_invalid() {
    for src in [")(", "1) + (2", "(1)) + ((2)"] {
        assert!(!is_valid(&tokens(src)), "{src:?} should be invalid");
    }
}

#[test]
fn violation_messages_name_the_problem() {
    let err = validate(&tokens("3 + + 4")).unwrap_err();
    assert_eq!(err.to_string(), "Invalid expression: operator at token 2 follows another operator");

    let err = validate(&tokens("(3 + 4")).unwrap_err();
    assert_eq!(err.to_string(), "Invalid expression: 1 parenthesis group(s) left unclosed");
}
