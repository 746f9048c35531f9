use rpncalc::{
    error::{SyntaxError, Violation},
    pipeline::{
        lexer::tokenize,
        token::{
            Operator::{self, Add, Mul, Sub},
            Token::{self, LeftParen as L, Number as N, RightParen as R},
        },
    },
};
use rstest::rstest;

const fn op(operator: Operator) -> Token {
    Token::Operator(operator)
}

fn tokens(src: &str) -> Vec<Token> {
    tokenize(src).unwrap_or_else(|e| panic!("Failed to tokenize {src:?}: {e}"))
}

#[test]
fn folds_leading_minus_into_number() {
    assert_eq!(tokens("-5 + 3"), vec![N(-5.0), op(Add), N(3.0)]);
}

#[rstest]
#[case("3-4", vec![N(3.0), op(Sub), N(4.0)])]
#[case("3 - -4", vec![N(3.0), op(Sub), N(-4.0)])]
#[case("2*-3", vec![N(2.0), op(Mul), N(-3.0)])]
#[case("(-2.5)", vec![L, N(-2.5), R])]
#[case("3)-4", vec![N(3.0), R, op(Sub), N(4.0)])]
fn minus_is_sign_only_in_operand_position(#[case] src: &str, #[case] expected: Vec<Token>) {
    assert_eq!(tokens(src), expected);
}

#[rstest]
#[case("- 5", vec![op(Sub), N(5.0)])]
#[case("-(3)", vec![op(Sub), L, N(3.0), R])]
#[case("--5", vec![op(Sub), N(-5.0)])]
#[case("-", vec![op(Sub)])]
fn detached_sign_stays_an_operator(#[case] src: &str, #[case] expected: Vec<Token>) {
    assert_eq!(tokens(src), expected);
}

#[test]
fn whitespace_is_skipped() {
    assert_eq!(tokens(" 12\t*\n3 "), vec![N(12.0), op(Mul), N(3.0)]);
    assert_eq!(tokens("3 4"), vec![N(3.0), N(4.0)]);
    assert!(tokens("").is_empty());
    assert!(tokens("   ").is_empty());
}

#[test]
fn decimal_forms() {
    assert_eq!(tokens(".5 + 5."), vec![N(0.5), op(Add), N(5.0)]);
    assert_eq!(tokens("0.125"), vec![N(0.125)]);
}

#[test]
fn every_operator_and_parenthesis() {
    let expected: Vec<Token> = "+-*/^".chars()
                                      .filter_map(Operator::from_symbol)
                                      .map(Token::Operator)
                                      .collect();
    assert_eq!(tokens("1 + 2 - 3 * 4 / 5 ^ 6").into_iter()
                                              .filter(|t| !t.is_number())
                                              .collect::<Vec<_>>(),
               expected);
    assert_eq!(tokens("()"), vec![L, R]);
}

#[rstest]
#[case("1.2.3", "1.2.3")]
#[case(". + 1", ".")]
#[case("2 * -1..2", "-1..2")]
fn malformed_numbers_fail_fast(#[case] src: &str, #[case] lexeme: &str) {
    assert_eq!(tokenize(src),
               Err(SyntaxError::NumberParseFailure { lexeme: lexeme.to_string() }));
}

#[test]
fn literals_beyond_f64_range_fail_fast() {
    let big = "9".repeat(400);
    assert_eq!(tokenize(&big),
               Err(SyntaxError::NumberParseFailure { lexeme: big.clone() }));

    let negative = format!("-{big}");
    assert_eq!(tokenize(&format!("1 + {negative}")),
               Err(SyntaxError::NumberParseFailure { lexeme: negative }));

    assert_eq!(tokens(&"9".repeat(300)), vec![N(1e300)]);
}

#[test]
fn unknown_characters_are_rejected() {
    assert_eq!(tokenize("3 + x"),
               Err(SyntaxError::InvalidExpression(Violation::UnexpectedCharacter { character: 'x',
                                                                                  position:  4, })));
    assert!(matches!(tokenize("2 % 3"),
                     Err(SyntaxError::InvalidExpression(Violation::UnexpectedCharacter { character: '%',
                                                                                        .. }))));
}
