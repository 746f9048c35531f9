use crate::{
    error::{SyntaxError, Violation},
    pipeline::token::Token,
};

/// What the validator has just seen, which decides what may come next.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum State {
    /// Nothing yet; an operand or `(` is expected.
    Start,
    /// An operator; an operand or `(` is expected.
    AfterOperator,
    /// A `(`; an operand or `(` is expected.
    AfterOpenParen,
    /// A number or `)`; an operator or `)` is expected.
    AfterOperand,
}

/// Checks that a token sequence is a well-formed infix expression.
///
/// Scans once, left to right, tracking parenthesis depth and whether an
/// operand is expected next. The first broken rule is reported; there is no
/// recovery. Rejected shapes are:
/// - an empty sequence or an empty `()` group,
/// - an operator at the start of the expression or of a group,
/// - two operators in a row, or an operator right before `)` or at the end,
/// - two operands in a row, including an operand or `(` right after `)`,
/// - a `)` without a matching `(`, or a `(` that is never closed.
///
/// # Errors
/// Returns [`SyntaxError::InvalidExpression`] with the [`Violation`] found.
///
/// # Example
/// ```
/// use rpncalc::{
///     error::{SyntaxError, Violation},
///     pipeline::{lexer::tokenize, validator::validate},
/// };
///
/// assert!(validate(&tokenize("(3 + 4) * 2").unwrap()).is_ok());
/// assert_eq!(validate(&tokenize("3 4").unwrap()),
///            Err(SyntaxError::InvalidExpression(Violation::AdjacentOperands { position: 1 })));
/// ```
pub fn validate(tokens: &[Token]) -> Result<(), SyntaxError> {
    let mut depth = 0usize;
    let mut state = State::Start;

    for (position, token) in tokens.iter().enumerate() {
        state = match (token, state) {
            (Token::LeftParen, State::AfterOperand) | (Token::Number(_), State::AfterOperand) => {
                return Err(Violation::AdjacentOperands { position }.into());
            },
            (Token::LeftParen, _) => {
                depth += 1;
                State::AfterOpenParen
            },
            (Token::RightParen, _) if depth == 0 => {
                return Err(Violation::UnmatchedCloseParen { position }.into());
            },
            (Token::RightParen, State::AfterOpenParen) => {
                return Err(Violation::EmptyGroup { position }.into());
            },
            (Token::RightParen, State::AfterOperator) => {
                return Err(Violation::TrailingOperator { position: position - 1 }.into());
            },
            (Token::RightParen, _) => {
                depth -= 1;
                State::AfterOperand
            },
            (Token::Number(_), _) => State::AfterOperand,
            (Token::Operator(_), State::Start | State::AfterOpenParen) => {
                return Err(Violation::LeadingOperator { position }.into());
            },
            (Token::Operator(_), State::AfterOperator) => {
                return Err(Violation::AdjacentOperators { position }.into());
            },
            (Token::Operator(_), State::AfterOperand) => State::AfterOperator,
        };
    }

    match state {
        State::Start => Err(Violation::EmptyExpression.into()),
        State::AfterOperator => {
            Err(Violation::TrailingOperator { position: tokens.len() - 1 }.into())
        },
        _ if depth > 0 => Err(Violation::UnclosedParen { open: depth }.into()),
        _ => Ok(()),
    }
}

/// Returns `true` if [`validate`] accepts the token sequence.
#[must_use]
pub fn is_valid(tokens: &[Token]) -> bool {
    validate(tokens).is_ok()
}
