use crate::{
    error::{EvalError, StackFault},
    pipeline::token::{Operator, Token},
};

/// Evaluates a postfix token sequence with a value stack.
///
/// Numbers are pushed. Each operator pops its right operand, then its left
/// operand, and pushes `left op right`. Once the input is consumed exactly
/// one value must remain; it is the result.
///
/// # Parameters
/// - `postfix`: Tokens in postfix order, as produced by
///   [`convert`](crate::pipeline::converter::convert).
///
/// # Returns
/// The single value left on the stack.
///
/// # Errors
/// - [`EvalError::DivisionByZero`] if a `/` has a zero right operand.
/// - [`EvalError::MalformedPostfix`] if an operator finds fewer than two
///   values, a parenthesis is present, or the stack does not end with exactly
///   one value.
///
/// # Example
/// ```
/// use rpncalc::pipeline::{converter::Postfix, evaluator::evaluate};
///
/// let postfix: Postfix = "3 4 +".parse().unwrap();
/// assert_eq!(evaluate(postfix.tokens()), Ok(7.0));
/// ```
pub fn evaluate(postfix: &[Token]) -> Result<f64, EvalError> {
    let mut values: Vec<f64> = Vec::with_capacity(postfix.len());

    for (position, token) in postfix.iter().enumerate() {
        match *token {
            Token::Number(value) => values.push(value),
            Token::Operator(op) => {
                let (Some(right), Some(left)) = (values.pop(), values.pop()) else {
                    return Err(StackFault::Underflow { position }.into());
                };
                values.push(apply(op, left, right)?);
            },
            Token::LeftParen | Token::RightParen => {
                return Err(StackFault::Parenthesis { position }.into());
            },
        }
    }

    match values.as_slice() {
        [result] => Ok(*result),
        _ => Err(StackFault::Leftover { remaining: values.len() }.into()),
    }
}

/// Applies a binary operator to two operands.
///
/// Only division can fail. Everything else follows IEEE-754, so `^` with a
/// fractional exponent of a negative base gives `NaN` and overflow gives
/// infinity.
///
/// # Errors
/// Returns [`EvalError::DivisionByZero`] when `op` is `/` and `right` is
/// zero (of either sign).
///
/// # Example
/// ```
/// use rpncalc::{
///     error::EvalError,
///     pipeline::{evaluator::apply, token::Operator},
/// };
///
/// assert_eq!(apply(Operator::Pow, 2.0, 10.0), Ok(1024.0));
/// assert_eq!(apply(Operator::Div, 1.0, 0.0), Err(EvalError::DivisionByZero));
/// ```
#[allow(clippy::float_cmp)]
pub fn apply(op: Operator, left: f64, right: f64) -> Result<f64, EvalError> {
    Ok(match op {
        Operator::Add => left + right,
        Operator::Sub => left - right,
        Operator::Mul => left * right,
        Operator::Div => {
            if right == 0.0 {
                return Err(EvalError::DivisionByZero);
            }
            left / right
        },
        Operator::Pow => left.powf(right),
    })
}
