//! # rpncalc
//!
//! rpncalc evaluates arithmetic expressions written in infix notation.
//! Expressions are tokenized, checked for structural errors, converted to
//! postfix (Reverse Polish) order with the shunting-yard algorithm, and then
//! evaluated on a value stack. It supports `+ - * / ^`, parentheses, decimal
//! numbers and unary minus.

#![warn(
    clippy::redundant_clone,
    clippy::needless_pass_by_value,
    clippy::similar_names,
    clippy::large_enum_variant,
    clippy::string_lit_as_bytes,
    clippy::match_same_arms,
    clippy::cargo,
    clippy::nursery,
    clippy::perf,
    clippy::style,
    clippy::suspicious,
    clippy::correctness,
    clippy::complexity,
    clippy::pedantic,
    //missing_docs,
)]
#![allow(clippy::missing_errors_doc)]

use std::fmt;

use tracing::{debug, trace};

use crate::{
    error::CalcError,
    pipeline::{
        converter::{Postfix, convert},
        evaluator::evaluate,
        lexer::tokenize,
        validator::validate,
    },
};

/// Settings for the command-line front end.
///
/// Holds the log level and prompt switch, read from defaults, the
/// environment, and command-line flags in that order of precedence.
pub mod config;
/// Unified error types for every stage of the pipeline.
///
/// Syntax errors come from tokenizing, validating, or reading textual
/// postfix. Evaluation errors come from the value stack. [`CalcError`] wraps
/// both and classifies them into four kinds.
///
/// # Responsibilities
/// - Defines error enums for each failure mode.
/// - Names the first structural rule a rejected expression breaks.
/// - Supports integration with standard error handling traits.
pub mod error;
/// Structured logging for the command-line front end.
///
/// Installs a `tracing` subscriber that writes to stderr. The library itself
/// only emits low-level diagnostic events and never prints.
pub mod logging;
/// The evaluation pipeline.
///
/// This module holds the four stages and the token types they share. Each
/// stage is a pure function of its input; nothing is kept between calls.
///
/// # Responsibilities
/// - Tokenizes infix text, folding unary minus into numbers.
/// - Validates the structure of a token sequence.
/// - Converts infix tokens to postfix order.
/// - Evaluates postfix tokens to a single value.
pub mod pipeline;
/// Numeric literal helpers.
///
/// Holds the predicate that decides what counts as a number, shared by the
/// tokenizer and the postfix reader.
pub mod util;

/// The outcome of evaluating an infix expression: its postfix form and its
/// value.
#[derive(Debug, Clone, PartialEq)]
pub struct Evaluation {
    /// The expression in postfix order.
    pub postfix: Postfix,
    /// The computed result.
    pub value:   f64,
}

impl fmt::Display for Evaluation {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} = {}", self.postfix, self.value)
    }
}

/// Tokenizes, validates, and converts an infix expression to postfix.
///
/// # Errors
/// Returns a syntax error if the text contains an invalid number or an
/// unknown character, or if the expression is structurally invalid.
///
/// # Examples
/// ```
/// use rpncalc::to_postfix;
///
/// assert_eq!(to_postfix("3 + 4").unwrap().to_string(), "3 4 +");
/// assert!(to_postfix("(3 + 4").is_err());
/// ```
pub fn to_postfix(source: &str) -> Result<Postfix, CalcError> {
    let tokens = tokenize(source)?;
    trace!(count = tokens.len(), "tokenized expression");

    validate(&tokens)?;

    let postfix = convert(&tokens);
    debug!(%postfix, "converted to postfix");

    Ok(postfix)
}

/// Runs the whole pipeline on an infix expression.
///
/// This function tokenizes the source, validates the tokens, converts them
/// to postfix, and evaluates the result. The first failing stage stops the
/// run and its error is returned unchanged.
///
/// # Errors
/// Returns an error if any stage fails; see [`CalcError::kind`] for the
/// categories.
///
/// # Examples
/// ```
/// use rpncalc::evaluate_expression;
///
/// let evaluation = evaluate_expression("(3 + 4) * 2").unwrap();
/// assert_eq!(evaluation.postfix.to_string(), "3 4 + 2 *");
/// assert_eq!(evaluation.value, 14.0);
///
/// // Division by zero is reported, not turned into infinity.
/// assert!(evaluate_expression("5 / 0").is_err());
/// ```
pub fn evaluate_expression(source: &str) -> Result<Evaluation, CalcError> {
    let postfix = to_postfix(source)?;
    let value = evaluate(postfix.tokens())?;
    trace!(value, "evaluated postfix");

    Ok(Evaluation { postfix, value })
}

/// Evaluates an infix expression and returns only its value.
///
/// # Errors
/// Same as [`evaluate_expression`].
///
/// # Examples
/// ```
/// use rpncalc::calculate;
///
/// assert_eq!(calculate("3 + 4 * 2").unwrap(), 11.0);
/// assert_eq!(calculate("-5 + 3").unwrap(), -2.0);
/// ```
pub fn calculate(source: &str) -> Result<f64, CalcError> {
    evaluate_expression(source).map(|evaluation| evaluation.value)
}

/// Evaluates postfix text such as `"3 4 +"`.
///
/// # Errors
/// Returns [`error::SyntaxError::NumberParseFailure`] for an item that is
/// neither an operator nor a number, and an evaluation error if the sequence
/// does not reduce to one value or divides by zero.
///
/// # Examples
/// ```
/// use rpncalc::{error::ErrorKind, evaluate_postfix_str};
///
/// assert_eq!(evaluate_postfix_str("3 4 +").unwrap(), 7.0);
/// assert_eq!(evaluate_postfix_str("3 +").unwrap_err().kind(), ErrorKind::MalformedPostfix);
/// ```
pub fn evaluate_postfix_str(text: &str) -> Result<f64, CalcError> {
    let postfix: Postfix = text.parse()?;
    Ok(evaluate(postfix.tokens())?)
}
