use thiserror::Error;

/// Syntax errors.
///
/// Raised while turning source text into tokens and while checking that the
/// tokens form a well-formed infix expression. Also covers numeric lexemes
/// that fail to parse, whether they come from infix or postfix text.
pub mod syntax_error;
/// Evaluation errors.
///
/// Raised by the postfix evaluator: division by zero and postfix sequences
/// that do not reduce to exactly one value.
pub mod eval_error;

pub use eval_error::{EvalError, StackFault};
pub use syntax_error::{SyntaxError, Violation};

/// The four failure categories a caller can observe from the pipeline.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ErrorKind {
    /// The infix expression is structurally invalid.
    InvalidExpression,
    /// A `/` had a zero right operand.
    DivisionByZero,
    /// A postfix sequence did not reduce to exactly one value.
    MalformedPostfix,
    /// A numeric lexeme did not parse as a float.
    NumberParseFailure,
}

/// Any error produced by the evaluation pipeline.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum CalcError {
    /// Tokenizing, validating or reading postfix text failed.
    #[error(transparent)]
    Syntax(#[from] SyntaxError),
    /// Evaluating the postfix sequence failed.
    #[error(transparent)]
    Eval(#[from] EvalError),
}

impl CalcError {
    /// Returns the category of this error.
    ///
    /// # Example
    /// ```
    /// use rpncalc::{calculate, error::ErrorKind};
    ///
    /// let err = calculate("1 / 0").unwrap_err();
    /// assert_eq!(err.kind(), ErrorKind::DivisionByZero);
    /// ```
    #[must_use]
    pub const fn kind(&self) -> ErrorKind {
        match self {
            Self::Syntax(SyntaxError::InvalidExpression(_)) => ErrorKind::InvalidExpression,
            Self::Syntax(SyntaxError::NumberParseFailure { .. }) => ErrorKind::NumberParseFailure,
            Self::Eval(EvalError::DivisionByZero) => ErrorKind::DivisionByZero,
            Self::Eval(EvalError::MalformedPostfix(_)) => ErrorKind::MalformedPostfix,
        }
    }
}

impl From<Violation> for CalcError {
    fn from(violation: Violation) -> Self {
        Self::Syntax(SyntaxError::InvalidExpression(violation))
    }
}
