use thiserror::Error;

/// Describes how a postfix sequence failed to reduce to a single value.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
pub enum StackFault {
    /// An operator found fewer than two values on the stack.
    #[error("operator at position {position} is missing an operand")]
    Underflow {
        /// Index of the operator in the postfix sequence.
        position: usize,
    },
    /// A parenthesis token reached the evaluator.
    #[error("parenthesis at position {position} cannot appear in postfix")]
    Parenthesis {
        /// Index of the parenthesis in the postfix sequence.
        position: usize,
    },
    /// The stack did not hold exactly one value once input was consumed.
    #[error("expected exactly one value after evaluation, found {remaining}")]
    Leftover {
        /// Number of values left on the stack.
        remaining: usize,
    },
}

/// Errors raised while evaluating a postfix sequence.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
pub enum EvalError {
    /// The right operand of `/` was zero.
    #[error("Division by zero")]
    DivisionByZero,
    /// The postfix sequence broke the value-stack contract.
    #[error("Malformed postfix expression: {0}")]
    MalformedPostfix(#[from] StackFault),
}
