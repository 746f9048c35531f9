use thiserror::Error;

/// The first structural rule an infix token sequence breaks.
///
/// Positions are zero-based indices into the token sequence, except for
/// [`Violation::UnexpectedCharacter`], which reports a byte offset into the
/// source text.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
pub enum Violation {
    /// The expression contains no tokens at all.
    #[error("the expression is empty")]
    EmptyExpression,
    /// An operator appears where the first operand was expected.
    #[error("operator at token {position} has no left operand")]
    LeadingOperator {
        /// Index of the offending operator.
        position: usize,
    },
    /// Two operators follow each other, or an operator directly follows `(`.
    #[error("operator at token {position} follows another operator")]
    AdjacentOperators {
        /// Index of the second operator.
        position: usize,
    },
    /// Two operands follow each other with no operator between them.
    #[error("operand at token {position} follows another operand")]
    AdjacentOperands {
        /// Index of the second operand.
        position: usize,
    },
    /// The expression, or a parenthesized group, ends on an operator.
    #[error("operator at token {position} has no right operand")]
    TrailingOperator {
        /// Index of the dangling operator.
        position: usize,
    },
    /// A `(` is immediately closed by `)`.
    #[error("empty parentheses at token {position}")]
    EmptyGroup {
        /// Index of the closing parenthesis.
        position: usize,
    },
    /// A `)` has no matching `(` before it.
    #[error("closing parenthesis at token {position} has no opening match")]
    UnmatchedCloseParen {
        /// Index of the closing parenthesis.
        position: usize,
    },
    /// The expression ends with parentheses still open.
    #[error("{open} parenthesis group(s) left unclosed")]
    UnclosedParen {
        /// Number of groups still open at the end of input.
        open: usize,
    },
    /// A character that is not part of the arithmetic grammar.
    #[error("unexpected character '{character}' at byte {position}")]
    UnexpectedCharacter {
        /// The character that was found.
        character: char,
        /// Byte offset of the character in the source.
        position:  usize,
    },
}

/// Errors raised before evaluation starts: while tokenizing, validating or
/// reading textual postfix.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum SyntaxError {
    /// The token sequence is not a well-formed infix expression.
    #[error("Invalid expression: {0}")]
    InvalidExpression(#[from] Violation),
    /// A numeric lexeme is not a valid floating-point literal.
    #[error("'{lexeme}' is not a valid number")]
    NumberParseFailure {
        /// The offending lexeme, sign included.
        lexeme: String,
    },
}
