use crate::error::SyntaxError;

/// Returns `true` if `lexeme` is a decimal literal: an optional leading `-`
/// followed by digits and at most one decimal point, with at least one digit.
///
/// Exponents, `inf`, `NaN` and a leading `+` are rejected even though
/// `f64::from_str` would accept them.
///
/// ## Example
/// ```
/// use rpncalc::util::num::is_number;
///
/// assert!(is_number("3.25"));
/// assert!(is_number("-.5"));
/// assert!(is_number("7."));
/// assert!(!is_number("1.2.3"));
/// assert!(!is_number("-"));
/// assert!(!is_number("1e5"));
/// ```
#[must_use]
pub fn is_number(lexeme: &str) -> bool {
    let digits = lexeme.strip_prefix('-').unwrap_or(lexeme);

    digits.chars().any(|c| c.is_ascii_digit())
    && digits.chars().all(|c| c.is_ascii_digit() || c == '.')
    && digits.chars().filter(|&c| c == '.').count() <= 1
}

/// Parses a decimal literal into an `f64`.
///
/// ## Errors
/// Returns [`SyntaxError::NumberParseFailure`] carrying the lexeme if it is
/// not accepted by [`is_number`], or if its value is too large to be
/// represented as a finite `f64`.
///
/// ## Example
/// ```
/// use rpncalc::{error::SyntaxError, util::num::parse_literal};
///
/// assert_eq!(parse_literal("-5").unwrap(), -5.0);
/// assert!(matches!(parse_literal("4..2"), Err(SyntaxError::NumberParseFailure { .. })));
///
/// // Too large for an `f64`.
/// let big = "9".repeat(400);
/// assert!(matches!(parse_literal(&big), Err(SyntaxError::NumberParseFailure { .. })));
/// ```
pub fn parse_literal(lexeme: &str) -> Result<f64, SyntaxError> {
    let failure = || SyntaxError::NumberParseFailure { lexeme: lexeme.to_string() };

    if !is_number(lexeme) {
        return Err(failure());
    }

    lexeme.parse::<f64>()
          .ok()
          .filter(|value| value.is_finite())
          .ok_or_else(failure)
}
