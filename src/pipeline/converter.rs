use std::{fmt, str::FromStr};

use crate::{
    error::SyntaxError,
    pipeline::token::{Operator, Token},
    util::num::parse_literal,
};

/// A token sequence in postfix (Reverse Polish) order.
///
/// Produced by [`convert`]. Displays as its tokens joined by single spaces,
/// and parses back from that textual form.
///
/// # Example
/// ```
/// use rpncalc::pipeline::converter::Postfix;
///
/// let postfix: Postfix = "3 4 2 * +".parse().unwrap();
/// assert_eq!(postfix.len(), 5);
/// assert_eq!(postfix.to_string(), "3 4 2 * +");
/// ```
#[derive(Debug, Clone, PartialEq, Default)]
pub struct Postfix(Vec<Token>);

impl Postfix {
    /// The tokens in evaluation order.
    #[must_use]
    pub fn tokens(&self) -> &[Token] {
        &self.0
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.0.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }
}

impl fmt::Display for Postfix {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let mut tokens = self.0.iter();
        if let Some(first) = tokens.next() {
            write!(f, "{first}")?;
        }
        for token in tokens {
            write!(f, " {token}")?;
        }
        Ok(())
    }
}

impl FromStr for Postfix {
    type Err = SyntaxError;

    /// Reads whitespace-separated postfix text.
    ///
    /// Each item is an operator symbol, a parenthesis, or a decimal literal.
    /// Parentheses are accepted here so the evaluator can report them as a
    /// malformed sequence.
    fn from_str(text: &str) -> Result<Self, Self::Err> {
        text.split_whitespace()
            .map(read_item)
            .collect::<Result<Vec<_>, _>>()
            .map(Self)
    }
}

fn read_item(item: &str) -> Result<Token, SyntaxError> {
    let mut chars = item.chars();
    if let (Some(symbol), None) = (chars.next(), chars.next())
       && let Some(op) = Operator::from_symbol(symbol)
    {
        return Ok(Token::Operator(op));
    }

    match item {
        "(" => Ok(Token::LeftParen),
        ")" => Ok(Token::RightParen),
        _ => parse_literal(item).map(Token::Number),
    }
}

/// Converts an infix token sequence into postfix order with the
/// shunting-yard algorithm.
///
/// Numbers go straight to the output. Operators wait on a stack: before an
/// operator is pushed, every stacked operator with greater or equal
/// precedence is popped to the output, which groups equal-precedence
/// operators left to right. `(` is stacked and `)` pops back to its match.
/// Parentheses never reach the output.
///
/// The input is expected to have passed
/// [`validate`](crate::pipeline::validator::validate). Stray parentheses in
/// unvalidated input are dropped rather than reported.
///
/// # Example
/// ```
/// use rpncalc::pipeline::{converter::convert, lexer::tokenize};
///
/// let postfix = convert(&tokenize("(3 + 4) * 2").unwrap());
/// assert_eq!(postfix.to_string(), "3 4 + 2 *");
///
/// // `^` is left-associative.
/// let postfix = convert(&tokenize("2 ^ 3 ^ 2").unwrap());
/// assert_eq!(postfix.to_string(), "2 3 ^ 2 ^");
/// ```
#[must_use]
pub fn convert(tokens: &[Token]) -> Postfix {
    let mut output = Vec::with_capacity(tokens.len());
    let mut operators: Vec<Token> = Vec::new();

    for &token in tokens {
        match token {
            Token::Number(_) => output.push(token),
            Token::LeftParen => operators.push(token),
            Token::RightParen => {
                while let Some(top) = operators.pop() {
                    if top == Token::LeftParen {
                        break;
                    }
                    output.push(top);
                }
            },
            Token::Operator(op) => {
                while let Some(&Token::Operator(top)) = operators.last()
                      && top.precedence() >= op.precedence()
                {
                    output.push(Token::Operator(top));
                    operators.pop();
                }
                operators.push(token);
            },
        }
    }

    output.extend(operators.into_iter()
                           .rev()
                           .filter(|token| matches!(token, Token::Operator(_))));

    Postfix(output)
}
