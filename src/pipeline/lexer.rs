use logos::Logos;

use crate::{
    error::{SyntaxError, Violation},
    pipeline::token::{Operator, Token},
    util::num::parse_literal,
};

/// Raw lexical classes recognised in infix source text.
///
/// This is the character-level view; [`tokenize`] turns it into [`Token`]s,
/// folding unary minus into numbers on the way.
#[derive(Logos, Debug, PartialEq, Eq, Clone, Copy)]
enum Lexeme {
    /// A run of digits and decimal points, such as `3.14`, `.5` or `1.2.3`.
    /// Whether the run is a valid number is decided later.
    #[regex(r"[0-9.]+")]
    Digits,
    /// One of `+ - * / ^`.
    #[regex(r"[+\-*/^]", |lex| lex.slice().chars().next().and_then(Operator::from_symbol))]
    Operator(Operator),
    /// `(`
    #[token("(")]
    LParen,
    /// `)`
    #[token(")")]
    RParen,
    /// Spaces, tabs, line breaks and feeds.
    #[regex(r"[ \t\r\n\f]+", logos::skip)]
    Ignored,
}

/// Converts infix source text into a token sequence.
///
/// Whitespace separates tokens and is otherwise ignored. A `-` in operand
/// position (at the start, after an operator, or after `(`) becomes the sign
/// of the number written immediately after it, so `-5 + 3` yields
/// `Number(-5)`, `Operator(+)`, `Number(3)`. A sign not directly followed by
/// digits stays an [`Operator::Sub`] token and is left for the validator to
/// reject.
///
/// # Errors
/// - [`SyntaxError::NumberParseFailure`] if a digit run such as `1.2.3` is
///   not a valid number.
/// - [`SyntaxError::InvalidExpression`] with
///   [`Violation::UnexpectedCharacter`] for characters outside the grammar.
///
/// # Example
/// ```
/// use rpncalc::pipeline::{
///     lexer::tokenize,
///     token::{Operator, Token},
/// };
///
/// let tokens = tokenize("-5 + 3").unwrap();
/// assert_eq!(tokens,
///            vec![Token::Number(-5.0), Token::Operator(Operator::Add), Token::Number(3.0)]);
/// ```
pub fn tokenize(source: &str) -> Result<Vec<Token>, SyntaxError> {
    let mut tokens = Vec::new();
    // Byte offset just past a pending unary minus.
    let mut sign_end: Option<usize> = None;
    let mut lexer = Lexeme::lexer(source);

    while let Some(lexeme) = lexer.next() {
        let span = lexer.span();

        let Ok(lexeme) = lexeme else {
            let character = source.get(span.clone())
                                  .and_then(|s| s.chars().next())
                                  .unwrap_or(char::REPLACEMENT_CHARACTER);
            return Err(Violation::UnexpectedCharacter { character,
                                                        position: span.start }.into());
        };

        if lexeme == Lexeme::Digits && sign_end == Some(span.start) {
            sign_end = None;
            tokens.push(Token::Number(parse_literal(&source[span.start - 1..span.end])?));
            continue;
        }

        if sign_end.take().is_some() {
            tokens.push(Token::Operator(Operator::Sub));
        }

        match lexeme {
            Lexeme::Digits => tokens.push(Token::Number(parse_literal(lexer.slice())?)),
            Lexeme::Operator(Operator::Sub) if expects_operand(tokens.last()) => {
                sign_end = Some(span.end);
            },
            Lexeme::Operator(op) => tokens.push(Token::Operator(op)),
            Lexeme::LParen => tokens.push(Token::LeftParen),
            Lexeme::RParen => tokens.push(Token::RightParen),
            Lexeme::Ignored => {},
        }
    }

    if sign_end.is_some() {
        tokens.push(Token::Operator(Operator::Sub));
    }

    Ok(tokens)
}

/// Returns `true` when the next token should be an operand, which is where a
/// `-` acts as a sign rather than subtraction.
const fn expects_operand(previous: Option<&Token>) -> bool {
    matches!(previous, None | Some(Token::Operator(_) | Token::LeftParen))
}
