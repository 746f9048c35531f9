/// Token types shared by every stage.
///
/// Defines [`Token`](token::Token) and [`Operator`](token::Operator),
/// including the operator precedence table used by the converter.
pub mod token;
/// Tokenizer: infix source text to tokens.
///
/// Splits the input into numbers, operators and parentheses, skipping
/// whitespace and folding unary minus into the following number.
pub mod lexer;
/// Validator: structural checks on an infix token sequence.
///
/// A single left-to-right scan that rejects unbalanced parentheses, empty
/// groups, adjacent operators or operands, and leading or trailing operators.
pub mod validator;
/// Converter: infix to postfix with the shunting-yard algorithm.
///
/// Also defines [`Postfix`](converter::Postfix), the postfix token sequence
/// and its textual form.
pub mod converter;
/// Evaluator: postfix tokens to a single value.
///
/// Runs the value stack and reports division by zero or a malformed postfix
/// sequence.
pub mod evaluator;
