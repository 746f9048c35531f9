/// Numeric literal helpers.
///
/// This module holds the one predicate that decides whether a lexeme is a
/// number. The tokenizer uses it for infix input and the postfix reader uses
/// it for textual postfix, so both accept exactly the same literals.
pub mod num;
