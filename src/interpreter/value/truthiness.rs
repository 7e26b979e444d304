use crate::interpreter::token::TokenKind;

/// Input text that reads as `true`. Anything else reads as `false`.
pub const TRUTHY_INPUT: [&str; 4] = ["TRUE", "True", "T", "1"];

/// Truth value of a boolean literal keyword.
///
/// Only the [`TokenKind::True`] keyword is true. The spelling of the lexeme is
/// not consulted.
///
/// # Example
/// ```
/// use paper::interpreter::{token::TokenKind, value::truthiness::literal_truthiness};
///
/// assert!(literal_truthiness(TokenKind::True));
/// assert!(!literal_truthiness(TokenKind::False));
/// ```
#[must_use]
pub fn literal_truthiness(kind: TokenKind) -> bool {
    kind == TokenKind::True
}

/// Truth value of a line read from the interaction channel.
///
/// The raw text (without its line break) must be one of [`TRUTHY_INPUT`].
///
/// # Example
/// ```
/// use paper::interpreter::value::truthiness::input_truthiness;
///
/// assert!(input_truthiness("T"));
/// assert!(input_truthiness("1"));
/// assert!(!input_truthiness("yes"));
/// assert!(!input_truthiness("true"));
/// ```
#[must_use]
pub fn input_truthiness(text: &str) -> bool {
    TRUTHY_INPUT.contains(&text)
}
