#[derive(Debug, Clone, PartialEq, Eq)]
/// Represents the errors that abort lexing.
pub enum LexError {
    /// A quote character was opened but never closed on the same line.
    UnterminatedString {
        /// The source line where the error occurred.
        line: usize,
    },
}

impl std::fmt::Display for LexError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::UnterminatedString { line } => {
                write!(f, "Error on line {line}: Syntax error: No closing quotation.")
            },
        }
    }
}

impl std::error::Error for LexError {}

#[derive(Debug, Clone, PartialEq, Eq)]
/// Represents the non-fatal diagnostics recorded by the lexer.
///
/// A warning never stops lexing; the offending word is still emitted as a
/// token of kind [`TokenKind::None`](crate::interpreter::token::TokenKind).
pub enum LexWarning {
    /// A word matched no classification rule.
    UnrecognizedToken {
        /// The word as it appeared in the source.
        lexeme: String,
        /// The source line where the word was found.
        line:   usize,
    },
}

impl std::fmt::Display for LexWarning {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::UnrecognizedToken { lexeme, line } => {
                write!(f, "Warning on line {line}: Unrecognized token '{lexeme}'.")
            },
        }
    }
}
