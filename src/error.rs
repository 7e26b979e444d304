/// Invocation errors.
///
/// Raised at the command-line boundary, before any source text is lexed:
/// an unknown run mode or a script file that cannot be read.
pub mod argument_error;
/// Lexing errors and warnings.
///
/// Contains the fatal errors the lexer can raise (such as an unbalanced
/// quote) together with the non-fatal warnings it records while classifying
/// words.
pub mod lex_error;
/// Runtime errors.
///
/// Contains all error types that can be raised while statements execute:
/// malformed statement shapes, failed type conversions, undefined variables
/// and failures of the interaction channel.
pub mod runtime_error;

pub use argument_error::ArgumentError;
pub use lex_error::{LexError, LexWarning};
pub use runtime_error::RuntimeError;
