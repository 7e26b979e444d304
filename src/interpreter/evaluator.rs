/// Core execution loop.
///
/// Contains the `Interpreter` itself: cursor handling, dispatch on the leading
/// token kind, run mode diagnostics and the shared lookahead helpers.
pub mod core;

/// Variable storage.
///
/// The flat name to value map shared by every statement of a program.
pub mod environment;

/// Function declarations.
///
/// Validates `func` headers and records their signatures. Bodies are skipped.
pub mod function;

/// Statement handlers.
///
/// Implements `print` and the typed declarations, including their `input`
/// and copy forms.
pub mod statement;
