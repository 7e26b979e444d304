/// The evaluator module executes a token stream statement by statement.
///
/// There is no syntax tree: the evaluator walks the tokens with a cursor,
/// picks a statement handler from the kind of the current token, lets the
/// handler look a few tokens ahead to recognise the statement shape, and
/// performs its side effect immediately.
///
/// # Responsibilities
/// - Dispatches on the leading token kind and advances the cursor.
/// - Executes `print`, typed declarations, `func` headers and `stop`.
/// - Owns the variable environment and reports runtime errors.
pub mod evaluator;
/// The lexer module turns source text into classified tokens.
///
/// The lexer splits each line into words the way a shell does and assigns each
/// word a token kind. This is the first stage of interpretation.
///
/// # Responsibilities
/// - Splits words on whitespace and punctuation, keeping quoted runs whole.
/// - Classifies keywords, punctuation, literals and variable names.
/// - Records a warning for every word it cannot classify.
pub mod lexer;
/// Run modes that control diagnostic output.
pub mod run_mode;
/// Token kinds, tokens and the cursor-carrying token stream.
pub mod token;
/// The value module defines the runtime data types of variables.
///
/// # Responsibilities
/// - Defines the `Value` enum and the declared `Kind`s.
/// - Converts between kinds, reporting type and value errors.
/// - Implements the literal and input truthiness rules for booleans.
pub mod value;
