//! # paper
//!
//! paper is the front end of Paper, a small line-oriented scripting language.
//! It splits source text into classified tokens and executes them directly,
//! statement by statement, against a flat store of typed variables.

#![warn(
    clippy::redundant_clone,
    clippy::needless_pass_by_value,
    clippy::similar_names,
    clippy::large_enum_variant,
    clippy::string_lit_as_bytes,
    clippy::match_same_arms,
    clippy::cargo,
    clippy::nursery,
    clippy::perf,
    clippy::style,
    clippy::suspicious,
    clippy::correctness,
    clippy::complexity,
    clippy::pedantic,
    //missing_docs,
)]
#![allow(clippy::missing_errors_doc)]

use std::io::{self, BufRead, Write};

use crate::interpreter::{
    evaluator::core::{Interpreter, Outcome},
    lexer::tokenize,
    run_mode::RunMode,
};

/// Provides error and warning types for every phase.
///
/// This module defines the errors raised at the command-line boundary, during
/// lexing and during execution, plus the warnings the lexer records. Each
/// error carries the source line it refers to and formats as a user-facing
/// message.
///
/// # Responsibilities
/// - Defines error enums for all failure modes (arguments, lexer, runtime).
/// - Groups runtime errors into the families `SyntaxError`, `TypeError`,
///   `ValueError`, `NameError` and `IOError`.
/// - Implements `Display` and `std::error::Error` for reporting.
pub mod error;
/// Orchestrates lexing and execution.
///
/// # Responsibilities
/// - Turns source text into a token stream.
/// - Executes the stream against a variable environment.
/// - Defines the value model and the run modes.
pub mod interpreter;
/// General utilities for safe numeric conversion.
///
/// This module provides conversion routines between `i64` and `f64` that fail
/// instead of silently losing data.
pub mod util;

/// Lexes and runs a program against the given interaction channel.
///
/// Lexer warnings are written to standard error and do not stop the run.
/// Program output, prompts and run mode diagnostics go to `output`; every
/// `input` reads one line from `input`.
///
/// # Errors
/// Returns the lexing error or the first runtime error. Statements after a
/// failing one are never executed.
///
/// # Examples
/// ```
/// use paper::{interpreter::{evaluator::core::Outcome, run_mode::RunMode}, run_with_io};
///
/// let mut output = Vec::new();
/// let outcome = run_with_io("int .n = 5\nstring .m = .n\nprint .m",
///                           RunMode::Normal,
///                           &b""[..],
///                           &mut output).unwrap();
///
/// assert_eq!(outcome, Outcome::Completed);
/// assert_eq!(output, b"5\n");
///
/// // Conversion failures are fatal.
/// let res = run_with_io("int .bad = \"notanumber\"", RunMode::Normal, &b""[..], std::io::sink());
/// assert!(res.is_err());
/// ```
pub fn run_with_io<R: BufRead, W: Write>(source: &str,
                                         mode: RunMode,
                                         input: R,
                                         output: W)
                                         -> Result<Outcome, Box<dyn std::error::Error>> {
    let lexed = tokenize(source)?;
    for warning in &lexed.warnings {
        eprintln!("{warning}");
    }

    let mut interpreter = Interpreter::new(lexed.stream, mode, input, output);
    Ok(interpreter.run()?)
}

/// Lexes and runs a program against standard input and standard output.
///
/// # Errors
/// See [`run_with_io`].
pub fn run_source(source: &str, mode: RunMode) -> Result<Outcome, Box<dyn std::error::Error>> {
    let stdin = io::stdin();
    let stdout = io::stdout();

    run_with_io(source, mode, stdin.lock(), stdout.lock())
}
