use std::{
    collections::HashMap,
    io::{BufRead, Write},
};

use crate::{
    error::RuntimeError,
    interpreter::{
        evaluator::{environment::Environment, function::FunctionSignature},
        run_mode::RunMode,
        token::{Token, TokenKind, TokenStream},
        value::core::Value,
    },
};

/// Result type used by the evaluator.
///
/// All evaluation functions return either a value of type `T` or a
/// `RuntimeError` describing the failure.
pub type EvalResult<T> = Result<T, RuntimeError>;

/// How far the cursor moves after a statement handler has run.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum CursorAdvance {
    /// One token per iteration. The trailing tokens of a statement are
    /// revisited, and are inert because no handler starts with them.
    Single,
    /// Past every token the handler consumed.
    #[default]
    Statement,
}

/// What a single dispatch did.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Flow {
    /// A statement ran and consumed this many tokens, its leading token
    /// included.
    Executed(usize),
    /// No statement starts with the token under the cursor.
    Unhandled(TokenKind),
    /// `stop` was reached.
    Stop,
}

/// How a run ended.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Outcome {
    /// Every token was visited.
    Completed,
    /// A `stop` statement ended the run early.
    Stopped,
}

/// Executes a token stream statement by statement.
///
/// The interpreter owns the stream (and therefore the cursor), the variable
/// environment and the table of declared function signatures. Program output,
/// input prompts and run mode diagnostics are written to `output`; `input`
/// lines are read from `input`.
///
/// ## Usage
///
/// ```
/// use paper::interpreter::{
///     evaluator::core::{Interpreter, Outcome},
///     lexer::tokenize,
///     run_mode::RunMode,
/// };
///
/// let lexed = tokenize("string .a = \"hi\"\nprint .a").unwrap();
/// let mut output = Vec::new();
/// let mut interpreter = Interpreter::new(lexed.stream, RunMode::Normal, &b""[..], &mut output);
///
/// assert_eq!(interpreter.run().unwrap(), Outcome::Completed);
/// drop(interpreter);
/// assert_eq!(String::from_utf8(output).unwrap(), "hi\n");
/// ```
pub struct Interpreter<R, W> {
    pub(super) tokens:      TokenStream,
    pub(super) environment: Environment,
    pub(super) functions:   HashMap<String, FunctionSignature>,
    pub(super) input:       R,
    pub(super) output:      W,
    mode:                   RunMode,
    advance:                CursorAdvance,
}

impl<R: BufRead, W: Write> Interpreter<R, W> {
    /// Creates an interpreter positioned at the first token, with an empty
    /// environment and the default [`CursorAdvance::Statement`] strategy.
    #[must_use]
    pub fn new(tokens: TokenStream, mode: RunMode, input: R, output: W) -> Self {
        Self { tokens,
               environment: Environment::new(),
               functions: HashMap::new(),
               input,
               output,
               mode,
               advance: CursorAdvance::default() }
    }

    /// Replaces the cursor strategy.
    #[must_use]
    pub fn with_cursor_advance(mut self, advance: CursorAdvance) -> Self {
        self.advance = advance;
        self
    }

    /// The variables bound so far.
    #[must_use]
    pub const fn environment(&self) -> &Environment {
        &self.environment
    }

    /// The declared function signatures, by name.
    #[must_use]
    pub const fn functions(&self) -> &HashMap<String, FunctionSignature> {
        &self.functions
    }

    /// The token stream, including the current cursor position.
    #[must_use]
    pub const fn tokens(&self) -> &TokenStream {
        &self.tokens
    }

    /// Runs the program from the cursor to the end of the stream, or to the
    /// first `stop`.
    ///
    /// Before each dispatch the token kind is shown from
    /// [`RunMode::Verbose`] upwards, and the environment is shown in
    /// [`RunMode::StepThroughDebug`]. [`RunMode::Debug`] shows the environment
    /// once after the last token instead.
    ///
    /// # Errors
    /// Returns the first `RuntimeError` raised by a statement. Nothing after
    /// the failing statement runs.
    pub fn run(&mut self) -> EvalResult<Outcome> {
        while let Some(token) = self.tokens.current() {
            let kind = token.kind();
            let line = token.line();

            if self.mode >= RunMode::Verbose {
                self.emit(line, format_args!("{kind}\n"))?;
            }
            if self.mode >= RunMode::StepThroughDebug {
                self.show_environment(line)?;
            }

            if self.step()? == Flow::Stop {
                self.flush(line)?;
                return Ok(Outcome::Stopped);
            }
        }

        if self.mode >= RunMode::Debug && self.mode != RunMode::StepThroughDebug {
            self.show_environment(self.last_line())?;
        }
        self.flush(self.last_line())?;

        Ok(Outcome::Completed)
    }

    /// Dispatches the token under the cursor and moves the cursor on.
    ///
    /// Does nothing and returns [`Flow::Unhandled`] with
    /// [`TokenKind::None`] once the stream is exhausted.
    ///
    /// # Errors
    /// Propagates the error of the statement handler.
    pub fn step(&mut self) -> EvalResult<Flow> {
        let Some(kind) = self.tokens.current().map(Token::kind) else {
            return Ok(Flow::Unhandled(TokenKind::None));
        };

        let flow = self.dispatch(kind)?;
        match flow {
            Flow::Executed(width) => match self.advance {
                CursorAdvance::Single => self.tokens.advance(1),
                CursorAdvance::Statement => self.tokens.advance(width.max(1)),
            },
            Flow::Unhandled(_) => self.tokens.advance(1),
            Flow::Stop => {},
        }

        Ok(flow)
    }

    /// Selects the statement handler for a leading token kind.
    ///
    /// Kinds without a handler are reported as [`Flow::Unhandled`]; this is
    /// where `if`, `while`, `return` and the other reserved words will be
    /// wired in.
    fn dispatch(&mut self, kind: TokenKind) -> EvalResult<Flow> {
        match kind {
            TokenKind::Print => self.exec_print(),
            keyword if keyword.is_type_keyword() => self.exec_declaration(keyword),
            TokenKind::Func => self.exec_func(),
            TokenKind::Stop => Ok(Flow::Stop),
            _ => Ok(Flow::Unhandled(kind)),
        }
    }

    /// The token `offset` positions after the cursor.
    ///
    /// # Errors
    /// `RuntimeError::UnexpectedEndOfInput` if the stream is too short.
    pub(super) fn lookahead(&self, offset: usize) -> EvalResult<&Token> {
        self.tokens
            .peek(offset)
            .ok_or_else(|| RuntimeError::UnexpectedEndOfInput { line: self.last_line() })
    }

    /// The value a variable-name token refers to.
    ///
    /// # Errors
    /// `RuntimeError::UnknownVariable` if the name is not bound.
    pub(super) fn resolve(&self, token: &Token) -> EvalResult<&Value> {
        self.environment.lookup(variable_name(token), token.line())
    }

    /// Writes to the output channel.
    pub(super) fn emit(&mut self, line: usize, text: std::fmt::Arguments<'_>) -> EvalResult<()> {
        self.output
            .write_fmt(text)
            .map_err(|e| RuntimeError::Io { details: e.to_string(),
                                            line })
    }

    pub(super) fn flush(&mut self, line: usize) -> EvalResult<()> {
        self.output.flush().map_err(|e| RuntimeError::Io { details: e.to_string(),
                                                           line })
    }

    fn show_environment(&mut self, line: usize) -> EvalResult<()> {
        let mut dump = String::from("environment:\n");
        if self.environment.is_empty() {
            dump.push_str("    (empty)\n");
        }
        for (name, value) in self.environment.sorted() {
            dump.push_str(&format!("    .{name} = {}\n", value.repr()));
        }

        if !self.functions.is_empty() {
            let mut signatures: Vec<_> = self.functions.values().collect();
            signatures.sort_unstable_by(|a, b| a.name.cmp(&b.name));

            dump.push_str("functions:\n");
            for signature in signatures {
                dump.push_str(&format!("    {signature} on line {}\n", signature.line));
            }
        }

        self.emit(line, format_args!("{dump}"))
    }

    fn last_line(&self) -> usize {
        self.tokens.tokens().last().map_or(0, Token::line)
    }
}

/// The name a variable-name token refers to, without its leading dot.
#[must_use]
pub fn variable_name(token: &Token) -> &str {
    let lexeme = token.lexeme();
    lexeme.strip_prefix('.').unwrap_or(lexeme)
}
