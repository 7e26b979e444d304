#[derive(Debug, Clone, PartialEq, Eq)]
/// Represents all errors that can occur while statements execute.
///
/// Every variant is fatal: the interpreter stops at the first one and
/// performs no recovery.
pub enum RuntimeError {
    /// A statement had an unexpected token in a fixed grammar position.
    UnexpectedToken {
        /// What the statement needed at this position.
        expected: String,
        /// The lexeme that was found instead.
        found:    String,
        /// The source line where the error occurred.
        line:     usize,
    },
    /// A statement needed more tokens than the program contains.
    UnexpectedEndOfInput {
        /// The source line of the last token that was read.
        line: usize,
    },
    /// A `func` header was malformed.
    InvalidFunctionHeader {
        /// Details about what is wrong with the header.
        details: String,
        /// The source line where the error occurred.
        line:    usize,
    },
    /// A value could not be converted to the declared kind.
    TypeError {
        /// Details about the failed conversion.
        details: String,
        /// The source line where the error occurred.
        line:    usize,
    },
    /// A value lies outside the domain its kind allows.
    ValueError {
        /// Details about the violated domain.
        details: String,
        /// The source line where the error occurred.
        line:    usize,
    },
    /// Tried to use an undefined variable.
    UnknownVariable {
        /// The name of the variable, without its leading dot.
        name: String,
        /// The source line where the error occurred.
        line: usize,
    },
    /// Reading from or writing to the interaction channel failed.
    Io {
        /// Details about the failure.
        details: String,
        /// The source line where the error occurred.
        line:    usize,
    },
}

impl RuntimeError {
    /// Returns the name of the error family this error belongs to.
    ///
    /// # Example
    /// ```
    /// use paper::error::RuntimeError;
    ///
    /// let err = RuntimeError::UnknownVariable { name: "x".to_string(),
    ///                                           line: 3 };
    ///
    /// assert_eq!(err.kind(), "NameError");
    /// ```
    #[must_use]
    pub const fn kind(&self) -> &'static str {
        match self {
            Self::UnexpectedToken { .. }
            | Self::UnexpectedEndOfInput { .. }
            | Self::InvalidFunctionHeader { .. } => "SyntaxError",
            Self::TypeError { .. } => "TypeError",
            Self::ValueError { .. } => "ValueError",
            Self::UnknownVariable { .. } => "NameError",
            Self::Io { .. } => "IOError",
        }
    }

    /// Returns the source line the error was raised on.
    #[must_use]
    pub const fn line(&self) -> usize {
        match self {
            Self::UnexpectedToken { line, .. }
            | Self::UnexpectedEndOfInput { line }
            | Self::InvalidFunctionHeader { line, .. }
            | Self::TypeError { line, .. }
            | Self::ValueError { line, .. }
            | Self::UnknownVariable { line, .. }
            | Self::Io { line, .. } => *line,
        }
    }
}

impl std::fmt::Display for RuntimeError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::UnexpectedToken { expected,
                                    found,
                                    line, } => write!(f,
                                                      "Error on line {line}: Syntax error: Expected {expected}, found '{found}'."),
            Self::UnexpectedEndOfInput { line } => {
                write!(f, "Error on line {line}: Syntax error: Unexpected end of input.")
            },
            Self::InvalidFunctionHeader { details, line } => write!(f,
                                                                    "Error on line {line}: Syntax error: Invalid function header: {details}. Example: func .add ( int : .a int : .b )"),
            Self::TypeError { details, line } => {
                write!(f, "Error on line {line}: Type error: {details}.")
            },
            Self::ValueError { details, line } => {
                write!(f, "Error on line {line}: Value error: {details}.")
            },
            Self::UnknownVariable { name, line } => {
                write!(f, "Error on line {line}: Name error: Unknown variable '.{name}'.")
            },
            Self::Io { details, line } => {
                write!(f, "Error on line {line}: I/O error: {details}.")
            },
        }
    }
}

impl std::error::Error for RuntimeError {}
