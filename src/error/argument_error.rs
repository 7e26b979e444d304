#[derive(Debug, Clone, PartialEq, Eq)]
/// Represents all errors that can occur while validating invocation
/// arguments.
pub enum ArgumentError {
    /// The run mode ordinal is outside `0..=3`.
    InvalidRunMode {
        /// The text that was supplied.
        value: String,
    },
    /// The script file could not be read.
    UnreadableFile {
        /// The path that was given.
        path:    String,
        /// The underlying I/O failure.
        details: String,
    },
}

impl std::fmt::Display for ArgumentError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::InvalidRunMode { value } => write!(f,
                                                     "Argument error: Run mode {value} is invalid. Expected 0 (normal), 1 (verbose), 2 (debug) or 3 (step-through debug)."),
            Self::UnreadableFile { path, details } => write!(f,
                                                             "Argument error: Failed to read the input file '{path}'. Perhaps this file does not exist? ({details})"),
        }
    }
}

impl std::error::Error for ArgumentError {}
