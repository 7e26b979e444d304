use std::str::FromStr;

use crate::error::ArgumentError;

/// How much intermediate state the interpreter shows while it runs.
///
/// Modes are ordered by ordinal, and each diagnostic is enabled from some mode
/// upwards. A mode never changes which statements run or what they do.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, PartialOrd, Ord, Hash)]
#[repr(u8)]
pub enum RunMode {
    /// Program output only.
    #[default]
    Normal           = 0,
    /// Shows the kind of every token before it is dispatched.
    Verbose          = 1,
    /// Additionally shows the environment once the program completes.
    Debug            = 2,
    /// Shows the environment before every token instead of at the end.
    StepThroughDebug = 3,
}

impl TryFrom<u8> for RunMode {
    type Error = ArgumentError;

    fn try_from(value: u8) -> Result<Self, Self::Error> {
        match value {
            0 => Ok(Self::Normal),
            1 => Ok(Self::Verbose),
            2 => Ok(Self::Debug),
            3 => Ok(Self::StepThroughDebug),
            _ => Err(ArgumentError::InvalidRunMode { value: value.to_string() }),
        }
    }
}

/// Parses a run mode from its ordinal, as given on the command line.
///
/// # Example
/// ```
/// use paper::interpreter::run_mode::RunMode;
///
/// assert_eq!("2".parse::<RunMode>().unwrap(), RunMode::Debug);
/// assert!("4".parse::<RunMode>().is_err());
/// assert!("debug".parse::<RunMode>().is_err());
/// ```
impl FromStr for RunMode {
    type Err = ArgumentError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        s.trim()
         .parse::<u8>()
         .map_err(|_| ArgumentError::InvalidRunMode { value: s.to_string() })
         .and_then(Self::try_from)
    }
}

/// Writes the ordinal, so that the output parses back with [`FromStr`].
impl std::fmt::Display for RunMode {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", *self as u8)
    }
}
