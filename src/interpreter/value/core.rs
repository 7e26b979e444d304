use std::num::IntErrorKind;

use ordered_float::OrderedFloat;

use crate::{
    error::RuntimeError,
    interpreter::{
        evaluator::core::EvalResult,
        token::{Token, TokenKind},
        value::truthiness::literal_truthiness,
    },
    util::num::{f64_to_i64_checked, i64_to_f64_checked},
};

/// The declared type of a variable.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Kind {
    /// `string`
    String,
    /// `int`
    Int,
    /// `float`
    Float,
    /// `bool`
    Bool,
}

impl Kind {
    /// Maps a declaration keyword to the kind it declares.
    ///
    /// # Example
    /// ```
    /// use paper::interpreter::{token::TokenKind, value::core::Kind};
    ///
    /// assert_eq!(Kind::from_token(TokenKind::Float), Some(Kind::Float));
    /// assert_eq!(Kind::from_token(TokenKind::Print), None);
    /// ```
    #[must_use]
    pub const fn from_token(kind: TokenKind) -> Option<Self> {
        match kind {
            TokenKind::String => Some(Self::String),
            TokenKind::Int => Some(Self::Int),
            TokenKind::Float => Some(Self::Float),
            TokenKind::Bool => Some(Self::Bool),
            _ => None,
        }
    }

    /// The keyword that declares this kind.
    #[must_use]
    pub const fn keyword(self) -> &'static str {
        match self {
            Self::String => "string",
            Self::Int => "int",
            Self::Float => "float",
            Self::Bool => "bool",
        }
    }
}

impl std::fmt::Display for Kind {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let name = match self {
            Self::String => "String",
            Self::Int => "Int",
            Self::Float => "Float",
            Self::Bool => "Bool",
        };
        write!(f, "{name}")
    }
}

/// Represents the value bound to a variable.
///
/// Floats are wrapped in [`OrderedFloat`] so that values compare and hash
/// like the other variants.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub enum Value {
    /// Text, stored without quotes.
    String(String),
    /// A 64 bit signed integer.
    Int(i64),
    /// A double precision float.
    Float(OrderedFloat<f64>),
    /// `true` or `false`.
    Bool(bool),
}

impl From<&str> for Value {
    fn from(v: &str) -> Self {
        Self::String(v.to_string())
    }
}

impl From<String> for Value {
    fn from(v: String) -> Self {
        Self::String(v)
    }
}

impl From<i64> for Value {
    fn from(v: i64) -> Self {
        Self::Int(v)
    }
}

impl From<f64> for Value {
    fn from(v: f64) -> Self {
        Self::Float(OrderedFloat(v))
    }
}

impl From<bool> for Value {
    fn from(v: bool) -> Self {
        Self::Bool(v)
    }
}

impl Value {
    /// The kind tag of this value.
    #[must_use]
    pub const fn kind(&self) -> Kind {
        match self {
            Self::String(_) => Kind::String,
            Self::Int(_) => Kind::Int,
            Self::Float(_) => Kind::Float,
            Self::Bool(_) => Kind::Bool,
        }
    }

    /// Formats the value together with its kind, as in `Int(5)` or
    /// `String("hi")`.
    #[must_use]
    pub fn repr(&self) -> String {
        match self {
            Self::String(s) => format!("{}({s:?})", self.kind()),
            _ => format!("{}({self})", self.kind()),
        }
    }

    /// Builds the value a literal token denotes, in the literal's own kind.
    ///
    /// String literals lose exactly one quote character at each end. Boolean
    /// keywords follow [`literal_truthiness`].
    ///
    /// # Parameters
    /// - `token`: A token for which [`TokenKind::is_literal`] holds.
    ///
    /// # Errors
    /// - `TypeError` if the text does not parse (such as a lone `.`), or if the
    ///   token is not a literal.
    /// - `ValueError` if an integer literal does not fit in 64 bits.
    ///
    /// # Example
    /// ```
    /// use paper::interpreter::{
    ///     token::{Token, TokenKind},
    ///     value::core::Value,
    /// };
    ///
    /// let token = Token::new(TokenKind::StringData, "\"hi\"", 1);
    /// assert_eq!(Value::from_literal(&token).unwrap(), Value::from("hi"));
    ///
    /// let token = Token::new(TokenKind::FloatData, "2.50", 1);
    /// assert_eq!(Value::from_literal(&token).unwrap(), Value::from(2.5));
    /// ```
    pub fn from_literal(token: &Token) -> EvalResult<Self> {
        let line = token.line();
        let text = token.lexeme();

        match token.kind() {
            TokenKind::StringData => Ok(Self::String(unquote(text).to_string())),
            TokenKind::IntData => Ok(Self::Int(parse_int(text, line)?)),
            TokenKind::FloatData => Ok(Self::from(parse_float(text, line)?)),
            kind @ (TokenKind::True | TokenKind::False) => Ok(Self::Bool(literal_truthiness(kind))),
            _ => Err(RuntimeError::TypeError { details: format!("'{text}' is not a literal"),
                                               line }),
        }
    }

    /// Builds a new value of `target` kind from this value.
    ///
    /// Every (source, target) pair has exactly one rule:
    ///
    /// | from \ to | String       | Int                    | Float            | Bool            |
    /// |-----------|--------------|------------------------|------------------|-----------------|
    /// | String    | same text    | parse trimmed integer  | parse trimmed    | `true`/`false`  |
    /// | Int       | decimal text | same                   | exact conversion | non-zero        |
    /// | Float     | display text | integral, in range     | same             | non-zero        |
    /// | Bool      | display text | 1 or 0                 | 1.0 or 0.0       | same            |
    ///
    /// # Parameters
    /// - `target`: The declared kind of the new variable.
    /// - `line`: Source code line number for error reporting.
    ///
    /// # Errors
    /// - `TypeError` when the value has no representation in `target`.
    /// - `ValueError` when it has one but lies outside the representable
    ///   range.
    ///
    /// # Example
    /// ```
    /// use paper::interpreter::value::core::{Kind, Value};
    ///
    /// let n = Value::Int(5);
    ///
    /// assert_eq!(n.convert_to(Kind::String, 1).unwrap(), Value::from("5"));
    /// assert_eq!(n.convert_to(Kind::Float, 1).unwrap(), Value::from(5.0));
    /// assert!(Value::from("five").convert_to(Kind::Int, 1).is_err());
    /// ```
    pub fn convert_to(&self, target: Kind, line: usize) -> EvalResult<Self> {
        match (self, target) {
            (_, Kind::String) => Ok(Self::String(self.to_string())),

            (Self::Int(n), Kind::Int) => Ok(Self::Int(*n)),
            (Self::Float(r), Kind::Int) => Ok(Self::Int(f64_to_i64_checked(r.0, line)?)),
            (Self::Bool(b), Kind::Int) => Ok(Self::Int(i64::from(*b))),
            (Self::String(s), Kind::Int) => Ok(Self::Int(parse_int(s.trim(), line)?)),

            (Self::Int(n), Kind::Float) => Ok(Self::from(i64_to_f64_checked(*n, line)?)),
            (Self::Float(r), Kind::Float) => Ok(Self::Float(*r)),
            (Self::Bool(b), Kind::Float) => Ok(Self::from(f64::from(u8::from(*b)))),
            (Self::String(s), Kind::Float) => Ok(Self::from(parse_float(s.trim(), line)?)),

            (Self::Int(n), Kind::Bool) => Ok(Self::Bool(*n != 0)),
            (Self::Float(r), Kind::Bool) => Ok(Self::Bool(r.0 != 0.0)),
            (Self::Bool(b), Kind::Bool) => Ok(Self::Bool(*b)),
            (Self::String(s), Kind::Bool) => match s.as_str() {
                "true" => Ok(Self::Bool(true)),
                "false" => Ok(Self::Bool(false)),
                _ => Err(RuntimeError::TypeError { details: format!("Cannot convert \"{s}\" to bool"),
                                                   line }),
            },
        }
    }
}

/// Formats the value the way `print` shows it.
///
/// Integral floats keep a trailing `.0` so they stay distinguishable from
/// ints.
impl std::fmt::Display for Value {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::String(s) => write!(f, "{s}"),
            Self::Int(n) => write!(f, "{n}"),
            Self::Float(r) if r.0.is_finite() && r.0.fract() == 0.0 => write!(f, "{:.1}", r.0),
            Self::Float(r) => write!(f, "{}", r.0),
            Self::Bool(b) => write!(f, "{b}"),
        }
    }
}

/// Strips one leading and one trailing quote character.
#[must_use]
pub fn unquote(text: &str) -> &str {
    let mut chars = text.chars();
    chars.next();
    chars.next_back();
    chars.as_str()
}

fn parse_int(text: &str, line: usize) -> EvalResult<i64> {
    text.parse().map_err(|e: std::num::ParseIntError| match e.kind() {
                    IntErrorKind::PosOverflow | IntErrorKind::NegOverflow => {
                        RuntimeError::ValueError { details: format!("{text} does not fit in a 64 bit int"),
                                                   line }
                    },
                    _ => RuntimeError::TypeError { details: format!("Cannot convert \"{text}\" to int"),
                                                   line },
                })
}

fn parse_float(text: &str, line: usize) -> EvalResult<f64> {
    let value: f64 =
        text.parse()
            .map_err(|_| RuntimeError::TypeError { details: format!("Cannot convert \"{text}\" to float"),
                                                   line })?;
    if !value.is_finite() {
        return Err(RuntimeError::ValueError { details: format!("{text} is not a finite float"),
                                              line });
    }
    Ok(value)
}
