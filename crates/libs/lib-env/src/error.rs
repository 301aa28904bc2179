//! # Error Handling
//!
//! Failures reported by the required (`must_*`) accessors.
//!
//! Optional (`get_*`) accessors never surface these; they substitute the
//! caller's fallback instead.

use std::fmt;

use thiserror::Error;

/// Convenience type alias for `Result<T, Error>`.
pub type Result<T> = std::result::Result<T, Error>;

/// Why a required environment variable could not be read.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum Error {
    /// The variable is absent, or set to an empty string.
    #[error("required ENV {name:?} is not set")]
    MissingEnv { name: String },

    /// The variable is set but its value does not convert to the target type.
    #[error(
        "required ENV {name:?} must be {expected} but it's {value:?}{}",
        .detail.as_deref().map(|d| format!(": {d}")).unwrap_or_default()
    )]
    WrongFormat {
        name: String,
        value: String,
        expected: Expected,
        /// Reason reported by the underlying parser, when it gives one.
        detail: Option<String>,
    },
}

impl Error {
    /// Name of the variable that failed.
    pub fn name(&self) -> &str {
        match self {
            Error::MissingEnv { name } | Error::WrongFormat { name, .. } => name,
        }
    }

    /// `true` when the variable was absent or empty rather than malformed.
    pub fn is_missing(&self) -> bool {
        matches!(self, Error::MissingEnv { .. })
    }
}

/// Target type an accessor was converting to, used in failure messages.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Expected {
    String,
    Boolean,
    Integer,
    Float,
    Duration,
    Time,
    Bytes,
    Base64,
    /// Any `FromStr` type read through `get_parse` / `must_parse`.
    Parsable,
    StringList,
    IntegerList,
    FloatList,
    StringMap,
    IntegerMap,
    FloatMap,
}

impl fmt::Display for Expected {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let text = match self {
            Expected::String => "a string",
            Expected::Boolean => "a boolean",
            Expected::Integer => "an integer",
            Expected::Float => "a float",
            Expected::Duration => "a parsable duration",
            Expected::Time => "a parsable time",
            Expected::Bytes => "a byte string",
            Expected::Base64 => "a base64url string",
            Expected::Parsable => "a parsable value",
            Expected::StringList => "a string list",
            Expected::IntegerList => "an integer list",
            Expected::FloatList => "a float list",
            Expected::StringMap => "a string map",
            Expected::IntegerMap => "an integer map",
            Expected::FloatMap => "a float map",
        };
        f.write_str(text)
    }
}
