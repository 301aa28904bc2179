//! # Environment Variables
//!
//! [`Env`] is the accessor handle. It reads from a [`ReadEnv`] source on every
//! call and applies one of two failure policies:
//!
//! - `get_*` accessors return a caller-supplied fallback when the variable is
//!   absent, empty or malformed.
//! - `must_*` accessors return an [`Error`] instead.
//!
//! ```rust,no_run
//! use std::time::Duration;
//! use lib_env::Env;
//!
//! # fn main() -> lib_env::Result<()> {
//! let env = Env::system();
//! let database_url = env.must_string("DATABASE_URL")?;
//! let pool_size = env.get_int::<i32>("POOL_SIZE", 8);
//! let timeout = env.get_duration("REQUEST_TIMEOUT", Duration::from_secs(30));
//! # Ok(())
//! # }
//! ```

use std::env::VarError;
use std::str::FromStr;

use tracing::{debug, trace};

use crate::error::{Error, Expected, Result};
use crate::source::{ReadEnv, SystemEnv};

/// Accessor handle over a variable source.
#[derive(Debug, Clone, Copy, Default)]
pub struct Env<R = SystemEnv> {
    source: R,
}

impl Env<SystemEnv> {
    /// Handle over the live process environment.
    pub fn system() -> Self {
        Self { source: SystemEnv }
    }
}

impl<R: ReadEnv> Env<R> {
    /// Handle over `source`.
    pub fn new(source: R) -> Self {
        Self { source }
    }

    /// The source this handle reads from.
    pub fn source(&self) -> &R {
        &self.source
    }

    /// Read `name` and convert it with `parse`.
    ///
    /// Absent and empty are both [`Error::MissingEnv`]. A value that is not
    /// valid unicode, or that `parse` rejects, is [`Error::WrongFormat`].
    pub(crate) fn lookup<T>(
        &self,
        name: &str,
        expected: Expected,
        parse: impl FnOnce(&str) -> std::result::Result<T, Malformed>,
    ) -> Result<T> {
        let raw = match self.source.var(name) {
            Ok(raw) if !raw.is_empty() => raw,
            Ok(_) | Err(VarError::NotPresent) => {
                return Err(Error::MissingEnv { name: name.to_string() });
            }
            Err(VarError::NotUnicode(os)) => {
                return Err(Error::WrongFormat {
                    name: name.to_string(),
                    value: os.to_string_lossy().into_owned(),
                    expected,
                    detail: Some("value is not valid unicode".to_string()),
                });
            }
        };

        parse(&raw).map_err(|Malformed(detail)| Error::WrongFormat {
            name: name.to_string(),
            value: raw,
            expected,
            detail,
        })
    }
}

/// Rejection from a conversion, with the parser's reason when it has one.
#[derive(Debug)]
pub(crate) struct Malformed(pub(crate) Option<String>);

impl Malformed {
    pub(crate) fn bare() -> Self {
        Malformed(None)
    }

    pub(crate) fn with(reason: impl std::fmt::Display) -> Self {
        Malformed(Some(reason.to_string()))
    }
}

/// Turn a conversion without a reason into one [`Env::lookup`] accepts.
pub(crate) fn bare<T>(parsed: Option<T>) -> std::result::Result<T, Malformed> {
    parsed.ok_or_else(Malformed::bare)
}

/// Optional-mode policy: swallow the error and hand back `fallback`.
pub(crate) fn or_fallback<T>(result: Result<T>, fallback: T) -> T {
    match result {
        Ok(value) => value,
        Err(err) if err.is_missing() => {
            trace!("{} not set, using fallback", err.name());
            fallback
        }
        Err(err) => {
            debug!("Using fallback: {}", err);
            fallback
        }
    }
}

/// Get an environment variable by name.
pub fn get_env(name: &str) -> Result<String> {
    Env::system().must_string(name)
}

/// Get and parse an environment variable.
pub fn get_env_parse<T>(name: &str) -> Result<T>
where
    T: FromStr,
    T::Err: std::fmt::Display,
{
    Env::system().must_parse(name)
}
