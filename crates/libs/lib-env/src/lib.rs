//! # Environment Variable Library
//!
//! Typed access to environment variables: strings, booleans, integers,
//! floats, durations, timestamps, bytes, delimited lists and delimited maps.
//!
//! Each type has an optional accessor (`get_*`, falls back to a supplied
//! value) and a required accessor (`must_*`, returns an [`Error`]). Accessors
//! hold no state; every call reads the [`ReadEnv`] source again.

pub mod b64;
pub mod duration;
pub mod envs;
pub mod error;
pub mod list;
pub mod map;
pub mod scalar;
pub mod source;
pub mod time;

mod get;
mod must;

// Re-export commonly used types
pub use duration::{ParseDurationError, parse_duration};
pub use envs::{Env, get_env, get_env_parse};
pub use error::{Error, Expected, Result};
pub use list::DEFAULT_SEPARATOR;
pub use map::DEFAULT_KV_SEPARATOR;
pub use scalar::{EnvFloat, EnvInt};
pub use source::{ReadEnv, SystemEnv};
pub use time::parse_time;
