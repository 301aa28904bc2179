//! # Required Accessors
//!
//! `must_*` accessors never substitute a value. An absent or empty variable
//! is [`Error::MissingEnv`](crate::Error::MissingEnv); a value that does not
//! convert is [`Error::WrongFormat`](crate::Error::WrongFormat), carrying the
//! offending value. Whether that ends the process is up to the caller.

use std::collections::HashMap;
use std::str::FromStr;
use std::time::Duration;

use chrono::{DateTime, Utc};

use crate::b64::b64u_decode;
use crate::duration::parse_duration;
use crate::envs::{Env, Malformed, bare};
use crate::error::{Expected, Result};
use crate::list::parse_list;
use crate::map::parse_map;
use crate::scalar::{EnvFloat, EnvInt, parse_bool, parse_float, parse_int};
use crate::source::ReadEnv;
use crate::time::parse_time;

impl<R: ReadEnv> Env<R> {
    /// Value of `name`; unlike [`Env::get_string`], empty counts as not set.
    pub fn must_string(&self, name: &str) -> Result<String> {
        self.lookup(name, Expected::String, |raw| Ok(raw.to_string()))
    }

    pub fn must_bool(&self, name: &str) -> Result<bool> {
        self.lookup(name, Expected::Boolean, |raw| bare(parse_bool(raw)))
    }

    pub fn must_int<T: EnvInt>(&self, name: &str) -> Result<T> {
        self.lookup(name, Expected::Integer, |raw| bare(parse_int(raw)))
    }

    pub fn must_float<T: EnvFloat>(&self, name: &str) -> Result<T> {
        self.lookup(name, Expected::Float, |raw| bare(parse_float(raw)))
    }

    pub fn must_duration(&self, name: &str) -> Result<Duration> {
        self.lookup(name, Expected::Duration, |raw| {
            parse_duration(raw).map_err(Malformed::with)
        })
    }

    /// See [`parse_time`] for how `format` is applied.
    pub fn must_time(&self, name: &str, format: &str) -> Result<DateTime<Utc>> {
        self.lookup(name, Expected::Time, |raw| {
            parse_time(raw, format).map_err(Malformed::with)
        })
    }

    pub fn must_bytes(&self, name: &str) -> Result<Vec<u8>> {
        self.lookup(name, Expected::Bytes, |raw| Ok(raw.as_bytes().to_vec()))
    }

    pub fn must_bytes_b64u(&self, name: &str) -> Result<Vec<u8>> {
        self.lookup(name, Expected::Base64, |raw| {
            b64u_decode(raw).map_err(Malformed::with)
        })
    }

    pub fn must_parse<T>(&self, name: &str) -> Result<T>
    where
        T: FromStr,
        T::Err: std::fmt::Display,
    {
        self.lookup(name, Expected::Parsable, |raw| {
            raw.parse::<T>().map_err(Malformed::with)
        })
    }

    pub fn must_strings(&self, name: &str, sep: &str) -> Result<Vec<String>> {
        self.lookup(name, Expected::StringList, |raw| {
            bare(parse_list(raw, sep, |token| Some(token.to_string())))
        })
    }

    pub fn must_ints<T: EnvInt>(&self, name: &str, sep: &str) -> Result<Vec<T>> {
        self.lookup(name, Expected::IntegerList, |raw| {
            bare(parse_list(raw, sep, parse_int))
        })
    }

    pub fn must_floats<T: EnvFloat>(&self, name: &str, sep: &str) -> Result<Vec<T>> {
        self.lookup(name, Expected::FloatList, |raw| {
            bare(parse_list(raw, sep, parse_float))
        })
    }

    pub fn must_strings_map(
        &self,
        name: &str,
        sep: &str,
        kv_sep: &str,
    ) -> Result<HashMap<String, String>> {
        self.lookup(name, Expected::StringMap, |raw| {
            bare(parse_map(raw, sep, kv_sep, |value| Some(value.to_string())))
        })
    }

    pub fn must_ints_map<T: EnvInt>(
        &self,
        name: &str,
        sep: &str,
        kv_sep: &str,
    ) -> Result<HashMap<String, T>> {
        self.lookup(name, Expected::IntegerMap, |raw| {
            bare(parse_map(raw, sep, kv_sep, parse_int))
        })
    }

    pub fn must_floats_map<T: EnvFloat>(
        &self,
        name: &str,
        sep: &str,
        kv_sep: &str,
    ) -> Result<HashMap<String, T>> {
        self.lookup(name, Expected::FloatMap, |raw| {
            bare(parse_map(raw, sep, kv_sep, parse_float))
        })
    }
}
