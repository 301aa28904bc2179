//! # Variable Sources
//!
//! Where accessors read raw values from. [`SystemEnv`] is the live process
//! environment; maps stand in for it in tests or when a process wants to
//! resolve settings from a table it assembled itself.

use std::collections::{BTreeMap, HashMap};
use std::env::{self, VarError};
use std::hash::BuildHasher;

/// Name to value lookup.
///
/// Same contract as [`std::env::var`]: `NotPresent` for an unset variable,
/// `NotUnicode` for a value that is set but not valid UTF-8.
///
/// Does **not** require `Send + Sync`; add the bounds at the call site if the
/// source is shared across threads.
pub trait ReadEnv {
    fn var(&self, name: &str) -> Result<String, VarError>;
}

/// Zero-sized source that delegates to `std::env` on every call.
#[derive(Debug, Clone, Copy, Default)]
pub struct SystemEnv;

impl ReadEnv for SystemEnv {
    #[inline]
    fn var(&self, name: &str) -> Result<String, VarError> {
        env::var(name)
    }
}

impl<S: BuildHasher> ReadEnv for HashMap<String, String, S> {
    fn var(&self, name: &str) -> Result<String, VarError> {
        self.get(name).cloned().ok_or(VarError::NotPresent)
    }
}

impl ReadEnv for BTreeMap<String, String> {
    fn var(&self, name: &str) -> Result<String, VarError> {
        self.get(name).cloned().ok_or(VarError::NotPresent)
    }
}

impl<T: ReadEnv + ?Sized> ReadEnv for &T {
    #[inline]
    fn var(&self, name: &str) -> Result<String, VarError> {
        (**self).var(name)
    }
}
