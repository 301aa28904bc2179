//! # Base64 Decoding
//!
//! URL-safe base64 (no padding) for binary values such as keys and salts
//! kept in the environment.

use base64::{Engine as _, engine::general_purpose};

/// Decode base64 URL-safe string to bytes.
pub fn b64u_decode(b64u: &str) -> Result<Vec<u8>, Error> {
    general_purpose::URL_SAFE_NO_PAD
        .decode(b64u)
        .map_err(|e| Error::FailToB64uDecode(e.to_string()))
}

// region:    --- Error
#[derive(Debug)]
pub enum Error {
    FailToB64uDecode(String),
}

impl std::fmt::Display for Error {
    fn fmt(&self, fmt: &mut std::fmt::Formatter) -> std::fmt::Result {
        match self {
            Error::FailToB64uDecode(reason) => write!(fmt, "{reason}"),
        }
    }
}

impl std::error::Error for Error {}
// endregion: --- Error
