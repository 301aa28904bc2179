//! # Scalar Parsing
//!
//! Boolean, integer and float conversions shared by the scalar, list and map
//! accessors.

/// Signed integer widths an accessor can produce.
///
/// Values are always parsed as base-10 `i32` first, whatever the target width,
/// so `"3000000000"` is rejected even for `i64`. The parsed value is then
/// converted to the target; a value the target cannot hold is rejected too.
/// This is a checked conversion, not a truncating cast: `"40000"` is rejected
/// for `i16` instead of wrapping to `-25536`.
pub trait EnvInt: Copy + Default + sealed::Sealed {
    #[doc(hidden)]
    fn from_i32(value: i32) -> Option<Self>;
}

/// Floating point widths an accessor can produce.
///
/// Values are parsed as `f64` and then cast to the target width. A finite
/// literal too large for `f64` (`"1e400"`) is rejected rather than read as
/// infinity; `"inf"` and `"infinity"` are still accepted.
pub trait EnvFloat: Copy + Default + sealed::Sealed {
    #[doc(hidden)]
    fn from_f64(value: f64) -> Self;
}

mod sealed {
    pub trait Sealed {}
}

macro_rules! impl_env_int {
    ($($ty:ty),*) => {$(
        impl sealed::Sealed for $ty {}

        impl EnvInt for $ty {
            #[inline]
            fn from_i32(value: i32) -> Option<Self> {
                <$ty>::try_from(value).ok()
            }
        }
    )*};
}

impl_env_int!(i16, i32, i64, isize);

impl sealed::Sealed for f32 {}

impl EnvFloat for f32 {
    #[inline]
    fn from_f64(value: f64) -> Self {
        value as f32
    }
}

impl sealed::Sealed for f64 {}

impl EnvFloat for f64 {
    #[inline]
    fn from_f64(value: f64) -> Self {
        value
    }
}

/// `"true"`/`"1"` and `"false"`/`"0"`; nothing else.
pub fn parse_bool(raw: &str) -> Option<bool> {
    match raw {
        "true" | "1" => Some(true),
        "false" | "0" => Some(false),
        _ => None,
    }
}

/// Parse a base-10 integer through the 32-bit intermediate width.
pub fn parse_int<T: EnvInt>(raw: &str) -> Option<T> {
    raw.parse::<i32>().ok().and_then(T::from_i32)
}

/// Parse a float, rejecting overflow of a finite literal.
pub fn parse_float<T: EnvFloat>(raw: &str) -> Option<T> {
    let value = raw.parse::<f64>().ok()?;
    if value.is_infinite() && !is_infinity_literal(raw) {
        return None;
    }
    Some(T::from_f64(value))
}

fn is_infinity_literal(raw: &str) -> bool {
    let unsigned = raw.strip_prefix(['+', '-']).unwrap_or(raw);
    unsigned.eq_ignore_ascii_case("inf") || unsigned.eq_ignore_ascii_case("infinity")
}
