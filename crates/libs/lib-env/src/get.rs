//! # Optional Accessors
//!
//! Every `get_*` accessor returns the caller's fallback when the variable is
//! absent, empty or malformed, and never fails. The one exception to "empty
//! means absent" is [`Env::get_string`], for which an empty string is a value.

use std::collections::HashMap;
use std::env::VarError;
use std::str::FromStr;
use std::time::Duration;

use chrono::{DateTime, Utc};
use tracing::debug;

use crate::envs::{Env, or_fallback};
use crate::scalar::{EnvFloat, EnvInt};
use crate::source::ReadEnv;

impl<R: ReadEnv> Env<R> {
    /// Raw value of `name`, or `fallback` only if it is not set.
    pub fn get_string(&self, name: &str, fallback: impl Into<String>) -> String {
        match self.source().var(name) {
            Ok(value) => value,
            Err(VarError::NotPresent) => fallback.into(),
            Err(VarError::NotUnicode(_)) => {
                debug!("Using fallback: ENV {:?} is not valid unicode", name);
                fallback.into()
            }
        }
    }

    /// `true`/`1` or `false`/`0`.
    pub fn get_bool(&self, name: &str, fallback: bool) -> bool {
        or_fallback(self.must_bool(name), fallback)
    }

    pub fn get_int<T: EnvInt>(&self, name: &str, fallback: T) -> T {
        or_fallback(self.must_int(name), fallback)
    }

    pub fn get_float<T: EnvFloat>(&self, name: &str, fallback: T) -> T {
        or_fallback(self.must_float(name), fallback)
    }

    /// Duration such as `"90s"` or `"1h30m"`.
    pub fn get_duration(&self, name: &str, fallback: Duration) -> Duration {
        or_fallback(self.must_duration(name), fallback)
    }

    /// Timestamp in `format`, or RFC 3339 when `format` is empty.
    pub fn get_time(&self, name: &str, format: &str, fallback: DateTime<Utc>) -> DateTime<Utc> {
        or_fallback(self.must_time(name, format), fallback)
    }

    /// UTF-8 bytes of the value.
    pub fn get_bytes(&self, name: &str, fallback: Vec<u8>) -> Vec<u8> {
        or_fallback(self.must_bytes(name), fallback)
    }

    /// Bytes decoded from URL-safe base64 without padding.
    pub fn get_bytes_b64u(&self, name: &str, fallback: Vec<u8>) -> Vec<u8> {
        or_fallback(self.must_bytes_b64u(name), fallback)
    }

    /// Any [`FromStr`] type.
    pub fn get_parse<T>(&self, name: &str, fallback: T) -> T
    where
        T: FromStr,
        T::Err: std::fmt::Display,
    {
        or_fallback(self.must_parse(name), fallback)
    }

    pub fn get_strings(&self, name: &str, sep: &str, fallback: Vec<String>) -> Vec<String> {
        or_fallback(self.must_strings(name, sep), fallback)
    }

    pub fn get_ints<T: EnvInt>(&self, name: &str, sep: &str, fallback: Vec<T>) -> Vec<T> {
        or_fallback(self.must_ints(name, sep), fallback)
    }

    pub fn get_floats<T: EnvFloat>(&self, name: &str, sep: &str, fallback: Vec<T>) -> Vec<T> {
        or_fallback(self.must_floats(name, sep), fallback)
    }

    /// Map from `key1=value1,key2=value2`; empty separators mean `,` and `=`.
    pub fn get_strings_map(
        &self,
        name: &str,
        sep: &str,
        kv_sep: &str,
        fallback: HashMap<String, String>,
    ) -> HashMap<String, String> {
        or_fallback(self.must_strings_map(name, sep, kv_sep), fallback)
    }

    pub fn get_ints_map<T: EnvInt>(
        &self,
        name: &str,
        sep: &str,
        kv_sep: &str,
        fallback: HashMap<String, T>,
    ) -> HashMap<String, T> {
        or_fallback(self.must_ints_map(name, sep, kv_sep), fallback)
    }

    pub fn get_floats_map<T: EnvFloat>(
        &self,
        name: &str,
        sep: &str,
        kv_sep: &str,
        fallback: HashMap<String, T>,
    ) -> HashMap<String, T> {
        or_fallback(self.must_floats_map(name, sep, kv_sep), fallback)
    }
}

#[cfg(test)]
mod tests {
    use std::collections::HashMap;
    use std::time::Duration;

    use base64::{Engine as _, engine::general_purpose};
    use chrono::{TimeZone, Utc};

    use crate::Env;

    fn env(pairs: &[(&str, &str)]) -> Env<HashMap<String, String>> {
        Env::new(
            pairs
                .iter()
                .map(|(k, v)| (k.to_string(), v.to_string()))
                .collect(),
        )
    }

    fn strings(items: &[&str]) -> Vec<String> {
        items.iter().map(|s| s.to_string()).collect()
    }

    #[test]
    fn test_get_string() {
        let unset = env(&[]);
        let set = env(&[("TEST_STRING", "test")]);

        assert_eq!(unset.get_string("TEST_STRING", "default value"), "default value");
        assert_eq!(set.get_string("TEST_STRING", "default value"), "test");
    }

    #[test]
    fn test_get_string_keeps_empty_value() {
        let env = env(&[("TEST_STRING", "")]);
        assert_eq!(env.get_string("TEST_STRING", "default value"), "");
    }

    #[test]
    fn test_get_bool() {
        assert!(env(&[]).get_bool("TEST_BOOL", true));
        assert!(!env(&[("TEST_BOOL", "false")]).get_bool("TEST_BOOL", true));
        assert!(!env(&[("TEST_BOOL", "0")]).get_bool("TEST_BOOL", true));
        assert!(env(&[("TEST_BOOL", "wrong value")]).get_bool("TEST_BOOL", true));
        assert!(env(&[("TEST_BOOL", "1")]).get_bool("TEST_BOOL", false));
        assert!(env(&[("TEST_BOOL", "")]).get_bool("TEST_BOOL", true));
    }

    #[test]
    fn test_get_int() {
        assert_eq!(env(&[]).get_int("TEST_INT", 1i32), 1);

        let set = env(&[("TEST_INT", "123")]);
        assert_eq!(set.get_int::<i16>("TEST_INT", 0), 123);
        assert_eq!(set.get_int::<i32>("TEST_INT", 0), 123);
        assert_eq!(set.get_int::<i64>("TEST_INT", 0), 123);
        assert_eq!(set.get_int::<isize>("TEST_INT", 0), 123);

        let wrong = env(&[("TEST_INT", "wrong value")]);
        assert_eq!(wrong.get_int("TEST_INT", 2i32), 2);
        assert_eq!(env(&[("TEST_INT", "")]).get_int("TEST_INT", 3i32), 3);
    }

    #[test]
    fn test_get_int_width_cap() {
        let env = env(&[("BIG", "12345678901234567890"), ("JUST_OVER", "2147483648")]);
        assert_eq!(env.get_int::<i64>("BIG", -1), -1);
        assert_eq!(env.get_int::<i64>("JUST_OVER", -1), -1);
    }

    #[test]
    fn test_get_int_out_of_target_range() {
        let env = env(&[("SMALL", "40000")]);
        assert_eq!(env.get_int::<i16>("SMALL", 7), 7);
        assert_eq!(env.get_int::<i32>("SMALL", 7), 40000);
    }

    #[test]
    fn test_get_float() {
        assert_eq!(env(&[]).get_float::<f32>("TEST_FLOAT", 1.23), 1.23);

        let set = env(&[("TEST_FLOAT", "123.45")]);
        assert_eq!(set.get_float::<f32>("TEST_FLOAT", 0.0), 123.45f32);
        assert_eq!(set.get_float::<f64>("TEST_FLOAT", 0.0), 123.45f64);

        let wrong = env(&[("TEST_FLOAT", "wrong value")]);
        assert_eq!(wrong.get_float::<f32>("TEST_FLOAT", 2.34), 2.34);
    }

    #[test]
    fn test_get_float_out_of_range() {
        let env = env(&[("TEST_FLOAT", "1e400"), ("TEST_INF", "inf")]);
        assert_eq!(env.get_float::<f64>("TEST_FLOAT", 2.5), 2.5);
        assert_eq!(env.get_float::<f64>("TEST_INF", 2.5), f64::INFINITY);
    }

    #[test]
    fn test_get_duration() {
        let second = Duration::from_secs(1);
        assert_eq!(env(&[]).get_duration("TEST_DURATION", second), second);

        let minute = env(&[("TEST_DURATION", "1m")]);
        assert_eq!(minute.get_duration("TEST_DURATION", Duration::ZERO), Duration::from_secs(60));

        let combined = env(&[("TEST_DURATION", "1h30m")]);
        assert_eq!(
            combined.get_duration("TEST_DURATION", Duration::ZERO),
            Duration::from_secs(90 * 60)
        );

        let wrong = env(&[("TEST_DURATION", "wrong value")]);
        let two = Duration::from_secs(2);
        assert_eq!(wrong.get_duration("TEST_DURATION", two), two);
    }

    #[test]
    fn test_get_time() {
        let jan = |d| Utc.with_ymd_and_hms(2020, 1, d, 0, 0, 0).single().expect("valid date");

        assert_eq!(env(&[]).get_time("TEST_TIME", "%Y-%m-%d", jan(1)), jan(1));

        let zulu = env(&[("TEST_TIME", "2020-01-02T00:00:00Z")]);
        assert_eq!(zulu.get_time("TEST_TIME", "%Y-%m-%dT%H:%M:%SZ", jan(1)), jan(2));

        let wrong = env(&[("TEST_TIME", "wrong value")]);
        assert_eq!(wrong.get_time("TEST_TIME", "%Y-%m-%d", jan(3)), jan(3));

        let date = env(&[("TEST_TIME", "2020-01-04")]);
        assert_eq!(date.get_time("TEST_TIME", "%Y-%m-%d", jan(1)), jan(4));

        let rfc3339 = env(&[("TEST_TIME", "2020-01-05T00:00:00Z")]);
        assert_eq!(rfc3339.get_time("TEST_TIME", "", jan(1)), jan(5));
    }

    #[test]
    fn test_get_bytes() {
        assert_eq!(env(&[]).get_bytes("TEST_BYTES", b"test".to_vec()), b"test".to_vec());

        let set = env(&[("TEST_BYTES", "test")]);
        assert_eq!(set.get_bytes("TEST_BYTES", b"default value".to_vec()), b"test".to_vec());

        let empty = env(&[("TEST_BYTES", "")]);
        assert_eq!(empty.get_bytes("TEST_BYTES", b"default".to_vec()), b"default".to_vec());
    }

    #[test]
    fn test_get_bytes_b64u() {
        let key = general_purpose::URL_SAFE_NO_PAD.encode([0u8, 1, 2, 255]);
        let set = env(&[("KEY", key.as_str())]);
        assert_eq!(set.get_bytes_b64u("KEY", Vec::new()), vec![0u8, 1, 2, 255]);

        assert_eq!(env(&[("KEY", "***")]).get_bytes_b64u("KEY", vec![7]), vec![7]);
        assert_eq!(env(&[]).get_bytes_b64u("KEY", vec![8]), vec![8]);
    }

    #[test]
    fn test_get_parse() {
        assert_eq!(env(&[("PORT", "8080")]).get_parse::<u16>("PORT", 80), 8080);
        assert_eq!(env(&[("PORT", "70000")]).get_parse::<u16>("PORT", 80), 80);
        assert_eq!(env(&[]).get_parse::<u16>("PORT", 80), 80);
    }

    #[test]
    fn test_get_strings() {
        let fallback = strings(&["fallback"]);
        assert_eq!(env(&[]).get_strings("LIST", ",", fallback.clone()), fallback);

        let noisy = env(&[("LIST", "a,,b,")]);
        assert_eq!(noisy.get_strings("LIST", ",", fallback.clone()), strings(&["a", "b"]));

        let separators = env(&[("LIST", ",")]);
        assert_eq!(separators.get_strings("LIST", ",", fallback.clone()), fallback);

        let piped = env(&[("LIST", "a|b")]);
        assert_eq!(piped.get_strings("LIST", "|", fallback), strings(&["a", "b"]));
    }

    #[test]
    fn test_get_ints() {
        let set = env(&[("LIST", "1,2,3")]);
        assert_eq!(set.get_ints::<i64>("LIST", ",", vec![]), vec![1, 2, 3]);

        let partial = env(&[("LIST", "1,2,three")]);
        assert_eq!(partial.get_ints::<i32>("LIST", ",", vec![9]), vec![9]);

        assert_eq!(env(&[]).get_ints::<i16>("LIST", ",", vec![4]), vec![4]);
    }

    #[test]
    fn test_get_floats() {
        let set = env(&[("LIST", "1.5;2.5")]);
        assert_eq!(set.get_floats::<f64>("LIST", ";", vec![]), vec![1.5, 2.5]);

        let partial = env(&[("LIST", "1.5;x")]);
        assert_eq!(partial.get_floats::<f32>("LIST", ";", vec![0.5]), vec![0.5]);

        let overflow = env(&[("LIST", "1,1e400")]);
        assert_eq!(overflow.get_floats::<f64>("LIST", ",", vec![0.5]), vec![0.5]);

        assert_eq!(env(&[]).get_floats::<f64>("LIST", ",", vec![0.25]), vec![0.25]);
    }

    #[test]
    fn test_get_strings_map() {
        let fallback = HashMap::from([("fallback".to_string(), "yes".to_string())]);

        let malformed = env(&[("MAP", "key1=v1,key2=v2,key3")]);
        assert_eq!(malformed.get_strings_map("MAP", ",", "=", fallback.clone()), fallback);

        let empty_key = env(&[("MAP", "=,key2=v2")]);
        assert_eq!(
            empty_key.get_strings_map("MAP", ",", "=", fallback.clone()),
            HashMap::from([("key2".to_string(), "v2".to_string())])
        );

        assert_eq!(env(&[]).get_strings_map("MAP", "", "", fallback.clone()), fallback);
    }

    #[test]
    fn test_get_ints_map() {
        let with_empty = env(&[("MAP", "key1=1,key2=")]);
        assert_eq!(
            with_empty.get_ints_map::<i32>("MAP", "", "", HashMap::new()),
            HashMap::from([("key1".to_string(), 1), ("key2".to_string(), 0)])
        );

        let bad_value = env(&[("MAP", "key1=v1,key2=")]);
        assert_eq!(bad_value.get_ints_map::<i32>("MAP", "", "", HashMap::new()), HashMap::new());

        let fallback = HashMap::from([("fallback".to_string(), 1)]);
        assert_eq!(env(&[]).get_ints_map("MAP", "", "", fallback.clone()), fallback);
    }

    #[test]
    fn test_get_floats_map() {
        let custom = env(&[("MAP", "a:0.5;b:")]);
        assert_eq!(
            custom.get_floats_map::<f64>("MAP", ";", ":", HashMap::new()),
            HashMap::from([("a".to_string(), 0.5), ("b".to_string(), 0.0)])
        );

        let fallback = HashMap::from([("fallback".to_string(), 1.5f64)]);

        let overflow = env(&[("MAP", "a=1,b=1e400")]);
        assert_eq!(overflow.get_floats_map("MAP", "", "", fallback.clone()), fallback);

        assert_eq!(env(&[]).get_floats_map("MAP", "", "", fallback.clone()), fallback);
    }

    #[test]
    fn test_idempotent() {
        let env = env(&[("LIST", "1,2")]);
        assert_eq!(
            env.get_ints::<i32>("LIST", ",", vec![]),
            env.get_ints::<i32>("LIST", ",", vec![])
        );
    }
}
