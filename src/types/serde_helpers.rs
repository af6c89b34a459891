//! Custom serde helpers for P2PB2B's serialization formats.
//!
//! The exchange sends every monetary amount as a JSON string holding a
//! decimal (`"0.002"`), while timestamps are plain JSON numbers.

use std::fmt;

use serde::{Deserializer, Serializer, de};

/// Serialize/deserialize an `f64` as a decimal string.
///
/// Encoding uses the shortest decimal form that parses back to the same
/// `f64`, with no exponent, so `"0.1"` round-trips as `"0.1"` and `"0"` as
/// `"0"`. Decoding also accepts a bare JSON number.
///
/// # Example
///
/// ```rust
/// use serde::{Serialize, Deserialize};
/// use p2pb2b_api_client::types::serde_helpers::float_string;
///
/// #[derive(Serialize, Deserialize, Debug)]
/// struct Balance {
///     #[serde(with = "float_string")]
///     available: f64,
/// }
///
/// let balance: Balance = serde_json::from_str(r#"{"available":"0.63"}"#).unwrap();
/// assert_eq!(balance.available, 0.63);
/// assert_eq!(serde_json::to_string(&balance).unwrap(), r#"{"available":"0.63"}"#);
/// ```
pub mod float_string {
    use super::*;

    /// Serialize an `f64` as a decimal string.
    pub fn serialize<S>(value: &f64, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: Serializer,
    {
        serializer.serialize_str(&value.to_string())
    }

    /// Deserialize a decimal string (or number) into an `f64`.
    pub fn deserialize<'de, D>(deserializer: D) -> Result<f64, D::Error>
    where
        D: Deserializer<'de>,
    {
        deserializer.deserialize_any(FloatStringVisitor)
    }

    struct FloatStringVisitor;

    impl<'de> de::Visitor<'de> for FloatStringVisitor {
        type Value = f64;

        fn expecting(&self, formatter: &mut fmt::Formatter) -> fmt::Result {
            formatter.write_str("a decimal string or a number")
        }

        fn visit_str<E>(self, v: &str) -> Result<Self::Value, E>
        where
            E: de::Error,
        {
            v.trim()
                .parse::<f64>()
                .map_err(|e| de::Error::custom(format!("invalid decimal string {v:?}: {e}")))
        }

        fn visit_f64<E>(self, v: f64) -> Result<Self::Value, E>
        where
            E: de::Error,
        {
            Ok(v)
        }

        fn visit_i64<E>(self, v: i64) -> Result<Self::Value, E>
        where
            E: de::Error,
        {
            Ok(v as f64)
        }

        fn visit_u64<E>(self, v: u64) -> Result<Self::Value, E>
        where
            E: de::Error,
        {
            Ok(v as f64)
        }
    }
}
