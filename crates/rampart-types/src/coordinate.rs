//! Lenient decoding for board coordinates.
//!
//! A coordinate arrives as a JSON integer, an integral float (`3.0`) or a
//! numeric string (`"3"`, `" -7 "`). All three decode to the same `i64`.
//! Fractional floats, non-numeric strings, booleans and values outside the
//! `i64` range are rejected.

use std::fmt;

use serde::Deserializer;
use serde::de::{self, Unexpected, Visitor};

/// 2^63, the first float past `i64::MAX`. Exactly representable.
const I64_BOUND: f64 = 9_223_372_036_854_775_808.0;

/// `deserialize_with` target for coordinate fields.
pub fn deserialize<'de, D>(deserializer: D) -> Result<i64, D::Error>
where
    D: Deserializer<'de>,
{
    deserializer.deserialize_any(CoordinateVisitor)
}

struct CoordinateVisitor;

impl Visitor<'_> for CoordinateVisitor {
    type Value = i64;

    fn expecting(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str("an integer, an integral float or a numeric string")
    }

    fn visit_i64<E: de::Error>(self, v: i64) -> Result<i64, E> {
        Ok(v)
    }

    fn visit_u64<E: de::Error>(self, v: u64) -> Result<i64, E> {
        i64::try_from(v).map_err(|_overflow| E::invalid_value(Unexpected::Unsigned(v), &self))
    }

    fn visit_f64<E: de::Error>(self, v: f64) -> Result<i64, E> {
        integral_float(v).ok_or_else(|| E::invalid_value(Unexpected::Float(v), &self))
    }

    fn visit_str<E: de::Error>(self, v: &str) -> Result<i64, E> {
        v.trim()
            .parse()
            .map_err(|_parse| E::invalid_value(Unexpected::Str(v), &self))
    }
}

#[allow(clippy::cast_possible_truncation)]
fn integral_float(v: f64) -> Option<i64> {
    // The bounds check makes the cast exact.
    (v.is_finite() && v.fract() == 0.0 && v >= -I64_BOUND && v < I64_BOUND).then(|| v as i64)
}

#[cfg(test)]
mod tests {
    use serde::Deserialize;

    #[derive(Debug, Deserialize)]
    struct Point {
        #[serde(deserialize_with = "super::deserialize")]
        x: i64,
    }

    fn decode(body: &str) -> Option<i64> {
        serde_json::from_str::<Point>(body).ok().map(|p| p.x)
    }

    #[test]
    fn accepts_integers() {
        assert_eq!(decode(r#"{"x":3}"#), Some(3));
        assert_eq!(decode(r#"{"x":-12}"#), Some(-12));
        assert_eq!(decode(r#"{"x":9223372036854775807}"#), Some(i64::MAX));
    }

    #[test]
    fn accepts_integral_floats() {
        assert_eq!(decode(r#"{"x":3.0}"#), Some(3));
        assert_eq!(decode(r#"{"x":-4.0}"#), Some(-4));
        assert_eq!(decode(r#"{"x":1e3}"#), Some(1000));
    }

    #[test]
    fn accepts_numeric_strings() {
        assert_eq!(decode(r#"{"x":"3"}"#), Some(3));
        assert_eq!(decode(r#"{"x":" -7 "}"#), Some(-7));
        assert_eq!(decode(r#"{"x":"+5"}"#), Some(5));
    }

    #[test]
    fn rejects_fractional_floats() {
        assert_eq!(decode(r#"{"x":3.5}"#), None);
    }

    #[test]
    fn rejects_non_numeric_values() {
        assert_eq!(decode(r#"{"x":"left"}"#), None);
        assert_eq!(decode(r#"{"x":"3.0"}"#), None);
        assert_eq!(decode(r#"{"x":true}"#), None);
        assert_eq!(decode(r#"{"x":null}"#), None);
        assert_eq!(decode(r#"{"x":[3]}"#), None);
    }

    #[test]
    fn rejects_out_of_range() {
        assert_eq!(decode(r#"{"x":9223372036854775808}"#), None);
        assert_eq!(decode(r#"{"x":1e19}"#), None);
    }
}
