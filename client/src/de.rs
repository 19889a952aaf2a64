use std::{fmt::Display, str::FromStr};

use serde::{de, Deserialize, Deserializer};

#[derive(Deserialize)]
#[serde(untagged)]
enum NumberOrText<N> {
    Number(N),
    Text(String),
}

fn option_number<'de, D, N>(deserializer: D, kind: &str) -> Result<Option<N>, D::Error>
where
    D: Deserializer<'de>,
    N: Deserialize<'de> + FromStr,
    N::Err: Display,
{
    match Option::<NumberOrText<N>>::deserialize(deserializer)? {
        None => Ok(None),
        Some(NumberOrText::Number(n)) => Ok(Some(n)),
        Some(NumberOrText::Text(text)) => text
            .trim()
            .parse()
            .map(Some)
            .map_err(|e| de::Error::custom(format!("invalid {kind} '{text}': {e}"))),
    }
}

/// Reads an optional 64-bit integer written either as a JSON number or, as the
/// proto3 JSON mapping does for int64, as a string.
///
/// Use together with `#[serde(default)]` so that a missing field stays `None`.
pub fn option_i64<'de, D>(deserializer: D) -> Result<Option<i64>, D::Error>
where
    D: Deserializer<'de>,
{
    option_number(deserializer, "int64")
}

/// Same as [`option_i64`] for int32 fields.
pub fn option_i32<'de, D>(deserializer: D) -> Result<Option<i32>, D::Error>
where
    D: Deserializer<'de>,
{
    option_number(deserializer, "int32")
}

/// Reads an optional double from a JSON number or a string, including
/// `"NaN"`, `"Infinity"` and `"-Infinity"`.
pub fn option_f64<'de, D>(deserializer: D) -> Result<Option<f64>, D::Error>
where
    D: Deserializer<'de>,
{
    option_number(deserializer, "double")
}

/// Reads a field where an explicit `null` means the default value, as for
/// repeated and map fields in the proto3 JSON mapping.
///
/// Use together with `#[serde(default)]` so that a missing field is covered too.
pub fn null_default<'de, D, T>(deserializer: D) -> Result<T, D::Error>
where
    D: Deserializer<'de>,
    T: Default + Deserialize<'de>,
{
    Option::<T>::deserialize(deserializer).map(Option::unwrap_or_default)
}
