// Copyright (c) Facebook, Inc. and its affiliates.
// SPDX-License-Identifier: Apache-2.0

use crate::error::{RecoveryError, RecoveryResult};

use num_bigint::BigInt;
use num_traits::Zero;
use serde::{Deserialize, Serialize};
use std::str::FromStr;

#[cfg(test)]
#[path = "unit_tests/base_types_tests.rs"]
mod base_types_tests;

/// Alphabet shared by every supported base, lowest digit first.
pub const DIGITS: &str = "0123456789abcdefghijklmnopqrstuvwxyz";

pub const MIN_BASE: u32 = 2;
pub const MAX_BASE: u32 = 36;

/// A decoded share: the abscissa `x` and the polynomial value `y` at `x`.
#[derive(Eq, PartialEq, Ord, PartialOrd, Clone, Hash, Debug, Serialize, Deserialize)]
pub struct Point {
    #[serde(serialize_with = "bigint_as_string", deserialize_with = "bigint_from_string")]
    pub x: BigInt,
    #[serde(serialize_with = "bigint_as_string", deserialize_with = "bigint_from_string")]
    pub y: BigInt,
}

impl Point {
    pub fn new<X, Y>(x: X, y: Y) -> Self
    where
        X: Into<BigInt>,
        Y: Into<BigInt>,
    {
        Self {
            x: x.into(),
            y: y.into(),
        }
    }

    /// Build a point from a share key (a decimal x-coordinate) and the digits of `y` in `base`.
    pub fn decode(key: &str, base: u32, digits: &str) -> RecoveryResult<Self> {
        Ok(Self {
            x: parse_abscissa(key)?,
            y: decode_digits(digits, base)?,
        })
    }
}

/// Parse a share key into an x-coordinate: an optional sign followed by decimal digits.
pub fn parse_abscissa(key: &str) -> RecoveryResult<BigInt> {
    let invalid = || RecoveryError::InvalidAbscissa {
        key: key.to_string(),
    };
    let trimmed = key.trim();
    let digits = trimmed.strip_prefix(&['+', '-'][..]).unwrap_or(trimmed);
    ensure!(
        !digits.is_empty() && digits.bytes().all(|b| b.is_ascii_digit()),
        invalid()
    );
    BigInt::from_str(trimmed).map_err(|_| invalid())
}

/// Decode a digit string written in `base` (2 to 36, case-insensitive).
/// The empty string decodes to zero.
pub fn decode_digits(digits: &str, base: u32) -> RecoveryResult<BigInt> {
    ensure!(
        (MIN_BASE..=MAX_BASE).contains(&base),
        RecoveryError::InvalidBase { base }
    );
    let radix = BigInt::from(base);
    let mut value = BigInt::zero();
    for digit in digits.chars() {
        let lower = digit.to_ascii_lowercase();
        let position = DIGITS
            .find(lower)
            .filter(|position| (*position as u32) < base)
            .ok_or(RecoveryError::InvalidDigit { digit, base })?;
        value = value * &radix + BigInt::from(position);
    }
    Ok(value)
}

pub fn bigint_as_string<S>(value: &BigInt, serializer: S) -> Result<S::Ok, S::Error>
where
    S: serde::ser::Serializer,
{
    serializer.serialize_str(&value.to_string())
}

pub fn bigint_from_string<'de, D>(deserializer: D) -> Result<BigInt, D::Error>
where
    D: serde::de::Deserializer<'de>,
{
    let s = String::deserialize(deserializer)?;
    BigInt::from_str(&s).map_err(|err| serde::de::Error::custom(err.to_string()))
}

pub fn bigints_as_strings<S>(values: &[BigInt], serializer: S) -> Result<S::Ok, S::Error>
where
    S: serde::ser::Serializer,
{
    serializer.collect_seq(values.iter().map(ToString::to_string))
}

pub fn optional_bigint_as_string<S>(value: &Option<BigInt>, serializer: S) -> Result<S::Ok, S::Error>
where
    S: serde::ser::Serializer,
{
    match value {
        Some(value) => serializer.serialize_some(&value.to_string()),
        None => serializer.serialize_none(),
    }
}

pub fn optional_bigints_as_strings<S>(
    values: &Option<Vec<BigInt>>,
    serializer: S,
) -> Result<S::Ok, S::Error>
where
    S: serde::ser::Serializer,
{
    match values {
        Some(values) => {
            let strings: Vec<String> = values.iter().map(ToString::to_string).collect();
            serializer.serialize_some(&strings)
        }
        None => serializer.serialize_none(),
    }
}
