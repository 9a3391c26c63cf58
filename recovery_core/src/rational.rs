// Copyright (c) Facebook, Inc. and its affiliates.
// SPDX-License-Identifier: Apache-2.0

use crate::error::{RecoveryError, RecoveryResult};

use num_bigint::{BigInt, Sign};
use num_integer::Integer as _;
use num_traits::{One, Zero};
use serde::{Deserialize, Serialize};
use std::{
    fmt,
    ops::{Add, Mul, Neg, Sub},
    str::FromStr,
};

#[cfg(test)]
#[path = "unit_tests/rational_tests.rs"]
mod rational_tests;

/// An exact fraction kept in lowest terms with a positive denominator.
/// Zero is always represented as `0/1`, so structural equality is value equality.
#[derive(Eq, PartialEq, Clone, Hash)]
pub struct Rational {
    numerator: BigInt,
    denominator: BigInt,
}

impl Rational {
    /// Make a new fraction `numerator / denominator`, reduced.
    pub fn new<N, D>(numerator: N, denominator: D) -> RecoveryResult<Self>
    where
        N: Into<BigInt>,
        D: Into<BigInt>,
    {
        let denominator = denominator.into();
        ensure!(!denominator.is_zero(), RecoveryError::ZeroDenominator);
        Ok(Self::reduce(numerator.into(), denominator))
    }

    pub fn from_integer<N: Into<BigInt>>(value: N) -> Self {
        Self {
            numerator: value.into(),
            denominator: BigInt::one(),
        }
    }

    pub fn zero() -> Self {
        Self::from_integer(0)
    }

    pub fn one() -> Self {
        Self::from_integer(1)
    }

    pub fn numerator(&self) -> &BigInt {
        &self.numerator
    }

    pub fn denominator(&self) -> &BigInt {
        &self.denominator
    }

    pub fn is_zero(&self) -> bool {
        self.numerator.is_zero()
    }

    pub fn is_integer(&self) -> bool {
        self.denominator.is_one()
    }

    /// Divide `self` by `other`.
    pub fn checked_div(&self, other: &Rational) -> RecoveryResult<Self> {
        ensure!(!other.is_zero(), RecoveryError::DivideByZero);
        Ok(Self::reduce(
            &self.numerator * &other.denominator,
            &self.denominator * &other.numerator,
        ))
    }

    pub fn invert(&self) -> RecoveryResult<Self> {
        ensure!(!self.is_zero(), RecoveryError::ZeroHasNoInverse);
        Ok(Self::reduce(self.denominator.clone(), self.numerator.clone()))
    }

    /// Return the value as an integer, failing on a proper fraction.
    pub fn to_exact_integer(&self) -> RecoveryResult<BigInt> {
        ensure!(
            self.is_integer(),
            RecoveryError::NotAnInteger {
                value: self.to_string()
            }
        );
        Ok(self.numerator.clone())
    }

    // Callers guarantee `denominator != 0`.
    fn reduce(numerator: BigInt, denominator: BigInt) -> Self {
        let divisor = numerator.gcd(&denominator);
        let (mut numerator, mut denominator) = (numerator / &divisor, denominator / &divisor);
        if denominator.sign() == Sign::Minus {
            numerator = -numerator;
            denominator = -denominator;
        }
        Self {
            numerator,
            denominator,
        }
    }
}

impl From<BigInt> for Rational {
    fn from(value: BigInt) -> Self {
        Self::from_integer(value)
    }
}

impl From<&BigInt> for Rational {
    fn from(value: &BigInt) -> Self {
        Self::from_integer(value.clone())
    }
}

impl From<i64> for Rational {
    fn from(value: i64) -> Self {
        Self::from_integer(value)
    }
}

impl<'a> Add<&'a Rational> for &'a Rational {
    type Output = Rational;

    fn add(self, other: &'a Rational) -> Rational {
        Rational::reduce(
            &self.numerator * &other.denominator + &other.numerator * &self.denominator,
            &self.denominator * &other.denominator,
        )
    }
}

impl<'a> Sub<&'a Rational> for &'a Rational {
    type Output = Rational;

    fn sub(self, other: &'a Rational) -> Rational {
        Rational::reduce(
            &self.numerator * &other.denominator - &other.numerator * &self.denominator,
            &self.denominator * &other.denominator,
        )
    }
}

impl<'a> Mul<&'a Rational> for &'a Rational {
    type Output = Rational;

    fn mul(self, other: &'a Rational) -> Rational {
        Rational::reduce(
            &self.numerator * &other.numerator,
            &self.denominator * &other.denominator,
        )
    }
}

impl<'a> Neg for &'a Rational {
    type Output = Rational;

    fn neg(self) -> Rational {
        Rational {
            numerator: -&self.numerator,
            denominator: self.denominator.clone(),
        }
    }
}

impl Add for Rational {
    type Output = Rational;

    fn add(self, other: Rational) -> Rational {
        &self + &other
    }
}

impl Sub for Rational {
    type Output = Rational;

    fn sub(self, other: Rational) -> Rational {
        &self - &other
    }
}

impl Mul for Rational {
    type Output = Rational;

    fn mul(self, other: Rational) -> Rational {
        &self * &other
    }
}

impl Neg for Rational {
    type Output = Rational;

    fn neg(self) -> Rational {
        -&self
    }
}

impl fmt::Display for Rational {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        if self.is_integer() {
            write!(f, "{}", self.numerator)
        } else {
            write!(f, "{}/{}", self.numerator, self.denominator)
        }
    }
}

impl fmt::Debug for Rational {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self)
    }
}

impl FromStr for Rational {
    type Err = String;

    /// Parse `"n"` or `"n/d"`.
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let parse = |part: &str| {
            BigInt::from_str(part.trim()).map_err(|err| format!("Invalid rational {:?}: {}", s, err))
        };
        match s.split_once('/') {
            None => Ok(Self::from_integer(parse(s)?)),
            Some((numerator, denominator)) => {
                Self::new(parse(numerator)?, parse(denominator)?).map_err(|err| err.to_string())
            }
        }
    }
}

impl Serialize for Rational {
    fn serialize<S>(&self, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: serde::ser::Serializer,
    {
        serializer.serialize_str(&self.to_string())
    }
}

impl<'de> Deserialize<'de> for Rational {
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
    where
        D: serde::de::Deserializer<'de>,
    {
        let s = String::deserialize(deserializer)?;
        Self::from_str(&s).map_err(serde::de::Error::custom)
    }
}
