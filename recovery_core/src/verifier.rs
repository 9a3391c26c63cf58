// Copyright (c) Facebook, Inc. and its affiliates.
// SPDX-License-Identifier: Apache-2.0

use crate::{
    base_types::{bigint_as_string, Point},
    polynomial::Polynomial,
    rational::Rational,
};
use log::warn;
use num_bigint::BigInt;
use serde::Serialize;

#[cfg(test)]
#[path = "unit_tests/verifier_tests.rs"]
mod verifier_tests;

/// A supplied point that the polynomial does not go through.
#[derive(Eq, PartialEq, Clone, Debug, Serialize)]
pub struct Mismatch {
    #[serde(serialize_with = "bigint_as_string")]
    pub x: BigInt,
    #[serde(serialize_with = "bigint_as_string")]
    pub expected: BigInt,
    /// The value of the polynomial at `x`, which may be a proper fraction.
    pub got: Rational,
}

/// Outcome of checking a polynomial against a set of points.
#[derive(Eq, PartialEq, Clone, Debug, Default)]
pub struct Verification {
    pub mismatches: Vec<Mismatch>,
}

impl Verification {
    /// Evaluate `polynomial` at every point and keep the ones where it does not
    /// yield exactly the expected integer.
    pub fn check(polynomial: &Polynomial, points: &[Point]) -> Self {
        let mismatches = points
            .iter()
            .filter_map(|point| {
                let got = polynomial.evaluate(&Rational::from(&point.x));
                match got.to_exact_integer() {
                    Ok(value) if value == point.y => None,
                    _ => {
                        warn!(
                            "Share x={} does not match: expected {}, got {}",
                            point.x, point.y, got
                        );
                        Some(Mismatch {
                            x: point.x.clone(),
                            expected: point.y.clone(),
                            got,
                        })
                    }
                }
            })
            .collect();
        Self { mismatches }
    }

    pub fn is_verified(&self) -> bool {
        self.mismatches.is_empty()
    }
}
