// Copyright (c) Facebook, Inc. and its affiliates.
// SPDX-License-Identifier: Apache-2.0

use crate::{
    base_types::{
        bigints_as_strings, optional_bigint_as_string, optional_bigints_as_strings, Point,
    },
    error::{RecoveryError, RecoveryResult},
    polynomial::Polynomial,
    rational::Rational,
    shares::ShareSet,
    verifier::{Mismatch, Verification},
};
use log::{info, warn};
use num_bigint::BigInt;
use serde::Serialize;

#[cfg(test)]
#[path = "unit_tests/reconstruction_tests.rs"]
mod reconstruction_tests;

/// Which of the supplied points go into the interpolation.
#[derive(Eq, PartialEq, Copy, Clone, Debug)]
pub enum Selection {
    /// The first `k` points, in x order.
    Threshold,
    /// Every supplied point.
    All,
}

impl Default for Selection {
    fn default() -> Self {
        Selection::Threshold
    }
}

/// The recovered polynomial, its secret, and how well it matches the supplied shares.
#[derive(Eq, PartialEq, Clone, Debug, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct Reconstruction {
    pub degree: usize,
    pub coefficients: Vec<Rational>,
    pub f0: Rational,
    #[serde(skip_serializing_if = "Option::is_none")]
    #[serde(serialize_with = "optional_bigint_as_string")]
    pub f0_int: Option<BigInt>,
    #[serde(skip_serializing_if = "Option::is_none")]
    #[serde(serialize_with = "optional_bigints_as_strings")]
    pub coefficients_int: Option<Vec<BigInt>>,
    pub verified: bool,
    #[serde(serialize_with = "bigints_as_strings")]
    pub used_points: Vec<BigInt>,
    #[serde(skip_serializing_if = "Vec::is_empty")]
    pub mismatches: Vec<Mismatch>,
}

impl Reconstruction {
    /// Interpolate through the selected points and verify the result against all of them.
    /// `points` are expected in increasing x order.
    pub fn run(points: &[Point], threshold: usize, selection: Selection) -> RecoveryResult<Self> {
        ensure!(
            threshold >= 1 && threshold <= points.len(),
            RecoveryError::InvalidThreshold {
                threshold,
                points: points.len(),
            }
        );
        Polynomial::check_distinct_abscissas(points)?;

        let used = match selection {
            Selection::Threshold => &points[..threshold],
            Selection::All => points,
        };
        let polynomial = Polynomial::interpolate(used)?;
        let verification = Verification::check(&polynomial, points);
        let reconstruction = Self::new(
            &polynomial,
            used.iter().map(|point| point.x.clone()).collect(),
            verification,
        );
        if reconstruction.verified {
            info!(
                "Recovered f(0) = {} from {} of {} shares",
                reconstruction.f0,
                used.len(),
                points.len()
            );
        } else {
            warn!(
                "Recovered polynomial disagrees with {} of {} shares",
                reconstruction.mismatches.len(),
                points.len()
            );
        }
        Ok(reconstruction)
    }

    /// Shorthand for a decoded share file.
    pub fn from_shares(shares: &ShareSet, selection: Selection) -> RecoveryResult<Self> {
        Self::run(&shares.points, shares.threshold, selection)
    }

    fn new(polynomial: &Polynomial, used_points: Vec<BigInt>, verification: Verification) -> Self {
        let coefficients = polynomial.coefficients().to_vec();
        let f0 = polynomial.constant_term().clone();
        let f0_int = f0.to_exact_integer().ok();
        let coefficients_int = coefficients
            .iter()
            .map(Rational::to_exact_integer)
            .collect::<RecoveryResult<Vec<_>>>()
            .ok();
        Self {
            degree: polynomial.degree(),
            coefficients,
            f0,
            f0_int,
            coefficients_int,
            verified: verification.is_verified(),
            used_points,
            mismatches: verification.mismatches,
        }
    }

    /// Pretty-printed JSON report.
    pub fn to_json(&self) -> String {
        serde_json::to_string_pretty(self).expect("Serializing a reconstruction should not fail.")
    }
}
