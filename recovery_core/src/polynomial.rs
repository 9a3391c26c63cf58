// Copyright (c) Facebook, Inc. and its affiliates.
// SPDX-License-Identifier: Apache-2.0

use crate::{
    base_types::Point,
    error::{RecoveryError, RecoveryResult},
    rational::Rational,
};
use log::{debug, trace};
use std::collections::BTreeSet;

#[cfg(test)]
#[path = "unit_tests/polynomial_tests.rs"]
pub mod polynomial_tests;

/// Represents a polynomial with exact rational coefficients, lowest degree first.
/// The leading coefficient is nonzero, except for the zero polynomial `[0]`.
#[derive(Eq, PartialEq, Clone, Debug)]
pub struct Polynomial {
    coefficients: Vec<Rational>,
}

impl Polynomial {
    /// The zero polynomial.
    pub fn zero() -> Self {
        Self::constant(Rational::zero())
    }

    /// The polynomial with a single constant term.
    pub fn constant(value: Rational) -> Self {
        Polynomial {
            coefficients: vec![value],
        }
    }

    pub fn coefficients(&self) -> &[Rational] {
        &self.coefficients
    }

    pub fn degree(&self) -> usize {
        self.coefficients.len() - 1
    }

    /// The value at the origin.
    pub fn constant_term(&self) -> &Rational {
        &self.coefficients[0]
    }

    pub fn is_zero(&self) -> bool {
        self.coefficients.len() == 1 && self.coefficients[0].is_zero()
    }

    /// Coefficient-wise sum.
    pub fn add(&self, other: &Polynomial) -> Polynomial {
        let zero = Rational::zero();
        let length = self.coefficients.len().max(other.coefficients.len());
        let coefficients = (0..length)
            .map(|i| {
                let a = self.coefficients.get(i).unwrap_or(&zero);
                let b = other.coefficients.get(i).unwrap_or(&zero);
                a + b
            })
            .collect();
        Self::trimmed(coefficients)
    }

    /// Multiply every coefficient by `scalar`.
    pub fn scale(&self, scalar: &Rational) -> Polynomial {
        Self::trimmed(self.coefficients.iter().map(|c| c * scalar).collect())
    }

    /// Multiply by the monic linear factor `(x - root)`.
    pub fn multiply_by_linear_factor(&self, root: &Rational) -> Polynomial {
        let negated = -root;
        let mut coefficients = vec![Rational::zero(); self.coefficients.len() + 1];
        for (i, coefficient) in self.coefficients.iter().enumerate().rev() {
            coefficients[i] = &coefficients[i] + &(coefficient * &negated);
            coefficients[i + 1] = &coefficients[i + 1] + coefficient;
        }
        Self::trimmed(coefficients)
    }

    /// Evaluate the polynomial at point x (Horner's rule).
    pub fn evaluate(&self, x: &Rational) -> Rational {
        self.coefficients
            .iter()
            .rev()
            .fold(Rational::zero(), |acc, coefficient| coefficient + &(&acc * x))
    }

    /// Computes the unique polynomial of degree at most `points.len() - 1` going through
    /// every point. Abscissas must be pairwise distinct.
    pub fn interpolate(points: &[Point]) -> RecoveryResult<Polynomial> {
        Self::check_distinct_abscissas(points)?;

        let xs: Vec<Rational> = points.iter().map(|point| Rational::from(&point.x)).collect();
        let mut result = Polynomial::zero();
        for (i, point) in points.iter().enumerate() {
            let (numerator, denominator) = xs
                .iter()
                .enumerate()
                .filter(|(j, _)| *j != i)
                .fold(
                    (Polynomial::constant(Rational::one()), Rational::one()),
                    |(numerator, denominator), (_, xj)| {
                        (
                            numerator.multiply_by_linear_factor(xj),
                            &denominator * &(&xs[i] - xj),
                        )
                    },
                );
            let basis = numerator.scale(&denominator.invert()?);
            trace!("Lagrange basis for x={}: {:?}", point.x, basis.coefficients);
            result = result.add(&basis.scale(&Rational::from(&point.y)));
        }
        debug!(
            "Interpolated {} points into a polynomial of degree {}",
            points.len(),
            result.degree()
        );
        Ok(result)
    }

    /// Fails on the first abscissa that appears twice.
    pub fn check_distinct_abscissas(points: &[Point]) -> RecoveryResult<()> {
        let mut seen = BTreeSet::new();
        for point in points {
            ensure!(
                seen.insert(&point.x),
                RecoveryError::DuplicateAbscissa {
                    x: point.x.to_string()
                }
            );
        }
        Ok(())
    }

    // Drop zero high-order coefficients, keeping at least the constant term.
    fn trimmed(mut coefficients: Vec<Rational>) -> Polynomial {
        while coefficients.len() > 1 && coefficients.last().map_or(false, Rational::is_zero) {
            coefficients.pop();
        }
        if coefficients.is_empty() {
            coefficients.push(Rational::zero());
        }
        Polynomial { coefficients }
    }
}
