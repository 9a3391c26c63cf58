// Copyright (c) Facebook, Inc. and its affiliates.
// SPDX-License-Identifier: Apache-2.0

use super::*;
use num_bigint::BigInt;
use rand::{rngs::StdRng, Rng, SeedableRng};

impl Polynomial {
    /// Polynomial with the given integer coefficients, lowest degree first.
    pub fn from_integers(coefficients: &[i64]) -> Self {
        coefficients
            .iter()
            .rev()
            .fold(Polynomial::zero(), |acc, c| {
                // acc * x + c
                acc.multiply_by_linear_factor(&Rational::zero())
                    .add(&Polynomial::constant(Rational::from(*c)))
            })
    }

    /// Random polynomial of exactly the given degree with small integer coefficients.
    pub fn random(rng: &mut StdRng, degree: usize) -> Self {
        let mut coefficients: Vec<i64> = (0..=degree).map(|_| rng.gen_range(-1000..1000)).collect();
        if coefficients[degree] == 0 {
            coefficients[degree] = 1;
        }
        Self::from_integers(&coefficients)
    }

    pub fn shares(&self, xs: &[i64]) -> Vec<Point> {
        xs.iter()
            .map(|x| {
                let y = self.evaluate(&Rational::from(*x)).to_exact_integer().unwrap();
                Point::new(*x, y)
            })
            .collect()
    }
}

fn integers(values: &[i64]) -> Vec<Rational> {
    values.iter().map(|v| Rational::from(*v)).collect()
}

#[test]
fn test_add_trims() {
    let a = Polynomial::from_integers(&[1, 2, 3]);
    let b = Polynomial::from_integers(&[4, 5, -3]);
    assert_eq!(a.add(&b).coefficients(), &integers(&[5, 7])[..]);

    let c = Polynomial::from_integers(&[-1, -2, -3]);
    let sum = a.add(&c);
    assert!(sum.is_zero());
    assert_eq!(sum.degree(), 0);

    let d = Polynomial::from_integers(&[10]);
    assert_eq!(a.add(&d).coefficients(), &integers(&[11, 2, 3])[..]);
}

#[test]
fn test_scale() {
    let p = Polynomial::from_integers(&[2, -4, 6]);
    let half = Rational::new(1, 2).unwrap();
    assert_eq!(p.scale(&half).coefficients(), &integers(&[1, -2, 3])[..]);
    assert!(p.scale(&Rational::zero()).is_zero());
}

#[test]
fn test_multiply_by_linear_factor() {
    // (x - 1)(x - 2) = x^2 - 3x + 2
    let p = Polynomial::constant(Rational::one())
        .multiply_by_linear_factor(&Rational::from_integer(1))
        .multiply_by_linear_factor(&Rational::from_integer(2));
    assert_eq!(p.coefficients(), &integers(&[2, -3, 1])[..]);
    assert_eq!(p.degree(), 2);

    // (3x^2 + 1)(x + 2) = 3x^3 + 6x^2 + x + 2
    let q = Polynomial::from_integers(&[1, 0, 3]).multiply_by_linear_factor(&Rational::from_integer(-2));
    assert_eq!(q.coefficients(), &integers(&[2, 1, 6, 3])[..]);

    let third = Rational::new(1, 3).unwrap();
    let r = Polynomial::constant(Rational::one()).multiply_by_linear_factor(&third);
    assert_eq!(r.coefficients(), &[-third, Rational::one()][..]);
}

#[test]
fn test_evaluate() {
    let p = Polynomial::from_integers(&[7, -2, 1]);
    assert_eq!(p.evaluate(&Rational::zero()), Rational::from_integer(7));
    assert_eq!(p.evaluate(&Rational::from_integer(3)), Rational::from_integer(10));
    assert_eq!(p.evaluate(&Rational::from_integer(-1)), Rational::from_integer(10));
    assert_eq!(
        p.evaluate(&Rational::new(1, 2).unwrap()),
        Rational::new(25, 4).unwrap()
    );
    assert_eq!(Polynomial::zero().evaluate(&Rational::from_integer(5)), Rational::zero());
}

#[test]
fn test_interpolate() {
    let points = vec![Point::new(1, 6), Point::new(2, 7), Point::new(3, 10)];
    let p = Polynomial::interpolate(&points).unwrap();
    assert_eq!(p.coefficients(), &integers(&[7, -2, 1])[..]);
    assert_eq!(p.constant_term(), &Rational::from_integer(7));

    // x^2 + 5
    let points = vec![Point::new(1, 6), Point::new(2, 9), Point::new(3, 14)];
    let p = Polynomial::interpolate(&points).unwrap();
    assert_eq!(p.coefficients(), &integers(&[5, 0, 1])[..]);
}

#[test]
fn test_interpolate_single_point() {
    let p = Polynomial::interpolate(&[Point::new(5, 42)]).unwrap();
    assert_eq!(p, Polynomial::constant(Rational::from_integer(42)));
}

#[test]
fn test_interpolate_with_cancellation() {
    // Three collinear points give a line, not a parabola.
    let points = vec![Point::new(0, 1), Point::new(1, 3), Point::new(2, 5)];
    let p = Polynomial::interpolate(&points).unwrap();
    assert_eq!(p.degree(), 1);
    assert_eq!(p.coefficients(), &integers(&[1, 2])[..]);
}

#[test]
fn test_interpolate_fractional_coefficients() {
    // y = x(x + 1) / 2
    let points = vec![Point::new(1, 1), Point::new(2, 3), Point::new(3, 6)];
    let p = Polynomial::interpolate(&points).unwrap();
    let half = Rational::new(1, 2).unwrap();
    assert_eq!(p.coefficients(), &[Rational::zero(), half.clone(), half][..]);
}

#[test]
fn test_interpolate_duplicate_abscissa() {
    let points = vec![Point::new(2, 5), Point::new(2, 9)];
    assert_eq!(
        Polynomial::interpolate(&points),
        Err(RecoveryError::DuplicateAbscissa {
            x: "2".to_string()
        })
    );
}

#[test]
fn test_interpolate_large_values() {
    let secret = BigInt::parse_bytes(b"9876543210987654321098765432109876543210", 10).unwrap();
    let slope = BigInt::parse_bytes(b"1234567890123456789", 10).unwrap();
    let points: Vec<_> = (1..=2)
        .map(|x| Point::new(x, &secret + &slope * BigInt::from(x)))
        .collect();
    let p = Polynomial::interpolate(&points).unwrap();
    assert_eq!(p.constant_term(), &Rational::from(secret));
    assert_eq!(p.coefficients()[1], Rational::from(slope));
}

#[test]
fn test_pass_through_and_degree_bound() {
    let mut rng = StdRng::seed_from_u64(7);
    for _ in 0..20 {
        let k = rng.gen_range(1..7);
        let mut xs: Vec<i64> = Vec::new();
        while xs.len() < k {
            let x = rng.gen_range(-50..50);
            if !xs.contains(&x) {
                xs.push(x);
            }
        }
        let points: Vec<_> = xs
            .iter()
            .map(|x| Point::new(*x, rng.gen_range(-10_000i64..10_000)))
            .collect();

        let p = Polynomial::interpolate(&points).unwrap();
        assert!(p.degree() <= k - 1);
        for point in &points {
            let value = p.evaluate(&Rational::from(&point.x));
            assert_eq!(value.to_exact_integer(), Ok(point.y.clone()));
        }
    }
}

#[test]
fn test_subset_invariance() {
    let mut rng = StdRng::seed_from_u64(42);
    for degree in 0..5 {
        let polynomial = Polynomial::random(&mut rng, degree);
        let shares = polynomial.shares(&[1, 2, 3, 4, 5, 6, 7, 8, 9, 10]);
        let k = degree + 1;
        for start in 0..=(shares.len() - k) {
            let subset = &shares[start..start + k];
            assert_eq!(Polynomial::interpolate(subset).unwrap(), polynomial);
        }
        let spread: Vec<_> = shares.iter().step_by(2).take(k).cloned().collect();
        assert_eq!(Polynomial::interpolate(&spread).unwrap(), polynomial);
    }
}
