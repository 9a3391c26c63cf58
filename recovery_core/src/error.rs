// Copyright (c) Facebook, Inc. and its affiliates.
// SPDX-License-Identifier: Apache-2.0

use thiserror::Error;

#[macro_export]
macro_rules! bail {
    ($e:expr) => {
        return Err($e);
    };
}

#[macro_export(local_inner_macros)]
macro_rules! ensure {
    ($cond:expr, $e:expr) => {
        if !($cond) {
            bail!($e);
        }
    };
}

pub type RecoveryResult<T> = Result<T, RecoveryError>;

#[derive(Debug, Clone, PartialEq, Eq, Error)]
/// Custom error type for secret recovery.
pub enum RecoveryError {
    // Arithmetic
    #[error("Zero denominator")]
    ZeroDenominator,
    #[error("Divide by zero")]
    DivideByZero,
    #[error("Zero has no inverse")]
    ZeroHasNoInverse,
    #[error("Value {value} is not an integer")]
    NotAnInteger { value: String },

    // Share decoding
    #[error("Base {base} is not supported (expected 2 to 36)")]
    InvalidBase { base: u32 },
    #[error("Invalid digit '{digit}' for base {base}")]
    InvalidDigit { digit: char, base: u32 },
    #[error("Share key {key:?} is not a decimal integer")]
    InvalidAbscissa { key: String },
    #[error("Expected n={expected} points, got {actual}")]
    PointCountMismatch { expected: usize, actual: usize },

    // Reconstruction
    #[error("Invalid threshold k={threshold} for {points} points")]
    InvalidThreshold { threshold: usize, points: usize },
    #[error("Duplicate abscissa x={x}")]
    DuplicateAbscissa { x: String },
}
