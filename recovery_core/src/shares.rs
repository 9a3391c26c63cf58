// Copyright (c) Facebook, Inc. and its affiliates.
// SPDX-License-Identifier: Apache-2.0

use crate::{
    base_types::Point,
    error::{RecoveryError, RecoveryResult},
};
use log::debug;
use serde::{Deserialize, Deserializer, Serialize};
use std::collections::BTreeMap;

#[cfg(test)]
#[path = "unit_tests/shares_tests.rs"]
mod shares_tests;

/// The `keys` header of a share file.
#[derive(Eq, PartialEq, Clone, Debug, Serialize, Deserialize)]
pub struct ShareKeys {
    /// Declared number of shares.
    pub n: usize,
    /// Number of shares needed to rebuild the polynomial.
    pub k: usize,
}

/// One share as written in the file: the digits of `y` in some base.
#[derive(Eq, PartialEq, Clone, Debug, Serialize, Deserialize)]
pub struct EncodedShare {
    #[serde(deserialize_with = "base_from_string_or_number")]
    pub base: u32,
    pub value: String,
}

/// A share file: a `keys` header plus one entry per share, keyed by its x-coordinate.
#[derive(Eq, PartialEq, Clone, Debug, Serialize, Deserialize)]
pub struct ShareFile {
    pub keys: ShareKeys,
    #[serde(flatten)]
    pub shares: BTreeMap<String, EncodedShare>,
}

/// Decoded shares, ordered by x, with the threshold to use.
#[derive(Eq, PartialEq, Clone, Debug)]
pub struct ShareSet {
    pub points: Vec<Point>,
    pub threshold: usize,
}

impl ShareFile {
    pub fn from_json(data: &[u8]) -> Result<Self, serde_json::Error> {
        serde_json::from_slice(data)
    }

    /// Check the declared count and decode every share.
    pub fn decode(&self) -> RecoveryResult<ShareSet> {
        ensure!(
            self.keys.n == self.shares.len(),
            RecoveryError::PointCountMismatch {
                expected: self.keys.n,
                actual: self.shares.len(),
            }
        );
        let mut points = self
            .shares
            .iter()
            .map(|(key, share)| Point::decode(key, share.base, &share.value))
            .collect::<RecoveryResult<Vec<_>>>()?;
        points.sort_by(|a, b| a.x.cmp(&b.x));
        debug!(
            "Decoded {} shares (threshold k={})",
            points.len(),
            self.keys.k
        );
        Ok(ShareSet {
            points,
            threshold: self.keys.k,
        })
    }
}

fn base_from_string_or_number<'de, D>(deserializer: D) -> Result<u32, D::Error>
where
    D: Deserializer<'de>,
{
    #[derive(Deserialize)]
    #[serde(untagged)]
    enum Base {
        Number(u32),
        Text(String),
    }

    match Base::deserialize(deserializer)? {
        Base::Number(base) => Ok(base),
        Base::Text(s) => s
            .trim()
            .parse()
            .map_err(|_| serde::de::Error::custom(format!("Invalid base {:?}", s))),
    }
}
