// Copyright (c) Facebook, Inc. and its affiliates.
// SPDX-License-Identifier: Apache-2.0

use anyhow::{Context, Result};
use log::info;
use recovery_core::shares::{ShareFile, ShareSet};
use serde::de::DeserializeOwned;
use std::{
    fs::{self, OpenOptions},
    io::{BufWriter, Write},
    path::Path,
};

#[cfg(test)]
#[path = "unit_tests/config_tests.rs"]
mod config_tests;

pub trait Import: DeserializeOwned {
    fn import(path: &Path) -> Result<Self, std::io::Error> {
        let data = fs::read(path)?;
        Ok(serde_json::from_slice(data.as_slice())?)
    }
}

impl Import for ShareFile {}

/// Read a share file and decode its shares.
pub fn read_shares(path: &Path) -> Result<ShareSet> {
    let file = ShareFile::import(path)
        .with_context(|| format!("Failed to read share file {}", path.display()))?;
    let shares = file.decode()?;
    info!(
        "Loaded {} shares from {} (threshold k={})",
        shares.points.len(),
        path.display(),
        shares.threshold
    );
    Ok(shares)
}

/// Write a rendered report to `path`, or to stdout when no path is given.
pub fn write_report(report: &str, path: Option<&Path>) -> Result<()> {
    match path {
        None => println!("{}", report),
        Some(path) => {
            let file = OpenOptions::new()
                .create(true)
                .write(true)
                .truncate(true)
                .open(path)
                .with_context(|| format!("Failed to create {}", path.display()))?;
            let mut writer = BufWriter::new(file);
            writer.write_all(report.as_bytes())?;
            writer.write_all(b"\n")?;
            writer.flush()?;
            info!("Report written to {}", path.display());
        }
    }
    Ok(())
}
