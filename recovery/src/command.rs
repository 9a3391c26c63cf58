// Copyright (c) Facebook, Inc. and its affiliates.
// SPDX-License-Identifier: Apache-2.0

use crate::{
    config::{read_shares, write_report},
    render::{render, ReportFormat},
};
use anyhow::Result;
use recovery_core::reconstruction::{Reconstruction, Selection};
use std::path::PathBuf;
use structopt::StructOpt;

#[cfg(test)]
#[path = "unit_tests/command_tests.rs"]
mod command_tests;

#[derive(StructOpt, Debug)]
#[structopt(
    name = "recover",
    about = "Recovers a threshold-shared secret by exact Lagrange interpolation"
)]
pub struct RecoverOpt {
    /// Sets the JSON file holding the shares
    #[structopt(parse(from_os_str), default_value = "data/sample.json")]
    pub input: PathBuf,

    /// Interpolates through every share instead of the first k
    #[structopt(long)]
    pub use_all: bool,

    /// Output format. Acceptable values are json and text.
    #[structopt(long, default_value = "json", possible_values = &["json", "text"])]
    pub format: ReportFormat,

    /// Writes the report to this file instead of stdout
    #[structopt(long, parse(from_os_str))]
    pub output: Option<PathBuf>,

    /// Sets the level of verbosity (repeat for more)
    #[structopt(short, long, parse(from_occurrences))]
    pub verbose: u8,
}

impl RecoverOpt {
    pub fn selection(&self) -> Selection {
        if self.use_all {
            Selection::All
        } else {
            Selection::Threshold
        }
    }

    /// Default log filter for the requested verbosity.
    pub fn log_level(&self) -> &'static str {
        match self.verbose {
            0 => "error",
            1 => "warn",
            2 => "info",
            3 => "debug",
            _ => "trace",
        }
    }
}

/// Read the shares, reconstruct, and write the rendered report.
pub fn run(options: &RecoverOpt) -> Result<Reconstruction> {
    let shares = read_shares(&options.input)?;
    let reconstruction = Reconstruction::from_shares(&shares, options.selection())?;
    write_report(
        &render(&reconstruction, options.format),
        options.output.as_deref(),
    )?;
    Ok(reconstruction)
}
