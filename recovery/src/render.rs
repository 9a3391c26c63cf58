// Copyright (c) Facebook, Inc. and its affiliates.
// SPDX-License-Identifier: Apache-2.0

use recovery_core::reconstruction::Reconstruction;
use std::str::FromStr;

#[cfg(test)]
#[path = "unit_tests/render_tests.rs"]
mod render_tests;

#[derive(Eq, PartialEq, Copy, Clone, Debug)]
pub enum ReportFormat {
    Json,
    Text,
}

impl FromStr for ReportFormat {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "json" => Ok(ReportFormat::Json),
            "text" => Ok(ReportFormat::Text),
            _ => Err(format!("Unknown report format {:?}", s)),
        }
    }
}

pub fn render(reconstruction: &Reconstruction, format: ReportFormat) -> String {
    match format {
        ReportFormat::Json => reconstruction.to_json(),
        ReportFormat::Text => render_text(reconstruction),
    }
}

/// Human-readable report, one fact per line.
pub fn render_text(reconstruction: &Reconstruction) -> String {
    let coefficients: Vec<_> = reconstruction
        .coefficients
        .iter()
        .map(ToString::to_string)
        .collect();
    let mut lines = vec![
        format!("degree: {}", reconstruction.degree),
        format!("coefficients (low->high): {}", coefficients.join(", ")),
        format!("f(0): {}", reconstruction.f0),
        format!("verified: {}", reconstruction.verified),
    ];
    if !reconstruction.mismatches.is_empty() {
        lines.push("mismatches:".to_string());
        lines.extend(reconstruction.mismatches.iter().map(|mismatch| {
            format!(
                "  x={} expected={} got={}",
                mismatch.x, mismatch.expected, mismatch.got
            )
        }));
    }
    lines.join("\n")
}
