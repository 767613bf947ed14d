//! Runs tracker packages through the dispatcher and writes the summaries.

use crate::metrics::summary::TrainingInfo;
use crate::workouts::dispatch::Package;
use anyhow::{bail, Context};
use std::io::Write;

/// Build one package's workout and summarise it.
///
/// Non-finite metrics (zero duration or height) are an error.
pub fn process_package(package: &Package) -> anyhow::Result<TrainingInfo> {
    let workout = package
        .build()
        .with_context(|| format!("Failed to read package {}", package.tag))?;

    let info = workout.summary();
    if !info.is_finite() {
        tracing::error!("Degenerate readings for {}: {:?}", package.tag, package.readings);
        bail!(
            "Package {} produced non-finite metrics from readings {:?}",
            package.tag,
            package.readings
        );
    }

    Ok(info)
}

/// Write one summary line per package, stopping at the first failure.
///
/// Returns the number of lines written.
pub fn run<W: Write>(packages: &[Package], out: &mut W) -> anyhow::Result<usize> {
    let mut written = 0;

    for package in packages {
        let info = process_package(package)?;
        writeln!(out, "{}", info.render()).context("Failed to write summary")?;
        written += 1;
    }

    Ok(written)
}
