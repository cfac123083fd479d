// Copyright (c) 2025 Dimitris Kafetzis
//
// Licensed under the MIT License.
// See LICENSE file in the project root for full license information.
//
// SPDX-License-Identifier: MIT

//! `fitsim run` command: execute a scripted scenario file.

use super::{write_json, write_report, write_state};
use anyhow::Context;
use simulator::{AllocationReport, ScenarioConfig, SessionSnapshot, SessionStats};
use std::io::Write;
use std::path::Path;

#[derive(serde::Serialize)]
struct RunOutput<'a> {
    reports: &'a [AllocationReport],
    state: SessionSnapshot,
    stats: &'a SessionStats,
}

pub fn execute(config: &Path, json: bool) -> anyhow::Result<()> {
    let scenario = ScenarioConfig::from_file(config)?;
    tracing::info!(
        "scenario '{}': {} partition(s), {} job(s), {} step(s)",
        config.display(),
        scenario.partitions.len(),
        scenario.jobs.len(),
        scenario.steps.len(),
    );

    let run = scenario
        .run()
        .with_context(|| format!("scenario '{}' failed", config.display()))?;

    let stdout = std::io::stdout();
    let mut out = stdout.lock();

    if json {
        return write_json(
            &mut out,
            &RunOutput {
                reports: &run.reports,
                state: run.allocator.snapshot(),
                stats: run.allocator.stats(),
            },
        );
    }

    writeln!(out, "╔══════════════════════════════════════════════════════╗")?;
    writeln!(out, "║              fitsim · Scenario Runner               ║")?;
    writeln!(out, "╚══════════════════════════════════════════════════════╝")?;
    writeln!(out)?;
    writeln!(out, "  Scenario: {}", config.display())?;
    writeln!(out)?;
    for report in &run.reports {
        write_report(&mut out, report)?;
        writeln!(out)?;
    }
    write_state(&mut out, &run.allocator)?;
    writeln!(out, "  {}", run.allocator.stats().summary())?;
    Ok(())
}
