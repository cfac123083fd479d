// Copyright (c) 2025 Dimitris Kafetzis
//
// Licensed under the MIT License.
// See LICENSE file in the project root for full license information.
//
// SPDX-License-Identifier: MIT

//! Subcommands and the table rendering they share.

pub mod compare;
pub mod run;
pub mod shell;
pub mod simulate;

use memory_model::{JobStatus, MemorySize};
use simulator::{AllocationReport, Allocator, Placement};
use std::io::Write;
use tracing_subscriber::EnvFilter;

/// Installs the stderr log subscriber. `RUST_LOG` wins over `-v`.
pub fn init_tracing(verbose: u8) {
    let level = match verbose {
        0 => "warn",
        1 => "info",
        2 => "debug",
        _ => "trace",
    };
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(level));
    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .with_target(false)
        .init();
}

/// Builds a session from validated sizes.
pub fn build_session(partitions: &[MemorySize], jobs: &[MemorySize]) -> Allocator {
    let mut session = Allocator::new();
    for &size in partitions {
        session.add_partition_sized(size);
    }
    for &size in jobs {
        session.add_job_sized(size);
    }
    session
}

/// Writes the per-job outcome of one allocation pass.
pub fn write_report(out: &mut impl Write, report: &AllocationReport) -> std::io::Result<()> {
    writeln!(out, "  Allocation ({})", report.strategy_name)?;
    if report.is_empty() {
        writeln!(out, "   No waiting jobs.")?;
        return Ok(());
    }
    for outcome in &report.outcomes {
        match outcome.placement {
            Placement::Allocated { partition, waste } => writeln!(
                out,
                "   {:<4} ({:>7}) → {:<4} waste {waste} KB",
                outcome.job.to_string(),
                outcome.required.to_string(),
                partition.to_string(),
            )?,
            Placement::StillWaiting => writeln!(
                out,
                "   {:<4} ({:>7}) → still waiting (no free partition large enough)",
                outcome.job.to_string(),
                outcome.required.to_string(),
            )?,
        }
    }
    writeln!(out, "   {}", report.summary())?;
    Ok(())
}

/// Writes the partition and job tables plus the usage line.
pub fn write_state(out: &mut impl Write, session: &Allocator) -> std::io::Result<()> {
    writeln!(out, "  {:<16} {:<16}", "Partition", "Allocated Job")?;
    writeln!(out, "  {}", "-".repeat(34))?;
    for p in session.partitions() {
        let occupant = p
            .occupant()
            .and_then(|id| session.job(id))
            .map(|job| format!("{} ({})", job.id(), job.size()))
            .unwrap_or_default();
        writeln!(out, "  {:<16} {:<16}", format!("{} ({})", p.id(), p.size()), occupant)?;
    }
    writeln!(out)?;

    writeln!(
        out,
        "  {:<6} {:>10} {:<10} {:<11}",
        "Job", "Memory", "Status", "Partition"
    )?;
    writeln!(out, "  {}", "-".repeat(40))?;
    for job in session.jobs() {
        let partition = match (job.status(), job.partition()) {
            (JobStatus::Finished, Some(p)) => format!("{p} (freed)"),
            (_, Some(p)) => p.to_string(),
            (_, None) => String::new(),
        };
        writeln!(
            out,
            "  {:<6} {:>10} {:<10} {:<11}",
            job.id().to_string(),
            job.size().to_string(),
            job.status().as_str(),
            partition,
        )?;
    }
    writeln!(out)?;
    writeln!(out, "  {}", session.usage().summary())?;
    Ok(())
}

/// Writes `value` as pretty JSON followed by a newline.
pub fn write_json(out: &mut impl Write, value: &impl serde::Serialize) -> anyhow::Result<()> {
    serde_json::to_writer_pretty(&mut *out, value)?;
    writeln!(out)?;
    Ok(())
}

/// Writes `value` as compact JSON on a single line.
pub fn write_json_line(out: &mut impl Write, value: &impl serde::Serialize) -> anyhow::Result<()> {
    serde_json::to_writer(&mut *out, value)?;
    writeln!(out)?;
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use placement_strategy::StrategyKind;

    fn sizes(kbs: &[u64]) -> Vec<MemorySize> {
        kbs.iter().map(|&kb| MemorySize::from_kb(kb).unwrap()).collect()
    }

    #[test]
    fn test_write_state_tables() {
        let mut session = build_session(&sizes(&[100, 200]), &sizes(&[80, 500]));
        session.allocate(StrategyKind::FirstFit);

        let mut buf = Vec::new();
        write_state(&mut buf, &session).unwrap();
        let text = String::from_utf8(buf).unwrap();

        assert!(text.contains("F1 (100 KB)"));
        assert!(text.contains("J1 (80 KB)"));
        assert!(text.contains("Allocated"));
        assert!(text.contains("Waiting"));
        assert!(text.contains("20 KB internal fragmentation"));
    }

    #[test]
    fn test_write_state_marks_freed_partitions() {
        let mut session = build_session(&sizes(&[100, 200, 300]), &sizes(&[80, 150, 250]));
        session.allocate(StrategyKind::FirstFit);
        session.deallocate(memory_model::JobId::from_index(1)).unwrap();
        session.add_job(180).unwrap();
        session.allocate(StrategyKind::FirstFit);

        let mut buf = Vec::new();
        write_state(&mut buf, &session).unwrap();
        let text = String::from_utf8(buf).unwrap();

        let row = |label: &str| {
            text.lines()
                .find(|l| l.trim_start().starts_with(label))
                .unwrap()
                .to_string()
        };
        assert!(row("J2 ").contains("Finished"));
        assert!(row("J2 ").contains("F2 (freed)"));
        assert!(row("J4 ").contains("Allocated"));
        assert!(!row("J4 ").contains("freed"));
    }

    #[test]
    fn test_write_report() {
        let mut session = build_session(&sizes(&[50]), &sizes(&[80, 40]));
        let report = session.allocate(StrategyKind::BestFit);

        let mut buf = Vec::new();
        write_report(&mut buf, &report).unwrap();
        let text = String::from_utf8(buf).unwrap();

        assert!(text.contains("best-fit"));
        assert!(text.contains("still waiting"));
        assert!(text.contains("waste 10 KB"));
    }

    #[test]
    fn test_write_report_empty() {
        let mut session = build_session(&sizes(&[50]), &[]);
        let report = session.allocate(StrategyKind::NextFit);

        let mut buf = Vec::new();
        write_report(&mut buf, &report).unwrap();
        assert!(String::from_utf8(buf).unwrap().contains("No waiting jobs"));
    }
}
