// Copyright (c) 2025 Dimitris Kafetzis
//
// Licensed under the MIT License.
// See LICENSE file in the project root for full license information.
//
// SPDX-License-Identifier: MIT

//! `fitsim simulate` command: one allocation pass over the given workload.

use super::{build_session, write_json, write_report, write_state};
use memory_model::MemorySize;
use placement_strategy::StrategyKind;
use simulator::{AllocationReport, SessionSnapshot};
use std::io::Write;

#[derive(serde::Serialize)]
struct SimulateOutput<'a> {
    report: &'a AllocationReport,
    state: SessionSnapshot,
}

pub fn execute(
    partitions: &[MemorySize],
    jobs: &[MemorySize],
    strategy: StrategyKind,
    json: bool,
) -> anyhow::Result<()> {
    let mut session = build_session(partitions, jobs);
    let report = session.allocate(strategy);

    let stdout = std::io::stdout();
    let mut out = stdout.lock();

    if json {
        return write_json(
            &mut out,
            &SimulateOutput {
                report: &report,
                state: session.snapshot(),
            },
        );
    }

    writeln!(out, "╔══════════════════════════════════════════════════════╗")?;
    writeln!(out, "║          fitsim · {:<35}║", strategy.display_name())?;
    writeln!(out, "╚══════════════════════════════════════════════════════╝")?;
    writeln!(out)?;
    write_report(&mut out, &report)?;
    writeln!(out)?;
    write_state(&mut out, &session)?;
    Ok(())
}
