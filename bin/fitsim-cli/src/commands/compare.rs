// Copyright (c) 2025 Dimitris Kafetzis
//
// Licensed under the MIT License.
// See LICENSE file in the project root for full license information.
//
// SPDX-License-Identifier: MIT

//! `fitsim compare` command: every strategy on the same workload.
//!
//! Each strategy runs on its own fresh session so that results are
//! independent of each other (Next Fit in particular starts from a reset
//! cursor every time).

use super::{build_session, write_json};
use memory_model::MemorySize;
use placement_strategy::StrategyKind;

#[derive(Debug, serde::Serialize)]
struct ComparisonRow {
    strategy: StrategyKind,
    placed: usize,
    waiting: usize,
    internal_fragmentation_kb: u64,
    utilisation: f64,
}

fn compare(partitions: &[MemorySize], jobs: &[MemorySize]) -> Vec<ComparisonRow> {
    StrategyKind::ALL
        .iter()
        .map(|&kind| {
            let mut session = build_session(partitions, jobs);
            let report = session.allocate(kind);
            ComparisonRow {
                strategy: kind,
                placed: report.allocated_count(),
                waiting: report.waiting_count(),
                internal_fragmentation_kb: report.total_waste(),
                utilisation: session.usage().utilisation(),
            }
        })
        .collect()
}

pub fn execute(partitions: &[MemorySize], jobs: &[MemorySize], json: bool) -> anyhow::Result<()> {
    let rows = compare(partitions, jobs);

    if json {
        let stdout = std::io::stdout();
        return write_json(&mut stdout.lock(), &rows);
    }

    println!("╔══════════════════════════════════════════════════════╗");
    println!("║             fitsim · Strategy Comparison            ║");
    println!("╚══════════════════════════════════════════════════════╝");
    println!();
    println!(
        "  {:<12} {:>8} {:>8} {:>12} {:>12}",
        "Strategy", "Placed", "Waiting", "Waste KB", "Utilisation",
    );
    println!("  {}", "-".repeat(56));

    for row in &rows {
        println!(
            "  {:<12} {:>8} {:>8} {:>12} {:>11.1}%",
            row.strategy.display_name(),
            row.placed,
            row.waiting,
            row.internal_fragmentation_kb,
            row.utilisation * 100.0,
        );
    }

    let best = rows
        .iter()
        .max_by_key(|r| (r.placed, std::cmp::Reverse(r.internal_fragmentation_kb)));
    if let Some(best) = best {
        println!();
        println!(
            "  Most placements with least waste: {}",
            best.strategy.display_name()
        );
    }
    Ok(())
}
