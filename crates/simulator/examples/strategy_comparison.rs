// Copyright (c) 2025 Dimitris Kafetzis
//
// Licensed under the MIT License.
// See LICENSE file in the project root for full license information.
//
// SPDX-License-Identifier: MIT

//! Example: Compare placement strategies on one workload.
//!
//! Each strategy gets its own fresh session with the same partitions and
//! jobs, so the differences come only from where jobs land.
//!
//! ```bash
//! cargo run -p simulator --example strategy_comparison
//! ```

use placement_strategy::StrategyKind;
use simulator::Allocator;

fn main() -> Result<(), Box<dyn std::error::Error>> {
    tracing_subscriber::fmt()
        .with_env_filter("warn")
        .with_writer(std::io::stderr)
        .init();

    let partitions = [100, 500, 200, 300, 600];
    let jobs = [212, 417, 112, 426];

    println!("Partitions (KB): {partitions:?}");
    println!("Jobs (KB):       {jobs:?}\n");
    println!(
        "{:<12} {:<28} {:>8} {:>8} {:>12}",
        "Strategy", "Placements", "Placed", "Waiting", "Waste KB",
    );
    println!("{}", "-".repeat(72));

    for kind in StrategyKind::ALL {
        let mut session = Allocator::new();
        for kb in partitions {
            session.add_partition(kb)?;
        }
        for kb in jobs {
            session.add_job(kb)?;
        }

        let report = session.allocate(kind);
        let placements: Vec<String> = report
            .outcomes
            .iter()
            .map(|o| match o.partition() {
                Some(p) => format!("{}→{p}", o.job),
                None => format!("{}→-", o.job),
            })
            .collect();

        println!(
            "{:<12} {:<28} {:>8} {:>8} {:>12}",
            kind.display_name(),
            placements.join(" "),
            report.allocated_count(),
            report.waiting_count(),
            report.total_waste(),
        );
    }

    Ok(())
}
