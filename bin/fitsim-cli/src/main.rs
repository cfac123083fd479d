// Copyright (c) 2025 Dimitris Kafetzis
//
// Licensed under the MIT License.
// See LICENSE file in the project root for full license information.
//
// SPDX-License-Identifier: MIT

//! # fitsim
//!
//! Command-line shell for the fixed-partition allocation simulator.
//!
//! ## Usage
//! ```bash
//! # One allocation pass
//! fitsim simulate --partitions 100,200,300 --jobs 80,150,250 --strategy first-fit
//!
//! # Scripted scenario
//! fitsim run --config scenario.toml
//!
//! # All four strategies side by side
//! fitsim compare --partitions 100,500,200,300,600 --jobs 212,417,112,426
//!
//! # Interactive session
//! fitsim shell
//! ```

mod commands;

use clap::{Parser, Subcommand};
use memory_model::MemorySize;
use placement_strategy::StrategyKind;

#[derive(Parser)]
#[command(
    name = "fitsim",
    about = "Fixed-partition memory allocation simulator (first, best, worst, next fit)",
    version,
    author
)]
struct Cli {
    /// Enable verbose logging (repeat for more: -v, -vv, -vvv).
    #[arg(short, long, action = clap::ArgAction::Count, global = true)]
    verbose: u8,

    /// Print JSON instead of tables.
    #[arg(long, global = true)]
    json: bool,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Allocate a set of jobs to a set of partitions once.
    Simulate {
        /// Comma-separated partition sizes in KB (e.g., "100,200,1M").
        #[arg(short, long, value_delimiter = ',', required = true)]
        partitions: Vec<MemorySize>,

        /// Comma-separated job sizes in KB.
        #[arg(short, long, value_delimiter = ',', required = true)]
        jobs: Vec<MemorySize>,

        /// Placement strategy: first-fit, best-fit, worst-fit, next-fit.
        #[arg(short, long, default_value = "first-fit")]
        strategy: StrategyKind,
    },

    /// Run a scripted scenario from a TOML file.
    Run {
        /// Path to the scenario file.
        #[arg(short, long)]
        config: std::path::PathBuf,
    },

    /// Run every strategy on the same workload and compare the results.
    Compare {
        /// Comma-separated partition sizes in KB.
        #[arg(short, long, value_delimiter = ',', required = true)]
        partitions: Vec<MemorySize>,

        /// Comma-separated job sizes in KB.
        #[arg(short, long, value_delimiter = ',', required = true)]
        jobs: Vec<MemorySize>,
    },

    /// Interactive session: add partitions and jobs, allocate, deallocate, reset.
    Shell,
}

fn main() -> anyhow::Result<()> {
    let cli = Cli::parse();

    commands::init_tracing(cli.verbose);

    match cli.command {
        Commands::Simulate {
            partitions,
            jobs,
            strategy,
        } => commands::simulate::execute(&partitions, &jobs, strategy, cli.json),
        Commands::Run { config } => commands::run::execute(&config, cli.json),
        Commands::Compare { partitions, jobs } => {
            commands::compare::execute(&partitions, &jobs, cli.json)
        }
        Commands::Shell => commands::shell::execute(cli.json),
    }
}
