// Copyright (c) 2025 Dimitris Kafetzis
//
// Licensed under the MIT License.
// See LICENSE file in the project root for full license information.
//
// SPDX-License-Identifier: MIT

//! # simulator
//!
//! The fixed-partition allocation session.
//!
//! An [`Allocator`] holds creation-ordered partitions and jobs, places
//! waiting jobs with any [`placement_strategy::PlacementStrategy`], frees
//! partitions on deallocation, and wipes everything on reset. Each call
//! returns enough information (an [`AllocationReport`], a
//! [`SessionSnapshot`]) for a shell to render the state without reaching
//! into the session.
//!
//! # Key Components
//!
//! - [`Allocator`] — the session and its operations.
//! - [`AllocationReport`] — per-job outcome of one allocation pass.
//! - [`SessionStats`] / [`MemoryUsage`] — counters and a usage breakdown
//!   including internal fragmentation.
//! - [`ScenarioConfig`] — scripted simulations loaded from TOML.
//!
//! # Example
//! ```
//! use placement_strategy::StrategyKind;
//! use simulator::{Allocator, Placement};
//!
//! let mut session = Allocator::new();
//! session.add_partition(50).unwrap();
//! let job = session.add_job(80).unwrap();
//!
//! // No partition is large enough: the job stays waiting, no error.
//! let report = session.allocate(StrategyKind::WorstFit);
//! assert_eq!(report.outcome_for(job).unwrap().placement, Placement::StillWaiting);
//! ```

mod allocator;
mod config;
mod error;
mod report;
mod snapshot;
mod stats;

pub use allocator::Allocator;
pub use config::{ScenarioConfig, ScenarioRun, Step};
pub use error::SimulatorError;
pub use report::{AllocationReport, JobOutcome, Placement};
pub use snapshot::{JobRow, PartitionRow, SessionSnapshot};
pub use stats::{MemoryUsage, SessionStats};
