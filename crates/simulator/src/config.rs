// Copyright (c) 2025 Dimitris Kafetzis
//
// Licensed under the MIT License.
// See LICENSE file in the project root for full license information.
//
// SPDX-License-Identifier: MIT

//! Scenario configuration loaded from TOML files or constructed programmatically.
//!
//! # TOML Format
//! ```toml
//! strategy = "first-fit"
//! partitions = ["100K", "200K", "300K"]
//! jobs = ["80K", "150K", "250K"]
//!
//! [[steps]]
//! action = "allocate"
//!
//! [[steps]]
//! action = "deallocate"
//! job = "J2"
//!
//! [[steps]]
//! action = "add-job"
//! size = "180K"
//!
//! [[steps]]
//! action = "allocate"
//! strategy = "best-fit"
//! ```
//!
//! Without any `[[steps]]` the scenario allocates once with `strategy`.

use crate::{AllocationReport, Allocator, SimulatorError};
use memory_model::{JobId, MemorySize};
use placement_strategy::StrategyKind;
use std::path::Path;

/// One scripted action.
#[derive(Debug, Clone, PartialEq, serde::Serialize, serde::Deserialize)]
#[serde(tag = "action", rename_all = "kebab-case")]
pub enum Step {
    /// Runs an allocation pass; falls back to the scenario strategy.
    Allocate {
        #[serde(default, skip_serializing_if = "Option::is_none")]
        strategy: Option<StrategyKind>,
    },
    /// Deallocates a job by label (`"J2"`).
    Deallocate { job: String },
    AddPartition { size: String },
    AddJob { size: String },
    Reset,
}

/// A scripted simulation.
#[derive(Debug, Clone, PartialEq, serde::Serialize, serde::Deserialize)]
pub struct ScenarioConfig {
    /// Default strategy: `"first-fit"`, `"best-fit"`, `"worst-fit"`, `"next-fit"`.
    /// Unknown names are rejected when the file is parsed.
    #[serde(default = "default_strategy")]
    pub strategy: StrategyKind,
    /// Initial partition sizes (human-readable, e.g. `"100K"`).
    #[serde(default)]
    pub partitions: Vec<String>,
    /// Initial job sizes.
    #[serde(default)]
    pub jobs: Vec<String>,
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub steps: Vec<Step>,
}

fn default_strategy() -> StrategyKind {
    StrategyKind::FirstFit
}

/// The result of running a scenario.
#[derive(Debug, Clone)]
pub struct ScenarioRun {
    /// Session state after the last step.
    pub allocator: Allocator,
    /// Reports from each allocation step, in order.
    pub reports: Vec<AllocationReport>,
}

impl ScenarioConfig {
    /// Loads a scenario from a TOML file.
    pub fn from_file(path: &Path) -> Result<Self, SimulatorError> {
        let content = std::fs::read_to_string(path).map_err(|e| {
            SimulatorError::Config(format!("cannot read scenario '{}': {e}", path.display()))
        })?;
        Self::from_toml(&content)
    }

    /// Parses a scenario from a TOML string.
    pub fn from_toml(toml_str: &str) -> Result<Self, SimulatorError> {
        toml::from_str(toml_str)
            .map_err(|e| SimulatorError::Config(format!("TOML parse error: {e}")))
    }

    /// Serialises the scenario to TOML.
    pub fn to_toml(&self) -> Result<String, SimulatorError> {
        toml::to_string_pretty(self)
            .map_err(|e| SimulatorError::Config(format!("TOML serialise error: {e}")))
    }

    /// Creates a session holding the configured partitions and jobs.
    pub fn build_session(&self) -> Result<Allocator, SimulatorError> {
        let mut allocator = Allocator::new();
        for size in &self.partitions {
            allocator.add_partition_sized(MemorySize::parse(size)?);
        }
        for size in &self.jobs {
            allocator.add_job_sized(MemorySize::parse(size)?);
        }
        Ok(allocator)
    }

    /// Builds the session and executes every step in order.
    ///
    /// Stops at the first failing step and returns its error.
    pub fn run(&self) -> Result<ScenarioRun, SimulatorError> {
        let mut allocator = self.build_session()?;
        let mut reports = Vec::new();

        if self.steps.is_empty() {
            reports.push(allocator.allocate(self.strategy));
        }

        for (n, step) in self.steps.iter().enumerate() {
            tracing::debug!("step {}: {step:?}", n + 1);
            match step {
                Step::Allocate { strategy } => {
                    reports.push(allocator.allocate(strategy.unwrap_or(self.strategy)));
                }
                Step::Deallocate { job } => {
                    allocator.deallocate(JobId::parse(job)?)?;
                }
                Step::AddPartition { size } => {
                    allocator.add_partition_sized(MemorySize::parse(size)?);
                }
                Step::AddJob { size } => {
                    allocator.add_job_sized(MemorySize::parse(size)?);
                }
                Step::Reset => allocator.reset(),
            }
        }

        Ok(ScenarioRun { allocator, reports })
    }
}

impl Default for ScenarioConfig {
    fn default() -> Self {
        Self {
            strategy: default_strategy(),
            partitions: Vec::new(),
            jobs: Vec::new(),
            steps: Vec::new(),
        }
    }
}
