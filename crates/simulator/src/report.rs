// Copyright (c) 2025 Dimitris Kafetzis
//
// Licensed under the MIT License.
// See LICENSE file in the project root for full license information.
//
// SPDX-License-Identifier: MIT

//! Per-call allocation outcomes.
//!
//! An [`AllocationReport`] lists, in job creation order, every job that
//! was `Waiting` when the pass began and what happened to it. Jobs that
//! were already `Allocated` or `Finished` do not appear.

use memory_model::{JobId, MemorySize, PartitionId};

/// What happened to one waiting job during an allocation pass.
#[derive(Debug, Clone, Copy, PartialEq, Eq, serde::Serialize)]
#[serde(tag = "result", rename_all = "snake_case")]
pub enum Placement {
    /// The job now occupies `partition`, leaving `waste` KB unused in it.
    Allocated { partition: PartitionId, waste: u64 },
    /// No free partition was large enough.
    StillWaiting,
}

/// Outcome for a single job.
#[derive(Debug, Clone, PartialEq, Eq, serde::Serialize)]
pub struct JobOutcome {
    pub job: JobId,
    pub required: MemorySize,
    pub placement: Placement,
}

impl JobOutcome {
    /// The partition received, if any.
    pub fn partition(&self) -> Option<PartitionId> {
        match self.placement {
            Placement::Allocated { partition, .. } => Some(partition),
            Placement::StillWaiting => None,
        }
    }
}

/// The result of one `allocate` call.
#[derive(Debug, Clone, PartialEq, Eq, serde::Serialize)]
pub struct AllocationReport {
    /// Strategy name that produced this report.
    pub strategy_name: String,
    /// One entry per job that was waiting, in creation order.
    pub outcomes: Vec<JobOutcome>,
}

impl AllocationReport {
    pub(crate) fn new(strategy_name: &str) -> Self {
        Self {
            strategy_name: strategy_name.to_string(),
            outcomes: Vec::new(),
        }
    }

    /// Returns the outcome recorded for `job`, if it was considered.
    pub fn outcome_for(&self, job: JobId) -> Option<&JobOutcome> {
        self.outcomes.iter().find(|o| o.job == job)
    }

    /// Number of jobs placed by this pass.
    pub fn allocated_count(&self) -> usize {
        self.outcomes
            .iter()
            .filter(|o| matches!(o.placement, Placement::Allocated { .. }))
            .count()
    }

    /// Number of jobs still waiting after this pass.
    pub fn waiting_count(&self) -> usize {
        self.outcomes.len() - self.allocated_count()
    }

    /// Internal fragmentation introduced by this pass, in KB.
    pub fn total_waste(&self) -> u64 {
        self.outcomes
            .iter()
            .map(|o| match o.placement {
                Placement::Allocated { waste, .. } => waste,
                Placement::StillWaiting => 0,
            })
            .sum()
    }

    /// Returns `true` if there were no waiting jobs to consider.
    pub fn is_empty(&self) -> bool {
        self.outcomes.is_empty()
    }

    /// Returns a human-readable one-line summary.
    pub fn summary(&self) -> String {
        format!(
            "{}: {} considered, {} allocated, {} still waiting, {} KB internal fragmentation",
            self.strategy_name,
            self.outcomes.len(),
            self.allocated_count(),
            self.waiting_count(),
            self.total_waste(),
        )
    }
}
