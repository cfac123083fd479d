// Copyright (c) 2025 Dimitris Kafetzis
//
// Licensed under the MIT License.
// See LICENSE file in the project root for full license information.
//
// SPDX-License-Identifier: MIT

//! Read-only tabular views of a session, for display and JSON output.

use crate::MemoryUsage;
use memory_model::{JobId, JobStatus, PartitionId};

/// One row of the partition table.
#[derive(Debug, Clone, PartialEq, Eq, serde::Serialize)]
pub struct PartitionRow {
    pub label: PartitionId,
    pub size_kb: u64,
    pub occupied: bool,
    pub occupant: Option<JobId>,
    /// Size of the occupying job, for the `J1 (80 KB)` column.
    pub occupant_size_kb: Option<u64>,
}

/// One row of the job table.
#[derive(Debug, Clone, PartialEq, Eq, serde::Serialize)]
pub struct JobRow {
    pub label: JobId,
    pub size_kb: u64,
    pub status: JobStatus,
    pub partition: Option<PartitionId>,
}

/// Complete session state at one point in time.
#[derive(Debug, Clone, PartialEq, Eq, serde::Serialize)]
pub struct SessionSnapshot {
    pub partitions: Vec<PartitionRow>,
    pub jobs: Vec<JobRow>,
    pub next_fit_cursor: usize,
    pub usage: MemoryUsage,
}
