// Copyright (c) 2025 Dimitris Kafetzis
//
// Licensed under the MIT License.
// See LICENSE file in the project root for full license information.
//
// SPDX-License-Identifier: MIT

//! Jobs and their lifecycle.
//!
//! ```text
//! Waiting ──allocate──► Allocated ──deallocate──► Finished
//! ```
//!
//! `Finished` is terminal until the whole session is reset.

use crate::{JobId, MemorySize, PartitionId};
use std::fmt;

/// Lifecycle state of a [`Job`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, serde::Serialize, serde::Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum JobStatus {
    /// Not yet placed; considered by every allocation pass.
    Waiting,
    /// Holds a partition.
    Allocated,
    /// Released its partition. Never placed again.
    Finished,
}

impl JobStatus {
    /// Returns a human-readable label.
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Waiting => "Waiting",
            Self::Allocated => "Allocated",
            Self::Finished => "Finished",
        }
    }
}

impl fmt::Display for JobStatus {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// A request for a memory block of a given size.
#[derive(Debug, Clone, PartialEq, Eq, serde::Serialize, serde::Deserialize)]
pub struct Job {
    id: JobId,
    size: MemorySize,
    status: JobStatus,
    /// Partition held while allocated; kept after finishing for display.
    partition: Option<PartitionId>,
}

impl Job {
    /// Creates a job in the `Waiting` state.
    pub fn new(id: JobId, size: MemorySize) -> Self {
        Self {
            id,
            size,
            status: JobStatus::Waiting,
            partition: None,
        }
    }

    /// Creation-order label.
    pub fn id(&self) -> JobId {
        self.id
    }

    /// Required size, fixed at creation.
    pub fn size(&self) -> MemorySize {
        self.size
    }

    pub fn status(&self) -> JobStatus {
        self.status
    }

    /// The partition this job holds, or last held if finished.
    pub fn partition(&self) -> Option<PartitionId> {
        self.partition
    }

    pub fn is_waiting(&self) -> bool {
        self.status == JobStatus::Waiting
    }

    pub fn is_allocated(&self) -> bool {
        self.status == JobStatus::Allocated
    }

    /// Moves a waiting job to `Allocated` in `partition`.
    ///
    /// Returns `false` and leaves the job untouched if it is not waiting.
    pub fn assign(&mut self, partition: PartitionId) -> bool {
        if self.status != JobStatus::Waiting {
            return false;
        }
        self.status = JobStatus::Allocated;
        self.partition = Some(partition);
        true
    }

    /// Moves an allocated job to `Finished`, returning the partition it held.
    ///
    /// Returns `None` and leaves the job untouched if it is not allocated.
    pub fn finish(&mut self) -> Option<PartitionId> {
        if self.status != JobStatus::Allocated {
            return None;
        }
        self.status = JobStatus::Finished;
        self.partition
    }
}
