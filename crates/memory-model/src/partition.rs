// Copyright (c) 2025 Dimitris Kafetzis
//
// Licensed under the MIT License.
// See LICENSE file in the project root for full license information.
//
// SPDX-License-Identifier: MIT

//! Fixed-size memory partitions.

use crate::{JobId, MemorySize, PartitionId};

/// A fixed-size memory block.
///
/// The occupied flag is derived from `occupant`, so a partition is
/// occupied exactly when it holds a job.
#[derive(Debug, Clone, PartialEq, Eq, serde::Serialize, serde::Deserialize)]
pub struct Partition {
    id: PartitionId,
    size: MemorySize,
    /// The job currently occupying this partition.
    occupant: Option<JobId>,
}

impl Partition {
    /// Creates a free partition.
    pub fn new(id: PartitionId, size: MemorySize) -> Self {
        Self {
            id,
            size,
            occupant: None,
        }
    }

    /// Creation-order label.
    pub fn id(&self) -> PartitionId {
        self.id
    }

    /// Total size, fixed at creation.
    pub fn size(&self) -> MemorySize {
        self.size
    }

    /// Returns `true` if a job occupies this partition.
    pub fn is_occupied(&self) -> bool {
        self.occupant.is_some()
    }

    /// Returns `true` if this partition is free.
    pub fn is_free(&self) -> bool {
        self.occupant.is_none()
    }

    /// The job currently held, if any.
    pub fn occupant(&self) -> Option<JobId> {
        self.occupant
    }

    /// Returns `true` if this partition is free and at least `required` large.
    pub fn fits(&self, required: MemorySize) -> bool {
        self.is_free() && self.size >= required
    }

    /// Internal fragmentation if a job of `required` size were placed here.
    ///
    /// Saturates at zero when the job would not fit.
    pub fn waste_for(&self, required: MemorySize) -> u64 {
        self.size.checked_sub(required).unwrap_or(0)
    }

    /// Marks this partition as held by `job`.
    ///
    /// Returns the previous occupant, which is `None` for any correct caller.
    pub fn occupy(&mut self, job: JobId) -> Option<JobId> {
        self.occupant.replace(job)
    }

    /// Frees this partition, returning the job that held it.
    pub fn release(&mut self) -> Option<JobId> {
        self.occupant.take()
    }
}
