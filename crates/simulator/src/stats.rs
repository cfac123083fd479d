// Copyright (c) 2025 Dimitris Kafetzis
//
// Licensed under the MIT License.
// See LICENSE file in the project root for full license information.
//
// SPDX-License-Identifier: MIT

//! Session statistics.
//!
//! [`SessionStats`] counts what the session has done since it was created
//! or last reset. [`MemoryUsage`] is a point-in-time view of how the
//! partitions are being used, computed from the current state.

use crate::AllocationReport;

/// Cumulative counters for an allocation session.
#[derive(Debug, Clone, Default, PartialEq, Eq, serde::Serialize)]
pub struct SessionStats {
    /// Number of `allocate` calls.
    pub allocation_passes: u64,
    /// Jobs placed across all passes.
    pub placements: u64,
    /// Times a waiting job was considered and left waiting.
    pub failed_placements: u64,
    /// Successful deallocations.
    pub deallocations: u64,
}

impl SessionStats {
    pub(crate) fn record_pass(&mut self, report: &AllocationReport) {
        self.allocation_passes += 1;
        self.placements += report.allocated_count() as u64;
        self.failed_placements += report.waiting_count() as u64;
    }

    pub(crate) fn record_deallocation(&mut self) {
        self.deallocations += 1;
    }

    /// Fraction of placement attempts that succeeded, in `[0.0, 1.0]`.
    ///
    /// Returns `0.0` if nothing has been attempted.
    pub fn success_ratio(&self) -> f64 {
        let attempts = self.placements + self.failed_placements;
        if attempts == 0 {
            return 0.0;
        }
        self.placements as f64 / attempts as f64
    }

    /// Returns a human-readable summary.
    pub fn summary(&self) -> String {
        format!(
            "Passes: {}, placements: {} ({} failed, {:.0}% success), deallocations: {}",
            self.allocation_passes,
            self.placements,
            self.failed_placements,
            self.success_ratio() * 100.0,
            self.deallocations,
        )
    }
}

/// How the partitions are used right now.
#[derive(Debug, Clone, Default, PartialEq, Eq, serde::Serialize)]
pub struct MemoryUsage {
    /// Sum of all partition sizes.
    pub total_kb: u64,
    /// Sum of occupied partition sizes.
    pub occupied_kb: u64,
    /// Sum of the sizes of jobs holding partitions.
    pub in_use_kb: u64,
    /// `occupied_kb - in_use_kb`: space locked inside occupied partitions.
    pub internal_fragmentation_kb: u64,
    pub free_partitions: usize,
    pub occupied_partitions: usize,
}

impl MemoryUsage {
    /// Sum of free partition sizes.
    pub fn free_kb(&self) -> u64 {
        self.total_kb - self.occupied_kb
    }

    /// Fraction of total memory actually used by jobs, in `[0.0, 1.0]`.
    pub fn utilisation(&self) -> f64 {
        if self.total_kb == 0 {
            return 0.0;
        }
        self.in_use_kb as f64 / self.total_kb as f64
    }

    /// Returns a human-readable summary.
    pub fn summary(&self) -> String {
        format!(
            "Memory: {} KB total, {} KB in use ({:.1}%), {} KB internal fragmentation, \
             {} KB free across {} partition(s)",
            self.total_kb,
            self.in_use_kb,
            self.utilisation() * 100.0,
            self.internal_fragmentation_kb,
            self.free_kb(),
            self.free_partitions,
        )
    }
}
