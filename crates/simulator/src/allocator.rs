// Copyright (c) 2025 Dimitris Kafetzis
//
// Licensed under the MIT License.
// See LICENSE file in the project root for full license information.
//
// SPDX-License-Identifier: MIT

//! The allocation session.
//!
//! An [`Allocator`] owns everything one simulation needs: the
//! creation-ordered partitions and jobs, the Next Fit cursor, and the
//! session counters. Independent sessions never share state.
//!
//! # Control Flow
//! ```text
//! add_partition / add_job  ──►  allocate(strategy)  ──►  AllocationReport
//!                                     │
//!                      deallocate(job) ◄── caller picks an Allocated job
//!                                     │
//!                                  reset()  ──► empty session, labels restart at 1
//! ```
//!
//! Calls are synchronous and expect exclusive access (`&mut self`); a
//! multi-threaded host wraps the session in its own lock.

use crate::snapshot::{JobRow, PartitionRow, SessionSnapshot};
use crate::{AllocationReport, JobOutcome, MemoryUsage, Placement, SessionStats, SimulatorError};
use memory_model::{Job, JobId, MemorySize, Partition, PartitionId};
use placement_strategy::{PlacementStrategy, StrategyKind};

/// Fixed-partition allocation session.
///
/// # Example
/// ```
/// use placement_strategy::StrategyKind;
/// use simulator::Allocator;
///
/// let mut session = Allocator::new();
/// for kb in [100, 200, 300] {
///     session.add_partition(kb).unwrap();
/// }
/// let j1 = session.add_job(80).unwrap();
///
/// let report = session.allocate(StrategyKind::FirstFit);
/// assert_eq!(report.allocated_count(), 1);
///
/// let freed = session.deallocate(j1).unwrap();
/// assert_eq!(freed.to_string(), "F1");
/// ```
#[derive(Debug, Clone, Default)]
pub struct Allocator {
    partitions: Vec<Partition>,
    jobs: Vec<Job>,
    /// Index of the partition used by the last successful Next Fit placement.
    next_fit_cursor: usize,
    stats: SessionStats,
}

impl Allocator {
    /// Creates an empty session.
    pub fn new() -> Self {
        Self::default()
    }

    // ── Registry ───────────────────────────────────────────────

    /// Appends a free partition of `size_kb` KB. Fails on zero.
    pub fn add_partition(&mut self, size_kb: u64) -> Result<PartitionId, SimulatorError> {
        let size = MemorySize::from_kb(size_kb)?;
        Ok(self.add_partition_sized(size))
    }

    /// Appends a free partition of an already-validated size.
    pub fn add_partition_sized(&mut self, size: MemorySize) -> PartitionId {
        let id = PartitionId::from_index(self.partitions.len());
        self.partitions.push(Partition::new(id, size));
        tracing::debug!("added partition {id} ({size})");
        id
    }

    /// Appends a waiting job of `size_kb` KB. Fails on zero.
    pub fn add_job(&mut self, size_kb: u64) -> Result<JobId, SimulatorError> {
        let size = MemorySize::from_kb(size_kb)?;
        Ok(self.add_job_sized(size))
    }

    /// Appends a waiting job of an already-validated size.
    pub fn add_job_sized(&mut self, size: MemorySize) -> JobId {
        let id = JobId::from_index(self.jobs.len());
        self.jobs.push(Job::new(id, size));
        tracing::debug!("added job {id} ({size})");
        id
    }

    /// Clears all partitions, jobs, counters, and the Next Fit cursor.
    pub fn reset(&mut self) {
        tracing::info!(
            "reset: dropping {} partition(s) and {} job(s)",
            self.partitions.len(),
            self.jobs.len(),
        );
        self.partitions.clear();
        self.jobs.clear();
        self.next_fit_cursor = 0;
        self.stats = SessionStats::default();
    }

    // ── Allocation ─────────────────────────────────────────────

    /// Runs one allocation pass with the selected strategy.
    pub fn allocate(&mut self, kind: StrategyKind) -> AllocationReport {
        let strategy = kind.create();
        self.allocate_with(strategy.as_ref())
    }

    /// Runs one allocation pass with any [`PlacementStrategy`].
    ///
    /// Every job still `Waiting` is considered once, in creation order.
    /// Partitions taken earlier in the same pass are no longer free for
    /// later jobs. A job that fits nowhere stays `Waiting` and is reported
    /// as [`Placement::StillWaiting`]; processing continues with the next
    /// job.
    pub fn allocate_with(&mut self, strategy: &dyn PlacementStrategy) -> AllocationReport {
        let mut report = AllocationReport::new(strategy.name());

        for job in self.jobs.iter_mut().filter(|j| j.is_waiting()) {
            let required = job.size();
            let choice = strategy
                .select(&self.partitions, required, self.next_fit_cursor)
                .filter(|&i| self.partitions.get(i).is_some_and(|p| p.fits(required)));

            let placement = match choice {
                Some(index) => {
                    let partition = &mut self.partitions[index];
                    partition.occupy(job.id());
                    job.assign(partition.id());
                    if strategy.uses_cursor() {
                        self.next_fit_cursor = index;
                    }
                    let waste = partition.waste_for(required);
                    tracing::debug!(
                        "{}: {} ({required}) → {} ({}), waste {waste} KB",
                        strategy.name(),
                        job.id(),
                        partition.id(),
                        partition.size(),
                    );
                    Placement::Allocated {
                        partition: partition.id(),
                        waste,
                    }
                }
                None => {
                    tracing::warn!(
                        "{}: no free partition fits {} ({required}); left waiting",
                        strategy.name(),
                        job.id(),
                    );
                    Placement::StillWaiting
                }
            };

            report.outcomes.push(JobOutcome {
                job: job.id(),
                required,
                placement,
            });
        }

        self.stats.record_pass(&report);
        tracing::info!("{}", report.summary());
        report
    }

    /// Releases the partition held by `job` and marks the job `Finished`.
    ///
    /// Returns the freed partition. Fails without changing anything if the
    /// job does not exist or is not currently `Allocated`. The Next Fit
    /// cursor is not touched.
    pub fn deallocate(&mut self, job: JobId) -> Result<PartitionId, SimulatorError> {
        let entry = self
            .jobs
            .get(job.index())
            .ok_or(SimulatorError::UnknownJob(job))?;
        if !entry.is_allocated() {
            return Err(SimulatorError::InvalidState {
                job,
                status: entry.status(),
            });
        }

        let held = entry.partition().ok_or_else(|| {
            SimulatorError::Inconsistent(format!("{job} is allocated but holds no partition"))
        })?;
        let partition = self
            .partitions
            .get_mut(held.index())
            .filter(|p| p.occupant() == Some(job))
            .ok_or_else(|| {
                SimulatorError::Inconsistent(format!("{held} is not occupied by {job}"))
            })?;

        partition.release();
        self.jobs[job.index()].finish();
        self.stats.record_deallocation();
        tracing::info!("deallocated {job}: {held} is free");
        Ok(held)
    }

    // ── Queries ────────────────────────────────────────────────

    /// All partitions in creation order.
    pub fn partitions(&self) -> &[Partition] {
        &self.partitions
    }

    /// All jobs in creation order.
    pub fn jobs(&self) -> &[Job] {
        &self.jobs
    }

    pub fn partition(&self, id: PartitionId) -> Option<&Partition> {
        self.partitions.get(id.index())
    }

    pub fn job(&self, id: JobId) -> Option<&Job> {
        self.jobs.get(id.index())
    }

    /// Jobs not yet placed.
    pub fn waiting_jobs(&self) -> impl Iterator<Item = &Job> + '_ {
        self.jobs.iter().filter(|j| j.is_waiting())
    }

    /// Jobs currently holding a partition, i.e. the ones that can be deallocated.
    pub fn allocated_jobs(&self) -> impl Iterator<Item = &Job> + '_ {
        self.jobs.iter().filter(|j| j.is_allocated())
    }

    /// Index of the partition used by the last Next Fit placement.
    pub fn next_fit_cursor(&self) -> usize {
        self.next_fit_cursor
    }

    pub fn stats(&self) -> &SessionStats {
        &self.stats
    }

    /// Computes current memory usage.
    pub fn usage(&self) -> MemoryUsage {
        let mut usage = MemoryUsage::default();
        for p in &self.partitions {
            let size = p.size().as_kb();
            usage.total_kb += size;
            match p.occupant().and_then(|j| self.job(j)) {
                Some(job) => {
                    usage.occupied_kb += size;
                    usage.in_use_kb += job.size().as_kb();
                    usage.internal_fragmentation_kb += p.waste_for(job.size());
                    usage.occupied_partitions += 1;
                }
                None => usage.free_partitions += 1,
            }
        }
        usage
    }

    /// Builds a serialisable view of the whole session.
    pub fn snapshot(&self) -> SessionSnapshot {
        let partitions = self
            .partitions
            .iter()
            .map(|p| PartitionRow {
                label: p.id(),
                size_kb: p.size().as_kb(),
                occupied: p.is_occupied(),
                occupant: p.occupant(),
                occupant_size_kb: p.occupant().and_then(|j| self.job(j)).map(|j| j.size().as_kb()),
            })
            .collect();
        let jobs = self
            .jobs
            .iter()
            .map(|j| JobRow {
                label: j.id(),
                size_kb: j.size().as_kb(),
                status: j.status(),
                partition: j.partition(),
            })
            .collect();

        SessionSnapshot {
            partitions,
            jobs,
            next_fit_cursor: self.next_fit_cursor,
            usage: self.usage(),
        }
    }
}
