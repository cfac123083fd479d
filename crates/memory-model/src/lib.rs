// Copyright (c) 2025 Dimitris Kafetzis
//
// Licensed under the MIT License.
// See LICENSE file in the project root for full license information.
//
// SPDX-License-Identifier: MIT

//! # memory-model
//!
//! The data model for fixed-partition memory allocation.
//!
//! # Key Components
//!
//! - [`Partition`] — a fixed-size memory block. Its size never changes; at
//!   most one job occupies it at a time.
//! - [`Job`] — a request for a block of a given size, moving through
//!   [`JobStatus::Waiting`] → [`JobStatus::Allocated`] → [`JobStatus::Finished`].
//! - [`PartitionId`] / [`JobId`] — creation-order labels (`F1`, `J1`, ...).
//! - [`MemorySize`] — a positive size in KB with human-readable parsing.
//!
//! # Cross-References
//!
//! Jobs and partitions refer to each other by id, never by pointer:
//!
//! ```text
//! Partition { id: F2, occupant: Some(J1) }  ◄──►  Job { id: J1, partition: Some(F2) }
//! ```
//!
//! The owning session resolves ids against its creation-ordered sequences,
//! so there are no ownership cycles and the whole state serialises as-is.
//!
//! # Example
//! ```
//! use memory_model::{Job, JobId, MemorySize, Partition, PartitionId};
//!
//! let size = MemorySize::parse("200K").unwrap();
//! let partition = Partition::new(PartitionId::from_index(0), size);
//! let job = Job::new(JobId::from_index(0), MemorySize::from_kb(150).unwrap());
//!
//! assert_eq!(partition.id().to_string(), "F1");
//! assert!(partition.fits(job.size()));
//! assert_eq!(partition.waste_for(job.size()), 50);
//! ```

mod error;
mod id;
mod job;
mod partition;
mod size;

pub use error::ModelError;
pub use id::{JobId, PartitionId};
pub use job::{Job, JobStatus};
pub use partition::Partition;
pub use size::MemorySize;
