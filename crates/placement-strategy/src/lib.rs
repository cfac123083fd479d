// Copyright (c) 2025 Dimitris Kafetzis
//
// Licensed under the MIT License.
// See LICENSE file in the project root for full license information.
//
// SPDX-License-Identifier: MIT

//! # placement-strategy
//!
//! Chooses a free partition for a job using one of the classic
//! fixed-partition placement strategies.
//!
//! # Strategies
//!
//! | Strategy | Scan | Picks | Cursor |
//! |---|---|---|---|
//! | [`FirstFit`] | from index 0 | first eligible | — |
//! | [`BestFit`] | all | least waste | — |
//! | [`WorstFit`] | all | most waste | — |
//! | [`NextFit`] | from cursor + 1, wrapping once | first eligible | moved to pick |
//!
//! "Eligible" means free and at least as large as the job. Ties on waste
//! go to the lowest partition index.
//!
//! # Trait-Based Extensibility
//!
//! All strategies implement [`PlacementStrategy`]. They only read the
//! partition slice; the caller applies the choice:
//!
//! ```ignore
//! struct LastFit;
//! impl PlacementStrategy for LastFit {
//!     fn name(&self) -> &str { "last-fit" }
//!     fn select(&self, partitions: &[Partition], required: MemorySize, _cursor: usize)
//!         -> Option<usize> { /* ... */ }
//! }
//! ```
//!
//! # Example
//! ```
//! use memory_model::{MemorySize, Partition, PartitionId};
//! use placement_strategy::{BestFit, PlacementStrategy};
//!
//! let partitions: Vec<Partition> = [100, 200, 300]
//!     .iter()
//!     .enumerate()
//!     .map(|(i, &kb)| Partition::new(PartitionId::from_index(i), MemorySize::from_kb(kb).unwrap()))
//!     .collect();
//!
//! let pick = BestFit::new().select(&partitions, MemorySize::from_kb(150).unwrap(), 0);
//! assert_eq!(pick, Some(1));
//! ```

mod error;
mod kind;
pub mod strategy;

pub use error::StrategyParseError;
pub use kind::StrategyKind;
pub use strategy::best_fit::BestFit;
pub use strategy::first_fit::FirstFit;
pub use strategy::next_fit::NextFit;
pub use strategy::worst_fit::WorstFit;
pub use strategy::PlacementStrategy;
