// Copyright (c) 2025 Dimitris Kafetzis
//
// Licensed under the MIT License.
// See LICENSE file in the project root for full license information.
//
// SPDX-License-Identifier: MIT

//! The [`PlacementStrategy`] trait and strategy implementations.

pub mod best_fit;
pub mod first_fit;
pub mod next_fit;
pub mod worst_fit;

use memory_model::{MemorySize, Partition};

/// Trait for placement strategies.
///
/// Given the creation-ordered partitions and a job's required size, a
/// strategy returns the index of the partition to use, or `None` when no
/// free partition is large enough. Occupied partitions are never chosen.
///
/// Strategies are pure: they do not mutate partitions or carry state
/// between calls. Next Fit's resume point is owned by the session and
/// passed in as `cursor`.
pub trait PlacementStrategy: Send + Sync {
    /// Human-readable name of this strategy.
    fn name(&self) -> &str;

    /// Chooses a partition index for a job of `required` size.
    fn select(&self, partitions: &[Partition], required: MemorySize, cursor: usize)
        -> Option<usize>;

    /// Whether the session should move its cursor to each selected index.
    fn uses_cursor(&self) -> bool {
        false
    }
}

/// Iterates `(index, waste)` over partitions able to take `required`.
pub(crate) fn eligible(
    partitions: &[Partition],
    required: MemorySize,
) -> impl Iterator<Item = (usize, u64)> + '_ {
    partitions
        .iter()
        .enumerate()
        .filter(move |(_, p)| p.fits(required))
        .map(move |(i, p)| (i, p.waste_for(required)))
}
