// Copyright (c) 2025 Dimitris Kafetzis
//
// Licensed under the MIT License.
// See LICENSE file in the project root for full license information.
//
// SPDX-License-Identifier: MIT

//! Worst Fit placement.
//!
//! Examines every free partition and takes the one that leaves the most
//! room, on the theory that the leftover is more likely to stay useful.
//! In fixed partitioning the leftover is internal fragmentation, so this
//! mostly serves as a contrast to [`crate::BestFit`]. Ties go to the
//! lowest index.

use crate::strategy::{eligible, PlacementStrategy};
use memory_model::{MemorySize, Partition};
use std::cmp::Reverse;

/// Roomiest free partition that fits.
#[derive(Debug, Clone, Default)]
pub struct WorstFit;

impl WorstFit {
    pub fn new() -> Self {
        Self
    }
}

impl PlacementStrategy for WorstFit {
    fn name(&self) -> &str {
        "worst-fit"
    }

    fn select(
        &self,
        partitions: &[Partition],
        required: MemorySize,
        _cursor: usize,
    ) -> Option<usize> {
        // max_by_key keeps the last of equal maxima; Reverse(index) flips that.
        eligible(partitions, required)
            .max_by_key(|&(i, waste)| (waste, Reverse(i)))
            .map(|(i, _)| i)
    }
}
