// Copyright (c) 2025 Dimitris Kafetzis
//
// Licensed under the MIT License.
// See LICENSE file in the project root for full license information.
//
// SPDX-License-Identifier: MIT

//! First Fit placement.
//!
//! Scans from the first partition and takes the first one that is free
//! and large enough. Cheap, but tends to crowd small jobs into the
//! low-index partitions.

use crate::strategy::{eligible, PlacementStrategy};
use memory_model::{MemorySize, Partition};

/// First free partition, in creation order, that fits.
#[derive(Debug, Clone, Default)]
pub struct FirstFit;

impl FirstFit {
    pub fn new() -> Self {
        Self
    }
}

impl PlacementStrategy for FirstFit {
    fn name(&self) -> &str {
        "first-fit"
    }

    fn select(
        &self,
        partitions: &[Partition],
        required: MemorySize,
        _cursor: usize,
    ) -> Option<usize> {
        eligible(partitions, required).next().map(|(i, _)| i)
    }
}
