// Copyright (c) 2025 Dimitris Kafetzis
//
// Licensed under the MIT License.
// See LICENSE file in the project root for full license information.
//
// SPDX-License-Identifier: MIT

//! Best Fit placement.
//!
//! Examines every free partition and takes the one that leaves the least
//! internal fragmentation (`partition size - job size`). Ties go to the
//! lowest index.

use crate::strategy::{eligible, PlacementStrategy};
use memory_model::{MemorySize, Partition};

/// Tightest free partition that fits.
#[derive(Debug, Clone, Default)]
pub struct BestFit;

impl BestFit {
    pub fn new() -> Self {
        Self
    }
}

impl PlacementStrategy for BestFit {
    fn name(&self) -> &str {
        "best-fit"
    }

    fn select(
        &self,
        partitions: &[Partition],
        required: MemorySize,
        _cursor: usize,
    ) -> Option<usize> {
        // min_by_key keeps the first of equal minima.
        eligible(partitions, required)
            .min_by_key(|&(_, waste)| waste)
            .map(|(i, _)| i)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::strategy::fixtures::{kb, occupy, partitions};

    #[test]
    fn test_best_fit_minimises_waste() {
        let ps = partitions(&[300, 100, 200]);
        // Waste: 300→150, 100 too small, 200→50.
        assert_eq!(BestFit::new().select(&ps, kb(150), 0), Some(2));
    }

    #[test]
    fn test_best_fit_prefers_exact() {
        let ps = partitions(&[500, 120, 130, 120]);
        assert_eq!(BestFit::new().select(&ps, kb(120), 0), Some(1));
    }

    #[test]
    fn test_best_fit_tie_goes_to_lowest_index() {
        let ps = partitions(&[400, 200, 200]);
        assert_eq!(BestFit::new().select(&ps, kb(150), 0), Some(1));
    }

    #[test]
    fn test_best_fit_skips_occupied() {
        let mut ps = partitions(&[200, 400]);
        occupy(&mut ps, &[0]);
        assert_eq!(BestFit::new().select(&ps, kb(150), 0), Some(1));
    }
}
