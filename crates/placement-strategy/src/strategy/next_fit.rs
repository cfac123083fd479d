// Copyright (c) 2025 Dimitris Kafetzis
//
// Licensed under the MIT License.
// See LICENSE file in the project root for full license information.
//
// SPDX-License-Identifier: MIT

//! Next Fit placement.
//!
//! Like First Fit, but the scan resumes just past the partition chosen by
//! the previous Next Fit placement and wraps around the end at most once.
//!
//! # Cursor
//!
//! The cursor is the index of the last partition Next Fit used. It lives
//! in the session (it persists across allocation passes), starts at 0,
//! and only moves when a placement succeeds. Because the scan starts at
//! `cursor + 1`, a fresh session first looks at the second partition:
//!
//! ```text
//! cursor = 0, n = 4:   scan 1 → 2 → 3 → 0
//! cursor = 3, n = 4:   scan 0 → 1 → 2 → 3
//! ```

use crate::strategy::PlacementStrategy;
use memory_model::{MemorySize, Partition};

/// First fitting partition after the cursor, wrapping once.
#[derive(Debug, Clone, Default)]
pub struct NextFit;

impl NextFit {
    pub fn new() -> Self {
        Self
    }
}

impl PlacementStrategy for NextFit {
    fn name(&self) -> &str {
        "next-fit"
    }

    fn select(
        &self,
        partitions: &[Partition],
        required: MemorySize,
        cursor: usize,
    ) -> Option<usize> {
        let n = partitions.len();
        (0..n)
            .map(|offset| (cursor + 1 + offset) % n)
            .find(|&idx| partitions[idx].fits(required))
    }

    fn uses_cursor(&self) -> bool {
        true
    }
}
