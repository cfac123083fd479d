// Copyright (c) 2025 Dimitris Kafetzis
//
// Licensed under the MIT License.
// See LICENSE file in the project root for full license information.
//
// SPDX-License-Identifier: MIT

//! Sizes in kilobytes.
//!
//! A [`MemorySize`] is always strictly positive: zero and negative inputs
//! are rejected at construction, so every partition and job carries a
//! valid size.

use crate::ModelError;
use std::fmt;

/// KB per MB suffix.
const KB_PER_MB: u64 = 1024;

/// A strictly positive size in KB.
///
/// # Parsing
/// - `"512"`, `"512K"`, `"512KB"` → 512 KB
/// - `"2M"`, `"2MB"` → 2048 KB
///
/// Case-insensitive, surrounding whitespace ignored.
///
/// # Examples
/// ```
/// use memory_model::MemorySize;
///
/// assert_eq!(MemorySize::parse("2M").unwrap().as_kb(), 2048);
/// assert!(MemorySize::parse("0").is_err());
/// assert!(MemorySize::parse("-5").is_err());
/// ```
#[derive(
    Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, serde::Serialize, serde::Deserialize,
)]
#[serde(try_from = "u64", into = "u64")]
pub struct MemorySize {
    kb: u64,
}

impl MemorySize {
    /// Creates a size from a KB count. Fails on zero.
    pub fn from_kb(kb: u64) -> Result<Self, ModelError> {
        if kb == 0 {
            return Err(ModelError::InvalidSize { value: 0 });
        }
        Ok(Self { kb })
    }

    /// Returns the size in KB.
    pub fn as_kb(&self) -> u64 {
        self.kb
    }

    /// Parses a human-readable size string.
    pub fn parse(s: &str) -> Result<Self, ModelError> {
        let trimmed = s.trim();
        let upper = trimmed.to_uppercase();

        let (num_str, multiplier) = if upper.ends_with("MB") {
            (&trimmed[..trimmed.len() - 2], KB_PER_MB)
        } else if upper.ends_with('M') {
            (&trimmed[..trimmed.len() - 1], KB_PER_MB)
        } else if upper.ends_with("KB") {
            (&trimmed[..trimmed.len() - 2], 1)
        } else if upper.ends_with('K') {
            (&trimmed[..trimmed.len() - 1], 1)
        } else {
            (trimmed, 1)
        };

        let value: i64 = num_str.trim().parse().map_err(|_| ModelError::Unparseable {
            input: s.to_string(),
        })?;
        if value <= 0 {
            return Err(ModelError::InvalidSize { value });
        }

        let kb = (value as u64)
            .checked_mul(multiplier)
            .ok_or_else(|| ModelError::Unparseable {
                input: s.to_string(),
            })?;
        Self::from_kb(kb)
    }

    /// Returns `self - other`, or `None` if `other` is larger.
    pub fn checked_sub(&self, other: MemorySize) -> Option<u64> {
        self.kb.checked_sub(other.kb)
    }
}

impl TryFrom<u64> for MemorySize {
    type Error = ModelError;

    fn try_from(kb: u64) -> Result<Self, Self::Error> {
        Self::from_kb(kb)
    }
}

impl From<MemorySize> for u64 {
    fn from(size: MemorySize) -> Self {
        size.kb
    }
}

impl std::str::FromStr for MemorySize {
    type Err = ModelError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::parse(s)
    }
}

impl fmt::Display for MemorySize {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} KB", self.kb)
    }
}
