// Copyright (c) 2025 Dimitris Kafetzis
//
// Licensed under the MIT License.
// See LICENSE file in the project root for full license information.
//
// SPDX-License-Identifier: MIT

//! Creation-order labels for partitions and jobs.
//!
//! Both ids wrap a 1-based sequence number. A session hands them out in
//! creation order and restarts from 1 after a reset, so `F1` is always
//! the first partition created since the last reset.

use crate::ModelError;
use std::fmt;

macro_rules! sequence_id {
    ($(#[$meta:meta])* $name:ident, $prefix:literal) => {
        $(#[$meta])*
        #[derive(
            Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash,
            serde::Serialize, serde::Deserialize,
        )]
        #[serde(try_from = "usize", into = "usize")]
        pub struct $name(usize);

        impl $name {
            /// Builds the id for the element at `index` (0-based) in its sequence.
            pub fn from_index(index: usize) -> Self {
                Self(index + 1)
            }

            /// Returns the 0-based position in the owning sequence.
            pub fn index(&self) -> usize {
                self.0 - 1
            }

            /// Returns the 1-based sequence number.
            pub fn number(&self) -> usize {
                self.0
            }

            /// Parses a label with or without its letter prefix (case-insensitive).
            pub fn parse(s: &str) -> Result<Self, ModelError> {
                let trimmed = s.trim();
                let digits = trimmed
                    .strip_prefix($prefix)
                    .or_else(|| trimmed.strip_prefix(&$prefix.to_lowercase()[..]))
                    .unwrap_or(trimmed);
                digits
                    .parse::<usize>()
                    .ok()
                    .and_then(|n| Self::try_from(n).ok())
                    .ok_or_else(|| Self::invalid(s))
            }

            fn invalid(input: impl Into<String>) -> ModelError {
                ModelError::InvalidLabel {
                    input: input.into(),
                    expected: concat!("a label like ", $prefix, "1"),
                }
            }
        }

        /// Sequence numbers start at 1; zero is rejected.
        impl TryFrom<usize> for $name {
            type Error = ModelError;

            fn try_from(number: usize) -> Result<Self, Self::Error> {
                if number == 0 {
                    return Err(Self::invalid(number.to_string()));
                }
                Ok(Self(number))
            }
        }

        impl From<$name> for usize {
            fn from(id: $name) -> Self {
                id.0
            }
        }

        impl fmt::Display for $name {
            fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
                write!(f, concat!($prefix, "{}"), self.0)
            }
        }

        impl std::str::FromStr for $name {
            type Err = ModelError;

            fn from_str(s: &str) -> Result<Self, Self::Err> {
                Self::parse(s)
            }
        }
    };
}

sequence_id!(
    /// Label of a partition: `F1`, `F2`, ...
    PartitionId,
    "F"
);

sequence_id!(
    /// Label of a job: `J1`, `J2`, ...
    JobId,
    "J"
);
