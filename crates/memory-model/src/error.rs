// Copyright (c) 2025 Dimitris Kafetzis
//
// Licensed under the MIT License.
// See LICENSE file in the project root for full license information.
//
// SPDX-License-Identifier: MIT

//! Error types for the allocation data model.

/// Errors raised when constructing or parsing model values.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum ModelError {
    /// A partition or job was given a non-positive size.
    #[error("invalid size: {value} (sizes must be a positive number of KB)")]
    InvalidSize { value: i64 },

    /// A size string could not be parsed as a number.
    #[error("cannot parse size '{input}': expected a number with an optional K or M suffix")]
    Unparseable { input: String },

    /// A partition or job label was malformed.
    #[error("invalid label '{input}': expected {expected}")]
    InvalidLabel { input: String, expected: &'static str },
}
