// Copyright (c) 2025 Dimitris Kafetzis
//
// Licensed under the MIT License.
// See LICENSE file in the project root for full license information.
//
// SPDX-License-Identifier: MIT

//! Error types for strategy selection.

/// Raised when a strategy name does not match any known strategy.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
#[error("unknown strategy '{name}'; expected 'first-fit', 'best-fit', 'worst-fit', or 'next-fit'")]
pub struct StrategyParseError {
    pub name: String,
}
