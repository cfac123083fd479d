// Copyright (c) 2025 Dimitris Kafetzis
//
// Licensed under the MIT License.
// See LICENSE file in the project root for full license information.
//
// SPDX-License-Identifier: MIT

//! The strategy selector.

use crate::strategy::PlacementStrategy;
use crate::{BestFit, FirstFit, NextFit, StrategyParseError, WorstFit};
use std::fmt;

/// Which placement strategy an allocation pass uses.
///
/// Serialises as the kebab-case name; deserialises through
/// [`StrategyKind::from_str_loose`], so config files may use any accepted
/// spelling.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, serde::Serialize, serde::Deserialize)]
#[serde(rename_all = "kebab-case", try_from = "String")]
pub enum StrategyKind {
    FirstFit,
    BestFit,
    WorstFit,
    NextFit,
}

impl StrategyKind {
    /// Every strategy, in menu order.
    pub const ALL: [StrategyKind; 4] = [
        StrategyKind::FirstFit,
        StrategyKind::BestFit,
        StrategyKind::WorstFit,
        StrategyKind::NextFit,
    ];

    /// Parses a strategy name.
    ///
    /// Accepts kebab-case (`"best-fit"`), snake_case, the menu label
    /// (`"Best Fit"`), run-together (`"bestfit"`), the bare adjective
    /// (`"best"`), and two-letter abbreviations (`"bf"`).
    pub fn from_str_loose(s: &str) -> Option<Self> {
        let normalised: String = s
            .trim()
            .to_lowercase()
            .chars()
            .filter(|c| !matches!(c, '-' | '_' | ' '))
            .collect();
        match normalised.as_str() {
            "firstfit" | "first" | "ff" => Some(Self::FirstFit),
            "bestfit" | "best" | "bf" => Some(Self::BestFit),
            "worstfit" | "worst" | "wf" => Some(Self::WorstFit),
            "nextfit" | "next" | "nf" => Some(Self::NextFit),
            _ => None,
        }
    }

    /// Returns the canonical kebab-case name.
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::FirstFit => "first-fit",
            Self::BestFit => "best-fit",
            Self::WorstFit => "worst-fit",
            Self::NextFit => "next-fit",
        }
    }

    /// Returns the menu label.
    pub fn display_name(&self) -> &'static str {
        match self {
            Self::FirstFit => "First Fit",
            Self::BestFit => "Best Fit",
            Self::WorstFit => "Worst Fit",
            Self::NextFit => "Next Fit",
        }
    }

    /// Instantiates the strategy.
    pub fn create(&self) -> Box<dyn PlacementStrategy> {
        match self {
            Self::FirstFit => Box::new(FirstFit::new()),
            Self::BestFit => Box::new(BestFit::new()),
            Self::WorstFit => Box::new(WorstFit::new()),
            Self::NextFit => Box::new(NextFit::new()),
        }
    }
}

impl std::str::FromStr for StrategyKind {
    type Err = StrategyParseError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::from_str_loose(s).ok_or_else(|| StrategyParseError {
            name: s.to_string(),
        })
    }
}

impl TryFrom<String> for StrategyKind {
    type Error = StrategyParseError;

    fn try_from(name: String) -> Result<Self, Self::Error> {
        name.parse()
    }
}

impl fmt::Display for StrategyKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}
