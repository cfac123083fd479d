// Copyright (c) 2025 Dimitris Kafetzis
//
// Licensed under the MIT License.
// See LICENSE file in the project root for full license information.
//
// SPDX-License-Identifier: MIT

//! Error types for the allocation session.

use memory_model::{JobId, JobStatus};

/// Errors that can occur while driving an [`crate::Allocator`].
///
/// None of these are fatal: the session is left exactly as it was before
/// the failing call. A job that fits nowhere is not an error; it shows up
/// as [`crate::Placement::StillWaiting`] in the allocation report.
#[derive(Debug, thiserror::Error)]
pub enum SimulatorError {
    /// A size or label was rejected by the data model (e.g. a zero size).
    #[error("{0}")]
    Model(#[from] memory_model::ModelError),

    /// Deallocation was requested for a job that does not hold a partition.
    #[error("cannot deallocate {job}: job is {status}, not Allocated")]
    InvalidState { job: JobId, status: JobStatus },

    /// The job id does not exist in this session.
    #[error("unknown job {0}")]
    UnknownJob(JobId),

    /// A strategy name could not be resolved.
    #[error("{0}")]
    UnknownStrategy(#[from] placement_strategy::StrategyParseError),

    /// A job and its partition disagree about who holds what.
    #[error("session integrity error: {0}")]
    Inconsistent(String),

    /// Scenario file error.
    #[error("configuration error: {0}")]
    Config(String),
}

impl SimulatorError {
    /// Returns `true` for rejected sizes (the caller should re-prompt).
    pub fn is_invalid_size(&self) -> bool {
        matches!(
            self,
            Self::Model(memory_model::ModelError::InvalidSize { .. })
        )
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use placement_strategy::StrategyKind;

    fn resolve(name: &str) -> Result<StrategyKind, SimulatorError> {
        Ok(name.parse::<StrategyKind>()?)
    }

    #[test]
    fn test_strategy_name_converts() {
        assert_eq!(resolve("bf").unwrap(), StrategyKind::BestFit);
        let err = resolve("buddy").unwrap_err();
        assert!(matches!(err, SimulatorError::UnknownStrategy(_)));
        assert!(err.to_string().starts_with("unknown strategy 'buddy'"));
    }

    #[test]
    fn test_invalid_state_message() {
        let err = SimulatorError::InvalidState {
            job: JobId::from_index(1),
            status: JobStatus::Waiting,
        };
        assert_eq!(err.to_string(), "cannot deallocate J2: job is Waiting, not Allocated");
        assert!(!err.is_invalid_size());
    }
}
