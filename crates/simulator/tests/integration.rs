// Copyright (c) 2025 Dimitris Kafetzis
//
// Licensed under the MIT License.
// See LICENSE file in the project root for full license information.
//
// SPDX-License-Identifier: MIT

//! Integration tests: end-to-end allocation sessions.
//!
//! These tests drive the public API the way a shell does (add partitions
//! and jobs, allocate, deallocate, reset) and check the resulting state
//! across all four strategies.

use memory_model::{JobId, JobStatus, PartitionId};
use placement_strategy::StrategyKind;
use proptest::prelude::*;
use simulator::{Allocator, Placement, ScenarioConfig, SimulatorError};

// ── Helpers ────────────────────────────────────────────────────

fn session(partitions: &[u64], jobs: &[u64]) -> Allocator {
    let mut s = Allocator::new();
    for &kb in partitions {
        s.add_partition(kb).unwrap();
    }
    for &kb in jobs {
        s.add_job(kb).unwrap();
    }
    s
}

fn f(n: usize) -> PartitionId {
    PartitionId::from_index(n - 1)
}

fn j(n: usize) -> JobId {
    JobId::from_index(n - 1)
}

/// Checks the partition/job cross-reference invariants.
fn assert_consistent(s: &Allocator) {
    for p in s.partitions() {
        if let Some(job) = p.occupant() {
            let job = s.job(job).expect("occupant exists");
            assert_eq!(job.status(), JobStatus::Allocated);
            assert_eq!(job.partition(), Some(p.id()));
            assert!(p.size() >= job.size(), "{} under-allocated", p.id());
        }
    }
    for job in s.allocated_jobs() {
        let held = job.partition().expect("allocated job holds a partition");
        assert_eq!(s.partition(held).unwrap().occupant(), Some(job.id()));
    }
}

// ── Scenarios ──────────────────────────────────────────────────

#[test]
fn test_first_fit_deallocate_and_refill() {
    let mut s = session(&[100, 200, 300], &[80, 150, 250]);

    let report = s.allocate(StrategyKind::FirstFit);
    let expected = [(f(1), 20), (f(2), 50), (f(3), 50)];
    for (outcome, (partition, waste)) in report.outcomes.iter().zip(expected) {
        assert_eq!(outcome.placement, Placement::Allocated { partition, waste });
    }
    assert!(s.jobs().iter().all(|job| job.is_allocated()));

    assert_eq!(s.deallocate(j(2)).unwrap(), f(2));
    assert!(s.partition(f(2)).unwrap().is_free());
    assert_eq!(s.job(j(2)).unwrap().status(), JobStatus::Finished);

    let j4 = s.add_job(180).unwrap();
    assert_eq!(j4, j(4));
    let report = s.allocate(StrategyKind::FirstFit);
    assert_eq!(report.outcomes.len(), 1);
    assert_eq!(
        report.outcomes[0].placement,
        Placement::Allocated { partition: f(2), waste: 20 }
    );
    assert_consistent(&s);
}

#[test]
fn test_oversized_job_waits_under_every_strategy() {
    for kind in StrategyKind::ALL {
        let mut s = session(&[50], &[80]);
        let report = s.allocate(kind);
        assert_eq!(report.outcomes[0].placement, Placement::StillWaiting, "{kind}");
        assert!(s.job(j(1)).unwrap().is_waiting());
        assert!(s.partition(f(1)).unwrap().is_free());
    }
}

#[test]
fn test_strategies_diverge_on_same_input() {
    let partitions = [300, 150, 500, 200];
    let jobs = [140];

    let pick = |kind| {
        let mut s = session(&partitions, &jobs);
        s.allocate(kind).outcomes[0].partition()
    };

    assert_eq!(pick(StrategyKind::FirstFit), Some(f(1)));
    assert_eq!(pick(StrategyKind::BestFit), Some(f(2)));
    assert_eq!(pick(StrategyKind::WorstFit), Some(f(3)));
    // Fresh cursor 0 → scan starts at F2.
    assert_eq!(pick(StrategyKind::NextFit), Some(f(2)));
}

#[test]
fn test_waiting_job_placed_after_larger_partition_added() {
    let mut s = session(&[50], &[80]);
    s.allocate(StrategyKind::BestFit);

    s.add_partition(100).unwrap();
    let report = s.allocate(StrategyKind::BestFit);
    assert_eq!(
        report.outcomes[0].placement,
        Placement::Allocated { partition: f(2), waste: 20 }
    );
}

#[test]
fn test_freed_partition_is_eligible_next_pass() {
    let mut s = session(&[100], &[60, 70]);
    s.allocate(StrategyKind::WorstFit);
    assert!(s.job(j(2)).unwrap().is_waiting());

    s.deallocate(j(1)).unwrap();
    let report = s.allocate(StrategyKind::WorstFit);
    assert_eq!(report.outcomes[0].job, j(2));
    assert_eq!(report.outcomes[0].partition(), Some(f(1)));
    assert_consistent(&s);
}

#[test]
fn test_mixed_strategies_share_one_session() {
    let mut s = session(&[100, 100, 100, 100], &[10, 10]);
    s.allocate(StrategyKind::NextFit);
    assert_eq!(s.next_fit_cursor(), 2);

    s.add_job(10).unwrap();
    s.allocate(StrategyKind::FirstFit);
    assert_eq!(s.job(j(3)).unwrap().partition(), Some(f(1)));

    s.add_job(10).unwrap();
    s.allocate(StrategyKind::NextFit);
    assert_eq!(s.job(j(4)).unwrap().partition(), Some(f(4)));
    assert_eq!(s.next_fit_cursor(), 3);
    assert_consistent(&s);
}

#[test]
fn test_reset_restarts_everything() {
    let mut s = session(&[100, 200], &[50, 60]);
    s.allocate(StrategyKind::NextFit);
    s.deallocate(j(1)).unwrap();
    s.reset();

    assert!(s.snapshot().partitions.is_empty());
    assert!(s.snapshot().jobs.is_empty());
    assert_eq!(s.next_fit_cursor(), 0);
    assert_eq!(s.stats().allocation_passes, 0);

    assert_eq!(s.add_partition(300).unwrap(), f(1));
    assert_eq!(s.add_job(30).unwrap(), j(1));
    // The reset cursor makes Next Fit scan from F2 again, wrapping to F1.
    let report = s.allocate(StrategyKind::NextFit);
    assert_eq!(report.outcomes[0].partition(), Some(f(1)));
}

#[test]
fn test_errors_leave_state_untouched() {
    let mut s = session(&[100], &[80, 500]);
    s.allocate(StrategyKind::FirstFit);
    let before = s.snapshot();

    assert!(s.add_partition(0).unwrap_err().is_invalid_size());
    assert!(s.add_job(0).unwrap_err().is_invalid_size());
    assert!(matches!(
        s.deallocate(j(2)),
        Err(SimulatorError::InvalidState { status: JobStatus::Waiting, .. })
    ));
    assert!(matches!(s.deallocate(j(9)), Err(SimulatorError::UnknownJob(_))));

    assert_eq!(s.snapshot(), before);
}

#[test]
fn test_snapshot_serialises_to_json() {
    let mut s = session(&[100, 200], &[150]);
    s.allocate(StrategyKind::BestFit);

    let json = serde_json::to_value(s.snapshot()).unwrap();
    assert_eq!(json["partitions"][1]["label"], 2);
    assert_eq!(json["partitions"][1]["occupant"], 1);
    assert_eq!(json["jobs"][0]["status"], "allocated");
    assert_eq!(json["usage"]["internal_fragmentation_kb"], 50);

    let report = s.allocate(StrategyKind::BestFit);
    let json = serde_json::to_value(&report).unwrap();
    assert_eq!(json["strategy_name"], "best-fit");
}

#[test]
fn test_scenario_file_matches_manual_session() {
    let toml = r#"
strategy = "worst-fit"
partitions = ["100", "200", "300"]
jobs = ["80", "150", "250"]

[[steps]]
action = "allocate"

[[steps]]
action = "reset"

[[steps]]
action = "add-partition"
size = "1M"

[[steps]]
action = "add-job"
size = "512K"

[[steps]]
action = "allocate"
strategy = "next-fit"
"#;
    let run = ScenarioConfig::from_toml(toml).unwrap().run().unwrap();
    assert_eq!(run.reports.len(), 2);

    // Worst fit: J1→F3, J2→F2, J3 no longer fits.
    assert_eq!(run.reports[0].outcomes[0].partition(), Some(f(3)));
    assert_eq!(run.reports[0].outcomes[1].partition(), Some(f(2)));
    assert_eq!(run.reports[0].outcomes[2].placement, Placement::StillWaiting);

    // After reset only the 1 MB partition exists.
    assert_eq!(run.allocator.partitions().len(), 1);
    assert_eq!(
        run.reports[1].outcomes[0].placement,
        Placement::Allocated { partition: f(1), waste: 512 }
    );
}

// ── Properties ─────────────────────────────────────────────────

fn strategy_kind() -> impl Strategy<Value = StrategyKind> {
    prop::sample::select(StrategyKind::ALL.to_vec())
}

proptest! {
    #[test]
    fn prop_second_allocate_changes_nothing(
        partitions in prop::collection::vec(1u64..400, 0..8),
        jobs in prop::collection::vec(1u64..400, 0..10),
        kind in strategy_kind(),
    ) {
        let mut s = session(&partitions, &jobs);
        s.allocate(kind);
        let before = s.snapshot();

        let report = s.allocate(kind);
        prop_assert_eq!(report.allocated_count(), 0);
        prop_assert_eq!(s.snapshot(), before);
    }

    #[test]
    fn prop_state_stays_consistent(
        partitions in prop::collection::vec(1u64..400, 1..8),
        jobs in prop::collection::vec(1u64..400, 1..10),
        kinds in prop::collection::vec(strategy_kind(), 1..4),
        release in prop::collection::vec(any::<bool>(), 10),
    ) {
        let mut s = session(&partitions, &jobs);
        for kind in kinds {
            s.allocate(kind);
            assert_consistent(&s);

            let holders: Vec<JobId> = s.allocated_jobs().map(|job| job.id()).collect();
            for (id, &free_it) in holders.iter().zip(&release) {
                if free_it {
                    let held = s.job(*id).unwrap().partition().unwrap();
                    prop_assert_eq!(s.deallocate(*id).unwrap(), held);
                    prop_assert!(s.partition(held).unwrap().is_free());
                    prop_assert_eq!(s.job(*id).unwrap().status(), JobStatus::Finished);
                }
            }
            assert_consistent(&s);
        }
    }
}
