//! Property-based tests for the scenario metrics calculator
//!
//! These tests verify invariants that should hold for all valid inputs:
//! - Rough-cut saving equals the per-deliverable delta times the deliverable count
//! - The multi-project projection is linear in the project count
//! - Rough-cut and other-stage shares add up to 100 within rounding
//! - Recomputing from identical inputs yields identical output
//! - The baseline distribution sums to the baseline project total

use proptest::prelude::*;
use roughcut::{compute_dashboard, Baseline, ProjectionSettings, Scenario, StageHours};

/// Hours in quarter-hour steps, as a scheduler would enter them
fn hours(max_quarters: u32) -> impl Strategy<Value = f64> {
    (0..=max_quarters).prop_map(|q| f64::from(q) * 0.25)
}

fn baseline() -> impl Strategy<Value = Baseline> {
    (1u32..=40, 1u32..=40, hours(40), hours(40)).prop_map(|(deliverables, rc, fb, qc)| {
        Baseline::new(deliverables, StageHours::new(f64::from(rc) * 0.25, fb, qc))
    })
}

fn scenarios() -> impl Strategy<Value = Vec<Scenario>> {
    prop::collection::vec((hours(48), hours(40), hours(40), 1u32..=500), 1..5).prop_map(|rows| {
        rows.into_iter()
            .enumerate()
            .map(|(i, (rc, fb, qc, total))| {
                Scenario::new(
                    format!("Scenario {i}"),
                    StageHours::new(rc, fb, qc),
                    f64::from(total),
                )
            })
            .collect()
    })
}

proptest! {
    #[test]
    fn prop_saving_is_delta_times_deliverables(baseline in baseline(), scenarios in scenarios()) {
        let dashboard = compute_dashboard(&baseline, &scenarios, &ProjectionSettings::default()).unwrap();
        for (row, scenario) in dashboard.summary.iter().zip(&scenarios) {
            let expected = (baseline.rough_cut_hours() - scenario.rough_cut_hours())
                * f64::from(baseline.deliverables);
            prop_assert_eq!(row.hours_saved_per_project, expected);
        }
    }

    #[test]
    fn prop_projection_is_linear(
        baseline in baseline(),
        scenarios in scenarios(),
        projects in 1u32..=12,
    ) {
        let settings = ProjectionSettings { projects, ..ProjectionSettings::default() };
        let dashboard = compute_dashboard(&baseline, &scenarios, &settings).unwrap();
        prop_assert_eq!(dashboard.rough_cut_projection.len(), projects as usize);

        let first = &dashboard.rough_cut_projection[0];
        for row in &dashboard.rough_cut_projection {
            for (point, unit) in row.values.iter().zip(&first.values) {
                let expected = unit.hours_saved * f64::from(row.projects);
                prop_assert!((point.hours_saved - expected).abs() < 1e-9);
            }
        }
    }

    #[test]
    fn prop_shares_sum_to_hundred(baseline in baseline(), scenarios in scenarios()) {
        let dashboard = compute_dashboard(&baseline, &scenarios, &ProjectionSettings::default()).unwrap();
        for row in &dashboard.savings_breakdown {
            let sum = row.rough_cut_pct + row.other_pct;
            prop_assert!((99..=101).contains(&sum), "{} + {} = {}", row.rough_cut_pct, row.other_pct, sum);
        }
    }

    #[test]
    fn prop_recomputation_is_identical(baseline in baseline(), scenarios in scenarios()) {
        let settings = ProjectionSettings::default();
        let first = compute_dashboard(&baseline, &scenarios, &settings).unwrap();
        let second = compute_dashboard(&baseline, &scenarios, &settings).unwrap();
        prop_assert_eq!(
            serde_json::to_string(&first).unwrap(),
            serde_json::to_string(&second).unwrap()
        );
        prop_assert_eq!(first, second);
    }

    #[test]
    fn prop_baseline_distribution_sums_to_project_total(baseline in baseline()) {
        let scenarios = vec![Scenario::new("Any", StageHours::new(1.0, 1.0, 1.0), 10.0)];
        let dashboard = compute_dashboard(&baseline, &scenarios, &ProjectionSettings::default()).unwrap();
        let expected = f64::from(baseline.deliverables) * baseline.hours.total();
        prop_assert!((dashboard.baseline_distribution.total_hours - expected).abs() < 1e-9);
    }

    #[test]
    fn prop_matching_baseline_saves_nothing(baseline in baseline(), total in 1u32..=100) {
        let scenario = Scenario::new("Unchanged", baseline.hours, f64::from(total));
        let dashboard = compute_dashboard(&baseline, &[scenario], &ProjectionSettings::default()).unwrap();
        prop_assert_eq!(dashboard.summary[0].rough_cut_reduction_pct, 0);
        prop_assert_eq!(dashboard.summary[0].hours_saved_per_project, 0.0);
    }
}
