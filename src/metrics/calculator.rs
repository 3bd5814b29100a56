//! Scenario metric derivation.
//!
//! Every function here is pure: the same baseline and scenario always produce
//! the same numbers, and nothing is cached between calls.

use serde::Serialize;

use crate::core::{Baseline, Scenario};

/// Round half up, so `-2.5` rounds to `-2` rather than away from zero as
/// [`f64::round`] would.
pub fn round_half_up(value: f64) -> f64 {
    // `value + 0.5` can round up before flooring, e.g. 0.49999999999999994.
    let floor = value.floor();
    if value - floor >= 0.5 {
        floor + 1.0
    } else {
        floor
    }
}

/// Whole-number percentage of `part` in `whole`.
pub fn percentage(part: f64, whole: f64) -> i64 {
    round_half_up(part / whole * 100.0) as i64
}

/// Rough-cut hours saved on a single deliverable. Negative when the scenario
/// is slower than baseline.
pub fn rough_cut_saved_per_deliverable(baseline: &Baseline, scenario: &Scenario) -> f64 {
    baseline.rough_cut_hours() - scenario.rough_cut_hours()
}

pub fn rough_cut_saved_per_project(baseline: &Baseline, scenario: &Scenario) -> f64 {
    rough_cut_saved_per_deliverable(baseline, scenario) * f64::from(baseline.deliverables)
}

/// Linear in `projects`.
pub fn rough_cut_saved_across_projects(
    baseline: &Baseline,
    scenario: &Scenario,
    projects: u32,
) -> f64 {
    rough_cut_saved_per_project(baseline, scenario) * f64::from(projects)
}

/// Not clamped: a scenario slower than baseline reports a negative reduction.
pub fn rough_cut_reduction_pct(baseline: &Baseline, scenario: &Scenario) -> i64 {
    round_half_up((1.0 - scenario.rough_cut_hours() / baseline.rough_cut_hours()) * 100.0) as i64
}

pub fn rough_cut_contribution_pct(baseline: &Baseline, scenario: &Scenario) -> i64 {
    percentage(
        rough_cut_saved_per_project(baseline, scenario),
        scenario.total_time_saved_per_project,
    )
}

/// One row of the efficiency summary table
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct ScenarioSummary {
    pub name: String,
    pub rough_cut_reduction_pct: i64,
    /// Scenario rough-cut hours per deliverable
    pub hours_per_deliverable: f64,
    /// Rough-cut hours saved per project
    pub hours_saved_per_project: f64,
    pub total_time_saved_per_project: f64,
    pub rough_cut_contribution_pct: i64,
}

impl ScenarioSummary {
    pub fn derive(baseline: &Baseline, scenario: &Scenario) -> Self {
        Self {
            name: scenario.name.clone(),
            rough_cut_reduction_pct: rough_cut_reduction_pct(baseline, scenario),
            hours_per_deliverable: scenario.rough_cut_hours(),
            hours_saved_per_project: rough_cut_saved_per_project(baseline, scenario),
            total_time_saved_per_project: scenario.total_time_saved_per_project,
            rough_cut_contribution_pct: rough_cut_contribution_pct(baseline, scenario),
        }
    }
}

/// Split of a scenario's total saving between the rough cut and everything else
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct SavingsBreakdown {
    pub name: String,
    pub rough_cut_savings: f64,
    pub other_savings: f64,
    pub total_saved: f64,
    pub rough_cut_pct: i64,
    pub other_pct: i64,
}

impl SavingsBreakdown {
    pub fn derive(baseline: &Baseline, scenario: &Scenario) -> Self {
        let total = scenario.total_time_saved_per_project;
        let rough_cut_savings = rough_cut_saved_per_project(baseline, scenario);
        let other_savings = total - rough_cut_savings;

        Self {
            name: scenario.name.clone(),
            rough_cut_savings,
            other_savings,
            total_saved: total,
            rough_cut_pct: percentage(rough_cut_savings, total),
            other_pct: percentage(other_savings, total),
        }
    }
}
