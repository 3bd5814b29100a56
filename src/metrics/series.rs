//! Chart-ready data series built on top of the per-scenario metrics.

use serde::Serialize;

use super::calculator::rough_cut_saved_across_projects;
use crate::core::{Baseline, Scenario, Stage, StageHours};

pub const BASELINE_LABEL: &str = "Baseline";

/// Rough-cut versus other-stage hours for one project
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct StackedComparisonRow {
    pub name: String,
    pub rough_cut_hours: f64,
    pub other_stage_hours: f64,
}

impl StackedComparisonRow {
    fn from_hours(name: &str, hours: &StageHours, deliverables: u32) -> Self {
        let deliverables = f64::from(deliverables);
        Self {
            name: name.to_string(),
            rough_cut_hours: hours.rough_cut_hours * deliverables,
            other_stage_hours: hours.other_stage_hours() * deliverables,
        }
    }
}

/// Baseline first, then each scenario in input order.
pub fn stacked_comparison(baseline: &Baseline, scenarios: &[Scenario]) -> Vec<StackedComparisonRow> {
    std::iter::once(StackedComparisonRow::from_hours(
        BASELINE_LABEL,
        &baseline.hours,
        baseline.deliverables,
    ))
    .chain(scenarios.iter().map(|scenario| {
        StackedComparisonRow::from_hours(&scenario.name, &scenario.hours, baseline.deliverables)
    }))
    .collect()
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct ProjectionPoint {
    pub scenario: String,
    pub hours_saved: f64,
}

/// Cumulative rough-cut hours saved after `projects` projects
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct ProjectionRow {
    pub projects: u32,
    pub values: Vec<ProjectionPoint>,
}

impl ProjectionRow {
    pub fn value_for(&self, scenario: &str) -> Option<f64> {
        self.values
            .iter()
            .find(|point| point.scenario == scenario)
            .map(|point| point.hours_saved)
    }
}

/// One row per project count in `1..=max_projects`.
pub fn rough_cut_projection(
    baseline: &Baseline,
    scenarios: &[Scenario],
    max_projects: u32,
) -> Vec<ProjectionRow> {
    (1..=max_projects)
        .map(|projects| ProjectionRow {
            projects,
            values: scenarios
                .iter()
                .map(|scenario| ProjectionPoint {
                    scenario: scenario.name.clone(),
                    hours_saved: rough_cut_saved_across_projects(baseline, scenario, projects),
                })
                .collect(),
        })
        .collect()
}

/// Total time a scenario saves over the projection horizon
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct TotalTimeProjection {
    pub name: String,
    pub projects: u32,
    pub total_time_saved: f64,
    pub workweeks: f64,
}

pub fn total_time_projection(
    scenarios: &[Scenario],
    projects: u32,
    hours_per_workweek: f64,
) -> Vec<TotalTimeProjection> {
    scenarios
        .iter()
        .map(|scenario| {
            let total_time_saved = scenario.total_time_saved_per_project * f64::from(projects);
            TotalTimeProjection {
                name: scenario.name.clone(),
                projects,
                total_time_saved,
                workweeks: total_time_saved / hours_per_workweek,
            }
        })
        .collect()
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct StageSlice {
    pub stage: Stage,
    pub label: &'static str,
    pub hours: f64,
}

/// Per-stage hours for one project, pie-chart shaped
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct StageDistribution {
    pub name: String,
    pub slices: Vec<StageSlice>,
    pub total_hours: f64,
}

impl StageDistribution {
    pub fn new(name: &str, hours: &StageHours, deliverables: u32) -> Self {
        let deliverables = f64::from(deliverables);
        let slices: Vec<StageSlice> = Stage::ALL
            .iter()
            .map(|&stage| StageSlice {
                stage,
                label: stage.label(),
                hours: hours.get(stage) * deliverables,
            })
            .collect();
        let total_hours = slices.iter().map(|slice| slice.hours).sum();

        Self {
            name: name.to_string(),
            slices,
            total_hours,
        }
    }

    /// Whole-number share of each stage, in stage order
    pub fn shares(&self) -> Vec<(Stage, i64)> {
        self.slices
            .iter()
            .map(|slice| {
                let share = if self.total_hours > 0.0 {
                    super::calculator::percentage(slice.hours, self.total_hours)
                } else {
                    0
                };
                (slice.stage, share)
            })
            .collect()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::reference_scenarios;

    #[test]
    fn stacked_comparison_starts_with_baseline() {
        let rows = stacked_comparison(&Baseline::default(), &reference_scenarios());
        let names: Vec<_> = rows.iter().map(|row| row.name.as_str()).collect();
        assert_eq!(names, ["Baseline", "Conservative", "Average", "Best Case"]);
        assert_eq!(rows[0].rough_cut_hours, 48.0);
        assert_eq!(rows[0].other_stage_hours, 36.0);
        assert_eq!(rows[1].rough_cut_hours, 24.0);
        assert_eq!(rows[1].other_stage_hours, 27.0);
    }

    #[test]
    fn projection_covers_each_project_count() {
        let rows = rough_cut_projection(&Baseline::default(), &reference_scenarios(), 4);
        let counts: Vec<_> = rows.iter().map(|row| row.projects).collect();
        assert_eq!(counts, [1, 2, 3, 4]);
        assert_eq!(rows[3].value_for("Conservative"), Some(96.0));
        assert_eq!(rows[0].value_for("Average"), Some(36.0));
        assert_eq!(rows[0].value_for("Missing"), None);
    }

    #[test]
    fn zero_horizon_projection_is_empty() {
        assert!(rough_cut_projection(&Baseline::default(), &reference_scenarios(), 0).is_empty());
    }

    #[test]
    fn workweeks_over_four_projects() {
        let rows = total_time_projection(&reference_scenarios(), 4, 40.0);
        assert_eq!(rows[0].total_time_saved, 168.0);
        assert!((rows[0].workweeks - 4.2).abs() < 1e-9);
        assert!((rows[1].workweeks - 6.3).abs() < 1e-9);
        assert!((rows[2].workweeks - 7.3).abs() < 1e-9);
    }

    #[test]
    fn baseline_distribution_totals_84_hours() {
        let baseline = Baseline::default();
        let distribution = StageDistribution::new(BASELINE_LABEL, &baseline.hours, 12);
        let hours: Vec<_> = distribution.slices.iter().map(|s| s.hours).collect();
        assert_eq!(hours, [48.0, 24.0, 12.0]);
        assert_eq!(distribution.total_hours, 84.0);
        assert_eq!(
            distribution.shares(),
            [
                (Stage::RoughCut, 57),
                (Stage::Feedback, 29),
                (Stage::QcRendering, 14)
            ]
        );
    }

    #[test]
    fn empty_distribution_has_zero_shares() {
        let distribution = StageDistribution::new("Idle", &StageHours::new(0.0, 0.0, 0.0), 12);
        assert!(distribution.shares().iter().all(|(_, share)| *share == 0));
    }
}
