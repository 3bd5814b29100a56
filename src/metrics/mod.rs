//! Scenario metrics calculator.
//!
//! [`compute_dashboard`] takes a baseline, an ordered list of scenarios and
//! projection settings, validates them, and derives every table and chart
//! series the report writers consume. The computation is a single synchronous
//! pass with no side effects beyond tracing.
//!
//! ```rust
//! use roughcut::core::{reference_scenarios, Baseline};
//! use roughcut::metrics::{compute_dashboard, ProjectionSettings};
//!
//! let dashboard = compute_dashboard(
//!     &Baseline::default(),
//!     &reference_scenarios(),
//!     &ProjectionSettings::default(),
//! )
//! .unwrap();
//! assert_eq!(dashboard.summary[1].hours_saved_per_project, 36.0);
//! ```

pub mod calculator;
pub mod series;

pub use calculator::{
    percentage, rough_cut_contribution_pct, rough_cut_reduction_pct,
    rough_cut_saved_across_projects, rough_cut_saved_per_deliverable, rough_cut_saved_per_project,
    round_half_up, SavingsBreakdown, ScenarioSummary,
};
pub use series::{
    rough_cut_projection, stacked_comparison, total_time_projection, ProjectionPoint,
    ProjectionRow, StackedComparisonRow, StageDistribution, StageSlice, TotalTimeProjection,
    BASELINE_LABEL,
};

use serde::Serialize;
use std::collections::HashSet;
use tracing::{debug, debug_span, warn};

use crate::core::{Baseline, Error, Result, Scenario};

/// Horizon and presentation knobs that are not part of the scenario data
#[derive(Debug, Clone, PartialEq)]
pub struct ProjectionSettings {
    /// Largest project count in the multi-project projection
    pub projects: u32,
    pub hours_per_workweek: f64,
    /// Scenario whose stage distribution is shown next to the baseline's
    pub focus_scenario: Option<String>,
}

impl Default for ProjectionSettings {
    fn default() -> Self {
        Self {
            projects: 4,
            hours_per_workweek: 40.0,
            focus_scenario: Some("Average".to_string()),
        }
    }
}

impl ProjectionSettings {
    pub fn validate(&self) -> Result<()> {
        if self.projects == 0 {
            return Err(Error::validation("projection must cover at least one project"));
        }
        if !self.hours_per_workweek.is_finite() || self.hours_per_workweek <= 0.0 {
            return Err(Error::validation(format!(
                "hours per workweek must be greater than zero, got {}",
                self.hours_per_workweek
            )));
        }
        Ok(())
    }
}

/// Baseline figures echoed into the report header
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct BaselineSummary {
    pub deliverables: u32,
    pub rough_cut_hours: f64,
    pub feedback_hours: f64,
    pub qc_hours: f64,
    pub total_hours_per_deliverable: f64,
    pub total_hours_per_project: f64,
}

impl From<&Baseline> for BaselineSummary {
    fn from(baseline: &Baseline) -> Self {
        Self {
            deliverables: baseline.deliverables,
            rough_cut_hours: baseline.hours.rough_cut_hours,
            feedback_hours: baseline.hours.feedback_hours,
            qc_hours: baseline.hours.qc_hours,
            total_hours_per_deliverable: baseline.total_hours_per_deliverable(),
            total_hours_per_project: baseline.total_hours_per_project(),
        }
    }
}

/// Everything a writer needs to render the rough cut dashboard
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Dashboard {
    pub baseline: BaselineSummary,
    pub summary: Vec<ScenarioSummary>,
    pub stacked_comparison: Vec<StackedComparisonRow>,
    pub savings_breakdown: Vec<SavingsBreakdown>,
    pub rough_cut_projection: Vec<ProjectionRow>,
    pub total_time_projection: Vec<TotalTimeProjection>,
    pub baseline_distribution: StageDistribution,
    pub focus_distribution: Option<StageDistribution>,
}

impl Dashboard {
    pub fn scenario_names(&self) -> impl Iterator<Item = &str> {
        self.summary.iter().map(|row| row.name.as_str())
    }
}

/// Reject anything that would divide by zero or make the output ambiguous.
pub fn validate_inputs(
    baseline: &Baseline,
    scenarios: &[Scenario],
    settings: &ProjectionSettings,
) -> Result<()> {
    baseline.validate()?;
    if scenarios.is_empty() {
        return Err(Error::validation("at least one scenario is required"));
    }
    scenarios.iter().try_for_each(Scenario::validate)?;

    let mut seen = HashSet::new();
    if let Some(duplicate) = scenarios.iter().find(|s| !seen.insert(s.name.as_str())) {
        return Err(Error::validation(format!(
            "scenario '{}' is defined more than once",
            duplicate.name
        )));
    }

    settings.validate()
}

pub fn compute_dashboard(
    baseline: &Baseline,
    scenarios: &[Scenario],
    settings: &ProjectionSettings,
) -> Result<Dashboard> {
    let _span = debug_span!("compute_dashboard", scenarios = scenarios.len()).entered();
    validate_inputs(baseline, scenarios, settings)?;

    let summary: Vec<ScenarioSummary> = scenarios
        .iter()
        .map(|scenario| ScenarioSummary::derive(baseline, scenario))
        .collect();
    let savings_breakdown = scenarios
        .iter()
        .map(|scenario| SavingsBreakdown::derive(baseline, scenario))
        .collect();

    let focus_distribution = settings.focus_scenario.as_deref().and_then(|name| {
        match scenarios.iter().find(|scenario| scenario.name == name) {
            Some(scenario) => Some(StageDistribution::new(
                &scenario.name,
                &scenario.hours,
                baseline.deliverables,
            )),
            None => {
                warn!(focus = name, "Focus scenario not found; skipping its distribution");
                None
            }
        }
    });

    for row in &summary {
        debug!(
            scenario = %row.name,
            reduction_pct = row.rough_cut_reduction_pct,
            saved_per_project = row.hours_saved_per_project,
            contribution_pct = row.rough_cut_contribution_pct,
            "Derived scenario metrics"
        );
    }

    Ok(Dashboard {
        baseline: BaselineSummary::from(baseline),
        stacked_comparison: stacked_comparison(baseline, scenarios),
        savings_breakdown,
        rough_cut_projection: rough_cut_projection(baseline, scenarios, settings.projects),
        total_time_projection: total_time_projection(
            scenarios,
            settings.projects,
            settings.hours_per_workweek,
        ),
        baseline_distribution: StageDistribution::new(
            BASELINE_LABEL,
            &baseline.hours,
            baseline.deliverables,
        ),
        focus_distribution,
        summary,
    })
}
