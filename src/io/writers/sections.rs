//! Tabular views of a [`Dashboard`], shared by the markdown and terminal writers.

use crate::formatting::{format_hours, format_pct};
use crate::metrics::{Dashboard, StageDistribution};

pub const REPORT_TITLE: &str = "Rough Cut Optimization Analysis";

/// A titled table of already-formatted cells
#[derive(Debug, Clone, PartialEq)]
pub struct Section {
    pub title: String,
    pub headers: Vec<String>,
    pub rows: Vec<Vec<String>>,
}

impl Section {
    fn new(title: impl Into<String>, headers: &[&str]) -> Self {
        Self {
            title: title.into(),
            headers: headers.iter().map(|h| h.to_string()).collect(),
            rows: Vec::new(),
        }
    }

    fn row(mut self, cells: Vec<String>) -> Self {
        self.rows.push(cells);
        self
    }
}

pub fn subtitle(dashboard: &Dashboard) -> String {
    format!(
        "Focus on eliminating rough cut editing time across {} deliverables per project",
        dashboard.baseline.deliverables
    )
}

/// Sections in report order
pub fn report_sections(dashboard: &Dashboard) -> Vec<Section> {
    let mut sections = vec![
        baseline_section(dashboard),
        stacked_comparison_section(dashboard),
        savings_breakdown_section(dashboard),
        distribution_section("3a. Time Distribution", &dashboard.baseline_distribution),
    ];
    if let Some(focus) = &dashboard.focus_distribution {
        sections.push(distribution_section("3b. Time Distribution", focus));
    }
    sections.push(projection_section(dashboard));
    sections.push(total_time_section(dashboard));
    sections.push(summary_section(dashboard));
    sections
}

fn baseline_section(dashboard: &Dashboard) -> Section {
    let b = &dashboard.baseline;
    Section::new("Baseline", &["Metric", "Value"])
        .row(vec!["Deliverables per project".into(), b.deliverables.to_string()])
        .row(vec!["Rough cut hours".into(), format_hours(b.rough_cut_hours)])
        .row(vec!["Feedback hours".into(), format_hours(b.feedback_hours)])
        .row(vec!["QC & rendering hours".into(), format_hours(b.qc_hours)])
        .row(vec![
            "Hours per deliverable".into(),
            format_hours(b.total_hours_per_deliverable),
        ])
        .row(vec![
            "Hours per project".into(),
            format_hours(b.total_hours_per_project),
        ])
}

fn stacked_comparison_section(dashboard: &Dashboard) -> Section {
    dashboard.stacked_comparison.iter().fold(
        Section::new(
            "1. Rough Cut Hours: Baseline vs Tool-Assisted Scenarios",
            &["Scenario", "Rough Cut Hours", "Other Stages Hours"],
        ),
        |section, row| {
            section.row(vec![
                row.name.clone(),
                format_hours(row.rough_cut_hours),
                format_hours(row.other_stage_hours),
            ])
        },
    )
}

fn savings_breakdown_section(dashboard: &Dashboard) -> Section {
    dashboard.savings_breakdown.iter().fold(
        Section::new(
            "2. Contribution of Rough Cut Savings to Total Time Saved",
            &[
                "Scenario",
                "Rough Cut Savings",
                "Other Stages Savings",
                "Total Saved",
                "Rough Cut Share",
                "Other Share",
            ],
        ),
        |section, row| {
            section.row(vec![
                row.name.clone(),
                format_hours(row.rough_cut_savings),
                format_hours(row.other_savings),
                format_hours(row.total_saved),
                format_pct(row.rough_cut_pct),
                format_pct(row.other_pct),
            ])
        },
    )
}

fn distribution_section(prefix: &str, distribution: &StageDistribution) -> Section {
    let shares = distribution.shares();
    let section = distribution.slices.iter().zip(shares).fold(
        Section::new(
            format!("{prefix}: {}", distribution.name),
            &["Stage", "Hours", "Share"],
        ),
        |section, (slice, (_, share))| {
            section.row(vec![
                slice.label.to_string(),
                format_hours(slice.hours),
                format_pct(share),
            ])
        },
    );
    section.row(vec![
        "Total".into(),
        format_hours(distribution.total_hours),
        String::new(),
    ])
}

fn projection_section(dashboard: &Dashboard) -> Section {
    let mut headers = vec!["Projects"];
    headers.extend(dashboard.scenario_names());
    dashboard.rough_cut_projection.iter().fold(
        Section::new("4. Rough Cut Hours Saved Across Projects", &headers),
        |section, row| {
            let mut cells = vec![row.projects.to_string()];
            cells.extend(row.values.iter().map(|p| format_hours(p.hours_saved)));
            section.row(cells)
        },
    )
}

fn total_time_section(dashboard: &Dashboard) -> Section {
    let projects = dashboard
        .total_time_projection
        .first()
        .map_or(0, |row| row.projects);
    dashboard.total_time_projection.iter().fold(
        Section::new(
            format!("5. Total Time Saved Over {projects} Projects"),
            &["Scenario", "Hours Saved", "Work Weeks"],
        ),
        |section, row| {
            section.row(vec![
                row.name.clone(),
                format_hours(row.total_time_saved),
                format!("{:.1}", row.workweeks),
            ])
        },
    )
}

fn summary_section(dashboard: &Dashboard) -> Section {
    dashboard.summary.iter().fold(
        Section::new(
            "Rough Cut Efficiency Summary",
            &[
                "Scenario",
                "Rough Cut Reduction",
                "Hours per Deliverable",
                "Rough Cut Hours Saved",
                "% of Total Time Saved",
            ],
        ),
        |section, row| {
            section.row(vec![
                row.name.clone(),
                format_pct(row.rough_cut_reduction_pct),
                format!("{} hrs", format_hours(row.hours_per_deliverable)),
                format!("{} hrs/project", format_hours(row.hours_saved_per_project)),
                format_pct(row.rough_cut_contribution_pct),
            ])
        },
    )
}
