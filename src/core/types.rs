use serde::{Deserialize, Serialize};
use std::fmt;

use super::errors::{Error, Result};

/// Pipeline stage a deliverable passes through
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Stage {
    RoughCut,
    Feedback,
    QcRendering,
}

impl Stage {
    /// All stages in pipeline order
    pub const ALL: [Stage; 3] = [Stage::RoughCut, Stage::Feedback, Stage::QcRendering];

    pub fn label(&self) -> &'static str {
        match self {
            Stage::RoughCut => "Rough Cut",
            Stage::Feedback => "Feedback",
            Stage::QcRendering => "QC & Rendering",
        }
    }
}

impl fmt::Display for Stage {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}

/// Per-deliverable hours spent at each stage
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct StageHours {
    pub rough_cut_hours: f64,
    pub feedback_hours: f64,
    pub qc_hours: f64,
}

impl StageHours {
    pub fn new(rough_cut_hours: f64, feedback_hours: f64, qc_hours: f64) -> Self {
        Self {
            rough_cut_hours,
            feedback_hours,
            qc_hours,
        }
    }

    pub fn get(&self, stage: Stage) -> f64 {
        match stage {
            Stage::RoughCut => self.rough_cut_hours,
            Stage::Feedback => self.feedback_hours,
            Stage::QcRendering => self.qc_hours,
        }
    }

    /// Hours outside the rough cut (feedback plus QC)
    pub fn other_stage_hours(&self) -> f64 {
        self.feedback_hours + self.qc_hours
    }

    pub fn total(&self) -> f64 {
        self.rough_cut_hours + self.feedback_hours + self.qc_hours
    }

    fn validate(&self, owner: &str) -> Result<()> {
        Stage::ALL.iter().try_for_each(|&stage| {
            let hours = self.get(stage);
            if !hours.is_finite() || hours < 0.0 {
                Err(Error::validation(format!(
                    "{owner}: {} hours must be a non-negative number, got {hours}",
                    stage.label()
                )))
            } else {
                Ok(())
            }
        })
    }
}

/// Current-state workload every scenario is measured against
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct Baseline {
    pub deliverables: u32,
    #[serde(flatten)]
    pub hours: StageHours,
}

impl Default for Baseline {
    fn default() -> Self {
        Self {
            deliverables: 12,
            hours: StageHours::new(4.0, 2.0, 1.0),
        }
    }
}

impl Baseline {
    pub fn new(deliverables: u32, hours: StageHours) -> Self {
        Self {
            deliverables,
            hours,
        }
    }

    pub fn rough_cut_hours(&self) -> f64 {
        self.hours.rough_cut_hours
    }

    pub fn total_hours_per_deliverable(&self) -> f64 {
        self.hours.total()
    }

    pub fn total_hours_per_project(&self) -> f64 {
        self.hours.total() * f64::from(self.deliverables)
    }

    /// Rough-cut hours divide every reduction ratio, so zero is rejected here.
    pub fn validate(&self) -> Result<()> {
        self.hours.validate("baseline")?;
        if self.hours.rough_cut_hours <= 0.0 {
            return Err(Error::validation(format!(
                "baseline rough cut hours must be greater than zero, got {}",
                self.hours.rough_cut_hours
            )));
        }
        Ok(())
    }
}

/// Named hypothetical improvement level
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Scenario {
    pub name: String,
    #[serde(flatten)]
    pub hours: StageHours,
    /// Multi-stage saving estimate, supplied rather than derived from the
    /// stage deltas.
    pub total_time_saved_per_project: f64,
}

impl Scenario {
    pub fn new(name: impl Into<String>, hours: StageHours, total_time_saved_per_project: f64) -> Self {
        Self {
            name: name.into(),
            hours,
            total_time_saved_per_project,
        }
    }

    pub fn rough_cut_hours(&self) -> f64 {
        self.hours.rough_cut_hours
    }

    pub fn validate(&self) -> Result<()> {
        if self.name.trim().is_empty() {
            return Err(Error::validation("scenario name must not be empty"));
        }
        self.hours.validate(&format!("scenario '{}'", self.name))?;
        let total = self.total_time_saved_per_project;
        if !total.is_finite() || total <= 0.0 {
            return Err(Error::validation(format!(
                "scenario '{}': total time saved per project must be greater than zero, got {total}",
                self.name
            )));
        }
        Ok(())
    }
}

/// Reference scenarios: Conservative, Average and Best Case
pub fn reference_scenarios() -> Vec<Scenario> {
    vec![
        Scenario::new("Conservative", StageHours::new(2.0, 1.5, 0.75), 42.0),
        Scenario::new("Average", StageHours::new(1.0, 1.0, 0.5), 63.0),
        Scenario::new("Best Case", StageHours::new(0.4, 0.5, 0.25), 73.0),
    ]
}
