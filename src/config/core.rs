use serde::Deserialize;

use crate::core::{reference_scenarios, Baseline, Scenario, StageHours};
use crate::metrics::ProjectionSettings;

/// Root configuration structure for roughcut
#[derive(Debug, Clone, PartialEq, Deserialize)]
pub struct RoughcutConfig {
    /// Current-state workload
    #[serde(default)]
    pub baseline: BaselineConfig,

    /// Improvement scenarios, in display order
    #[serde(default = "default_scenarios")]
    pub scenarios: Vec<ScenarioConfig>,

    /// Projection horizon and focus scenario
    #[serde(default)]
    pub projection: ProjectionConfig,
}

impl Default for RoughcutConfig {
    fn default() -> Self {
        Self {
            baseline: BaselineConfig::default(),
            scenarios: default_scenarios(),
            projection: ProjectionConfig {
                focus_scenario: default_focus_scenario(),
                ..ProjectionConfig::default()
            },
        }
    }
}

impl RoughcutConfig {
    /// Settle the focus scenario once the file has been read. A blank name
    /// turns the focus distribution off. With no name at all, the reference
    /// scenarios focus on "Average" and a custom scenario list has no focus.
    pub fn resolve_focus(mut self) -> Self {
        self.projection.focus_scenario = match self.projection.focus_scenario.take() {
            Some(name) => non_blank(name),
            None if self.scenarios == default_scenarios() => default_focus_scenario(),
            None => None,
        };
        self
    }

    /// Replace the focus scenario; a blank name clears it.
    pub fn set_focus(&mut self, name: String) {
        self.projection.focus_scenario = non_blank(name);
    }

    pub fn baseline(&self) -> Baseline {
        Baseline::new(
            self.baseline.deliverables,
            StageHours::new(
                self.baseline.rough_cut_hours,
                self.baseline.feedback_hours,
                self.baseline.qc_hours,
            ),
        )
    }

    pub fn scenarios(&self) -> Vec<Scenario> {
        self.scenarios.iter().map(ScenarioConfig::to_scenario).collect()
    }

    pub fn projection_settings(&self) -> ProjectionSettings {
        ProjectionSettings {
            projects: self.projection.projects,
            hours_per_workweek: self.projection.hours_per_workweek,
            focus_scenario: self.projection.focus_scenario.clone(),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Deserialize)]
pub struct BaselineConfig {
    #[serde(default = "default_deliverables")]
    pub deliverables: u32,

    #[serde(default = "default_rough_cut_hours")]
    pub rough_cut_hours: f64,

    #[serde(default = "default_feedback_hours")]
    pub feedback_hours: f64,

    #[serde(default = "default_qc_hours")]
    pub qc_hours: f64,
}

impl Default for BaselineConfig {
    fn default() -> Self {
        Self {
            deliverables: default_deliverables(),
            rough_cut_hours: default_rough_cut_hours(),
            feedback_hours: default_feedback_hours(),
            qc_hours: default_qc_hours(),
        }
    }
}

/// A scenario entry; every field is required
#[derive(Debug, Clone, PartialEq, Deserialize)]
pub struct ScenarioConfig {
    pub name: String,
    pub rough_cut_hours: f64,
    pub feedback_hours: f64,
    pub qc_hours: f64,
    pub total_time_saved_per_project: f64,
}

impl ScenarioConfig {
    pub fn to_scenario(&self) -> Scenario {
        Scenario::new(
            self.name.clone(),
            StageHours::new(self.rough_cut_hours, self.feedback_hours, self.qc_hours),
            self.total_time_saved_per_project,
        )
    }
}

impl From<&Scenario> for ScenarioConfig {
    fn from(scenario: &Scenario) -> Self {
        Self {
            name: scenario.name.clone(),
            rough_cut_hours: scenario.hours.rough_cut_hours,
            feedback_hours: scenario.hours.feedback_hours,
            qc_hours: scenario.hours.qc_hours,
            total_time_saved_per_project: scenario.total_time_saved_per_project,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Deserialize)]
pub struct ProjectionConfig {
    #[serde(default = "default_projects")]
    pub projects: u32,

    #[serde(default = "default_hours_per_workweek")]
    pub hours_per_workweek: f64,

    /// `None` when the file leaves it out; see [`RoughcutConfig::resolve_focus`]
    #[serde(default)]
    pub focus_scenario: Option<String>,
}

impl Default for ProjectionConfig {
    fn default() -> Self {
        Self {
            projects: default_projects(),
            hours_per_workweek: default_hours_per_workweek(),
            focus_scenario: None,
        }
    }
}

fn non_blank(name: String) -> Option<String> {
    if name.trim().is_empty() {
        None
    } else {
        Some(name)
    }
}

fn default_deliverables() -> u32 {
    12
}

fn default_rough_cut_hours() -> f64 {
    4.0
}

fn default_feedback_hours() -> f64 {
    2.0
}

fn default_qc_hours() -> f64 {
    1.0
}

fn default_scenarios() -> Vec<ScenarioConfig> {
    reference_scenarios().iter().map(ScenarioConfig::from).collect()
}

fn default_projects() -> u32 {
    4
}

fn default_hours_per_workweek() -> f64 {
    40.0
}

fn default_focus_scenario() -> Option<String> {
    Some("Average".to_string())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn defaults_match_reference_data() {
        let config = RoughcutConfig::default();
        assert_eq!(config.baseline(), Baseline::default());
        assert_eq!(config.scenarios(), reference_scenarios());
        assert_eq!(config.projection_settings(), ProjectionSettings::default());
    }

    #[test]
    fn blank_focus_clears_focus() {
        let mut config = RoughcutConfig::default();
        config.set_focus("  ".to_string());
        assert_eq!(config.projection.focus_scenario, None);

        config.set_focus("Best Case".to_string());
        assert_eq!(config.projection.focus_scenario.as_deref(), Some("Best Case"));
    }

    #[test]
    fn unset_focus_resolves_against_scenario_list() {
        let reference = RoughcutConfig {
            projection: ProjectionConfig::default(),
            ..RoughcutConfig::default()
        }
        .resolve_focus();
        assert_eq!(reference.projection.focus_scenario.as_deref(), Some("Average"));

        let custom = RoughcutConfig {
            scenarios: default_scenarios().into_iter().take(1).collect(),
            projection: ProjectionConfig::default(),
            ..RoughcutConfig::default()
        }
        .resolve_focus();
        assert_eq!(custom.projection.focus_scenario, None);
    }
}
