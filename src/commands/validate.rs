use anyhow::{Context, Result};
use std::path::PathBuf;
use tracing::debug;

use super::report::build_dashboard;
use crate::config;
use crate::formatting::format_hours;

pub struct ValidateConfig {
    pub config_path: Option<PathBuf>,
}

/// Outcome of a successful validation
#[derive(Debug, Clone, PartialEq)]
pub struct ValidationDetails {
    pub scenario_count: usize,
    pub baseline_hours_per_project: f64,
    pub projects: u32,
}

impl ValidationDetails {
    pub fn summary_line(&self) -> String {
        format!(
            "Configuration valid: {} scenario(s), baseline {} hrs/project, projection over {} project(s)",
            self.scenario_count,
            format_hours(self.baseline_hours_per_project),
            self.projects
        )
    }
}

pub fn check_config(validate: &ValidateConfig) -> Result<ValidationDetails> {
    let config = config::resolve_config(validate.config_path.as_deref())
        .context("Failed to load configuration")?;
    let dashboard = build_dashboard(&config).context("Configuration is invalid")?;
    debug!(scenarios = dashboard.summary.len(), "Configuration validated");

    Ok(ValidationDetails {
        scenario_count: dashboard.summary.len(),
        baseline_hours_per_project: dashboard.baseline.total_hours_per_project,
        projects: config.projection.projects,
    })
}

pub fn validate_config(validate: ValidateConfig) -> Result<()> {
    let details = check_config(&validate)?;
    println!("{}", details.summary_line());
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use indoc::indoc;
    use tempfile::TempDir;

    fn write_config(contents: &str) -> (TempDir, PathBuf) {
        let dir = TempDir::new().unwrap();
        let path = dir.path().join("roughcut.toml");
        std::fs::write(&path, contents).unwrap();
        (dir, path)
    }

    #[test]
    fn reference_config_is_valid() {
        let (_dir, path) = write_config("");
        let details = check_config(&ValidateConfig {
            config_path: Some(path),
        })
        .unwrap();
        assert_eq!(details.scenario_count, 3);
        assert_eq!(
            details.summary_line(),
            "Configuration valid: 3 scenario(s), baseline 84 hrs/project, projection over 4 project(s)"
        );
    }

    #[test]
    fn zero_baseline_rough_cut_fails() {
        let (_dir, path) = write_config(indoc! {r#"
            [baseline]
            rough_cut_hours = 0
        "#});
        let err = check_config(&ValidateConfig {
            config_path: Some(path),
        })
        .unwrap_err();
        assert!(format!("{err:#}").contains("greater than zero"));
    }

    #[test]
    fn empty_scenario_list_fails() {
        let (_dir, path) = write_config("scenarios = []\n");
        let err = check_config(&ValidateConfig {
            config_path: Some(path),
        })
        .unwrap_err();
        assert!(format!("{err:#}").contains("at least one scenario"));
    }
}
