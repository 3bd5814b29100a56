use anyhow::{Context, Result};
use std::path::PathBuf;
use tracing::info;

use crate::cli::OutputFormat;
use crate::config::{self, RoughcutConfig};
use crate::formatting::FormattingConfig;
use crate::io;
use crate::metrics::{compute_dashboard, Dashboard};

pub struct ReportConfig {
    pub config_path: Option<PathBuf>,
    pub format: OutputFormat,
    pub output: Option<PathBuf>,
    pub projects: Option<u32>,
    pub focus: Option<String>,
    pub formatting_config: FormattingConfig,
}

/// Command-line overrides applied on top of the loaded configuration
pub fn apply_overrides(
    mut config: RoughcutConfig,
    projects: Option<u32>,
    focus: Option<String>,
) -> RoughcutConfig {
    if let Some(projects) = projects {
        config.projection.projects = projects;
    }
    if let Some(focus) = focus {
        config.set_focus(focus);
    }
    config
}

pub fn build_dashboard(config: &RoughcutConfig) -> crate::core::Result<Dashboard> {
    compute_dashboard(
        &config.baseline(),
        &config.scenarios(),
        &config.projection_settings(),
    )
}

pub fn handle_report(report: ReportConfig) -> Result<()> {
    let loaded = config::resolve_config(report.config_path.as_deref())
        .context("Failed to load configuration")?;
    let config = apply_overrides(loaded, report.projects, report.focus);

    let dashboard = build_dashboard(&config).context("Failed to compute dashboard")?;
    info!(
        scenarios = dashboard.summary.len(),
        projects = config.projection.projects,
        format = ?report.format,
        "Computed rough cut dashboard"
    );

    let mut writer = io::create_writer(
        report.format,
        report.output.as_deref(),
        report.formatting_config,
    )?;
    writer.write_dashboard(&dashboard)?;

    if let Some(path) = &report.output {
        info!(path = %path.display(), "Report written");
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn overrides_replace_projection_values() {
        let config = apply_overrides(RoughcutConfig::default(), Some(8), Some("Best Case".into()));
        assert_eq!(config.projection.projects, 8);
        assert_eq!(config.projection.focus_scenario.as_deref(), Some("Best Case"));
    }

    #[test]
    fn blank_focus_override_disables_focus() {
        let config = apply_overrides(RoughcutConfig::default(), None, Some(String::new()));
        assert_eq!(config.projection.focus_scenario, None);
        let dashboard = build_dashboard(&config).unwrap();
        assert!(dashboard.focus_distribution.is_none());
    }

    #[test]
    fn absent_overrides_keep_config() {
        let config = apply_overrides(RoughcutConfig::default(), None, None);
        assert_eq!(config, RoughcutConfig::default());
    }

    #[test]
    fn report_written_to_file() {
        let dir = tempfile::TempDir::new().unwrap();
        let config_path = dir.path().join("roughcut.toml");
        std::fs::write(&config_path, "[projection]\nprojects = 2\n").unwrap();
        let output = dir.path().join("report.json");

        handle_report(ReportConfig {
            config_path: Some(config_path),
            format: OutputFormat::Json,
            output: Some(output.clone()),
            projects: None,
            focus: None,
            formatting_config: FormattingConfig::plain(),
        })
        .unwrap();

        let json: serde_json::Value =
            serde_json::from_str(&std::fs::read_to_string(output).unwrap()).unwrap();
        assert_eq!(json["rough_cut_projection"].as_array().unwrap().len(), 2);
    }
}
