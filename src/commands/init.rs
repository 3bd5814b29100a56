use crate::config::CONFIG_FILE_NAME;
use crate::io;
use anyhow::Result;
use std::path::{Path, PathBuf};

pub const DEFAULT_CONFIG: &str = r#"# Rough cut optimization dashboard configuration

[baseline]
deliverables = 12
rough_cut_hours = 4.0
feedback_hours = 2.0
qc_hours = 1.0

# total_time_saved_per_project is an estimate across all stages and is
# reported as given; it is not recomputed from the stage hours.
[[scenarios]]
name = "Conservative"
rough_cut_hours = 2.0
feedback_hours = 1.5
qc_hours = 0.75
total_time_saved_per_project = 42.0

[[scenarios]]
name = "Average"
rough_cut_hours = 1.0
feedback_hours = 1.0
qc_hours = 0.5
total_time_saved_per_project = 63.0

[[scenarios]]
name = "Best Case"
rough_cut_hours = 0.4
feedback_hours = 0.5
qc_hours = 0.25
total_time_saved_per_project = 73.0

[projection]
projects = 4
hours_per_workweek = 40.0
focus_scenario = "Average"
"#;

pub fn init_config(force: bool) -> Result<()> {
    let config_path = PathBuf::from(CONFIG_FILE_NAME);
    init_config_at(&config_path, force)?;
    println!("Created {CONFIG_FILE_NAME} configuration file");
    Ok(())
}

pub fn init_config_at(config_path: &Path, force: bool) -> Result<()> {
    if io::file_exists(config_path) && !force {
        anyhow::bail!("Configuration file already exists. Use --force to overwrite.");
    }

    io::write_file(config_path, DEFAULT_CONFIG)?;
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::{parse_config, RoughcutConfig};
    use tempfile::TempDir;

    #[test]
    fn template_parses_to_reference_data() {
        assert_eq!(parse_config(DEFAULT_CONFIG).unwrap(), RoughcutConfig::default());
    }

    #[test]
    fn refuses_to_overwrite_without_force() {
        let dir = TempDir::new().unwrap();
        let path = dir.path().join(CONFIG_FILE_NAME);
        std::fs::write(&path, "# mine").unwrap();

        assert!(init_config_at(&path, false).is_err());
        assert_eq!(std::fs::read_to_string(&path).unwrap(), "# mine");

        init_config_at(&path, true).unwrap();
        assert_eq!(std::fs::read_to_string(&path).unwrap(), DEFAULT_CONFIG);
    }
}
