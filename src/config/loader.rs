use std::fs;
use std::io::{BufReader, Read};
use std::path::{Path, PathBuf};

use super::core::RoughcutConfig;
use crate::core::{Error, Result};

pub const CONFIG_FILE_NAME: &str = ".roughcut.toml";

const MAX_TRAVERSAL_DEPTH: usize = 10;

/// Pure function to read config file contents
pub(crate) fn read_config_file(path: &Path) -> std::io::Result<String> {
    let file = fs::File::open(path)?;
    let mut reader = BufReader::new(file);
    let mut contents = String::new();
    reader.read_to_string(&mut contents)?;
    Ok(contents)
}

/// Parse config from a TOML string. Values are not validated here; the
/// calculator rejects invalid inputs when the dashboard is computed.
pub fn parse_config(contents: &str) -> Result<RoughcutConfig> {
    let config = toml::from_str::<RoughcutConfig>(contents)?;
    Ok(config.resolve_focus())
}

/// Load a config file the user pointed at explicitly. Any failure is an error.
pub fn load_config_from_path(path: &Path) -> Result<RoughcutConfig> {
    let contents = read_config_file(path).map_err(|e| {
        Error::configuration_with_path(format!("cannot read {}: {e}", path.display()), path)
    })?;
    parse_config(&contents).map_err(|e| {
        Error::configuration_with_path(format!("cannot parse {}: {e}", path.display()), path)
    })
}

/// Pure function to try loading config from a discovered path
pub(crate) fn try_load_config_from_path(config_path: &Path) -> Option<RoughcutConfig> {
    let contents = match read_config_file(config_path) {
        Ok(contents) => contents,
        Err(e) => {
            handle_read_error(config_path, &e);
            return None;
        }
    };

    match parse_config(&contents) {
        Ok(config) => {
            log::debug!("Loaded config from {}", config_path.display());
            Some(config)
        }
        Err(e) => {
            log::warn!(
                "Ignoring invalid config {}: {}. Using defaults.",
                config_path.display(),
                e
            );
            None
        }
    }
}

/// Handle file read errors with appropriate logging
pub(crate) fn handle_read_error(config_path: &Path, error: &std::io::Error) {
    // Only log actual errors, not "file not found"
    if error.kind() != std::io::ErrorKind::NotFound {
        log::warn!(
            "Failed to read config file {}: {}",
            config_path.display(),
            error
        );
    }
}

/// Pure function to generate directory ancestors up to a depth limit
pub fn directory_ancestors(start: PathBuf, max_depth: usize) -> impl Iterator<Item = PathBuf> {
    std::iter::successors(Some(start), |dir| {
        let mut parent = dir.clone();
        if parent.pop() {
            Some(parent)
        } else {
            None
        }
    })
    .take(max_depth)
}

/// Search `start` and its ancestors for a config file
pub fn discover_config_from(start: PathBuf) -> Option<RoughcutConfig> {
    directory_ancestors(start, MAX_TRAVERSAL_DEPTH)
        .map(|dir| dir.join(CONFIG_FILE_NAME))
        .find_map(|path| try_load_config_from_path(&path))
}

pub fn load_config() -> RoughcutConfig {
    // Get current directory or return default
    let current = match std::env::current_dir() {
        Ok(dir) => dir,
        Err(e) => {
            log::warn!(
                "Failed to get current directory: {}. Using default config.",
                e
            );
            return RoughcutConfig::default();
        }
    };

    discover_config_from(current).unwrap_or_else(|| {
        log::debug!(
            "No config found after checking {} directories. Using reference data.",
            MAX_TRAVERSAL_DEPTH
        );
        RoughcutConfig::default()
    })
}

/// Explicit path wins; otherwise discover; otherwise reference data.
pub fn resolve_config(explicit: Option<&Path>) -> Result<RoughcutConfig> {
    match explicit {
        Some(path) => load_config_from_path(path),
        None => Ok(load_config()),
    }
}
