//! Configuration for the rough cut dashboard.
//!
//! Values come from `.roughcut.toml` when one is given or discovered, and
//! fall back field-by-field to the reference data otherwise.

pub mod core;
pub mod loader;

pub use self::core::{BaselineConfig, ProjectionConfig, RoughcutConfig, ScenarioConfig};
pub use loader::{
    directory_ancestors, discover_config_from, load_config, load_config_from_path, parse_config,
    resolve_config, CONFIG_FILE_NAME,
};
