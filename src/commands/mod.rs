//! CLI command implementations.
//!
//! - **report**: compute the dashboard and render it as terminal, markdown or JSON
//! - **init**: write a `.roughcut.toml` holding the reference data
//! - **validate**: load configuration and check it without rendering

pub mod init;
pub mod report;
pub mod validate;

pub use init::init_config;
pub use report::{handle_report, ReportConfig};
pub use validate::{validate_config, ValidateConfig, ValidationDetails};
