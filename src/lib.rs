// Export modules for library usage
pub mod cli;
pub mod commands;
pub mod config;
pub mod core;
pub mod formatting;
pub mod io;
pub mod metrics;
pub mod observability;

// Re-export commonly used types
pub use crate::core::{reference_scenarios, Baseline, Error, Result, Scenario, Stage, StageHours};

pub use crate::metrics::{
    compute_dashboard, Dashboard, ProjectionRow, ProjectionSettings, SavingsBreakdown,
    ScenarioSummary, StackedComparisonRow, StageDistribution, TotalTimeProjection,
};

pub use crate::config::{load_config, RoughcutConfig};

pub use crate::io::output::{create_writer, OutputWriter};
