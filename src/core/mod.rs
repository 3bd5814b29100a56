//! Domain types shared by the calculator, configuration and writers.

pub mod errors;
pub mod types;

pub use errors::{Error, Result};
pub use types::{reference_scenarios, Baseline, Scenario, Stage, StageHours};
